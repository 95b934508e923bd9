//! Webhooks sub-client.

use crate::client::HeliusClient;
use crate::domain::webhook::{
    register_from_store, register_webhook, WebhookSettings, WebhookUpdate,
};
use crate::error::Error;
use crate::shared::AssetId;
use crate::store::AddressStore;

pub struct Webhooks<'a> {
    pub(crate) client: &'a HeliusClient,
}

impl<'a> Webhooks<'a> {
    /// Replace the webhook's monitored set with `addresses`.
    pub async fn replace(
        &self,
        settings: &WebhookSettings,
        addresses: Vec<AssetId>,
    ) -> Result<WebhookUpdate, Error> {
        register_webhook(&self.client.http, settings, addresses).await
    }

    /// Replace the webhook's monitored set with the contents of `store`.
    pub async fn replace_from_store(
        &self,
        settings: &WebhookSettings,
        store: &AddressStore,
    ) -> Result<WebhookUpdate, Error> {
        register_from_store(&self.client.http, settings, store).await
    }
}
