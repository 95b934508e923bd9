//! Webhook domain — wholesale replacement of a webhook's monitored addresses.

pub mod client;
pub mod wire;

use crate::domain::webhook::wire::EditWebhookRequest;
use crate::error::Error;
use crate::shared::AssetId;
use crate::store::AddressStore;
use async_trait::async_trait;

/// Target state of the webhook record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub callback_url: String,
    pub event_types: Vec<String>,
    pub addresses: Vec<AssetId>,
    pub delivery_mode: String,
}

impl From<WebhookConfig> for EditWebhookRequest {
    fn from(config: WebhookConfig) -> Self {
        Self {
            webhook_url: config.callback_url,
            transaction_types: config.event_types,
            account_addresses: config.addresses,
            webhook_type: config.delivery_mode,
        }
    }
}

/// Registrar settings that stay fixed across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub webhook_id: Option<String>,
    pub callback_url: String,
    pub event_types: Vec<String>,
    pub delivery_mode: String,
}

impl WebhookSettings {
    /// Full-replacement config monitoring exactly `addresses`.
    pub fn config_for(&self, addresses: Vec<AssetId>) -> WebhookConfig {
        WebhookConfig {
            callback_url: self.callback_url.clone(),
            event_types: self.event_types.clone(),
            addresses,
            delivery_mode: self.delivery_mode.clone(),
        }
    }
}

/// Outcome of an update. The body is never checked for a success flag.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookUpdate {
    pub webhook_id: Option<String>,
    pub raw: serde_json::Value,
}

/// Anything that accepts a full webhook replacement.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn replace_webhook(
        &self,
        webhook_id: Option<&str>,
        config: WebhookConfig,
    ) -> Result<WebhookUpdate, Error>;
}

/// Push `addresses` as the webhook's complete monitored set.
pub async fn register_webhook<W>(
    sink: &W,
    settings: &WebhookSettings,
    addresses: Vec<AssetId>,
) -> Result<WebhookUpdate, Error>
where
    W: WebhookSink + ?Sized,
{
    let count = addresses.len();
    let update = sink
        .replace_webhook(settings.webhook_id.as_deref(), settings.config_for(addresses))
        .await?;
    tracing::info!(
        addresses = count,
        webhook_id = update.webhook_id.as_deref().unwrap_or("-"),
        "Webhook updated"
    );
    tracing::info!(response = %update.raw, "Webhook response");
    Ok(update)
}

/// Load the persisted collection and register it. Fails before any request
/// when the file is missing or malformed.
pub async fn register_from_store<W>(
    sink: &W,
    settings: &WebhookSettings,
    store: &AddressStore,
) -> Result<WebhookUpdate, Error>
where
    W: WebhookSink + ?Sized,
{
    let addresses = store.load()?;
    register_webhook(sink, settings, addresses).await
}
