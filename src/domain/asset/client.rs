//! Assets sub-client — creator enumeration.

use crate::client::HeliusClient;
use crate::domain::asset::{collect_assets, AssetQuery};
use crate::error::Error;
use crate::shared::AssetId;
use crate::store::AddressStore;

/// Sub-client for asset queries.
pub struct Assets<'a> {
    pub(crate) client: &'a HeliusClient,
}

impl<'a> Assets<'a> {
    /// Every asset created by `query.creator`, in indexer page order.
    pub async fn by_creator(&self, query: &AssetQuery) -> Result<Vec<AssetId>, Error> {
        collect_assets(&self.client.http, query).await
    }

    /// Enumerate and persist. The file is only written after the last page
    /// succeeded.
    pub async fn collect_into(
        &self,
        query: &AssetQuery,
        store: &AddressStore,
    ) -> Result<Vec<AssetId>, Error> {
        let ids = self.by_creator(query).await?;
        store.save(&ids)?;
        Ok(ids)
    }
}
