//! Asset domain — paginated collection of a creator's assets.

pub mod client;
pub mod wire;

use crate::error::Error;
use crate::shared::{AssetId, PubkeyStr};
use async_trait::async_trait;

/// Largest page the DAS API serves.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// What to enumerate: the creator filter plus fixed per-run paging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    pub creator: PubkeyStr,
    pub page_size: u32,
    pub only_verified: bool,
}

impl AssetQuery {
    pub fn new(creator: PubkeyStr, page_size: u32) -> Self {
        Self {
            creator,
            page_size,
            only_verified: true,
        }
    }

    /// Request for the 1-based `page`.
    pub fn page(&self, page: u32) -> PageRequest<'_> {
        PageRequest {
            creator: &self.creator,
            page,
            limit: self.page_size,
            only_verified: self.only_verified,
        }
    }
}

/// A single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub creator: &'a PubkeyStr,
    pub page: u32,
    pub limit: u32,
    pub only_verified: bool,
}

/// Anything that can serve one page of a creator's assets.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch one page. An empty vector means the page had no items.
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<Vec<AssetId>, Error>;
}

/// Walk pages from 1 until an empty or short page, concatenating identifiers
/// in arrival order.
///
/// The first failing page aborts the walk and nothing gathered so far is
/// returned. A page holding exactly `page_size` items is never treated as
/// final.
pub async fn collect_assets<S>(source: &S, query: &AssetQuery) -> Result<Vec<AssetId>, Error>
where
    S: AssetSource + ?Sized,
{
    let mut page = 1u32;
    let mut results = Vec::new();

    loop {
        tracing::debug!(page, limit = query.page_size, "Fetching assets page");
        let ids = source.fetch_page(query.page(page)).await?;

        if ids.is_empty() {
            tracing::debug!(page, "Empty page, stopping");
            break;
        }

        let count = ids.len();
        results.extend(ids);
        tracing::info!(page, count, total = results.len(), "Collected assets page");

        if count < query.page_size as usize {
            break;
        }
        page += 1;
    }

    Ok(results)
}
