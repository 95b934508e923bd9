//! High-level client — `HeliusClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::Config;
use crate::domain::asset::client::Assets;
use crate::domain::webhook::client::Webhooks;
use crate::error::{ConfigError, Error};
use crate::http::{HeliusHttp, DEFAULT_TIMEOUT};

use std::time::Duration;

pub use crate::domain::asset::client::Assets as AssetsClient;
pub use crate::domain::webhook::client::Webhooks as WebhooksClient;

/// The primary entry point.
///
/// `client.assets()` enumerates a creator's assets,
/// `client.webhooks()` replaces a webhook's monitored set.
#[derive(Debug, Clone)]
pub struct HeliusClient {
    pub(crate) http: HeliusHttp,
}

impl HeliusClient {
    pub fn builder() -> HeliusClientBuilder {
        HeliusClientBuilder::default()
    }

    /// Client pointed at the endpoints and credentials in `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::builder()
            .rpc_url(&config.rpc_url)
            .api_url(&config.api_url)
            .api_key(&config.api_key)
            .timeout(config.timeout)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }

    /// Low-level HTTP client, for callers that drive the procedures directly.
    pub fn http(&self) -> &HeliusHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct HeliusClientBuilder {
    rpc_url: String,
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for HeliusClientBuilder {
    fn default() -> Self {
        Self {
            rpc_url: crate::network::DEFAULT_RPC_URL.to_string(),
            api_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HeliusClientBuilder {
    pub fn rpc_url(mut self, url: &str) -> Self {
        self.rpc_url = url.to_string();
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HeliusClient, Error> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::Missing(crate::config::API_KEY_KEY))?;
        Ok(HeliusClient {
            http: HeliusHttp::new(&self.rpc_url, &self.api_url, &api_key, self.timeout)?,
        })
    }
}
