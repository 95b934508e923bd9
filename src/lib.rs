//! # creator-watch
//!
//! Enumerates every asset minted by one creator through the DAS
//! `getAssetsByCreator` JSON-RPC method and keeps a webhook's monitored
//! account set in sync with that list.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain procedures, wire types, errors
//! 2. **State** — `AddressStore`, the JSON file handed from collect to register
//! 3. **HTTP API** — `HeliusHttp`, one single-shot method per endpoint
//! 4. **High-Level Client** — `HeliusClient` with nested sub-clients
//! 5. **CLI** — the `creator-watch` binary (`collect`, `register`, `sync`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use creator_watch::prelude::*;
//!
//! let config = Config::load()?;
//! let client = HeliusClient::from_config(&config)?;
//!
//! let ids = client.assets().collect_into(&config.asset_query()?, &config.store()).await?;
//! client.webhooks().replace(&config.webhook_settings()?, ids).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): procedures, wire types, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-supplied configuration.
pub mod config;

// ── Layer 2: State ───────────────────────────────────────────────────────────

/// Persisted address collection.
pub mod store;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `HeliusClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{AssetId, PubkeyStr};

    pub use crate::domain::asset::{
        collect_assets, AssetQuery, AssetSource, PageRequest, MAX_PAGE_SIZE,
    };
    pub use crate::domain::webhook::{
        register_from_store, register_webhook, WebhookConfig, WebhookSettings, WebhookSink,
        WebhookUpdate,
    };

    pub use crate::error::{ConfigError, Error, FileError, ProtocolError, TransportError};

    pub use crate::config::Config;
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_RPC_URL};
    pub use crate::store::AddressStore;

    pub use crate::client::{AssetsClient, HeliusClient, HeliusClientBuilder, WebhooksClient};
    pub use crate::http::HeliusHttp;
}
