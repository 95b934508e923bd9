//! Environment-supplied configuration.
//!
//! Secrets and endpoints are never compiled in. Values come from the process
//! environment, optionally seeded from a `.env` file. Command-specific values
//! (creator, callback URL) are validated only when a command asks for them.

use crate::domain::asset::{AssetQuery, MAX_PAGE_SIZE};
use crate::domain::webhook::WebhookSettings;
use crate::error::ConfigError;
use crate::http::DEFAULT_TIMEOUT;
use crate::network::{DEFAULT_API_URL, DEFAULT_RPC_URL};
use crate::shared::PubkeyStr;
use crate::store::{AddressStore, DEFAULT_ADDRESSES_PATH};
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_KEY: &str = "HELIUS_API_KEY";
pub const RPC_URL_KEY: &str = "HELIUS_RPC_URL";
pub const API_URL_KEY: &str = "HELIUS_API_URL";
pub const CREATOR_ADDRESS_KEY: &str = "CREATOR_ADDRESS";
pub const ONLY_VERIFIED_KEY: &str = "ONLY_VERIFIED";
pub const PAGE_SIZE_KEY: &str = "PAGE_SIZE";
pub const ADDRESSES_PATH_KEY: &str = "ADDRESSES_PATH";
pub const WEBHOOK_URL_KEY: &str = "WEBHOOK_URL";
pub const WEBHOOK_ID_KEY: &str = "WEBHOOK_ID";
pub const TRANSACTION_TYPES_KEY: &str = "WEBHOOK_TRANSACTION_TYPES";
pub const WEBHOOK_TYPE_KEY: &str = "WEBHOOK_TYPE";
pub const TIMEOUT_KEY: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_TRANSACTION_TYPES: &[&str] = &["NFT_LISTING", "NFT_SALE"];
pub const DEFAULT_WEBHOOK_TYPE: &str = "enhanced";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub rpc_url: String,
    pub api_url: String,
    pub creator: Option<String>,
    pub only_verified: bool,
    pub page_size: u32,
    pub addresses_path: PathBuf,
    pub webhook_url: Option<String>,
    pub webhook_id: Option<String>,
    pub transaction_types: Vec<String>,
    pub webhook_type: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("api_url", &self.api_url)
            .field("creator", &self.creator)
            .field("only_verified", &self.only_verified)
            .field("page_size", &self.page_size)
            .field("addresses_path", &self.addresses_path)
            .field("webhook_url", &self.webhook_url)
            .field("webhook_id", &self.webhook_id)
            .field("transaction_types", &self.transaction_types)
            .field("webhook_type", &self.webhook_type)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::warn!("Could not load .env file: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_KEY).ok_or(ConfigError::Missing(API_KEY_KEY))?;
        let rpc_url = get(RPC_URL_KEY).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let api_url = get(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        require_http(RPC_URL_KEY, &rpc_url)?;
        require_http(API_URL_KEY, &api_url)?;

        let only_verified = match get(ONLY_VERIFIED_KEY) {
            Some(v) => parse_bool(ONLY_VERIFIED_KEY, &v)?,
            None => true,
        };
        let page_size = match get(PAGE_SIZE_KEY) {
            Some(v) => parse_number::<u32>(PAGE_SIZE_KEY, &v)?,
            None => MAX_PAGE_SIZE,
        };
        let timeout = match get(TIMEOUT_KEY) {
            Some(v) => Duration::from_secs(parse_number::<u64>(TIMEOUT_KEY, &v)?),
            None => DEFAULT_TIMEOUT,
        };
        let transaction_types = match get(TRANSACTION_TYPES_KEY) {
            Some(v) => split_list(&v),
            None => DEFAULT_TRANSACTION_TYPES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            api_key,
            rpc_url,
            api_url,
            creator: get(CREATOR_ADDRESS_KEY),
            only_verified,
            page_size,
            addresses_path: get(ADDRESSES_PATH_KEY)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ADDRESSES_PATH)),
            webhook_url: get(WEBHOOK_URL_KEY),
            webhook_id: get(WEBHOOK_ID_KEY),
            transaction_types,
            webhook_type: get(WEBHOOK_TYPE_KEY)
                .unwrap_or_else(|| DEFAULT_WEBHOOK_TYPE.to_string()),
            timeout,
        })
    }

    /// Collector query. Requires a valid creator address and page size.
    pub fn asset_query(&self) -> Result<AssetQuery, ConfigError> {
        let raw = self
            .creator
            .as_deref()
            .ok_or(ConfigError::Missing(CREATOR_ADDRESS_KEY))?;
        let creator = PubkeyStr::parse(raw).map_err(|reason| ConfigError::Invalid {
            key: CREATOR_ADDRESS_KEY,
            reason,
        })?;
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid {
                key: PAGE_SIZE_KEY,
                reason: format!("must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }
        Ok(AssetQuery {
            creator,
            page_size: self.page_size,
            only_verified: self.only_verified,
        })
    }

    /// Registrar settings. Requires an http(s) callback URL and at least one
    /// transaction type.
    pub fn webhook_settings(&self) -> Result<WebhookSettings, ConfigError> {
        let callback_url = self
            .webhook_url
            .clone()
            .ok_or(ConfigError::Missing(WEBHOOK_URL_KEY))?;
        require_http(WEBHOOK_URL_KEY, &callback_url)?;
        if self.transaction_types.is_empty() {
            return Err(ConfigError::Invalid {
                key: TRANSACTION_TYPES_KEY,
                reason: "at least one transaction type is required".to_string(),
            });
        }
        Ok(WebhookSettings {
            webhook_id: self.webhook_id.clone(),
            callback_url,
            event_types: self.transaction_types.clone(),
            delivery_mode: self.webhook_type.clone(),
        })
    }

    pub fn store(&self) -> AddressStore {
        AddressStore::new(self.addresses_path.clone())
    }
}

fn require_http(key: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            reason: "must start with http:// or https://".to_string(),
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got {:?}", value),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CREATOR: &str = "3pMvTLUA9NzZQd4gi725p89mvND1wRNQM3C8XEv1hTdA";

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_api_key_is_required() {
        assert_eq!(config(&[]), Err(ConfigError::Missing(API_KEY_KEY)));
        assert_eq!(
            config(&[(API_KEY_KEY, "   ")]),
            Err(ConfigError::Missing(API_KEY_KEY))
        );
    }

    #[test]
    fn test_defaults() {
        let c = config(&[(API_KEY_KEY, "k")]).unwrap();
        assert_eq!(c.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(c.api_url, DEFAULT_API_URL);
        assert_eq!(c.page_size, 1000);
        assert!(c.only_verified);
        assert_eq!(c.addresses_path, PathBuf::from("addresses.json"));
        assert_eq!(c.transaction_types, vec!["NFT_LISTING", "NFT_SALE"]);
        assert_eq!(c.webhook_type, "enhanced");
        assert_eq!(c.timeout, Duration::from_secs(30));
        assert!(c.creator.is_none());
        assert!(c.webhook_id.is_none());
    }

    #[test]
    fn test_overrides_from_environment() {
        let c = config(&[
            (API_KEY_KEY, "k"),
            (RPC_URL_KEY, "http://localhost:8899"),
            (ONLY_VERIFIED_KEY, "false"),
            (PAGE_SIZE_KEY, "250"),
            (TRANSACTION_TYPES_KEY, "NFT_SALE, ,NFT_BID"),
            (TIMEOUT_KEY, "5"),
            (WEBHOOK_ID_KEY, "hook-1"),
        ])
        .unwrap();
        assert_eq!(c.rpc_url, "http://localhost:8899");
        assert!(!c.only_verified);
        assert_eq!(c.page_size, 250);
        assert_eq!(c.transaction_types, vec!["NFT_SALE", "NFT_BID"]);
        assert_eq!(c.timeout, Duration::from_secs(5));
        assert_eq!(c.webhook_id.as_deref(), Some("hook-1"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[(API_KEY_KEY, "k"), (PAGE_SIZE_KEY, "lots")]),
            Err(ConfigError::Invalid { key: PAGE_SIZE_KEY, .. })
        ));
        assert!(matches!(
            config(&[(API_KEY_KEY, "k"), (ONLY_VERIFIED_KEY, "maybe")]),
            Err(ConfigError::Invalid { key: ONLY_VERIFIED_KEY, .. })
        ));
        assert!(matches!(
            config(&[(API_KEY_KEY, "k"), (API_URL_KEY, "ftp://x")]),
            Err(ConfigError::Invalid { key: API_URL_KEY, .. })
        ));
    }

    #[test]
    fn test_asset_query_requires_valid_creator() {
        let c = config(&[(API_KEY_KEY, "k")]).unwrap();
        assert_eq!(c.asset_query(), Err(ConfigError::Missing(CREATOR_ADDRESS_KEY)));

        let c = config(&[(API_KEY_KEY, "k"), (CREATOR_ADDRESS_KEY, "bogus")]).unwrap();
        assert!(matches!(
            c.asset_query(),
            Err(ConfigError::Invalid { key: CREATOR_ADDRESS_KEY, .. })
        ));

        let c = config(&[(API_KEY_KEY, "k"), (CREATOR_ADDRESS_KEY, CREATOR)]).unwrap();
        let q = c.asset_query().unwrap();
        assert_eq!(q.creator.as_str(), CREATOR);
        assert_eq!(q.page_size, 1000);
        assert!(q.only_verified);
    }

    #[test]
    fn test_asset_query_bounds_page_size() {
        let mut c = config(&[(API_KEY_KEY, "k"), (CREATOR_ADDRESS_KEY, CREATOR)]).unwrap();
        c.page_size = 0;
        assert!(c.asset_query().is_err());
        c.page_size = 1001;
        assert!(c.asset_query().is_err());
        c.page_size = 1;
        assert!(c.asset_query().is_ok());
    }

    #[test]
    fn test_webhook_settings() {
        let c = config(&[(API_KEY_KEY, "k")]).unwrap();
        assert_eq!(c.webhook_settings(), Err(ConfigError::Missing(WEBHOOK_URL_KEY)));

        let c = config(&[(API_KEY_KEY, "k"), (WEBHOOK_URL_KEY, "hooks.example.com")]).unwrap();
        assert!(matches!(
            c.webhook_settings(),
            Err(ConfigError::Invalid { key: WEBHOOK_URL_KEY, .. })
        ));

        let c = config(&[
            (API_KEY_KEY, "k"),
            (WEBHOOK_URL_KEY, "https://hooks.example.com/"),
            (WEBHOOK_TYPE_KEY, "raw"),
        ])
        .unwrap();
        let s = c.webhook_settings().unwrap();
        assert_eq!(s.callback_url, "https://hooks.example.com/");
        assert_eq!(s.delivery_mode, "raw");
        assert!(s.webhook_id.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let c = config(&[(API_KEY_KEY, "super-secret")]).unwrap();
        assert!(!format!("{:?}", c).contains("super-secret"));
    }
}
