//! Low-level HTTP client — `HeliusHttp`.
//!
//! One method per endpoint. Requests are sent once: a non-success status is
//! returned as a [`TransportError`]. An unexpected RPC body is a
//! [`ProtocolError`]; webhook replies are kept raw. Layer 4 wraps this.

use crate::domain::asset::wire::{
    AssetList, AssetsByCreatorParams, RpcRequest, RpcResponse, GET_ASSETS_BY_CREATOR,
};
use crate::domain::asset::{AssetSource, PageRequest};
use crate::domain::webhook::wire::{EditWebhookRequest, WebhookResponse};
use crate::domain::webhook::{WebhookConfig, WebhookSink, WebhookUpdate};
use crate::error::{Error, ProtocolError, TransportError};
use crate::shared::AssetId;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix of the JSON-RPC request id; the page number is appended.
const RPC_ID_PREFIX: &str = "creator-watch";

/// Low-level HTTP client for the DAS RPC endpoint and the webhook REST API.
#[derive(Clone)]
pub struct HeliusHttp {
    rpc_url: String,
    api_url: String,
    /// Sent as the `api-key` query parameter. Never logged.
    api_key: String,
    client: Client,
}

impl std::fmt::Debug for HeliusHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeliusHttp")
            .field("rpc_url", &self.rpc_url)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl HeliusHttp {
    pub fn new(
        rpc_url: &str,
        api_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()?;

        Ok(Self {
            rpc_url: rpc_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub async fn get_assets_by_creator(
        &self,
        request: PageRequest<'_>,
    ) -> Result<AssetList, Error> {
        let url = format!("{}/?api-key={}", self.rpc_url, urlencoding::encode(&self.api_key));
        let body = RpcRequest::new(
            format!("{}-page-{}", RPC_ID_PREFIX, request.page),
            GET_ASSETS_BY_CREATOR,
            AssetsByCreatorParams {
                creator_address: request.creator,
                only_verified: request.only_verified,
                page: request.page,
                limit: request.limit,
            },
        );
        let resp: RpcResponse<AssetList> = self.send(reqwest::Method::POST, &url, &body).await?;
        Ok(resp.into_result()?)
    }

    // ── Webhooks ─────────────────────────────────────────────────────────

    /// `PUT /v0/webhooks/{id}`. Without an id the collection path is used.
    ///
    /// Any 2xx reply is accepted. A body that is not JSON is returned as a
    /// JSON string, an empty body as `null`.
    pub async fn edit_webhook(
        &self,
        webhook_id: Option<&str>,
        request: &EditWebhookRequest,
    ) -> Result<serde_json::Value, Error> {
        let url = format!(
            "{}/v0/webhooks/{}?api-key={}",
            self.api_url,
            webhook_id.map(|id| urlencoding::encode(id).into_owned()).unwrap_or_default(),
            urlencoding::encode(&self.api_key)
        );
        let text = self.do_request(&reqwest::Method::PUT, &url, request).await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(serde_json::Value::String(text)),
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: &B,
    ) -> Result<T, Error> {
        let text = self.do_request(&method, url, body).await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        let parsed = serde_json::from_str::<T>(text).map_err(ProtocolError::from)?;
        Ok(parsed)
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: &B,
    ) -> Result<String, TransportError> {
        // The query string carries the api key.
        let path = url.split('?').next().unwrap_or(url);
        tracing::debug!(%method, path, "Sending request");

        let resp = self
            .client
            .request(method.clone(), url)
            .json(body)
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, path, "Request failed");

        match status_code {
            401 | 403 => Err(TransportError::Unauthorized {
                status: status_code,
            }),
            404 => Err(TransportError::NotFound(body_text)),
            429 => Err(TransportError::RateLimited),
            400..=499 => Err(TransportError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(TransportError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[async_trait]
impl AssetSource for HeliusHttp {
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<Vec<AssetId>, Error> {
        let list = self.get_assets_by_creator(request).await?;
        Ok(list.into_ids()?)
    }
}

#[async_trait]
impl WebhookSink for HeliusHttp {
    async fn replace_webhook(
        &self,
        webhook_id: Option<&str>,
        config: WebhookConfig,
    ) -> Result<WebhookUpdate, Error> {
        let request = EditWebhookRequest::from(config);
        let raw = self.edit_webhook(webhook_id, &request).await?;
        // Shape of the body is not part of the contract.
        let parsed = serde_json::from_value::<WebhookResponse>(raw.clone()).ok();
        Ok(WebhookUpdate {
            webhook_id: parsed
                .and_then(|r| r.webhook_id)
                .or_else(|| webhook_id.map(str::to_string)),
            raw,
        })
    }
}
