//! Wire types for the webhook management REST API.

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

/// Body of `PUT /v0/webhooks/{id}`: a full replacement of the webhook record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditWebhookRequest {
    #[serde(rename = "webhookURL")]
    pub webhook_url: String,
    pub transaction_types: Vec<String>,
    pub account_addresses: Vec<AssetId>,
    pub webhook_type: String,
}

/// The field of a webhook record the registrar reports back. The rest of the
/// response is kept raw.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebhookResponse {
    #[serde(rename = "webhookID", default)]
    pub webhook_id: Option<String>,
}
