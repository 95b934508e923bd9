//! Wire types for the DAS `getAssetsByCreator` JSON-RPC call.

use crate::error::ProtocolError;
use crate::shared::{AssetId, PubkeyStr};
use serde::{Deserialize, Serialize};

pub const GET_ASSETS_BY_CREATOR: &str = "getAssetsByCreator";

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(id: String, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// Parameters of `getAssetsByCreator`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsByCreatorParams<'a> {
    pub creator_address: &'a PubkeyStr,
    pub only_verified: bool,
    pub page: u32,
    pub limit: u32,
}

/// JSON-RPC 2.0 response envelope. Either `result` or `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl<T> RpcResponse<T> {
    /// Unwrap the envelope: an `error` object wins, a missing `result` is malformed.
    pub fn into_result(self) -> Result<T, ProtocolError> {
        if let Some(err) = self.error {
            return Err(ProtocolError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| ProtocolError::MissingField("result".to_string()))
    }
}

/// One page of assets. Only the fields the collector needs are modeled; the
/// indexer sends much more per item and all of it is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetList {
    #[serde(default)]
    pub items: Option<Vec<AssetItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetItem {
    #[serde(default)]
    pub id: Option<AssetId>,
}

impl AssetList {
    /// Extract identifiers in arrival order.
    ///
    /// An absent `items` array or an item without `id` is a protocol error;
    /// an empty `items` array is a valid (final) page.
    pub fn into_ids(self) -> Result<Vec<AssetId>, ProtocolError> {
        let items = self
            .items
            .ok_or_else(|| ProtocolError::MissingField("result.items".to_string()))?;
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                item.id
                    .ok_or_else(|| ProtocolError::MissingField(format!("result.items[{}].id", i)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATOR: &str = "3pMvTLUA9NzZQd4gi725p89mvND1wRNQM3C8XEv1hTdA";

    #[test]
    fn test_request_serialize() {
        let creator = PubkeyStr::parse(CREATOR).unwrap();
        let req = RpcRequest::new(
            "creator-watch-page-3".to_string(),
            GET_ASSETS_BY_CREATOR,
            AssetsByCreatorParams {
                creator_address: &creator,
                only_verified: true,
                page: 3,
                limit: 1000,
            },
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": "creator-watch-page-3",
                "method": "getAssetsByCreator",
                "params": {
                    "creatorAddress": CREATOR,
                    "onlyVerified": true,
                    "page": 3,
                    "limit": 1000
                }
            })
        );
    }

    #[test]
    fn test_response_with_items() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "creator-watch-page-1",
            "result": {
                "total": 2,
                "limit": 1000,
                "page": 1,
                "items": [
                    {"interface": "V1_NFT", "id": "AssetOne", "burnt": false},
                    {"interface": "ProgrammableNFT", "id": "AssetTwo"}
                ]
            }
        }"#;
        let resp: RpcResponse<AssetList> = serde_json::from_str(json).unwrap();
        let ids = resp.into_result().unwrap().into_ids().unwrap();
        assert_eq!(ids, vec![AssetId::from("AssetOne"), AssetId::from("AssetTwo")]);
    }

    #[test]
    fn test_empty_items_is_valid() {
        let json = r#"{"result": {"items": []}}"#;
        let resp: RpcResponse<AssetList> = serde_json::from_str(json).unwrap();
        let ids = resp.into_result().unwrap().into_ids().unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_envelope_without_result_or_error_decodes() {
        let json = r#"{"jsonrpc": "2.0", "id": "creator-watch-page-1"}"#;
        let resp: RpcResponse<AssetList> = serde_json::from_str(json).unwrap();
        assert!(resp.result.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_missing_result_is_protocol_error() {
        let resp: RpcResponse<AssetList> = serde_json::from_str(r#"{"jsonrpc": "2.0"}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField(ref f) if f == "result"));
    }

    #[test]
    fn test_missing_items_is_protocol_error() {
        let resp: RpcResponse<AssetList> = serde_json::from_str(r#"{"result": {}}"#).unwrap();
        let err = resp.into_result().unwrap().into_ids().unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField(ref f) if f == "result.items"));
    }

    #[test]
    fn test_item_without_id_is_protocol_error() {
        let json = r#"{"result": {"items": [{"id": "A"}, {"interface": "V1_NFT"}]}}"#;
        let resp: RpcResponse<AssetList> = serde_json::from_str(json).unwrap();
        let err = resp.into_result().unwrap().into_ids().unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField(ref f) if f == "result.items[1].id"));
    }

    #[test]
    fn test_rpc_error_object() {
        let json = r#"{"jsonrpc": "2.0", "error": {"code": -32602, "message": "Invalid params"}}"#;
        let resp: RpcResponse<AssetList> = serde_json::from_str(json).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, ProtocolError::Rpc { code: -32602, .. }));
    }
}
