//! Network URL constants.

/// Default DAS JSON-RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.helius-rpc.com";

/// Default REST API base URL (webhook management).
pub const DEFAULT_API_URL: &str = "https://api.helius.xyz";
