//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types, the transport-agnostic trait and the procedure
//! - `wire.rs` — Raw serde structs matching the API payloads
//! - `client.rs` — Sub-client binding the procedure to `HeliusHttp`

pub mod asset;
pub mod webhook;
