//! HTTP client layer — `HeliusHttp`, single-shot requests.

pub mod client;

pub use client::{HeliusHttp, DEFAULT_TIMEOUT};
