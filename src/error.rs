//! Unified error types.
//!
//! Every failure aborts the current run. [`Error::exit_code`] maps each kind to
//! the process exit status used by the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Process exit status for this error kind. `0` is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Transport(_) => 2,
            Error::Protocol(_) => 3,
            Error::File(_) => 4,
            Error::Config(_) => 5,
        }
    }
}

/// Network failures and non-success HTTP statuses.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unauthorized ({status})")]
    Unauthorized { status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },
}

impl TransportError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            TransportError::NotFound(_) => Some(404),
            TransportError::RateLimited => Some(429),
            TransportError::Unauthorized { status }
            | TransportError::BadRequest { status, .. }
            | TransportError::ServerError { status, .. } => Some(*status),
        }
    }
}

/// A response arrived but did not have the expected shape.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
}

/// Persisted address collection could not be read or written.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Address file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed address file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Missing or invalid environment configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}
