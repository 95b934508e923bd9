//! Local handoff file between `collect` and `register`.
//!
//! The file holds one pretty-printed JSON array of identifiers. It has no
//! schema version and no checksum; `save` overwrites whatever was there.

use crate::error::FileError;
use crate::shared::AssetId;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the address file, relative to the working directory.
pub const DEFAULT_ADDRESSES_PATH: &str = "addresses.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressStore {
    path: PathBuf,
}

impl AddressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, ids: &[AssetId]) -> Result<(), FileError> {
        let json = serde_json::to_string_pretty(ids).map_err(|source| FileError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| FileError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(count = ids.len(), path = %self.path.display(), "Saved addresses");
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<AssetId>, FileError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FileError::NotFound(self.path.clone())
            } else {
                FileError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        let ids: Vec<AssetId> =
            serde_json::from_str(&content).map_err(|source| FileError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(count = ids.len(), path = %self.path.display(), "Loaded addresses");
        Ok(ids)
    }
}

impl Default for AddressStore {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESSES_PATH)
    }
}
