//! JSON artifact files.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::{UtilError, UtilResult};

/// Serialize `value` as pretty-printed JSON at `path`.
///
/// An existing file is overwritten.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> UtilResult<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value).map_err(|source| {
        error!("failed to serialize JSON artifact {}: {source}", path.display());
        UtilError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    std::fs::write(path, text).map_err(|source| {
        error!("failed to write JSON artifact {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("JSON artifact saved at {}", path.display());
    Ok(())
}

/// Load a JSON artifact as a generic value tree.
pub fn load_json(path: impl AsRef<Path>) -> UtilResult<serde_json::Value> {
    load_json_as(path)
}

/// Load a JSON artifact into a typed value.
pub fn load_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> UtilResult<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| {
        error!("failed to read JSON artifact {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let value = serde_json::from_str(&text).map_err(|source| {
        error!("failed to parse JSON artifact {}: {source}", path.display());
        UtilError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("JSON artifact loaded from {}", path.display());
    Ok(value)
}
