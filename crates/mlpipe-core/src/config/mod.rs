//! YAML settings loading for pipeline stages.
//!
//! Settings files are plain YAML mappings (`params.yaml`, `schema.yaml`,
//! and friends). Two access styles are offered: [`read_yaml`] returns the
//! raw document as an insertion-ordered [`Mapping`] for stages that walk
//! keys generically, and [`read_yaml_as`] deserializes straight into a
//! caller-defined struct when the schema is known ahead of time.
//!
//! A document that parses to nothing (empty file, `null`, `{}`) fails with
//! [`UtilError::EmptyConfig`] rather than a generic parse error — an empty
//! settings file is always a user mistake worth naming.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::{error, info};

use crate::errors::{UtilError, UtilResult};

/// Read a YAML settings file as an ordered key-value mapping.
///
/// The top-level document must be a mapping; anything else is reported as
/// a YAML error.
pub fn read_yaml(path: impl AsRef<Path>) -> UtilResult<Mapping> {
    let path = path.as_ref();
    let value = read_document(path)?;
    match serde_yaml::from_value::<Mapping>(value) {
        Ok(mapping) => {
            info!("settings loaded from {}", path.display());
            Ok(mapping)
        }
        Err(source) => {
            error!("failed to parse settings {}: {source}", path.display());
            Err(UtilError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read a YAML settings file into a typed configuration struct.
///
/// Same empty-document contract as [`read_yaml`].
pub fn read_yaml_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> UtilResult<T> {
    let path = path.as_ref();
    let value = read_document(path)?;
    match serde_yaml::from_value::<T>(value) {
        Ok(settings) => {
            info!("settings loaded from {}", path.display());
            Ok(settings)
        }
        Err(source) => {
            error!("failed to parse settings {}: {source}", path.display());
            Err(UtilError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read and parse the file, rejecting documents with no content.
fn read_document(path: &Path) -> UtilResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        error!("failed to read settings {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if text.trim().is_empty() {
        error!("settings file is empty: {}", path.display());
        return Err(UtilError::EmptyConfig {
            path: path.to_path_buf(),
        });
    }
    let value: Value = serde_yaml::from_str(&text).map_err(|source| {
        error!("failed to parse settings {}: {source}", path.display());
        UtilError::Yaml {
            path: path.to_path_buf(),
            source,
        }
    })?;
    if is_empty_document(&value) {
        error!("settings file is empty: {}", path.display());
        return Err(UtilError::EmptyConfig {
            path: path.to_path_buf(),
        });
    }
    Ok(value)
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Sequence(sequence) => sequence.is_empty(),
        _ => false,
    }
}
