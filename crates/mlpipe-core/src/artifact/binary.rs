//! Versioned binary artifact files.
//!
//! On-disk format:
//! ```text
//! [magic:4][format_version:1][payload:N]
//! ```
//! The payload is the bincode encoding of the stored value. The header is
//! the only cross-version promise: a reader that sees an unknown magic or
//! version refuses the file up front instead of misdecoding the payload.
//! Payload compatibility otherwise follows the crate version — these files
//! are a matched writer/reader pair, not an interchange format.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::{UtilError, UtilResult};

const MAGIC: [u8; 4] = *b"MLPB";
const FORMAT_VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 1;

/// Persist `value` as a binary artifact at `path`.
///
/// An existing file is overwritten.
pub fn save_bin<T: Serialize>(path: impl AsRef<Path>, value: &T) -> UtilResult<()> {
    let path = path.as_ref();
    let payload = bincode::serialize(value).map_err(|source| {
        error!("failed to encode binary artifact {}: {source}", path.display());
        UtilError::Codec {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(&MAGIC);
    buf.push(FORMAT_VERSION);
    buf.extend_from_slice(&payload);

    std::fs::write(path, buf).map_err(|source| {
        error!("failed to write binary artifact {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("binary artifact saved at {}", path.display());
    Ok(())
}

/// Load a binary artifact written by [`save_bin`].
///
/// The magic and format version are validated before any decoding.
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> UtilResult<T> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| {
        error!("failed to read binary artifact {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if bytes.len() < HEADER_LEN {
        return Err(format_error(
            path,
            format!("{} bytes is shorter than the {HEADER_LEN}-byte header", bytes.len()),
        ));
    }
    if bytes[..MAGIC.len()] != MAGIC {
        return Err(format_error(path, "bad magic".to_string()));
    }
    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(format_error(
            path,
            format!("unsupported format version {version}, expected {FORMAT_VERSION}"),
        ));
    }

    let value = bincode::deserialize(&bytes[HEADER_LEN..]).map_err(|source| {
        error!("failed to decode binary artifact {}: {source}", path.display());
        UtilError::Codec {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("binary artifact loaded from {}", path.display());
    Ok(value)
}

fn format_error(path: &Path, reason: String) -> UtilError {
    error!("rejected binary artifact {}: {reason}", path.display());
    UtilError::Format {
        path: path.to_path_buf(),
        reason,
    }
}
