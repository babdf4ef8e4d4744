//! Filesystem helpers for laying out the pipeline workspace.

use std::path::Path;

use tracing::{error, info};

use crate::errors::{UtilError, UtilResult};

/// Ensure every path in `paths` exists as a directory, in order.
///
/// Parents are created as needed and already-existing directories are not
/// an error, so repeated calls are harmless. `verbose` controls the
/// per-directory log line. The first failure aborts the walk.
pub fn create_dirs<P: AsRef<Path>>(paths: &[P], verbose: bool) -> UtilResult<()> {
    for path in paths {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|source| {
            error!("failed to create directory {}: {source}", path.display());
            UtilError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if verbose {
            info!("created directory {}", path.display());
        }
    }
    Ok(())
}

/// Report the size of the file at `path` in kilobytes, two decimals.
///
/// Returns a display string like `~ 1.00 KB`.
pub fn file_size(path: impl AsRef<Path>) -> UtilResult<String> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|source| {
        error!("failed to stat {}: {source}", path.display());
        UtilError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let size_in_kb = metadata.len() as f64 / 1024.0;
    let size_display = format!("~ {size_in_kb:.2} KB");
    info!("size of {}: {}", path.display(), size_display);
    Ok(size_display)
}
