//! Error types for the scaffold utilities.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the scaffold utilities.
pub type UtilResult<T> = Result<T, UtilError>;

/// Errors that can occur in the scaffold utility layer.
///
/// There are only two externally-meaningful failure classes: an empty
/// settings document ([`UtilError::EmptyConfig`]), and everything else —
/// the underlying filesystem/parser/codec error wrapped with the path it
/// happened on, reachable unchanged through `source()`. Nothing is
/// retried and nothing is swallowed; every failure is fatal to the caller.
#[derive(Debug, Error)]
pub enum UtilError {
    /// Settings file parsed to an empty document (empty file, `null`, or
    /// an empty mapping). Distinct from a parse error so callers can give
    /// a precise message.
    #[error("settings file is empty: {}", .path.display())]
    EmptyConfig { path: PathBuf },

    /// Filesystem error on the given path.
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse or deserialization error for the given file.
    #[error("invalid YAML in {}: {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization or parse error for the given file.
    #[error("invalid JSON in {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Binary payload could not be encoded or decoded.
    #[error("binary codec failure on {}: {}", .path.display(), .source)]
    Codec {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// File is not a recognised binary artifact (bad magic, unsupported
    /// format version, or truncated header).
    #[error("not a binary artifact: {} ({})", .path.display(), .reason)]
    Format { path: PathBuf, reason: String },
}

impl UtilError {
    /// Returns true for the empty-settings case.
    pub fn is_empty_config(&self) -> bool {
        matches!(self, Self::EmptyConfig { .. })
    }

    /// Returns true if the underlying failure was a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// The path the operation failed on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::EmptyConfig { path }
            | Self::Io { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::Codec { path, .. }
            | Self::Format { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_predicate() {
        let err = UtilError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert!(!err.is_empty_config());
    }

    #[test]
    fn test_display_includes_path() {
        let err = UtilError::EmptyConfig {
            path: PathBuf::from("params.yaml"),
        };
        assert!(err.to_string().contains("params.yaml"));
        assert!(err.is_empty_config());
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = UtilError::Io {
            path: PathBuf::from("out/metrics.json"),
            source: io,
        };
        let source = err.source().expect("io source");
        let io = source.downcast_ref::<std::io::Error>().expect("io type");
        assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);
    }
}
