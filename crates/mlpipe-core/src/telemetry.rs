//! Logging bootstrap.
//!
//! The utility functions emit plain `tracing` events and never touch the
//! subscriber themselves, so callers (and tests) stay free to install
//! whatever dispatcher they want. Binaries that just want readable logs
//! call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a formatted global subscriber, filtered by `RUST_LOG` and
/// defaulting to `info`.
///
/// Fails if a global subscriber is already set; callers embedding the
/// crate in a larger process should skip this and configure their own.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}
