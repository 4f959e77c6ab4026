//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries command output (envelopes,
//! plaintext). `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::error::{CodecError, CodecResult};

/// Level used when nothing else is configured
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global tracing subscriber.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns a `Config` error if `RUST_LOG` is unset and `level` is not a
/// valid filter. Nothing is installed in that case.
pub fn init(level: &str) -> CodecResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_level(level)?,
    };

    // fails only when a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}

/// Parse a configured level or filter directive
pub fn parse_level(level: &str) -> CodecResult<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| CodecError::Config(format!("Invalid log level '{}': {}", level, e)))
}
