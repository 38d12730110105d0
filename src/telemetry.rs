//! Logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const FALLBACK_LEVEL: &str = "info";

/// Parses the configured filter directives.
fn filter_for(log_level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(log_level)
}

/// Installs the global `tracing` subscriber.
///
/// `log_level` is the already resolved `RUST_LOG` value (see
/// [`crate::config::Config`]); if it does not parse, `info` is used and a
/// warning is logged. `log_format` selects human-readable (`text`) or
/// structured (`json`) output.
pub fn init(log_level: &str, log_format: &str) {
    let (filter, parse_error) = match filter_for(log_level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    if let Some(e) = parse_error {
        tracing::warn!(
            "Invalid log filter '{}': {}. Falling back to '{}'",
            log_level,
            e,
            FALLBACK_LEVEL
        );
    }
}
