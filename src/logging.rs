//! `tracing` subscriber bootstrap for the console binary.
//!
//! Diagnostics go to stderr so they never interleave with prompts on stdout.

use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Filter used when neither the caller nor `RUST_LOG` provides one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// A global subscriber is already set.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Resolves the effective filter: explicit directive, then `RUST_LOG`, then
/// [`DEFAULT_LOG_FILTER`].
pub fn resolve_filter(explicit: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match explicit {
        Some(directive) => Ok(EnvFilter::try_new(directive)?),
        None => Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?),
    }
}

/// Installs a stderr `fmt` subscriber. Call once per process.
pub fn init_logging(explicit: Option<&str>) -> Result<(), LoggingError> {
    let filter = resolve_filter(explicit)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::AlreadyInitialized(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::resolve_filter;

    #[test]
    fn explicit_filter_is_accepted() {
        let filter = resolve_filter(Some("eventbook=debug")).expect("valid directive");
        assert!(filter.to_string().contains("eventbook=debug"));
    }

    #[test]
    fn malformed_filter_is_rejected() {
        assert!(resolve_filter(Some("eventbook=notalevel")).is_err());
    }
}
