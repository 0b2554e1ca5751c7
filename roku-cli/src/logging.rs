//! Logging setup for the `roku` binary
//!
//! Library crates only emit `tracing` events; this installs the subscriber
//! that prints them to stderr so stdout stays clean for command output.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a compact stderr subscriber filtered by `directive`
///
/// `directive` is an `EnvFilter` string such as `warn` or
/// `roku_api=trace`, already resolved from flags and environment by
/// [`Config`](crate::config::Config). Filters that enable `debug` or more
/// include targets and source locations.
pub fn init_logging(directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = create_env_filter(directive)?;
    let verbose = is_verbose(&filter);

    Registry::default()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_file(verbose)
                .with_line_number(verbose)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::TracingInit(e.to_string()))
}

pub(crate) fn create_env_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidDirective {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

fn is_verbose(filter: &EnvFilter) -> bool {
    filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_level() {
        let filter = create_env_filter("error").unwrap();
        assert_eq!(filter.to_string(), "error");
        assert!(!is_verbose(&filter));
    }

    #[test]
    fn test_filter_from_target_directive() {
        let filter = create_env_filter("roku_api=trace").unwrap();
        assert_eq!(filter.to_string(), "roku_api=trace");
        assert!(is_verbose(&filter));
    }

    #[test]
    fn test_filter_mixed_directives() {
        let filter = create_env_filter("warn,roku_api=debug").unwrap();
        assert!(is_verbose(&filter));
    }

    #[test]
    fn test_invalid_directive() {
        let err = create_env_filter("roku_api=loud").unwrap_err();
        assert!(matches!(
            err,
            LoggingError::InvalidDirective { ref directive, .. } if directive == "roku_api=loud"
        ));
    }
}
