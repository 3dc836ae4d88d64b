use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::errors::{DateTimeApiError, DateTimeApiResult};

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(config: &Config) -> DateTimeApiResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.log_filter())
        .map_err(|e| DateTimeApiError::LoggingInitialization(e.to_string()))
}

/// Initialize logging to stderr
///
/// # Environment Variables
/// - `RUST_LOG`: Overrides `LOG_LEVEL`/`DEBUG` when set
///
/// # Returns
/// - `Ok(())` if the subscriber was installed
/// - `Err(DateTimeApiError::LoggingInitialization)` if the filter is invalid or
///   a global subscriber already exists
pub fn init_logging(config: &Config) -> DateTimeApiResult<()> {
    let env_filter = build_filter(config)?;
    let directive = env_filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| DateTimeApiError::LoggingInitialization(e.to_string()))?;

    tracing::info!("Logging initialized with filter: {}", directive);
    Ok(())
}
