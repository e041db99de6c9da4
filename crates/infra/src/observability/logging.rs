//! Tracing subscriber setup

use slotwise_domain::{LogFormat, LoggingConfig, Result, SlotwiseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured level.
///
/// # Errors
/// Returns `SlotwiseError::Config` when the configured directive does not
/// parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| SlotwiseError::Config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `SlotwiseError::Config` for an invalid level or when a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
    };
    installed.map_err(|e| SlotwiseError::Config(format!("Tracing already initialised: {e}")))?;

    tracing::debug!(level = %config.level, format = %config.format, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_a_config_error() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config =
            LoggingConfig { level: "slotwise_core=loud".into(), ..LoggingConfig::default() };
        assert!(matches!(build_filter(&config), Err(SlotwiseError::Config(_))));
    }

    #[test]
    fn second_init_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(SlotwiseError::Config(_))));
    }
}
