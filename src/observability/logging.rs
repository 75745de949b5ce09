//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Pick the filter: `RUST_LOG`, else the configured level
//! - Raise this crate and `tower_http` to debug in debug mode
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for log aggregation, pretty format for development

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ComposerConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter directive derived from configuration alone.
pub fn filter_directive(config: &ComposerConfig) -> String {
    let level = config.observability.log_level.to_lowercase();
    if config.debug {
        format!("{level},music_composer=debug,tower_http=debug")
    } else {
        level
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &ComposerConfig) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(config))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    match config.observability.log_format.to_lowercase().as_str() {
        "json" => registry.with(fmt::layer().json()).try_init()?,
        "compact" => registry.with(fmt::layer().compact()).try_init()?,
        _ => registry.with(fmt::layer()).try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_follows_level() {
        let mut config = ComposerConfig::default();
        config.observability.log_level = "WARN".into();
        assert_eq!(filter_directive(&config), "warn");
    }

    #[test]
    fn test_debug_mode_raises_crate_level() {
        let mut config = ComposerConfig::default();
        config.debug = true;
        assert_eq!(
            filter_directive(&config),
            "info,music_composer=debug,tower_http=debug"
        );
    }
}
