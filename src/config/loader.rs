//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ComposerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the effective configuration: defaults or the given file, then
/// process environment overrides, then validation.
pub fn load(path: Option<&Path>) -> Result<ComposerConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

/// [`load`] with an explicit environment lookup.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<ComposerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ComposerConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PORT`, `HOST`, `DEBUG` and `LOG_LEVEL` on top of a configuration.
///
/// `DEBUG` is on only when it equals "true" ignoring case; any other value
/// turns it off.
pub fn apply_env_overrides<F>(config: &mut ComposerConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            key: "PORT",
            value: port.clone(),
        })?;
    }

    if let Some(host) = lookup("HOST") {
        config.listener.host = host;
    }

    if let Some(debug) = lookup("DEBUG") {
        config.debug = debug.eq_ignore_ascii_case("true");
    }

    if let Some(level) = lookup("LOG_LEVEL") {
        config.observability.log_level = level;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[("PORT", "8123"), ("DEBUG", "TRUE"), ("LOG_LEVEL", "warn")]);
        let mut config = ComposerConfig::default();

        apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.listener.port, 8123);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert!(config.debug);
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_debug_only_enabled_by_true() {
        for value in ["1", "yes", "False", ""] {
            let vars = env(&[("DEBUG", value)]);
            let mut config = ComposerConfig::default();
            config.debug = true;
            apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();
            assert!(!config.debug, "DEBUG={value:?} should disable debug mode");
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = env(&[("PORT", "fivethousand")]);
        let mut config = ComposerConfig::default();

        let err = apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "PORT", .. }));
        assert_eq!(config.listener.port, 5000);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("composer_config_{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "[listener]\nport = 6000\n\n[observability]\nlog_format = \"json\"\n",
        )
        .unwrap();

        let config = load_with(Some(&path), |_| None).unwrap();
        assert_eq!(config.listener.port, 6000);
        assert_eq!(config.observability.log_format, "json");

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_env_overrides_file_values() {
        let path = std::env::temp_dir().join(format!("composer_config_{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "debug = false\n\n[listener]\nport = 6000\n").unwrap();
        let vars = env(&[("PORT", "7000"), ("DEBUG", "true")]);

        let config = load_with(Some(&path), |k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.listener.port, 7000);
        assert!(config.debug);

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = load_with(None, |_| None).unwrap();
        assert_eq!(config.listener.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_load_reports_validation_errors() {
        let path = std::env::temp_dir().join(format!("composer_config_{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();

        let err = load_with(Some(&path), |_| None).unwrap_err();
        assert!(err.to_string().contains("request_secs"));

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_with(Some(Path::new("/definitely/not/here.toml")), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
