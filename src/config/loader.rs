//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load the configuration, then apply environment overrides and validate.
///
/// With no path the built-in defaults are used, so the service runs without
/// any config file. `OTEL_SERVICE_NAME` and `OTEL_EXPORTER_OTLP_ENDPOINT`
/// always win over file values.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(name) = env::var("OTEL_SERVICE_NAME") {
        if !name.is_empty() {
            config.observability.service_name = name;
        }
    }
    if let Ok(endpoint) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        if !endpoint.is_empty() {
            config.observability.otlp_endpoint = endpoint;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [server]
            bind_address = "127.0.0.1:9001"

            [simulation]
            failure_probability = 0.25
            "#
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9001");
        assert_eq!(config.simulation.failure_probability, 0.25);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [simulation]
            failure_probability = 2.0
            "#
        )
        .unwrap();

        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    // The only test that touches process environment; keep it that way to
    // avoid races between parallel tests.
    #[test]
    fn test_env_overrides_win() {
        env::set_var("OTEL_SERVICE_NAME", "env-app");
        env::set_var("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317");

        let config = load(None).unwrap();
        assert_eq!(config.observability.service_name, "env-app");
        assert_eq!(config.observability.otlp_endpoint, "http://collector:4317");

        env::remove_var("OTEL_SERVICE_NAME");
        env::remove_var("OTEL_EXPORTER_OTLP_ENDPOINT");
    }
}
