//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (probability in [0, 1], delay range ordered)
//! - Check the bind address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::AppConfig;
use std::net::SocketAddr;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("failure_probability {0} is outside [0, 1]")]
    FailureProbabilityOutOfRange(f64),

    #[error("min_delay_ms {min} exceeds max_delay_ms {max}")]
    DelayRangeInverted { min: u64, max: u64 },

    #[error("otlp_endpoint must not be empty when tracing is enabled")]
    EmptyOtlpEndpoint,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    let p = config.simulation.failure_probability;
    if !(0.0..=1.0).contains(&p) || p.is_nan() {
        errors.push(ValidationError::FailureProbabilityOutOfRange(p));
    }

    if config.simulation.min_delay_ms > config.simulation.max_delay_ms {
        errors.push(ValidationError::DelayRangeInverted {
            min: config.simulation.min_delay_ms,
            max: config.simulation.max_delay_ms,
        });
    }

    if config.observability.tracing_enabled && config.observability.otlp_endpoint.is_empty() {
        errors.push(ValidationError::EmptyOtlpEndpoint);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let mut config = AppConfig::default();
        config.simulation.failure_probability = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::FailureProbabilityOutOfRange(1.5)));
    }

    #[test]
    fn test_rejects_inverted_delay_range() {
        let mut config = AppConfig::default();
        config.simulation.min_delay_ms = 500;
        config.simulation.max_delay_ms = 100;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DelayRangeInverted { min: 500, max: 100 }));
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.bind_address = "not-an-address".to_string();
        config.simulation.failure_probability = -0.1;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
