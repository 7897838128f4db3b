//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the sample
//! services. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the instrumented sample service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration (bind address).
    pub server: ServerConfig,

    /// Observability settings (logging, tracing export).
    pub observability: ObservabilityConfig,

    /// Simulated workload settings (delay range, failure rate).
    pub simulation: SimulationConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON (pretty text when false).
    pub log_json: bool,

    /// Service name reported on exported spans.
    /// Overridden by `OTEL_SERVICE_NAME`.
    pub service_name: String,

    /// OTLP trace collector endpoint (gRPC).
    /// Overridden by `OTEL_EXPORTER_OTLP_ENDPOINT`.
    pub otlp_endpoint: String,

    /// Enable span export. Logging and metrics are always on.
    pub tracing_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: true,
            service_name: "sample-app".to_string(),
            otlp_endpoint: "http://jaeger:4317".to_string(),
            tracing_enabled: true,
        }
    }
}

/// Simulated workload configuration.
///
/// The hello handler sleeps a random duration inside this range and fails
/// with the given probability, to exercise both telemetry paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Minimum simulated work delay in milliseconds.
    pub min_delay_ms: u64,

    /// Maximum simulated work delay in milliseconds.
    pub max_delay_ms: u64,

    /// Probability in [0, 1] that a request fails with a synthetic 500.
    pub failure_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 10,
            max_delay_ms: 300,
            failure_probability: 0.1,
        }
    }
}
