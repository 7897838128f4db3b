//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the whole process
//! - JSON output for production, pretty output for development
//! - Compose the OpenTelemetry layer in so log lines carry span context
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured log level
//! - Called once from the binary; tests install their own subscribers

use opentelemetry_sdk::trace::Tracer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Install the global subscriber: env filter, optional OTel layer, fmt layer.
pub fn init(config: &ObservabilityConfig, tracer: Option<Tracer>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let otel_layer = tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    let registry = tracing_subscriber::registry().with(filter).with(otel_layer);

    if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
