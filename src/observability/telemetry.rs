//! OpenTelemetry span export.
//!
//! Sets up an OTLP exporter (gRPC) with batch processing and a resource
//! carrying the service identity. The returned tracer plugs into the
//! `tracing` subscriber via `tracing-opentelemetry`, so spans opened with
//! `tracing::info_span!` flow to the collector.

use opentelemetry::trace::{TraceError, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{Tracer, TracerProvider},
    Resource,
};

use crate::config::schema::ObservabilityConfig;

/// Guard owning the tracer provider; spans flush when it shuts down.
pub struct Telemetry {
    provider: TracerProvider,
}

impl Telemetry {
    /// Tracer handle for bridging into the `tracing` subscriber.
    pub fn tracer(&self) -> Tracer {
        self.provider.tracer(env!("CARGO_PKG_NAME"))
    }

    /// Flush pending spans and shut the export pipeline down.
    pub fn shutdown(self) {
        if let Err(error) = self.provider.shutdown() {
            tracing::warn!(error = %error, "tracer provider shutdown failed");
        }
    }
}

/// Initialize the OTLP export pipeline.
///
/// Must run inside a Tokio runtime; the batch processor spawns on it.
pub fn init(config: &ObservabilityConfig) -> Result<Telemetry, TraceError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otlp_endpoint.as_str())
        .build()?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(Resource::new(vec![
            KeyValue::new("service.name", config.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("deployment.environment", "dev"),
        ]))
        .build();

    opentelemetry::global::set_tracer_provider(provider.clone());

    Ok(Telemetry { provider })
}
