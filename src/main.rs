//! Instrumented sample service.
//!
//! Composition root: load config, stand up the observability stack, build
//! the shared telemetry state, and serve until Ctrl+C.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ ┌──────────────────────────────────────────┐
//!                     │            sample-app                     │
//!                     │  ┌────────────┐    ┌──────────────────┐  │
//!                     │  │ timing     │───▶│ /api/hello        │  │
//!                     │  │ middleware │    │ /metrics          │  │
//!                     │  └─────┬──────┘    └────────┬──────────┘  │
//!                     │        │                    │             │
//!                     │        ▼                    ▼             │
//!                     │  ┌────────────┐    ┌──────────────────┐  │
//!                     │  │ Prometheus │    │ OTLP span export │  │
//!                     │  │ registry   │    │ + JSON logs      │  │
//!                     │  └────────────┘    └──────────────────┘  │
//!                     └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use sample_app::config;
use sample_app::http::HttpServer;
use sample_app::lifecycle::Shutdown;
use sample_app::observability::{logging, metrics::HttpMetrics, telemetry};
use sample_app::simulation::{RandomSource, SampledRandom};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;

    // Span export first so the logging subscriber can bridge into it.
    let telemetry = if config.observability.tracing_enabled {
        Some(telemetry::init(&config.observability)?)
    } else {
        None
    };
    logging::init(
        &config.observability,
        telemetry.as_ref().map(|t| t.tracer()),
    );

    tracing::info!(
        service = %config.observability.service_name,
        bind_address = %config.server.bind_address,
        otlp_endpoint = %config.observability.otlp_endpoint,
        failure_probability = config.simulation.failure_probability,
        "configuration loaded"
    );

    let metrics = Arc::new(HttpMetrics::new()?);
    let random: Arc<dyn RandomSource> = Arc::new(SampledRandom::from_config(&config.simulation));

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(metrics, random);
    server.run(listener, shutdown.subscribe()).await?;

    if let Some(telemetry) = telemetry {
        telemetry.shutdown();
    }

    tracing::info!("shutdown complete");
    Ok(())
}
