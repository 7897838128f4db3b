//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events, trace-correlated)
//!     → metrics.rs (request counter + latency histogram)
//!     → telemetry.rs (spans exported over OTLP)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON)
//!     → Metrics endpoint (Prometheus scrape of /metrics)
//!     → Distributed tracing backend (e.g., Jaeger)
//! ```
//!
//! # Design Decisions
//! - Metrics live in an injected registry, not the process default one
//! - Metric updates are atomic; safe from concurrent in-flight requests
//! - Span export is optional so tests never need a collector

pub mod logging;
pub mod metrics;
pub mod telemetry;

pub use metrics::HttpMetrics;
pub use telemetry::Telemetry;
