//! Observability sample services.
//!
//! Two independent demo artifacts in one crate:
//!
//! - **Instrumented sample service** (`sample-app`): an Axum application with
//!   `/api/hello` and `/metrics`, a request-timing middleware, OTLP span
//!   export, and JSON logs correlated with the active span.
//! - **Static hello service** (`static-hello`): one route returning a fixed
//!   JSON payload, built to exercise a CI/CD pipeline.
//!
//! ```text
//! inbound request
//!     → middleware (start timer)
//!     → hello handler (span → simulated work span → success | synthetic 500)
//!     → middleware (histogram observe + counter inc by method/path/status)
//!     → response
//!
//! GET /metrics → text exposition of the shared registry
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod simulation;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
