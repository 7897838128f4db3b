//! HTTP server setup for the instrumented sample service.
//!
//! # Responsibilities
//! - Create the Axum router with the hello and metrics handlers
//! - Wire up middleware (request timing, trace layer)
//! - Serve with graceful shutdown on the lifecycle signal

use std::sync::Arc;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::middleware::track_requests;
use crate::observability::metrics::HttpMetrics;
use crate::simulation::RandomSource;

/// Process-wide context injected into the middleware and handlers.
///
/// Built once in the composition root; no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<HttpMetrics>,
    pub random: Arc<dyn RandomSource>,
}

/// HTTP server for the instrumented sample service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the shared telemetry state.
    pub fn new(metrics: Arc<HttpMetrics>, random: Arc<dyn RandomSource>) -> Self {
        let state = AppState { metrics, random };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The timing layer wraps every route, the scrape endpoint included, so
    /// each completed request is observed exactly once.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/hello", get(handlers::hello))
            .route("/metrics", get(handlers::metrics))
            .with_state(state.clone())
            .layer(middleware::from_fn_with_state(state, track_requests))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
