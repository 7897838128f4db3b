//! Request handlers for the instrumented sample service.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::simulation::RandomSource;

/// Query parameters for the hello endpoint.
#[derive(Debug, Deserialize)]
pub struct HelloParams {
    #[serde(default = "default_name")]
    name: String,
}

fn default_name() -> String {
    "world".to_string()
}

/// `GET /api/hello` — greets the caller after some simulated work.
///
/// Opens the `hello_handler` span, runs simulated work under a child span,
/// then either fails with a synthetic 500 (per the injected random source)
/// or returns the greeting. Start and outcome are both logged inside the
/// span, so the lines carry trace context.
pub async fn hello(
    State(state): State<AppState>,
    Query(params): Query<HelloParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let span = tracing::info_span!("hello_handler");
    async move {
        tracing::info!("handling request");

        simulated_work(state.random.as_ref()).await;

        if state.random.should_fail() {
            tracing::error!("simulated failure");
            return Err(AppError::SimulatedFailure);
        }

        let message = format!("Hello, {}!", params.name);
        tracing::info!(response = %message, "success response");
        Ok(Json(json!({ "message": message })))
    }
    .instrument(span)
    .await
}

/// Sleep for the injected delay inside its own child span.
///
/// Suspends only this request's task; concurrent requests keep running.
async fn simulated_work(random: &dyn RandomSource) {
    let span = tracing::info_span!("simulated_work");
    async move {
        let delay = random.work_delay();
        tokio::time::sleep(delay).await;
        tracing::info!(delay_ms = delay.as_millis() as u64, "did some work");
    }
    .instrument(span)
    .await
}

/// `GET /metrics` — Prometheus text exposition of the shared registry.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics.encode() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics unavailable").into_response()
        }
    }
}
