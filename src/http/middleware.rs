//! Request-timing middleware.
//!
//! # Responsibilities
//! - Wrap every inbound request so exactly one metrics observation is
//!   recorded per request, success or failure
//! - Label the counter with the request's method, raw path, and final status
//!
//! # Design Decisions
//! - Handler failures are already `IntoResponse`-converted to 500s by the
//!   time the response comes back through this layer, so the error path is
//!   observed as status 500 without any re-raise machinery
//! - The endpoint label is the raw path verbatim (no route-template
//!   normalization); unmatched paths become their own label series

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::server::AppState;

/// Observe latency and count the request once the rest of the chain is done.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request.uri().path().to_string();

    let response = next.run(request).await;

    state.metrics.observe_request(
        &method,
        &endpoint,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}
