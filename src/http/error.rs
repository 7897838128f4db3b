//! Application error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors a handler can return.
///
/// The only variant is the synthetic failure raised on purpose to exercise
/// the error-path telemetry. Malformed requests and the like are handled by
/// axum's defaults and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Random failure")]
    SimulatedFailure,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::SimulatedFailure => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_failure_maps_to_500() {
        let response = AppError::SimulatedFailure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
