//! Static hello service (CI/CD pipeline demo).
//!
//! One route, one fixed payload, no state. Exists to give a pipeline
//! something real to build, test, and ship.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Build the single-route router for the static demo.
pub fn router() -> Router {
    Router::new().route("/", get(home))
}

/// `GET /` — the fixed demo payload.
async fn home() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello from CI/CD demo!" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_home_returns_fixed_message() {
        let app = router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload, json!({ "message": "Hello from CI/CD demo!" }));
    }
}
