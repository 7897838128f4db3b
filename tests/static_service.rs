//! Integration test for the static hello service.

use tokio::net::TcpListener;

use sample_app::http::static_demo;

#[tokio::test]
async fn test_root_serves_fixed_payload() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, static_demo::router()).await;
    });

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("service unreachable");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Hello from CI/CD demo!" }));
}
