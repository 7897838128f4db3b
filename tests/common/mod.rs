//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use sample_app::http::HttpServer;
use sample_app::lifecycle::Shutdown;
use sample_app::observability::metrics::HttpMetrics;
use sample_app::simulation::RandomSource;

/// A running instance of the instrumented service on a loopback port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub metrics: Arc<HttpMetrics>,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Spawn the instrumented service with an injected random source.
///
/// Binds port 0 so parallel tests never collide.
pub async fn spawn_app(random: Arc<dyn RandomSource>) -> TestApp {
    let metrics = Arc::new(HttpMetrics::new().unwrap());
    let server = HttpServer::new(metrics.clone(), random);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestApp {
        addr,
        metrics,
        shutdown,
    }
}

/// Extract the value of an exposition line matching the name and all labels.
#[allow(dead_code)]
pub fn sample_value(exposition: &str, name: &str, labels: &[&str]) -> Option<f64> {
    exposition
        .lines()
        .find(|line| line.starts_with(name) && labels.iter().all(|label| line.contains(label)))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}
