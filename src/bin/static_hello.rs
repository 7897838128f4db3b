//! Static hello service (CI/CD pipeline demo).
//!
//! Serves the single fixed-payload route. Bind address comes from
//! `BIND_ADDRESS`, defaulting to the usual demo port.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sample_app::http::static_demo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let listener = TcpListener::bind(&bind_address).await?;

    tracing::info!(address = %listener.local_addr()?, "static hello service listening");

    axum::serve(listener, static_demo::router()).await?;
    Ok(())
}
