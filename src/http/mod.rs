//! HTTP surface of the sample services.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (record start time)
//!     → handlers.rs (hello span → simulated work → success or synthetic 500)
//!     → middleware.rs (observe latency, count request by method/path/status)
//!     → response to client
//!
//! GET /metrics bypasses nothing: the scrape itself is counted too.
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod static_demo;

pub use error::AppError;
pub use server::{AppState, HttpServer};
