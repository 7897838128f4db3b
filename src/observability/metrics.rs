//! Metrics collection and exposition.
//!
//! # Metrics
//! - `app_requests_total` (counter): requests by method, endpoint, status
//! - `app_request_latency_seconds` (histogram): latency distribution by endpoint
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - The endpoint label carries the raw request path, not a route template;
//!   distinct concrete paths produce distinct label series
//! - Histogram buckets tuned for typical web latencies

use std::time::Duration;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Latency histogram buckets in seconds.
const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0];

/// Request metrics shared by the middleware and the scrape endpoint.
///
/// Owns its own registry so all telemetry state lives in one injected object.
pub struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
}

impl HttpMetrics {
    /// Create and register the request counter and latency histogram.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("app_requests_total", "Total HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(requests.clone()))?;

        let latency = HistogramVec::new(
            HistogramOpts::new("app_request_latency_seconds", "Request latency in seconds")
                .buckets(LATENCY_BUCKETS.to_vec()),
            &["endpoint"],
        )?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    /// Record one completed request: exactly one histogram observation and
    /// one counter increment, whatever the outcome was.
    pub fn observe_request(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        self.latency
            .with_label_values(&[endpoint])
            .observe(elapsed.as_secs_f64());
        self.requests
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();
    }

    /// Serialize the registry into the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}
