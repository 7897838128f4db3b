//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (OTEL_* variables)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared with the composition root
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the service runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{AppConfig, ObservabilityConfig, ServerConfig, SimulationConfig};
