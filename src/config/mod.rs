//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! matrix-service.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to logging, metrics and HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The listen address is fixed and deliberately not part of the schema

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_config, ConfigError, CONFIG_FILE};
pub use schema::{LimitsConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig, LISTEN_ADDRESS};
pub use validation::{validate_config, ValidationError};
