//! CSV matrix transformation service library.

// Core pipeline
pub mod codec;
pub mod http;
pub mod matrix;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use matrix::{Matrix, Transform};
pub use routing::RouteTable;
