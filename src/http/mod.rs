//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, one POST route per table entry)
//!     → request.rs (request ID)
//!     → handler.rs
//!         → upload.rs (multipart `file` field)
//!         → codec + matrix
//!     → error.rs (failures as status-200 `error` bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod server;
pub mod upload;

pub use error::RequestError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
pub use upload::{UploadError, FILE_FIELD};
