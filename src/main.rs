//! CSV matrix service.
//!
//! # Architecture Overview
//!
//! ```text
//!   POST /<op> (multipart, field `file`)
//!        │
//!        ▼
//!   ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌─────────────┐   ┌──────────┐
//!   │  http    │──▶│  upload   │──▶│  codec   │──▶│   matrix    │──▶│  codec   │──▶ text body
//!   │ server   │   │ `file`    │   │ decode   │   │ validate +  │   │ encode   │
//!   │ (routes) │   │  field    │   │          │   │ transform   │   │          │
//!   └──────────┘   └───────────┘   └──────────┘   └─────────────┘   └──────────┘
//!
//!   Cross-cutting: config, observability (tracing, metrics), lifecycle
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    matrix_service::lifecycle::startup::run().await
}
