//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     Transform::ALL
//!     → table.rs (path → Transform entries)
//!     → Freeze as immutable RouteTable
//!     → HttpServer::new mounts one POST route per entry
//! ```
//!
//! # Design Decisions
//! - Routes built once at startup, immutable at runtime
//! - Exact path match only, dispatch handled by the axum router
//! - No process-wide registration: the table is passed in explicitly

pub mod table;

pub use table::{Route, RouteError, RouteTable};
