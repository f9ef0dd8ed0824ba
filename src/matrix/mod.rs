//! Matrix domain.
//!
//! # Data Flow
//! ```text
//! decoded CSV rows (Vec<Vec<String>>)
//!     → types.rs (Matrix::new: non-empty + rectangular check)
//!     → transform.rs (Transform::apply, pure Matrix → Matrix)
//!     → codec::encode
//! ```
//!
//! # Design Decisions
//! - A `Matrix` can only be built through validation, so transforms never
//!   re-check shape
//! - Transforms consume their input and return a fresh matrix
//! - Numeric transforms coerce unparseable cells to 0 instead of failing

pub mod transform;
pub mod types;

pub use transform::Transform;
pub use types::{Matrix, MatrixError};
