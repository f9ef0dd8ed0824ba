//! CSV codec between upload bytes and matrix rows.
//!
//! # Data Flow
//! ```text
//! upload bytes → decode.rs (csv::Reader, no header row) → Vec<Vec<String>>
//! Matrix rows  → encode.rs (cells joined by ',', one '\n' per row) → String
//! ```
//!
//! # Design Decisions
//! - The first CSV record is data, never a header
//! - Ragged records are rejected by the parser itself
//! - Output cells are written as-is: no quoting is added on the way out

pub mod decode;
pub mod encode;

pub use decode::{decode, DecodeError};
pub use encode::encode;
