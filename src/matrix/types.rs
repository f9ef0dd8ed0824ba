//! Rectangular matrix of string cells.

use std::fmt;

/// Reasons a set of rows cannot form a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// No rows at all.
    Empty,
    /// A row whose width differs from the first row.
    Ragged {
        /// 1-based index of the offending row.
        row: usize,
        /// Number of cells actually found.
        len: usize,
        /// Width of the first row.
        expected: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Empty => write!(f, "matrix has no rows"),
            MatrixError::Ragged { row, len, expected } => write!(
                f,
                "row {} has {} columns, expected {} columns",
                row, len, expected
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// A grid where every row has the same number of cells.
///
/// Input matrices have at least one row, though rows may be empty. Inverting
/// a matrix of zero-width rows yields one with no rows at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<String>>,
}

impl Matrix {
    /// Validate `rows` and wrap them.
    ///
    /// The first row fixes the column count. Validation stops at the first
    /// row that disagrees, reporting it with a 1-based index.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, MatrixError> {
        let expected = match rows.first() {
            Some(first) => first.len(),
            None => return Err(MatrixError::Empty),
        };

        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(MatrixError::Ragged {
                row: i + 1,
                len: row.len(),
                expected,
            });
        }

        Ok(Self { rows })
    }

    /// Build from rows a transform already knows to be rectangular.
    pub(crate) fn from_validated(rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.windows(2).all(|pair| pair[0].len() == pair[1].len()));
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}
