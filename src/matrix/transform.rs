//! Matrix transforms served by the HTTP routes.
//!
//! Every transform is a pure function over an already-validated matrix.
//! Sum and multiply parse cells as base-10 `i64`; a cell that fails to parse
//! counts as 0 and arithmetic wraps on overflow.

use crate::matrix::types::Matrix;

/// The operations a route can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Identity.
    Echo,
    /// Transpose: `out[j][i] = in[i][j]`.
    Invert,
    /// One row holding every cell in row-major order.
    Flatten,
    /// Single cell holding the sum of all cells.
    Sum,
    /// Single cell holding the product of all cells.
    Multiply,
}

impl Transform {
    pub const ALL: [Transform; 5] = [
        Transform::Echo,
        Transform::Invert,
        Transform::Flatten,
        Transform::Sum,
        Transform::Multiply,
    ];

    /// Short name used for routes, logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Echo => "echo",
            Transform::Invert => "invert",
            Transform::Flatten => "flatten",
            Transform::Sum => "sum",
            Transform::Multiply => "multiply",
        }
    }

    pub fn apply(self, matrix: Matrix) -> Matrix {
        match self {
            Transform::Echo => matrix,
            Transform::Invert => invert(matrix),
            Transform::Flatten => flatten(matrix),
            Transform::Sum => sum(&matrix),
            Transform::Multiply => multiply(&matrix),
        }
    }
}

fn invert(matrix: Matrix) -> Matrix {
    let columns = matrix.column_count();
    let mut inverted: Vec<Vec<String>> = (0..columns)
        .map(|_| Vec::with_capacity(matrix.row_count()))
        .collect();

    for row in matrix.into_rows() {
        for (j, cell) in row.into_iter().enumerate() {
            inverted[j].push(cell);
        }
    }

    Matrix::from_validated(inverted)
}

fn flatten(matrix: Matrix) -> Matrix {
    let flat = matrix.into_rows().into_iter().flatten().collect();
    Matrix::from_validated(vec![flat])
}

fn sum(matrix: &Matrix) -> Matrix {
    let total = matrix
        .cells()
        .map(parse_cell)
        .fold(0i64, i64::wrapping_add);
    single_cell(total)
}

fn multiply(matrix: &Matrix) -> Matrix {
    let product = matrix
        .cells()
        .map(parse_cell)
        .fold(1i64, i64::wrapping_mul);
    single_cell(product)
}

/// Lenient integer parse: anything that is not a base-10 `i64` is 0.
fn parse_cell(cell: &str) -> i64 {
    cell.parse().unwrap_or(0)
}

fn single_cell(value: i64) -> Matrix {
    Matrix::from_validated(vec![vec![value.to_string()]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(grid: &[&[&str]]) -> Matrix {
        Matrix::new(
            grid.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn square(n: usize) -> Matrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i * n + j + 1).to_string()).collect())
            .collect();
        Matrix::new(rows).unwrap()
    }

    fn cells(m: &Matrix) -> Vec<Vec<&str>> {
        m.rows()
            .iter()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_echo_is_identity() {
        let m = square(3);
        assert_eq!(Transform::Echo.apply(m.clone()), m);
    }

    #[test]
    fn test_invert_square() {
        let out = Transform::Invert.apply(square(3));
        assert_eq!(
            cells(&out),
            vec![vec!["1", "4", "7"], vec!["2", "5", "8"], vec!["3", "6", "9"]]
        );
    }

    #[test]
    fn test_invert_non_square_changes_shape() {
        let out = Transform::Invert.apply(matrix(&[&["a", "b", "c"], &["d", "e", "f"]]));
        assert_eq!(out.row_count(), 3);
        assert_eq!(out.column_count(), 2);
        assert_eq!(cells(&out), vec![vec!["a", "d"], vec!["b", "e"], vec!["c", "f"]]);
    }

    #[test]
    fn test_invert_twice_is_original() {
        for m in [square(1), square(4), matrix(&[&["x", "y"]]), matrix(&[&["p"], &["q"], &["r"]])] {
            let twice = Transform::Invert.apply(Transform::Invert.apply(m.clone()));
            assert_eq!(twice, m);
        }
    }

    #[test]
    fn test_zero_width_rows() {
        let m = Matrix::new(vec![Vec::new(), Vec::new()]).unwrap();

        let inverted = Transform::Invert.apply(m.clone());
        assert_eq!(inverted.row_count(), 0);
        assert_eq!(inverted.column_count(), 0);
        assert_eq!(crate::codec::encode(inverted.rows()), "");

        assert_eq!(cells(&Transform::Flatten.apply(m.clone())), vec![Vec::<&str>::new()]);
        assert_eq!(cells(&Transform::Sum.apply(m.clone())), vec![vec!["0"]]);
        assert_eq!(cells(&Transform::Multiply.apply(m)), vec![vec!["1"]]);
    }

    #[test]
    fn test_flatten_row_major() {
        let out = Transform::Flatten.apply(matrix(&[&["a", "b"], &["c", "d"], &["e", "f"]]));
        assert_eq!(cells(&out), vec![vec!["a", "b", "c", "d", "e", "f"]]);

        let out = Transform::Flatten.apply(square(4));
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.column_count(), 16);
    }

    #[test]
    fn test_sum() {
        assert_eq!(cells(&Transform::Sum.apply(square(3))), vec![vec!["45"]]);
        assert_eq!(cells(&Transform::Sum.apply(square(4))), vec![vec!["136"]]);
    }

    #[test]
    fn test_sum_treats_non_numeric_as_zero() {
        let out = Transform::Sum.apply(matrix(&[&["10", "abc", ""], &["-4", "+2", "1.5"]]));
        assert_eq!(cells(&out), vec![vec!["8"]]);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(cells(&Transform::Multiply.apply(square(3))), vec![vec!["362880"]]);
        assert_eq!(
            cells(&Transform::Multiply.apply(square(4))),
            vec![vec!["20922789888000"]]
        );
    }

    #[test]
    fn test_multiply_non_numeric_forces_zero() {
        let out = Transform::Multiply.apply(matrix(&[&["2", "3"], &["x", "5"]]));
        assert_eq!(cells(&out), vec![vec!["0"]]);
    }

    #[test]
    fn test_out_of_range_cell_is_zero() {
        let out = Transform::Sum.apply(matrix(&[&["99999999999999999999", "7"]]));
        assert_eq!(cells(&out), vec![vec!["7"]]);
    }

    #[test]
    fn test_overflow_wraps() {
        let max = i64::MAX.to_string();
        let out = Transform::Sum.apply(matrix(&[&[max.as_str(), "1"]]));
        assert_eq!(cells(&out), vec![vec![i64::MIN.to_string().as_str()]]);

        let out = Transform::Multiply.apply(matrix(&[&[max.as_str(), "2"]]));
        assert_eq!(cells(&out), vec![vec!["-2"]]);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Transform::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Transform::ALL.len());
    }
}
