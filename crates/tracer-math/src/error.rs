use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("matrix is singular (determinant {determinant} is within tolerance of zero)")]
    Singular { determinant: f64 },

    #[error("dimension mismatch: {lhs_height}x{lhs_width} cannot multiply {rhs_height}x{rhs_width}")]
    DimensionMismatch {
        lhs_height: usize,
        lhs_width: usize,
        rhs_height: usize,
        rhs_width: usize,
    },

    #[error("expected a square matrix, got {height}x{width}")]
    NotSquare { height: usize, width: usize },

    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },

    #[error("matrix has no rows or no columns")]
    Empty,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
