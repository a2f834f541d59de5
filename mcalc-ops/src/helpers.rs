//! Dimension checks shared by the operations

use mcalc_core::{Matrix, MatrixError};

/// Check that two matrices have compatible dimensions for multiplication
pub fn check_matmul_dims(a: &Matrix, b: &Matrix, op: &'static str) -> Result<(), MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch { op, left: a.shape(), right: b.shape() });
    }
    Ok(())
}

/// Check that two matrices have the same dimensions
pub fn check_same_dims(a: &Matrix, b: &Matrix, op: &'static str) -> Result<(), MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch { op, left: a.shape(), right: b.shape() });
    }
    Ok(())
}

/// Check that a matrix is square
pub fn check_square(m: &Matrix) -> Result<(), MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare(m.shape()));
    }
    Ok(())
}
