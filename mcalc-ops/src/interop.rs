//! Conversions to and from nalgebra's `DMatrix<f64>`

use mcalc_core::{Matrix, MatrixError};
use nalgebra::DMatrix;

/// Copy a matrix into a nalgebra `DMatrix`
pub fn to_dmatrix(m: &Matrix) -> DMatrix<f64> {
    DMatrix::from_fn(m.rows(), m.cols(), |i, j| m.data()[i][j])
}

/// Build a matrix from a nalgebra `DMatrix`
///
/// Fails with a shape error when `dm` has no rows or no columns.
pub fn from_dmatrix(dm: &DMatrix<f64>) -> Result<Matrix, MatrixError> {
    if dm.nrows() == 0 || dm.ncols() == 0 {
        return Err(MatrixError::InvalidShape { rows: dm.nrows(), cols: dm.ncols() });
    }

    let data: Vec<Vec<f64>> = dm.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect();
    Matrix::from_rows(data)
}
