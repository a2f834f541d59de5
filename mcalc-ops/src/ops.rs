//! Matrix arithmetic: element-wise, scalar and matrix products

use mcalc_core::{Matrix, MatrixError};
use crate::helpers::{check_matmul_dims, check_same_dims};

/// The two element-wise binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementwiseOp {
    Add,
    Subtract,
}

impl ElementwiseOp {
    pub fn name(self) -> &'static str {
        match self {
            ElementwiseOp::Add => "add",
            ElementwiseOp::Subtract => "subtract",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            ElementwiseOp::Add => a + b,
            ElementwiseOp::Subtract => a - b,
        }
    }
}

// ============ add / subtract ============

/// Element-wise sum `a + b`
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, ElementwiseOp::Add)
}

/// Element-wise difference `a - b`
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    elementwise(a, b, ElementwiseOp::Subtract)
}

/// Apply `op` pairwise over two matrices of the same shape
pub fn elementwise(a: &Matrix, b: &Matrix, op: ElementwiseOp) -> Result<Matrix, MatrixError> {
    check_same_dims(a, b, op.name())?;

    let data: Vec<Vec<f64>> = a.data().iter()
        .zip(b.data())
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| op.apply(x, y)).collect())
        .collect();

    Matrix::from_rows(data)
}

// ============ scale ============

/// Multiply every element by `scalar`
pub fn multiply_by_scalar(m: &Matrix, scalar: f64) -> Matrix {
    m.map(|v| v * scalar)
}

// ============ multiply ============

/// Matrix product `a × b`
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_matmul_dims(a, b, "multiply")?;

    let (da, db) = (a.data(), b.data());
    let inner = a.cols();

    let mut data = Vec::with_capacity(a.rows());
    for i in 0..a.rows() {
        let mut row = Vec::with_capacity(b.cols());
        for j in 0..b.cols() {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += da[i][k] * db[k][j];
            }
            row.push(sum);
        }
        data.push(row);
    }

    Matrix::from_rows(data)
}
