//! mcalc Ops - Matrix arithmetic
//!
//! Pure functions over [`Matrix`] values; inputs are never mutated.
//! - Element-wise operations (add, subtract)
//! - Scalar multiplication
//! - Matrix multiplication
//! - Determinant by cofactor expansion
//! - [`Operation`] selector for choosing one of the above at runtime
//! - nalgebra conversions
//!
//! Dimension rules live here: add/subtract need equal shapes, multiply needs
//! `a.cols == b.rows`, determinant needs a square matrix.

mod helpers;
mod ops;
mod determinant;
mod operation;
mod interop;

pub use ops::{add, subtract, elementwise, multiply, multiply_by_scalar, ElementwiseOp};
pub use determinant::determinant;
pub use operation::{Operation, Outcome, UnknownOperation};
pub use interop::{to_dmatrix, from_dmatrix};
pub use helpers::{check_matmul_dims, check_same_dims, check_square};

pub use mcalc_core::{Matrix, MatrixError};
