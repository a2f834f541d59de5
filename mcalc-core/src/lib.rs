//! mcalc Core - Fundamental types
//!
//! This crate provides the core types used throughout mcalc:
//! - `Matrix`: dense `f64` matrix with a fixed, non-empty shape
//! - `Shape`: rows × cols pair used in errors and reports
//! - `MatrixError`: typed errors grouped by `ErrorKind`

mod error;
mod matrix;

pub use error::{codes, ErrorKind, ErrorReport, MatrixError};
pub use matrix::{Matrix, Shape};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ErrorKind, Matrix, MatrixError, Shape};
}
