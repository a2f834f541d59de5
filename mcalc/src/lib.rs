//! mcalc - Plain-text matrix calculator
//!
//! Reads matrices from whitespace-separated text, runs arithmetic on them
//! through [`mcalc_ops`], and writes results back in the same format.
//!
//! ```text
//! 1.0 2.0
//! 3.0 4.0
//! ```

mod parser;
mod render;
mod file;

pub use parser::{parse_reader, parse_str};
pub use render::{to_text, write_matrix};
pub use file::{load, save, SaveMode};

pub use mcalc_core::{codes, ErrorKind, ErrorReport, Matrix, MatrixError, Shape};
pub use mcalc_ops::{
    add, subtract, multiply, multiply_by_scalar, determinant,
    Operation, Outcome,
};
