//! Matrix text renderer
//!
//! Writes the format read by the parser. Values use `f64`'s `Display`, the
//! shortest text that parses back to the same value, so rendering followed by
//! parsing reproduces the matrix exactly.

use mcalc_core::{Matrix, MatrixError};
use std::io::Write;

/// Render a matrix as text, one line per row with a trailing newline
pub fn to_text(m: &Matrix) -> String {
    let mut output = m.to_text();
    output.push('\n');
    output
}

/// Write a matrix to `writer` in the same form as [`to_text`]
pub fn write_matrix<W: Write>(m: &Matrix, mut writer: W) -> Result<(), MatrixError> {
    writeln!(writer, "{}", m)
        .and_then(|_| writer.flush())
        .map_err(|source| MatrixError::Io { path: None, source })
}
