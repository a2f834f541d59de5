//! Plain-text matrix parser
//!
//! One row per line, values separated by runs of whitespace. Every value must
//! parse as `f64` and every row must have as many values as the first one.
//! Blank lines after the last row are ignored; a blank line anywhere before a
//! data line is an error.

use mcalc_core::{Matrix, MatrixError};
use std::io::BufRead;

/// Parse a matrix from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Matrix, MatrixError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected_cols: Option<usize> = None;
    let mut first_blank: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| MatrixError::Io { path: None, source })?;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            // Only an error if another data line follows
            first_blank.get_or_insert(line_no);
            continue;
        }
        if let Some(blank) = first_blank {
            return Err(MatrixError::BlankRow { line: blank });
        }

        let row = parse_row(&tokens, line_no)?;
        match expected_cols {
            None => expected_cols = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(MatrixError::RaggedRow { line: line_no, expected, found: row.len() });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MatrixError::EmptySource);
    }

    Matrix::from_rows(rows)
}

/// Parse a matrix from a string
pub fn parse_str(input: &str) -> Result<Matrix, MatrixError> {
    parse_reader(input.as_bytes())
}

fn parse_row(tokens: &[&str], line_no: usize) -> Result<Vec<f64>, MatrixError> {
    tokens.iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| MatrixError::NotNumeric {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}
