//! Dense matrix and shape types

use crate::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Dense row-major matrix of `f64`
///
/// The shape is fixed at construction and is always at least 1×1 with every
/// row holding exactly `cols` values. Element values can be changed in place
/// through [`Matrix::set`]; nothing else mutates a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

/// Unvalidated wire form, checked by `Matrix::from_rows` on deserialize
#[derive(Deserialize)]
struct MatrixRepr {
    data: Vec<Vec<f64>>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self, Self::Error> {
        Matrix::from_rows(repr.data)
    }
}

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols });
        }
        Ok(Self { rows, cols, data: vec![vec![0.0; cols]; rows] })
    }

    /// Create a matrix that takes ownership of `data`
    ///
    /// The first row fixes the column count and every other row must match it.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = match data.first() {
            None => return Err(MatrixError::EmptyGrid),
            Some(first) if first.is_empty() => return Err(MatrixError::EmptyGrid),
            Some(first) => first.len(),
        };

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedGrid { row: i, expected: cols, found: row.len() });
            }
        }

        Ok(Self { rows: data.len(), cols, data })
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(self.data[row][col])
    }

    /// Overwrite element at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_bounds(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Read-only view of the full grid
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Get a row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.data.get(row).map(Vec::as_slice)
    }

    /// Give the grid back to the caller
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// New matrix of the same shape with `f` applied to every element
    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|row| row.iter().map(|&v| f(v)).collect()).collect(),
        }
    }

    /// Canonical text form: one line per row, values separated by one space
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds { row, col, shape: self.shape() });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", val)?;
            }
        }
        Ok(())
    }
}
