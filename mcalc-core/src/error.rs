//! Typed errors for matrix construction, parsing and arithmetic
//!
//! Every failure in the library crates is a `MatrixError`. Errors are never
//! printed or logged here; callers decide how to present them. Each variant
//! belongs to exactly one `ErrorKind`, which carries a stable
//! machine-readable code.

use crate::Shape;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const DIMENSION_ERROR: &str = "DIMENSION_ERROR";
    pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
    pub const INDEX_ERROR: &str = "INDEX_ERROR";
    pub const OPERAND_ERROR: &str = "OPERAND_ERROR";
}

/// Error category, one per recovery strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Malformed or empty textual input
    Format,
    /// Underlying read or write failure
    Io,
    /// Operand shapes incompatible for the requested operation
    Dimension,
    /// Invalid construction, or a square matrix was required
    Shape,
    /// Element access out of bounds
    Index,
    /// An operation was applied without the operands it needs
    Operand,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Format => codes::FORMAT_ERROR,
            ErrorKind::Io => codes::IO_ERROR,
            ErrorKind::Dimension => codes::DIMENSION_ERROR,
            ErrorKind::Shape => codes::SHAPE_ERROR,
            ErrorKind::Index => codes::INDEX_ERROR,
            ErrorKind::Operand => codes::OPERAND_ERROR,
        }
    }
}

/// Error type for every fallible matrix operation
#[derive(Debug, Error)]
pub enum MatrixError {
    // ========== Format ==========
    #[error("line {line}: expected a numeric value, found '{token}'")]
    NotNumeric { line: usize, token: String },

    #[error("line {line}: rows must have equal length (expected {expected} values, found {found})")]
    RaggedRow { line: usize, expected: usize, found: usize },

    #[error("line {line}: row is blank")]
    BlankRow { line: usize },

    #[error("source is empty")]
    EmptySource,

    // ========== I/O ==========
    #[error("{}: {source}", describe_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    // ========== Dimension ==========
    #[error("{op}: incompatible dimensions {left} and {right}")]
    DimensionMismatch { op: &'static str, left: Shape, right: Shape },

    // ========== Shape ==========
    #[error("matrix dimensions must be positive, got {rows}×{cols}")]
    InvalidShape { rows: usize, cols: usize },

    #[error("matrix cannot be built from an empty grid")]
    EmptyGrid,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("determinant requires a square matrix, got {0}")]
    NotSquare(Shape),

    // ========== Index ==========
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    // ========== Operand ==========
    #[error("{op}: missing {operand}")]
    MissingOperand { op: &'static str, operand: &'static str },
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("i/o error on '{}'", p.display()),
        None => "i/o error".to_string(),
    }
}

impl MatrixError {
    /// Wrap an I/O error that happened while working on `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MatrixError::Io { path: Some(path.into()), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::NotNumeric { .. }
            | MatrixError::RaggedRow { .. }
            | MatrixError::BlankRow { .. }
            | MatrixError::EmptySource => ErrorKind::Format,
            MatrixError::Io { .. } => ErrorKind::Io,
            MatrixError::DimensionMismatch { .. } => ErrorKind::Dimension,
            MatrixError::InvalidShape { .. }
            | MatrixError::EmptyGrid
            | MatrixError::RaggedGrid { .. }
            | MatrixError::NotSquare(_) => ErrorKind::Shape,
            MatrixError::IndexOutOfBounds { .. } => ErrorKind::Index,
            MatrixError::MissingOperand { .. } => ErrorKind::Operand,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Suggestion for recovering from the error
    pub fn suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Format => "Fix the file contents: one row per line, equal-length rows of numbers",
            ErrorKind::Io => "Check the file path and permissions, or try a different path",
            ErrorKind::Dimension => "Select operands with compatible dimensions or a different operation",
            ErrorKind::Shape => match self {
                MatrixError::NotSquare(_) => "Select a square matrix",
                _ => "Use at least one row and one column",
            },
            ErrorKind::Index => "Use an index inside the matrix bounds",
            ErrorKind::Operand => "Supply every operand the operation needs",
        }
    }

    /// Serializable snapshot of the error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            kind: self.kind(),
            message: self.to_string(),
            suggestion: self.suggestion().to_string(),
        }
    }
}

/// Structured error for display or JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    pub suggestion: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} (suggestion: {})", self.code, self.message, self.suggestion)
    }
}
