//! Loading and saving matrix files

use mcalc_core::{Matrix, MatrixError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use crate::{parser, render};

/// How `save` treats the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Replace the contents of a file that must already exist
    Overwrite,
    /// Create a file that must not exist yet, along with missing parent directories
    CreateNew,
}

/// Read and parse the matrix stored at `path`
pub fn load(path: impl AsRef<Path>) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatrixError::io(path, e))?;

    parser::parse_reader(BufReader::new(file)).map_err(|err| match err {
        MatrixError::Io { path: None, source } => MatrixError::io(path, source),
        other => other,
    })
}

/// Write `m` to `path` in the text format
pub fn save(m: &Matrix, path: impl AsRef<Path>, mode: SaveMode) -> Result<(), MatrixError> {
    let path = path.as_ref();

    let file = match mode {
        SaveMode::Overwrite => OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path),
        SaveMode::CreateNew => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| MatrixError::io(parent, e))?;
            }
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
        }
    }
    .map_err(|e| MatrixError::io(path, e))?;

    render::write_matrix(m, BufWriter::new(file)).map_err(|err| match err {
        MatrixError::Io { path: None, source } => MatrixError::io(path, source),
        other => other,
    })
}
