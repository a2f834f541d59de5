//! Runtime configuration from the environment and command line

use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base directory for relative matrix paths (`MCALC_DATA_PATH`)
    pub data_path: PathBuf,
    /// Result rendering (`MCALC_OUTPUT`)
    pub output: OutputFormat,
    /// tracing filter directive (`MCALC_LOG`)
    pub log_filter: String,
    /// Matrix files named on the command line, loaded into the slots in order
    pub preload: Vec<PathBuf>,
}

impl Config {
    /// Read the process environment and arguments
    pub fn from_env() -> Self {
        Self::from_parts(|key| env::var(key).ok(), env::args().skip(1))
    }

    pub fn from_parts<F, I>(var: F, args: I) -> Self
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let data_path = var("MCALC_DATA_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let output = var("MCALC_OUTPUT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let log_filter = var("MCALC_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let preload = args.into_iter().map(PathBuf::from).collect();

        Self { data_path, output, log_filter, preload }
    }

    /// Resolve a user-supplied path against `data_path`
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_path.join(path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_parts(|_| None, Vec::new())
    }
}
