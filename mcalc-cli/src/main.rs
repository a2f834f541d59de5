//! mcalc - interactive matrix calculator
//!
//! Environment:
//! - MCALC_DATA_PATH: base directory for relative matrix paths (default ".")
//! - MCALC_OUTPUT: "text" or "json" result rendering (default "text")
//! - MCALC_LOG: tracing filter for stderr diagnostics (default "warn")
//!
//! Up to two matrix files may be passed as arguments to fill the slots
//! before the menu starts.

mod config;
mod session;

use config::{Config, DEFAULT_LOG_FILTER};
use session::Session;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_path = %config.data_path.display(),
        output = ?config.output,
        "mcalc starting"
    );
    if let Ok(json) = serde_json::to_string(&config) {
        debug!(config = %json, "resolved configuration");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock(), stderr.lock());

    let result = session.preload().and_then(|()| session.run());
    match result {
        Ok(()) => {
            info!("mcalc exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "terminal i/o failed");
            ExitCode::FAILURE
        }
    }
}
