//! Logger setup for the binaries.
//!
//! `RUST_LOG` picks the filter. When `CROSSING_LOG_PATH` is set, records are
//! appended to that file instead of stderr.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const ENV_LOG_PATH: &str = "CROSSING_LOG_PATH";

/// Log file requested through the environment, if any.
pub fn log_path() -> Option<PathBuf> {
    env::var(ENV_LOG_PATH)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Install the global logger with `default_filter` when `RUST_LOG` is unset.
pub fn init(default_filter: &str) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_path() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("logging: cannot open {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logging: logger already initialised")?;
    Ok(())
}
