use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::cli::Cli;

/// Where log output goes: `--log-file`, else `$WICK_LOG_DIR/wick.<pid>.log`.
fn log_path(cli: &Cli) -> Option<PathBuf> {
	if let Some(path) = &cli.log_file {
		return Some(path.clone());
	}
	let dir = std::env::var_os("WICK_LOG_DIR").map(PathBuf::from)?;
	fs::create_dir_all(&dir).ok()?;
	Some(dir.join(format!("wick.{}.log", std::process::id())))
}

fn default_filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("wick=debug")
		} else {
			EnvFilter::new("wick=info")
		}
	})
}

/// Installs file logging. The terminal is owned by the UI, so nothing is
/// installed when no log file is configured.
pub fn setup_tracing(cli: &Cli) {
	let Some(log_path) = log_path(cli) else {
		return;
	};
	let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
		Ok(file) => file,
		Err(err) => {
			eprintln!("wick: cannot open log file {}: {err}", log_path.display());
			return;
		}
	};

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(default_filter(cli.verbose))
		.with(file_layer)
		.init();

	tracing::info!(path = ?log_path, "Wick tracing initialized");
}
