// ============================================================================
// ets2emc-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Console or file logging for one CLI run
//
// Without --log-dir the `log` facade goes to stderr through env_logger, so
// RUST_LOG still overrides the level chosen by --verbose. With --log-dir every
// record goes to a timestamped file through the core's log4rs setup and the
// console stays clean for the converted document.

use crate::error::CliResult;
use crate::cli_error;
use ets2emc_core::logging::setup_file_logging;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Run log file name for a command, e.g. `ets2emc_job_run_20240601_123045.log`.
pub fn log_file_name(command: &str) -> String {
    format!("ets2emc_{}_run_{}.log", command, get_timestamp())
}

/// Installs the global logger. Returns the log file path when logging to a
/// file.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>, command: &str) -> CliResult<Option<PathBuf>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    match log_dir {
        Some(dir) => {
            let log_file = dir.join(log_file_name(command));
            setup_file_logging(&log_file, level).map_err(|e| {
                cli_error!("Failed to set up file logging at {}: {}", log_file.display(), e)
            })?;
            Ok(Some(log_file))
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .target(env_logger::Target::Stderr)
                .try_init()
                .map_err(|e| cli_error!("Failed to initialize logging: {}", e))?;
            Ok(None)
        }
    }
}
