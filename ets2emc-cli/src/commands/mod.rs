//! Command implementations for the CLI.
//!
//! Each submodule reads its source documents, runs one conversion and prints
//! the result. Commands return the process exit status.

pub mod job;
pub mod preset;

pub use job::run_job;
pub use preset::run_preset;

use crate::cli::OutputArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_diagnostics;
use ets2emc_core::Diagnostics;
use std::path::Path;

/// Exit status of a `--strict` run that recorded ERROR diagnostics.
pub const EXIT_STRICT_ERRORS: i32 = 2;

pub(crate) fn read_source(path: &Path) -> CliResult<String> {
    log::debug!("Reading {}", path.display());
    std::fs::read_to_string(path).cli_with_context(|| format!("Failed to read {}", path.display()))
}

/// Prints the diagnostics and maps them to the exit status.
pub(crate) fn finish(diagnostics: &Diagnostics, output: &OutputArgs) -> CliResult<i32> {
    print_diagnostics(diagnostics, output.diagnostics)?;

    if diagnostics.has_errors() {
        log::warn!(
            "Conversion recorded {} error(s); the converted settings are incomplete",
            diagnostics.errors().len()
        );
        if output.strict {
            return Ok(EXIT_STRICT_ERRORS);
        }
    }
    Ok(0)
}
