// ets2emc-cli/src/lib.rs
//
// Library portion of the ets2emc CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-exported for the `cli_error!` macro.
pub use ets2emc_core;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, DiagnosticsFormat, JobArgs, OutputArgs, PresetArgs};
pub use commands::{EXIT_STRICT_ERRORS, run_job, run_preset};
pub use error::{CliErrorContext, CliResult};

use clap::Parser;
use std::ffi::OsString;

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list; the first item is the binary name.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
