// ets2emc-cli/src/main.rs
//
// Entry point of the ets2emc binary: parses arguments, sets up logging,
// dispatches to the selected command and maps the outcome to an exit status.

use ets2emc::logging::init_logging;
use ets2emc::{Cli, Commands, parse_cli, run_job, run_preset};
use log::{error, info};
use std::process;

fn main() {
    let cli = parse_cli();

    let status = match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            1
        }
    };
    process::exit(status);
}

fn run(cli: &Cli) -> ets2emc::CliResult<i32> {
    let command = match &cli.command {
        Commands::Job(_) => "job",
        Commands::Preset(_) => "preset",
    };

    if let Some(log_file) = init_logging(cli.verbose, cli.log_dir.as_deref(), command)? {
        info!("Logging to {}", log_file.display());
    }

    match &cli.command {
        Commands::Job(args) => run_job(args),
        Commands::Preset(args) => run_preset(args),
    }
}
