// ets2emc-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ets2emc: Elastic Transcoder to MediaConvert settings converter",
    long_about = "Converts Amazon Elastic Transcoder job and preset settings into AWS Elemental \
                  MediaConvert job, job template and output preset settings. The converted \
                  settings are printed to stdout; conversion diagnostics are printed to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Write the run log to a file in this directory instead of stderr
    #[arg(long, global = true, value_name = "LOG_DIR", env = "ETS2EMC_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts a job, or a job template when --name is given
    Job(JobArgs),
    /// Converts a standalone preset into output presets
    Preset(PresetArgs),
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Elastic Transcoder job JSON (ReadJob response or bare job object)
    #[arg(long = "job", required = true, value_name = "FILE")]
    pub job: PathBuf,

    /// Pipeline JSON of the job
    #[arg(long = "pipeline", required = true, value_name = "FILE")]
    pub pipeline: PathBuf,

    /// Preset JSON referenced by a job output; repeat for every preset
    #[arg(long = "preset", required = true, value_name = "FILE")]
    pub presets: Vec<PathBuf>,

    /// IAM role ARN used by the converted job (ignored for job templates)
    #[arg(long, value_name = "ARN", env = "ETS2EMC_ROLE_ARN")]
    pub role_arn: Option<String>,

    /// Job template name. Setting it converts to a job template
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Job template description
    #[arg(long, value_name = "DESCRIPTION", requires = "name")]
    pub description: Option<String>,

    /// Job template category
    #[arg(long, value_name = "CATEGORY", requires = "name")]
    pub category: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Elastic Transcoder preset JSON (ReadPreset response or bare preset object)
    #[arg(long = "preset", required = true, value_name = "FILE")]
    pub preset: PathBuf,

    /// Playlist format the preset is used with (HLSv3, HLSv4, Smooth, MPEG-DASH)
    #[arg(long, value_name = "FORMAT")]
    pub playlist_format: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every conversion.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Use camelCase property names instead of PascalCase
    #[arg(long, default_value_t = false)]
    pub camel: bool,

    /// Insert static defaults for required settings left as "auto"
    #[arg(long, default_value_t = false)]
    pub insert_defaults: bool,

    /// Exit with status 2 when any ERROR diagnostic was recorded
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Format of the diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = DiagnosticsFormat::Json)]
    pub diagnostics: DiagnosticsFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsFormat {
    /// A JSON array of {level, path, message} objects
    Json,
    /// One coloured line per diagnostic
    Text,
}
