use crate::cli::PresetArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_document;
use ets2emc_core::source::load_preset;
use ets2emc_core::target::render;
use ets2emc_core::{ConvertConfigBuilder, translate_preset};
use log::info;

use super::{finish, read_source};

/// Converts a preset into an output preset (plus a thumbnail preset when the
/// source declares thumbnails) and prints them as a JSON array.
pub fn run_preset(args: &PresetArgs) -> CliResult<i32> {
    let preset = load_preset(&read_source(&args.preset)?)
        .cli_with_context(|| format!("Invalid preset document {}", args.preset.display()))?;

    let mut builder = ConvertConfigBuilder::new()
        .insert_defaults(args.output.insert_defaults)
        .camel_case_output(args.output.camel);
    if let Some(format) = &args.playlist_format {
        builder = builder.playlist_format(format.as_str());
    }
    let config = builder.build();

    let (documents, diagnostics) = translate_preset(&preset, &config);
    info!("Converted preset into {} output preset(s)", documents.len());

    print_document(&render(&documents, config.camel_case_output)?)?;
    finish(&diagnostics, &args.output)
}
