use crate::cli::JobArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::print_document;
use ets2emc_core::source::{JobSource, PresetTable, load_job, load_pipeline, load_preset};
use ets2emc_core::translate::job::render_job;
use ets2emc_core::{ConvertConfig, ConvertConfigBuilder, translate_job};
use log::info;

use super::{finish, read_source};

/// Converts a job (or job template) and prints it.
pub fn run_job(args: &JobArgs) -> CliResult<i32> {
    let job = load_job(&read_source(&args.job)?)
        .cli_with_context(|| format!("Invalid job document {}", args.job.display()))?;
    let pipeline = load_pipeline(&read_source(&args.pipeline)?)
        .cli_with_context(|| format!("Invalid pipeline document {}", args.pipeline.display()))?;

    let mut presets = PresetTable::new();
    for path in &args.presets {
        let preset = load_preset(&read_source(path)?)
            .cli_with_context(|| format!("Invalid preset document {}", path.display()))?;
        presets.insert(preset);
    }
    info!(
        "Loaded job {} with {} preset(s)",
        job.id.as_deref().unwrap_or("<unnamed>"),
        presets.len()
    );

    let source = JobSource::new(job, pipeline, presets)?;
    let config = job_config(args);
    let (document, diagnostics) = translate_job(&source, &config);

    print_document(&render_job(&document, &source.job, &config)?)?;
    finish(&diagnostics, &args.output)
}

fn job_config(args: &JobArgs) -> ConvertConfig {
    let mut builder = ConvertConfigBuilder::new()
        .insert_defaults(args.output.insert_defaults)
        .camel_case_output(args.output.camel);
    if let Some(name) = &args.name {
        builder = builder.template_name(name.as_str());
    }
    if let Some(description) = &args.description {
        builder = builder.description(description.as_str());
    }
    if let Some(category) = &args.category {
        builder = builder.category(category.as_str());
    }
    if let Some(role_arn) = &args.role_arn {
        builder = builder.role_arn(role_arn.as_str());
    }
    builder.build()
}
