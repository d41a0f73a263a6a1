// ============================================================================
// ets2emc-core/src/translate/job.rs
// ============================================================================
//
// JOB TRANSLATION: Whole-job orchestration
//
// Inputs are translated first so the caption selectors of the first input are
// available when sidecar caption outputs are built. Output groups follow in a
// fixed order: playlist groups, then file groups for standalone outputs, then
// thumbnail groups, each in source order.

use super::audio::AUDIO_SELECTOR_NAME;
use super::captions::translate_input_captions;
use super::encryption::translate_decryption;
use super::output_group::{file_group, playlist_group, thumbnail_group};
use super::time_span::translate_time_span;
use super::Context;
use crate::config::ConvertConfig;
use crate::diagnostics::Diagnostics;
use crate::error::CoreResult;
use crate::source::{Job, JobInput, JobSource};
use crate::target::job::{AudioSelector, Input, JobDocument, JobSettings, OutputGroup};
use crate::target::render;
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;

/// Translates a job, or a job template when a template name is configured.
///
/// Translation always produces a document; per-field problems are reported in
/// the returned diagnostics.
pub fn translate_job(source: &JobSource, config: &ConvertConfig) -> (JobDocument, Diagnostics) {
    let mut cx = Context::new(config);
    let job = &source.job;
    debug!(
        "Translating job {} with {} input(s), {} output(s) and {} playlist(s)",
        job.id.as_deref().unwrap_or("<unnamed>"),
        job.inputs.len(),
        job.outputs.len(),
        job.playlists.len()
    );

    let inputs: Vec<Input> = job
        .inputs
        .iter()
        .map(|input| translate_input(source, input, &mut cx))
        .collect();

    let selectors = inputs
        .first()
        .map(|input| input.caption_selectors.as_slice())
        .unwrap_or_default();

    let mut output_groups: Vec<OutputGroup> = job
        .playlists
        .iter()
        .filter_map(|playlist| playlist_group(source, playlist, selectors, &mut cx))
        .collect();
    for output in job.standalone_outputs() {
        output_groups.push(file_group(source, output, selectors, &mut cx));
    }
    for output in &job.outputs {
        output_groups.extend(thumbnail_group(source, output, &mut cx));
    }

    let template = config.is_template();
    let document = JobDocument {
        name: config.template_name.clone(),
        description: config.description.clone().filter(|_| template),
        category: config.category.clone().filter(|_| template),
        role: config.role_arn.clone().filter(|_| !template),
        settings: JobSettings {
            inputs,
            output_groups,
        },
    };

    let diagnostics = cx.into_diagnostics();
    debug!("Job translation recorded {} diagnostic(s)", diagnostics.len());
    (document, diagnostics)
}

fn translate_input(source: &JobSource, input: &JobInput, cx: &mut Context<'_>) -> Input {
    let input_bucket = source.pipeline.input_bucket();

    let file_input = (!cx.config.is_template()).then(|| {
        format!(
            "s3://{input_bucket}/{}",
            input.key.as_deref().unwrap_or_default()
        )
    });

    let mut audio_selectors = BTreeMap::new();
    if source.has_output_audio() {
        audio_selectors.insert(
            AUDIO_SELECTOR_NAME.to_string(),
            AudioSelector {
                default_selection: "DEFAULT",
            },
        );
    }

    Input {
        file_input,
        audio_selectors,
        caption_selectors: translate_input_captions(
            input.input_captions.as_ref(),
            &source.job,
            input_bucket,
            cx,
        ),
        decryption_settings: input
            .encryption
            .as_ref()
            .map(|encryption| translate_decryption(encryption, cx)),
        input_clippings: input
            .time_span
            .as_ref()
            .map(|span| translate_time_span(span, cx))
            .unwrap_or_default(),
    }
}

/// Renders a translated job. Outside template mode the source user metadata
/// is attached after casing, so its keys are never re-cased.
pub fn render_job(document: &JobDocument, job: &Job, config: &ConvertConfig) -> CoreResult<Value> {
    let mut value = render(document, config.camel_case_output)?;
    if let (Some(metadata), false, Value::Object(map)) =
        (&job.user_metadata, config.is_template(), &mut value)
    {
        let key = if config.camel_case_output {
            "userMetadata"
        } else {
            "UserMetadata"
        };
        map.insert(key.to_string(), Value::Object(metadata.clone()));
    }
    Ok(value)
}
