// ============================================================================
// ets2emc-core/src/translate/captions.rs
// ============================================================================
//
// CAPTIONS: Input caption selectors and sidecar caption outputs
//
// Input side: the merge policy decides whether an embedded selector is added
// ahead of one file selector per sidecar caption source. Output side: every
// sidecar source of the first input that produced a selector is joined, by
// file key, with each sidecar caption format the output declares.

use super::container::PlaylistFormat;
use super::language::three_letter_code;
use super::time_span::{to_millis, to_seconds};
use super::Context;
use crate::source::{CaptionSource, InputCaptions, Job, JobOutput};
use crate::target::job::{
    CaptionDescription, CaptionDestinationSettings, CaptionDestinationType, CaptionSelector,
    CaptionSourceSettings, CaptionSourceType, Container, ContainerSettings, EmbeddedSourceSettings,
    FileSourceSettings, Output, TimeDeltaUnits,
};

/// Builds the caption selectors of one input. Nothing is selected unless at
/// least one job output declares caption formats.
pub fn translate_input_captions(
    captions: Option<&InputCaptions>,
    job: &Job,
    input_bucket: &str,
    cx: &mut Context<'_>,
) -> Vec<CaptionSelector> {
    let Some(captions) = captions else {
        return Vec::new();
    };
    if !job.has_output_captions() {
        return Vec::new();
    }

    let mut selectors = Vec::new();
    match captions.merge_policy.as_deref() {
        Some("MergeRetain" | "MergeOverride") => {
            cx.warn(
                &captions.path.key("mergePolicy"),
                "MediaConvert does not support captions merge policy.",
            );
            selectors.push(embedded_selector());
            selectors.extend(file_selectors(captions, input_bucket, cx));
        }
        Some("Override") => selectors.extend(file_selectors(captions, input_bucket, cx)),
        _ => {}
    }

    for (i, selector) in selectors.iter_mut().enumerate() {
        selector.name = format!("Captions Selector {}", i + 1);
    }
    selectors
}

fn embedded_selector() -> CaptionSelector {
    CaptionSelector {
        name: String::new(),
        source_key: None,
        source_settings: CaptionSourceSettings {
            source_type: CaptionSourceType::Embedded,
            embedded_source_settings: Some(EmbeddedSourceSettings {
                convert_608_to_708: "UPCONVERT",
            }),
            file_source_settings: None,
        },
    }
}

fn file_selectors(
    captions: &InputCaptions,
    input_bucket: &str,
    cx: &mut Context<'_>,
) -> Vec<CaptionSelector> {
    captions
        .caption_sources
        .iter()
        .filter_map(|source| caption_source_selector(source, input_bucket, cx))
        .collect()
}

/// Builds the file selector of one sidecar caption source. The selector is
/// left unnamed; names follow selector order within the input.
pub fn caption_source_selector(
    source: &CaptionSource,
    input_bucket: &str,
    cx: &mut Context<'_>,
) -> Option<CaptionSelector> {
    let key = source.key.as_deref()?;
    let extension = key
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_lowercase())
        .unwrap_or_default();

    let source_type = match extension.as_str() {
        "scc" => CaptionSourceType::Scc,
        "srt" => CaptionSourceType::Srt,
        "ttml" => CaptionSourceType::Ttml,
        "vtt" => CaptionSourceType::Webvtt,
        // DFXP and EBU-TT sources are not offered as convertible formats.
        "dfxp" | "xml" => return None,
        _ => {
            cx.warn(
                &source.path.key("key"),
                format!(
                    "The captions source type '{extension}' is not supported by MediaConvert. \
                     This captions source is ignored."
                ),
            );
            return None;
        }
    };

    let (time_delta, time_delta_units) = match source.time_offset.as_deref() {
        None => (None, None),
        Some(offset) => {
            let parsed = if offset.contains('.') {
                to_millis(offset).map(|ms| (ms, TimeDeltaUnits::Milliseconds))
            } else {
                to_seconds(offset).map(|s| (s, TimeDeltaUnits::Seconds))
            };
            match parsed {
                Some((delta, units)) => (Some(delta), Some(units)),
                None => {
                    cx.warn(
                        &source.path.key("timeOffset"),
                        format!(
                            "Captions time offset '{offset}' cannot be parsed. This captions \
                             source is ignored."
                        ),
                    );
                    return None;
                }
            }
        }
    };

    Some(CaptionSelector {
        name: String::new(),
        source_key: Some(key.to_string()),
        source_settings: CaptionSourceSettings {
            source_type,
            embedded_source_settings: None,
            file_source_settings: Some(FileSourceSettings {
                source_file: format!("s3://{input_bucket}/{key}"),
                time_delta,
                time_delta_units,
            }),
        },
    })
}

fn sidecar_destination(format: &str) -> Option<CaptionDestinationType> {
    match format {
        "dfxp" => Some(CaptionDestinationType::Ttml),
        "scc" => Some(CaptionDestinationType::Scc),
        "srt" => Some(CaptionDestinationType::Srt),
        "webvtt" => Some(CaptionDestinationType::Webvtt),
        _ => None,
    }
}

/// Builds one caption output per (sidecar source, sidecar format) pair of an
/// output. `selectors` are the caption selectors of the job's first input.
pub fn sidecar_outputs(
    output: &JobOutput,
    job: &Job,
    selectors: &[CaptionSelector],
    playlist_format: Option<PlaylistFormat>,
    cx: &mut Context<'_>,
) -> Vec<Output> {
    let destinations: Vec<CaptionDestinationType> = output
        .captions
        .iter()
        .flat_map(|c| c.caption_formats.iter())
        .filter_map(|f| f.format.as_deref().and_then(sidecar_destination))
        .collect();

    let has_embedded = selectors
        .iter()
        .any(|s| s.source_settings.source_type == CaptionSourceType::Embedded);
    if has_embedded && !destinations.is_empty() {
        cx.info(
            &output.path,
            "Embedded captions source are not included in sidecar outputs.",
        );
    }

    let sources = job
        .inputs
        .first()
        .and_then(|input| input.input_captions.as_ref())
        .map(|c| c.caption_sources.as_slice())
        .unwrap_or_default();

    let container = playlist_format
        .map(PlaylistFormat::container)
        .unwrap_or(Container::Raw);

    let mut outputs = Vec::new();
    for source in sources {
        let Some(selector) = selectors
            .iter()
            .find(|s| s.source_key.is_some() && s.source_key == source.key)
        else {
            continue;
        };

        let language = source.language.as_deref().unwrap_or_default();
        let language_code = three_letter_code(language);
        if language_code.is_none() && !destinations.is_empty() {
            cx.warn(
                &source.path.key("language"),
                format!("Captions language '{language}' cannot be converted to an ISO 639-2 code."),
            );
        }
        let name_modifier = format!(
            "-{}",
            language_code
                .clone()
                .unwrap_or_else(|| language.to_uppercase())
        );

        for destination_type in &destinations {
            outputs.push(Output {
                name_modifier: Some(name_modifier.clone()),
                container_settings: Some(ContainerSettings { container }),
                caption_descriptions: vec![CaptionDescription {
                    caption_selector_name: selector.name.clone(),
                    destination_settings: CaptionDestinationSettings {
                        destination_type: *destination_type,
                    },
                    language_code: language_code.clone(),
                    language_description: source.label.clone(),
                }],
                ..Output::default()
            });
        }
    }
    outputs
}
