//! Standalone preset translation.

use super::Context;
use super::audio::translate_audio;
use super::container::preset_container;
use super::thumbnails::translate_thumbnails;
use super::video::translate_video;
use crate::config::{ConvertConfig, MAX_PRESET_NAME_LEN, PRESET_NAME_PREFIX};
use crate::diagnostics::Diagnostics;
use crate::source::Preset;
use crate::target::{PresetDocument, PresetSettings};

/// Characters the target service rejects in preset names.
const FORBIDDEN_NAME_CHARS: &[char] = &[
    '$', '&', ',', ':', ';', '?', '<', '>', '`', '"', '#', '%', '{', '}', '/', '|', '\\', '^', '~',
];

/// Translates a preset into an output preset, followed by a thumbnail preset
/// when the source declares thumbnails.
pub fn translate_preset(preset: &Preset, config: &ConvertConfig) -> (Vec<PresetDocument>, Diagnostics) {
    let mut cx = Context::new(config);
    let name = preset_name(preset.name.as_deref().unwrap_or_default());
    log::debug!("Translating preset '{}'", name);

    let settings = PresetSettings {
        container_settings: preset_container(preset, &mut cx),
        audio_descriptions: preset
            .audible()
            .map(|audio| translate_audio(audio, &mut cx))
            .into_iter()
            .collect(),
        video_description: preset
            .video
            .as_ref()
            .map(|video| translate_video(video, &mut cx)),
    };

    let mut documents = vec![PresetDocument {
        name: name.clone(),
        description: preset.description.clone(),
        settings,
    }];

    if let Some(thumbnails) = &preset.thumbnails {
        documents.push(PresetDocument {
            name: format!("{name} - thumbnails"),
            description: preset.description.clone(),
            settings: translate_thumbnails(thumbnails, &mut cx),
        });
    }

    (documents, cx.into_diagnostics())
}

/// Prefixes, sanitizes and truncates a source preset name.
pub fn preset_name(source_name: &str) -> String {
    PRESET_NAME_PREFIX
        .chars()
        .chain(source_name.chars().filter(|c| !FORBIDDEN_NAME_CHARS.contains(c)))
        .take(MAX_PRESET_NAME_LEN)
        .collect()
}
