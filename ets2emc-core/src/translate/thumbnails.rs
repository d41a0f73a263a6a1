//! Thumbnail settings to frame-capture output settings.

use super::sizing::scaling_behavior;
use super::{Context, parse_int};
use crate::source::Thumbnails;
use crate::target::codec::{FrameCaptureSettings, VideoCodecSettings};
use crate::target::job::{Container, ContainerSettings, Output, VideoDescription};
use crate::target::PresetSettings;

/// Translates preset thumbnails into a RAW frame-capture output capturing one
/// frame every `interval` seconds.
pub fn translate_thumbnails(thumbnails: &Thumbnails, cx: &mut Context<'_>) -> PresetSettings {
    if thumbnails.format.as_deref() == Some("png") {
        cx.warn(
            &thumbnails.path.key("format"),
            "MediaConvert does not support PNG thumbnails.",
        );
    }

    PresetSettings {
        container_settings: Some(ContainerSettings {
            container: Container::Raw,
        }),
        audio_descriptions: Vec::new(),
        video_description: Some(VideoDescription {
            codec_settings: Some(VideoCodecSettings::FrameCapture {
                settings: FrameCaptureSettings {
                    framerate_numerator: Some(1),
                    framerate_denominator: parse_int(thumbnails.interval.as_deref()),
                },
            }),
            width: parse_int(thumbnails.max_width.as_deref()),
            height: parse_int(thumbnails.max_height.as_deref()),
            scaling_behavior: scaling_behavior(
                thumbnails.sizing_policy.as_deref(),
                thumbnails.padding_policy.as_deref(),
                &thumbnails.path,
                cx,
            ),
            video_preprocessors: None,
        }),
    }
}

impl From<PresetSettings> for Output {
    fn from(settings: PresetSettings) -> Self {
        Output {
            container_settings: settings.container_settings,
            audio_descriptions: settings.audio_descriptions,
            video_description: settings.video_description,
            ..Output::default()
        }
    }
}
