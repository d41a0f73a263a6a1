//! Elastic Transcoder preset records.

use crate::path::{AttachPaths, Path};
use serde::Deserialize;

/// Source value meaning "let the encoder decide".
pub const AUTO: &str = "auto";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preset {
    #[serde(skip)]
    pub path: Path,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub container: Option<String>,
    pub audio: Option<AudioParameters>,
    pub video: Option<VideoParameters>,
    pub thumbnails: Option<Thumbnails>,
}

impl Preset {
    /// Audio parameters of a preset that actually produces audio.
    pub fn audible(&self) -> Option<&AudioParameters> {
        self.audio
            .as_ref()
            .filter(|audio| audio.channels.as_deref() != Some("0"))
    }
}

impl AttachPaths for Preset {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            audio: self.audio.attach_paths(&path.key("audio")),
            video: self.video.attach_paths(&path.key("video")),
            thumbnails: self.thumbnails.attach_paths(&path.key("thumbnails")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioParameters {
    #[serde(skip)]
    pub path: Path,
    pub codec: Option<String>,
    pub sample_rate: Option<String>,
    pub bit_rate: Option<String>,
    pub channels: Option<String>,
    pub audio_packing_mode: Option<String>,
    pub codec_options: Option<AudioCodecOptions>,
}

impl AttachPaths for AudioParameters {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            codec_options: self.codec_options.attach_paths(&path.key("codecOptions")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioCodecOptions {
    #[serde(skip)]
    pub path: Path,
    pub profile: Option<String>,
    pub bit_depth: Option<String>,
    pub bit_order: Option<String>,
    pub signed: Option<String>,
}

impl AttachPaths for AudioCodecOptions {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoParameters {
    #[serde(skip)]
    pub path: Path,
    pub codec: Option<String>,
    pub codec_options: VideoCodecOptions,
    pub keyframes_max_dist: Option<String>,
    #[serde(rename = "fixedGOP")]
    pub fixed_gop: Option<String>,
    pub bit_rate: Option<String>,
    pub frame_rate: Option<String>,
    pub max_frame_rate: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    pub max_width: Option<String>,
    pub max_height: Option<String>,
    pub display_aspect_ratio: Option<String>,
    pub sizing_policy: Option<String>,
    pub padding_policy: Option<String>,
}

impl VideoParameters {
    /// Max bit rate from the codec options, if any.
    pub fn max_bit_rate(&self) -> Option<&str> {
        self.codec_options.max_bit_rate.as_deref()
    }
}

impl AttachPaths for VideoParameters {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            codec_options: self.codec_options.attach_paths(&path.key("codecOptions")),
            path: path.clone(),
            ..self
        }
    }
}

/// Free-form codec options; every value is a string in the source schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoCodecOptions {
    #[serde(skip)]
    pub path: Path,
    pub profile: Option<String>,
    pub level: Option<String>,
    pub max_reference_frames: Option<String>,
    pub max_bit_rate: Option<String>,
    pub buffer_size: Option<String>,
    pub interlaced_mode: Option<String>,
    pub color_space_conversion_mode: Option<String>,
    pub chroma_subsampling: Option<String>,
    pub loop_count: Option<String>,
}

impl AttachPaths for VideoCodecOptions {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thumbnails {
    #[serde(skip)]
    pub path: Path,
    pub format: Option<String>,
    pub interval: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    pub max_width: Option<String>,
    pub max_height: Option<String>,
    pub sizing_policy: Option<String>,
    pub padding_policy: Option<String>,
}

impl AttachPaths for Thumbnails {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}
