//! Job, input, output group and output records of the target schema.

use super::codec::{AudioCodecSettings, VideoCodecSettings};
use serde::ser::Serializer;
use serde::Serialize;
use std::collections::BTreeMap;

/// A converted job or job template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub role: Option<String>,
    pub settings: JobSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSettings {
    pub inputs: Vec<Input>,
    pub output_groups: Vec<OutputGroup>,
}

// ---- Inputs ----

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub file_input: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub audio_selectors: BTreeMap<String, AudioSelector>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_named_selectors"
    )]
    pub caption_selectors: Vec<CaptionSelector>,
    pub decryption_settings: Option<DecryptionSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input_clippings: Vec<InputClipping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSelector {
    pub default_selection: &'static str,
}

/// A caption selector. Selectors serialize as an object keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSelector {
    #[serde(skip)]
    pub name: String,
    /// Key of the sidecar file this selector reads, used to match sidecar
    /// outputs back to their selector.
    #[serde(skip)]
    pub source_key: Option<String>,
    pub source_settings: CaptionSourceSettings,
}

fn serialize_named_selectors<S: Serializer>(
    selectors: &[CaptionSelector],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(selectors.iter().map(|s| (s.name.as_str(), s)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaptionSourceType {
    Embedded,
    Scc,
    Srt,
    Ttml,
    Webvtt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSourceSettings {
    pub source_type: CaptionSourceType,
    pub embedded_source_settings: Option<EmbeddedSourceSettings>,
    pub file_source_settings: Option<FileSourceSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedSourceSettings {
    #[serde(rename = "convert608To708")]
    pub convert_608_to_708: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeDeltaUnits {
    Seconds,
    Milliseconds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSourceSettings {
    pub source_file: String,
    pub time_delta: Option<i64>,
    pub time_delta_units: Option<TimeDeltaUnits>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptionSettings {
    pub decryption_mode: Option<String>,
    pub encrypted_decryption_key: Option<String>,
    pub initialization_vector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputClipping {
    pub start_timecode: Option<String>,
    pub end_timecode: Option<String>,
}

// ---- Output groups ----

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputGroup {
    pub name: String,
    pub output_group_settings: OutputGroupSettings,
    pub outputs: Vec<Output>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutputGroupSettings {
    #[serde(rename = "FILE_GROUP_SETTINGS")]
    File {
        #[serde(rename = "fileGroupSettings")]
        settings: FileGroupSettings,
    },
    #[serde(rename = "HLS_GROUP_SETTINGS")]
    Hls {
        #[serde(rename = "hlsGroupSettings")]
        settings: HlsGroupSettings,
    },
    #[serde(rename = "MS_SMOOTH_GROUP_SETTINGS")]
    MsSmooth {
        #[serde(rename = "msSmoothGroupSettings")]
        settings: MsSmoothGroupSettings,
    },
    #[serde(rename = "DASH_ISO_GROUP_SETTINGS")]
    DashIso {
        #[serde(rename = "dashIsoGroupSettings")]
        settings: DashIsoGroupSettings,
    },
}

impl OutputGroupSettings {
    pub fn destination(&self) -> &str {
        match self {
            Self::File { settings } => &settings.destination,
            Self::Hls { settings } => &settings.destination,
            Self::MsSmooth { settings } => &settings.destination,
            Self::DashIso { settings } => &settings.destination,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileGroupSettings {
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsGroupSettings {
    pub destination: String,
    pub encryption: Option<HlsEncryption>,
    pub min_segment_length: i64,
    pub segment_length: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MsSmoothGroupSettings {
    pub destination: String,
    pub fragment_length: i64,
    pub encryption: Option<HlsEncryption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashIsoGroupSettings {
    pub destination: String,
    pub encryption: Option<HlsEncryption>,
    pub fragment_length: i64,
    pub segment_length: Option<i64>,
}

/// Static-key AES-128 HLS encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsEncryption {
    #[serde(rename = "type")]
    pub key_provider_type: &'static str,
    pub encryption_method: &'static str,
    pub constant_initialization_vector: Option<String>,
    pub static_key_provider: StaticKeyProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticKeyProvider {
    pub static_key_value: Option<String>,
    pub url: Option<String>,
}

// ---- Outputs ----

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub name_modifier: Option<String>,
    pub container_settings: Option<ContainerSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_descriptions: Vec<AudioDescription>,
    pub video_description: Option<VideoDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption_descriptions: Vec<CaptionDescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Container {
    Raw,
    F4v,
    Gif,
    Mp4,
    Mxf,
    Ogg,
    M2ts,
    Webm,
    M3u8,
    Mpd,
    Ismv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSettings {
    pub container: Container,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDescription {
    pub codec_settings: Option<AudioCodecSettings>,
    pub audio_source_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalingBehavior {
    Fit,
    FitNoUpscale,
    Fill,
    StretchToOutput,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescription {
    pub codec_settings: Option<VideoCodecSettings>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub scaling_behavior: Option<ScalingBehavior>,
    pub video_preprocessors: Option<VideoPreprocessors>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorSpaceConversion {
    #[serde(rename = "FORCE_709")]
    Force709,
    #[serde(rename = "FORCE_601")]
    Force601,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPreprocessors {
    pub color_corrector: ColorCorrector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCorrector {
    pub color_space_conversion: ColorSpaceConversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaptionDestinationType {
    Scc,
    Srt,
    Ttml,
    Webvtt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDescription {
    pub caption_selector_name: String,
    pub destination_settings: CaptionDestinationSettings,
    pub language_code: Option<String>,
    pub language_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDestinationSettings {
    pub destination_type: CaptionDestinationType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::remove_empty;
    use serde_json::json;

    #[test]
    fn caption_selectors_serialize_as_a_named_object() {
        let input = Input {
            caption_selectors: vec![CaptionSelector {
                name: "Captions Selector 1".to_string(),
                source_key: None,
                source_settings: CaptionSourceSettings {
                    source_type: CaptionSourceType::Embedded,
                    embedded_source_settings: Some(EmbeddedSourceSettings {
                        convert_608_to_708: "UPCONVERT",
                    }),
                    file_source_settings: None,
                },
            }],
            ..Input::default()
        };
        let value = remove_empty(serde_json::to_value(&input).unwrap());
        assert_eq!(
            value,
            json!({
                "captionSelectors": {
                    "Captions Selector 1": {
                        "sourceSettings": {
                            "sourceType": "EMBEDDED",
                            "embeddedSourceSettings": { "convert608To708": "UPCONVERT" }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn output_group_settings_are_tagged_by_type() {
        let settings = OutputGroupSettings::DashIso {
            settings: DashIsoGroupSettings {
                destination: "s3://b/k".to_string(),
                encryption: None,
                fragment_length: 2,
                segment_length: None,
            },
        };
        assert_eq!(settings.destination(), "s3://b/k");
        let value = remove_empty(serde_json::to_value(&settings).unwrap());
        assert_eq!(
            value,
            json!({
                "type": "DASH_ISO_GROUP_SETTINGS",
                "dashIsoGroupSettings": { "destination": "s3://b/k", "fragmentLength": 2 }
            })
        );
    }

    #[test]
    fn containers_and_scaling_use_service_spellings() {
        assert_eq!(serde_json::to_value(Container::M2ts).unwrap(), json!("M2TS"));
        assert_eq!(serde_json::to_value(Container::M3u8).unwrap(), json!("M3U8"));
        assert_eq!(
            serde_json::to_value(ScalingBehavior::FitNoUpscale).unwrap(),
            json!("FIT_NO_UPSCALE")
        );
        assert_eq!(
            serde_json::to_value(ColorSpaceConversion::Force709).unwrap(),
            json!("FORCE_709")
        );
    }
}
