// ============================================================================
// ets2emc-core/src/translate/audio.rs
// ============================================================================
//
// AUDIO: Audio parameters to an audio description
//
// Every rule here is independent of the others: codec lookup, sample rate and
// channel defaults, AAC coding mode and profile, bitrate support and packing
// mode. "auto" values follow the insert-defaults policy: a static fallback
// plus a warning when enabled, an absent value plus an error otherwise.

use super::{Context, parse_int, scaled};
use crate::path::Path;
use crate::source::{AUTO, AudioParameters};
use crate::target::codec::{
    AacCodingMode, AacProfile, AacSettings, AudioCodecSettings, LosslessSettings, LossySettings,
    VorbisSettings,
};
use crate::target::job::AudioDescription;

/// Name of the single audio selector every converted input declares.
pub const AUDIO_SELECTOR_NAME: &str = "Audio Selector 1";

/// Channel count applied when channels are "auto" and defaults are inserted.
const DEFAULT_CHANNELS: i64 = 2;

/// Target audio codecs reachable from the source schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    Aac,
    Flac,
    Mp2,
    Mp3,
    Wav,
    Vorbis,
}

impl AudioCodec {
    pub fn from_source(codec: &str) -> Option<Self> {
        match codec {
            "AAC" => Some(Self::Aac),
            "flac" => Some(Self::Flac),
            "mp2" => Some(Self::Mp2),
            "mp3" => Some(Self::Mp3),
            "pcm" => Some(Self::Wav),
            "vorbis" => Some(Self::Vorbis),
            _ => None,
        }
    }

    /// Whether the target encoder takes an explicit bitrate.
    pub fn supports_bitrate(self) -> bool {
        matches!(self, Self::Aac | Self::Mp2 | Self::Mp3)
    }

    /// Static sample rate applied to "auto" when defaults are inserted.
    pub fn default_sample_rate(self) -> i64 {
        match self {
            Self::Wav => 44_100,
            _ => 48_000,
        }
    }
}

pub fn translate_audio(audio: &AudioParameters, cx: &mut Context<'_>) -> AudioDescription {
    let source_codec = audio.codec.as_deref().unwrap_or_default();
    let codec = AudioCodec::from_source(source_codec);

    if let Some(mode @ ("OneChannelPerTrack" | "OneChannelPerTrackWithMosTo8Tracks")) =
        audio.audio_packing_mode.as_deref()
    {
        cx.warn(
            &audio.path.key("audioPackingMode"),
            format!(
                "The converter has not retained {mode} audio packing mode. For MediaConvert audio \
                 mixing features, see \
                 https://docs.aws.amazon.com/mediaconvert/latest/ug/more-about-audio-tracks-selectors.html \
                 https://docs.aws.amazon.com/mediaconvert/latest/ug/audio-descriptions.html"
            ),
        );
    }

    if audio.bit_rate.is_some() && !codec.is_some_and(AudioCodec::supports_bitrate) {
        cx.warn(
            &audio.path.key("bitRate"),
            format!("MediaConvert does not support {source_codec} bitrate. This setting is ignored."),
        );
    }

    AudioDescription {
        codec_settings: match codec {
            Some(codec) => Some(codec_settings(codec, audio, cx)),
            None if source_codec.is_empty() => None,
            None => Some(AudioCodecSettings::Unmapped {
                codec: source_codec.to_string(),
            }),
        },
        audio_source_name: AUDIO_SELECTOR_NAME.to_string(),
    }
}

fn codec_settings(codec: AudioCodec, audio: &AudioParameters, cx: &mut Context<'_>) -> AudioCodecSettings {
    let sample_rate = sample_rate(codec, audio, cx);
    let bitrate = if codec.supports_bitrate() {
        scaled(parse_int(audio.bit_rate.as_deref()), 1000, &audio.path.key("bitRate"), cx)
    } else {
        None
    };
    let bit_depth = parse_int(
        audio
            .codec_options
            .as_ref()
            .and_then(|o| o.bit_depth.as_deref()),
    );

    match codec {
        AudioCodec::Aac => AudioCodecSettings::Aac {
            settings: AacSettings {
                sample_rate,
                bitrate,
                coding_mode: coding_mode(audio, cx),
                codec_profile: audio
                    .codec_options
                    .as_ref()
                    .and_then(|o| o.profile.as_deref())
                    .and_then(aac_profile),
            },
        },
        AudioCodec::Flac => AudioCodecSettings::Flac {
            settings: LosslessSettings {
                sample_rate,
                channels: channels(audio, cx),
                bit_depth,
            },
        },
        AudioCodec::Wav => AudioCodecSettings::Wav {
            settings: LosslessSettings {
                sample_rate,
                channels: channels(audio, cx),
                bit_depth,
            },
        },
        AudioCodec::Mp2 => AudioCodecSettings::Mp2 {
            settings: LossySettings {
                sample_rate,
                bitrate,
                channels: channels(audio, cx),
            },
        },
        AudioCodec::Mp3 => AudioCodecSettings::Mp3 {
            settings: LossySettings {
                sample_rate,
                bitrate,
                channels: channels(audio, cx),
            },
        },
        AudioCodec::Vorbis => AudioCodecSettings::Vorbis {
            settings: VorbisSettings {
                sample_rate,
                channels: channels(audio, cx),
            },
        },
    }
}

fn aac_profile(profile: &str) -> Option<AacProfile> {
    match profile {
        "AAC-LC" => Some(AacProfile::Lc),
        "HE-AAC" => Some(AacProfile::Hev1),
        "HE-AACv2" => Some(AacProfile::Hev2),
        _ => None,
    }
}

fn sample_rate(codec: AudioCodec, audio: &AudioParameters, cx: &mut Context<'_>) -> Option<i64> {
    if audio.sample_rate.as_deref() != Some(AUTO) {
        return parse_int(audio.sample_rate.as_deref());
    }
    let default = codec.default_sample_rate();
    resolve_auto(
        cx,
        &audio.path.key("sampleRate"),
        &format!("The audio sample rate for {} is set to 'auto'.", source_name(audio)),
        "Audio sample rate",
        default,
        default.to_string(),
    )
}

fn channels(audio: &AudioParameters, cx: &mut Context<'_>) -> Option<i64> {
    if audio.channels.as_deref() != Some(AUTO) {
        return parse_int(audio.channels.as_deref());
    }
    resolve_auto(
        cx,
        &audio.path.key("channels"),
        &format!("The audio channels for {} is set to 'auto'.", source_name(audio)),
        "Audio channels",
        DEFAULT_CHANNELS,
        DEFAULT_CHANNELS.to_string(),
    )
}

/// AAC expresses the channel count as a coding mode.
fn coding_mode(audio: &AudioParameters, cx: &mut Context<'_>) -> Option<AacCodingMode> {
    match audio.channels.as_deref() {
        Some(AUTO) => resolve_auto(
            cx,
            &audio.path.key("channels"),
            &format!("The audio channels for {} is set to 'auto'.", source_name(audio)),
            "Audio channels",
            AacCodingMode::Stereo,
            "CODING_MODE_2_0".to_string(),
        ),
        Some("1") => Some(AacCodingMode::Mono),
        Some("2") => Some(AacCodingMode::Stereo),
        _ => None,
    }
}

fn source_name(audio: &AudioParameters) -> &str {
    audio.codec.as_deref().unwrap_or_default()
}

/// Applies the insert-defaults policy to a required value set to "auto".
fn resolve_auto<T>(
    cx: &mut Context<'_>,
    path: &Path,
    subject: &str,
    setting: &str,
    default: T,
    default_label: String,
) -> Option<T> {
    if cx.config.insert_defaults {
        cx.warn(
            path,
            format!("{subject} The converter has applied a static default value of {default_label}."),
        );
        Some(default)
    } else {
        cx.error(
            path,
            format!("{subject} {setting} is required, but no default value has been applied."),
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConvertConfig, ConvertConfigBuilder};
    use crate::diagnostics::Level;
    use crate::path::AttachPaths;
    use crate::target::render;
    use serde_json::json;

    fn audio(fields: serde_json::Value) -> AudioParameters {
        let audio: AudioParameters = serde_json::from_value(fields).unwrap();
        audio.attach_paths(&Path::from_keys(["preset", "test", "audio"]))
    }

    #[test]
    fn converts_aac() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let params = audio(json!({
            "codec": "AAC",
            "channels": "2",
            "sampleRate": "44100",
            "bitRate": "128",
            "codecOptions": { "profile": "AAC-LC" }
        }));

        let description = translate_audio(&params, &mut cx);
        assert_eq!(
            render(&description, true).unwrap(),
            json!({
                "codecSettings": {
                    "codec": "AAC",
                    "aacSettings": {
                        "sampleRate": 44100,
                        "bitrate": 128000,
                        "codingMode": "CODING_MODE_2_0",
                        "codecProfile": "LC"
                    }
                },
                "audioSourceName": "Audio Selector 1"
            })
        );
        assert!(cx.diagnostics.is_empty());
    }

    #[test]
    fn concrete_input_translates_idempotently() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let params = audio(json!({ "codec": "mp3", "channels": "1", "sampleRate": "32000", "bitRate": "96" }));

        let first = translate_audio(&params, &mut cx);
        let second = translate_audio(&params, &mut cx);
        assert_eq!(first, second);
        assert!(cx.diagnostics.is_empty());
    }

    #[test]
    fn auto_values_follow_the_insert_defaults_policy() {
        for codec in ["AAC", "flac", "mp2", "mp3", "pcm", "vorbis"] {
            let params = audio(json!({ "codec": codec, "channels": "auto", "sampleRate": "auto" }));

            let config = ConvertConfigBuilder::new().insert_defaults(true).build();
            let mut cx = Context::new(&config);
            let inserted = render(&translate_audio(&params, &mut cx), true).unwrap();
            assert_eq!(cx.diagnostics.len(), 2, "{codec}");
            assert!(cx.diagnostics.messages().iter().all(|m| m.level == Level::Warn));

            let settings = inserted["codecSettings"]
                .as_object()
                .and_then(|o| o.iter().find(|(k, _)| k.ends_with("Settings")))
                .map(|(_, v)| v.clone())
                .unwrap();
            let expected_rate = if codec == "pcm" { 44100 } else { 48000 };
            assert_eq!(settings["sampleRate"], json!(expected_rate), "{codec}");
            if codec == "AAC" {
                assert_eq!(settings["codingMode"], json!("CODING_MODE_2_0"));
            } else {
                assert_eq!(settings["channels"], json!(2), "{codec}");
            }

            let config = ConvertConfig::default();
            let mut cx = Context::new(&config);
            let omitted = render(&translate_audio(&params, &mut cx), true).unwrap();
            assert_eq!(cx.diagnostics.errors().len(), 2, "{codec}");
            assert_eq!(cx.diagnostics.len(), 2);
            let settings = omitted["codecSettings"]
                .as_object()
                .and_then(|o| o.iter().find(|(k, _)| k.ends_with("Settings")))
                .map(|(_, v)| v.clone())
                .unwrap();
            assert!(settings.get("sampleRate").is_none());
            assert!(settings.get("channels").is_none());
            assert!(settings.get("codingMode").is_none());
        }
    }

    #[test]
    fn bitrate_is_ignored_for_codecs_without_one() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let params = audio(json!({ "codec": "flac", "channels": "2", "sampleRate": "48000", "bitRate": "320", "codecOptions": { "bitDepth": "24" } }));

        let description = translate_audio(&params, &mut cx);
        assert_eq!(
            description.codec_settings,
            Some(AudioCodecSettings::Flac {
                settings: LosslessSettings {
                    sample_rate: Some(48000),
                    channels: Some(2),
                    bit_depth: Some(24),
                }
            })
        );
        let warnings = cx.diagnostics.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path.to_string(), "preset.test.audio.bitRate");
        assert!(warnings[0].message.contains("does not support flac bitrate"));
    }

    #[test]
    fn packing_modes_without_equivalent_warn() {
        for mode in ["OneChannelPerTrack", "OneChannelPerTrackWithMosTo8Tracks"] {
            let config = ConvertConfig::default();
            let mut cx = Context::new(&config);
            let params = audio(json!({ "codec": "pcm", "channels": "2", "sampleRate": "48000", "audioPackingMode": mode }));
            translate_audio(&params, &mut cx);
            assert_eq!(cx.diagnostics.warnings().len(), 1);
            assert!(cx.diagnostics.messages()[0].message.contains(mode));
        }
    }

    #[test]
    fn unknown_codec_passes_through_without_settings() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let params = audio(json!({ "codec": "opus", "channels": "2" }));
        let description = translate_audio(&params, &mut cx);
        assert_eq!(
            render(&description, true).unwrap(),
            json!({ "codecSettings": { "codec": "opus" }, "audioSourceName": "Audio Selector 1" })
        );
        assert!(cx.diagnostics.is_empty());
    }

    #[test]
    fn bitrate_out_of_range_is_dropped() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let params = audio(json!({
            "codec": "mp3",
            "channels": "2",
            "sampleRate": "44100",
            "bitRate": "9223372036854775807"
        }));

        let value = render(&translate_audio(&params, &mut cx), true).unwrap();
        assert_eq!(value["codecSettings"]["mp3Settings"].get("bitrate"), None);
        assert_eq!(value["codecSettings"]["mp3Settings"]["sampleRate"], 44100);
        let warnings = cx.diagnostics.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path.to_string(), "preset.test.audio.bitRate");
    }
}
