//! Codec settings of the target schema.
//!
//! The codec name is the serde tag and each variant owns its own settings
//! block, so `{"codec": "H_264", "h264Settings": {...}}` can only ever pair a
//! codec with its matching settings shape.

use serde::Serialize;

// ---- Video ----

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "codec")]
pub enum VideoCodecSettings {
    #[serde(rename = "H_264")]
    H264 {
        #[serde(rename = "h264Settings")]
        settings: H264Settings,
    },
    #[serde(rename = "MPEG2")]
    Mpeg2 {
        #[serde(rename = "mpeg2Settings")]
        settings: Mpeg2Settings,
    },
    #[serde(rename = "VP8")]
    Vp8 {
        #[serde(rename = "vp8Settings")]
        settings: VpxSettings,
    },
    #[serde(rename = "VP9")]
    Vp9 {
        #[serde(rename = "vp9Settings")]
        settings: VpxSettings,
    },
    #[serde(rename = "GIF")]
    Gif {
        #[serde(rename = "gifSettings")]
        settings: GifSettings,
    },
    #[serde(rename = "FRAME_CAPTURE")]
    FrameCapture {
        #[serde(rename = "frameCaptureSettings")]
        settings: FrameCaptureSettings,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RateControlMode {
    Cbr,
    Vbr,
    Qvbr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterlaceMode {
    TopField,
    BottomField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mpeg2Profile {
    Main,
    #[serde(rename = "PROFILE_422")]
    Profile422,
}

/// Explicit framerate; all fields absent means "follow the source".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Framerate {
    pub framerate_control: Option<&'static str>,
    pub framerate_numerator: Option<u32>,
    pub framerate_denominator: Option<u32>,
}

impl Framerate {
    pub fn specified(numerator: u32, denominator: u32) -> Self {
        Self {
            framerate_control: Some("SPECIFIED"),
            framerate_numerator: Some(numerator),
            framerate_denominator: Some(denominator),
        }
    }

    pub fn is_specified(&self) -> bool {
        self.framerate_control.is_some()
    }
}

/// Explicit pixel aspect ratio; all fields absent means "follow the source".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParControl {
    pub par_control: Option<&'static str>,
    pub par_numerator: Option<u64>,
    pub par_denominator: Option<u64>,
}

impl ParControl {
    pub fn specified(numerator: u64, denominator: u64) -> Self {
        Self {
            par_control: Some("SPECIFIED"),
            par_numerator: Some(numerator),
            par_denominator: Some(denominator),
        }
    }
}

/// GOP expressed in frames when the source asks for a fixed GOP.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gop {
    pub gop_size_units: Option<&'static str>,
    pub gop_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct H264Settings {
    #[serde(flatten)]
    pub gop: Gop,
    pub bitrate: Option<i64>,
    pub rate_control_mode: Option<RateControlMode>,
    #[serde(flatten)]
    pub framerate: Framerate,
    #[serde(flatten)]
    pub par: ParControl,
    pub codec_profile: Option<String>,
    pub codec_level: Option<String>,
    pub entropy_encoding: Option<&'static str>,
    pub number_reference_frames: Option<i64>,
    pub number_b_frames_between_reference_frames: Option<i64>,
    pub max_bitrate: Option<i64>,
    pub hrd_buffer_size: Option<i64>,
    pub interlace_mode: Option<InterlaceMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mpeg2Settings {
    #[serde(flatten)]
    pub gop: Gop,
    pub bitrate: Option<i64>,
    pub rate_control_mode: Option<RateControlMode>,
    #[serde(flatten)]
    pub framerate: Framerate,
    #[serde(flatten)]
    pub par: ParControl,
    pub codec_profile: Option<Mpeg2Profile>,
    pub max_bitrate: Option<i64>,
    pub hrd_buffer_size: Option<i64>,
    pub interlace_mode: Option<InterlaceMode>,
}

/// Settings shared by VP8 and VP9.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VpxSettings {
    pub gop_size: Option<i64>,
    pub bitrate: Option<i64>,
    pub rate_control_mode: Option<RateControlMode>,
    #[serde(flatten)]
    pub framerate: Framerate,
    #[serde(flatten)]
    pub par: ParControl,
    pub max_bitrate: Option<i64>,
    pub hrd_buffer_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GifSettings {
    #[serde(flatten)]
    pub framerate: Framerate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameCaptureSettings {
    pub framerate_numerator: Option<i64>,
    pub framerate_denominator: Option<i64>,
}

// ---- Audio ----

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "codec")]
pub enum AudioCodecSettings {
    #[serde(rename = "AAC")]
    Aac {
        #[serde(rename = "aacSettings")]
        settings: AacSettings,
    },
    #[serde(rename = "FLAC")]
    Flac {
        #[serde(rename = "flacSettings")]
        settings: LosslessSettings,
    },
    #[serde(rename = "MP2")]
    Mp2 {
        #[serde(rename = "mp2Settings")]
        settings: LossySettings,
    },
    #[serde(rename = "MP3")]
    Mp3 {
        #[serde(rename = "mp3Settings")]
        settings: LossySettings,
    },
    #[serde(rename = "WAV")]
    Wav {
        #[serde(rename = "wavSettings")]
        settings: LosslessSettings,
    },
    #[serde(rename = "VORBIS")]
    Vorbis {
        #[serde(rename = "vorbisSettings")]
        settings: VorbisSettings,
    },
    /// A source codec without a target counterpart, emitted by name only.
    #[serde(untagged)]
    Unmapped { codec: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AacCodingMode {
    #[serde(rename = "CODING_MODE_1_0")]
    Mono,
    #[serde(rename = "CODING_MODE_2_0")]
    Stereo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AacProfile {
    Lc,
    Hev1,
    Hev2,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AacSettings {
    pub sample_rate: Option<i64>,
    pub bitrate: Option<i64>,
    pub coding_mode: Option<AacCodingMode>,
    pub codec_profile: Option<AacProfile>,
}

/// MP2 and MP3 settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LossySettings {
    pub sample_rate: Option<i64>,
    pub bitrate: Option<i64>,
    pub channels: Option<i64>,
}

/// FLAC and WAV settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LosslessSettings {
    pub sample_rate: Option<i64>,
    pub channels: Option<i64>,
    pub bit_depth: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VorbisSettings {
    pub sample_rate: Option<i64>,
    pub channels: Option<i64>,
}
