// ============================================================================
// ets2emc-core/src/translate/video.rs
// ============================================================================
//
// VIDEO: Video parameters to a video description
//
// The codec settings are the densest part of the translation:
// - rate control mode is derived from which bitrates the source declares
// - bitrate and max bitrate are routed by rate control mode (kbps to bps)
// - framerate, interlace mode, profile and level go through fixed tables
// - the HRD buffer size is scaled, derived from the max bitrate when absent,
//   and capped per codec/profile/level
//
// Each codec owns its settings shape; shared pieces (GOP, framerate, PAR) are
// computed once and moved into whichever shape the codec needs.

use super::geometry::{par, resolution};
use super::hrd;
use super::sizing::scaling_behavior;
use super::{Context, is_concrete, parse_int, scaled};
use crate::source::VideoParameters;
use crate::target::codec::{
    Framerate, GifSettings, Gop, H264Settings, InterlaceMode, Mpeg2Profile, Mpeg2Settings,
    ParControl, RateControlMode, VideoCodecSettings, VpxSettings,
};
use crate::target::job::{ColorCorrector, ColorSpaceConversion, VideoDescription, VideoPreprocessors};

/// Source video codecs with a target equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCodec {
    H264,
    Mpeg2,
    Vp8,
    Vp9,
    Gif,
}

impl VideoCodec {
    pub fn from_source(codec: &str) -> Option<Self> {
        match codec {
            "H.264" => Some(Self::H264),
            "mpeg2" => Some(Self::Mpeg2),
            "vp8" => Some(Self::Vp8),
            "vp9" => Some(Self::Vp9),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

/// Translates the whole video description: codec settings, output bounds,
/// scaling behaviour and colour correction.
pub fn translate_video(video: &VideoParameters, cx: &mut Context<'_>) -> VideoDescription {
    let codec_settings = translate_video_codec(video, cx);
    let bounds = resolution(video).unwrap_or_default();

    VideoDescription {
        codec_settings,
        width: bounds.width,
        height: bounds.height,
        scaling_behavior: scaling_behavior(
            video.sizing_policy.as_deref(),
            video.padding_policy.as_deref(),
            &video.path,
            cx,
        ),
        video_preprocessors: color_corrector(
            video.codec_options.color_space_conversion_mode.as_deref(),
        ),
    }
}

/// Selects the rate control mode: CBR when only a bitrate is declared,
/// otherwise QVBR for H.264 and VBR for everything else.
pub fn rate_control_mode(codec: VideoCodec, video: &VideoParameters) -> Option<RateControlMode> {
    let has_bitrate = is_concrete(video.bit_rate.as_deref());
    let has_max_bitrate = video.max_bit_rate().is_some();
    let constant = has_bitrate && !has_max_bitrate;

    match codec {
        VideoCodec::H264 if constant => Some(RateControlMode::Cbr),
        VideoCodec::H264 => Some(RateControlMode::Qvbr),
        VideoCodec::Mpeg2 if constant => Some(RateControlMode::Cbr),
        VideoCodec::Mpeg2 | VideoCodec::Vp8 | VideoCodec::Vp9 => Some(RateControlMode::Vbr),
        VideoCodec::Gif => None,
    }
}

pub fn translate_video_codec(video: &VideoParameters, cx: &mut Context<'_>) -> Option<VideoCodecSettings> {
    let options = &video.codec_options;
    let source_codec = video.codec.as_deref().unwrap_or_default();

    let Some(codec) = VideoCodec::from_source(source_codec) else {
        cx.error(
            &video.path.key("codec"),
            format!("MediaConvert does not support {source_codec} video codec."),
        );
        return None;
    };

    let level = options.level.as_deref();
    if codec == VideoCodec::H264 && level == Some("1b") {
        cx.warn(
            &options.path.key("level"),
            "MediaConvert does not support H.264 codec level '1b'. Ignoring this setting which \
             tells MediaConvert to automatically detect codec level.",
        );
    }

    if codec == VideoCodec::Vp8 && options.profile.is_some() {
        cx.warn(
            &options.path.key("profile"),
            "MediaConvert does not support VP8 profile. This setting is ignored.",
        );
    }

    let mode = rate_control_mode(codec, video);
    if mode == Some(RateControlMode::Vbr) && !is_concrete(video.bit_rate.as_deref()) {
        cx.warn(
            &video.path.key("bitRate"),
            "When using VBR, MediaConvert requires video bitrate to be specified, but it is not \
             specified in the Elastic Transcoder preset settings.",
        );
    }
    if mode == Some(RateControlMode::Qvbr) && video.max_bit_rate().is_none() {
        cx.warn(
            &options.path.key("maxBitRate"),
            "When using QVBR, MediaConvert requires video max bitrate to be specified, but it is \
             not specified in the Elastic Transcoder preset settings.",
        );
    }

    let bitrate = match mode {
        Some(RateControlMode::Qvbr) | None => None,
        _ => scaled(parse_int(video.bit_rate.as_deref()), 1000, &video.path.key("bitRate"), cx),
    };
    let max_bitrate = match mode {
        Some(RateControlMode::Cbr) | None => None,
        _ => scaled(parse_int(video.max_bit_rate()), 1000, &options.path.key("maxBitRate"), cx),
    };

    let framerate = framerate(video.frame_rate.as_deref());
    let par = par(video, cx)
        .map(|p| ParControl::specified(p.numerator, p.denominator))
        .unwrap_or_default();
    let gop = fixed_gop(video);
    let interlace_mode = interlace_mode(options.interlaced_mode.as_deref());

    let settings = match codec {
        VideoCodec::H264 => {
            let profile = options.profile.as_deref();
            let baseline = profile == Some("baseline");
            let codec_profile = profile.map(str::to_uppercase);
            let cap_level = level.filter(|l| *l != "1b");
            let cap = hrd::h264_max(codec_profile.as_deref(), cap_level);

            VideoCodecSettings::H264 {
                settings: H264Settings {
                    gop,
                    bitrate,
                    rate_control_mode: mode,
                    framerate,
                    par,
                    codec_level: cap_level.map(|l| format!("LEVEL_{}", l.replace('.', "_"))),
                    codec_profile,
                    entropy_encoding: baseline.then_some("CAVLC"),
                    number_reference_frames: parse_int(options.max_reference_frames.as_deref()),
                    number_b_frames_between_reference_frames: baseline.then_some(0),
                    max_bitrate,
                    hrd_buffer_size: hrd_buffer_size(video, cap, "H.264", cx),
                    interlace_mode,
                },
            }
        }
        VideoCodec::Mpeg2 => {
            let codec_profile = mpeg2_profile(options.chroma_subsampling.as_deref());
            let cap = Some(hrd::mpeg2_max(codec_profile));

            VideoCodecSettings::Mpeg2 {
                settings: Mpeg2Settings {
                    gop,
                    bitrate,
                    rate_control_mode: mode,
                    framerate,
                    par,
                    codec_profile,
                    max_bitrate,
                    hrd_buffer_size: hrd_buffer_size(video, cap, "MPEG-2", cx),
                    interlace_mode,
                },
            }
        }
        VideoCodec::Vp8 | VideoCodec::Vp9 => {
            let name = if codec == VideoCodec::Vp8 { "VP8" } else { "VP9" };
            let settings = VpxSettings {
                gop_size: gop.gop_size,
                bitrate,
                rate_control_mode: mode,
                framerate,
                par,
                max_bitrate,
                hrd_buffer_size: hrd_buffer_size(video, Some(hrd::VPX_MAX), name, cx),
            };
            if codec == VideoCodec::Vp8 {
                VideoCodecSettings::Vp8 { settings }
            } else {
                VideoCodecSettings::Vp9 { settings }
            }
        }
        VideoCodec::Gif => {
            gif_warnings(video, cx);
            VideoCodecSettings::Gif {
                settings: GifSettings { framerate },
            }
        }
    };

    Some(settings)
}

/// Source frame rates to target numerator/denominator pairs; NTSC rates use
/// a 1001 denominator. "auto" and unknown rates leave the framerate unset.
pub fn framerate(frame_rate: Option<&str>) -> Framerate {
    match frame_rate {
        Some("10") => Framerate::specified(10, 1),
        Some("15") => Framerate::specified(15, 1),
        Some("23.97") => Framerate::specified(24_000, 1001),
        Some("24") => Framerate::specified(24, 1),
        Some("25") => Framerate::specified(25, 1),
        Some("29.97") => Framerate::specified(30_000, 1001),
        Some("30") => Framerate::specified(30, 1),
        Some("50") => Framerate::specified(50, 1),
        Some("60") => Framerate::specified(60, 1),
        _ => Framerate::default(),
    }
}

fn interlace_mode(mode: Option<&str>) -> Option<InterlaceMode> {
    match mode? {
        "TopFirst" => Some(InterlaceMode::TopField),
        "BottomFirst" => Some(InterlaceMode::BottomField),
        // auto and Progressive leave the target default, progressive.
        _ => None,
    }
}

fn mpeg2_profile(chroma_subsampling: Option<&str>) -> Option<Mpeg2Profile> {
    match chroma_subsampling? {
        "yuv420p" => Some(Mpeg2Profile::Main),
        "yuv422p" => Some(Mpeg2Profile::Profile422),
        _ => None,
    }
}

fn fixed_gop(video: &VideoParameters) -> Gop {
    if video.fixed_gop.as_deref() == Some("true") {
        Gop {
            gop_size_units: Some("FRAMES"),
            gop_size: parse_int(video.keyframes_max_dist.as_deref()),
        }
    } else {
        Gop::default()
    }
}

/// Buffer size in bits: the declared size, or ten times the max bitrate,
/// capped at `cap` when one applies.
fn hrd_buffer_size(
    video: &VideoParameters,
    cap: Option<u64>,
    codec_name: &str,
    cx: &mut Context<'_>,
) -> Option<i64> {
    let options = &video.codec_options;
    let requested = match parse_int(options.buffer_size.as_deref()) {
        Some(kbits) => scaled(Some(kbits), 1000, &options.path.key("bufferSize"), cx)?,
        None => scaled(parse_int(video.max_bit_rate()), 10_000, &options.path.key("maxBitRate"), cx)?,
    };

    match cap.and_then(|cap| i64::try_from(cap).ok()) {
        Some(cap) if requested > cap => {
            cx.warn(
                &options.path.key("bufferSize"),
                format!(
                    "The buffer size of {requested} bits exceeds the maximum hrdBufferSize of \
                     {cap} bits MediaConvert allows for this {codec_name} profile and level. \
                     The maximum value is used."
                ),
            );
            Some(cap)
        }
        _ => Some(requested),
    }
}

fn gif_warnings(video: &VideoParameters, cx: &mut Context<'_>) {
    let options = &video.codec_options;
    if is_concrete(video.bit_rate.as_deref()) {
        cx.warn(
            &video.path.key("bitRate"),
            "MediaConvert does not support GIF bitrate. This setting is ignored.",
        );
    }
    if options.loop_count.is_some() {
        cx.warn(
            &options.path.key("loopCount"),
            "MediaConvert does not support GIF loop count. This setting is ignored.",
        );
    }
    if options.buffer_size.is_some() {
        cx.warn(
            &options.path.key("bufferSize"),
            "MediaConvert does not support GIF buffer size. This setting is ignored.",
        );
    }
}

fn color_corrector(mode: Option<&str>) -> Option<VideoPreprocessors> {
    let conversion = match mode? {
        "Bt601ToBt709" => ColorSpaceConversion::Force709,
        "Bt709ToBt601" => ColorSpaceConversion::Force601,
        _ => return None,
    };
    Some(VideoPreprocessors {
        color_corrector: ColorCorrector {
            color_space_conversion: conversion,
        },
    })
}
