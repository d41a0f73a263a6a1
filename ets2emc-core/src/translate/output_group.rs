// ============================================================================
// ets2emc-core/src/translate/output_group.rs
// ============================================================================
//
// OUTPUT GROUPS: Job outputs, playlists and thumbnails to output groups
//
// A job's outputs are assembled into three kinds of groups:
// - one playlist group per playlist (HLS, Smooth or DASH)
// - one file group per output no playlist references
// - one thumbnail file group per output with a thumbnail pattern and a
//   preset that declares thumbnails
//
// The job translator emits them in exactly that order. Every destination is
// `s3://<bucket>/<prefix><key>` with at most one leading '/' stripped from the
// prefix.

use super::audio::translate_audio;
use super::captions::sidecar_outputs;
use super::container::{PlaylistFormat, file_container, invalid_playlist_format};
use super::encryption::translate_hls_protection;
use super::thumbnails::translate_thumbnails;
use super::video::translate_video;
use super::{Context, parse_int};
use crate::source::{JobOutput, JobSource, Playlist};
use crate::target::job::{
    CaptionSelector, ContainerSettings, DashIsoGroupSettings, FileGroupSettings, HlsGroupSettings,
    MsSmoothGroupSettings, Output, OutputGroup, OutputGroupSettings,
};

const FILE_GROUP_NAME: &str = "File Group";

/// Fragment length, in seconds, of Smooth and DASH groups.
const FRAGMENT_LENGTH: i64 = 2;

/// Builds an S3 destination URI.
pub fn destination(bucket: &str, prefix: Option<&str>, key: &str) -> String {
    let prefix = prefix.unwrap_or_default();
    let prefix = prefix.strip_prefix('/').unwrap_or(prefix);
    format!("s3://{bucket}/{prefix}{key}")
}

/// Removes the extension from the last path component of a key.
pub fn trim_extension(key: &str) -> &str {
    match key.rfind('.') {
        Some(i) => &key[..i],
        None => key,
    }
}

/// Translates one job output with its preset. Outputs packaged by a playlist
/// take the playlist's container; HLS outputs are named after their key.
pub fn translate_output(
    source: &JobSource,
    output: &JobOutput,
    playlist_format: Option<PlaylistFormat>,
    cx: &mut Context<'_>,
) -> Option<Output> {
    let preset = source.preset_of(output)?;

    let container_settings = match playlist_format {
        Some(format) => Some(ContainerSettings {
            container: format.container(),
        }),
        None => file_container(preset, cx),
    };

    Some(Output {
        name_modifier: (playlist_format == Some(PlaylistFormat::Hls))
            .then(|| format!("-{}", output.key.as_deref().unwrap_or_default())),
        container_settings,
        audio_descriptions: preset
            .audible()
            .map(|audio| translate_audio(audio, cx))
            .into_iter()
            .collect(),
        video_description: preset.video.as_ref().map(|video| translate_video(video, cx)),
        caption_descriptions: Vec::new(),
    })
}

/// A file group holding one standalone output and its sidecar captions.
pub fn file_group(
    source: &JobSource,
    output: &JobOutput,
    selectors: &[CaptionSelector],
    cx: &mut Context<'_>,
) -> OutputGroup {
    let key = output.key.as_deref().unwrap_or_default();
    let mut outputs: Vec<Output> = translate_output(source, output, None, cx).into_iter().collect();
    outputs.extend(sidecar_outputs(output, &source.job, selectors, None, cx));

    OutputGroup {
        name: FILE_GROUP_NAME.to_string(),
        output_group_settings: OutputGroupSettings::File {
            settings: FileGroupSettings {
                destination: destination(
                    source.pipeline.content_bucket(),
                    source.job.output_key_prefix.as_deref(),
                    trim_extension(key),
                ),
            },
        },
        outputs,
    }
}

/// An adaptive-bitrate group for one playlist. A playlist with an invalid
/// format produces no group.
pub fn playlist_group(
    source: &JobSource,
    playlist: &Playlist,
    selectors: &[CaptionSelector],
    cx: &mut Context<'_>,
) -> Option<OutputGroup> {
    let raw_format = playlist.format.as_deref().unwrap_or_default();
    let Some(format) = PlaylistFormat::parse(raw_format) else {
        cx.error(&playlist.path.key("format"), invalid_playlist_format(raw_format));
        return None;
    };

    let members: Vec<&JobOutput> = source.job.playlist_outputs(playlist).collect();

    let mut outputs: Vec<Output> = members
        .iter()
        .filter_map(|output| translate_output(source, output, Some(format), cx))
        .collect();
    if let Some(first) = members.first() {
        outputs.extend(sidecar_outputs(first, &source.job, selectors, Some(format), cx));
    }

    let segment_length = members
        .iter()
        .find_map(|output| output.segment_duration.as_deref())
        .and_then(|duration| parse_int(Some(duration)))
        .filter(|seconds| *seconds != 0);
    if segment_length.is_some() {
        cx.info(
            &playlist.path,
            "The converter uses the segment duration of the first output in the playlist that \
             has the setting.",
        );
    }

    if playlist.play_ready_drm.is_some() {
        cx.warn(
            &playlist.path.key("playReadyDrm"),
            "MediaConvert does not support PlayReady DRM with a static key. This setting is ignored.",
        );
    }

    // Playlist groups write to the bare prefix; manifests are named by the service.
    let destination = destination(
        source.pipeline.content_bucket(),
        source.job.output_key_prefix.as_deref(),
        "",
    );
    let encryption = playlist
        .hls_content_protection
        .as_ref()
        .map(translate_hls_protection);

    let (name, output_group_settings) = match format {
        PlaylistFormat::Hls => (
            "Apple HLS",
            OutputGroupSettings::Hls {
                settings: HlsGroupSettings {
                    destination,
                    encryption,
                    min_segment_length: 0,
                    segment_length,
                },
            },
        ),
        PlaylistFormat::Smooth => (
            "MS Smooth",
            OutputGroupSettings::MsSmooth {
                settings: MsSmoothGroupSettings {
                    destination,
                    fragment_length: FRAGMENT_LENGTH,
                    encryption,
                },
            },
        ),
        PlaylistFormat::Dash => (
            "DASH ISO",
            OutputGroupSettings::DashIso {
                settings: DashIsoGroupSettings {
                    destination,
                    encryption,
                    fragment_length: FRAGMENT_LENGTH,
                    segment_length,
                },
            },
        ),
    };

    Some(OutputGroup {
        name: name.to_string(),
        output_group_settings,
        outputs,
    })
}

/// A file group capturing thumbnails for one output, when the output has a
/// thumbnail pattern and its preset declares thumbnails.
pub fn thumbnail_group(
    source: &JobSource,
    output: &JobOutput,
    cx: &mut Context<'_>,
) -> Option<OutputGroup> {
    let thumbnails = source.preset_of(output)?.thumbnails.as_ref()?;
    let pattern = output.thumbnail_pattern.as_deref()?;

    cx.info(
        &output.path.key("thumbnailPattern"),
        "Thumbnail file name pattern might have changed.",
    );

    let mut thumbnail_output = Output::from(translate_thumbnails(thumbnails, cx));
    if pattern.contains("{resolution}") {
        thumbnail_output.name_modifier = Some(format!(
            "-{}x{}",
            thumbnails.max_width.as_deref().unwrap_or_default(),
            thumbnails.max_height.as_deref().unwrap_or_default()
        ));
    }

    Some(OutputGroup {
        name: FILE_GROUP_NAME.to_string(),
        output_group_settings: OutputGroupSettings::File {
            settings: FileGroupSettings {
                destination: destination(
                    source.pipeline.thumbnail_bucket(),
                    source.job.output_key_prefix.as_deref(),
                    trim_extension(output.key.as_deref().unwrap_or_default()),
                ),
            },
        },
        outputs: vec![thumbnail_output],
    })
}
