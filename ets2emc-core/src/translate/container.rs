//! Container selection for file and adaptive-bitrate outputs.

use super::Context;
use crate::path::Path;
use crate::source::Preset;
use crate::target::job::{Container, ContainerSettings};

/// Adaptive-bitrate packaging selected by a playlist format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    Hls,
    Smooth,
    Dash,
}

impl PlaylistFormat {
    pub fn parse(format: &str) -> Option<Self> {
        match format {
            "HLSv3" | "HLSv4" => Some(Self::Hls),
            "Smooth" => Some(Self::Smooth),
            "MPEG-DASH" => Some(Self::Dash),
            _ => None,
        }
    }

    pub fn container(self) -> Container {
        match self {
            Self::Hls => Container::M3u8,
            Self::Smooth => Container::Ismv,
            Self::Dash => Container::Mpd,
        }
    }
}

/// Container of a standalone file output.
pub fn file_container(preset: &Preset, cx: &mut Context<'_>) -> Option<ContainerSettings> {
    let source = preset.container.as_deref().unwrap_or_default();
    let container = match source {
        "flac" | "mp2" | "mp3" | "wav" => Some(Container::Raw),
        "flv" => Some(Container::F4v),
        "gif" => Some(Container::Gif),
        "mp4" => Some(Container::Mp4),
        "mxf" => Some(Container::Mxf),
        "oga" | "ogg" => Some(Container::Ogg),
        "ts" => Some(Container::M2ts),
        "webm" => Some(Container::Webm),
        _ => None,
    };

    if container.is_none() {
        let message = if source == "fmp4" {
            "MediaConvert only support fragmented MP4 output inside an HLS, DASH, or CMAF output group."
                .to_string()
        } else {
            format!("MediaConvert does not support {source} container.")
        };
        cx.error(&preset.path.key("container"), message);
    }

    container.map(|container| ContainerSettings { container })
}

/// Container of an output packaged by a playlist of the given format.
pub fn playlist_container(format: &str, path: &Path, cx: &mut Context<'_>) -> Option<ContainerSettings> {
    match PlaylistFormat::parse(format) {
        Some(format) => Some(ContainerSettings {
            container: format.container(),
        }),
        None => {
            cx.error(path, invalid_playlist_format(format));
            None
        }
    }
}

pub fn invalid_playlist_format(format: &str) -> String {
    format!("Playlist format '{format}' is invalid.")
}

/// Container of a converted preset: the playlist container when a playlist
/// format is configured, the file container otherwise.
pub fn preset_container(preset: &Preset, cx: &mut Context<'_>) -> Option<ContainerSettings> {
    match cx.config.playlist_format.clone() {
        Some(format) => playlist_container(&format, &Path::from_keys(["playlistFormat"]), cx),
        None => file_container(preset, cx),
    }
}
