//! Elastic Transcoder job records.

use crate::path::{AttachPaths, Path};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A transcoding job: inputs, outputs and the playlists grouping them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(skip)]
    pub path: Path,
    pub id: Option<String>,
    pub pipeline_id: Option<String>,
    pub output_key_prefix: Option<String>,
    pub inputs: Vec<JobInput>,
    pub outputs: Vec<JobOutput>,
    pub playlists: Vec<Playlist>,
    /// Copied verbatim to the converted job; never re-cased.
    #[serde(skip)]
    pub user_metadata: Option<Map<String, Value>>,
}

impl Job {
    /// Output keys referenced by any playlist, in playlist order.
    pub fn playlist_output_keys(&self) -> impl Iterator<Item = &str> {
        self.playlists
            .iter()
            .flat_map(|p| p.output_keys.iter().map(String::as_str))
    }

    /// Outputs not referenced by any playlist, in source order.
    pub fn standalone_outputs(&self) -> impl Iterator<Item = &JobOutput> {
        self.outputs.iter().filter(move |output| {
            !self
                .playlist_output_keys()
                .any(|key| Some(key) == output.key.as_deref())
        })
    }

    /// Outputs belonging to a playlist, in job output order.
    pub fn playlist_outputs<'a>(&'a self, playlist: &'a Playlist) -> impl Iterator<Item = &'a JobOutput> {
        self.outputs.iter().filter(move |output| {
            output
                .key
                .as_ref()
                .is_some_and(|key| playlist.output_keys.contains(key))
        })
    }

    pub fn has_output_captions(&self) -> bool {
        self.outputs.iter().any(JobOutput::has_caption_formats)
    }
}

impl AttachPaths for Job {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            inputs: self.inputs.attach_paths(&path.key("inputs")),
            outputs: self.outputs.attach_paths(&path.key("outputs")),
            playlists: self.playlists.attach_paths(&path.key("playlists")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobInput {
    #[serde(skip)]
    pub path: Path,
    pub key: Option<String>,
    pub encryption: Option<Encryption>,
    pub time_span: Option<TimeSpan>,
    pub input_captions: Option<InputCaptions>,
}

impl AttachPaths for JobInput {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            encryption: self.encryption.attach_paths(&path.key("encryption")),
            time_span: self.time_span.attach_paths(&path.key("timeSpan")),
            input_captions: self.input_captions.attach_paths(&path.key("inputCaptions")),
            path: path.clone(),
            ..self
        }
    }
}

/// Input decryption settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Encryption {
    #[serde(skip)]
    pub path: Path,
    pub mode: Option<String>,
    pub key: Option<String>,
    pub key_md5: Option<String>,
    pub initialization_vector: Option<String>,
}

impl AttachPaths for Encryption {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

/// Input clipping, with times as `HH:mm:ss.SSS` or `sssss.SSS`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeSpan {
    #[serde(skip)]
    pub path: Path,
    pub start_time: Option<String>,
    pub duration: Option<String>,
}

impl AttachPaths for TimeSpan {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputCaptions {
    #[serde(skip)]
    pub path: Path,
    pub merge_policy: Option<String>,
    pub caption_sources: Vec<CaptionSource>,
}

impl AttachPaths for InputCaptions {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            caption_sources: self.caption_sources.attach_paths(&path.key("captionSources")),
            path: path.clone(),
            ..self
        }
    }
}

/// A sidecar caption file attached to an input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptionSource {
    #[serde(skip)]
    pub path: Path,
    pub key: Option<String>,
    pub language: Option<String>,
    pub time_offset: Option<String>,
    pub label: Option<String>,
}

impl AttachPaths for CaptionSource {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOutput {
    #[serde(skip)]
    pub path: Path,
    pub key: Option<String>,
    pub preset_id: Option<String>,
    pub thumbnail_pattern: Option<String>,
    pub segment_duration: Option<String>,
    pub captions: Option<OutputCaptions>,
}

impl JobOutput {
    /// Whether the output declares at least one caption format.
    pub fn has_caption_formats(&self) -> bool {
        self.captions
            .as_ref()
            .is_some_and(|c| !c.caption_formats.is_empty())
    }
}

impl AttachPaths for JobOutput {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            captions: self.captions.attach_paths(&path.key("captions")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputCaptions {
    #[serde(skip)]
    pub path: Path,
    pub caption_formats: Vec<CaptionFormat>,
}

impl AttachPaths for OutputCaptions {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            caption_formats: self.caption_formats.attach_paths(&path.key("captionFormats")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptionFormat {
    #[serde(skip)]
    pub path: Path,
    pub format: Option<String>,
    pub pattern: Option<String>,
}

impl AttachPaths for CaptionFormat {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

/// A group of outputs packaged for adaptive-bitrate streaming.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    #[serde(skip)]
    pub path: Path,
    pub name: Option<String>,
    pub format: Option<String>,
    pub output_keys: Vec<String>,
    pub hls_content_protection: Option<HlsContentProtection>,
    pub play_ready_drm: Option<Value>,
}

impl AttachPaths for Playlist {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            hls_content_protection: self
                .hls_content_protection
                .attach_paths(&path.key("hlsContentProtection")),
            path: path.clone(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HlsContentProtection {
    #[serde(skip)]
    pub path: Path,
    pub method: Option<String>,
    pub key: Option<String>,
    pub initialization_vector: Option<String>,
    pub license_acquisition_url: Option<String>,
    pub key_storage_policy: Option<String>,
}

impl AttachPaths for HlsContentProtection {
    fn attach_paths(self, path: &Path) -> Self {
        Self {
            path: path.clone(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_job() -> Job {
        let job: Job = serde_json::from_value(json!({
            "inputs": [{ "key": "in.mp4", "timeSpan": { "startTime": "10" } }],
            "outputs": [
                { "key": "hls/400k", "presetId": "p1" },
                { "key": "file.mp4", "presetId": "p2", "captions": { "captionFormats": [{ "format": "srt" }] } },
                { "key": "hls/800k", "presetId": "p1" }
            ],
            "playlists": [{ "name": "index", "format": "HLSv3", "outputKeys": ["hls/800k", "hls/400k"] }]
        }))
        .unwrap();
        job.attach_paths(&Path::from_keys(["job"]))
    }

    #[test]
    fn attaches_paths_to_nested_records() {
        let job = sample_job();
        assert_eq!(job.path.to_string(), "job");
        assert_eq!(job.inputs[0].path.to_string(), "job.inputs[0]");
        assert_eq!(
            job.inputs[0].time_span.as_ref().unwrap().path.to_string(),
            "job.inputs[0].timeSpan"
        );
        assert_eq!(
            job.outputs[1].captions.as_ref().unwrap().caption_formats[0].path.to_string(),
            "job.outputs[1].captions.captionFormats[0]"
        );
        assert_eq!(job.playlists[0].path.to_string(), "job.playlists[0]");
    }

    #[test]
    fn splits_outputs_by_playlist_membership() {
        let job = sample_job();
        let standalone: Vec<_> = job.standalone_outputs().filter_map(|o| o.key.as_deref()).collect();
        assert_eq!(standalone, vec!["file.mp4"]);

        let in_playlist: Vec<_> = job
            .playlist_outputs(&job.playlists[0])
            .filter_map(|o| o.key.as_deref())
            .collect();
        assert_eq!(in_playlist, vec!["hls/400k", "hls/800k"]);
        assert!(job.has_output_captions());
    }
}
