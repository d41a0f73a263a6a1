//! Source documents: Elastic Transcoder jobs, pipelines and presets.
//!
//! Records are read-only once loaded. Every record that can be the subject of
//! a diagnostic carries its structural [`Path`](crate::path::Path).

mod job;
mod load;
mod pipeline;
mod preset;

pub use job::{
    CaptionFormat, CaptionSource, Encryption, HlsContentProtection, InputCaptions, Job,
    JobInput, JobOutput, OutputCaptions, Playlist, TimeSpan,
};
pub use load::{load_job, load_pipeline, load_preset};
pub use pipeline::{BucketConfig, Pipeline};
pub use preset::{
    AUTO, AudioCodecOptions, AudioParameters, Preset, Thumbnails, VideoCodecOptions,
    VideoParameters,
};

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;

/// Presets keyed by preset id.
#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    presets: HashMap<String, Preset>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preset under its id. A preset without an id is stored under
    /// its name.
    pub fn insert(&mut self, preset: Preset) {
        let id = preset
            .id
            .clone()
            .or_else(|| preset.name.clone())
            .unwrap_or_default();
        self.presets.insert(id, preset);
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl FromIterator<Preset> for PresetTable {
    fn from_iter<I: IntoIterator<Item = Preset>>(iter: I) -> Self {
        let mut table = Self::new();
        for preset in iter {
            table.insert(preset);
        }
        table
    }
}

/// A job together with everything needed to translate it.
///
/// Construction checks that every output's preset is present, so the
/// translators can treat a missing preset as impossible.
#[derive(Debug, Clone)]
pub struct JobSource {
    pub job: Job,
    pub pipeline: Pipeline,
    pub presets: PresetTable,
}

impl JobSource {
    pub fn new(job: Job, pipeline: Pipeline, presets: PresetTable) -> CoreResult<Self> {
        for output in &job.outputs {
            let preset_id = output.preset_id.as_deref().unwrap_or_default();
            if presets.get(preset_id).is_none() {
                return Err(CoreError::UnresolvedPreset {
                    output_key: output.key.clone().unwrap_or_default(),
                    preset_id: preset_id.to_string(),
                });
            }
        }
        Ok(Self {
            job,
            pipeline,
            presets,
        })
    }

    /// The preset of an output.
    pub fn preset_of(&self, output: &JobOutput) -> Option<&Preset> {
        output
            .preset_id
            .as_deref()
            .and_then(|id| self.presets.get(id))
    }

    /// Whether any output of the job produces audio.
    pub fn has_output_audio(&self) -> bool {
        self.job
            .outputs
            .iter()
            .filter_map(|output| self.preset_of(output))
            .any(|preset| preset.audio.is_some())
    }
}
