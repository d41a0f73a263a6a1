//! Output preset records of the target schema.

use super::job::{AudioDescription, ContainerSettings, VideoDescription};
use serde::Serialize;

/// One converted output preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDocument {
    pub name: String,
    pub description: Option<String>,
    pub settings: PresetSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSettings {
    pub container_settings: Option<ContainerSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_descriptions: Vec<AudioDescription>,
    pub video_description: Option<VideoDescription>,
}
