//! Target documents: MediaConvert jobs, job templates and output presets.
//!
//! Translators build these records bottom-up; [`render`] turns a finished
//! record into the JSON handed to the caller.

pub mod codec;
pub mod job;
pub mod preset;

pub use codec::{AudioCodecSettings, RateControlMode, VideoCodecSettings};
pub use job::{JobDocument, OutputGroup};
pub use preset::{PresetDocument, PresetSettings};

use crate::error::CoreResult;
use crate::json::{remove_empty, to_pascal_case};
use serde::Serialize;
use serde_json::Value;

/// Serializes a target record, drops empty values and applies the requested
/// property-name casing.
pub fn render<T: Serialize>(document: &T, camel_case: bool) -> CoreResult<Value> {
    let value = remove_empty(serde_json::to_value(document)?);
    Ok(if camel_case {
        value
    } else {
        to_pascal_case(value)
    })
}
