// ============================================================================
// ets2emc-core/src/source/load.rs
// ============================================================================
//
// DOCUMENT LOADING: Parsing source API documents into path-tracked records
//
// Accepts either the API response envelope ({"Job": {...}}) or the bare
// object, with PascalCase or camelCase keys. Keys are normalised to camelCase,
// empty values are dropped, and every nested record receives its structural
// path before the record is handed out.

use super::{Job, Pipeline, Preset};
use crate::error::{CoreError, CoreResult};
use crate::json::{remove_empty, to_camel_case};
use crate::path::{AttachPaths, Path};
use serde::de::DeserializeOwned;
use serde_json::Value;

const USER_METADATA: &str = "userMetadata";

/// Parses a job document. The job is rooted at `job`.
pub fn load_job(json: &str) -> CoreResult<Job> {
    let mut value = unwrap_envelope(json, "Job", "job")?;

    // User metadata keys and values belong to the user; keep them verbatim.
    let user_metadata = match value.as_object_mut().and_then(|o| o.remove(USER_METADATA)) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };

    let job: Job = parse(value, "job")?;
    log::debug!(
        "Loaded job {} with {} input(s), {} output(s), {} playlist(s)",
        job.id.as_deref().unwrap_or("<unnamed>"),
        job.inputs.len(),
        job.outputs.len(),
        job.playlists.len()
    );

    Ok(Job {
        user_metadata,
        ..job.attach_paths(&Path::from_keys(["job"]))
    })
}

/// Parses a pipeline document.
pub fn load_pipeline(json: &str) -> CoreResult<Pipeline> {
    let value = unwrap_envelope(json, "Pipeline", "pipeline")?;
    parse(value, "pipeline")
}

/// Parses a preset document. The preset is rooted at `preset.<name>`, or at
/// `preset.<id>` for an unnamed preset.
pub fn load_preset(json: &str) -> CoreResult<Preset> {
    let value = unwrap_envelope(json, "Preset", "preset")?;
    let preset: Preset = parse(value, "preset")?;
    let root = preset
        .name
        .clone()
        .or_else(|| preset.id.clone())
        .unwrap_or_default();
    log::debug!("Loaded preset '{}'", root);
    Ok(preset.attach_paths(&Path::from_keys(["preset".to_string(), root])))
}

/// Returns the camelCased record, unwrapping the `{"<Envelope>": {...}}`
/// response object when present.
fn unwrap_envelope(json: &str, envelope: &str, kind: &'static str) -> CoreResult<Value> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(mut object) = value else {
        return Err(CoreError::MalformedDocument {
            kind,
            message: "expected a JSON object".to_string(),
        });
    };

    let camel_envelope = kind;
    let inner = match (object.remove(envelope), object.remove(camel_envelope)) {
        (Some(inner), _) | (None, Some(inner)) => inner,
        (None, None) => Value::Object(object),
    };

    if !inner.is_object() {
        return Err(CoreError::MalformedDocument {
            kind,
            message: format!("'{}' is not an object", envelope),
        });
    }

    Ok(to_camel_case(inner, &[USER_METADATA]))
}

fn parse<T: DeserializeOwned>(value: Value, kind: &'static str) -> CoreResult<T> {
    serde_json::from_value(remove_empty(value)).map_err(|e| CoreError::MalformedDocument {
        kind,
        message: e.to_string(),
    })
}
