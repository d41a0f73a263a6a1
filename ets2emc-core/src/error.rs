// ============================================================================
// ets2emc-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Load-time error types for the translation engine
//
// Translation itself never fails: every per-field problem is recorded as a
// diagnostic and the rest of the document is still produced. The errors in
// this module cover the collaborator boundary only, i.e. reading and parsing
// the source documents and rendering the target document.

use thiserror::Error;

/// Errors raised while loading source documents or rendering target documents.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed {kind} document: {message}")]
    MalformedDocument { kind: &'static str, message: String },

    #[error("Output '{output_key}' references preset '{preset_id}', which was not provided")]
    UnresolvedPreset {
        output_key: String,
        preset_id: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for ets2emc-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
