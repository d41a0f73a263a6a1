//! Core library translating Amazon Elastic Transcoder settings into AWS
//! Elemental MediaConvert settings.
//!
//! The crate loads source job, pipeline and preset documents, translates them
//! into MediaConvert job, job template or output preset documents, and records
//! every lossy or approximated decision as a path-tagged diagnostic.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ets2emc_core::config::ConvertConfigBuilder;
//! use ets2emc_core::source::{load_job, load_pipeline, load_preset, JobSource, PresetTable};
//! use ets2emc_core::translate::{job::render_job, translate_job};
//!
//! # fn main() -> ets2emc_core::CoreResult<()> {
//! let job = load_job(&std::fs::read_to_string("job.json")?)?;
//! let pipeline = load_pipeline(&std::fs::read_to_string("pipeline.json")?)?;
//! let presets: PresetTable = [load_preset(&std::fs::read_to_string("preset.json")?)?]
//!     .into_iter()
//!     .collect();
//!
//! let config = ConvertConfigBuilder::new()
//!     .role_arn("arn:aws:iam::123456789012:role/MediaConvert")
//!     .build();
//! let source = JobSource::new(job, pipeline, presets)?;
//! let (document, diagnostics) = translate_job(&source, &config);
//!
//! eprintln!("{}", diagnostics.format());
//! println!("{}", render_job(&document, &source.job, &config)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod json;
pub mod logging;
pub mod path;
pub mod source;
pub mod target;
pub mod translate;

// Re-exports for public API
pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use diagnostics::{Diagnostic, Diagnostics, Level};
pub use error::{CoreError, CoreResult};
pub use path::Path;
pub use source::{JobSource, PresetTable, load_job, load_pipeline, load_preset};
pub use translate::{translate_job, translate_preset};
