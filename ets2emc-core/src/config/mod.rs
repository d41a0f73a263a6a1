//! Conversion configuration for the ets2emc-core library.
//!
//! The configuration is an explicit context value: it is created once by the
//! caller (usually ets2emc-cli) and passed by reference into every translator,
//! so two conversions in one process never share hidden state.

mod builder;

pub use builder::ConvertConfigBuilder;

/// Prefix prepended to every converted preset name.
pub const PRESET_NAME_PREFIX: &str = "ETS ";

/// Maximum length of a converted preset name.
pub const MAX_PRESET_NAME_LEN: usize = 65;

/// Main configuration structure for a single conversion.
///
/// All fields default to "off"/unset, which yields a plain job document with
/// PascalCase property names and no inserted defaults.
///
/// # Examples
///
/// ```rust
/// use ets2emc_core::config::ConvertConfigBuilder;
///
/// let config = ConvertConfigBuilder::new()
///     .insert_defaults(true)
///     .role_arn("arn:aws:iam::123456789012:role/MediaConvert")
///     .build();
/// assert!(!config.is_template());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Insert a static fallback (with a warning) for required target values
    /// that the source left as "auto". When false the value stays absent and an
    /// error is recorded instead.
    pub insert_defaults: bool,

    /// Keep camelCase property names in the rendered document instead of
    /// converting them to PascalCase.
    pub camel_case_output: bool,

    /// Job template name. Setting it switches job conversion to template mode.
    pub template_name: Option<String>,

    /// Job template description (template mode only)
    pub description: Option<String>,

    /// Job template category (template mode only)
    pub category: Option<String>,

    /// IAM role used by the converted job (job mode only)
    pub role_arn: Option<String>,

    /// Playlist format used to pick the container of a standalone preset.
    pub playlist_format: Option<String>,
}

impl ConvertConfig {
    /// Whether the job is converted to a job template rather than a job.
    pub fn is_template(&self) -> bool {
        self.template_name.is_some()
    }
}
