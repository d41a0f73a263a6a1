// ============================================================================
// ets2emc-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ConvertConfig
//
// Provides a fluent API for assembling a ConvertConfig from command-line
// options or test fixtures. Optional string settings given as empty strings
// are treated as unset.

use super::ConvertConfig;

/// Builder for creating ConvertConfig instances.
///
/// # Examples
///
/// ```rust
/// use ets2emc_core::config::ConvertConfigBuilder;
///
/// let config = ConvertConfigBuilder::new()
///     .template_name("Web renditions")
///     .description("Converted from Elastic Transcoder")
///     .category("web")
///     .camel_case_output(true)
///     .build();
/// assert!(config.is_template());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new ConvertConfigBuilder with default values.
    ///
    /// # Returns
    ///
    /// * A new ConvertConfigBuilder instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether static defaults are inserted for "auto" settings.
    ///
    /// # Arguments
    ///
    /// * `insert` - Whether to insert defaults
    ///
    /// # Returns
    ///
    /// * The builder instance for method chaining
    pub fn insert_defaults(mut self, insert: bool) -> Self {
        self.config.insert_defaults = insert;
        self
    }

    /// Sets whether the rendered document keeps camelCase property names.
    pub fn camel_case_output(mut self, camel: bool) -> Self {
        self.config.camel_case_output = camel;
        self
    }

    /// Sets the job template name, enabling template mode.
    pub fn template_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.template_name = non_empty(name.into());
        self
    }

    /// Sets the job template description.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.config.description = non_empty(description.into());
        self
    }

    /// Sets the job template category.
    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.config.category = non_empty(category.into());
        self
    }

    /// Sets the IAM role ARN of the converted job.
    pub fn role_arn<S: Into<String>>(mut self, role_arn: S) -> Self {
        self.config.role_arn = non_empty(role_arn.into());
        self
    }

    /// Sets the playlist format used for standalone preset conversion.
    ///
    /// # Arguments
    ///
    /// * `format` - One of HLSv3, HLSv4, Smooth or MPEG-DASH
    ///
    /// # Returns
    ///
    /// * The builder instance for method chaining
    pub fn playlist_format<S: Into<String>>(mut self, format: S) -> Self {
        self.config.playlist_format = non_empty(format.into());
        self
    }

    /// Builds the ConvertConfig instance.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let config = ConvertConfigBuilder::new().build();
        assert_eq!(config, ConvertConfig::default());
        assert!(!config.insert_defaults);
        assert!(!config.camel_case_output);
        assert!(!config.is_template());
    }

    #[test]
    fn empty_strings_are_treated_as_unset() {
        let config = ConvertConfigBuilder::new()
            .template_name("")
            .role_arn("arn:aws:iam::1:role/r")
            .playlist_format("")
            .build();
        assert!(!config.is_template());
        assert_eq!(config.role_arn.as_deref(), Some("arn:aws:iam::1:role/r"));
        assert_eq!(config.playlist_format, None);
    }
}
