//! Elastic Transcoder pipeline records.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pipeline {
    pub id: Option<String>,
    pub name: Option<String>,
    pub input_bucket: Option<String>,
    pub output_bucket: Option<String>,
    pub content_config: Option<BucketConfig>,
    pub thumbnail_config: Option<BucketConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BucketConfig {
    pub bucket: Option<String>,
}

impl Pipeline {
    pub fn input_bucket(&self) -> &str {
        self.input_bucket.as_deref().unwrap_or_default()
    }

    /// Bucket receiving transcoded files.
    pub fn content_bucket(&self) -> &str {
        self.output_bucket
            .as_deref()
            .or_else(|| self.content_config.as_ref().and_then(|c| c.bucket.as_deref()))
            .unwrap_or_default()
    }

    /// Bucket receiving thumbnails, falling back to the content bucket.
    pub fn thumbnail_bucket(&self) -> &str {
        self.thumbnail_config
            .as_ref()
            .and_then(|c| c.bucket.as_deref())
            .unwrap_or_else(|| self.content_bucket())
    }
}
