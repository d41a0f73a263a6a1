// ============================================================================
// ets2emc-core/src/translate/mod.rs
// ============================================================================
//
// SETTINGS TRANSLATION: Elastic Transcoder settings to MediaConvert settings
//
// Each submodule translates one kind of source record into a complete target
// fragment. Translators never fail: lossy or impossible conversions are
// recorded in the diagnostics log carried by the translation Context, and the
// affected field is left absent.
//
// KEY COMPONENTS:
// - geometry: resolution and pixel aspect ratio
// - audio / video / hrd: codec settings
// - captions / language: caption selectors and sidecar outputs
// - output_group: file, playlist and thumbnail output groups
// - job / preset: whole-document orchestration

pub mod audio;
pub mod captions;
pub mod container;
pub mod encryption;
pub mod geometry;
pub mod hrd;
pub mod job;
pub mod language;
pub mod output_group;
pub mod preset;
pub mod sizing;
pub mod thumbnails;
pub mod time_span;
pub mod video;

pub use job::translate_job;
pub use preset::translate_preset;

use crate::config::ConvertConfig;
use crate::diagnostics::Diagnostics;
use crate::path::Path;

/// Per-run translation context: the configuration and the diagnostics log.
#[derive(Debug)]
pub struct Context<'a> {
    pub config: &'a ConvertConfig,
    pub diagnostics: Diagnostics,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn info<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.diagnostics.info(path, message);
    }

    pub fn warn<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.diagnostics.warn(path, message);
    }

    pub fn error<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.diagnostics.error(path, message);
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Parses the leading integer of a source string value, e.g. `"128"` or
/// `"23.97"` (yielding 23). Returns `None` when no digits lead the value.
pub(crate) fn parse_int(value: Option<&str>) -> Option<i64> {
    let value = value?.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Multiplies a parsed source value by `factor`, e.g. kbps to bps. A product
/// outside the `i64` range is recorded as a WARN at `path` and yields `None`.
pub(crate) fn scaled(value: Option<i64>, factor: i64, path: &Path, cx: &mut Context<'_>) -> Option<i64> {
    let value = value?;
    let product = value.checked_mul(factor);
    if product.is_none() {
        cx.warn(
            path,
            format!("The value {value} is out of range for MediaConvert. This setting is ignored."),
        );
    }
    product
}

/// Whether a source value is present and not `"auto"`.
pub(crate) fn is_concrete(value: Option<&str>) -> bool {
    value.is_some_and(|v| v != crate::source::AUTO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int(Some("128")), Some(128));
        assert_eq!(parse_int(Some(" 23.97")), Some(23));
        assert_eq!(parse_int(Some("-5")), Some(-5));
        assert_eq!(parse_int(Some("+7s")), Some(7));
        assert_eq!(parse_int(Some("auto")), None);
        assert_eq!(parse_int(Some("")), None);
        assert_eq!(parse_int(None), None);
    }

    #[test]
    fn auto_is_not_concrete() {
        assert!(is_concrete(Some("10")));
        assert!(!is_concrete(Some("auto")));
        assert!(!is_concrete(None));
    }

    #[test]
    fn scaled_rejects_products_out_of_range() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let path = Path::from_keys(["preset", "p"]).key("bitRate");

        assert_eq!(scaled(Some(128), 1000, &path, &mut cx), Some(128_000));
        assert_eq!(scaled(None, 1000, &path, &mut cx), None);
        assert!(cx.diagnostics.is_empty());

        assert_eq!(scaled(Some(i64::MAX), 1000, &path, &mut cx), None);
        let warnings = cx.diagnostics.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path.to_string(), "preset.p.bitRate");
    }
}
