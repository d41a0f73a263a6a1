//! Output resolution and pixel aspect ratio.

use super::{Context, parse_int};
use crate::source::{AUTO, VideoParameters};
use once_cell::sync::Lazy;
use regex::Regex;

static ASPECT_RATIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").expect("valid aspect ratio regex"));

static RESOLUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)x(\d+)$").expect("valid resolution regex"));

/// Output bounds; either side may be left to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// A reduced pixel aspect ratio; both terms are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Par {
    pub numerator: u64,
    pub denominator: u64,
}

/// Resolves the output bounds, preferring max width/height over the
/// combined `WxH` resolution string.
pub fn resolution(video: &VideoParameters) -> Option<Resolution> {
    let side = |value: Option<&str>| match value {
        Some(AUTO) | None => None,
        other => parse_int(other),
    };

    if video.max_width.is_some() || video.max_height.is_some() {
        return Some(Resolution {
            width: side(video.max_width.as_deref()),
            height: side(video.max_height.as_deref()),
        });
    }

    parse_resolution(video.resolution.as_deref()?).map(|(width, height)| Resolution {
        width: Some(width),
        height: Some(height),
    })
}

/// Parses a `WxH` resolution string.
pub fn parse_resolution(value: &str) -> Option<(i64, i64)> {
    let caps = RESOLUTION.captures(value)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

fn parse_aspect_ratio(value: Option<&str>) -> Option<(i64, i64)> {
    let caps = ASPECT_RATIO.captures(value?)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

/// Computes the pixel aspect ratio, trying the display aspect ratio first and
/// the aspect ratio second.
pub fn par(video: &VideoParameters, cx: &mut Context<'_>) -> Option<Par> {
    par_from_display_aspect_ratio(video, cx).or_else(|| par_from_aspect_ratio(video, cx))
}

/// The display aspect ratio applies to the output bounds, which are only
/// definite when the picture is stretched or padded to them.
pub fn par_from_display_aspect_ratio(video: &VideoParameters, cx: &mut Context<'_>) -> Option<Par> {
    let (dw, dh) = parse_aspect_ratio(video.display_aspect_ratio.as_deref())?;
    let path = video.path.key("displayAspectRatio");

    let stretched = video.sizing_policy.as_deref() == Some("Stretch");
    let padded = video.padding_policy.as_deref() == Some("Pad");
    let width = parse_int(video.max_width.as_deref());
    let height = parse_int(video.max_height.as_deref());

    let (Some(width), Some(height)) = (width, height) else {
        cx.warn(
            &path,
            "Video display aspect ratio cannot be converted to pixel aspect ratio without definite \
             video resolution. Video `displayAspectRatio` setting is ignored.",
        );
        return None;
    };
    if !stretched && !padded {
        cx.warn(
            &path,
            "Video display aspect ratio cannot be converted to pixel aspect ratio without definite \
             video resolution. Video `displayAspectRatio` setting is ignored.",
        );
        return None;
    }

    let par = dar_to_par(width, height, dw, dh);
    if par.is_none() {
        cx.warn(
            &path,
            "Video aspect ratio cannot be converted to pixel aspect ratio. \
             Video `displayAspectRatio` setting is ignored.",
        );
    }
    par
}

/// The aspect ratio applies to the `WxH` resolution string.
pub fn par_from_aspect_ratio(video: &VideoParameters, cx: &mut Context<'_>) -> Option<Par> {
    let (dw, dh) = parse_aspect_ratio(video.aspect_ratio.as_deref())?;
    let path = video.path.key("aspectRatio");

    let Some((width, height)) = video.resolution.as_deref().and_then(parse_resolution) else {
        cx.warn(
            &path,
            "Video aspect ratio cannot be converted to pixel aspect ratio without resolution. \
             Video `aspectRatio` setting is ignored.",
        );
        return None;
    };

    let par = dar_to_par(width, height, dw, dh);
    if par.is_none() {
        cx.warn(
            &path,
            "Video aspect ratio cannot be converted to pixel aspect ratio. \
             Video `aspectRatio` setting is ignored.",
        );
    }
    par
}

/// Converts a display aspect ratio `dw:dh` over a `w`x`h` frame into a
/// reduced pixel aspect ratio. Returns `None` unless every input is positive.
pub fn dar_to_par(w: i64, h: i64, dw: i64, dh: i64) -> Option<Par> {
    if w <= 0 || h <= 0 || dw <= 0 || dh <= 0 {
        return None;
    }
    let numerator = (dw as u64).checked_mul(h as u64)?;
    let denominator = (dh as u64).checked_mul(w as u64)?;
    let divisor = gcd(numerator, denominator);
    Some(Par {
        numerator: numerator / divisor,
        denominator: denominator / divisor,
    })
}

/// Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;

    fn video(fields: serde_json::Value) -> VideoParameters {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn gcd_follows_euclid() {
        let cases = [
            (0, 0, 0),
            (0, 1, 1),
            (1, 0, 1),
            (2, 2, 2),
            (2, 4, 2),
            (3, 5, 1),
            (30, 42, 6),
            (8000, 5000, 1000),
        ];
        for (a, b, expected) in cases {
            assert_eq!(gcd(a, b), expected, "gcd({a}, {b})");
        }
    }

    #[test]
    fn dar_to_par_reduces_the_fraction() {
        assert_eq!(dar_to_par(200, 200, 2, 1), Some(Par { numerator: 2, denominator: 1 }));
        assert_eq!(dar_to_par(1280, 720, 16, 9), Some(Par { numerator: 1, denominator: 1 }));
        assert_eq!(dar_to_par(1, 3, 5, 7), Some(Par { numerator: 15, denominator: 7 }));
        assert_eq!(dar_to_par(720, 480, 4, 3), Some(Par { numerator: 8, denominator: 9 }));
    }

    #[test]
    fn dar_to_par_rejects_degenerate_inputs() {
        assert_eq!(dar_to_par(0, 0, 16, 9), None);
        assert_eq!(dar_to_par(1280, 720, 0, 0), None);
        assert_eq!(dar_to_par(-400, 200, 16, 9), None);
    }

    #[test]
    fn resolution_prefers_max_bounds() {
        let cases = [
            ("auto", "auto", None, None),
            ("128", "auto", Some(128), None),
            ("auto", "96", None, Some(96)),
            ("128", "96", Some(128), Some(96)),
        ];
        for (max_width, max_height, width, height) in cases {
            let v = video(serde_json::json!({ "maxWidth": max_width, "maxHeight": max_height, "resolution": "640x480" }));
            assert_eq!(resolution(&v), Some(Resolution { width, height }));
        }
    }

    #[test]
    fn resolution_parses_the_combined_string() {
        let v = video(serde_json::json!({ "resolution": "128x96" }));
        assert_eq!(resolution(&v), Some(Resolution { width: Some(128), height: Some(96) }));
        assert_eq!(resolution(&video(serde_json::json!({ "resolution": "auto" }))), None);
        assert_eq!(resolution(&video(serde_json::json!({}))), None);
    }

    #[test]
    fn display_aspect_ratio_wins_over_aspect_ratio() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let v = video(serde_json::json!({
            "maxWidth": "1280",
            "maxHeight": "720",
            "displayAspectRatio": "16:9",
            "resolution": "200x200",
            "aspectRatio": "4:3",
            "sizingPolicy": "Stretch",
            "paddingPolicy": "Pad"
        }));
        assert_eq!(par(&v, &mut cx), Some(Par { numerator: 1, denominator: 1 }));
        assert!(cx.diagnostics.is_empty());
    }

    #[test]
    fn falls_back_to_aspect_ratio_with_a_warning() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let v = video(serde_json::json!({
            "displayAspectRatio": "16:9",
            "resolution": "200x200",
            "aspectRatio": "4:3",
            "paddingPolicy": "Pad"
        }));
        assert_eq!(par(&v, &mut cx), Some(Par { numerator: 4, denominator: 3 }));
        assert_eq!(cx.diagnostics.warnings().len(), 1);
    }

    #[test]
    fn display_aspect_ratio_needs_stretch_or_pad() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let v = video(serde_json::json!({
            "maxWidth": "1280",
            "maxHeight": "720",
            "displayAspectRatio": "16:9",
            "sizingPolicy": "Fit",
            "paddingPolicy": "NoPad"
        }));
        assert_eq!(par_from_display_aspect_ratio(&v, &mut cx), None);
        assert_eq!(cx.diagnostics.warnings().len(), 1);
    }

    #[test]
    fn unusable_ratios_are_ignored() {
        let config = ConvertConfig::default();
        for ratio in ["auto", "0:0", "-4:-3"] {
            let mut cx = Context::new(&config);
            let v = video(serde_json::json!({ "aspectRatio": ratio, "resolution": "1280x720" }));
            assert_eq!(par_from_aspect_ratio(&v, &mut cx), None, "{ratio}");
        }
        for resolution in ["", "0x0", "-200x-200"] {
            let mut cx = Context::new(&config);
            let v = video(serde_json::json!({ "aspectRatio": "16:9", "maxWidth": "1280", "maxHeight": "720", "resolution": resolution }));
            assert_eq!(par_from_aspect_ratio(&v, &mut cx), None, "{resolution}");
            assert_eq!(cx.diagnostics.warnings().len(), 1);
        }
    }

    #[test]
    fn aspect_ratio_applies_to_the_resolution_string() {
        let config = ConvertConfig::default();
        let mut cx = Context::new(&config);
        let v = video(serde_json::json!({ "aspectRatio": "16:9", "resolution": "1280x720" }));
        assert_eq!(par_from_aspect_ratio(&v, &mut cx), Some(Par { numerator: 1, denominator: 1 }));
    }
}
