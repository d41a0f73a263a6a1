//! Source time values: input clippings and caption time offsets.

use super::Context;
use crate::source::TimeSpan;
use crate::target::job::InputClipping;
use once_cell::sync::Lazy;
use regex::Regex;

const TIME_SPAN_DOCS: &str = "https://docs.aws.amazon.com/elastictranscoder/latest/developerguide/job-settings.html#job-settings-input-details-part-2";

/// `sssss[.SSS]` or `[HH:][mm:]ss[.SSS]`
static SOURCE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(^\d{1,5}(\.\d{0,3})?$)|(^([0-1]?[0-9]:|2[0-3]:)?([0-5]?[0-9]:)?[0-5]?[0-9](\.\d{0,3})?$)",
    )
    .expect("valid source time regex")
});

const FRACTION_DROPPED: &str = "MediaConvert supports SMPTE timecode that contains frame number, \
    but not fractional seconds, which has been omitted.";

/// Translates an input time span into at most one input clipping with
/// `HH:MM:SS:00` timecodes. Ill-formatted times drop the clipping.
pub fn translate_time_span(span: &TimeSpan, cx: &mut Context<'_>) -> Vec<InputClipping> {
    let start = span.start_time.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let duration = span.duration.as_deref().map(str::trim).filter(|s| !s.is_empty());
    if start.is_none() && duration.is_none() {
        return Vec::new();
    }

    for (field, label, value) in [("startTime", "StartTime", start), ("duration", "Duration", duration)] {
        if value.is_some_and(|v| !SOURCE_TIME.is_match(v)) {
            cx.warn(
                &span.path.key(field),
                format!("{label} is ill-formatted. For more info see {TIME_SPAN_DOCS}"),
            );
            return Vec::new();
        }
    }

    for (field, value) in [("startTime", start), ("duration", duration)] {
        if value.is_some_and(|v| v.contains('.')) {
            cx.warn(&span.path.key(field), FRACTION_DROPPED);
        }
    }

    let start_seconds = start.and_then(to_seconds);
    let duration_seconds = duration.and_then(to_seconds);

    vec![InputClipping {
        start_timecode: start_seconds.map(to_timecode),
        end_timecode: duration_seconds
            .and_then(|d| start_seconds.unwrap_or(0).checked_add(d))
            .map(to_timecode),
    }]
}

/// Whole seconds of `[+-][HH:][mm:]ss[.fff]`; the fraction is truncated.
/// Values outside the `i64` range yield `None`.
pub fn to_seconds(value: &str) -> Option<i64> {
    let (negative, unsigned) = split_sign(value);
    let whole = unsigned.split('.').next().unwrap_or_default();

    let parts: Vec<&str> = whole.split(':').collect();
    if parts.len() > 3 {
        return None;
    }
    let mut seconds = 0i64;
    for part in parts {
        seconds = seconds.checked_mul(60)?.checked_add(part.parse::<i64>().ok()?)?;
    }
    Some(if negative { -seconds } else { seconds })
}

/// Milliseconds of `[+-][HH:][mm:]ss[.fff]`.
pub fn to_millis(value: &str) -> Option<i64> {
    let seconds = to_seconds(value)?;
    let (negative, unsigned) = split_sign(value);
    let fraction = match unsigned.split_once('.') {
        Some((_, digits)) if !digits.is_empty() => {
            let digits: String = digits.chars().chain("000".chars()).take(3).collect();
            digits.parse::<i64>().ok()?
        }
        _ => 0,
    };
    seconds
        .checked_mul(1000)?
        .checked_add(if negative { -fraction } else { fraction })
}

/// Formats seconds as an `HH:MM:SS:00` timecode.
pub fn to_timecode(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}:00")
}

fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    }
}
