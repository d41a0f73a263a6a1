//! Sizing and padding policies to scaling behaviour.

use super::Context;
use crate::path::Path;
use crate::target::job::ScalingBehavior;

const SCALING_DOCS: &str = "https://docs.aws.amazon.com/mediaconvert/latest/ug/video-scaling.html";

/// Translates a sizing policy and padding policy pair. `None` leaves the
/// target default, which is fit with padding.
pub fn scaling_behavior(
    sizing_policy: Option<&str>,
    padding_policy: Option<&str>,
    path: &Path,
    cx: &mut Context<'_>,
) -> Option<ScalingBehavior> {
    let padded = padding_policy == Some("Pad");
    let sizing_path = path.key("sizingPolicy");

    match sizing_policy? {
        "Fit" if padded => None,
        "Fit" => Some(ScalingBehavior::Fit),
        "Fill" => Some(ScalingBehavior::Fill),
        "Stretch" => Some(ScalingBehavior::StretchToOutput),
        "Keep" => {
            cx.warn(
                &sizing_path,
                format!(
                    "MediaConvert does not have equivalent \"Keep\" sizing policy. The default \
                     sizing policy will be used, which is fit with padding. For more info see {SCALING_DOCS}"
                ),
            );
            None
        }
        "ShrinkToFit" => {
            if padded {
                cx.warn(
                    &sizing_path,
                    format!(
                        "MediaConvert does not add padding when you choose Fit without upscaling. \
                         For more info see {SCALING_DOCS}"
                    ),
                );
            }
            Some(ScalingBehavior::FitNoUpscale)
        }
        "ShrinkToFill" => {
            cx.warn(
                &sizing_path,
                format!(
                    "MediaConvert does not have equivalent \"ShrinkToFill\" sizing policy. The \
                     sizing policy \"Fill\" is used. For more info see {SCALING_DOCS}"
                ),
            );
            Some(ScalingBehavior::Fill)
        }
        _ => None,
    }
}
