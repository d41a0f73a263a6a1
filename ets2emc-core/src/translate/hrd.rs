//! Maximum HRD buffer sizes per codec, profile and level.
//!
//! H.264 caps are the MaxCPB of the level (in units of 1000 bits) multiplied
//! by the NAL HRD factor of the profile. MPEG-2 caps are the VBV buffer of the
//! highest level of each profile; VP8 and VP9 share one flat cap.

use crate::target::codec::Mpeg2Profile;

/// MaxCPB per H.264 level, highest level last.
const H264_MAX_CPB: &[(&str, u64)] = &[
    ("1", 175),
    ("1b", 350),
    ("1.1", 500),
    ("1.2", 1_000),
    ("1.3", 2_000),
    ("2", 2_000),
    ("2.1", 4_000),
    ("2.2", 4_000),
    ("3", 10_000),
    ("3.1", 14_000),
    ("3.2", 20_000),
    ("4", 25_000),
    ("4.1", 62_500),
    ("4.2", 62_500),
    ("5", 135_000),
    ("5.1", 240_000),
    ("5.2", 240_000),
];

/// NAL HRD bit-rate factor per H.264 profile.
const H264_PROFILE_FACTOR: &[(&str, u64)] = &[
    ("BASELINE", 1_200),
    ("MAIN", 1_200),
    ("HIGH", 1_500),
    ("HIGH10", 3_600),
    ("HIGH422", 4_800),
];

pub const MPEG2_MAIN_MAX: u64 = 9_781_248;
pub const MPEG2_422_MAX: u64 = 47_185_920;
pub const VPX_MAX: u64 = 47_185_920;

/// H.264 cap in bits. `profile` is the target spelling (e.g. `HIGH`) and
/// `level` the source spelling (e.g. `3.1`). An absent or unknown level uses
/// the highest level; an unknown profile has no cap.
pub fn h264_max(profile: Option<&str>, level: Option<&str>) -> Option<u64> {
    let factor = H264_PROFILE_FACTOR
        .iter()
        .find(|(name, _)| Some(*name) == profile)
        .map(|(_, factor)| *factor)?;
    let max_cpb = level
        .and_then(|level| H264_MAX_CPB.iter().find(|(name, _)| *name == level))
        .or_else(|| H264_MAX_CPB.last())
        .map(|(_, cpb)| *cpb)?;
    Some(max_cpb * factor)
}

/// MPEG-2 cap in bits; main profile unless the chroma subsampling says 4:2:2.
pub fn mpeg2_max(profile: Option<Mpeg2Profile>) -> u64 {
    match profile {
        Some(Mpeg2Profile::Profile422) => MPEG2_422_MAX,
        _ => MPEG2_MAIN_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_level_1_is_210000_bits() {
        assert_eq!(h264_max(Some("BASELINE"), Some("1")), Some(210_000));
    }

    #[test]
    fn profile_factors_scale_the_level_cap() {
        assert_eq!(h264_max(Some("MAIN"), Some("3.1")), Some(16_800_000));
        assert_eq!(h264_max(Some("HIGH"), Some("4.1")), Some(93_750_000));
        assert_eq!(h264_max(Some("HIGH10"), Some("3")), Some(36_000_000));
        assert_eq!(h264_max(Some("HIGH422"), Some("2")), Some(9_600_000));
    }

    #[test]
    fn absent_level_uses_the_highest_level() {
        assert_eq!(h264_max(Some("HIGH"), None), Some(360_000_000));
        assert_eq!(h264_max(Some("MAIN"), Some("9.9")), Some(288_000_000));
    }

    #[test]
    fn unknown_profile_has_no_cap() {
        assert_eq!(h264_max(Some("EXTENDED"), Some("3")), None);
        assert_eq!(h264_max(None, Some("3")), None);
    }

    #[test]
    fn mpeg2_cap_depends_on_chroma_profile() {
        assert_eq!(mpeg2_max(Some(Mpeg2Profile::Main)), MPEG2_MAIN_MAX);
        assert_eq!(mpeg2_max(Some(Mpeg2Profile::Profile422)), MPEG2_422_MAX);
        assert_eq!(mpeg2_max(None), MPEG2_MAIN_MAX);
    }
}
