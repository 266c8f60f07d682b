//! Rule sets: how palettes are derived from a seed, and how a role's tone is
//! solved against its backgrounds and pairs.
//!
//! Two generations exist side by side. [`ColorSpec2021`] is the original
//! Material 3 rule set; [`ColorSpec2025`] builds on it, overriding most roles
//! for schemes whose spec version is 2025 and falling back to the 2021 rules
//! for the variants it does not restyle.

mod spec_2021;
mod spec_2025;

use material_color_utilities::{contrast, hct::Hct, palettes::TonalPalette};

pub use spec_2021::ColorSpec2021;
pub use spec_2025::ColorSpec2025;

use crate::{
    dynamic_color::DynamicColor,
    dynamic_scheme::DynamicScheme,
    variant::{Platform, SpecVersion, Variant},
};

/// A rule set generation.
pub trait ColorSpec: Send + Sync {
    /// The resolved color of `color` in `scheme`.
    fn get_hct(&self, scheme: &DynamicScheme, color: &DynamicColor) -> Hct;

    /// The resolved tone of `color` in `scheme`, in `[0, 100]`.
    fn get_tone(&self, scheme: &DynamicScheme, color: &DynamicColor) -> f64;

    fn primary_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette;

    fn secondary_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette;

    fn tertiary_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette;

    fn neutral_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette;

    fn neutral_variant_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette;

    /// `None` leaves the scheme on its default error palette.
    fn error_palette(
        &self,
        variant: Variant,
        source_color_hct: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> Option<TonalPalette>;
}

/// Adjusts `answer` so it reads on two backgrounds at once.
///
/// When no tone clears both, light foregrounds win if either background
/// prefers one; otherwise the only passing side, then black.
pub(crate) fn dual_background_tone(
    answer: f64,
    bg_tone_1: f64,
    bg_tone_2: f64,
    desired_ratio: f64,
) -> f64 {
    let upper = bg_tone_1.max(bg_tone_2);
    let lower = bg_tone_1.min(bg_tone_2);
    if contrast::ratio_of_tones(upper, answer) >= desired_ratio
        && contrast::ratio_of_tones(lower, answer) >= desired_ratio
    {
        return answer;
    }

    let light_option = lighter_tone(upper, desired_ratio);
    let dark_option = darker_tone(lower, desired_ratio);
    let prefers_light = DynamicColor::tone_prefers_light_foreground(bg_tone_1)
        || DynamicColor::tone_prefers_light_foreground(bg_tone_2);
    if prefers_light {
        return light_option.unwrap_or(100.0);
    }
    match (light_option, dark_option) {
        (Some(light), None) => light,
        (None, Some(dark)) => dark,
        (_, dark) => dark.unwrap_or(0.0),
    }
}

/// The tone at or above `tone` reaching `ratio` against it, if any.
pub(crate) fn lighter_tone(tone: f64, ratio: f64) -> Option<f64> {
    let answer = contrast::lighter(tone, ratio);
    (answer >= 0.0).then_some(answer)
}

/// The tone at or below `tone` reaching `ratio` against it, if any.
pub(crate) fn darker_tone(tone: f64, ratio: f64) -> Option<f64> {
    let answer = contrast::darker(tone, ratio);
    (answer >= 0.0).then_some(answer)
}

static SPEC_2021: ColorSpec2021 = ColorSpec2021;
static SPEC_2025: ColorSpec2025 = ColorSpec2025;

/// The rule set for `version`.
pub fn color_spec(version: SpecVersion) -> &'static dyn ColorSpec {
    match version {
        SpecVersion::Spec2021 => &SPEC_2021,
        SpecVersion::Spec2025 => &SPEC_2025,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_ratio_has_no_tone() {
        assert_eq!(lighter_tone(90.0, 7.0), None);
        assert_eq!(darker_tone(10.0, 7.0), None);
        let lighter = lighter_tone(20.0, 4.5).expect("reachable from tone 20");
        assert!(contrast::ratio_of_tones(lighter, 20.0) >= 4.45);
    }

    #[test]
    fn test_dual_background_moves_past_both() {
        let tone = dual_background_tone(50.0, 10.0, 20.0, 4.5);
        assert!(tone > 50.0);
        assert!(contrast::ratio_of_tones(tone, 10.0) >= 4.45);
        assert!(contrast::ratio_of_tones(tone, 20.0) >= 4.45);
        assert_eq!(dual_background_tone(95.0, 10.0, 20.0, 4.5), 95.0);
    }
}
