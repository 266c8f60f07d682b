//! The named catalog of Material color roles.
//!
//! ## Usage
//!
//! Build one [`MaterialDynamicColors`] at startup and share it. Roles are
//! resolved against any number of schemes; each role memoizes its last few
//! results per scheme.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{
    color_spec::ColorSpec2025, dynamic_color::DynamicColor, dynamic_scheme::DynamicScheme,
    error::DynamicColorError,
};

/// Every catalog role in canonical order. Expands to the constructor, the
/// typed accessors and the slot indices backing them.
macro_rules! catalog {
    ($($(#[$meta:meta])* $role:ident),* $(,)?) => {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy)]
        enum Slot {
            $($role),*
        }

        impl MaterialDynamicColors {
            /// Builds every role of the catalog.
            pub fn new() -> Self {
                let spec = ColorSpec2025;
                Self::from_roles(vec![$(spec.$role()),*])
            }

            $(
                $(#[$meta])*
                pub fn $role(&self) -> &DynamicColor {
                    self.slot(Slot::$role)
                }
            )*
        }
    };
}

/// The registry of named color roles.
///
/// Roles carry both the 2021 and the 2025 definitions; which one applies is
/// decided by each scheme's spec version.
#[derive(Debug, Clone)]
pub struct MaterialDynamicColors {
    roles: Vec<DynamicColor>,
    by_name: FxHashMap<String, usize>,
}

impl Default for MaterialDynamicColors {
    fn default() -> Self {
        Self::new()
    }
}

catalog! {
    primary_palette_key_color,
    secondary_palette_key_color,
    tertiary_palette_key_color,
    neutral_palette_key_color,
    neutral_variant_palette_key_color,
    error_palette_key_color,
    background,
    on_background,
    surface,
    surface_dim,
    surface_bright,
    surface_container_lowest,
    surface_container_low,
    surface_container,
    surface_container_high,
    surface_container_highest,
    on_surface,
    surface_variant,
    on_surface_variant,
    outline,
    outline_variant,
    inverse_surface,
    inverse_on_surface,
    shadow,
    scrim,
    surface_tint,
    primary,
    /// Only meaningful for schemes on spec version 2025.
    primary_dim,
    on_primary,
    primary_container,
    on_primary_container,
    primary_fixed,
    primary_fixed_dim,
    on_primary_fixed,
    on_primary_fixed_variant,
    inverse_primary,
    secondary,
    /// Only meaningful for schemes on spec version 2025.
    secondary_dim,
    on_secondary,
    secondary_container,
    on_secondary_container,
    secondary_fixed,
    secondary_fixed_dim,
    on_secondary_fixed,
    on_secondary_fixed_variant,
    tertiary,
    /// Only meaningful for schemes on spec version 2025.
    tertiary_dim,
    on_tertiary,
    tertiary_container,
    on_tertiary_container,
    tertiary_fixed,
    tertiary_fixed_dim,
    on_tertiary_fixed,
    on_tertiary_fixed_variant,
    error,
    /// Only meaningful for schemes on spec version 2025.
    error_dim,
    on_error,
    error_container,
    on_error_container,
    control_activated,
    control_normal,
    control_highlight,
    text_primary_inverse,
    text_secondary_and_tertiary_inverse,
    text_primary_inverse_disable_only,
    text_secondary_and_tertiary_inverse_disabled,
    text_hint_inverse,
}

impl MaterialDynamicColors {
    fn from_roles(roles: Vec<DynamicColor>) -> Self {
        let by_name = roles
            .iter()
            .enumerate()
            .map(|(index, role)| (role.name().to_owned(), index))
            .collect();
        debug!(roles = roles.len(), "built dynamic color catalog");
        Self { roles, by_name }
    }

    fn slot(&self, slot: Slot) -> &DynamicColor {
        &self.roles[slot as usize]
    }

    /// The role named `name`.
    pub fn get(&self, name: &str) -> Result<&DynamicColor, DynamicColorError> {
        self.by_name
            .get(name)
            .map(|&index| &self.roles[index])
            .ok_or_else(|| DynamicColorError::UnknownRole(name.to_owned()))
    }

    /// Resolves the role named `name` to a packed ARGB color.
    pub fn argb(&self, name: &str, scheme: &DynamicScheme) -> Result<u32, DynamicColorError> {
        Ok(self.get(name)?.get_argb(scheme))
    }

    /// Resolves the role named `name` to its tone.
    pub fn tone(&self, name: &str, scheme: &DynamicScheme) -> Result<f64, DynamicColorError> {
        Ok(self.get(name)?.get_tone(scheme))
    }

    /// All roles, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &DynamicColor> + '_ {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The surface foreground roles are measured against.
    pub fn highest_surface(&self, scheme: &DynamicScheme) -> &DynamicColor {
        if scheme.is_dark() {
            self.surface_bright()
        } else {
            self.surface_dim()
        }
    }

    /// Verifies that no role is its own transitive background in `scheme`.
    ///
    /// Backgrounds are followed by name through both the first and second
    /// background of every role.
    pub fn check_background_graph(&self, scheme: &DynamicScheme) -> Result<(), DynamicColorError> {
        let mut finished = FxHashSet::default();
        let mut path = Vec::new();
        for role in &self.roles {
            visit_backgrounds(role, scheme, &mut path, &mut finished)?;
        }
        debug!(
            roles = finished.len(),
            scheme = ?scheme.id(),
            "background graph is acyclic"
        );
        Ok(())
    }
}

fn visit_backgrounds(
    role: &DynamicColor,
    scheme: &DynamicScheme,
    path: &mut Vec<String>,
    finished: &mut FxHashSet<String>,
) -> Result<(), DynamicColorError> {
    if finished.contains(role.name()) {
        return Ok(());
    }
    if path.iter().any(|name| name == role.name()) {
        return Err(DynamicColorError::CyclicBackground(role.name().to_owned()));
    }
    path.push(role.name().to_owned());
    for background in [role.background(scheme), role.second_background(scheme)]
        .into_iter()
        .flatten()
    {
        visit_backgrounds(&background, scheme, path, finished)?;
    }
    path.pop();
    finished.insert(role.name().to_owned());
    Ok(())
}

impl<'a> IntoIterator for &'a MaterialDynamicColors {
    type Item = &'a DynamicColor;
    type IntoIter = std::slice::Iter<'a, DynamicColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

#[cfg(test)]
mod tests {
    use material_color_utilities::contrast;

    use super::*;
    use crate::{
        dynamic_scheme::DynamicSchemeBuilder,
        tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity},
        variant::{Platform, SpecVersion, Variant},
    };

    fn scheme(
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
        platform: Platform,
        spec_version: SpecVersion,
    ) -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_argb(0xFF42_85F4)
            .variant(variant)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .platform(platform)
            .spec_version(spec_version)
            .build()
            .expect("seed is set")
    }

    fn every_scheme() -> Vec<DynamicScheme> {
        let mut schemes = Vec::new();
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for contrast_level in [-1.0, 0.0, 1.0] {
                    schemes.push(scheme(
                        variant,
                        is_dark,
                        contrast_level,
                        Platform::Phone,
                        SpecVersion::Spec2021,
                    ));
                    for platform in [Platform::Phone, Platform::Watch] {
                        schemes.push(scheme(
                            variant,
                            is_dark,
                            contrast_level,
                            platform,
                            SpecVersion::Spec2025,
                        ));
                    }
                }
            }
        }
        schemes
    }

    /// Every variant in both modes at four contrast levels, under both rule
    /// sets, on phones.
    fn phone_sweep() -> Vec<DynamicScheme> {
        let mut schemes = Vec::new();
        for spec_version in [SpecVersion::Spec2021, SpecVersion::Spec2025] {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    for contrast_level in [-1.0, 0.0, 0.5, 1.0] {
                        schemes.push(scheme(
                            variant,
                            is_dark,
                            contrast_level,
                            Platform::Phone,
                            spec_version,
                        ));
                    }
                }
            }
        }
        schemes
    }

    /// The signed gap `role_a - role_b` a 2025 pair asks for.
    fn pair_offset(pair: &ToneDeltaPair, s: &DynamicScheme) -> f64 {
        match pair.polarity() {
            TonePolarity::Darker => -pair.delta(),
            TonePolarity::RelativeLighter if s.is_dark() => -pair.delta(),
            TonePolarity::RelativeDarker if !s.is_dark() => -pair.delta(),
            _ => pair.delta(),
        }
    }

    /// Tones the awkward-band rule moves background roles to.
    fn is_awkward_band_edge(s: &DynamicScheme, tone: f64) -> bool {
        match s.spec_version() {
            SpecVersion::Spec2021 => tone == 49.0 || tone == 60.0,
            SpecVersion::Spec2025 => tone == 49.0 || tone == 65.0,
        }
    }

    /// Whether a step after positioning moved a 2025 pair member off its
    /// delta. The contrast floor wins over the pair, always so below the
    /// default contrast level. Background roles leave the awkward band. A
    /// target outside `[0, 100]` cannot be reached at all.
    fn pair_tone_was_overridden(
        role: &DynamicColor,
        s: &DynamicScheme,
        tone: f64,
        target: f64,
    ) -> bool {
        if !(0.0..=100.0).contains(&target) {
            return true;
        }
        if role.is_background() && is_awkward_band_edge(s, tone) {
            return true;
        }
        match (role.background(s), role.contrast_curve(s)) {
            (Some(background), Some(curve)) => {
                let floor = DynamicColor::foreground_tone(
                    background.get_tone(s),
                    curve.get(s.contrast_level()),
                );
                tone == floor
            }
            _ => false,
        }
    }

    #[test]
    fn test_every_pair_keeps_its_delta() {
        let colors = MaterialDynamicColors::new();
        for s in phone_sweep() {
            for role in &colors {
                let Some(pair) = role.tone_delta_pair(&s) else {
                    continue;
                };
                let a = pair.role_a().get_tone(&s);
                let b = pair.role_b().get_tone(&s);
                if s.spec_version() == SpecVersion::Spec2021 {
                    assert!(
                        (a - b).abs() >= pair.delta() - 1e-9,
                        "{}: {} / {} only {} apart in {s}",
                        role.name(),
                        pair.role_a().name(),
                        pair.role_b().name(),
                        (a - b).abs()
                    );
                    continue;
                }

                let offset = pair_offset(&pair, &s);
                let kept = match pair.constraint() {
                    DeltaConstraint::Exact => (a - b - offset).abs() < 1e-9,
                    DeltaConstraint::Farther => (a - b) * offset.signum() >= pair.delta() - 1e-9,
                    DeltaConstraint::Nearer => (a - b) * offset.signum() <= pair.delta() + 1e-9,
                };
                if kept {
                    continue;
                }
                let positions_role_a = role.name() == pair.role_a().name();
                let (tone, target) = if positions_role_a {
                    (a, b + offset)
                } else {
                    (b, a - offset)
                };
                assert!(
                    pair_tone_was_overridden(role, &s, tone, target),
                    "{} at {tone} misses {target} with nothing overriding it in {s}",
                    role.name()
                );
            }
        }
    }

    #[test]
    fn test_lowered_contrast_puts_2025_pairs_on_the_floor() {
        let colors = MaterialDynamicColors::new();
        for s in phone_sweep()
            .into_iter()
            .filter(|s| s.spec_version() == SpecVersion::Spec2025 && s.contrast_level() < 0.0)
        {
            for role in &colors {
                let (Some(_), Some(background), Some(curve)) = (
                    role.tone_delta_pair(&s),
                    role.background(&s),
                    role.contrast_curve(&s),
                ) else {
                    continue;
                };
                let tone = role.get_tone(&s);
                let floor = DynamicColor::foreground_tone(
                    background.get_tone(&s),
                    curve.get(s.contrast_level()),
                );
                assert!(
                    tone == floor || is_awkward_band_edge(&s, tone),
                    "{} at {tone}, floor {floor} in {s}",
                    role.name()
                );
            }
        }
    }

    #[test]
    fn test_2025_solved_backgrounds_avoid_awkward_band() {
        let colors = MaterialDynamicColors::new();
        for s in phone_sweep()
            .into_iter()
            .filter(|s| s.spec_version() == SpecVersion::Spec2025)
        {
            // Fixed-dim roles sit a fixed step under their fixed role, and
            // roles solved against nothing keep their nominal tone.
            for role in colors.iter().filter(|role| {
                role.is_background()
                    && !role.name().ends_with("_fixed_dim")
                    && (role.tone_delta_pair(&s).is_some()
                        || (role.background(&s).is_some() && role.contrast_curve(&s).is_some()))
            }) {
                let tone = role.get_tone(&s);
                assert!(
                    tone <= 49.0 || tone >= 65.0,
                    "{} resolved to {tone} in {s}",
                    role.name()
                );
            }
        }
    }

    #[test]
    fn test_2025_containers_are_unsolved_up_to_default_contrast() {
        // This is why error_container may land inside the awkward band
        // (tones near 59 and 62) at or below the default level.
        let colors = MaterialDynamicColors::new();
        for contrast_level in [-1.0, 0.0] {
            for is_dark in [false, true] {
                let s = scheme(
                    Variant::TonalSpot,
                    is_dark,
                    contrast_level,
                    Platform::Phone,
                    SpecVersion::Spec2025,
                );
                for role in [
                    colors.primary_container(),
                    colors.secondary_container(),
                    colors.tertiary_container(),
                    colors.error_container(),
                ] {
                    assert!(role.contrast_curve(&s).is_none(), "{}", role.name());
                    assert!(role.tone_delta_pair(&s).is_none(), "{}", role.name());
                }
            }
        }
    }

    #[test]
    fn test_foregrounds_reach_their_contrast_floor() {
        let colors = MaterialDynamicColors::new();
        for s in phone_sweep()
            .into_iter()
            .filter(|s| s.contrast_level() >= 0.0)
        {
            for role in &colors {
                let (Some(background), Some(curve)) = (role.background(&s), role.contrast_curve(&s))
                else {
                    continue;
                };
                // Roles on two backgrounds trade one against the other.
                if role.second_background(&s).is_some() {
                    continue;
                }
                let tone = role.get_tone(&s);
                if role.is_background() && is_awkward_band_edge(&s, tone) {
                    continue;
                }
                let bg_tone = background.get_tone(&s);
                let desired = curve.get(s.contrast_level());
                // Some backgrounds admit no foreground at the curve's ratio:
                // 2021 on_primary and on_secondary top out near 6.46 against
                // 7, 2025 on_primary_fixed near 6.85 and on_tertiary_fixed
                // near 6.62. Those roles take the best reachable contrast.
                let reachable = contrast::ratio_of_tones(bg_tone, 0.0)
                    .max(contrast::ratio_of_tones(bg_tone, 100.0));
                let ratio = contrast::ratio_of_tones(bg_tone, tone);
                assert!(
                    ratio >= desired.min(reachable) - 0.1,
                    "{} reaches {ratio} of {desired} (at most {reachable}) in {s}",
                    role.name()
                );
            }
        }
    }

    #[test]
    fn test_raising_contrast_never_lowers_it() {
        let colors = MaterialDynamicColors::new();
        let levels = [-1.0, 0.0, 0.5, 1.0];
        for spec_version in [SpecVersion::Spec2021, SpecVersion::Spec2025] {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    let schemes = levels.map(|contrast_level| {
                        scheme(variant, is_dark, contrast_level, Platform::Phone, spec_version)
                    });
                    for role in &colors {
                        for window in schemes.windows(2) {
                            let (lower, higher) = (&window[0], &window[1]);
                            let (Some(low_curve), Some(high_curve)) =
                                (role.contrast_curve(lower), role.contrast_curve(higher))
                            else {
                                continue;
                            };
                            assert!(
                                high_curve.get(higher.contrast_level())
                                    >= low_curve.get(lower.contrast_level()) - 1e-9,
                                "{} asks for less contrast in {higher}",
                                role.name()
                            );

                            // Achieved contrast is comparable only for plain
                            // foregrounds whose background and nominal tone
                            // stay put between the two levels.
                            if role.is_background()
                                || role.tone_delta_pair(lower).is_some()
                                || role.tone_delta_pair(higher).is_some()
                                || role.second_background(lower).is_some()
                            {
                                continue;
                            }
                            let (Some(low_bg), Some(high_bg)) =
                                (role.background(lower), role.background(higher))
                            else {
                                continue;
                            };
                            let low_bg_tone = low_bg.get_tone(lower);
                            let high_bg_tone = high_bg.get_tone(higher);
                            if (low_bg_tone - high_bg_tone).abs() > 1e-9
                                || (role.nominal_tone(lower) - role.nominal_tone(higher)).abs()
                                    > 1e-9
                            {
                                continue;
                            }
                            let low_ratio =
                                contrast::ratio_of_tones(low_bg_tone, role.get_tone(lower));
                            let high_ratio =
                                contrast::ratio_of_tones(high_bg_tone, role.get_tone(higher));
                            assert!(
                                high_ratio >= low_ratio - 0.1,
                                "{} drops from {low_ratio} to {high_ratio} in {higher}",
                                role.name()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_catalog_order_and_names() {
        let colors = MaterialDynamicColors::new();
        assert_eq!(colors.len(), 67);
        let names: Vec<_> = colors.iter().map(DynamicColor::name).collect();
        assert_eq!(names.first(), Some(&"primary_palette_key_color"));
        assert_eq!(names.last(), Some(&"text_hint_inverse"));
        let unique: FxHashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(colors.primary_container().name(), "primary_container");
    }

    #[test]
    fn test_lookup_by_name() {
        let colors = MaterialDynamicColors::new();
        let s = scheme(
            Variant::TonalSpot,
            false,
            0.0,
            Platform::Phone,
            SpecVersion::Spec2021,
        );
        assert_eq!(
            colors.argb("primary", &s).expect("primary is cataloged"),
            colors.primary().get_argb(&s)
        );
        assert_eq!(
            colors.argb("no_such_role", &s),
            Err(DynamicColorError::UnknownRole("no_such_role".to_string()))
        );
    }

    #[test]
    fn test_every_role_resolves_in_range() {
        let colors = MaterialDynamicColors::new();
        for s in every_scheme() {
            for role in &colors {
                let tone = role.get_tone(&s);
                assert!(
                    (0.0..=100.0).contains(&tone),
                    "{} resolved to {tone} in {s}",
                    role.name()
                );
                let _ = role.get_argb(&s);
            }
        }
    }

    #[test]
    fn test_background_graph_is_acyclic() {
        let colors = MaterialDynamicColors::new();
        for s in every_scheme() {
            assert_eq!(colors.check_background_graph(&s), Ok(()));
        }
    }

    #[test]
    fn test_2021_backgrounds_avoid_awkward_zone() {
        let colors = MaterialDynamicColors::new();
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for contrast_level in [-1.0, 0.0, 0.5, 1.0] {
                    let s = scheme(
                        variant,
                        is_dark,
                        contrast_level,
                        Platform::Phone,
                        SpecVersion::Spec2021,
                    );
                    for role in colors.iter().filter(|role| {
                        role.is_background() && role.background(&s).is_some()
                    }) {
                        let tone = role.get_tone(&s);
                        assert!(
                            !(50.0..60.0).contains(&tone),
                            "{} resolved to {tone} in {s}",
                            role.name()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_contrast_rises_with_level() {
        let colors = MaterialDynamicColors::new();
        for name in ["on_surface_variant", "outline", "inverse_on_surface"] {
            let role = colors.get(name).expect("cataloged role");
            let mut previous = 0.0;
            for contrast_level in [-1.0, 0.0, 0.5, 1.0] {
                let s = scheme(
                    Variant::TonalSpot,
                    false,
                    contrast_level,
                    Platform::Phone,
                    SpecVersion::Spec2021,
                );
                let background = role.background(&s).expect("role has a background");
                let ratio =
                    contrast::ratio_of_tones(background.get_tone(&s), role.get_tone(&s));
                assert!(ratio >= previous - 0.05, "{name} at {contrast_level}: {ratio}");
                previous = ratio;
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let colors = MaterialDynamicColors::new();
        let first = scheme(
            Variant::Expressive,
            true,
            0.5,
            Platform::Phone,
            SpecVersion::Spec2025,
        );
        let second = scheme(
            Variant::Expressive,
            true,
            0.5,
            Platform::Phone,
            SpecVersion::Spec2025,
        );
        for role in &colors {
            let once = role.get_argb(&first);
            assert_eq!(once, role.get_argb(&first), "{}", role.name());
            assert_eq!(once, role.get_argb(&second), "{}", role.name());
        }
    }

    #[test]
    fn test_cache_does_not_leak_between_modes() {
        let colors = MaterialDynamicColors::new();
        let light = scheme(
            Variant::TonalSpot,
            false,
            0.0,
            Platform::Phone,
            SpecVersion::Spec2021,
        );
        let dark = light.with_dark(true);
        let light_surface = colors.surface().get_argb(&light);
        let dark_surface = colors.surface().get_argb(&dark);
        assert_ne!(light_surface, dark_surface);
        assert_eq!(colors.surface().get_argb(&light), light_surface);
    }

    #[test]
    fn test_highest_surface_follows_mode() {
        let colors = MaterialDynamicColors::new();
        let light = scheme(
            Variant::TonalSpot,
            false,
            0.0,
            Platform::Phone,
            SpecVersion::Spec2021,
        );
        assert_eq!(colors.highest_surface(&light).name(), "surface_dim");
        assert_eq!(
            colors.highest_surface(&light.with_dark(true)).name(),
            "surface_bright"
        );
    }
}
