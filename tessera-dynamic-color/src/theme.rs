//! A resolved color scheme snapshot for UI themes.
//!
//! ## Usage
//!
//! Resolve a [`DynamicScheme`] once into plain ARGB values that widgets can
//! copy around.
#![deny(missing_docs)]

use crate::{
    dynamic_color::DynamicColor,
    dynamic_scheme::{DynamicScheme, DynamicSchemeBuilder},
    error::DynamicColorError,
    material_dynamic_colors::MaterialDynamicColors,
    variant::{SpecVersion, Variant},
};

/// A Material Design color scheme, which can be light or dark, with every
/// role resolved to a packed `0xAARRGGBB` color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialColorScheme {
    /// Indicates if the scheme is dark mode (`true`) or light mode (`false`).
    pub is_dark: bool,
    /// The primary color of the scheme.
    pub primary: u32,
    /// Color used for content on top of `primary`.
    pub on_primary: u32,
    /// A container color for `primary`.
    pub primary_container: u32,
    /// Color used for content on top of `primary_container`.
    pub on_primary_container: u32,
    /// The secondary color of the scheme.
    pub secondary: u32,
    /// Color used for content on top of `secondary`.
    pub on_secondary: u32,
    /// A container color for `secondary`.
    pub secondary_container: u32,
    /// Color used for content on top of `secondary_container`.
    pub on_secondary_container: u32,
    /// The tertiary color of the scheme.
    pub tertiary: u32,
    /// Color used for content on top of `tertiary`.
    pub on_tertiary: u32,
    /// A container color for `tertiary`.
    pub tertiary_container: u32,
    /// Color used for content on top of `tertiary_container`.
    pub on_tertiary_container: u32,
    /// The error color of the scheme.
    pub error: u32,
    /// Color used for content on top of `error`.
    pub on_error: u32,
    /// A container color for `error`.
    pub error_container: u32,
    /// Color used for content on top of `error_container`.
    pub on_error_container: u32,
    /// The background color of the scheme.
    pub background: u32,
    /// Color used for content on top of `background`.
    pub on_background: u32,
    /// The surface color of the scheme.
    pub surface: u32,
    /// Color used for content on top of `surface`.
    pub on_surface: u32,
    /// A variant of the surface color.
    pub surface_variant: u32,
    /// Color used for content on top of `surface_variant`.
    pub on_surface_variant: u32,
    /// The outline color.
    pub outline: u32,
    /// A variant of the outline color.
    pub outline_variant: u32,
    /// The shadow color.
    pub shadow: u32,
    /// The scrim color.
    pub scrim: u32,
    /// Tint color used by tonal elevation overlays on surfaces.
    pub surface_tint: u32,
    /// The brightest surface; the one dark-mode content is measured against.
    pub surface_bright: u32,
    /// The dimmest surface; the one light-mode content is measured against.
    pub surface_dim: u32,
    /// An inverse of the surface color.
    pub inverse_surface: u32,
    /// Color used for content on top of `inverse_surface`.
    pub inverse_on_surface: u32,
    /// An inverse of the primary color.
    pub inverse_primary: u32,
    /// The default container surface, between `surface_container_low` and
    /// `surface_container_high`.
    pub surface_container: u32,
    /// A container surface with more emphasis than `surface_container`.
    pub surface_container_high: u32,
    /// The container surface with the most emphasis.
    pub surface_container_highest: u32,
    /// A container surface with less emphasis than `surface_container`.
    pub surface_container_low: u32,
    /// The container surface with the least emphasis.
    pub surface_container_lowest: u32,
    /// Fixed primary color role that keeps the same tone in light and dark
    /// themes.
    pub primary_fixed: u32,
    /// A darker `primary_fixed`, also the same in light and dark themes.
    pub primary_fixed_dim: u32,
    /// Content color used on `primary_fixed` and `primary_fixed_dim`.
    pub on_primary_fixed: u32,
    /// Lower-emphasis content color used on `primary_fixed` roles.
    pub on_primary_fixed_variant: u32,
    /// Fixed secondary color role that keeps the same tone in light and
    /// dark themes.
    pub secondary_fixed: u32,
    /// A darker `secondary_fixed`, also the same in light and dark themes.
    pub secondary_fixed_dim: u32,
    /// Content color used on `secondary_fixed` and `secondary_fixed_dim`.
    pub on_secondary_fixed: u32,
    /// Lower-emphasis content color used on `secondary_fixed` roles.
    pub on_secondary_fixed_variant: u32,
    /// Fixed tertiary color role that keeps the same tone in light and dark
    /// themes.
    pub tertiary_fixed: u32,
    /// A darker `tertiary_fixed`, also the same in light and dark themes.
    pub tertiary_fixed_dim: u32,
    /// Content color used on `tertiary_fixed` and `tertiary_fixed_dim`.
    pub on_tertiary_fixed: u32,
    /// Lower-emphasis content color used on `tertiary_fixed` roles.
    pub on_tertiary_fixed_variant: u32,
}

impl MaterialColorScheme {
    /// Generates a light tonal-spot scheme derived from the provided seed
    /// color.
    pub fn light_from_seed(seed: u32) -> Result<Self, DynamicColorError> {
        scheme_from_seed(seed, false)
    }

    /// Generates a dark tonal-spot scheme derived from the provided seed
    /// color.
    pub fn dark_from_seed(seed: u32) -> Result<Self, DynamicColorError> {
        scheme_from_seed(seed, true)
    }

    /// Resolves every theme role of `colors` against `scheme`.
    pub fn from_scheme(colors: &MaterialDynamicColors, scheme: &DynamicScheme) -> Self {
        let argb = |role: &DynamicColor| role.get_argb(scheme);
        MaterialColorScheme {
            is_dark: scheme.is_dark(),
            primary: argb(colors.primary()),
            on_primary: argb(colors.on_primary()),
            primary_container: argb(colors.primary_container()),
            on_primary_container: argb(colors.on_primary_container()),
            secondary: argb(colors.secondary()),
            on_secondary: argb(colors.on_secondary()),
            secondary_container: argb(colors.secondary_container()),
            on_secondary_container: argb(colors.on_secondary_container()),
            tertiary: argb(colors.tertiary()),
            on_tertiary: argb(colors.on_tertiary()),
            tertiary_container: argb(colors.tertiary_container()),
            on_tertiary_container: argb(colors.on_tertiary_container()),
            error: argb(colors.error()),
            on_error: argb(colors.on_error()),
            error_container: argb(colors.error_container()),
            on_error_container: argb(colors.on_error_container()),
            background: argb(colors.background()),
            on_background: argb(colors.on_background()),
            surface: argb(colors.surface()),
            on_surface: argb(colors.on_surface()),
            surface_variant: argb(colors.surface_variant()),
            on_surface_variant: argb(colors.on_surface_variant()),
            outline: argb(colors.outline()),
            outline_variant: argb(colors.outline_variant()),
            shadow: argb(colors.shadow()),
            scrim: argb(colors.scrim()),
            surface_tint: argb(colors.surface_tint()),
            inverse_surface: argb(colors.inverse_surface()),
            inverse_on_surface: argb(colors.inverse_on_surface()),
            inverse_primary: argb(colors.inverse_primary()),
            surface_bright: argb(colors.surface_bright()),
            surface_dim: argb(colors.surface_dim()),
            surface_container: argb(colors.surface_container()),
            surface_container_high: argb(colors.surface_container_high()),
            surface_container_highest: argb(colors.surface_container_highest()),
            surface_container_low: argb(colors.surface_container_low()),
            surface_container_lowest: argb(colors.surface_container_lowest()),
            primary_fixed: argb(colors.primary_fixed()),
            primary_fixed_dim: argb(colors.primary_fixed_dim()),
            on_primary_fixed: argb(colors.on_primary_fixed()),
            on_primary_fixed_variant: argb(colors.on_primary_fixed_variant()),
            secondary_fixed: argb(colors.secondary_fixed()),
            secondary_fixed_dim: argb(colors.secondary_fixed_dim()),
            on_secondary_fixed: argb(colors.on_secondary_fixed()),
            on_secondary_fixed_variant: argb(colors.on_secondary_fixed_variant()),
            tertiary_fixed: argb(colors.tertiary_fixed()),
            tertiary_fixed_dim: argb(colors.tertiary_fixed_dim()),
            on_tertiary_fixed: argb(colors.on_tertiary_fixed()),
            on_tertiary_fixed_variant: argb(colors.on_tertiary_fixed_variant()),
        }
    }

    /// Returns the matching content color for a background color in this
    /// scheme.
    ///
    /// When the background color does not match a known scheme color, this
    /// returns `None`. Roles that resolve to the same color match the first
    /// one checked.
    pub fn content_color_for(&self, background: u32) -> Option<u32> {
        if background == self.primary {
            Some(self.on_primary)
        } else if background == self.secondary {
            Some(self.on_secondary)
        } else if background == self.tertiary {
            Some(self.on_tertiary)
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.error {
            Some(self.on_error)
        } else if background == self.primary_container {
            Some(self.on_primary_container)
        } else if background == self.secondary_container {
            Some(self.on_secondary_container)
        } else if background == self.tertiary_container {
            Some(self.on_tertiary_container)
        } else if background == self.error_container {
            Some(self.on_error_container)
        } else if background == self.inverse_surface {
            Some(self.inverse_on_surface)
        } else if background == self.surface {
            Some(self.on_surface)
        } else if background == self.surface_variant {
            Some(self.on_surface_variant)
        } else if background == self.surface_bright
            || background == self.surface_container
            || background == self.surface_container_high
            || background == self.surface_container_highest
            || background == self.surface_container_low
            || background == self.surface_container_lowest
            || background == self.surface_dim
        {
            Some(self.on_surface)
        } else if background == self.primary_fixed || background == self.primary_fixed_dim {
            Some(self.on_primary_fixed)
        } else if background == self.secondary_fixed || background == self.secondary_fixed_dim {
            Some(self.on_secondary_fixed)
        } else if background == self.tertiary_fixed || background == self.tertiary_fixed_dim {
            Some(self.on_tertiary_fixed)
        } else {
            None
        }
    }
}

fn scheme_from_seed(seed: u32, is_dark: bool) -> Result<MaterialColorScheme, DynamicColorError> {
    let scheme = DynamicSchemeBuilder::default()
        .source_color_argb(seed)
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2025)
        .is_dark(is_dark)
        .build()?;
    let dynamic_colors = MaterialDynamicColors::new();
    Ok(MaterialColorScheme::from_scheme(&dynamic_colors, &scheme))
}

#[cfg(test)]
mod tests {
    use material_color_utilities::{contrast, hct::Hct};

    use super::*;

    const SEED: u32 = 0xFF67_50A4;

    fn tone(argb: u32) -> f64 {
        Hct::from_int(argb).tone()
    }

    #[test]
    fn test_light_and_dark_from_seed() {
        let light = MaterialColorScheme::light_from_seed(SEED).expect("seed is set");
        let dark = MaterialColorScheme::dark_from_seed(SEED).expect("seed is set");
        assert!(!light.is_dark);
        assert!(dark.is_dark);
        assert!(tone(light.surface) > tone(dark.surface));
        assert_eq!(light.background, light.surface);
    }

    #[test]
    fn test_fixed_roles_match_across_modes() {
        // Separate light and dark seeds get their own palettes, so compare
        // one scheme against its dark twin.
        let colors = MaterialDynamicColors::new();
        let scheme = DynamicSchemeBuilder::default()
            .source_color_argb(SEED)
            .variant(Variant::TonalSpot)
            .spec_version(SpecVersion::Spec2025)
            .build()
            .expect("seed is set");
        let light = MaterialColorScheme::from_scheme(&colors, &scheme);
        let dark = MaterialColorScheme::from_scheme(&colors, &scheme.with_dark(true));
        assert!(!light.is_dark);
        assert!(dark.is_dark);
        assert_ne!(light.surface, dark.surface);
        for (name, light_argb, dark_argb) in [
            ("primary_fixed", light.primary_fixed, dark.primary_fixed),
            ("primary_fixed_dim", light.primary_fixed_dim, dark.primary_fixed_dim),
            ("on_primary_fixed", light.on_primary_fixed, dark.on_primary_fixed),
            (
                "on_primary_fixed_variant",
                light.on_primary_fixed_variant,
                dark.on_primary_fixed_variant,
            ),
            ("secondary_fixed", light.secondary_fixed, dark.secondary_fixed),
            ("secondary_fixed_dim", light.secondary_fixed_dim, dark.secondary_fixed_dim),
            ("on_secondary_fixed", light.on_secondary_fixed, dark.on_secondary_fixed),
            (
                "on_secondary_fixed_variant",
                light.on_secondary_fixed_variant,
                dark.on_secondary_fixed_variant,
            ),
            ("tertiary_fixed", light.tertiary_fixed, dark.tertiary_fixed),
            ("tertiary_fixed_dim", light.tertiary_fixed_dim, dark.tertiary_fixed_dim),
            ("on_tertiary_fixed", light.on_tertiary_fixed, dark.on_tertiary_fixed),
            (
                "on_tertiary_fixed_variant",
                light.on_tertiary_fixed_variant,
                dark.on_tertiary_fixed_variant,
            ),
        ] {
            assert_eq!(light_argb, dark_argb, "{name}");
        }
    }

    #[test]
    fn test_content_color_for() {
        let scheme = MaterialColorScheme::light_from_seed(SEED).expect("seed is set");
        assert_eq!(scheme.content_color_for(scheme.primary), Some(scheme.on_primary));
        assert_eq!(
            scheme.content_color_for(scheme.surface_container_high),
            Some(scheme.on_surface)
        );
        assert_eq!(scheme.content_color_for(0x1234_5678), None);
    }

    #[test]
    fn test_content_colors_are_readable() {
        let scheme = MaterialColorScheme::dark_from_seed(SEED).expect("seed is set");
        for (background, content) in [
            (scheme.primary, scheme.on_primary),
            (scheme.primary_container, scheme.on_primary_container),
            (scheme.error, scheme.on_error),
        ] {
            let ratio = contrast::ratio_of_tones(tone(background), tone(content));
            assert!(ratio >= 4.5, "ratio {ratio}");
        }
    }
}
