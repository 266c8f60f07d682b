//! The immutable scheme snapshot every role is resolved against.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use derive_builder::Builder;
use material_color_utilities::{hct::Hct, palettes::TonalPalette, utils::math::sanitize_degrees};
use tracing::debug;

use crate::{
    color_spec::color_spec,
    dynamic_color::DynamicColor,
    error::DynamicColorError,
    variant::{Platform, SpecVersion, Variant},
};

static NEXT_SCHEME_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constructed scheme.
///
/// Clones of a scheme share it; [`DynamicScheme::with_dark`] and every
/// constructor assign a fresh one. Role caches are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemeId(u64);

impl SchemeId {
    fn next() -> Self {
        Self(NEXT_SCHEME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The palettes of a scheme, for building one with
/// [`DynamicScheme::from_palettes`].
#[derive(Debug, Clone)]
pub struct SchemePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    /// Defaults to hue 25, chroma 84.
    pub error: Option<TonalPalette>,
}

/// Options for a scheme whose palettes come from the rule set.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "DynamicSchemeBuilder",
    pattern = "owned",
    public,
    build_fn(private, name = "build_options", error = "DynamicColorError")
)]
struct SchemeOptions {
    source_color_hct: Hct,
    #[builder(default)]
    variant: Variant,
    #[builder(default)]
    is_dark: bool,
    /// -1 is the lowest contrast, 0 the default and 1 the highest.
    #[builder(default = "0.0")]
    contrast_level: f64,
    #[builder(default)]
    platform: Platform,
    #[builder(default)]
    spec_version: SpecVersion,
}

impl DynamicSchemeBuilder {
    /// Sets the seed from a packed ARGB color.
    pub fn source_color_argb(self, argb: u32) -> Self {
        self.source_color_hct(Hct::from_int(argb))
    }

    /// Builds the scheme, generating its palettes with the rule set of the
    /// chosen spec version.
    pub fn build(self) -> Result<DynamicScheme, DynamicColorError> {
        let options = self.build_options()?;
        let spec = color_spec(options.spec_version);
        let SchemeOptions {
            source_color_hct: source,
            variant,
            is_dark,
            contrast_level,
            platform,
            spec_version,
        } = options;
        let palettes = SchemePalettes {
            primary: spec.primary_palette(variant, &source, is_dark, platform, contrast_level),
            secondary: spec.secondary_palette(variant, &source, is_dark, platform, contrast_level),
            tertiary: spec.tertiary_palette(variant, &source, is_dark, platform, contrast_level),
            neutral: spec.neutral_palette(variant, &source, is_dark, platform, contrast_level),
            neutral_variant: spec.neutral_variant_palette(
                variant,
                &source,
                is_dark,
                platform,
                contrast_level,
            ),
            error: spec.error_palette(variant, &source, is_dark, platform, contrast_level),
        };
        Ok(DynamicScheme::from_palettes(
            source,
            variant,
            is_dark,
            contrast_level,
            platform,
            spec_version,
            palettes,
        ))
    }
}

/// A seed color, the options a theme was requested with, and the tonal
/// palettes generated from them.
///
/// Never mutated after construction. Switching between light and dark goes
/// through [`with_dark`](Self::with_dark), which returns a new scheme.
///
/// Palettes memoize their tones in place, so a scheme is `Send` but not
/// `Sync`. Share one across threads by cloning it.
#[derive(Debug, Clone)]
pub struct DynamicScheme {
    id: SchemeId,
    source_color_hct: Hct,
    variant: Variant,
    is_dark: bool,
    platform: Platform,
    contrast_level: f64,
    spec_version: SpecVersion,
    primary_palette: TonalPalette,
    secondary_palette: TonalPalette,
    tertiary_palette: TonalPalette,
    neutral_palette: TonalPalette,
    neutral_variant_palette: TonalPalette,
    error_palette: TonalPalette,
}

impl DynamicScheme {
    /// A scheme over explicitly chosen palettes.
    pub fn from_palettes(
        source_color_hct: Hct,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
        platform: Platform,
        spec_version: SpecVersion,
        palettes: SchemePalettes,
    ) -> Self {
        let scheme = Self {
            id: SchemeId::next(),
            source_color_hct,
            variant,
            is_dark,
            platform,
            contrast_level,
            spec_version,
            primary_palette: palettes.primary,
            secondary_palette: palettes.secondary,
            tertiary_palette: palettes.tertiary,
            neutral_palette: palettes.neutral,
            neutral_variant_palette: palettes.neutral_variant,
            error_palette: palettes
                .error
                .unwrap_or_else(|| TonalPalette::from_hue_and_chroma(25.0, 84.0)),
        };
        debug!(scheme = %scheme, id = ?scheme.id, "created dynamic scheme");
        scheme
    }

    /// This scheme with a different brightness, everything else copied.
    pub fn with_dark(&self, is_dark: bool) -> Self {
        Self {
            id: SchemeId::next(),
            is_dark,
            ..self.clone()
        }
    }

    /// The value paired with the hue band the seed falls in.
    ///
    /// `hues[i]` applies to seed hues in `[breakpoints[i], breakpoints[i + 1])`.
    /// A seed outside every band keeps its own hue.
    pub fn piecewise_value(source_color_hct: &Hct, breakpoints: &[f64], hues: &[f64]) -> f64 {
        let size = breakpoints.len().saturating_sub(1).min(hues.len());
        let source_hue = source_color_hct.hue();
        (0..size)
            .find(|&i| source_hue >= breakpoints[i] && source_hue < breakpoints[i + 1])
            .map_or(source_hue, |i| sanitize_degrees(hues[i]))
    }

    /// The seed hue rotated by the rotation of the band it falls in.
    pub fn rotated_hue(source_color_hct: &Hct, breakpoints: &[f64], rotations: &[f64]) -> f64 {
        let size = breakpoints.len().saturating_sub(1).min(rotations.len());
        let rotation = if size == 0 {
            0.0
        } else {
            Self::piecewise_value(source_color_hct, breakpoints, rotations)
        };
        sanitize_degrees(source_color_hct.hue() + rotation)
    }

    pub fn id(&self) -> SchemeId {
        self.id
    }

    pub fn source_color_hct(&self) -> &Hct {
        &self.source_color_hct
    }

    pub fn source_color_argb(&self) -> u32 {
        self.source_color_hct.to_int()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }

    pub fn primary_palette(&self) -> &TonalPalette {
        &self.primary_palette
    }

    pub fn secondary_palette(&self) -> &TonalPalette {
        &self.secondary_palette
    }

    pub fn tertiary_palette(&self) -> &TonalPalette {
        &self.tertiary_palette
    }

    pub fn neutral_palette(&self) -> &TonalPalette {
        &self.neutral_palette
    }

    pub fn neutral_variant_palette(&self) -> &TonalPalette {
        &self.neutral_variant_palette
    }

    pub fn error_palette(&self) -> &TonalPalette {
        &self.error_palette
    }

    pub fn hct(&self, color: &DynamicColor) -> Hct {
        color.get_hct(self)
    }

    pub fn argb(&self, color: &DynamicColor) -> u32 {
        color.get_argb(self)
    }
}

impl fmt::Display for DynamicScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scheme: variant={}, mode={}, platform={}, contrastLevel={:.1}, seed={}, specVersion={}",
            self.variant,
            if self.is_dark { "dark" } else { "light" },
            self.platform,
            self.contrast_level,
            self.source_color_hct,
            self.spec_version
        )
    }
}
