//! The 2025 Material rule set.
//!
//! Every role here is its 2021 counterpart extended with a 2025 field set, so
//! a role built by [`ColorSpec2025`] still resolves the 2021 way under a 2021
//! scheme. Roles the 2025 design leaves alone are returned as-is, and a few
//! legacy roles are remapped onto their modern equivalents under a new name.

use material_color_utilities::{contrast, hct::Hct, palettes::TonalPalette};

use super::{ColorSpec, ColorSpec2021, dual_background_tone};
use crate::{
    contrast_curve::ContrastCurve,
    dynamic_color::DynamicColor,
    dynamic_scheme::DynamicScheme,
    tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity},
    variant::{Platform, SpecVersion, Variant},
};

/// The 2025 rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSpec2025;

/// `base` for every spec version except 2025, where `color_2025` applies.
fn extend(base: DynamicColor, color_2025: &DynamicColor) -> DynamicColor {
    base.to_builder()
        .extend_spec_version(SpecVersion::Spec2025, color_2025)
        .build()
}

/// `base`, resolving like `target` for 2025 schemes.
fn remap(base: DynamicColor, target: DynamicColor) -> DynamicColor {
    let renamed = target.to_builder().name(base.name()).build();
    extend(base, &renamed)
}

/// The standard curve whose normal level is `default_contrast`.
fn contrast_curve(default_contrast: f64) -> ContrastCurve {
    if default_contrast == 1.5 {
        ContrastCurve::new(1.5, 1.5, 3.0, 4.5)
    } else if default_contrast == 3.0 {
        ContrastCurve::new(3.0, 3.0, 4.5, 7.0)
    } else if default_contrast == 4.5 {
        ContrastCurve::new(4.5, 4.5, 7.0, 11.0)
    } else if default_contrast == 6.0 {
        ContrastCurve::new(6.0, 6.0, 7.0, 11.0)
    } else if default_contrast == 7.0 {
        ContrastCurve::new(7.0, 7.0, 11.0, 21.0)
    } else if default_contrast == 9.0 {
        ContrastCurve::new(9.0, 9.0, 11.0, 21.0)
    } else if default_contrast == 11.0 {
        ContrastCurve::new(11.0, 11.0, 21.0, 21.0)
    } else if default_contrast == 21.0 {
        ContrastCurve::new(21.0, 21.0, 21.0, 21.0)
    } else {
        ContrastCurve::new(default_contrast, default_contrast, 7.0, 21.0)
    }
}

/// Starting from `tone`, the first tone where the palette reaches `chroma`,
/// or the most chromatic tone seen before leaving the tone range.
fn find_best_tone_for_chroma(hue: f64, chroma: f64, mut tone: f64, by_decreasing_tone: bool) -> f64 {
    let mut answer = tone;
    let mut best_candidate = Hct::from(hue, chroma, answer);
    while best_candidate.chroma() < chroma {
        if !(0.0..=100.0).contains(&tone) {
            break;
        }
        tone += if by_decreasing_tone { -1.0 } else { 1.0 };
        let new_candidate = Hct::from(hue, chroma, tone);
        if best_candidate.chroma() < new_candidate.chroma() {
            best_candidate = new_candidate;
            answer = tone;
        }
    }
    answer
}

/// `value` held to `[lower, upper]`. `lower` wins when the bounds cross.
fn clamp(lower: f64, upper: f64, value: f64) -> f64 {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// The lightest tone reaching the palette's chroma, within `[lower, upper]`.
fn t_max_c_in(palette: &TonalPalette, lower: f64, upper: f64) -> f64 {
    let answer = find_best_tone_for_chroma(palette.hue(), palette.chroma(), 100.0, true);
    clamp(lower, upper, answer)
}

fn t_max_c(palette: &TonalPalette) -> f64 {
    t_max_c_in(palette, 0.0, 100.0)
}

/// The darkest tone reaching the palette's chroma, within `[lower, upper]`.
fn t_min_c_in(palette: &TonalPalette, lower: f64, upper: f64) -> f64 {
    let answer = find_best_tone_for_chroma(palette.hue(), palette.chroma(), 0.0, false);
    clamp(lower, upper, answer)
}

fn t_min_c(palette: &TonalPalette) -> f64 {
    t_min_c_in(palette, 0.0, 100.0)
}

fn is_phone(s: &DynamicScheme) -> bool {
    s.platform() == Platform::Phone
}

fn neutral_is_yellow(s: &DynamicScheme) -> bool {
    Hct::is_yellow(s.neutral_palette().key_color().hue())
}

/// Light surface tone: yellow neutrals, then vibrant schemes, then the rest.
fn light_surface_tone(s: &DynamicScheme, yellow: f64, vibrant: f64, other: f64) -> f64 {
    if neutral_is_yellow(s) {
        yellow
    } else if s.variant() == Variant::Vibrant {
        vibrant
    } else {
        other
    }
}

/// Chroma boost for a surface, by variant. `expressive` is
/// `(yellow neutral, other)`.
fn surface_boost(
    s: &DynamicScheme,
    neutral: f64,
    tonal_spot: f64,
    expressive: (f64, f64),
    vibrant: f64,
) -> f64 {
    match s.variant() {
        Variant::Neutral => neutral,
        Variant::TonalSpot => tonal_spot,
        Variant::Expressive if neutral_is_yellow(s) => expressive.0,
        Variant::Expressive => expressive.1,
        Variant::Vibrant => vibrant,
        _ => 1.0,
    }
}

/// The boost shared by the highest container and the text roles drawn on
/// surfaces.
fn text_boost(s: &DynamicScheme) -> f64 {
    surface_boost(s, 2.2, 1.7, (2.3, 1.6), 1.29)
}

/// Where text and accents sit: the highest surface on phones, the high
/// container on watches.
fn accent_background(s: &DynamicScheme) -> Option<DynamicColor> {
    Some(if !is_phone(s) {
        ColorSpec2025.surface_container_high()
    } else if s.is_dark() {
        ColorSpec2025.surface_bright()
    } else {
        ColorSpec2025.surface_dim()
    })
}

/// Containers only contrast against a surface on phones.
fn container_background(s: &DynamicScheme) -> Option<DynamicColor> {
    if !is_phone(s) {
        None
    } else if s.is_dark() {
        Some(ColorSpec2025.surface_bright())
    } else {
        Some(ColorSpec2025.surface_dim())
    }
}

/// Containers gain a contrast requirement only above the default level.
fn container_contrast(s: &DynamicScheme) -> Option<ContrastCurve> {
    (is_phone(s) && s.contrast_level() > 0.0).then(|| contrast_curve(1.5))
}

/// `phone` on phones, `watch` elsewhere.
fn by_platform(phone: f64, watch: f64) -> impl Fn(&DynamicScheme) -> Option<ContrastCurve> + Send + Sync + 'static {
    move |s| Some(contrast_curve(if is_phone(s) { phone } else { watch }))
}

impl ColorSpec2025 {
    pub fn highest_surface(&self, s: &DynamicScheme) -> DynamicColor {
        if s.is_dark() {
            self.surface_bright()
        } else {
            self.surface_dim()
        }
    }

    pub fn primary_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.primary_palette_key_color()
    }

    pub fn secondary_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.secondary_palette_key_color()
    }

    pub fn tertiary_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.tertiary_palette_key_color()
    }

    pub fn neutral_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.neutral_palette_key_color()
    }

    pub fn neutral_variant_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.neutral_variant_palette_key_color()
    }

    pub fn error_palette_key_color(&self) -> DynamicColor {
        ColorSpec2021.error_palette_key_color()
    }

    // Surfaces

    pub fn background(&self) -> DynamicColor {
        remap(ColorSpec2021.background(), self.surface())
    }

    pub fn on_background(&self) -> DynamicColor {
        remap(ColorSpec2021.on_background(), self.on_surface())
    }

    pub fn surface(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if !is_phone(s) {
                    0.0
                } else if s.is_dark() {
                    4.0
                } else {
                    light_surface_tone(s, 99.0, 97.0, 98.0)
                }
            })
            .is_background(true)
            .build();
        extend(ColorSpec2021.surface(), &color_2025)
    }

    pub fn surface_dim(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_dim")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    4.0
                } else {
                    light_surface_tone(s, 90.0, 85.0, 87.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(|s| {
                if s.is_dark() {
                    1.0
                } else {
                    surface_boost(s, 2.5, 1.7, (2.7, 1.75), 1.36)
                }
            })
            .build();
        extend(ColorSpec2021.surface_dim(), &color_2025)
    }

    pub fn surface_bright(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_bright")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    18.0
                } else {
                    light_surface_tone(s, 99.0, 97.0, 98.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(|s| {
                if s.is_dark() {
                    surface_boost(s, 2.5, 1.7, (2.7, 1.75), 1.36)
                } else {
                    1.0
                }
            })
            .build();
        extend(ColorSpec2021.surface_bright(), &color_2025)
    }

    pub fn surface_container_lowest(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_container_lowest")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| if s.is_dark() { 0.0 } else { 100.0 })
            .is_background(true)
            .build();
        extend(ColorSpec2021.surface_container_lowest(), &color_2025)
    }

    pub fn surface_container_low(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_container_low")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if !is_phone(s) {
                    15.0
                } else if s.is_dark() {
                    6.0
                } else {
                    light_surface_tone(s, 98.0, 95.0, 96.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    surface_boost(s, 1.3, 1.25, (1.3, 1.15), 1.08)
                } else {
                    1.0
                }
            })
            .build();
        extend(ColorSpec2021.surface_container_low(), &color_2025)
    }

    pub fn surface_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_container")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if !is_phone(s) {
                    20.0
                } else if s.is_dark() {
                    9.0
                } else {
                    light_surface_tone(s, 96.0, 92.0, 94.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    surface_boost(s, 1.6, 1.4, (1.6, 1.3), 1.15)
                } else {
                    1.0
                }
            })
            .build();
        extend(ColorSpec2021.surface_container(), &color_2025)
    }

    pub fn surface_container_high(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_container_high")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if !is_phone(s) {
                    25.0
                } else if s.is_dark() {
                    12.0
                } else {
                    light_surface_tone(s, 94.0, 90.0, 92.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(|s| {
                if is_phone(s) {
                    surface_boost(s, 1.9, 1.5, (1.95, 1.45), 1.22)
                } else {
                    1.0
                }
            })
            .build();
        extend(ColorSpec2021.surface_container_high(), &color_2025)
    }

    pub fn surface_container_highest(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("surface_container_highest")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    15.0
                } else {
                    light_surface_tone(s, 92.0, 88.0, 90.0)
                }
            })
            .is_background(true)
            .chroma_multiplier(text_boost)
            .build();
        extend(ColorSpec2021.surface_container_highest(), &color_2025)
    }

    pub fn on_surface(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_surface")
            .palette(|s| s.neutral_palette().clone())
            .chroma_multiplier(|s| if is_phone(s) { text_boost(s) } else { 1.0 })
            .background(accent_background)
            .contrast_curve(|_| Some(contrast_curve(9.0)))
            .build();
        extend(ColorSpec2021.on_surface(), &color_2025)
    }

    pub fn surface_variant(&self) -> DynamicColor {
        remap(ColorSpec2021.surface_variant(), self.surface_container_highest())
    }

    pub fn on_surface_variant(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_surface_variant")
            .palette(|s| s.neutral_palette().clone())
            .chroma_multiplier(|s| if is_phone(s) { text_boost(s) } else { 1.0 })
            .background(accent_background)
            .contrast_curve(by_platform(4.5, 7.0))
            .build();
        extend(ColorSpec2021.on_surface_variant(), &color_2025)
    }

    pub fn inverse_surface(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("inverse_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| if s.is_dark() { 98.0 } else { 4.0 })
            .is_background(true)
            .build();
        extend(ColorSpec2021.inverse_surface(), &color_2025)
    }

    pub fn inverse_on_surface(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("inverse_on_surface")
            .palette(|s| s.neutral_palette().clone())
            .background(|_| Some(ColorSpec2025.inverse_surface()))
            .contrast_curve(|_| Some(contrast_curve(7.0)))
            .build();
        extend(ColorSpec2021.inverse_on_surface(), &color_2025)
    }

    pub fn outline(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("outline")
            .palette(|s| s.neutral_palette().clone())
            .chroma_multiplier(|s| if is_phone(s) { text_boost(s) } else { 1.0 })
            .background(accent_background)
            .contrast_curve(by_platform(3.0, 4.5))
            .build();
        extend(ColorSpec2021.outline(), &color_2025)
    }

    pub fn outline_variant(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("outline_variant")
            .palette(|s| s.neutral_palette().clone())
            .chroma_multiplier(|s| if is_phone(s) { text_boost(s) } else { 1.0 })
            .background(accent_background)
            .contrast_curve(by_platform(1.5, 3.0))
            .build();
        extend(ColorSpec2021.outline_variant(), &color_2025)
    }

    pub fn shadow(&self) -> DynamicColor {
        ColorSpec2021.shadow()
    }

    pub fn scrim(&self) -> DynamicColor {
        ColorSpec2021.scrim()
    }

    pub fn surface_tint(&self) -> DynamicColor {
        remap(ColorSpec2021.surface_tint(), self.primary())
    }

    // Primaries

    pub fn primary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("primary")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                let palette = s.primary_palette();
                match s.variant() {
                    Variant::Neutral if is_phone(s) => {
                        if s.is_dark() { 80.0 } else { 40.0 }
                    }
                    Variant::Neutral => 90.0,
                    Variant::TonalSpot if is_phone(s) => {
                        if s.is_dark() { 80.0 } else { t_max_c(palette) }
                    }
                    Variant::TonalSpot => t_max_c_in(palette, 0.0, 90.0),
                    Variant::Expressive => {
                        let key = palette.key_color();
                        let upper = if Hct::is_yellow(key.hue()) {
                            25.0
                        } else if Hct::is_cyan(key.hue()) {
                            88.0
                        } else {
                            98.0
                        };
                        t_max_c_in(palette, 0.0, upper)
                    }
                    _ => {
                        let upper = if Hct::is_cyan(palette.key_color().hue()) {
                            88.0
                        } else {
                            98.0
                        };
                        t_max_c_in(palette, 0.0, upper)
                    }
                }
            })
            .is_background(true)
            .background(accent_background)
            .contrast_curve(by_platform(4.5, 7.0))
            .tone_delta_pair(|s| {
                is_phone(s).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.primary_container(),
                        ColorSpec2025.primary(),
                        5.0,
                        TonePolarity::RelativeLighter,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .build();
        extend(ColorSpec2021.primary(), &color_2025)
    }

    /// A darker primary for watch surfaces. Only defined by this rule set.
    pub fn primary_dim(&self) -> DynamicColor {
        DynamicColor::builder("primary_dim")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| match s.variant() {
                Variant::Neutral => 85.0,
                Variant::TonalSpot => t_max_c_in(s.primary_palette(), 0.0, 90.0),
                _ => t_max_c(s.primary_palette()),
            })
            .is_background(true)
            .background(|_| Some(ColorSpec2025.surface_container_high()))
            .contrast_curve(|_| Some(contrast_curve(4.5)))
            .tone_delta_pair(|_| {
                Some(ToneDeltaPair::with_constraint(
                    ColorSpec2025.primary_dim(),
                    ColorSpec2025.primary(),
                    5.0,
                    TonePolarity::Darker,
                    DeltaConstraint::Farther,
                ))
            })
            .build()
    }

    pub fn on_primary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_primary")
            .palette(|s| s.primary_palette().clone())
            .background(|s| {
                Some(if is_phone(s) {
                    ColorSpec2025.primary()
                } else {
                    ColorSpec2025.primary_dim()
                })
            })
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_primary(), &color_2025)
    }

    pub fn primary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("primary_container")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                let palette = s.primary_palette();
                let cyan = Hct::is_cyan(palette.key_color().hue());
                if !is_phone(s) {
                    return 30.0;
                }
                match (s.variant(), s.is_dark()) {
                    (Variant::Neutral, true) => 30.0,
                    (Variant::Neutral, false) => 90.0,
                    (Variant::TonalSpot, true) => t_min_c_in(palette, 35.0, 93.0),
                    (Variant::TonalSpot, false) => t_max_c_in(palette, 0.0, 90.0),
                    (Variant::Expressive, true) => t_max_c_in(palette, 30.0, 93.0),
                    (Variant::Expressive, false) => {
                        t_max_c_in(palette, 78.0, if cyan { 88.0 } else { 90.0 })
                    }
                    (_, true) => t_min_c_in(palette, 66.0, 93.0),
                    (_, false) => t_max_c_in(palette, 66.0, if cyan { 88.0 } else { 93.0 }),
                }
            })
            .is_background(true)
            .background(container_background)
            .tone_delta_pair(|s| {
                (!is_phone(s)).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.primary_container(),
                        ColorSpec2025.primary_dim(),
                        10.0,
                        TonePolarity::Darker,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .contrast_curve(container_contrast)
            .build();
        extend(ColorSpec2021.primary_container(), &color_2025)
    }

    pub fn on_primary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_primary_container")
            .palette(|s| s.primary_palette().clone())
            .background(|_| Some(ColorSpec2025.primary_container()))
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_primary_container(), &color_2025)
    }

    pub fn inverse_primary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("inverse_primary")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| t_max_c(s.primary_palette()))
            .background(|_| Some(ColorSpec2025.inverse_surface()))
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.inverse_primary(), &color_2025)
    }

    // Secondaries

    pub fn secondary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("secondary")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                let palette = s.secondary_palette();
                if !is_phone(s) {
                    return if s.variant() == Variant::Neutral {
                        90.0
                    } else {
                        t_max_c_in(palette, 0.0, 90.0)
                    };
                }
                match s.variant() {
                    Variant::Neutral if s.is_dark() => t_min_c_in(palette, 0.0, 98.0),
                    Variant::Neutral => t_max_c(palette),
                    Variant::Vibrant => {
                        t_max_c_in(palette, 0.0, if s.is_dark() { 90.0 } else { 98.0 })
                    }
                    _ if s.is_dark() => 80.0,
                    _ => t_max_c(palette),
                }
            })
            .is_background(true)
            .background(accent_background)
            .contrast_curve(by_platform(4.5, 7.0))
            .tone_delta_pair(|s| {
                is_phone(s).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.secondary_container(),
                        ColorSpec2025.secondary(),
                        5.0,
                        TonePolarity::RelativeLighter,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .build();
        extend(ColorSpec2021.secondary(), &color_2025)
    }

    /// Only defined by this rule set.
    pub fn secondary_dim(&self) -> DynamicColor {
        DynamicColor::builder("secondary_dim")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                if s.variant() == Variant::Neutral {
                    85.0
                } else {
                    t_max_c_in(s.secondary_palette(), 0.0, 90.0)
                }
            })
            .is_background(true)
            .background(|_| Some(ColorSpec2025.surface_container_high()))
            .contrast_curve(|_| Some(contrast_curve(4.5)))
            .tone_delta_pair(|_| {
                Some(ToneDeltaPair::with_constraint(
                    ColorSpec2025.secondary_dim(),
                    ColorSpec2025.secondary(),
                    5.0,
                    TonePolarity::Darker,
                    DeltaConstraint::Farther,
                ))
            })
            .build()
    }

    pub fn on_secondary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_secondary")
            .palette(|s| s.secondary_palette().clone())
            .background(|s| {
                Some(if is_phone(s) {
                    ColorSpec2025.secondary()
                } else {
                    ColorSpec2025.secondary_dim()
                })
            })
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_secondary(), &color_2025)
    }

    pub fn secondary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("secondary_container")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                let palette = s.secondary_palette();
                if !is_phone(s) {
                    return 30.0;
                }
                match (s.variant(), s.is_dark()) {
                    (Variant::Vibrant, true) => t_min_c_in(palette, 30.0, 40.0),
                    (Variant::Vibrant, false) => t_max_c_in(palette, 84.0, 90.0),
                    (Variant::Expressive, true) => 15.0,
                    (Variant::Expressive, false) => t_max_c_in(palette, 90.0, 95.0),
                    (_, true) => 25.0,
                    (_, false) => 90.0,
                }
            })
            .is_background(true)
            .background(container_background)
            .tone_delta_pair(|s| {
                (!is_phone(s)).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.secondary_container(),
                        ColorSpec2025.secondary_dim(),
                        10.0,
                        TonePolarity::Darker,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .contrast_curve(container_contrast)
            .build();
        extend(ColorSpec2021.secondary_container(), &color_2025)
    }

    pub fn on_secondary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_secondary_container")
            .palette(|s| s.secondary_palette().clone())
            .background(|_| Some(ColorSpec2025.secondary_container()))
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_secondary_container(), &color_2025)
    }

    // Tertiaries

    pub fn tertiary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("tertiary")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                let palette = s.tertiary_palette();
                if !is_phone(s) {
                    return if s.variant() == Variant::TonalSpot {
                        t_max_c_in(palette, 0.0, 90.0)
                    } else {
                        t_max_c(palette)
                    };
                }
                match s.variant() {
                    Variant::Expressive | Variant::Vibrant => {
                        let upper = if Hct::is_cyan(palette.key_color().hue()) {
                            88.0
                        } else if s.is_dark() {
                            98.0
                        } else {
                            100.0
                        };
                        t_max_c_in(palette, 0.0, upper)
                    }
                    _ if s.is_dark() => t_max_c_in(palette, 0.0, 98.0),
                    _ => t_max_c(palette),
                }
            })
            .is_background(true)
            .background(accent_background)
            .contrast_curve(by_platform(4.5, 7.0))
            .tone_delta_pair(|s| {
                is_phone(s).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.tertiary_container(),
                        ColorSpec2025.tertiary(),
                        5.0,
                        TonePolarity::RelativeLighter,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .build();
        extend(ColorSpec2021.tertiary(), &color_2025)
    }

    /// Only defined by this rule set.
    pub fn tertiary_dim(&self) -> DynamicColor {
        DynamicColor::builder("tertiary_dim")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                if s.variant() == Variant::TonalSpot {
                    t_max_c_in(s.tertiary_palette(), 0.0, 90.0)
                } else {
                    t_max_c(s.tertiary_palette())
                }
            })
            .is_background(true)
            .background(|_| Some(ColorSpec2025.surface_container_high()))
            .contrast_curve(|_| Some(contrast_curve(4.5)))
            .tone_delta_pair(|_| {
                Some(ToneDeltaPair::with_constraint(
                    ColorSpec2025.tertiary_dim(),
                    ColorSpec2025.tertiary(),
                    5.0,
                    TonePolarity::Darker,
                    DeltaConstraint::Farther,
                ))
            })
            .build()
    }

    pub fn on_tertiary(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_tertiary")
            .palette(|s| s.tertiary_palette().clone())
            .background(|s| {
                Some(if is_phone(s) {
                    ColorSpec2025.tertiary()
                } else {
                    ColorSpec2025.tertiary_dim()
                })
            })
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_tertiary(), &color_2025)
    }

    pub fn tertiary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("tertiary_container")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                let palette = s.tertiary_palette();
                if !is_phone(s) {
                    return if s.variant() == Variant::TonalSpot {
                        t_max_c_in(palette, 0.0, 90.0)
                    } else {
                        t_max_c(palette)
                    };
                }
                match (s.variant(), s.is_dark()) {
                    (Variant::Neutral, true) => t_max_c_in(palette, 0.0, 93.0),
                    (Variant::Neutral, false) => t_max_c_in(palette, 0.0, 96.0),
                    (Variant::TonalSpot, dark) => {
                        t_max_c_in(palette, 0.0, if dark { 93.0 } else { 100.0 })
                    }
                    (Variant::Expressive, dark) => {
                        let upper = if Hct::is_cyan(palette.key_color().hue()) {
                            88.0
                        } else if dark {
                            93.0
                        } else {
                            100.0
                        };
                        t_max_c_in(palette, 75.0, upper)
                    }
                    (_, true) => t_max_c_in(palette, 0.0, 93.0),
                    (_, false) => t_max_c_in(palette, 72.0, 100.0),
                }
            })
            .is_background(true)
            .background(container_background)
            .tone_delta_pair(|s| {
                (!is_phone(s)).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.tertiary_container(),
                        ColorSpec2025.tertiary_dim(),
                        10.0,
                        TonePolarity::Darker,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .contrast_curve(container_contrast)
            .build();
        extend(ColorSpec2021.tertiary_container(), &color_2025)
    }

    pub fn on_tertiary_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_tertiary_container")
            .palette(|s| s.tertiary_palette().clone())
            .background(|_| Some(ColorSpec2025.tertiary_container()))
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_tertiary_container(), &color_2025)
    }

    // Errors

    pub fn error(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("error")
            .palette(|s| s.error_palette().clone())
            .tone(|s| {
                let palette = s.error_palette();
                if !is_phone(s) {
                    t_min_c(palette)
                } else if s.is_dark() {
                    t_min_c_in(palette, 0.0, 98.0)
                } else {
                    t_max_c(palette)
                }
            })
            .is_background(true)
            .background(accent_background)
            .contrast_curve(by_platform(4.5, 7.0))
            .tone_delta_pair(|s| {
                is_phone(s).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.error_container(),
                        ColorSpec2025.error(),
                        5.0,
                        TonePolarity::RelativeLighter,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .build();
        extend(ColorSpec2021.error(), &color_2025)
    }

    /// Only defined by this rule set.
    pub fn error_dim(&self) -> DynamicColor {
        DynamicColor::builder("error_dim")
            .palette(|s| s.error_palette().clone())
            .tone(|s| t_min_c(s.error_palette()))
            .is_background(true)
            .background(|_| Some(ColorSpec2025.surface_container_high()))
            .contrast_curve(|_| Some(contrast_curve(4.5)))
            .tone_delta_pair(|_| {
                Some(ToneDeltaPair::with_constraint(
                    ColorSpec2025.error_dim(),
                    ColorSpec2025.error(),
                    5.0,
                    TonePolarity::Darker,
                    DeltaConstraint::Farther,
                ))
            })
            .build()
    }

    pub fn on_error(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_error")
            .palette(|s| s.error_palette().clone())
            .background(|s| {
                Some(if is_phone(s) {
                    ColorSpec2025.error()
                } else {
                    ColorSpec2025.error_dim()
                })
            })
            .contrast_curve(by_platform(6.0, 7.0))
            .build();
        extend(ColorSpec2021.on_error(), &color_2025)
    }

    pub fn error_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("error_container")
            .palette(|s| s.error_palette().clone())
            .tone(|s| {
                let palette = s.error_palette();
                if !is_phone(s) {
                    30.0
                } else if s.is_dark() {
                    t_min_c_in(palette, 30.0, 93.0)
                } else {
                    t_max_c_in(palette, 0.0, 90.0)
                }
            })
            .is_background(true)
            .background(container_background)
            .tone_delta_pair(|s| {
                (!is_phone(s)).then(|| {
                    ToneDeltaPair::with_constraint(
                        ColorSpec2025.error_container(),
                        ColorSpec2025.error_dim(),
                        10.0,
                        TonePolarity::Darker,
                        DeltaConstraint::Farther,
                    )
                })
            })
            .contrast_curve(container_contrast)
            .build();
        extend(ColorSpec2021.error_container(), &color_2025)
    }

    pub fn on_error_container(&self) -> DynamicColor {
        let color_2025 = DynamicColor::builder("on_error_container")
            .palette(|s| s.error_palette().clone())
            .background(|_| Some(ColorSpec2025.error_container()))
            .contrast_curve(by_platform(4.5, 7.0))
            .build();
        extend(ColorSpec2021.on_error_container(), &color_2025)
    }

    // Fixed roles take the light-mode container tone in both modes.

    pub fn primary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.primary_fixed(),
            &fixed("primary_fixed", |s| s.primary_palette().clone(), || {
                ColorSpec2025.primary_container()
            }),
        )
    }

    pub fn primary_fixed_dim(&self) -> DynamicColor {
        extend(
            ColorSpec2021.primary_fixed_dim(),
            &fixed_dim(
                "primary_fixed_dim",
                |s| s.primary_palette().clone(),
                || (ColorSpec2025.primary_fixed_dim(), ColorSpec2025.primary_fixed()),
            ),
        )
    }

    pub fn on_primary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_primary_fixed(),
            &on_fixed(
                "on_primary_fixed",
                |s| s.primary_palette().clone(),
                || ColorSpec2025.primary_fixed_dim(),
                7.0,
            ),
        )
    }

    pub fn on_primary_fixed_variant(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_primary_fixed_variant(),
            &on_fixed(
                "on_primary_fixed_variant",
                |s| s.primary_palette().clone(),
                || ColorSpec2025.primary_fixed_dim(),
                4.5,
            ),
        )
    }

    pub fn secondary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.secondary_fixed(),
            &fixed("secondary_fixed", |s| s.secondary_palette().clone(), || {
                ColorSpec2025.secondary_container()
            }),
        )
    }

    pub fn secondary_fixed_dim(&self) -> DynamicColor {
        extend(
            ColorSpec2021.secondary_fixed_dim(),
            &fixed_dim(
                "secondary_fixed_dim",
                |s| s.secondary_palette().clone(),
                || (ColorSpec2025.secondary_fixed_dim(), ColorSpec2025.secondary_fixed()),
            ),
        )
    }

    pub fn on_secondary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_secondary_fixed(),
            &on_fixed(
                "on_secondary_fixed",
                |s| s.secondary_palette().clone(),
                || ColorSpec2025.secondary_fixed_dim(),
                7.0,
            ),
        )
    }

    pub fn on_secondary_fixed_variant(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_secondary_fixed_variant(),
            &on_fixed(
                "on_secondary_fixed_variant",
                |s| s.secondary_palette().clone(),
                || ColorSpec2025.secondary_fixed_dim(),
                4.5,
            ),
        )
    }

    pub fn tertiary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.tertiary_fixed(),
            &fixed("tertiary_fixed", |s| s.tertiary_palette().clone(), || {
                ColorSpec2025.tertiary_container()
            }),
        )
    }

    pub fn tertiary_fixed_dim(&self) -> DynamicColor {
        extend(
            ColorSpec2021.tertiary_fixed_dim(),
            &fixed_dim(
                "tertiary_fixed_dim",
                |s| s.tertiary_palette().clone(),
                || (ColorSpec2025.tertiary_fixed_dim(), ColorSpec2025.tertiary_fixed()),
            ),
        )
    }

    pub fn on_tertiary_fixed(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_tertiary_fixed(),
            &on_fixed(
                "on_tertiary_fixed",
                |s| s.tertiary_palette().clone(),
                || ColorSpec2025.tertiary_fixed_dim(),
                7.0,
            ),
        )
    }

    pub fn on_tertiary_fixed_variant(&self) -> DynamicColor {
        extend(
            ColorSpec2021.on_tertiary_fixed_variant(),
            &on_fixed(
                "on_tertiary_fixed_variant",
                |s| s.tertiary_palette().clone(),
                || ColorSpec2025.tertiary_fixed_dim(),
                4.5,
            ),
        )
    }

    // Android legacy roles

    pub fn control_activated(&self) -> DynamicColor {
        remap(ColorSpec2021.control_activated(), self.primary_container())
    }

    pub fn control_normal(&self) -> DynamicColor {
        remap(ColorSpec2021.control_normal(), self.on_surface_variant())
    }

    pub fn control_highlight(&self) -> DynamicColor {
        ColorSpec2021.control_highlight()
    }

    pub fn text_primary_inverse(&self) -> DynamicColor {
        remap(ColorSpec2021.text_primary_inverse(), self.inverse_on_surface())
    }

    pub fn text_secondary_and_tertiary_inverse(&self) -> DynamicColor {
        ColorSpec2021.text_secondary_and_tertiary_inverse()
    }

    pub fn text_primary_inverse_disable_only(&self) -> DynamicColor {
        ColorSpec2021.text_primary_inverse_disable_only()
    }

    pub fn text_secondary_and_tertiary_inverse_disabled(&self) -> DynamicColor {
        ColorSpec2021.text_secondary_and_tertiary_inverse_disabled()
    }

    pub fn text_hint_inverse(&self) -> DynamicColor {
        ColorSpec2021.text_hint_inverse()
    }
}

fn fixed(
    name: &str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    container: fn() -> DynamicColor,
) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(palette)
        .tone(move |s| container().get_tone(&s.with_dark(false)))
        .is_background(true)
        .build()
}

/// `roles` is `(fixed_dim, fixed)`.
fn fixed_dim(
    name: &str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    roles: fn() -> (DynamicColor, DynamicColor),
) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(palette)
        .tone(move |s| roles().1.get_tone(s))
        .is_background(true)
        .tone_delta_pair(move |_| {
            let (fixed_dim, fixed) = roles();
            Some(ToneDeltaPair::with_constraint(
                fixed_dim,
                fixed,
                5.0,
                TonePolarity::Darker,
                DeltaConstraint::Exact,
            ))
        })
        .build()
}

fn on_fixed(
    name: &str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    fixed_dim: fn() -> DynamicColor,
    default_contrast: f64,
) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(palette)
        .background(move |_| Some(fixed_dim()))
        .contrast_curve(move |_| Some(contrast_curve(default_contrast)))
        .build()
}

/// Moves a background tone out of the band where neither black nor white
/// text reads well. Fixed-dim roles are exempt.
fn avoid_awkward_tone(color: &DynamicColor, tone: f64) -> f64 {
    if !color.is_background() || color.name().ends_with("_fixed_dim") {
        return tone;
    }
    if tone >= 57.0 {
        clamp(65.0, 100.0, tone)
    } else {
        clamp(0.0, 49.0, tone)
    }
}

/// `tone`, or the minimum tone reaching `desired_ratio` when `tone` falls
/// short. Lowered contrast levels always take the minimum.
fn meet_contrast(scheme: &DynamicScheme, bg_tone: f64, tone: f64, desired_ratio: f64) -> f64 {
    if contrast::ratio_of_tones(bg_tone, tone) >= desired_ratio && scheme.contrast_level() >= 0.0 {
        tone
    } else {
        DynamicColor::foreground_tone(bg_tone, desired_ratio)
    }
}

impl ColorSpec2025 {
    /// Tone of a role paired with another: positioned relative to the
    /// reference role's resolved tone, then lifted for contrast.
    fn pair_tone(&self, scheme: &DynamicScheme, color: &DynamicColor, pair: &ToneDeltaPair) -> f64 {
        let absolute_delta = match pair.polarity() {
            TonePolarity::Darker => -pair.delta(),
            TonePolarity::RelativeLighter if scheme.is_dark() => -pair.delta(),
            TonePolarity::RelativeDarker if !scheme.is_dark() => -pair.delta(),
            _ => pair.delta(),
        };

        let am_role_a = color.name() == pair.role_a().name();
        let (self_role, reference_role) = if am_role_a {
            (pair.role_a(), pair.role_b())
        } else {
            (pair.role_b(), pair.role_a())
        };
        let mut self_tone = self_role.nominal_tone(scheme);
        let reference_tone = reference_role.get_tone(scheme);
        let relative_delta = if am_role_a { absolute_delta } else { -absolute_delta };

        self_tone = match pair.constraint() {
            DeltaConstraint::Exact => clamp(0.0, 100.0, reference_tone + relative_delta),
            DeltaConstraint::Nearer if relative_delta > 0.0 => clamp(
                0.0,
                100.0,
                clamp(reference_tone, reference_tone + relative_delta, self_tone),
            ),
            DeltaConstraint::Nearer => clamp(
                0.0,
                100.0,
                clamp(reference_tone + relative_delta, reference_tone, self_tone),
            ),
            DeltaConstraint::Farther if relative_delta > 0.0 => {
                clamp(reference_tone + relative_delta, 100.0, self_tone)
            }
            DeltaConstraint::Farther => {
                clamp(0.0, reference_tone + relative_delta, self_tone)
            }
        };

        if let (Some(background), Some(curve)) =
            (color.background(scheme), color.contrast_curve(scheme))
        {
            let bg_tone = background.get_tone(scheme);
            let self_contrast = curve.get(scheme.contrast_level());
            self_tone = meet_contrast(scheme, bg_tone, self_tone, self_contrast);
        }

        avoid_awkward_tone(color, self_tone)
    }
}

impl ColorSpec for ColorSpec2025 {
    /// Solves the tone first, then rebuilds the color at the palette's hue
    /// and boosted chroma so light roles recover chroma as contrast rises.
    fn get_hct(&self, scheme: &DynamicScheme, color: &DynamicColor) -> Hct {
        let palette = color.palette(scheme);
        let tone = self.get_tone(scheme, color);
        let chroma = palette.chroma() * color.chroma_multiplier(scheme);
        Hct::from(palette.hue(), chroma, tone)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(role = %color.name()))]
    fn get_tone(&self, scheme: &DynamicScheme, color: &DynamicColor) -> f64 {
        if let Some(pair) = color.tone_delta_pair(scheme) {
            return self.pair_tone(scheme, color, &pair);
        }

        let answer = color.nominal_tone(scheme);
        let (Some(background), Some(curve)) =
            (color.background(scheme), color.contrast_curve(scheme))
        else {
            return answer;
        };

        let bg_tone = background.get_tone(scheme);
        let desired_ratio = curve.get(scheme.contrast_level());
        let answer = avoid_awkward_tone(
            color,
            meet_contrast(scheme, bg_tone, answer, desired_ratio),
        );

        match color.second_background(scheme) {
            Some(second) => {
                dual_background_tone(answer, bg_tone, second.get_tone(scheme), desired_ratio)
            }
            None => answer,
        }
    }

    fn primary_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette {
        let phone = platform == Platform::Phone;
        let hue = source.hue();
        let chroma = match variant {
            Variant::Neutral => match (phone, Hct::is_blue(source.hue())) {
                (true, true) => 12.0,
                (true, false) => 8.0,
                (false, true) => 16.0,
                (false, false) => 12.0,
            },
            Variant::TonalSpot => {
                if phone && is_dark {
                    26.0
                } else {
                    32.0
                }
            }
            Variant::Expressive => match (phone, is_dark) {
                (true, true) => 36.0,
                (true, false) => 48.0,
                (false, _) => 40.0,
            },
            Variant::Vibrant => {
                if phone {
                    74.0
                } else {
                    56.0
                }
            }
            _ => {
                return ColorSpec2021.primary_palette(
                    variant,
                    source,
                    is_dark,
                    platform,
                    contrast_level,
                );
            }
        };
        TonalPalette::from_hue_and_chroma(hue, chroma)
    }

    fn secondary_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette {
        let phone = platform == Platform::Phone;
        match variant {
            Variant::Neutral => {
                let chroma = match (phone, Hct::is_blue(source.hue())) {
                    (true, true) => 6.0,
                    (true, false) => 4.0,
                    (false, true) => 10.0,
                    (false, false) => 6.0,
                };
                TonalPalette::from_hue_and_chroma(source.hue(), chroma)
            }
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(source.hue(), 16.0),
            Variant::Expressive => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 105.0, 140.0, 204.0, 253.0, 278.0, 300.0, 333.0, 360.0],
                    &[-160.0, 155.0, -100.0, 96.0, -96.0, -156.0, -165.0, -160.0],
                ),
                if phone && is_dark { 16.0 } else { 24.0 },
            ),
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 38.0, 105.0, 140.0, 333.0, 360.0],
                    &[-14.0, 10.0, -14.0, 10.0, -14.0],
                ),
                if phone { 56.0 } else { 36.0 },
            ),
            _ => ColorSpec2021.secondary_palette(variant, source, is_dark, platform, contrast_level),
        }
    }

    fn tertiary_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette {
        let phone = platform == Platform::Phone;
        match variant {
            Variant::Neutral => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 38.0, 105.0, 161.0, 204.0, 278.0, 333.0, 360.0],
                    &[-32.0, 26.0, 10.0, -39.0, 24.0, -15.0, -32.0],
                ),
                if phone { 20.0 } else { 36.0 },
            ),
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 20.0, 71.0, 161.0, 333.0, 360.0],
                    &[-40.0, 48.0, -32.0, 40.0, -32.0],
                ),
                if phone { 28.0 } else { 32.0 },
            ),
            Variant::Expressive => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 105.0, 140.0, 204.0, 253.0, 278.0, 300.0, 333.0, 360.0],
                    &[-165.0, 160.0, -105.0, 101.0, -101.0, -160.0, -170.0, -165.0],
                ),
                48.0,
            ),
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 38.0, 71.0, 105.0, 140.0, 161.0, 253.0, 333.0, 360.0],
                    &[-72.0, 35.0, 24.0, -24.0, 62.0, 50.0, 62.0, -72.0],
                ),
                56.0,
            ),
            _ => ColorSpec2021.tertiary_palette(variant, source, is_dark, platform, contrast_level),
        }
    }

    fn neutral_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette {
        let phone = platform == Platform::Phone;
        match variant {
            Variant::Neutral => {
                TonalPalette::from_hue_and_chroma(source.hue(), if phone { 1.4 } else { 6.0 })
            }
            Variant::TonalSpot => {
                TonalPalette::from_hue_and_chroma(source.hue(), if phone { 5.0 } else { 10.0 })
            }
            Variant::Expressive => TonalPalette::from_hue_and_chroma(
                expressive_neutral_hue(source),
                expressive_neutral_chroma(source, is_dark, platform),
            ),
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                vibrant_neutral_hue(source),
                vibrant_neutral_chroma(source, platform),
            ),
            _ => ColorSpec2021.neutral_palette(variant, source, is_dark, platform, contrast_level),
        }
    }

    fn neutral_variant_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> TonalPalette {
        let phone = platform == Platform::Phone;
        match variant {
            Variant::Neutral => TonalPalette::from_hue_and_chroma(
                source.hue(),
                (if phone { 1.4 } else { 6.0 }) * 2.2,
            ),
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
                source.hue(),
                (if phone { 5.0 } else { 10.0 }) * 1.7,
            ),
            Variant::Expressive => {
                let hue = expressive_neutral_hue(source);
                let chroma = expressive_neutral_chroma(source, is_dark, platform);
                let boost = if (105.0..125.0).contains(&hue) { 1.6 } else { 2.3 };
                TonalPalette::from_hue_and_chroma(hue, chroma * boost)
            }
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                vibrant_neutral_hue(source),
                vibrant_neutral_chroma(source, platform) * 1.29,
            ),
            _ => ColorSpec2021.neutral_variant_palette(
                variant,
                source,
                is_dark,
                platform,
                contrast_level,
            ),
        }
    }

    fn error_palette(
        &self,
        variant: Variant,
        source: &Hct,
        is_dark: bool,
        platform: Platform,
        contrast_level: f64,
    ) -> Option<TonalPalette> {
        let phone = platform == Platform::Phone;
        let hue = DynamicScheme::piecewise_value(
            source,
            &[0.0, 3.0, 13.0, 23.0, 33.0, 43.0, 153.0, 273.0, 360.0],
            &[12.0, 22.0, 32.0, 12.0, 22.0, 32.0, 22.0, 12.0],
        );
        let chroma = match variant {
            Variant::Neutral => if phone { 50.0 } else { 40.0 },
            Variant::TonalSpot => if phone { 60.0 } else { 48.0 },
            Variant::Expressive => if phone { 64.0 } else { 48.0 },
            Variant::Vibrant => if phone { 80.0 } else { 60.0 },
            _ => {
                return ColorSpec2021.error_palette(
                    variant,
                    source,
                    is_dark,
                    platform,
                    contrast_level,
                );
            }
        };
        Some(TonalPalette::from_hue_and_chroma(hue, chroma))
    }
}

fn expressive_neutral_hue(source: &Hct) -> f64 {
    DynamicScheme::rotated_hue(
        source,
        &[0.0, 71.0, 124.0, 253.0, 278.0, 300.0, 360.0],
        &[10.0, 0.0, 10.0, 0.0, 10.0, 0.0],
    )
}

fn expressive_neutral_chroma(source: &Hct, is_dark: bool, platform: Platform) -> f64 {
    let hue_is_yellow = Hct::is_yellow(expressive_neutral_hue(source));
    match (platform, is_dark) {
        (Platform::Phone, true) if hue_is_yellow => 6.0,
        (Platform::Phone, true) => 14.0,
        (Platform::Phone, false) => 18.0,
        (Platform::Watch, _) => 12.0,
    }
}

fn vibrant_neutral_hue(source: &Hct) -> f64 {
    DynamicScheme::rotated_hue(
        source,
        &[0.0, 38.0, 105.0, 140.0, 333.0, 360.0],
        &[-14.0, 10.0, -14.0, 10.0, -14.0],
    )
}

fn vibrant_neutral_chroma(source: &Hct, platform: Platform) -> f64 {
    let hue_is_blue = Hct::is_blue(vibrant_neutral_hue(source));
    match platform {
        Platform::Phone => 28.0,
        Platform::Watch if hue_is_blue => 28.0,
        Platform::Watch => 20.0,
    }
}
