//! The original Material 3 rule set.

use material_color_utilities::{
    contrast, dislike_analyzer::fix_if_disliked, hct::Hct, palettes::TonalPalette,
    temperature_cache::TemperatureCache, utils::math::sanitize_degrees,
};

use super::{ColorSpec, dual_background_tone};
use crate::{
    contrast_curve::ContrastCurve,
    dynamic_color::DynamicColor,
    dynamic_scheme::DynamicScheme,
    tone_delta_pair::{ToneDeltaPair, TonePolarity},
    variant::{Platform, Variant},
};

/// The 2021 rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSpec2021;

fn curve(
    low: f64,
    normal: f64,
    medium: f64,
    high: f64,
) -> impl Fn(&DynamicScheme) -> Option<ContrastCurve> + Send + Sync + 'static {
    move |_| Some(ContrastCurve::new(low, normal, medium, high))
}

/// `dark` in dark mode, `light` otherwise.
fn by_mode(dark: f64, light: f64) -> impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static {
    move |s| if s.is_dark() { dark } else { light }
}

fn is_fidelity(s: &DynamicScheme) -> bool {
    matches!(s.variant(), Variant::Fidelity | Variant::Content)
}

fn is_monochrome(s: &DynamicScheme) -> bool {
    s.variant() == Variant::Monochrome
}

/// Walks the tone from `tone` toward darker (or lighter) until the palette
/// reaches `chroma`, stops gaining chroma, or gets within 0.4 of it.
fn find_desired_chroma_by_tone(hue: f64, chroma: f64, tone: f64, by_decreasing_tone: bool) -> f64 {
    let mut answer = tone;
    let mut closest_to_chroma = Hct::from(hue, chroma, tone);
    if closest_to_chroma.chroma() < chroma {
        let mut chroma_peak = closest_to_chroma.chroma();
        while closest_to_chroma.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let potential_solution = Hct::from(hue, chroma, answer);
            if chroma_peak > potential_solution.chroma() {
                break;
            }
            if (potential_solution.chroma() - chroma).abs() < 0.4 {
                break;
            }
            let potential_delta = (potential_solution.chroma() - chroma).abs();
            let current_delta = (closest_to_chroma.chroma() - chroma).abs();
            if potential_delta < current_delta {
                closest_to_chroma = potential_solution.clone();
            }
            chroma_peak = chroma_peak.max(potential_solution.chroma());
        }
    }
    answer
}

/// A palette at `hct`'s hue and chroma.
fn palette_of(hct: &Hct) -> TonalPalette {
    TonalPalette::from_hue_and_chroma(hct.hue(), hct.chroma())
}

impl ColorSpec2021 {
    /// The surface foreground roles are measured against: bright in dark
    /// mode, dim in light mode.
    pub fn highest_surface(&self, s: &DynamicScheme) -> DynamicColor {
        if s.is_dark() {
            self.surface_bright()
        } else {
            self.surface_dim()
        }
    }

    pub fn primary_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "primary_palette_key_color",
            |s| s.primary_palette().clone(),
            |s| s.primary_palette().key_color().tone(),
        )
    }

    pub fn secondary_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "secondary_palette_key_color",
            |s| s.secondary_palette().clone(),
            |s| s.secondary_palette().key_color().tone(),
        )
    }

    pub fn tertiary_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "tertiary_palette_key_color",
            |s| s.tertiary_palette().clone(),
            |s| s.tertiary_palette().key_color().tone(),
        )
    }

    pub fn neutral_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "neutral_palette_key_color",
            |s| s.neutral_palette().clone(),
            |s| s.neutral_palette().key_color().tone(),
        )
    }

    pub fn neutral_variant_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "neutral_variant_palette_key_color",
            |s| s.neutral_variant_palette().clone(),
            |s| s.neutral_variant_palette().key_color().tone(),
        )
    }

    pub fn error_palette_key_color(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "error_palette_key_color",
            |s| s.error_palette().clone(),
            |s| s.error_palette().key_color().tone(),
        )
    }

    // Surfaces

    pub fn background(&self) -> DynamicColor {
        DynamicColor::builder("background")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(6.0, 98.0))
            .is_background(true)
            .build()
    }

    pub fn on_background(&self) -> DynamicColor {
        DynamicColor::builder("on_background")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(90.0, 10.0))
            .background(|_| Some(ColorSpec2021.background()))
            .contrast_curve(curve(3.0, 3.0, 4.5, 7.0))
            .build()
    }

    pub fn surface(&self) -> DynamicColor {
        DynamicColor::builder("surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(6.0, 98.0))
            .is_background(true)
            .build()
    }

    pub fn surface_dim(&self) -> DynamicColor {
        DynamicColor::builder("surface_dim")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    6.0
                } else {
                    ContrastCurve::new(87.0, 87.0, 80.0, 75.0).get(s.contrast_level())
                }
            })
            .is_background(true)
            .build()
    }

    pub fn surface_bright(&self) -> DynamicColor {
        DynamicColor::builder("surface_bright")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    ContrastCurve::new(24.0, 24.0, 29.0, 34.0).get(s.contrast_level())
                } else {
                    98.0
                }
            })
            .is_background(true)
            .build()
    }

    pub fn surface_container_lowest(&self) -> DynamicColor {
        DynamicColor::builder("surface_container_lowest")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| {
                if s.is_dark() {
                    ContrastCurve::new(4.0, 4.0, 2.0, 0.0).get(s.contrast_level())
                } else {
                    100.0
                }
            })
            .is_background(true)
            .build()
    }

    pub fn surface_container_low(&self) -> DynamicColor {
        surface_container(
            "surface_container_low",
            ContrastCurve::new(10.0, 10.0, 11.0, 12.0),
            ContrastCurve::new(96.0, 96.0, 96.0, 95.0),
        )
    }

    pub fn surface_container(&self) -> DynamicColor {
        surface_container(
            "surface_container",
            ContrastCurve::new(12.0, 12.0, 16.0, 20.0),
            ContrastCurve::new(94.0, 94.0, 92.0, 90.0),
        )
    }

    pub fn surface_container_high(&self) -> DynamicColor {
        surface_container(
            "surface_container_high",
            ContrastCurve::new(17.0, 17.0, 21.0, 25.0),
            ContrastCurve::new(92.0, 92.0, 88.0, 85.0),
        )
    }

    pub fn surface_container_highest(&self) -> DynamicColor {
        surface_container(
            "surface_container_highest",
            ContrastCurve::new(22.0, 22.0, 26.0, 30.0),
            ContrastCurve::new(90.0, 90.0, 84.0, 80.0),
        )
    }

    pub fn on_surface(&self) -> DynamicColor {
        DynamicColor::builder("on_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(90.0, 10.0))
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn surface_variant(&self) -> DynamicColor {
        DynamicColor::builder("surface_variant")
            .palette(|s| s.neutral_variant_palette().clone())
            .tone(by_mode(30.0, 90.0))
            .is_background(true)
            .build()
    }

    pub fn on_surface_variant(&self) -> DynamicColor {
        DynamicColor::builder("on_surface_variant")
            .palette(|s| s.neutral_variant_palette().clone())
            .tone(by_mode(80.0, 30.0))
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(3.0, 4.5, 7.0, 11.0))
            .build()
    }

    pub fn inverse_surface(&self) -> DynamicColor {
        DynamicColor::builder("inverse_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(90.0, 20.0))
            .is_background(true)
            .build()
    }

    pub fn inverse_on_surface(&self) -> DynamicColor {
        DynamicColor::builder("inverse_on_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(20.0, 95.0))
            .background(|_| Some(ColorSpec2021.inverse_surface()))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn outline(&self) -> DynamicColor {
        DynamicColor::builder("outline")
            .palette(|s| s.neutral_variant_palette().clone())
            .tone(by_mode(60.0, 50.0))
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.5, 3.0, 4.5, 7.0))
            .build()
    }

    pub fn outline_variant(&self) -> DynamicColor {
        DynamicColor::builder("outline_variant")
            .palette(|s| s.neutral_variant_palette().clone())
            .tone(by_mode(30.0, 80.0))
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
            .build()
    }

    pub fn shadow(&self) -> DynamicColor {
        DynamicColor::from_palette("shadow", |s| s.neutral_palette().clone(), |_| 0.0)
    }

    pub fn scrim(&self) -> DynamicColor {
        DynamicColor::from_palette("scrim", |s| s.neutral_palette().clone(), |_| 0.0)
    }

    pub fn surface_tint(&self) -> DynamicColor {
        DynamicColor::builder("surface_tint")
            .palette(|s| s.primary_palette().clone())
            .tone(by_mode(80.0, 40.0))
            .is_background(true)
            .build()
    }

    // Primaries

    pub fn primary(&self) -> DynamicColor {
        DynamicColor::builder("primary")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 100.0 } else { 0.0 };
                }
                if s.is_dark() { 80.0 } else { 40.0 }
            })
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(3.0, 4.5, 7.0, 7.0))
            .tone_delta_pair(|_| Some(primary_pair()))
            .build()
    }

    pub fn on_primary(&self) -> DynamicColor {
        DynamicColor::builder("on_primary")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 10.0 } else { 90.0 };
                }
                if s.is_dark() { 20.0 } else { 100.0 }
            })
            .background(|_| Some(ColorSpec2021.primary()))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn primary_container(&self) -> DynamicColor {
        DynamicColor::builder("primary_container")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                if is_fidelity(s) {
                    return s.source_color_hct().tone();
                }
                if is_monochrome(s) {
                    return if s.is_dark() { 85.0 } else { 25.0 };
                }
                if s.is_dark() { 30.0 } else { 90.0 }
            })
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
            .tone_delta_pair(|_| Some(primary_pair()))
            .build()
    }

    pub fn on_primary_container(&self) -> DynamicColor {
        DynamicColor::builder("on_primary_container")
            .palette(|s| s.primary_palette().clone())
            .tone(|s| {
                if is_fidelity(s) {
                    let container_tone = ColorSpec2021.primary_container().nominal_tone(s);
                    return DynamicColor::foreground_tone(container_tone, 4.5);
                }
                if is_monochrome(s) {
                    return if s.is_dark() { 0.0 } else { 100.0 };
                }
                if s.is_dark() { 90.0 } else { 30.0 }
            })
            .background(|_| Some(ColorSpec2021.primary_container()))
            .contrast_curve(curve(3.0, 4.5, 7.0, 11.0))
            .build()
    }

    pub fn inverse_primary(&self) -> DynamicColor {
        DynamicColor::builder("inverse_primary")
            .palette(|s| s.primary_palette().clone())
            .tone(by_mode(40.0, 80.0))
            .background(|_| Some(ColorSpec2021.inverse_surface()))
            .contrast_curve(curve(3.0, 4.5, 7.0, 7.0))
            .build()
    }

    // Secondaries

    pub fn secondary(&self) -> DynamicColor {
        DynamicColor::builder("secondary")
            .palette(|s| s.secondary_palette().clone())
            .tone(by_mode(80.0, 40.0))
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(3.0, 4.5, 7.0, 7.0))
            .tone_delta_pair(|_| Some(secondary_pair()))
            .build()
    }

    pub fn on_secondary(&self) -> DynamicColor {
        DynamicColor::builder("on_secondary")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 10.0 } else { 100.0 };
                }
                if s.is_dark() { 20.0 } else { 100.0 }
            })
            .background(|_| Some(ColorSpec2021.secondary()))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn secondary_container(&self) -> DynamicColor {
        DynamicColor::builder("secondary_container")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                let initial_tone = if s.is_dark() { 30.0 } else { 90.0 };
                if is_monochrome(s) {
                    return if s.is_dark() { 30.0 } else { 85.0 };
                }
                if !is_fidelity(s) {
                    return initial_tone;
                }
                find_desired_chroma_by_tone(
                    s.secondary_palette().hue(),
                    s.secondary_palette().chroma(),
                    initial_tone,
                    !s.is_dark(),
                )
            })
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
            .tone_delta_pair(|_| Some(secondary_pair()))
            .build()
    }

    pub fn on_secondary_container(&self) -> DynamicColor {
        DynamicColor::builder("on_secondary_container")
            .palette(|s| s.secondary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 90.0 } else { 10.0 };
                }
                if !is_fidelity(s) {
                    return if s.is_dark() { 90.0 } else { 30.0 };
                }
                let container_tone = ColorSpec2021.secondary_container().nominal_tone(s);
                DynamicColor::foreground_tone(container_tone, 4.5)
            })
            .background(|_| Some(ColorSpec2021.secondary_container()))
            .contrast_curve(curve(3.0, 4.5, 7.0, 11.0))
            .build()
    }

    // Tertiaries

    pub fn tertiary(&self) -> DynamicColor {
        DynamicColor::builder("tertiary")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 90.0 } else { 25.0 };
                }
                if s.is_dark() { 80.0 } else { 40.0 }
            })
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(3.0, 4.5, 7.0, 7.0))
            .tone_delta_pair(|_| Some(tertiary_pair()))
            .build()
    }

    pub fn on_tertiary(&self) -> DynamicColor {
        DynamicColor::builder("on_tertiary")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 10.0 } else { 90.0 };
                }
                if s.is_dark() { 20.0 } else { 100.0 }
            })
            .background(|_| Some(ColorSpec2021.tertiary()))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn tertiary_container(&self) -> DynamicColor {
        DynamicColor::builder("tertiary_container")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 60.0 } else { 49.0 };
                }
                if !is_fidelity(s) {
                    return if s.is_dark() { 30.0 } else { 90.0 };
                }
                let proposed = s.tertiary_palette().hct(s.source_color_hct().tone());
                fix_if_disliked(proposed).tone()
            })
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
            .tone_delta_pair(|_| Some(tertiary_pair()))
            .build()
    }

    pub fn on_tertiary_container(&self) -> DynamicColor {
        DynamicColor::builder("on_tertiary_container")
            .palette(|s| s.tertiary_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 0.0 } else { 100.0 };
                }
                if !is_fidelity(s) {
                    return if s.is_dark() { 90.0 } else { 30.0 };
                }
                let container_tone = ColorSpec2021.tertiary_container().nominal_tone(s);
                DynamicColor::foreground_tone(container_tone, 4.5)
            })
            .background(|_| Some(ColorSpec2021.tertiary_container()))
            .contrast_curve(curve(3.0, 4.5, 7.0, 11.0))
            .build()
    }

    // Errors

    pub fn error(&self) -> DynamicColor {
        DynamicColor::builder("error")
            .palette(|s| s.error_palette().clone())
            .tone(by_mode(80.0, 40.0))
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(3.0, 4.5, 7.0, 7.0))
            .tone_delta_pair(|_| Some(error_pair()))
            .build()
    }

    pub fn on_error(&self) -> DynamicColor {
        DynamicColor::builder("on_error")
            .palette(|s| s.error_palette().clone())
            .tone(by_mode(20.0, 100.0))
            .background(|_| Some(ColorSpec2021.error()))
            .contrast_curve(curve(4.5, 7.0, 11.0, 21.0))
            .build()
    }

    pub fn error_container(&self) -> DynamicColor {
        DynamicColor::builder("error_container")
            .palette(|s| s.error_palette().clone())
            .tone(by_mode(30.0, 90.0))
            .is_background(true)
            .background(|s| Some(ColorSpec2021.highest_surface(s)))
            .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
            .tone_delta_pair(|_| Some(error_pair()))
            .build()
    }

    pub fn on_error_container(&self) -> DynamicColor {
        DynamicColor::builder("on_error_container")
            .palette(|s| s.error_palette().clone())
            .tone(|s| {
                if is_monochrome(s) {
                    return if s.is_dark() { 90.0 } else { 10.0 };
                }
                if s.is_dark() { 90.0 } else { 30.0 }
            })
            .background(|_| Some(ColorSpec2021.error_container()))
            .contrast_curve(curve(3.0, 4.5, 7.0, 11.0))
            .build()
    }

    // Fixed roles keep their tone in light and dark mode.

    pub fn primary_fixed(&self) -> DynamicColor {
        fixed(
            "primary_fixed",
            |s| s.primary_palette().clone(),
            (40.0, 90.0),
            primary_fixed_pair,
        )
    }

    pub fn primary_fixed_dim(&self) -> DynamicColor {
        fixed(
            "primary_fixed_dim",
            |s| s.primary_palette().clone(),
            (30.0, 80.0),
            primary_fixed_pair,
        )
    }

    pub fn on_primary_fixed(&self) -> DynamicColor {
        on_fixed(
            "on_primary_fixed",
            |s| s.primary_palette().clone(),
            (100.0, 10.0),
            || (ColorSpec2021.primary_fixed_dim(), ColorSpec2021.primary_fixed()),
            ContrastCurve::new(4.5, 7.0, 11.0, 21.0),
        )
    }

    pub fn on_primary_fixed_variant(&self) -> DynamicColor {
        on_fixed(
            "on_primary_fixed_variant",
            |s| s.primary_palette().clone(),
            (90.0, 30.0),
            || (ColorSpec2021.primary_fixed_dim(), ColorSpec2021.primary_fixed()),
            ContrastCurve::new(3.0, 4.5, 7.0, 11.0),
        )
    }

    pub fn secondary_fixed(&self) -> DynamicColor {
        fixed(
            "secondary_fixed",
            |s| s.secondary_palette().clone(),
            (80.0, 90.0),
            secondary_fixed_pair,
        )
    }

    pub fn secondary_fixed_dim(&self) -> DynamicColor {
        fixed(
            "secondary_fixed_dim",
            |s| s.secondary_palette().clone(),
            (70.0, 80.0),
            secondary_fixed_pair,
        )
    }

    pub fn on_secondary_fixed(&self) -> DynamicColor {
        on_fixed(
            "on_secondary_fixed",
            |s| s.secondary_palette().clone(),
            (10.0, 10.0),
            || (ColorSpec2021.secondary_fixed_dim(), ColorSpec2021.secondary_fixed()),
            ContrastCurve::new(4.5, 7.0, 11.0, 21.0),
        )
    }

    pub fn on_secondary_fixed_variant(&self) -> DynamicColor {
        on_fixed(
            "on_secondary_fixed_variant",
            |s| s.secondary_palette().clone(),
            (25.0, 30.0),
            || (ColorSpec2021.secondary_fixed_dim(), ColorSpec2021.secondary_fixed()),
            ContrastCurve::new(3.0, 4.5, 7.0, 11.0),
        )
    }

    pub fn tertiary_fixed(&self) -> DynamicColor {
        fixed(
            "tertiary_fixed",
            |s| s.tertiary_palette().clone(),
            (40.0, 90.0),
            tertiary_fixed_pair,
        )
    }

    pub fn tertiary_fixed_dim(&self) -> DynamicColor {
        fixed(
            "tertiary_fixed_dim",
            |s| s.tertiary_palette().clone(),
            (30.0, 80.0),
            tertiary_fixed_pair,
        )
    }

    pub fn on_tertiary_fixed(&self) -> DynamicColor {
        on_fixed(
            "on_tertiary_fixed",
            |s| s.tertiary_palette().clone(),
            (100.0, 10.0),
            || (ColorSpec2021.tertiary_fixed_dim(), ColorSpec2021.tertiary_fixed()),
            ContrastCurve::new(4.5, 7.0, 11.0, 21.0),
        )
    }

    pub fn on_tertiary_fixed_variant(&self) -> DynamicColor {
        on_fixed(
            "on_tertiary_fixed_variant",
            |s| s.tertiary_palette().clone(),
            (90.0, 30.0),
            || (ColorSpec2021.tertiary_fixed_dim(), ColorSpec2021.tertiary_fixed()),
            ContrastCurve::new(3.0, 4.5, 7.0, 11.0),
        )
    }

    // Android legacy roles

    pub fn control_activated(&self) -> DynamicColor {
        DynamicColor::builder("control_activated")
            .palette(|s| s.primary_palette().clone())
            .tone(by_mode(30.0, 90.0))
            .is_background(true)
            .build()
    }

    pub fn control_normal(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "control_normal",
            |s| s.neutral_variant_palette().clone(),
            by_mode(80.0, 30.0),
        )
    }

    pub fn control_highlight(&self) -> DynamicColor {
        DynamicColor::builder("control_highlight")
            .palette(|s| s.neutral_palette().clone())
            .tone(by_mode(100.0, 0.0))
            .opacity(|s| Some(if s.is_dark() { 0.20 } else { 0.12 }))
            .build()
    }

    pub fn text_primary_inverse(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "text_primary_inverse",
            |s| s.neutral_palette().clone(),
            by_mode(10.0, 90.0),
        )
    }

    pub fn text_secondary_and_tertiary_inverse(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "text_secondary_and_tertiary_inverse",
            |s| s.neutral_variant_palette().clone(),
            by_mode(30.0, 80.0),
        )
    }

    pub fn text_primary_inverse_disable_only(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "text_primary_inverse_disable_only",
            |s| s.neutral_palette().clone(),
            by_mode(10.0, 90.0),
        )
    }

    pub fn text_secondary_and_tertiary_inverse_disabled(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "text_secondary_and_tertiary_inverse_disabled",
            |s| s.neutral_palette().clone(),
            by_mode(10.0, 90.0),
        )
    }

    pub fn text_hint_inverse(&self) -> DynamicColor {
        DynamicColor::from_palette(
            "text_hint_inverse",
            |s| s.neutral_palette().clone(),
            by_mode(10.0, 90.0),
        )
    }
}

fn surface_container(name: &str, dark: ContrastCurve, light: ContrastCurve) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(|s| s.neutral_palette().clone())
        .tone(move |s| {
            let curve = if s.is_dark() { dark } else { light };
            curve.get(s.contrast_level())
        })
        .is_background(true)
        .build()
}

/// A fixed background role; `tones` is `(monochrome, other variants)`.
fn fixed(
    name: &str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    (monochrome, standard): (f64, f64),
    pair: fn() -> ToneDeltaPair,
) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(palette)
        .tone(move |s| if is_monochrome(s) { monochrome } else { standard })
        .is_background(true)
        .background(|s| Some(ColorSpec2021.highest_surface(s)))
        .contrast_curve(curve(1.0, 1.0, 3.0, 4.5))
        .tone_delta_pair(move |_| Some(pair()))
        .build()
}

/// A role drawn on both the fixed and the fixed-dim role of a palette.
fn on_fixed(
    name: &str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    (monochrome, standard): (f64, f64),
    backgrounds: fn() -> (DynamicColor, DynamicColor),
    contrast_curve: ContrastCurve,
) -> DynamicColor {
    DynamicColor::builder(name)
        .palette(palette)
        .tone(move |s| if is_monochrome(s) { monochrome } else { standard })
        .background(move |_| Some(backgrounds().0))
        .second_background(move |_| Some(backgrounds().1))
        .contrast_curve(move |_| Some(contrast_curve))
        .build()
}

fn primary_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.primary_container(),
        ColorSpec2021.primary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn secondary_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.secondary_container(),
        ColorSpec2021.secondary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn tertiary_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.tertiary_container(),
        ColorSpec2021.tertiary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn error_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.error_container(),
        ColorSpec2021.error(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn primary_fixed_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.primary_fixed(),
        ColorSpec2021.primary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

fn secondary_fixed_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.secondary_fixed(),
        ColorSpec2021.secondary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

fn tertiary_fixed_pair() -> ToneDeltaPair {
    ToneDeltaPair::new(
        ColorSpec2021.tertiary_fixed(),
        ColorSpec2021.tertiary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

impl ColorSpec2021 {
    /// Tone of a role paired with another: each side is first lifted to its
    /// own contrast requirement, then the farther role is pushed (or the
    /// nearer one pulled) until the pair is `delta` apart, and finally the
    /// pair is moved out of the 50..60 band.
    fn pair_tone(&self, scheme: &DynamicScheme, color: &DynamicColor, pair: &ToneDeltaPair) -> f64 {
        let is_dark = scheme.is_dark();
        let decreasing_contrast = scheme.contrast_level() < 0.0;
        let delta = pair.delta();
        let a_is_nearer = match pair.polarity() {
            TonePolarity::Nearer => true,
            TonePolarity::Lighter => !is_dark,
            TonePolarity::Darker => is_dark,
            _ => false,
        };
        let (nearer, farther) = if a_is_nearer {
            (pair.role_a(), pair.role_b())
        } else {
            (pair.role_b(), pair.role_a())
        };
        let am_nearer = color.name() == nearer.name();
        let expansion_dir = if is_dark { 1.0 } else { -1.0 };

        let mut n_tone = nearer.nominal_tone(scheme);
        let mut f_tone = farther.nominal_tone(scheme);

        if let (Some(bg), Some(n_curve), Some(f_curve)) = (
            color.background(scheme),
            nearer.contrast_curve(scheme),
            farther.contrast_curve(scheme),
        ) {
            let n_contrast = n_curve.get(scheme.contrast_level());
            let f_contrast = f_curve.get(scheme.contrast_level());
            let bg_tone = bg.get_tone(scheme);
            if decreasing_contrast || contrast::ratio_of_tones(bg_tone, n_tone) < n_contrast {
                n_tone = DynamicColor::foreground_tone(bg_tone, n_contrast);
            }
            if decreasing_contrast || contrast::ratio_of_tones(bg_tone, f_tone) < f_contrast {
                f_tone = DynamicColor::foreground_tone(bg_tone, f_contrast);
            }
        }

        if (f_tone - n_tone) * expansion_dir < delta {
            f_tone = (n_tone + delta * expansion_dir).clamp(0.0, 100.0);
            if (f_tone - n_tone) * expansion_dir < delta {
                n_tone = (f_tone - delta * expansion_dir).clamp(0.0, 100.0);
            }
        }

        let in_awkward_zone = |tone: f64| (50.0..60.0).contains(&tone);
        if in_awkward_zone(n_tone) || (in_awkward_zone(f_tone) && pair.stay_together()) {
            if expansion_dir > 0.0 {
                n_tone = 60.0;
                f_tone = f_tone.max(n_tone + delta * expansion_dir);
            } else {
                n_tone = 49.0;
                f_tone = f_tone.min(n_tone + delta * expansion_dir);
            }
        } else if in_awkward_zone(f_tone) {
            f_tone = if expansion_dir > 0.0 { 60.0 } else { 49.0 };
        }

        if am_nearer { n_tone } else { f_tone }
    }
}

impl ColorSpec for ColorSpec2021 {
    fn get_hct(&self, scheme: &DynamicScheme, color: &DynamicColor) -> Hct {
        let tone = self.get_tone(scheme, color);
        color.palette(scheme).hct(tone)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(role = %color.name()))]
    fn get_tone(&self, scheme: &DynamicScheme, color: &DynamicColor) -> f64 {
        if let Some(pair) = color.tone_delta_pair(scheme) {
            return self.pair_tone(scheme, color, &pair);
        }

        let mut answer = color.nominal_tone(scheme);
        let (Some(background), Some(contrast_curve)) =
            (color.background(scheme), color.contrast_curve(scheme))
        else {
            return answer;
        };

        let bg_tone = background.get_tone(scheme);
        let desired_ratio = contrast_curve.get(scheme.contrast_level());
        // Lower contrast levels always get the minimum tone that passes.
        if scheme.contrast_level() < 0.0
            || contrast::ratio_of_tones(bg_tone, answer) < desired_ratio
        {
            answer = DynamicColor::foreground_tone(bg_tone, desired_ratio);
        }

        if color.is_background() && (50.0..60.0).contains(&answer) {
            answer = if contrast::ratio_of_tones(49.0, bg_tone) >= desired_ratio {
                49.0
            } else {
                60.0
            };
        }

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
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> TonalPalette {
        let hue = source.hue();
        match variant {
            Variant::Content | Variant::Fidelity => {
                TonalPalette::from_hue_and_chroma(hue, source.chroma())
            }
            Variant::FruitSalad => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue - 50.0), 48.0)
            }
            Variant::Monochrome => TonalPalette::from_hue_and_chroma(hue, 0.0),
            Variant::Neutral => TonalPalette::from_hue_and_chroma(hue, 12.0),
            Variant::Rainbow => TonalPalette::from_hue_and_chroma(hue, 48.0),
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(hue, 36.0),
            Variant::Expressive => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 240.0), 40.0)
            }
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(hue, 200.0),
        }
    }

    fn secondary_palette(
        &self,
        variant: Variant,
        source: &Hct,
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> TonalPalette {
        let hue = source.hue();
        match variant {
            Variant::Content | Variant::Fidelity => TonalPalette::from_hue_and_chroma(
                hue,
                (source.chroma() - 32.0).max(source.chroma() * 0.5),
            ),
            Variant::FruitSalad => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue - 50.0), 36.0)
            }
            Variant::Monochrome => TonalPalette::from_hue_and_chroma(hue, 0.0),
            Variant::Neutral => TonalPalette::from_hue_and_chroma(hue, 8.0),
            Variant::Rainbow | Variant::TonalSpot => TonalPalette::from_hue_and_chroma(hue, 16.0),
            Variant::Expressive => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0],
                    &[45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0],
                ),
                24.0,
            ),
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0],
                    &[18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0],
                ),
                24.0,
            ),
        }
    }

    fn tertiary_palette(
        &self,
        variant: Variant,
        source: &Hct,
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> TonalPalette {
        let hue = source.hue();
        match variant {
            Variant::Content => {
                let analogous = TemperatureCache::new(source.clone()).analogous_with(3, 6);
                palette_of(&fix_if_disliked(analogous[2].clone()))
            }
            Variant::Fidelity => {
                let complement = TemperatureCache::new(source.clone()).complement().clone();
                palette_of(&fix_if_disliked(complement))
            }
            Variant::FruitSalad => TonalPalette::from_hue_and_chroma(hue, 36.0),
            Variant::Monochrome => TonalPalette::from_hue_and_chroma(hue, 0.0),
            Variant::Neutral => TonalPalette::from_hue_and_chroma(hue, 16.0),
            Variant::Rainbow | Variant::TonalSpot => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 60.0), 24.0)
            }
            Variant::Expressive => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0],
                    &[120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0],
                ),
                32.0,
            ),
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(
                DynamicScheme::rotated_hue(
                    source,
                    &[0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0],
                    &[35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0],
                ),
                32.0,
            ),
        }
    }

    fn neutral_palette(
        &self,
        variant: Variant,
        source: &Hct,
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> TonalPalette {
        let hue = source.hue();
        match variant {
            Variant::Content | Variant::Fidelity => {
                TonalPalette::from_hue_and_chroma(hue, source.chroma() / 8.0)
            }
            Variant::FruitSalad | Variant::Vibrant => TonalPalette::from_hue_and_chroma(hue, 10.0),
            Variant::Monochrome | Variant::Rainbow => TonalPalette::from_hue_and_chroma(hue, 0.0),
            Variant::Neutral => TonalPalette::from_hue_and_chroma(hue, 2.0),
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(hue, 6.0),
            Variant::Expressive => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 15.0), 8.0)
            }
        }
    }

    fn neutral_variant_palette(
        &self,
        variant: Variant,
        source: &Hct,
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> TonalPalette {
        let hue = source.hue();
        match variant {
            Variant::Content | Variant::Fidelity => {
                TonalPalette::from_hue_and_chroma(hue, source.chroma() / 8.0 + 4.0)
            }
            Variant::FruitSalad => TonalPalette::from_hue_and_chroma(hue, 16.0),
            Variant::Monochrome | Variant::Rainbow => TonalPalette::from_hue_and_chroma(hue, 0.0),
            Variant::Neutral => TonalPalette::from_hue_and_chroma(hue, 2.0),
            Variant::TonalSpot => TonalPalette::from_hue_and_chroma(hue, 8.0),
            Variant::Expressive => {
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 15.0), 12.0)
            }
            Variant::Vibrant => TonalPalette::from_hue_and_chroma(hue, 12.0),
        }
    }

    fn error_palette(
        &self,
        _variant: Variant,
        _source: &Hct,
        _is_dark: bool,
        _platform: Platform,
        _contrast_level: f64,
    ) -> Option<TonalPalette> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dynamic_scheme::DynamicSchemeBuilder, variant::SpecVersion};

    fn scheme(variant: Variant, is_dark: bool, contrast_level: f64) -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_argb(0xFF00_00FF)
            .variant(variant)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .spec_version(SpecVersion::Spec2021)
            .build()
            .expect("seed is set")
    }

    #[test]
    fn test_tonal_spot_light_reference_colors() {
        let s = scheme(Variant::TonalSpot, false, 0.0);
        let spec = ColorSpec2021;
        assert_eq!(spec.primary().get_argb(&s), 0xFF55_5992);
        assert_eq!(spec.surface().get_argb(&s), 0xFFFB_F8FF);
        assert_eq!(spec.on_secondary().get_argb(&s), 0xFFFF_FFFF);
    }

    #[test]
    fn test_tonal_spot_dark_primary() {
        let s = scheme(Variant::TonalSpot, true, 0.0);
        assert_eq!(ColorSpec2021.primary().get_argb(&s), 0xFFBE_C2FF);
    }

    #[test]
    fn test_on_primary_container_contrast() {
        let s = scheme(Variant::TonalSpot, false, 0.0);
        let spec = ColorSpec2021;
        let container = spec.primary_container().get_tone(&s);
        let on_container = spec.on_primary_container().get_tone(&s);
        assert!(contrast::ratio_of_tones(container, on_container) >= 4.5 - 0.05);
    }

    #[test]
    fn test_primary_pair_separation_at_high_contrast() {
        let s = scheme(Variant::TonalSpot, true, 1.0);
        let spec = ColorSpec2021;
        let primary = spec.primary().get_tone(&s);
        let container = spec.primary_container().get_tone(&s);
        assert!((primary - container).abs() >= 10.0 - 1e-9);
    }

    #[test]
    fn test_minimum_contrast_uses_low_anchor() {
        let s = scheme(Variant::TonalSpot, false, -1.0);
        let spec = ColorSpec2021;
        let bg_tone = spec.highest_surface(&s).get_tone(&s);
        let tone = spec.on_surface().get_tone(&s);
        let ratio = contrast::ratio_of_tones(bg_tone, tone);
        // 4.5 is the low anchor; the nominal tone 10 would reach far more.
        assert!(ratio >= 4.5 - 0.05);
        assert!(ratio < 7.0);
    }

    #[test]
    fn test_backgrounds_avoid_awkward_zone() {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for contrast_level in [-1.0, 0.0, 0.5, 1.0] {
                    let s = scheme(variant, is_dark, contrast_level);
                    let spec = ColorSpec2021;
                    for role in [
                        spec.primary(),
                        spec.primary_container(),
                        spec.secondary(),
                        spec.secondary_container(),
                        spec.tertiary(),
                        spec.tertiary_container(),
                        spec.error(),
                        spec.error_container(),
                    ] {
                        let tone = role.get_tone(&s);
                        assert!(
                            !(50.0..60.0).contains(&tone),
                            "{} resolved to {tone} for {variant} dark={is_dark} contrast={contrast_level}",
                            role.name()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_on_fixed_reads_on_both_backgrounds() {
        let s = scheme(Variant::TonalSpot, false, 0.0);
        let spec = ColorSpec2021;
        let fixed = spec.primary_fixed().get_tone(&s);
        let fixed_dim = spec.primary_fixed_dim().get_tone(&s);
        let on_fixed = spec.on_primary_fixed().get_tone(&s);
        assert!(contrast::ratio_of_tones(fixed, on_fixed) >= 7.0 - 0.05);
        assert!(contrast::ratio_of_tones(fixed_dim, on_fixed) >= 7.0 - 0.05);
    }

    #[test]
    fn test_fixed_tones_do_not_depend_on_mode() {
        let light = scheme(Variant::TonalSpot, false, 0.0);
        let dark = light.with_dark(true);
        let spec = ColorSpec2021;
        assert_eq!(
            spec.primary_fixed().get_tone(&light),
            spec.primary_fixed().get_tone(&dark)
        );
    }

    #[test]
    fn test_monochrome_primary_is_black_or_white() {
        let light = scheme(Variant::Monochrome, false, 0.0);
        let dark = scheme(Variant::Monochrome, true, 0.0);
        assert_eq!(ColorSpec2021.primary().get_tone(&light), 0.0);
        assert_eq!(ColorSpec2021.primary().get_tone(&dark), 100.0);
    }

    #[test]
    fn test_fidelity_container_starts_from_seed_tone() {
        let s = scheme(Variant::Fidelity, false, 0.0);
        let seed_tone = s.source_color_hct().tone();
        assert!((ColorSpec2021.primary_container().nominal_tone(&s) - seed_tone).abs() < 1e-9);
    }

    #[test]
    fn test_control_highlight_is_translucent() {
        let s = scheme(Variant::TonalSpot, false, 0.0);
        assert_eq!(ColorSpec2021.control_highlight().get_argb(&s) >> 24, 31);
    }

    #[test]
    fn test_find_desired_chroma_walks_toward_chroma() {
        let tone = find_desired_chroma_by_tone(282.0, 80.0, 90.0, true);
        assert!(tone < 90.0);
        assert_eq!(find_desired_chroma_by_tone(282.0, 5.0, 50.0, true), 50.0);
    }
}
