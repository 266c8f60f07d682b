//! Color roles whose every property is a function of the scheme.
//!
//! A [`DynamicColor`] is a recipe, not a color: given a [`DynamicScheme`] it
//! picks a palette and a nominal tone, then the active rule set adjusts that
//! tone for contrast against the role's backgrounds and any paired role.
//!
//! Roles can carry per-[`SpecVersion`] overrides. The base field set is used
//! unless the scheme's spec version has an override, in which case every
//! field comes from the override.
//!
//! # Configuration faults
//!
//! A role whose fields contradict each other (a contrast curve with nothing
//! to contrast against, for instance) is a bug in the role definition, not
//! bad input. [`DynamicColorBuilder::build`] and
//! [`DynamicColorBuilder::extend_spec_version`] panic on such roles.

use std::{fmt, num::NonZeroUsize, sync::Arc};

use lru::LruCache;
use parking_lot::Mutex;
use smallvec::SmallVec;
use material_color_utilities::{contrast, hct::Hct, palettes::TonalPalette};
use tracing::trace;

use crate::{
    color_spec::color_spec,
    contrast_curve::ContrastCurve,
    dynamic_scheme::{DynamicScheme, SchemeId},
    tone_delta_pair::ToneDeltaPair,
    variant::SpecVersion,
};

/// A function of the scheme, shared between clones of a role.
pub type SchemeFn<T> = Arc<dyn Fn(&DynamicScheme) -> T + Send + Sync>;

const HCT_CACHE_CAPACITY: usize = 4;

/// One complete set of role fields. A role has a base set and optionally one
/// set per spec version.
#[derive(Clone)]
struct ColorFields {
    palette: SchemeFn<TonalPalette>,
    tone: SchemeFn<f64>,
    chroma_multiplier: Option<SchemeFn<f64>>,
    background: Option<SchemeFn<Option<DynamicColor>>>,
    second_background: Option<SchemeFn<Option<DynamicColor>>>,
    contrast_curve: Option<SchemeFn<Option<ContrastCurve>>>,
    tone_delta_pair: Option<SchemeFn<Option<ToneDeltaPair>>>,
    opacity: Option<SchemeFn<Option<f64>>>,
}

impl ColorFields {
    fn validate(&self, name: &str) {
        validate_links(
            name,
            self.background.is_some(),
            self.second_background.is_some(),
            self.contrast_curve.is_some(),
        );
    }
}

fn validate_links(
    name: &str,
    has_background: bool,
    has_second_background: bool,
    has_contrast_curve: bool,
) {
    if !has_background && has_second_background {
        panic!("Color {name} has second_background defined, but background is not defined.");
    }
    if !has_background && has_contrast_curve {
        panic!("Color {name} has contrast_curve defined, but background is not defined.");
    }
    if has_background && !has_contrast_curve {
        panic!("Color {name} has background defined, but contrast_curve is not defined.");
    }
}

struct DynamicColorInner {
    name: String,
    is_background: bool,
    base: ColorFields,
    overrides: SmallVec<[(SpecVersion, ColorFields); 1]>,
    hct_cache: Mutex<LruCache<SchemeId, Hct>>,
}

/// A named color role resolved against a [`DynamicScheme`].
///
/// Cloning is cheap and clones share the resolved-color cache.
#[derive(Clone)]
pub struct DynamicColor {
    inner: Arc<DynamicColorInner>,
}

impl fmt::Debug for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicColor")
            .field("name", &self.inner.name)
            .field("is_background", &self.inner.is_background)
            .field(
                "overrides",
                &self
                    .inner
                    .overrides
                    .iter()
                    .map(|(version, _)| *version)
                    .collect::<SmallVec<[SpecVersion; 1]>>(),
            )
            .finish_non_exhaustive()
    }
}

impl DynamicColor {
    pub fn builder(name: impl Into<String>) -> DynamicColorBuilder {
        DynamicColorBuilder::new(name.into())
    }

    /// A role with no background and no contrast requirements.
    pub fn from_palette(
        name: impl Into<String>,
        palette: impl Fn(&DynamicScheme) -> TonalPalette + Send + Sync + 'static,
        tone: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self::builder(name).palette(palette).tone(tone).build()
    }

    /// A role that always resolves to `argb`'s hue, chroma and tone.
    pub fn from_argb(name: impl Into<String>, argb: u32) -> Self {
        let hct = Hct::from_int(argb);
        let (hue, chroma, tone) = (hct.hue(), hct.chroma(), hct.tone());
        Self::from_palette(
            name,
            move |_| TonalPalette::from_hue_and_chroma(hue, chroma),
            move |_| tone,
        )
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether this role is drawn behind other roles.
    pub fn is_background(&self) -> bool {
        self.inner.is_background
    }

    /// Spec versions with an override field set.
    pub fn spec_overrides(&self) -> impl Iterator<Item = SpecVersion> + '_ {
        self.inner.overrides.iter().map(|(version, _)| *version)
    }

    fn fields(&self, version: SpecVersion) -> &ColorFields {
        self.inner
            .overrides
            .iter()
            .find(|(v, _)| *v == version)
            .map_or(&self.inner.base, |(_, fields)| fields)
    }

    pub fn palette(&self, scheme: &DynamicScheme) -> TonalPalette {
        (self.fields(scheme.spec_version()).palette)(scheme)
    }

    /// The tone this role asks for before any contrast adjustment.
    pub fn nominal_tone(&self, scheme: &DynamicScheme) -> f64 {
        (self.fields(scheme.spec_version()).tone)(scheme)
    }

    /// Scale applied to the palette chroma; 1.0 when the role defines none.
    pub fn chroma_multiplier(&self, scheme: &DynamicScheme) -> f64 {
        self.fields(scheme.spec_version())
            .chroma_multiplier
            .as_ref()
            .map_or(1.0, |multiplier| multiplier(scheme))
    }

    pub fn background(&self, scheme: &DynamicScheme) -> Option<DynamicColor> {
        self.fields(scheme.spec_version())
            .background
            .as_ref()
            .and_then(|background| background(scheme))
    }

    pub fn second_background(&self, scheme: &DynamicScheme) -> Option<DynamicColor> {
        self.fields(scheme.spec_version())
            .second_background
            .as_ref()
            .and_then(|background| background(scheme))
    }

    pub fn contrast_curve(&self, scheme: &DynamicScheme) -> Option<ContrastCurve> {
        self.fields(scheme.spec_version())
            .contrast_curve
            .as_ref()
            .and_then(|curve| curve(scheme))
    }

    pub fn tone_delta_pair(&self, scheme: &DynamicScheme) -> Option<ToneDeltaPair> {
        self.fields(scheme.spec_version())
            .tone_delta_pair
            .as_ref()
            .and_then(|pair| pair(scheme))
    }

    /// Alpha in `[0, 1]`, or `None` for an opaque role.
    pub fn opacity(&self, scheme: &DynamicScheme) -> Option<f64> {
        self.fields(scheme.spec_version())
            .opacity
            .as_ref()
            .and_then(|opacity| opacity(scheme))
    }

    /// The resolved color as ARGB, with the role's opacity applied to alpha.
    pub fn get_argb(&self, scheme: &DynamicScheme) -> u32 {
        let argb = self.get_hct(scheme).to_int();
        match self.opacity(scheme) {
            Some(percentage) => {
                let alpha = (percentage * 255.0).round().clamp(0.0, 255.0) as u32;
                (argb & 0x00ff_ffff) | (alpha << 24)
            }
            None => argb,
        }
    }

    /// The resolved color, memoized per scheme.
    pub fn get_hct(&self, scheme: &DynamicScheme) -> Hct {
        if let Some(hct) = self.inner.hct_cache.lock().get(&scheme.id()).cloned() {
            return hct;
        }
        let answer = color_spec(scheme.spec_version()).get_hct(scheme, self);
        trace!(role = %self.inner.name, scheme = ?scheme.id(), hct = %answer, "resolved role");
        self.inner.hct_cache.lock().put(scheme.id(), answer.clone());
        answer
    }

    /// The resolved tone, after contrast and pairing adjustments.
    pub fn get_tone(&self, scheme: &DynamicScheme) -> f64 {
        color_spec(scheme.spec_version()).get_tone(scheme, self)
    }

    /// A builder holding every field set of this role, for deriving a new
    /// role from it.
    pub fn to_builder(&self) -> DynamicColorBuilder {
        let base = &self.inner.base;
        DynamicColorBuilder {
            name: self.inner.name.clone(),
            is_background: self.inner.is_background,
            palette: Some(base.palette.clone()),
            tone: Some(base.tone.clone()),
            chroma_multiplier: base.chroma_multiplier.clone(),
            background: base.background.clone(),
            second_background: base.second_background.clone(),
            contrast_curve: base.contrast_curve.clone(),
            tone_delta_pair: base.tone_delta_pair.clone(),
            opacity: base.opacity.clone(),
            overrides: self.inner.overrides.clone(),
        }
    }

    /// The tone closest to reaching `ratio` against `bg_tone`.
    ///
    /// Dark backgrounds favor a lighter foreground and light backgrounds a
    /// darker one, unless the other direction reaches the ratio and the
    /// favored one does not.
    pub fn foreground_tone(bg_tone: f64, ratio: f64) -> f64 {
        let lighter_tone = contrast::lighter_unsafe(bg_tone, ratio);
        let darker_tone = contrast::darker_unsafe(bg_tone, ratio);
        let lighter_ratio = contrast::ratio_of_tones(lighter_tone, bg_tone);
        let darker_ratio = contrast::ratio_of_tones(darker_tone, bg_tone);

        if Self::tone_prefers_light_foreground(bg_tone) {
            // Both fall short by about the same amount: stay light, so the
            // result does not flip between black and white as the ratio
            // creeps up.
            let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
                && lighter_ratio < ratio
                && darker_ratio < ratio;
            if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
                lighter_tone
            } else {
                darker_tone
            }
        } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
            darker_tone
        } else {
            lighter_tone
        }
    }

    /// Moves a tone that prefers a light foreground but would not get one
    /// down to 49.
    pub fn enable_light_foreground(tone: f64) -> f64 {
        if Self::tone_prefers_light_foreground(tone) && !Self::tone_allows_light_foreground(tone) {
            return 49.0;
        }
        tone
    }

    /// Tones below 60 read better with light text on top.
    pub fn tone_prefers_light_foreground(tone: f64) -> bool {
        tone.round() < 60.0
    }

    /// Tones up to 49 still reach 4.5 against white text.
    pub fn tone_allows_light_foreground(tone: f64) -> bool {
        tone.round() <= 49.0
    }
}

/// Builds a [`DynamicColor`].
///
/// Setters apply to every field set the builder holds, so a builder from
/// [`DynamicColor::to_builder`] replaces the field for all spec versions.
#[must_use]
pub struct DynamicColorBuilder {
    name: String,
    is_background: bool,
    palette: Option<SchemeFn<TonalPalette>>,
    tone: Option<SchemeFn<f64>>,
    chroma_multiplier: Option<SchemeFn<f64>>,
    background: Option<SchemeFn<Option<DynamicColor>>>,
    second_background: Option<SchemeFn<Option<DynamicColor>>>,
    contrast_curve: Option<SchemeFn<Option<ContrastCurve>>>,
    tone_delta_pair: Option<SchemeFn<Option<ToneDeltaPair>>>,
    opacity: Option<SchemeFn<Option<f64>>>,
    overrides: SmallVec<[(SpecVersion, ColorFields); 1]>,
}

impl DynamicColorBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            is_background: false,
            palette: None,
            tone: None,
            chroma_multiplier: None,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
            opacity: None,
            overrides: SmallVec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_background(mut self, is_background: bool) -> Self {
        self.is_background = is_background;
        self
    }

    pub fn palette(
        mut self,
        palette: impl Fn(&DynamicScheme) -> TonalPalette + Send + Sync + 'static,
    ) -> Self {
        let palette: SchemeFn<TonalPalette> = Arc::new(palette);
        for (_, fields) in &mut self.overrides {
            fields.palette = palette.clone();
        }
        self.palette = Some(palette);
        self
    }

    /// The nominal tone. Defaults to the background's resolved tone, or 50
    /// without a background.
    pub fn tone(mut self, tone: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static) -> Self {
        let tone: SchemeFn<f64> = Arc::new(tone);
        for (_, fields) in &mut self.overrides {
            fields.tone = tone.clone();
        }
        self.tone = Some(tone);
        self
    }

    pub fn chroma_multiplier(
        mut self,
        multiplier: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static,
    ) -> Self {
        let multiplier: SchemeFn<f64> = Arc::new(multiplier);
        for (_, fields) in &mut self.overrides {
            fields.chroma_multiplier = Some(multiplier.clone());
        }
        self.chroma_multiplier = Some(multiplier);
        self
    }

    pub fn background(
        mut self,
        background: impl Fn(&DynamicScheme) -> Option<DynamicColor> + Send + Sync + 'static,
    ) -> Self {
        let background: SchemeFn<Option<DynamicColor>> = Arc::new(background);
        for (_, fields) in &mut self.overrides {
            fields.background = Some(background.clone());
        }
        self.background = Some(background);
        self
    }

    pub fn second_background(
        mut self,
        background: impl Fn(&DynamicScheme) -> Option<DynamicColor> + Send + Sync + 'static,
    ) -> Self {
        let background: SchemeFn<Option<DynamicColor>> = Arc::new(background);
        for (_, fields) in &mut self.overrides {
            fields.second_background = Some(background.clone());
        }
        self.second_background = Some(background);
        self
    }

    pub fn contrast_curve(
        mut self,
        curve: impl Fn(&DynamicScheme) -> Option<ContrastCurve> + Send + Sync + 'static,
    ) -> Self {
        let curve: SchemeFn<Option<ContrastCurve>> = Arc::new(curve);
        for (_, fields) in &mut self.overrides {
            fields.contrast_curve = Some(curve.clone());
        }
        self.contrast_curve = Some(curve);
        self
    }

    pub fn tone_delta_pair(
        mut self,
        pair: impl Fn(&DynamicScheme) -> Option<ToneDeltaPair> + Send + Sync + 'static,
    ) -> Self {
        let pair: SchemeFn<Option<ToneDeltaPair>> = Arc::new(pair);
        for (_, fields) in &mut self.overrides {
            fields.tone_delta_pair = Some(pair.clone());
        }
        self.tone_delta_pair = Some(pair);
        self
    }

    pub fn opacity(
        mut self,
        opacity: impl Fn(&DynamicScheme) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        let opacity: SchemeFn<Option<f64>> = Arc::new(opacity);
        for (_, fields) in &mut self.overrides {
            fields.opacity = Some(opacity.clone());
        }
        self.opacity = Some(opacity);
        self
    }

    /// Uses `extended`'s fields whenever a scheme's spec version is
    /// `version`, keeping this builder's fields for every other version.
    ///
    /// # Panics
    ///
    /// When `extended` has a different name or background flag.
    pub fn extend_spec_version(mut self, version: SpecVersion, extended: &DynamicColor) -> Self {
        if self.name != extended.name() {
            panic!(
                "Attempting to extend color {} with color {} of different name for spec version {}.",
                self.name,
                extended.name(),
                version
            );
        }
        if self.is_background != extended.is_background() {
            panic!(
                "Attempting to extend color {} as a {} for spec version {}, but the base color is {}.",
                self.name,
                background_label(extended.is_background()),
                version,
                background_label(self.is_background)
            );
        }
        let fields = extended.fields(version).clone();
        match self.overrides.iter_mut().find(|(v, _)| *v == version) {
            Some((_, slot)) => *slot = fields,
            None => self.overrides.push((version, fields)),
        }
        self
    }

    /// # Panics
    ///
    /// When no palette is set, or the background, second background and
    /// contrast curve are inconsistent.
    pub fn build(self) -> DynamicColor {
        let Some(palette) = self.palette else {
            panic!("Color {} has no palette defined.", self.name);
        };
        validate_links(
            &self.name,
            self.background.is_some(),
            self.second_background.is_some(),
            self.contrast_curve.is_some(),
        );
        for (_, fields) in &self.overrides {
            fields.validate(&self.name);
        }
        let tone = self
            .tone
            .unwrap_or_else(|| initial_tone_from_background(self.background.clone()));
        let capacity =
            NonZeroUsize::new(HCT_CACHE_CAPACITY).expect("hct cache capacity must be > 0");
        DynamicColor {
            inner: Arc::new(DynamicColorInner {
                name: self.name,
                is_background: self.is_background,
                base: ColorFields {
                    palette,
                    tone,
                    chroma_multiplier: self.chroma_multiplier,
                    background: self.background,
                    second_background: self.second_background,
                    contrast_curve: self.contrast_curve,
                    tone_delta_pair: self.tone_delta_pair,
                    opacity: self.opacity,
                },
                overrides: self.overrides,
                hct_cache: Mutex::new(LruCache::new(capacity)),
            }),
        }
    }
}

fn background_label(is_background: bool) -> &'static str {
    if is_background {
        "background"
    } else {
        "foreground"
    }
}

fn initial_tone_from_background(
    background: Option<SchemeFn<Option<DynamicColor>>>,
) -> SchemeFn<f64> {
    match background {
        Some(background) => Arc::new(move |scheme| {
            background(scheme).map_or(50.0, |background| background.get_tone(scheme))
        }),
        None => Arc::new(|_| 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dynamic_scheme::DynamicSchemeBuilder,
        tone_delta_pair::{DeltaConstraint, TonePolarity},
        variant::Variant,
    };

    fn scheme(version: SpecVersion, is_dark: bool, contrast_level: f64) -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_argb(0xFF00_00FF)
            .variant(Variant::TonalSpot)
            .is_dark(is_dark)
            .contrast_level(contrast_level)
            .spec_version(version)
            .build()
            .expect("seed is set")
    }

    fn surface() -> DynamicColor {
        DynamicColor::builder("test_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(|s| if s.is_dark() { 10.0 } else { 95.0 })
            .is_background(true)
            .build()
    }

    #[test]
    fn test_from_argb_resolves_to_its_color() {
        let color = DynamicColor::from_argb("pinned", 0xFF67_50A4);
        let scheme = scheme(SpecVersion::Spec2021, false, 0.0);
        assert_eq!(color.get_argb(&scheme), 0xFF67_50A4);
        assert!((color.get_tone(&scheme) - Hct::from_int(0xFF67_50A4).tone()).abs() < 1e-9);
    }

    #[test]
    fn test_no_background_keeps_nominal_tone_at_any_contrast() {
        let color = DynamicColor::from_palette("plain", |s| s.primary_palette().clone(), |_| 55.0);
        for contrast_level in [-1.0, 0.0, 0.5, 1.0] {
            for version in [SpecVersion::Spec2021, SpecVersion::Spec2025] {
                let scheme = scheme(version, false, contrast_level);
                assert_eq!(color.get_tone(&scheme), 55.0);
            }
        }
    }

    #[test]
    fn test_tone_defaults_to_background_tone() {
        let color = DynamicColor::builder("follower")
            .palette(|s| s.primary_palette().clone())
            .background(|_| Some(surface()))
            .contrast_curve(|_| Some(ContrastCurve::new(1.0, 1.0, 1.0, 1.0)))
            .build();
        let light = scheme(SpecVersion::Spec2021, false, 0.0);
        assert!((color.nominal_tone(&light) - 95.0).abs() < 1e-9);
        let dark = scheme(SpecVersion::Spec2021, true, 0.0);
        assert!((color.nominal_tone(&dark) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_foreground_meets_contrast_against_background() {
        let color = DynamicColor::builder("on_test_surface")
            .palette(|s| s.neutral_palette().clone())
            .tone(|_| 80.0)
            .background(|_| Some(surface()))
            .contrast_curve(|_| Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)))
            .build();
        let scheme = scheme(SpecVersion::Spec2021, false, 0.0);
        let tone = color.get_tone(&scheme);
        assert!(contrast::ratio_of_tones(tone, 95.0) >= 4.5 - 0.05);
    }

    #[test]
    fn test_opacity_sets_alpha() {
        let color = DynamicColor::builder("veil")
            .palette(|s| s.neutral_palette().clone())
            .tone(|_| 0.0)
            .opacity(|_| Some(0.2))
            .build();
        let scheme = scheme(SpecVersion::Spec2021, false, 0.0);
        assert_eq!(color.get_argb(&scheme) >> 24, 51);
    }

    #[test]
    fn test_chroma_multiplier_defaults_to_one() {
        let color = DynamicColor::from_palette("plain", |s| s.primary_palette().clone(), |_| 50.0);
        let scheme = scheme(SpecVersion::Spec2025, false, 0.0);
        assert_eq!(color.chroma_multiplier(&scheme), 1.0);
    }

    #[test]
    fn test_spec_override_is_selected_by_scheme_version() {
        let base = DynamicColor::from_palette("role", |s| s.primary_palette().clone(), |_| 30.0);
        let newer = DynamicColor::from_palette("role", |s| s.primary_palette().clone(), |_| 70.0);
        let color = base
            .to_builder()
            .extend_spec_version(SpecVersion::Spec2025, &newer)
            .build();

        assert_eq!(color.get_tone(&scheme(SpecVersion::Spec2021, false, 0.0)), 30.0);
        assert_eq!(color.get_tone(&scheme(SpecVersion::Spec2025, false, 0.0)), 70.0);
        assert_eq!(
            color.spec_overrides().collect::<Vec<_>>(),
            [SpecVersion::Spec2025]
        );
    }

    #[test]
    fn test_setter_after_extension_applies_to_every_version() {
        let base = DynamicColor::from_palette("role", |s| s.primary_palette().clone(), |_| 30.0);
        let newer = DynamicColor::from_palette("role", |s| s.primary_palette().clone(), |_| 70.0);
        let renamed = base
            .to_builder()
            .extend_spec_version(SpecVersion::Spec2025, &newer)
            .build()
            .to_builder()
            .name("alias")
            .tone(|_| 12.0)
            .build();

        assert_eq!(renamed.name(), "alias");
        assert_eq!(renamed.get_tone(&scheme(SpecVersion::Spec2021, false, 0.0)), 12.0);
        assert_eq!(renamed.get_tone(&scheme(SpecVersion::Spec2025, false, 0.0)), 12.0);
    }

    #[test]
    #[should_panic(expected = "of different name")]
    fn test_extension_rejects_other_name() {
        let base = DynamicColor::from_palette("a", |s| s.primary_palette().clone(), |_| 30.0);
        let other = DynamicColor::from_palette("b", |s| s.primary_palette().clone(), |_| 70.0);
        let _ = base
            .to_builder()
            .extend_spec_version(SpecVersion::Spec2025, &other);
    }

    #[test]
    #[should_panic(expected = "base color is foreground")]
    fn test_extension_rejects_other_background_flag() {
        let base = DynamicColor::from_palette("a", |s| s.primary_palette().clone(), |_| 30.0);
        let other = DynamicColor::builder("a")
            .palette(|s| s.primary_palette().clone())
            .is_background(true)
            .build();
        let _ = base
            .to_builder()
            .extend_spec_version(SpecVersion::Spec2025, &other);
    }

    #[test]
    #[should_panic(expected = "contrast_curve is not defined")]
    fn test_background_requires_contrast_curve() {
        let _ = DynamicColor::builder("broken")
            .palette(|s| s.primary_palette().clone())
            .background(|_| Some(surface()))
            .build();
    }

    #[test]
    #[should_panic(expected = "background is not defined")]
    fn test_second_background_requires_background() {
        let _ = DynamicColor::builder("broken")
            .palette(|s| s.primary_palette().clone())
            .second_background(|_| Some(surface()))
            .build();
    }

    #[test]
    #[should_panic(expected = "contrast_curve defined, but background")]
    fn test_contrast_curve_requires_background() {
        let _ = DynamicColor::builder("broken")
            .palette(|s| s.primary_palette().clone())
            .contrast_curve(|_| Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)))
            .build();
    }

    #[test]
    fn test_hct_cache_is_keyed_by_scheme() {
        let color = DynamicColor::from_palette(
            "mode_dependent",
            |s| s.primary_palette().clone(),
            |s| if s.is_dark() { 80.0 } else { 40.0 },
        );
        let light = scheme(SpecVersion::Spec2021, false, 0.0);
        let dark = light.with_dark(true);
        let light_hct = color.get_hct(&light);
        let dark_hct = color.get_hct(&dark);
        assert_ne!(light_hct, dark_hct);
        assert_eq!(color.get_hct(&light), light_hct);
        assert_eq!(color.get_hct(&light.clone()), light_hct);
    }

    #[test]
    fn test_foreground_tone_prefers_light_on_dark() {
        let tone = DynamicColor::foreground_tone(20.0, 4.5);
        assert!(tone > 20.0);
        assert!(contrast::ratio_of_tones(tone, 20.0) >= 4.5);

        let tone = DynamicColor::foreground_tone(90.0, 4.5);
        assert!(tone < 90.0);
        assert!(contrast::ratio_of_tones(tone, 90.0) >= 4.5);
    }

    #[test]
    fn test_light_foreground_thresholds() {
        assert!(DynamicColor::tone_prefers_light_foreground(59.4));
        assert!(!DynamicColor::tone_prefers_light_foreground(59.5));
        assert!(DynamicColor::tone_allows_light_foreground(49.4));
        assert!(!DynamicColor::tone_allows_light_foreground(49.5));
        assert_eq!(DynamicColor::enable_light_foreground(55.0), 49.0);
        assert_eq!(DynamicColor::enable_light_foreground(40.0), 40.0);
        assert_eq!(DynamicColor::enable_light_foreground(70.0), 70.0);
    }

    #[test]
    fn test_pair_keeps_roles_apart() {
        fn container() -> DynamicColor {
            DynamicColor::builder("pair_container")
                .palette(|s| s.primary_palette().clone())
                .tone(|_| 60.0)
                .is_background(true)
                .tone_delta_pair(|_| {
                    Some(ToneDeltaPair::with_constraint(
                        container(),
                        accent(),
                        10.0,
                        TonePolarity::Darker,
                        DeltaConstraint::Farther,
                    ))
                })
                .build()
        }
        fn accent() -> DynamicColor {
            DynamicColor::builder("pair_accent")
                .palette(|s| s.primary_palette().clone())
                .tone(|_| 65.0)
                .is_background(true)
                .build()
        }

        let scheme = scheme(SpecVersion::Spec2025, false, 0.0);
        let container_tone = container().get_tone(&scheme);
        let accent_tone = accent().get_tone(&scheme);
        assert!(accent_tone - container_tone >= 10.0 - 1e-9);
    }
}
