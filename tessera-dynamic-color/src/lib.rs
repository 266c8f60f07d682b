//! Material dynamic color for tessera.
//!
//! A [`DynamicScheme`] captures a seed color, a [`Variant`], light or dark
//! mode and a contrast level. A [`DynamicColor`] is a color role whose tone
//! is solved against that scheme so it keeps contrast with its backgrounds
//! and a fixed tonal distance from its pair. [`MaterialDynamicColors`] is the
//! catalog of the standard Material roles.
//!
//! # Example
//!
//! ```
//! use tessera_dynamic_color::{
//!     DynamicSchemeBuilder, MaterialDynamicColors, SpecVersion, Variant,
//! };
//!
//! let scheme = DynamicSchemeBuilder::default()
//!     .source_color_argb(0xFF42_85F4)
//!     .variant(Variant::TonalSpot)
//!     .is_dark(false)
//!     .spec_version(SpecVersion::Spec2021)
//!     .build()
//!     .unwrap();
//!
//! let colors = MaterialDynamicColors::new();
//! let primary = colors.primary().get_argb(&scheme);
//! let on_primary = colors.argb("on_primary", &scheme).unwrap();
//! assert_ne!(primary, on_primary);
//! assert_eq!(primary >> 24, 0xFF);
//! ```
//!
//! For UI code that just wants the resolved colors, see
//! [`MaterialColorScheme`].
#![deny(clippy::unwrap_used)]

pub mod color_spec;
mod contrast_curve;
mod dynamic_color;
mod dynamic_scheme;
mod error;
mod material_dynamic_colors;
mod theme;
mod tone_delta_pair;
mod variant;

pub use color_spec::{ColorSpec, ColorSpec2021, ColorSpec2025, color_spec};
pub use contrast_curve::ContrastCurve;
pub use dynamic_color::{DynamicColor, DynamicColorBuilder, SchemeFn};
pub use dynamic_scheme::{DynamicScheme, DynamicSchemeBuilder, SchemeId, SchemePalettes};
pub use error::DynamicColorError;
pub use material_dynamic_colors::MaterialDynamicColors;
pub use theme::MaterialColorScheme;
pub use tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
pub use variant::{Platform, SpecVersion, Variant};

pub use material_color_utilities;
