//! The tags a scheme is configured with: variant, platform and spec version.

use std::{fmt, str::FromStr};

use crate::error::DynamicColorError;

/// The visual style of a scheme.
///
/// Each variant picks its own hue and chroma for every palette; some of them
/// also change the nominal tones of individual roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// All colors are grayscale.
    Monochrome,
    /// Close to grayscale, a hint of chroma.
    Neutral,
    /// Pastel tokens, low chroma palettes.
    #[default]
    TonalSpot,
    /// Maximum chroma for the primary palette.
    Vibrant,
    /// A playful theme, the seed hue is not used as the primary hue.
    Expressive,
    /// Keeps the seed color's chroma and uses it for the primary container.
    Fidelity,
    /// Like [`Variant::Fidelity`] with analogous colors for the tertiary.
    Content,
    /// A playful theme with grayscale surfaces.
    Rainbow,
    /// A playful theme with the primary rotated away from the seed hue.
    FruitSalad,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Monochrome => "monochrome",
            Variant::Neutral => "neutral",
            Variant::TonalSpot => "tonal-spot",
            Variant::Vibrant => "vibrant",
            Variant::Expressive => "expressive",
            Variant::Fidelity => "fidelity",
            Variant::Content => "content",
            Variant::Rainbow => "rainbow",
            Variant::FruitSalad => "fruit-salad",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DynamicColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == normalized)
            .ok_or_else(|| DynamicColorError::UnknownVariant(s.to_owned()))
    }
}

/// The device class a scheme targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    Phone,
    Watch,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Phone => "phone",
            Platform::Watch => "watch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DynamicColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "phone" => Ok(Platform::Phone),
            "watch" => Ok(Platform::Watch),
            _ => Err(DynamicColorError::UnknownPlatform(s.to_owned())),
        }
    }
}

/// The rule set generation used to resolve roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecVersion {
    #[default]
    Spec2021,
    Spec2025,
}

impl SpecVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::Spec2021 => "2021",
            SpecVersion::Spec2025 => "2025",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecVersion {
    type Err = DynamicColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).trim_start_matches("spec-") {
            "2021" => Ok(SpecVersion::Spec2021),
            "2025" => Ok(SpecVersion::Spec2025),
            _ => Err(DynamicColorError::UnknownSpecVersion(s.to_owned())),
        }
    }
}

/// Lowercase, with `_` and spaces folded into `-`.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse_accepts_common_spellings() {
        assert_eq!("tonal-spot".parse::<Variant>(), Ok(Variant::TonalSpot));
        assert_eq!("TONAL_SPOT".parse::<Variant>(), Ok(Variant::TonalSpot));
        assert_eq!("Fruit Salad".parse::<Variant>(), Ok(Variant::FruitSalad));
        assert_eq!(
            "pastel".parse::<Variant>(),
            Err(DynamicColorError::UnknownVariant("pastel".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        for version in [SpecVersion::Spec2021, SpecVersion::Spec2025] {
            assert_eq!(version.to_string().parse::<SpecVersion>(), Ok(version));
        }
    }

    #[test]
    fn test_spec_version_and_platform_parse() {
        assert_eq!("SPEC_2025".parse::<SpecVersion>(), Ok(SpecVersion::Spec2025));
        assert_eq!("watch".parse::<Platform>(), Ok(Platform::Watch));
        assert!("tablet".parse::<Platform>().is_err());
        assert!("2030".parse::<SpecVersion>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Variant::default(), Variant::TonalSpot);
        assert_eq!(Platform::default(), Platform::Phone);
        assert_eq!(SpecVersion::default(), SpecVersion::Spec2021);
    }
}
