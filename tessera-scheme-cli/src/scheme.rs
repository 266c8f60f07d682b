use anyhow::{Context, Result, bail};
use clap::Args;
use material_color_utilities::utils::string::argb_from_hex;
use tessera_dynamic_color::{DynamicScheme, DynamicSchemeBuilder, Platform, SpecVersion, Variant};

/// Flags describing the scheme to generate.
#[derive(Args, Debug, Clone)]
pub struct SchemeArgs {
    /// Seed color as hex, e.g. `#6750A4`
    #[arg(short, long)]
    pub seed: String,
    /// Scheme variant (monochrome, neutral, tonal-spot, vibrant, expressive,
    /// fidelity, content, rainbow, fruit-salad)
    #[arg(long, default_value = "tonal-spot")]
    pub variant: String,
    /// Generate the dark scheme
    #[arg(long)]
    pub dark: bool,
    /// Contrast level from -1 (reduced) to 1 (high)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub contrast: f64,
    /// Target platform (phone or watch)
    #[arg(long, default_value = "phone")]
    pub platform: String,
    /// Rule set generation (2021 or 2025)
    #[arg(long, default_value = "2021")]
    pub spec: String,
}

impl SchemeArgs {
    pub fn build(&self) -> Result<DynamicScheme> {
        let seed = argb_from_hex(&self.seed)
            .with_context(|| format!("Invalid seed color `{}`", self.seed))?;
        let variant: Variant = self.variant.parse().context("Invalid --variant")?;
        let platform: Platform = self.platform.parse().context("Invalid --platform")?;
        let spec_version: SpecVersion = self.spec.parse().context("Invalid --spec")?;
        if !(-1.0..=1.0).contains(&self.contrast) {
            bail!("Contrast level {} is outside [-1, 1]", self.contrast);
        }

        let scheme = DynamicSchemeBuilder::default()
            .source_color_argb(seed)
            .variant(variant)
            .is_dark(self.dark)
            .contrast_level(self.contrast)
            .platform(platform)
            .spec_version(spec_version)
            .build()
            .context("Failed to build the scheme")?;
        tracing::debug!(%scheme, "scheme generated");
        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(seed: &str) -> SchemeArgs {
        SchemeArgs {
            seed: seed.to_string(),
            variant: "vibrant".to_string(),
            dark: true,
            contrast: 0.5,
            platform: "watch".to_string(),
            spec: "2025".to_string(),
        }
    }

    #[test]
    fn test_build_scheme_from_flags() {
        let scheme = args("#6750A4").build().expect("valid flags");
        assert_eq!(scheme.variant(), Variant::Vibrant);
        assert!(scheme.is_dark());
        assert_eq!(scheme.platform(), Platform::Watch);
        assert_eq!(scheme.spec_version(), SpecVersion::Spec2025);
        assert_eq!(scheme.source_color_argb(), 0xFF67_50A4);
    }

    #[test]
    fn test_rejects_bad_flags() {
        assert!(args("#12345").build().is_err());

        let mut bad_contrast = args("#6750A4");
        bad_contrast.contrast = 2.0;
        assert!(bad_contrast.build().is_err());

        let mut bad_variant = args("#6750A4");
        bad_variant.variant = "pastel".to_string();
        assert!(bad_variant.build().is_err());
    }
}
