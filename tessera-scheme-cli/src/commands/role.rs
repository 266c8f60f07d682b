use anyhow::{Context, Result};
use console::style;
use material_color_utilities::contrast;
use tessera_dynamic_color::{MaterialDynamicColors, SpecVersion};

use super::normalize_role_name;
use crate::{output, scheme::SchemeArgs};

pub fn execute(name: &str, args: &SchemeArgs) -> Result<()> {
    let scheme = args.build()?;
    let colors = MaterialDynamicColors::new();
    let role = colors
        .get(&normalize_role_name(name))
        .with_context(|| format!("No color role matches `{name}`"))?;

    let argb = role.get_argb(&scheme);
    let hct = role.get_hct(&scheme);
    println!("{}", style(role.name()).bold());
    println!("  hex     {}", output::color_hex(argb));
    println!("  tone    {:.1}", hct.tone());
    println!("  hue     {:.1}", hct.hue());
    println!("  chroma  {:.1}", hct.chroma());

    if let Some(background) = role.background(&scheme) {
        let ratio = contrast::ratio_of_tones(hct.tone(), background.get_tone(&scheme));
        println!("  on      {} ({ratio:.2}:1)", background.name());
    }
    if let Some(pair) = role.tone_delta_pair(&scheme) {
        let partner = if pair.role_a().name() == role.name() {
            pair.role_b()
        } else {
            pair.role_a()
        };
        println!(
            "  paired  {} (delta {:.0}, {:?})",
            partner.name(),
            pair.delta(),
            pair.polarity()
        );
    }
    if role.spec_overrides().next().is_some() && scheme.spec_version() == SpecVersion::Spec2021 {
        output::note(format!(
            "`{}` has 2025 rules; this scheme resolves it with the 2021 rules",
            role.name()
        ));
    }
    Ok(())
}
