use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Serialize, Serializer, ser::SerializeMap};
use material_color_utilities::utils::string::hex_from_argb;
use tessera_dynamic_color::{DynamicScheme, MaterialDynamicColors};

use crate::{ExportFormat, output, scheme::SchemeArgs};

#[derive(Serialize)]
struct SchemeExport<'a> {
    seed: String,
    variant: &'static str,
    dark: bool,
    contrast_level: f64,
    platform: &'static str,
    spec_version: &'static str,
    colors: RoleColors<'a>,
}

/// Role name to color, in catalog order.
struct RoleColors<'a>(Vec<(&'a str, String)>);

impl Serialize for RoleColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, hex) in &self.0 {
            map.serialize_entry(name, hex)?;
        }
        map.end()
    }
}

pub fn execute(args: &SchemeArgs, format: ExportFormat, output_path: Option<&Path>) -> Result<()> {
    let scheme = args.build()?;
    let colors = MaterialDynamicColors::new();
    let rendered = match format {
        ExportFormat::Json => render_json(&colors, &scheme)?,
        ExportFormat::Css => render_css(&colors, &scheme),
    };

    match output_path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::status("Exported", format!("{} roles to {}", colors.len(), path.display()));
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn resolve<'a>(colors: &'a MaterialDynamicColors, scheme: &DynamicScheme) -> RoleColors<'a> {
    RoleColors(
        colors
            .iter()
            .map(|role| (role.name(), output::color_hex(role.get_argb(scheme))))
            .collect(),
    )
}

fn render_json(colors: &MaterialDynamicColors, scheme: &DynamicScheme) -> Result<String> {
    let export = SchemeExport {
        seed: hex_from_argb(scheme.source_color_argb()),
        variant: scheme.variant().as_str(),
        dark: scheme.is_dark(),
        contrast_level: scheme.contrast_level(),
        platform: scheme.platform().as_str(),
        spec_version: scheme.spec_version().as_str(),
        colors: resolve(colors, scheme),
    };
    let mut json = serde_json::to_string_pretty(&export).context("Failed to serialize scheme")?;
    json.push('\n');
    Ok(json)
}

fn render_css(colors: &MaterialDynamicColors, scheme: &DynamicScheme) -> String {
    let mut css = format!("/* {scheme} */\n:root {{\n");
    for (name, hex) in resolve(colors, scheme).0 {
        let _ = writeln!(css, "  --md-sys-color-{}: {hex};", name.replace('_', "-"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use tessera_dynamic_color::{DynamicSchemeBuilder, SpecVersion};

    use super::*;

    fn scheme() -> DynamicScheme {
        DynamicSchemeBuilder::default()
            .source_color_argb(0xFF67_50A4)
            .spec_version(SpecVersion::Spec2025)
            .build()
            .expect("seed is set")
    }

    #[test]
    fn test_json_keeps_catalog_order() {
        let colors = MaterialDynamicColors::new();
        let json = render_json(&colors, &scheme()).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["seed"], "#6750a4");
        assert_eq!(value["spec_version"], "2025");
        let roles = value["colors"].as_object().expect("colors object");
        assert_eq!(roles.len(), colors.len());

        let primary = json.find("\"primary\"").expect("primary exported");
        let on_primary = json.find("\"on_primary\"").expect("on_primary exported");
        let background = json.find("\"background\"").expect("background exported");
        assert!(background < primary);
        assert!(primary < on_primary);
    }

    #[test]
    fn test_css_custom_properties() {
        let colors = MaterialDynamicColors::new();
        let scheme = scheme();
        let css = render_css(&colors, &scheme);
        let expected = format!(
            "  --md-sys-color-primary-container: {};",
            output::color_hex(colors.primary_container().get_argb(&scheme))
        );
        assert!(css.contains(&expected));
        assert!(css.starts_with("/* Scheme: "));
        assert!(css.trim_end().ends_with('}'));
    }
}
