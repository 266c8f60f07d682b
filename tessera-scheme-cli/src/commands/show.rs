use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use material_color_utilities::utils::color::{blue_from_argb, green_from_argb, red_from_argb};
use tessera_dynamic_color::MaterialDynamicColors;

use crate::{output, scheme::SchemeArgs};

pub fn execute(args: &SchemeArgs) -> Result<()> {
    let scheme = args.build()?;
    let colors = MaterialDynamicColors::new();
    output::status("Resolving", scheme.to_string());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(vec![
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("").fg(Color::Cyan),
            Cell::new("Hex").fg(Color::Cyan),
            Cell::new("Tone").fg(Color::Cyan),
            Cell::new("Hue").fg(Color::Cyan),
            Cell::new("Chroma").fg(Color::Cyan),
        ]));

    for role in &colors {
        let argb = role.get_argb(&scheme);
        let hct = role.get_hct(&scheme);
        table.add_row(Row::from(vec![
            Cell::new(role.name()),
            Cell::new("    ").bg(Color::Rgb {
                r: red_from_argb(argb),
                g: green_from_argb(argb),
                b: blue_from_argb(argb),
            }),
            Cell::new(output::color_hex(argb)),
            Cell::new(format!("{:.1}", hct.tone())),
            Cell::new(format!("{:.1}", hct.hue())),
            Cell::new(format!("{:.1}", hct.chroma())),
        ]));
    }

    println!("{table}");
    Ok(())
}
