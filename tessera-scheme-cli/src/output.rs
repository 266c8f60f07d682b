use console::style;
use material_color_utilities::utils::{
    color::{alpha_from_argb, is_opaque},
    string::hex_from_argb,
};

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("note").blue().bold(), message.as_ref());
}

/// `#rrggbb`, or `#rrggbbaa` for translucent roles.
pub fn color_hex(argb: u32) -> String {
    if is_opaque(argb) {
        hex_from_argb(argb)
    } else {
        format!("{}{:02x}", hex_from_argb(argb), alpha_from_argb(argb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(color_hex(0xFF67_50A4), "#6750a4");
        assert_eq!(color_hex(0x1F67_50A4), "#6750a41f");
    }
}
