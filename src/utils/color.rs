use ratatui::style::Color;

/// Convert a `#rrggbb` hex color string to a terminal color
///
/// Task and category colors are stored as hex strings in the user data;
/// anything unparsable falls back to the default blue.
#[must_use]
pub fn convert_hex_color(color: &str) -> Color {
    parse_hex_color(color).unwrap_or(Color::Rgb(65, 128, 255))
}

fn parse_hex_color(color: &str) -> Option<Color> {
    let hex = color.strip_prefix('#')?;
    // Length is in bytes; reject non-ASCII before slicing by byte index
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
