use std::fmt;
use std::str::FromStr;

use super::GridError;

/// Opaque RGB color. Cells never carry alpha; "transparent" is `Cell::Unset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA bytes with full alpha, as written into pixel buffers
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Parse a CSS color name from the palette or a `#rgb` / `#rrggbb` hex string
    pub fn parse(id: &str) -> Result<Self, GridError> {
        let trimmed = id.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| GridError::InvalidColor(id.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| GridError::InvalidColor(id.to_string()))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::rgb(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// CSS values for the named colors the palette offers
const NAMED_COLORS: &[(&str, Color)] = &[
    ("red", Color::rgb(255, 0, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("green", Color::rgb(0, 128, 0)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("pink", Color::rgb(255, 192, 203)),
    ("brown", Color::rgb(165, 42, 42)),
    ("black", Color::BLACK),
    ("aqua", Color::rgb(0, 255, 255)),
    ("white", Color::WHITE),
];

/// One palette swatch: the identifier shown to the user and its color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub label: &'static str,
    pub color: Color,
}

const fn entry(label: &'static str, color: Color) -> PaletteEntry {
    PaletteEntry { label, color }
}

/// The fixed drawing palette: eleven named colors followed by nineteen hex tones
pub const PALETTE: [PaletteEntry; 30] = [
    entry("red", Color::rgb(255, 0, 0)),
    entry("blue", Color::rgb(0, 0, 255)),
    entry("green", Color::rgb(0, 128, 0)),
    entry("yellow", Color::rgb(255, 255, 0)),
    entry("orange", Color::rgb(255, 165, 0)),
    entry("purple", Color::rgb(128, 0, 128)),
    entry("pink", Color::rgb(255, 192, 203)),
    entry("brown", Color::rgb(165, 42, 42)),
    entry("black", Color::BLACK),
    entry("aqua", Color::rgb(0, 255, 255)),
    entry("white", Color::WHITE),
    entry("#f44336", Color::rgb(0xf4, 0x43, 0x36)),
    entry("#e91e63", Color::rgb(0xe9, 0x1e, 0x63)),
    entry("#9c27b0", Color::rgb(0x9c, 0x27, 0xb0)),
    entry("#673ab7", Color::rgb(0x67, 0x3a, 0xb7)),
    entry("#3f51b5", Color::rgb(0x3f, 0x51, 0xb5)),
    entry("#2196f3", Color::rgb(0x21, 0x96, 0xf3)),
    entry("#03a9f4", Color::rgb(0x03, 0xa9, 0xf4)),
    entry("#00bcd4", Color::rgb(0x00, 0xbc, 0xd4)),
    entry("#009688", Color::rgb(0x00, 0x96, 0x88)),
    entry("#4caf50", Color::rgb(0x4c, 0xaf, 0x50)),
    entry("#8bc34a", Color::rgb(0x8b, 0xc3, 0x4a)),
    entry("#cddc39", Color::rgb(0xcd, 0xdc, 0x39)),
    entry("#ffeb3b", Color::rgb(0xff, 0xeb, 0x3b)),
    entry("#ffc107", Color::rgb(0xff, 0xc1, 0x07)),
    entry("#ff9800", Color::rgb(0xff, 0x98, 0x00)),
    entry("#ff5722", Color::rgb(0xff, 0x57, 0x22)),
    entry("#795548", Color::rgb(0x79, 0x55, 0x48)),
    entry("#9e9e9e", Color::rgb(0x9e, 0x9e, 0x9e)),
    entry("#607d8b", Color::rgb(0x60, 0x7d, 0x8b)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("black").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("Aqua").unwrap(), Color::rgb(0, 255, 255));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#ff5722").unwrap(), Color::rgb(0xff, 0x57, 0x22));
        assert_eq!(Color::parse("#FFF").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#0f0").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Color::parse("chartreuse"), Err(GridError::InvalidColor(_))));
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn test_palette_labels_parse_to_their_colors() {
        for swatch in PALETTE {
            assert_eq!(Color::parse(swatch.label).unwrap(), swatch.color, "{}", swatch.label);
        }
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Color::rgb(0x60, 0x7d, 0x8b).to_string(), "#607d8b");
    }
}
