use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const NAMED_COLORS: [(&str, Rgb); 16] = [
    ("black", Rgb::BLACK),
    ("maroon", Rgb::MAROON),
    ("green", Rgb::GREEN),
    ("olive", Rgb::OLIVE),
    ("navy", Rgb::NAVY),
    ("purple", Rgb::PURPLE),
    ("teal", Rgb::TEAL),
    ("silver", Rgb::SILVER),
    ("gray", Rgb::GRAY),
    ("red", Rgb::RED),
    ("lime", Rgb::LIME),
    ("yellow", Rgb::YELLOW),
    ("blue", Rgb::BLUE),
    ("fuchsia", Rgb::FUCHSIA),
    ("aqua", Rgb::AQUA),
    ("white", Rgb::WHITE),
];

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const MAROON: Rgb = Rgb::new(128, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const OLIVE: Rgb = Rgb::new(128, 128, 0);
    pub const NAVY: Rgb = Rgb::new(0, 0, 128);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const TEAL: Rgb = Rgb::new(0, 128, 128);
    pub const SILVER: Rgb = Rgb::new(192, 192, 192);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const FUCHSIA: Rgb = Rgb::new(255, 0, 255);
    pub const AQUA: Rgb = Rgb::new(0, 255, 255);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed 0xRRGGBB value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Failure to parse a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` or one of the sixteen basic color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix('#') {
            if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseColorError::InvalidHex(s.to_string()));
            }
            return u32::from_str_radix(digits, 16)
                .map(Rgb::hex)
                .map_err(|_| ParseColorError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| ParseColorError::UnknownName(s.to_string()))
    }
}
