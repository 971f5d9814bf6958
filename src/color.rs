//! Colour annotations for cell text and borders.
//!
//! A [`Color`] is only ever turned into an SGR parameter string; there is no
//! blending or palette conversion. Colours can be built from constants, a
//! 256-colour palette index, RGB components, or parsed from text. Text made
//! of digits and semicolons is SGR, so `"31"` is red and a palette entry is
//! written `"38;5;N"`:
//!
//! ```
//! use gridtable::Color;
//!
//! let red: Color = "red".parse().unwrap();
//! assert_eq!(red, Color::RED);
//!
//! let orange: Color = "#ff8800".parse().unwrap();
//! assert_eq!(orange, Color::Rgb(0xff, 0x88, 0x00));
//!
//! // Anything made of digits and semicolons is passed through as raw SGR.
//! let bold_red: Color = "1;31".parse().unwrap();
//! assert_eq!(bold_red.sgr(), "1;31");
//!
//! let orange: Color = "38;5;208".parse().unwrap();
//! assert_eq!(orange, Color::Indexed(208));
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Foreground colour of a cell's text or border glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 basic ANSI colours (0-7 normal, 8-15 bright). Values
    /// from 16 up select the same entry of the 256-colour palette.
    Ansi(u8),
    /// Entry of the 256-colour palette.
    Indexed(u8),
    /// 24-bit colour.
    Rgb(u8, u8, u8),
    /// Raw SGR parameters, emitted verbatim (e.g. `"1;31"`).
    Sgr(String),
}

const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Color {
    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(1);
    pub const GREEN: Self = Self::Ansi(2);
    pub const YELLOW: Self = Self::Ansi(3);
    pub const BLUE: Self = Self::Ansi(4);
    pub const MAGENTA: Self = Self::Ansi(5);
    pub const CYAN: Self = Self::Ansi(6);
    pub const WHITE: Self = Self::Ansi(7);

    /// Parse a hex colour string (`"#FF0000"`, `"FF0000"` or `"#F00"`).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::Rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Look up a named colour, accepting a `bright-` (or `bright_`) prefix.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let (bright, base) = match lower
            .strip_prefix("bright-")
            .or_else(|| lower.strip_prefix("bright_"))
        {
            Some(rest) => (true, rest),
            None => (false, lower.as_str()),
        };
        let index = NAMES.iter().position(|n| *n == base)? as u8;
        Some(Self::Ansi(if bright { index + 8 } else { index }))
    }

    /// SGR parameters selecting this colour as foreground.
    #[must_use]
    pub fn sgr(&self) -> String {
        match self {
            Self::Ansi(n) if *n < 8 => format!("{}", 30 + n),
            Self::Ansi(n) if *n < 16 => format!("{}", 90 + (n - 8)),
            Self::Ansi(n) | Self::Indexed(n) => format!("38;5;{n}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
            Self::Sgr(raw) => raw.clone(),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        if let Some(color) = Self::from_name(s) {
            return Ok(color);
        }
        if s.starts_with('#') {
            return Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }
        if let Some(index) = s.strip_prefix("38;5;").and_then(|n| n.parse::<u8>().ok()) {
            return Ok(Self::Indexed(index));
        }
        if s.chars().all(|c| c.is_ascii_digit() || c == ';') {
            return Ok(Self::Sgr(s.to_string()));
        }
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi(n) if *n < 8 => f.write_str(NAMES[*n as usize]),
            Self::Ansi(n) if *n < 16 => write!(f, "bright-{}", NAMES[(n - 8) as usize]),
            Self::Ansi(n) | Self::Indexed(n) => write!(f, "38;5;{n}"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Sgr(raw) => f.write_str(raw),
        }
    }
}
