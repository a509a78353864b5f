//! Color value parsing for theme documents.
//!
//! Supports these color formats:
//!
//! - RGB hex: `"eed49f"` (exactly 6 digits, no leading `#`)
//! - Named colors: `red`, `dark_red`, `grey`, etc. (16 ANSI colors)
//! - Palette references: `palette:accent` or `p:accent`, resolved against the
//!   theme's `palette.colors` section during validation
//!
//! # Example
//!
//! ```rust
//! use lectern_theme::style::{ColorValue, NamedColor};
//!
//! assert_eq!(ColorValue::parse("eed49f").unwrap(), ColorValue::Rgb(0xee, 0xd4, 0x9f));
//! assert_eq!(ColorValue::parse("dark_red").unwrap(), ColorValue::Named(NamedColor::DarkRed));
//! assert!(ColorValue::parse("eed49").is_err());
//! ```

use std::fmt;

use console::Color;

use crate::util::rgb_to_ansi256;

/// Prefixes that mark a color as a palette reference.
const PALETTE_PREFIXES: &[&str] = &["palette:", "p:"];

/// A concrete, render-ready color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorValue {
    /// True color RGB.
    Rgb(u8, u8, u8),
    /// One of the 16 ANSI colors.
    Named(NamedColor),
}

/// The 16 ANSI colors, using the `dark_*` naming for the non-bright half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

impl NamedColor {
    /// Parses a color name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => NamedColor::Black,
            "dark_grey" | "dark_gray" => NamedColor::DarkGrey,
            "red" => NamedColor::Red,
            "dark_red" => NamedColor::DarkRed,
            "green" => NamedColor::Green,
            "dark_green" => NamedColor::DarkGreen,
            "yellow" => NamedColor::Yellow,
            "dark_yellow" => NamedColor::DarkYellow,
            "blue" => NamedColor::Blue,
            "dark_blue" => NamedColor::DarkBlue,
            "magenta" => NamedColor::Magenta,
            "dark_magenta" => NamedColor::DarkMagenta,
            "cyan" => NamedColor::Cyan,
            "dark_cyan" => NamedColor::DarkCyan,
            "white" => NamedColor::White,
            "grey" | "gray" => NamedColor::Grey,
            _ => return None,
        };
        Some(color)
    }

    /// Returns the canonical name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkGrey => "dark_grey",
            NamedColor::Red => "red",
            NamedColor::DarkRed => "dark_red",
            NamedColor::Green => "green",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::Yellow => "yellow",
            NamedColor::DarkYellow => "dark_yellow",
            NamedColor::Blue => "blue",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::Magenta => "magenta",
            NamedColor::DarkMagenta => "dark_magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::DarkCyan => "dark_cyan",
            NamedColor::White => "white",
            NamedColor::Grey => "grey",
        }
    }

    /// Converts to a `console::Color`.
    ///
    /// The `dark_*` half maps onto console's base colors; the bright half uses
    /// palette indices 8-15.
    pub fn to_console_color(self) -> Color {
        match self {
            NamedColor::Black => Color::Black,
            NamedColor::DarkRed => Color::Red,
            NamedColor::DarkGreen => Color::Green,
            NamedColor::DarkYellow => Color::Yellow,
            NamedColor::DarkBlue => Color::Blue,
            NamedColor::DarkMagenta => Color::Magenta,
            NamedColor::DarkCyan => Color::Cyan,
            NamedColor::Grey => Color::White,
            NamedColor::DarkGrey => Color::Color256(8),
            NamedColor::Red => Color::Color256(9),
            NamedColor::Green => Color::Color256(10),
            NamedColor::Yellow => Color::Color256(11),
            NamedColor::Blue => Color::Color256(12),
            NamedColor::Magenta => Color::Color256(13),
            NamedColor::Cyan => Color::Color256(14),
            NamedColor::White => Color::Color256(15),
        }
    }
}

/// A color as written in a theme document, before palette lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorReference<'a> {
    /// A color that needs no further lookup.
    Value(ColorValue),
    /// A reference to an entry of the theme palette.
    Palette(&'a str),
}

impl ColorValue {
    /// Parses a hex or named color.
    ///
    /// Palette references are rejected here; use [`ColorValue::parse_reference`]
    /// where they are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        match Self::parse_reference(s)? {
            ColorReference::Value(value) => Ok(value),
            ColorReference::Palette(name) => Err(format!(
                "palette reference '{}' is not allowed here",
                name
            )),
        }
    }

    /// Parses a color that may also be a palette reference.
    pub fn parse_reference(s: &str) -> Result<ColorReference<'_>, String> {
        for prefix in PALETTE_PREFIXES {
            if let Some(name) = s.strip_prefix(prefix) {
                if name.is_empty() {
                    return Err("empty palette reference".to_string());
                }
                return Ok(ColorReference::Palette(name));
            }
        }

        if let Some(named) = NamedColor::from_name(s) {
            return Ok(ColorReference::Value(ColorValue::Named(named)));
        }

        Self::parse_hex(s).map(ColorReference::Value)
    }

    /// Parses a 6 digit hex color code without a leading marker.
    pub fn parse_hex(hex: &str) -> Result<Self, String> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!(
                "invalid color '{}' (expected 6 hex digits or a color name)",
                hex
            ));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex: {}", hex))
        };
        Ok(ColorValue::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts this color to a `console::Color`.
    ///
    /// RGB colors are mapped onto the 256-color cube.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorValue::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
            ColorValue::Named(named) => named.to_console_color(),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(r, g, b) => write!(f, "{:02x}{:02x}{:02x}", r, g, b),
            ColorValue::Named(named) => f.write_str(named.name()),
        }
    }
}
