//! Color value type for theme roles

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorParseError {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

/// RGBA color, one byte per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            3 | 4 => {
                let mut bytes = [0u8; 4];
                for (i, c) in hex.chars().enumerate() {
                    bytes[i] = parse_hex_digit(c)? * 17;
                }
                if hex.len() == 3 {
                    Ok(Self::rgb(bytes[0], bytes[1], bytes[2]))
                } else {
                    Ok(Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3]))
                }
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::rgba(r, g, b, a))
            }
            _ => Err(ColorParseError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Parse either a hex string or a CSS color name
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        match value.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "transparent" => Ok(Self::TRANSPARENT),
            other => Err(ColorParseError::UnknownName(other.to_string())),
        }
    }

    /// Render as a lowercase hex string, alpha only when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
    match c.to_ascii_lowercase() {
        '0'..='9' => Ok(c as u8 - b'0'),
        c @ 'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(ColorParseError::InvalidHexColor(c.to_string())),
    }
}

fn parse_hex_byte(s: &str) -> Result<u8, ColorParseError> {
    u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexColor(s.to_string()))
}
