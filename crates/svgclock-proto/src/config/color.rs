use std::{borrow::Cow, fmt, str::FromStr};

use hex_color::HexColor;
use serde_with::DeserializeFromStr;

/// Errors produced when a theme color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColorError {
    /// The color string was empty.
    Empty,

    /// A `#`-prefixed value that is not a valid hex color.
    InvalidHex { value: String, context: String },

    /// A keyword that contains anything but ASCII letters.
    InvalidKeyword { value: String }
}

impl fmt::Display for ThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "color value is empty"),
            Self::InvalidHex {
                value,
                context
            } => {
                write!(f, "invalid hex color '{}': {}", value, context)
            }
            Self::InvalidKeyword {
                value
            } => {
                write!(f, "invalid color keyword '{}'", value)
            }
        }
    }
}

impl std::error::Error for ThemeColorError {}

/// A color usable as an SVG paint value.
#[derive(Clone, Debug, PartialEq, Eq, DeserializeFromStr)]
pub enum ThemeColor {
    /// `#rgb`, `#rrggbb` or `#rrggbbaa`.
    Hex(HexColor),
    /// A CSS color keyword such as `red`, stored lower-case.
    Named(Cow<'static, str>)
}

impl ThemeColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Hex(HexColor::rgb(r, g, b))
    }

    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl FromStr for ThemeColor {
    type Err = ThemeColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ThemeColorError::Empty);
        }

        if value.starts_with('#') {
            return HexColor::parse(value)
                .map(Self::Hex)
                .map_err(|err| ThemeColorError::InvalidHex {
                    value:   value.to_owned(),
                    context: err.to_string()
                });
        }

        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ThemeColorError::InvalidKeyword {
                value: value.to_owned()
            });
        }

        Ok(Self::Named(Cow::Owned(value.to_ascii_lowercase())))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(color) if color.a == u8::MAX => {
                write!(f, "#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
            }
            Self::Hex(color) => {
                write!(
                    f,
                    "#{:02x}{:02x}{:02x}{:02x}",
                    color.r, color.g, color.b, color.a
                )
            }
            Self::Named(name) => write!(f, "{}", name)
        }
    }
}
