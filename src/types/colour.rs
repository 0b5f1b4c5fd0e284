//! Colour values as handed over by a host document.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Fill of the info panel under every card.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB` and the short form `#RGB`, which expands
    /// each digit (`#ABC` is `#AABBCC`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SwatchError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            });
        }

        let parsed: Srgb<u8> = digits.parse().map_err(|e| SwatchError::Parse {
            message: format!("Invalid hex colour {}: {}", s, e),
            help: None,
        })?;

        Ok(Self::rgb(parsed.red, parsed.green, parsed.blue))
    }

    /// Canonical `#RRGGBB` encoding, upper-case.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Process colour in percent, each channel nominally 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

/// Screen colour with channels nominally 0–255. Hosts report fractional
/// channel values, so these are kept as `f64` until display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Colour> for Rgb {
    fn from(c: Colour) -> Self {
        Self::new(c.r as f64, c.g as f64, c.b as f64)
    }
}

/// A colour in one of the models a host document can hand over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ColorValue {
    Cmyk(Cmyk),
    Rgb(Rgb),
    /// Named ink. `underlying` is never itself a `Spot`; build these with
    /// [`ColorValue::spot`].
    Spot {
        name: String,
        underlying: Box<ColorValue>,
    },
    /// Anything else the host knows about (gray, pattern, gradient, none).
    Unsupported { kind: String },
}

impl ColorValue {
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        ColorValue::Cmyk(Cmyk::new(c, m, y, k))
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        ColorValue::Rgb(Rgb::new(r, g, b))
    }

    pub fn hex(s: &str) -> Result<Self> {
        Ok(ColorValue::Rgb(Colour::from_hex(s)?.into()))
    }

    /// Wrap a colour in a named spot ink, resolving a nested spot one level
    /// so the stored underlying value is always a process colour.
    pub fn spot(name: impl Into<String>, underlying: ColorValue) -> Self {
        let underlying = match underlying {
            ColorValue::Spot { underlying, .. } => *underlying,
            other => other,
        };
        ColorValue::Spot {
            name: name.into(),
            underlying: Box::new(underlying),
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        ColorValue::Unsupported { kind: kind.into() }
    }

    /// Name of the spot ink, if this is one.
    pub fn spot_name(&self) -> Option<&str> {
        match self {
            ColorValue::Spot { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Short model label used in diagnostics.
    pub fn model(&self) -> &str {
        match self {
            ColorValue::Cmyk(_) => "cmyk",
            ColorValue::Rgb(_) => "rgb",
            ColorValue::Spot { .. } => "spot",
            ColorValue::Unsupported { kind } => kind,
        }
    }
}

impl From<Colour> for ColorValue {
    fn from(c: Colour) -> Self {
        ColorValue::Rgb(c.into())
    }
}
