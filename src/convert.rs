//! Colour model conversion.
//!
//! Turns a [`ColorValue`] into every representation a palette card shows:
//! CMYK, RGB, hex and the spot ink name. The CMYK/RGB formulas are the plain
//! multiplicative approximation (no ICC profile) and must stay bit-for-bit
//! with existing artwork.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Result, SwatchError};
use crate::types::{Cmyk, ColorValue, Colour, Rgb};

/// Text shown for any representation that cannot be displayed.
pub const NONE_SENTINEL: &str = "None";

/// CMYK rounded for display, each channel 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CmykQuad {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl CmykQuad {
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }

    /// Pure black, also the answer for any RGB triple with no light in it.
    pub const BLACK: Self = Self::new(0, 0, 0, 100);

    fn from_percent(cmyk: Cmyk) -> Self {
        Self {
            c: percent(cmyk.c),
            m: percent(cmyk.m),
            y: percent(cmyk.y),
            k: percent(cmyk.k),
        }
    }
}

impl fmt::Display for CmykQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.c, self.m, self.y, self.k)
    }
}

impl From<CmykQuad> for Cmyk {
    fn from(q: CmykQuad) -> Self {
        Cmyk::new(q.c as f64, q.m as f64, q.y as f64, q.k as f64)
    }
}

/// Every display representation of one colour.
///
/// `cmyk` and `rgb` are either both present or both absent; `hex` is derived
/// from `rgb` so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfo {
    cmyk: Option<CmykQuad>,
    rgb: Option<Colour>,
    spot_name: Option<String>,
}

impl ColorInfo {
    fn new(cmyk: CmykQuad, rgb: Colour, spot_name: Option<String>) -> Self {
        Self {
            cmyk: Some(cmyk),
            rgb: Some(rgb),
            spot_name,
        }
    }

    /// The "None" sentinel: nothing displayable.
    pub fn none() -> Self {
        Self {
            cmyk: None,
            rgb: None,
            spot_name: None,
        }
    }

    pub fn cmyk(&self) -> Option<CmykQuad> {
        self.cmyk
    }

    pub fn rgb(&self) -> Option<Colour> {
        self.rgb
    }

    pub fn hex(&self) -> Option<String> {
        self.rgb.map(rgb_to_hex)
    }

    pub fn spot_name(&self) -> Option<&str> {
        self.spot_name.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.rgb.is_none()
    }

    /// `c, m, y, k` or the sentinel.
    pub fn cmyk_text(&self) -> String {
        self.cmyk
            .map(|q| q.to_string())
            .unwrap_or_else(|| NONE_SENTINEL.to_string())
    }

    /// `r, g, b` or the sentinel.
    pub fn rgb_text(&self) -> String {
        self.rgb
            .map(|c| format!("{}, {}, {}", c.r, c.g, c.b))
            .unwrap_or_else(|| NONE_SENTINEL.to_string())
    }

    /// `#RRGGBB` or the sentinel.
    pub fn hex_text(&self) -> String {
        self.hex().unwrap_or_else(|| NONE_SENTINEL.to_string())
    }
}

impl Serialize for ColorInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ColorInfo", 4)?;
        s.serialize_field("cmyk", &self.cmyk_text())?;
        s.serialize_field("rgb", &self.rgb_text())?;
        s.serialize_field("hex", &self.hex_text())?;
        s.serialize_field("spotName", &self.spot_name)?;
        s.end()
    }
}

/// Resolve a colour into all its display representations.
///
/// Never fails: anything without a CMYK or RGB model behind it comes back as
/// [`ColorInfo::none`].
pub fn resolve(value: &ColorValue) -> ColorInfo {
    try_resolve(value).unwrap_or_else(|_| ColorInfo::none())
}

/// Like [`resolve`], but reports an unrepresentable colour as an error.
pub fn try_resolve(value: &ColorValue) -> Result<ColorInfo> {
    match value {
        ColorValue::Spot { name, underlying } => {
            let (cmyk, rgb) = resolve_process(underlying)?;
            Ok(ColorInfo::new(cmyk, rgb, Some(name.clone())))
        }
        other => {
            let (cmyk, rgb) = resolve_process(other)?;
            Ok(ColorInfo::new(cmyk, rgb, None))
        }
    }
}

/// Resolve a process colour. Spots are only followed one level, so a spot
/// reaching this point is treated like any other unsupported model.
fn resolve_process(value: &ColorValue) -> Result<(CmykQuad, Colour)> {
    match value {
        ColorValue::Cmyk(cmyk) => Ok((CmykQuad::from_percent(*cmyk), cmyk_to_rgb(*cmyk))),
        ColorValue::Rgb(rgb) => Ok((rgb_to_cmyk(*rgb), round_rgb(*rgb))),
        ColorValue::Spot { name, .. } => Err(SwatchError::UnrepresentableColor {
            model: format!("nested spot '{}'", name),
        }),
        ColorValue::Unsupported { kind } => Err(SwatchError::UnrepresentableColor {
            model: kind.clone(),
        }),
    }
}

/// `channel = 255 · (1 − ink/100) · (1 − k/100)`, rounded and clamped.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Colour {
    let key = 1.0 - cmyk.k / 100.0;
    let channel = |ink: f64| byte(255.0 * (1.0 - ink / 100.0) * key);
    Colour::rgb(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

/// Naive RGB to CMYK with full black extraction.
pub fn rgb_to_cmyk(rgb: impl Into<Rgb>) -> CmykQuad {
    let rgb = rgb.into();
    let r = rgb.r.clamp(0.0, 255.0) / 255.0;
    let g = rgb.g.clamp(0.0, 255.0) / 255.0;
    let b = rgb.b.clamp(0.0, 255.0) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return CmykQuad::BLACK;
    }

    let ink = |v: f64| percent((1.0 - v - k) / (1.0 - k) * 100.0);
    CmykQuad::new(ink(r), ink(g), ink(b), percent(k * 100.0))
}

pub fn rgb_to_hex(rgb: Colour) -> String {
    rgb.to_hex()
}

pub fn hex_to_rgb(hex: &str) -> Result<Colour> {
    Colour::from_hex(hex)
}

pub fn hex_to_cmyk(hex: &str) -> Result<CmykQuad> {
    Ok(rgb_to_cmyk(hex_to_rgb(hex)?))
}

fn round_rgb(rgb: Rgb) -> Colour {
    Colour::rgb(byte(rgb.r), byte(rgb.g), byte(rgb.b))
}

fn byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}
