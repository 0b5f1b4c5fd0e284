//! Style guide file parser.
//!
//! ```yaml
//! page: { left: 0, top: 792, right: 612, bottom: 0 }
//! styles:
//!   - label: Headline
//!     font: Arial-BoldMT
//!     size: 36
//!     note: Headline should always be in title case.
//! swatches:
//!   - name: Brand Blue
//!     color: "#1E4B7A"
//!     pantone: PANTONE 2154 C
//! ```
//!
//! Every key is optional. Styles with an empty label and swatches with an
//! empty name are dropped.

use serde::Deserialize;

use crate::error::{Result, SwatchError};
use crate::layout::{PageRect, TypeStyle};
use crate::types::{ColorValue, PaletteEntry};

/// US Letter in points, the page used when the file names none.
pub const LETTER: PageRect = PageRect::new(0.0, 792.0, 612.0, 0.0);

/// A parsed style guide file.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideDocument {
    pub page: PageRect,
    pub styles: Vec<TypeStyle>,
    pub swatches: Vec<PaletteEntry>,
}

impl Default for GuideDocument {
    fn default() -> Self {
        Self {
            page: LETTER,
            styles: default_styles(),
            swatches: default_swatches(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGuide {
    #[serde(default)]
    page: Option<PageRect>,
    #[serde(default)]
    styles: Option<Vec<RawStyle>>,
    #[serde(default)]
    swatches: Option<Vec<RawSwatch>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyle {
    #[serde(default)]
    label: String,
    font: String,
    size: f64,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSwatch {
    #[serde(default)]
    name: String,
    color: String,
    #[serde(default)]
    pantone: String,
}

fn default_styles() -> Vec<TypeStyle> {
    vec![
        TypeStyle::new("Headline", "Arial-BoldMT", 36.0, "Headline should always be in title case."),
        TypeStyle::new("Subhead", "ArialMT", 28.0, "Subhead in sentence case."),
        TypeStyle::new("Descriptor", "Arial-ItalicMT", 20.0, "Descriptors can use italic."),
    ]
}

fn default_swatches() -> Vec<PaletteEntry> {
    [
        ("Brand Blue", (0x1E, 0x4B, 0x7A)),
        ("Accent Orange", (0xFF, 0x99, 0x00)),
        ("Cool Grey", (0xAA, 0xB3, 0xBA)),
        ("Black", (0x00, 0x00, 0x00)),
        ("White", (0xFF, 0xFF, 0xFF)),
    ]
    .into_iter()
    .map(|(name, (r, g, b))| PaletteEntry::new(ColorValue::rgb(r as f64, g as f64, b as f64)).named(name))
    .collect()
}

/// Parse a style guide file. An empty document gives the default guide.
pub fn parse_guide(source: &str) -> Result<GuideDocument> {
    if source.trim().is_empty() {
        return Ok(GuideDocument::default());
    }

    let raw: RawGuide = serde_yaml::from_str(source).map_err(|e| SwatchError::Parse {
        message: format!("Invalid style guide file: {}", e),
        help: Some("Expected optional `page`, `styles` and `swatches` keys".to_string()),
    })?;

    let styles = match raw.styles {
        Some(styles) => styles
            .into_iter()
            .filter(|s| !s.label.trim().is_empty())
            .map(|s| TypeStyle::new(s.label, s.font, s.size, s.note))
            .collect(),
        None => default_styles(),
    };

    let swatches = match raw.swatches {
        Some(swatches) => swatches
            .into_iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| {
                let color = ColorValue::hex(&s.color).map_err(|_| SwatchError::Parse {
                    message: format!("Swatch '{}' has an invalid colour: {}", s.name, s.color),
                    help: Some("Use #RGB or #RRGGBB format".to_string()),
                })?;
                let mut entry = PaletteEntry::new(color).named(s.name);
                if !s.pantone.trim().is_empty() {
                    entry = entry.with_pantone(s.pantone);
                }
                Ok(entry)
            })
            .collect::<Result<Vec<_>>>()?,
        None => default_swatches(),
    };

    Ok(GuideDocument {
        page: raw.page.unwrap_or(LETTER),
        styles,
        swatches,
    })
}
