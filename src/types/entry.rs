//! Palette entries and the swatch groups that carry them.

use serde::{Deserialize, Serialize};

use super::ColorValue;

/// One colour to lay out, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: ColorValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Shown on the Pantone line in place of the spot name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantone: Option<String>,
}

impl PaletteEntry {
    pub fn new(color: ColorValue) -> Self {
        Self {
            color,
            name: None,
            pantone: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pantone(mut self, pantone: impl Into<String>) -> Self {
        self.pantone = Some(pantone.into());
        self
    }

    /// Text for the Pantone line: a non-empty override, else the spot name.
    pub fn pantone_label(&self) -> Option<&str> {
        self.pantone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.color.spot_name())
    }
}

/// A named collection of palette entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwatchGroup {
    pub name: Option<String>,
    pub entries: Vec<PaletteEntry>,
}

impl SwatchGroup {
    pub fn new(name: Option<String>, entries: Vec<PaletteEntry>) -> Self {
        Self { name, entries }
    }

    /// Display name, falling back to `Group N` (1-based) for unnamed groups.
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Group {}", index + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
