//! Project configuration (swatch.yaml).
//!
//! Holds the defaults the layout engine itself refuses to assume: card and
//! grid dimensions, fonts, the font catalogue used for font lookup, and
//! style guide page furniture. Every section is optional; anything left out
//! falls back to the values below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::layout::{CardConfig, FixedAdvance, GridConfig, GuideConfig};

/// The name of the project configuration file.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Character advance, as a fraction of the font size, used when no real
/// font metrics are available.
const DEFAULT_GLYPH_ADVANCE: f64 = 0.55;

/// Card fields a project may override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_inset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_inset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f64>,
}

impl CardSettings {
    /// Overlay the set fields onto `base`.
    pub fn apply(&self, base: CardConfig) -> CardConfig {
        CardConfig {
            swatch_size: self.swatch_size.unwrap_or(base.swatch_size),
            panel_height: self.panel_height.unwrap_or(base.panel_height),
            margin: self.margin.unwrap_or(base.margin),
            columns: self.columns.unwrap_or(base.columns),
            text_inset_x: self.text_inset_x.unwrap_or(base.text_inset_x),
            text_inset_y: self.text_inset_y.unwrap_or(base.text_inset_y),
            label_font: self.label_font.clone().unwrap_or(base.label_font),
            value_font: self.value_font.clone().unwrap_or(base.value_font),
            font_size: self.font_size.unwrap_or(base.font_size),
            line_gap: self.line_gap.unwrap_or(base.line_gap),
            shadow_offset_x: self.shadow_offset_x.unwrap_or(base.shadow_offset_x),
            shadow_offset_y: self.shadow_offset_y.unwrap_or(base.shadow_offset_y),
            shadow_opacity: self.shadow_opacity.unwrap_or(base.shadow_opacity),
        }
    }

    fn from_config(c: &CardConfig) -> Self {
        Self {
            swatch_size: Some(c.swatch_size),
            panel_height: Some(c.panel_height),
            margin: Some(c.margin),
            columns: Some(c.columns),
            text_inset_x: Some(c.text_inset_x),
            text_inset_y: Some(c.text_inset_y),
            label_font: Some(c.label_font.clone()),
            value_font: Some(c.value_font.clone()),
            font_size: Some(c.font_size),
            line_gap: Some(c.line_gap),
            shadow_offset_x: Some(c.shadow_offset_x),
            shadow_offset_y: Some(c.shadow_offset_y),
            shadow_opacity: Some(c.shadow_opacity),
        }
    }
}

/// Grid fields a project may override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

impl GridSettings {
    pub fn apply(&self, base: GridConfig) -> GridConfig {
        GridConfig {
            size: self.size.unwrap_or(base.size),
            margin: self.margin.unwrap_or(base.margin),
            columns: self.columns.unwrap_or(base.columns),
        }
    }
}

/// Project configuration loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub cards: CardSettings,
    pub grid: GridSettings,
    pub guide: GuideConfig,

    /// Font names offered when picking label/value fonts.
    pub fonts: Vec<String>,

    /// Average character advance for the fixed-advance text measurer.
    pub glyph_advance: f64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            cards: CardSettings::default(),
            grid: GridSettings::default(),
            guide: GuideConfig::default(),
            fonts: default_fonts(),
            glyph_advance: DEFAULT_GLYPH_ADVANCE,
        }
    }
}

/// Card layout used when nothing overrides it.
pub fn default_card_config() -> CardConfig {
    CardConfig {
        swatch_size: 100.0,
        panel_height: 60.0,
        margin: 20.0,
        columns: 4,
        text_inset_x: 4.0,
        text_inset_y: 16.0,
        label_font: "Arial-BoldMT".to_string(),
        value_font: "ArialMT".to_string(),
        font_size: 10.0,
        line_gap: 2.0,
        shadow_offset_x: 4.0,
        shadow_offset_y: -4.0,
        shadow_opacity: 30.0,
    }
}

/// Plain grid layout used when nothing overrides it.
pub fn default_grid_config() -> GridConfig {
    GridConfig {
        size: 50.0,
        margin: 20.0,
        columns: 5,
    }
}

fn default_fonts() -> Vec<String> {
    [
        "ArialMT",
        "Arial-BoldMT",
        "Arial-ItalicMT",
        "Arial-BoldItalicMT",
        "Helvetica",
        "Helvetica-Bold",
        "Georgia",
        "Georgia-Bold",
        "TimesNewRomanPSMT",
        "TimesNewRomanPS-BoldMT",
        "Verdana",
        "Verdana-Bold",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl ProjectConfig {
    /// Load configuration from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `swatch.yaml` in `dir` if present, else
    /// the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// A config with every card and grid value spelled out, for `init`.
    pub fn template() -> Self {
        let grid = default_grid_config();
        Self {
            cards: CardSettings::from_config(&default_card_config()),
            grid: GridSettings {
                size: Some(grid.size),
                margin: Some(grid.margin),
                columns: Some(grid.columns),
            },
            ..Self::default()
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SwatchError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Card layout with project overrides applied.
    pub fn card_config(&self) -> CardConfig {
        self.cards.apply(default_card_config())
    }

    pub fn grid_config(&self) -> GridConfig {
        self.grid.apply(default_grid_config())
    }

    pub fn measure(&self) -> FixedAdvance {
        FixedAdvance::new(self.glyph_advance)
    }
}
