//! swatch - Palette card and style guide layout
//!
//! A pure layout and colour-conversion engine for swatch palette artwork:
//! palette cards with Pantone/CMYK/RGB/HEX info panels, plain swatch grids,
//! typography specimens and two-page style guides. Plans are data; a host
//! (or the JSON output of the CLI) does the drawing.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod layout;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use config::{ProjectConfig, CONFIG_FILENAME};
pub use convert::{
    cmyk_to_rgb, hex_to_cmyk, hex_to_rgb, resolve, rgb_to_cmyk, rgb_to_hex, try_resolve, CmykQuad,
    ColorInfo, NONE_SENTINEL,
};
pub use error::{Result, SwatchError};
pub use filter::{on_query_change, FilterOutcome, LiveFilter};
pub use layout::{
    build_card, origin_of, plan_specimens, plan_style_guide, position_of, CardBatch, CardBuilder,
    CardConfig, CardPlan, DrawOp, Fill, FixedAdvance, GridCell, GridConfig, GridPlan, GridPlanner,
    GridPosition, GuideConfig, PageRect, StyleGuidePlan, TextMeasure, TypeStyle,
};
pub use parser::{parse_color_value, parse_guide, parse_palette, select_group};
pub use types::{Cmyk, ColorValue, Colour, PaletteEntry, Rgb, SwatchGroup};
pub use validation::{Diagnostic, Severity, ValidationResult};
