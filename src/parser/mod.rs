//! Parsers for swatch input files.
//!
//! - Palette files (`*.swatches.yaml`): named groups of swatches
//! - Style guide files: typography styles plus the swatches to show
//! - Inline colour values typed on the command line
//!
//! # Usage
//!
//! ```ignore
//! use swatch::parser::{parse_palette, select_group};
//!
//! let source = std::fs::read_to_string("brand.swatches.yaml")?;
//! let groups = parse_palette(&source)?;
//! let group = select_group(&groups, Some("Brand"))?;
//! ```

use std::path::Path;

use crate::error::{Result, SwatchError};

pub mod guide;
pub mod palette;
pub mod value;

pub use guide::{parse_guide, GuideDocument, LETTER};
pub use palette::{parse_palette, select_group};
pub use value::parse_color_value;

/// Read an input file, attaching the path to any IO error.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
