//! Row-major grid placement.
//!
//! Coordinates follow the host document: origin bottom-left, Y grows
//! upward, so each new row sits at a lower Y than the one before it. An
//! origin is the top-left corner of a cell.

use serde::{Deserialize, Serialize};

use crate::convert::{resolve, ColorInfo};
use crate::error::{Result, SwatchError};
use crate::types::{ColorValue, PaletteEntry};
use crate::validation::{check_grid_config, ensure_valid, unsupported_colours, ValidationResult};

/// Cell coordinates of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

/// A point in document units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top - self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// Grid cell of the `index`th item when filling `columns` per row.
pub fn position_of(index: usize, columns: usize) -> Result<GridPosition> {
    if columns < 1 {
        return Err(SwatchError::InvalidConfiguration {
            message: "column count must be at least 1".to_string(),
            help: Some("Set columns to 1 or more".to_string()),
        });
    }
    Ok(GridPosition {
        column: index % columns,
        row: index / columns,
    })
}

/// Top-left corner of a cell.
///
/// `cell_height` is the full vertical pitch of a row; the margin only pads
/// the horizontal pitch.
pub fn origin_of(position: GridPosition, cell_width: f64, cell_height: f64, margin: f64) -> Point {
    Point::new(
        position.column as f64 * (cell_width + margin),
        0.0 - position.row as f64 * cell_height,
    )
}

/// Parameters for the plain swatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Side of each square swatch.
    pub size: f64,
    /// Gap between swatches, both across and down.
    pub margin: f64,
    pub columns: usize,
}

/// One square of the plain grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: GridPosition,
    pub rect: Rect,
    pub fill: ColorValue,
    pub info: ColorInfo,
}

/// Output of [`GridPlanner::plan`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct GridPlan {
    pub cells: Vec<GridCell>,
    #[serde(skip_serializing_if = "ValidationResult::is_ok")]
    pub diagnostics: ValidationResult,
}

/// Lays swatches out as plain squares, no info panel.
#[derive(Debug, Clone, Copy)]
pub struct GridPlanner {
    config: GridConfig,
}

impl GridPlanner {
    /// Validate the configuration up front; nothing is planned on failure.
    pub fn new(config: GridConfig) -> Result<Self> {
        ensure_valid(&check_grid_config(&config))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Vertical distance between rows.
    pub fn row_pitch(&self) -> f64 {
        self.config.size + self.config.margin
    }

    pub fn plan(&self, entries: &[PaletteEntry]) -> Result<GridPlan> {
        let size = self.config.size;
        let cells = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = position_of(index, self.config.columns)?;
                let origin = origin_of(position, size, self.row_pitch(), self.config.margin);
                Ok(GridCell {
                    index,
                    name: entry.name.clone(),
                    position,
                    rect: Rect::new(origin.x, origin.y, size, size),
                    fill: entry.color.clone(),
                    info: resolve(&entry.color),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GridPlan {
            cells,
            diagnostics: unsupported_colours(entries),
        })
    }
}
