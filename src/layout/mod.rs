//! Layout planning.
//!
//! Everything here is pure: inputs in, plans out, no host access. Plans
//! describe what to draw and where; drawing is up to the renderer.

mod card;
mod grid;
mod guide;
mod measure;
mod typography;

pub use card::{build_card, CardBatch, CardBuilder, CardConfig, CardPlan, DrawOp, Fill, LineKind, ShadowPlan, TextLine};
pub use grid::{origin_of, position_of, GridCell, GridConfig, GridPlan, GridPlanner, GridPosition, Point, Rect};
pub use guide::{plan_style_guide, ColorPage, GuideConfig, PageRect, StyleGuidePlan, Title, TypographyPage};
pub use measure::{FixedAdvance, TextMeasure};
pub use typography::{plan_specimens, SpecimenPlan, SpecimenRole, TextRun, TypeStyle};
