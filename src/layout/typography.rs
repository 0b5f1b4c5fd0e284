//! Typography specimen layout.
//!
//! Each style block is shown as its label, the font name, a note, a three
//! line alphabet sample and a large "Aa", all set in the block's font
//! except the note.

use serde::{Deserialize, Serialize};

/// One type style to show on the specimen page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStyle {
    pub label: String,
    pub font: String,
    pub size: f64,
    #[serde(default)]
    pub note: String,
}

impl TypeStyle {
    pub fn new(label: impl Into<String>, font: impl Into<String>, size: f64, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            font: font.into(),
            size,
            note: note.into(),
        }
    }
}

const ROW_GAP: f64 = 300.0;
const TOP_SPACE: f64 = 20.0;
const BOTTOM_SPACE: f64 = 40.0;
const DISPLAY_SCALE: f64 = 1.25;
const NOTE_SIZE: f64 = 13.0;
const SAMPLE_RATIO: f64 = 0.56;
const MIN_SAMPLE_SIZE: f64 = 23.0;
const GLYPH_SIZE: f64 = 150.0;
const GLYPH_OFFSET_X: f64 = 460.0;

pub const SAMPLE_TEXT: &str = "abcdefghijklmnopqrstuvwxyz\nABCDEFGHIJKLMNOPQRSTUVWXYZ\n1234567890";
pub const GLYPH_TEXT: &str = "Aa";

/// What a run of specimen text shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecimenRole {
    Label,
    FontName,
    Note,
    Sample,
    Glyph,
}

/// A positioned run of black text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub role: SpecimenRole,
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font: String,
    pub size: f64,
}

/// All runs for one style block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecimenPlan {
    pub index: usize,
    pub runs: Vec<TextRun>,
}

/// Lay out style blocks top to bottom starting at `(x0, start_y)`.
///
/// `note_font` sets the notes; everything else uses the block's own font.
pub fn plan_specimens(styles: &[TypeStyle], x0: f64, start_y: f64, note_font: &str) -> Vec<SpecimenPlan> {
    styles
        .iter()
        .enumerate()
        .map(|(index, style)| {
            let y = start_y - index as f64 * ROW_GAP;
            let style_size = style.size * DISPLAY_SCALE;
            let note_size = (NOTE_SIZE * DISPLAY_SCALE).round();
            let sample_size = MIN_SAMPLE_SIZE.max((style.size * SAMPLE_RATIO * DISPLAY_SCALE).round());

            let font_name_y = y - style_size - TOP_SPACE;
            let note_y = font_name_y - note_size - TOP_SPACE;
            let sample_y = note_y - sample_size - BOTTOM_SPACE;
            let glyph_y = y - (GLYPH_SIZE - style_size);

            let run = |role, x, y, content: &str, font: &str, size| TextRun {
                role,
                x,
                y,
                content: content.to_string(),
                font: font.to_string(),
                size,
            };

            SpecimenPlan {
                index,
                runs: vec![
                    run(SpecimenRole::Label, x0, y, &style.label, &style.font, style_size),
                    run(SpecimenRole::FontName, x0, font_name_y, &style.font, &style.font, style_size),
                    run(SpecimenRole::Note, x0, note_y, &style.note, note_font, note_size),
                    run(SpecimenRole::Sample, x0, sample_y, SAMPLE_TEXT, &style.font, sample_size),
                    run(SpecimenRole::Glyph, x0 + GLYPH_OFFSET_X, glyph_y, GLYPH_TEXT, &style.font, GLYPH_SIZE),
                ],
            }
        })
        .collect()
}
