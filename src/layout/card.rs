//! Palette card geometry.
//!
//! A card is a square swatch with a white info panel underneath listing
//! the colour as Pantone, CMYK, RGB and HEX. Cards are laid out on the grid
//! with a row pitch of `swatch_size + panel_height + margin`, and each one
//! carries a drop shadow request for the renderer.

use serde::{Deserialize, Serialize};

use crate::convert::{resolve, ColorInfo, NONE_SENTINEL};
use crate::error::Result;
use crate::types::{ColorValue, Colour, PaletteEntry};
use crate::validation::{check_card_config, ensure_valid, unsupported_colours, ValidationResult};

use super::grid::{origin_of, position_of, GridPosition, Point, Rect};
use super::measure::TextMeasure;

/// Card layout parameters. Every field is required; defaults belong to the
/// caller's configuration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    pub swatch_size: f64,
    pub panel_height: f64,
    pub margin: f64,
    pub columns: usize,
    /// Distance from the card's left edge to the text.
    pub text_inset_x: f64,
    /// Distance from the panel top to the first baseline.
    pub text_inset_y: f64,
    pub label_font: String,
    pub value_font: String,
    pub font_size: f64,
    pub line_gap: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    /// Percent, 0–100.
    pub shadow_opacity: f64,
}

impl CardConfig {
    /// Vertical pitch between card rows.
    pub fn card_height(&self) -> f64 {
        self.swatch_size + self.panel_height + self.margin
    }

    /// Baseline-to-baseline distance of the info lines.
    pub fn line_height(&self) -> f64 {
        self.font_size + self.line_gap
    }
}

/// The four info lines, in the order they appear on every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Pantone,
    Cmyk,
    Rgb,
    Hex,
}

impl LineKind {
    pub const ORDER: [LineKind; 4] = [LineKind::Pantone, LineKind::Cmyk, LineKind::Rgb, LineKind::Hex];

    pub fn label(self) -> &'static str {
        match self {
            LineKind::Pantone => "Pantone",
            LineKind::Cmyk => "CMYK",
            LineKind::Rgb => "RGB",
            LineKind::Hex => "HEX",
        }
    }

    fn value(self, entry: &PaletteEntry, info: &ColorInfo) -> String {
        match self {
            LineKind::Pantone => entry
                .pantone_label()
                .unwrap_or(NONE_SENTINEL)
                .to_string(),
            LineKind::Cmyk => info.cmyk_text(),
            LineKind::Rgb => info.rgb_text(),
            LineKind::Hex => info.hex_text(),
        }
    }
}

/// One "Label: Value" line. The label is set in the label font, the value
/// in the value font directly after it on the same baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLine {
    pub kind: LineKind,
    /// Label segment including the trailing `": "`.
    pub label: String,
    pub value: String,
    pub x: f64,
    pub value_x: f64,
    pub baseline_y: f64,
}

/// Request to paint a black, translucent copy of a group directly behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowPlan {
    pub source_group_id: String,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Percent, 0–100.
    pub opacity: f64,
    pub fill: Colour,
}

/// Fully resolved drawing instructions for a single card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPlan {
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: GridPosition,
    pub origin_x: f64,
    pub origin_y: f64,
    pub swatch_size: f64,
    pub panel_height: f64,
    pub swatch: Rect,
    pub panel: Rect,
    pub fill: ColorValue,
    pub info: ColorInfo,
    pub shadow: ShadowPlan,
    pub label_font: String,
    pub value_font: String,
    pub font_size: f64,
    pub text_lines: Vec<TextLine>,
}

/// A fill for a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "color", rename_all = "lowercase")]
pub enum Fill {
    /// The entry's own colour, passed through untouched for the host.
    Swatch(ColorValue),
    Solid(Colour),
}

/// Renderer-agnostic drawing instruction, listed in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    Group {
        id: String,
        children: Vec<DrawOp>,
    },
    Rect {
        rect: Rect,
        fill: Fill,
    },
    /// Painted immediately behind `source`, not on top of what came before.
    Shadow(ShadowPlan),
    Text {
        x: f64,
        y: f64,
        content: String,
        font: String,
        size: f64,
    },
}

impl CardPlan {
    /// Card text lines flattened to `"Label: Value"` strings.
    pub fn lines(&self) -> Vec<String> {
        self.text_lines
            .iter()
            .map(|l| format!("{}{}", l.label, l.value))
            .collect()
    }

    /// Move the whole card, keeping every part in place relative to it.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut card = self.clone();
        card.origin_x += dx;
        card.origin_y += dy;
        card.swatch = self.swatch.translated(dx, dy);
        card.panel = self.panel.translated(dx, dy);
        for line in &mut card.text_lines {
            line.x += dx;
            line.value_x += dx;
            line.baseline_y += dy;
        }
        card
    }

    /// Drawing instructions: the swatch/panel group, its shadow, then the
    /// label and value runs of every line.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(2 + self.text_lines.len() * 2);

        ops.push(DrawOp::Group {
            id: self.group_id.clone(),
            children: vec![
                DrawOp::Rect {
                    rect: self.swatch,
                    fill: Fill::Swatch(self.fill.clone()),
                },
                DrawOp::Rect {
                    rect: self.panel,
                    fill: Fill::Solid(Colour::WHITE),
                },
            ],
        });
        ops.push(DrawOp::Shadow(self.shadow.clone()));

        for line in &self.text_lines {
            ops.push(DrawOp::Text {
                x: line.x,
                y: line.baseline_y,
                content: line.label.clone(),
                font: self.label_font.clone(),
                size: self.font_size,
            });
            ops.push(DrawOp::Text {
                x: line.value_x,
                y: line.baseline_y,
                content: line.value.clone(),
                font: self.value_font.clone(),
                size: self.font_size,
            });
        }

        ops
    }
}

/// Output of [`CardBuilder::plan`]: cards in entry order plus any
/// per-entry warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardBatch {
    pub cards: Vec<CardPlan>,
    #[serde(skip_serializing_if = "ValidationResult::is_ok")]
    pub diagnostics: ValidationResult,
}

impl CardBatch {
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            cards: self.cards.iter().map(|c| c.translated(dx, dy)).collect(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

/// Builds card plans against a validated configuration.
pub struct CardBuilder<'a, M: TextMeasure + ?Sized> {
    config: &'a CardConfig,
    measure: &'a M,
}

impl<'a, M: TextMeasure + ?Sized> CardBuilder<'a, M> {
    /// Validate the configuration; nothing is planned on failure.
    pub fn new(config: &'a CardConfig, measure: &'a M) -> Result<Self> {
        ensure_valid(&check_card_config(config))?;
        Ok(Self { config, measure })
    }

    pub fn config(&self) -> &CardConfig {
        self.config
    }

    /// Plan every entry in order. Unsupported colours produce a card with
    /// "None" values and a warning; they never abort the batch.
    pub fn plan(&self, entries: &[PaletteEntry]) -> Result<CardBatch> {
        let cards = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = position_of(index, self.config.columns)?;
                Ok(self.build(entry, position))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardBatch {
            cards,
            diagnostics: unsupported_colours(entries),
        })
    }

    /// Geometry for one entry at a given grid cell.
    pub fn build(&self, entry: &PaletteEntry, position: GridPosition) -> CardPlan {
        let cfg = self.config;
        let Point { x, y } = origin_of(position, cfg.swatch_size, cfg.card_height(), cfg.margin);
        let info = resolve(&entry.color);

        let swatch = Rect::new(x, y, cfg.swatch_size, cfg.swatch_size);
        let panel = Rect::new(x, swatch.bottom(), cfg.swatch_size, cfg.panel_height);
        let group_id = format!("card-r{}-c{}", position.row, position.column);

        let first_baseline = panel.top - cfg.text_inset_y;
        let text_x = x + cfg.text_inset_x;
        let text_lines = LineKind::ORDER
            .iter()
            .enumerate()
            .map(|(k, &kind)| {
                let label = format!("{}: ", kind.label());
                let label_width = self.measure.width(&label, &cfg.label_font, cfg.font_size);
                TextLine {
                    kind,
                    value: kind.value(entry, &info),
                    label,
                    x: text_x,
                    value_x: text_x + label_width,
                    baseline_y: first_baseline - k as f64 * cfg.line_height(),
                }
            })
            .collect();

        CardPlan {
            shadow: ShadowPlan {
                source_group_id: group_id.clone(),
                offset_x: cfg.shadow_offset_x,
                offset_y: cfg.shadow_offset_y,
                opacity: cfg.shadow_opacity,
                fill: Colour::BLACK,
            },
            group_id,
            name: entry.name.clone(),
            position,
            origin_x: x,
            origin_y: y,
            swatch_size: cfg.swatch_size,
            panel_height: cfg.panel_height,
            swatch,
            panel,
            fill: entry.color.clone(),
            info,
            label_font: cfg.label_font.clone(),
            value_font: cfg.value_font.clone(),
            font_size: cfg.font_size,
            text_lines,
        }
    }
}

/// Build a single card, validating `config` first.
pub fn build_card<M: TextMeasure + ?Sized>(
    entry: &PaletteEntry,
    position: GridPosition,
    config: &CardConfig,
    measure: &M,
) -> Result<CardPlan> {
    Ok(CardBuilder::new(config, measure)?.build(entry, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwatchError;
    use crate::layout::FixedAdvance;
    use pretty_assertions::assert_eq;

    fn config() -> CardConfig {
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

    const MEASURE: FixedAdvance = FixedAdvance::new(0.5);

    fn entries(n: usize) -> Vec<PaletteEntry> {
        (0..n)
            .map(|i| PaletteEntry::new(ColorValue::cmyk(i as f64 * 10.0, 0.0, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn test_first_card_geometry() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();

        assert_eq!(card.swatch, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(card.panel, Rect::new(0.0, -100.0, 100.0, 60.0));
        assert_eq!(card.group_id, "card-r0-c0");
        assert_eq!(card.shadow.source_group_id, "card-r0-c0");
        assert_eq!((card.shadow.offset_x, card.shadow.offset_y), (4.0, -4.0));
        assert_eq!(card.shadow.opacity, 30.0);
        assert_eq!(card.shadow.fill, Colour::BLACK);
    }

    #[test]
    fn test_text_baselines_stack_down() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 1, row: 0 }, &cfg, &MEASURE).unwrap();

        let baselines: Vec<f64> = card.text_lines.iter().map(|l| l.baseline_y).collect();
        assert_eq!(baselines, vec![-116.0, -128.0, -140.0, -152.0]);
        for line in &card.text_lines {
            assert_eq!(line.x, 124.0);
        }
    }

    #[test]
    fn test_value_follows_measured_label() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();

        // "Pantone: " is 9 chars at 5pt each
        assert_eq!(card.text_lines[0].value_x, 4.0 + 45.0);
        // "HEX: " is 5 chars
        assert_eq!(card.text_lines[3].value_x, 4.0 + 25.0);
    }

    #[test]
    fn test_line_order_and_content() {
        let cfg = config();
        let entry = PaletteEntry::new(ColorValue::spot(
            "PANTONE 186 C",
            ColorValue::cmyk(0.0, 100.0, 81.0, 4.0),
        ));
        let card = build_card(&entry, GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();

        let kinds: Vec<LineKind> = card.text_lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, LineKind::ORDER.to_vec());
        assert_eq!(
            card.lines(),
            vec![
                "Pantone: PANTONE 186 C",
                "CMYK: 0, 100, 81, 4",
                "RGB: 245, 0, 47",
                "HEX: #F5002F",
            ]
        );
    }

    #[test]
    fn test_absent_pantone_reads_none() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();
        assert_eq!(card.text_lines[0].value, "None");
    }

    #[test]
    fn test_card_pitch() {
        let cfg = config();
        let builder = CardBuilder::new(&cfg, &MEASURE).unwrap();
        let batch = builder.plan(&entries(9)).unwrap();

        for i in 0..(9 - cfg.columns) {
            let a = &batch.cards[i];
            let b = &batch.cards[i + cfg.columns];
            assert_eq!(a.origin_y - b.origin_y, cfg.card_height());
            assert_eq!(a.origin_x, b.origin_x);
        }
        assert_eq!(batch.cards[1].origin_x, 120.0);
    }

    #[test]
    fn test_plan_preserves_order_and_is_deterministic() {
        let cfg = config();
        let builder = CardBuilder::new(&cfg, &MEASURE).unwrap();
        let input: Vec<PaletteEntry> = entries(6)
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.named(format!("c{}", i)))
            .collect();

        let first = builder.plan(&input).unwrap();
        let second = builder.plan(&input).unwrap();

        let names: Vec<_> = first.cards.iter().map(|c| c.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["c0", "c1", "c2", "c3", "c4", "c5"]);
        assert_eq!(first.cards, second.cards);
    }

    #[test]
    fn test_unsupported_entry_does_not_abort() {
        let cfg = config();
        let builder = CardBuilder::new(&cfg, &MEASURE).unwrap();
        let input = vec![
            PaletteEntry::new(ColorValue::rgb(255.0, 0.0, 0.0)),
            PaletteEntry::new(ColorValue::unsupported("gradient")),
            PaletteEntry::new(ColorValue::rgb(0.0, 0.0, 255.0)),
        ];
        let batch = builder.plan(&input).unwrap();

        assert_eq!(batch.cards.len(), 3);
        let lines = batch.cards[1].lines();
        assert_eq!(lines[1..].to_vec(), vec!["CMYK: None", "RGB: None", "HEX: None"]);
        assert_eq!(batch.cards[2].info.hex_text(), "#0000FF");
        assert_eq!(batch.diagnostics.warning_count(), 1);
        assert!(!batch.diagnostics.has_errors());
    }

    #[test]
    fn test_empty_input() {
        let cfg = config();
        let batch = CardBuilder::new(&cfg, &MEASURE).unwrap().plan(&[]).unwrap();
        assert!(batch.cards.is_empty());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut cfg = config();
        cfg.columns = 0;
        cfg.shadow_opacity = 130.0;
        let err = CardBuilder::new(&cfg, &MEASURE).err().unwrap();

        match err {
            SwatchError::InvalidConfiguration { message, .. } => {
                assert!(message.contains("columns"));
                assert!(message.contains("shadow_opacity"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_draw_ops_paint_order() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();
        let ops = card.draw_ops();

        assert_eq!(ops.len(), 2 + 8);
        assert!(matches!(&ops[0], DrawOp::Group { id, children } if id == "card-r0-c0" && children.len() == 2));
        assert!(matches!(&ops[1], DrawOp::Shadow(s) if s.source_group_id == "card-r0-c0"));
        match &ops[3] {
            DrawOp::Text { content, font, .. } => {
                assert_eq!(content, "None");
                assert_eq!(font, "ArialMT");
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_translated_moves_everything() {
        let cfg = config();
        let card = build_card(&entries(1)[0], GridPosition { column: 0, row: 0 }, &cfg, &MEASURE).unwrap();
        let moved = card.translated(100.0, -76.0);

        assert_eq!(moved.origin_x, 100.0);
        assert_eq!(moved.panel.top, -176.0);
        assert_eq!(moved.text_lines[0].baseline_y, -192.0);
        assert_eq!(moved.text_lines[0].value_x, card.text_lines[0].value_x + 100.0);
    }
}
