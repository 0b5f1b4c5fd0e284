//! Two-page style guide composition.
//!
//! Given a reference page, a "Typography" page and a "Color Styles" page of
//! the same size are stacked directly below it. Each gets a title; the
//! typography specimens and palette cards are placed under the titles.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::PaletteEntry;

use super::card::{CardBatch, CardBuilder, CardConfig};
use super::measure::TextMeasure;
use super::typography::{plan_specimens, SpecimenPlan, TypeStyle};

/// A page rectangle in document coordinates (Y up, so `top > bottom`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PageRect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// A page of the same size directly below this one.
    pub fn below(&self) -> Self {
        Self::new(self.left, self.bottom, self.right, self.bottom - self.height())
    }
}

/// Page furniture for the style guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    pub title_font: String,
    pub title_size: f64,
    /// Distance from the page top to the title baseline.
    pub title_offset: f64,
    /// Distance from the page's left edge to the title.
    pub title_inset: f64,
    /// Font for typography notes.
    pub note_font: String,
    /// Distance from the page's left edge to the specimens and cards.
    pub content_inset: f64,
    /// Extra drop below the title before the first specimen.
    pub specimen_drop: f64,
    /// Card margin on the colour page.
    pub card_margin: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            title_font: "Arial-BoldMT".to_string(),
            title_size: 36.0,
            title_offset: 40.0,
            title_inset: 20.0,
            note_font: "ArialMT".to_string(),
            content_inset: 100.0,
            specimen_drop: 63.0,
            card_margin: 40.0,
        }
    }
}

impl GuideConfig {
    /// Vertical room the title takes from the page top.
    pub fn title_spacing(&self) -> f64 {
        self.title_size + self.title_offset
    }
}

/// A page title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyPage {
    pub name: String,
    pub rect: PageRect,
    pub title: Title,
    pub specimens: Vec<SpecimenPlan>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorPage {
    pub name: String,
    pub rect: PageRect,
    pub title: Title,
    #[serde(flatten)]
    pub cards: CardBatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleGuidePlan {
    pub typography: TypographyPage,
    pub colors: ColorPage,
}

pub const TYPOGRAPHY_PAGE: &str = "Typography";
pub const COLOR_PAGE: &str = "Color Styles";

fn title_for(page: &PageRect, content: &str, config: &GuideConfig) -> Title {
    Title {
        x: page.left + config.title_inset,
        y: page.top - config.title_offset,
        content: content.to_string(),
        font: config.title_font.clone(),
        size: config.title_size,
    }
}

/// Plan both pages below `reference`.
///
/// `cards` supplies the card geometry; its margin is replaced by
/// `config.card_margin`. Fails only if that card configuration is invalid.
pub fn plan_style_guide<M: TextMeasure + ?Sized>(
    reference: PageRect,
    styles: &[TypeStyle],
    swatches: &[PaletteEntry],
    cards: &CardConfig,
    config: &GuideConfig,
    measure: &M,
) -> Result<StyleGuidePlan> {
    let card_config = CardConfig {
        margin: config.card_margin,
        ..cards.clone()
    };
    let builder = CardBuilder::new(&card_config, measure)?;

    let type_rect = reference.below();
    let color_rect = type_rect.below();

    let specimens = plan_specimens(
        styles,
        type_rect.left + config.content_inset,
        type_rect.top - config.title_spacing() - config.specimen_drop,
        &config.note_font,
    );

    let batch = builder.plan(swatches)?.translated(
        color_rect.left + config.content_inset,
        color_rect.top - config.title_spacing(),
    );

    Ok(StyleGuidePlan {
        typography: TypographyPage {
            name: TYPOGRAPHY_PAGE.to_string(),
            rect: type_rect,
            title: title_for(&type_rect, TYPOGRAPHY_PAGE, config),
            specimens,
        },
        colors: ColorPage {
            name: COLOR_PAGE.to_string(),
            rect: color_rect,
            title: title_for(&color_rect, COLOR_PAGE, config),
            cards: batch,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedAdvance;
    use crate::types::ColorValue;
    use pretty_assertions::assert_eq;

    fn cards() -> CardConfig {
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

    #[test]
    fn test_pages_stack_below_reference() {
        let letter = PageRect::new(0.0, 792.0, 612.0, 0.0);
        assert_eq!(letter.below(), PageRect::new(0.0, 0.0, 612.0, -792.0));
        assert_eq!(letter.below().below(), PageRect::new(0.0, -792.0, 612.0, -1584.0));
    }

    #[test]
    fn test_style_guide_layout() {
        let letter = PageRect::new(0.0, 792.0, 612.0, 0.0);
        let styles = vec![TypeStyle::new("Headline", "Arial-BoldMT", 36.0, "")];
        let swatches = vec![
            PaletteEntry::new(ColorValue::hex("#1E4B7A").unwrap()).named("Brand Blue"),
            PaletteEntry::new(ColorValue::hex("#FF9900").unwrap()).named("Accent Orange"),
        ];
        let plan = plan_style_guide(
            letter,
            &styles,
            &swatches,
            &cards(),
            &GuideConfig::default(),
            &FixedAdvance::new(0.5),
        )
        .unwrap();

        assert_eq!(plan.typography.title.content, "Typography");
        assert_eq!((plan.typography.title.x, plan.typography.title.y), (20.0, -40.0));
        // 0 − 76 − 63
        assert_eq!(plan.typography.specimens[0].runs[0].y, -139.0);
        assert_eq!(plan.typography.specimens[0].runs[0].x, 100.0);

        assert_eq!(plan.colors.title.y, -792.0 - 40.0);
        let first = &plan.colors.cards.cards[0];
        assert_eq!((first.origin_x, first.origin_y), (100.0, -792.0 - 76.0));
        // margin 40 on the colour page
        assert_eq!(plan.colors.cards.cards[1].origin_x, 100.0 + 140.0);
    }

    #[test]
    fn test_invalid_cards_fail() {
        let mut bad = cards();
        bad.columns = 0;
        let result = plan_style_guide(
            PageRect::new(0.0, 100.0, 100.0, 0.0),
            &[],
            &[],
            &bad,
            &GuideConfig::default(),
            &FixedAdvance::new(0.5),
        );
        assert!(result.is_err());
    }
}
