//! Text measurement seam.
//!
//! Card layout needs the width of each label so the value can follow it on
//! the same baseline. Only the host knows real font metrics, so the caller
//! supplies a [`TextMeasure`].

/// Measures the advance width of a run of text.
pub trait TextMeasure {
    fn width(&self, text: &str, font: &str, size: f64) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &str, f64) -> f64,
{
    fn width(&self, text: &str, font: &str, size: f64) -> f64 {
        self(text, font, size)
    }
}

/// Every character advances by the same fraction of the font size.
///
/// Good enough for previews and tests; ignores the font entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub em: f64,
}

impl FixedAdvance {
    pub const fn new(em: f64) -> Self {
        Self { em }
    }
}

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str, _font: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * self.em
    }
}
