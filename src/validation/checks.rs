//! Individual checks. Each returns a `ValidationResult`; error severity
//! means the layout must not run.

use crate::layout::{CardConfig, GridConfig};
use crate::types::{ColorValue, PaletteEntry};

use super::warning::{Diagnostic, ValidationResult};

/// Reject non-finite, non-positive swatch sizes.
fn check_size(result: &mut ValidationResult, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        result.push(
            Diagnostic::error(
                format!("swatch::config::{}", field),
                format!("{} must be a positive number, got {}", field, value),
            )
            .with_help("Use a size greater than zero"),
        );
    }
}

/// Reject non-finite or negative lengths.
fn check_non_negative(result: &mut ValidationResult, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        result.push(
            Diagnostic::error(
                format!("swatch::config::{}", field),
                format!("{} must be a non-negative number, got {}", field, value),
            )
            .with_help("Please enter a valid non-negative number"),
        );
    }
}

fn check_finite(result: &mut ValidationResult, field: &str, value: f64) {
    if !value.is_finite() {
        result.push(Diagnostic::error(
            format!("swatch::config::{}", field),
            format!("{} must be a finite number, got {}", field, value),
        ));
    }
}

fn check_columns(result: &mut ValidationResult, columns: usize) {
    if columns < 1 {
        result.push(
            Diagnostic::error("swatch::config::columns", "columns must be at least 1")
                .with_help("Set columns to 1 or more"),
        );
    }
}

pub fn check_grid_config(config: &GridConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_size(&mut result, "size", config.size);
    check_non_negative(&mut result, "margin", config.margin);
    check_columns(&mut result, config.columns);
    result
}

pub fn check_card_config(config: &CardConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_size(&mut result, "swatch_size", config.swatch_size);
    check_non_negative(&mut result, "margin", config.margin);
    check_columns(&mut result, config.columns);

    if !(0.0..=100.0).contains(&config.shadow_opacity) {
        result.push(
            Diagnostic::error(
                "swatch::config::shadow_opacity",
                format!(
                    "shadow_opacity must be between 0 and 100, got {}",
                    config.shadow_opacity
                ),
            )
            .with_help("Opacity is a percentage"),
        );
    }

    for (field, value) in [
        ("panel_height", config.panel_height),
        ("text_inset_x", config.text_inset_x),
        ("text_inset_y", config.text_inset_y),
        ("font_size", config.font_size),
        ("line_gap", config.line_gap),
        ("shadow_offset_x", config.shadow_offset_x),
        ("shadow_offset_y", config.shadow_offset_y),
    ] {
        check_finite(&mut result, field, value);
    }

    // Odd but drawable.
    if config.panel_height < 0.0 {
        result.push(Diagnostic::warning(
            "swatch::config::panel_height",
            format!("panel_height is negative ({}), panels will overlap the swatch", config.panel_height),
        ));
    }
    if config.font_size <= 0.0 {
        result.push(Diagnostic::warning(
            "swatch::config::font_size",
            format!("font_size is {}, card text will not be visible", config.font_size),
        ));
    }
    for (field, font) in [("label_font", &config.label_font), ("value_font", &config.value_font)] {
        if font.trim().is_empty() {
            result.push(
                Diagnostic::warning(
                    format!("swatch::config::{}", field),
                    format!("{} is empty", field),
                )
                .with_help("The renderer will fail to look up an unnamed font"),
            );
        }
    }

    result
}

/// One warning per entry whose colour cannot be displayed.
pub fn unsupported_colours(entries: &[PaletteEntry]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, entry) in entries.iter().enumerate() {
        let model = match &entry.color {
            ColorValue::Unsupported { kind } => kind.as_str(),
            ColorValue::Spot { underlying, .. } => match underlying.as_ref() {
                ColorValue::Cmyk(_) | ColorValue::Rgb(_) => continue,
                other => other.model(),
            },
            ColorValue::Cmyk(_) | ColorValue::Rgb(_) => continue,
        };

        let label = entry
            .name
            .as_deref()
            .map(|n| format!("'{}'", n))
            .unwrap_or_else(|| format!("#{}", index + 1));

        result.push(
            Diagnostic::warning(
                "swatch::colour::unsupported",
                format!("Swatch {} uses an unsupported colour model ({}); shown as None", label, model),
            )
            .for_entry(index)
            .with_help("Convert the swatch to CMYK, RGB or a spot colour"),
        );
    }

    result
}
