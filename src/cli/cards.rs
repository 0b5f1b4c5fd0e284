//! Cards command implementation.
//!
//! Plans palette cards for one swatch group and writes the plan as JSON.

use clap::Args;

use crate::error::Result;
use crate::layout::CardBuilder;
use crate::output::{display_path, plural, write_json, Printer};
use crate::validation::print_diagnostics;

use super::fonts::resolve_font;
use super::{load_config, PaletteSource};

/// Lay out palette cards for a swatch group
#[derive(Args, Debug)]
pub struct CardsArgs {
    #[command(flatten)]
    pub source: PaletteSource,

    /// Cards per row
    #[arg(long)]
    pub columns: Option<usize>,

    /// Gap between cards
    #[arg(long)]
    pub margin: Option<f64>,

    /// Side of the colour square
    #[arg(long)]
    pub swatch_size: Option<f64>,

    /// Font for the line labels (matched against the font catalogue)
    #[arg(long)]
    pub label_font: Option<String>,

    /// Font for the line values (matched against the font catalogue)
    #[arg(long)]
    pub value_font: Option<String>,
}

pub fn run(args: CardsArgs, printer: &Printer) -> Result<()> {
    let project = load_config(args.source.config.as_deref(), printer)?;
    let (name, group) = args.source.load_group(printer)?;

    let mut config = project.card_config();
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(margin) = args.margin {
        config.margin = margin;
    }
    if let Some(size) = args.swatch_size {
        config.swatch_size = size;
    }
    if let Some(font) = &args.label_font {
        config.label_font = resolve_font(&project.fonts, font, printer);
    }
    if let Some(font) = &args.value_font {
        config.value_font = resolve_font(&project.fonts, font, printer);
    }

    let measure = project.measure();
    let batch = CardBuilder::new(&config, &measure)?.plan(&group.entries)?;
    print_diagnostics(&batch.diagnostics, printer);

    write_json(&batch, args.source.output.as_deref())?;

    printer.success(
        "Planned",
        &format!(
            "{} for {} ({})",
            plural(batch.cards.len(), "card", "cards"),
            name,
            plural(config.columns, "column", "columns")
        ),
    );
    if let Some(path) = &args.source.output {
        printer.info("Wrote", &display_path(path));
    }

    Ok(())
}
