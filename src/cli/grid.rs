//! Grid command implementation.

use clap::Args;

use crate::error::Result;
use crate::layout::GridPlanner;
use crate::output::{display_path, plural, write_json, Printer};
use crate::validation::print_diagnostics;

use super::{load_config, PaletteSource};

/// Lay out a plain swatch grid for a swatch group
#[derive(Args, Debug)]
pub struct GridArgs {
    #[command(flatten)]
    pub source: PaletteSource,

    /// Side of each swatch
    #[arg(long)]
    pub size: Option<f64>,

    /// Gap between swatches
    #[arg(long)]
    pub margin: Option<f64>,

    /// Swatches per row
    #[arg(long)]
    pub columns: Option<usize>,
}

pub fn run(args: GridArgs, printer: &Printer) -> Result<()> {
    let project = load_config(args.source.config.as_deref(), printer)?;
    let (name, group) = args.source.load_group(printer)?;

    let mut config = project.grid_config();
    config.size = args.size.unwrap_or(config.size);
    config.margin = args.margin.unwrap_or(config.margin);
    config.columns = args.columns.unwrap_or(config.columns);

    let plan = GridPlanner::new(config)?.plan(&group.entries)?;
    print_diagnostics(&plan.diagnostics, printer);

    write_json(&plan, args.source.output.as_deref())?;

    printer.success(
        "Planned",
        &format!("{} for {}", plural(plan.cells.len(), "swatch", "swatches"), name),
    );
    if let Some(path) = &args.source.output {
        printer.info("Wrote", &display_path(path));
    }

    Ok(())
}
