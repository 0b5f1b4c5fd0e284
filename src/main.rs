use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Cards(args) => swatch::cli::cards::run(args, &printer)?,
        Commands::Grid(args) => swatch::cli::grid::run(args, &printer)?,
        Commands::Info(args) => swatch::cli::info::run(args, &printer)?,
        Commands::Guide(args) => swatch::cli::guide::run(args, &printer)?,
        Commands::Fonts(args) => swatch::cli::fonts::run(args, &printer)?,
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
