pub mod cards;
pub mod completions;
pub mod fonts;
pub mod grid;
pub mod guide;
pub mod info;
pub mod init;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_palette, read_source, select_group};
use crate::types::SwatchGroup;

/// swatch - Palette card and style guide layout
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out palette cards for a swatch group
    Cards(cards::CardsArgs),

    /// Lay out a plain swatch grid for a swatch group
    Grid(grid::GridArgs),

    /// Show CMYK, RGB and HEX for colour values
    Info(info::InfoArgs),

    /// Lay out typography and colour style guide pages
    Guide(guide::GuideArgs),

    /// Filter the font catalogue
    Fonts(fonts::FontsArgs),

    /// Write a default swatch.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load `--config` if given, else `swatch.yaml` from the working directory.
pub(crate) fn load_config(path: Option<&Path>, printer: &Printer) -> Result<ProjectConfig> {
    if let Some(path) = path {
        printer.info("Config", &display_path(path));
    }
    ProjectConfig::discover(path, Path::new("."))
}

/// Arguments shared by commands that read a palette file.
#[derive(clap::Args, Debug, Clone)]
pub struct PaletteSource {
    /// Palette file (*.swatches.yaml)
    pub file: PathBuf,

    /// Swatch group, by name or 1-based number
    #[arg(long, short)]
    pub group: Option<String>,

    /// Project config (default: ./swatch.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the JSON plan here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl PaletteSource {
    /// Read the palette file and pick the requested group.
    pub fn load_group(&self, printer: &Printer) -> Result<(String, SwatchGroup)> {
        let source = read_source(&self.file)?;
        let groups = parse_palette(&source)?;
        let (index, group) = select_group(&groups, self.group.as_deref())?;
        let name = group.display_name(index);

        printer.status(
            "Loaded",
            &format!(
                "{} from {} ({})",
                name,
                display_path(&self.file),
                plural(group.len(), "swatch", "swatches")
            ),
        );
        Ok((name, group.clone()))
    }
}
