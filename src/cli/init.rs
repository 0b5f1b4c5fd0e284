//! Init command implementation.
//!
//! Writes a `swatch.yaml` with every card and grid default spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ProjectConfig, CONFIG_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};

/// Write a default swatch.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(SwatchError::InvalidConfiguration {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let template = ProjectConfig::template();
    fs::write(&config_path, template.to_yaml()?).map_err(|e| SwatchError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({} in catalogue)",
            display_path(&config_path),
            plural(template.fonts.len(), "font", "fonts")
        ),
    );

    Ok(())
}
