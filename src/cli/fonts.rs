//! Font catalogue lookup.
//!
//! Font names are opaque to the layout engine. This command, and the
//! `--label-font`/`--value-font` flags elsewhere, narrow the configured
//! catalogue with the live filter.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::filter::LiveFilter;
use crate::output::{plural, Printer};

use super::load_config;

/// Filter the font catalogue
#[derive(Args, Debug)]
pub struct FontsArgs {
    /// Text to filter by (case-insensitive substring)
    #[arg(default_value = "")]
    pub query: String,

    /// Project config (default: ./swatch.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: FontsArgs, printer: &Printer) -> Result<()> {
    let config = load_config(args.config.as_deref(), printer)?;
    let filter = LiveFilter::new(config.fonts, &args.query);
    let state = filter.state();

    printer.status(
        "Matched",
        &format!("{} for '{}'", plural(state.visible.len(), "font", "fonts"), state.text),
    );

    for (i, font) in state.visible.iter().enumerate() {
        if state.selection == Some(i) {
            println!("{} *", font);
        } else {
            println!("{}", font);
        }
    }

    Ok(())
}

/// Resolve a typed font name against the catalogue.
///
/// An exact match wins, then a single filtered match. Otherwise the text is
/// used as typed: the host may know fonts the catalogue does not.
pub(crate) fn resolve_font(catalogue: &[String], typed: &str, printer: &Printer) -> String {
    let mut filter = LiveFilter::new(catalogue.to_vec(), "");
    let state = filter.set_text(typed);

    if let Some(exact) = state.selected() {
        return exact.to_string();
    }

    match state.visible.as_slice() {
        [only] => {
            printer.info("Font", &format!("'{}' -> {}", typed, only));
            only.clone()
        }
        [] => {
            printer.warning("Font", &format!("'{}' is not in the font catalogue", typed));
            typed.to_string()
        }
        many => {
            printer.warning(
                "Font",
                &format!("'{}' is ambiguous ({}), using it as typed", typed, plural(many.len(), "match", "matches")),
            );
            typed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<String> {
        ["ArialMT", "Arial-BoldMT", "Helvetica"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve_font(&catalogue(), "ArialMT", &Printer::plain()), "ArialMT");
    }

    #[test]
    fn test_single_partial_match() {
        assert_eq!(resolve_font(&catalogue(), "helv", &Printer::plain()), "Helvetica");
        assert_eq!(resolve_font(&catalogue(), "bold", &Printer::plain()), "Arial-BoldMT");
    }

    #[test]
    fn test_ambiguous_or_unknown_kept_as_typed() {
        assert_eq!(resolve_font(&catalogue(), "arial", &Printer::plain()), "arial");
        assert_eq!(resolve_font(&catalogue(), "Futura", &Printer::plain()), "Futura");
    }
}
