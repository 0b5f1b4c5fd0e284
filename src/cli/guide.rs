//! Guide command implementation.
//!
//! Plans the "Typography" and "Color Styles" pages below a reference page.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SwatchError};
use crate::layout::{plan_style_guide, PageRect};
use crate::output::{display_path, plural, write_json, Printer};
use crate::parser::{parse_guide, read_source, GuideDocument};
use crate::validation::print_diagnostics;

use super::load_config;

/// Lay out typography and colour style guide pages
#[derive(Args, Debug)]
pub struct GuideArgs {
    /// Style guide file (default: built-in styles and swatches)
    pub file: Option<PathBuf>,

    /// Reference page as LEFT,TOP,RIGHT,BOTTOM (overrides the file's page)
    #[arg(long, value_parser = parse_page)]
    pub page: Option<PageRect>,

    /// Project config (default: ./swatch.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the JSON plan here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_page(s: &str) -> std::result::Result<PageRect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number: {}", e))?;

    match parts.as_slice() {
        [left, top, right, bottom] if top > bottom && right > left => {
            Ok(PageRect::new(*left, *top, *right, *bottom))
        }
        [_, _, _, _] => Err("page must have top > bottom and right > left".to_string()),
        _ => Err("expected LEFT,TOP,RIGHT,BOTTOM".to_string()),
    }
}

pub fn run(args: GuideArgs, printer: &Printer) -> Result<()> {
    let project = load_config(args.config.as_deref(), printer)?;

    let mut document = match &args.file {
        Some(path) => {
            let doc = parse_guide(&read_source(path)?)?;
            printer.status("Loaded", &display_path(path));
            doc
        }
        None => GuideDocument::default(),
    };
    if let Some(page) = args.page {
        document.page = page;
    }

    if document.page.height() <= 0.0 || document.page.width() <= 0.0 {
        return Err(SwatchError::config("reference page has no area"));
    }

    let measure = project.measure();
    let plan = plan_style_guide(
        document.page,
        &document.styles,
        &document.swatches,
        &project.card_config(),
        &project.guide,
        &measure,
    )?;
    print_diagnostics(&plan.colors.cards.diagnostics, printer);

    write_json(&plan, args.output.as_deref())?;

    printer.success(
        "Planned",
        &format!(
            "{} and {}",
            plural(plan.typography.specimens.len(), "type style", "type styles"),
            plural(plan.colors.cards.cards.len(), "card", "cards")
        ),
    );
    if let Some(path) = &args.output {
        printer.info("Wrote", &display_path(path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("0,792,612,0").unwrap(), PageRect::new(0.0, 792.0, 612.0, 0.0));
        assert!(parse_page("0,0,612,792").is_err());
        assert!(parse_page("1,2,3").is_err());
        assert!(parse_page("a,b,c,d").is_err());
    }

    #[test]
    fn test_guide_defaults() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("guide.json");
        let args = GuideArgs {
            file: None,
            page: None,
            config: None,
            output: Some(output.clone()),
        };
        run(args, &Printer::plain()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["typography"]["title"]["content"], "Typography");
        assert_eq!(json["typography"]["specimens"].as_array().unwrap().len(), 3);
        assert_eq!(json["colors"]["name"], "Color Styles");
        assert_eq!(json["colors"]["cards"].as_array().unwrap().len(), 5);
        assert_eq!(json["colors"]["rect"]["top"], -792.0);
    }
}
