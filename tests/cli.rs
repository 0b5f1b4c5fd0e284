//! Command-line wiring: argument parsing and command runs against fixtures.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::tempdir;

use swatch::cli::{cards, Cli, Commands};
use swatch::output::Printer;
use swatch::CONFIG_FILENAME;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn parses_cards_arguments() {
    let cli = Cli::try_parse_from([
        "swatch",
        "cards",
        "brand.swatches.yaml",
        "--group",
        "Brand",
        "--columns",
        "3",
        "--label-font",
        "helv",
        "-o",
        "out.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Cards(args) => {
            assert_eq!(args.source.group.as_deref(), Some("Brand"));
            assert_eq!(args.columns, Some(3));
            assert_eq!(args.label_font.as_deref(), Some("helv"));
            assert_eq!(args.source.output, Some(PathBuf::from("out.json")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn rejects_bad_page() {
    assert!(Cli::try_parse_from(["swatch", "guide", "--page", "0,0,10"]).is_err());
}

#[test]
fn info_requires_a_value() {
    assert!(Cli::try_parse_from(["swatch", "info"]).is_err());
}

#[test]
fn cards_with_project_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join(CONFIG_FILENAME);
    fs::write(&config, "cards:\n  columns: 2\n  margin: 40\n").unwrap();
    let output = dir.path().join("cards.json");

    let cli = Cli::try_parse_from([
        "swatch",
        "cards",
        fixture_path("brand.swatches.yaml").to_str().unwrap(),
        "--group",
        "1",
        "--config",
        config.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--value-font",
        "Verdana",
    ])
    .unwrap();
    let Commands::Cards(args) = cli.command else {
        panic!("expected cards");
    };
    cards::run(args, &Printer::plain()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let cards = json["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 6);
    // 2 columns, margin 40: second card starts at 100 + 40
    assert_eq!(cards[1]["originX"], 140.0);
    assert_eq!(cards[2]["position"]["row"], 1);
    assert_eq!(cards[0]["valueFont"], "Verdana");
    assert_eq!(cards[0]["shadow"]["opacity"], 30.0);
}

#[test]
fn cards_unknown_group_fails() {
    let cli = Cli::try_parse_from([
        "swatch",
        "cards",
        fixture_path("brand.swatches.yaml").to_str().unwrap(),
        "--group",
        "Pastels",
    ])
    .unwrap();
    let Commands::Cards(args) = cli.command else {
        panic!("expected cards");
    };
    let err = cards::run(args, &Printer::plain()).unwrap_err();
    assert!(err.to_string().contains("Pastels"));
}
