//! Benchmarks for the swatch layout pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::config::{default_card_config, default_grid_config};
use swatch::layout::{CardBuilder, FixedAdvance, GridPlanner};
use swatch::parser::parse_palette;
use swatch::{on_query_change, resolve, ColorValue, PaletteEntry};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

fn entries(n: usize) -> Vec<PaletteEntry> {
    (0..n)
        .map(|i| {
            let v = (i * 7 % 101) as f64;
            let color = match i % 3 {
                0 => ColorValue::cmyk(v, 100.0 - v, v / 2.0, 10.0),
                1 => ColorValue::rgb(v * 2.5, 128.0, 255.0 - v * 2.5),
                _ => ColorValue::spot(format!("PANTONE {}", i), ColorValue::cmyk(0.0, v, 81.0, 4.0)),
            };
            PaletteEntry::new(color).named(format!("Swatch {}", i))
        })
        .collect()
}

// -- Parsing --

fn bench_parsing(c: &mut Criterion) {
    let source = load_fixture("brand.swatches.yaml");

    c.bench_function("parse_palette", |b| {
        b.iter(|| parse_palette(black_box(&source)).unwrap())
    });
}

// -- Conversion --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let values = entries(64);

    group.bench_function("resolve_64", |b| {
        b.iter(|| {
            for entry in &values {
                black_box(resolve(black_box(&entry.color)));
            }
        })
    });

    group.finish();
}

// -- Layout --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = default_card_config();
    let measure = FixedAdvance::new(0.55);
    let builder = CardBuilder::new(&config, &measure).unwrap();
    let grid = GridPlanner::new(default_grid_config()).unwrap();

    let small = entries(12);
    let large = entries(500);

    group.bench_function("cards_12", |b| b.iter(|| builder.plan(black_box(&small)).unwrap()));
    group.bench_function("cards_500", |b| b.iter(|| builder.plan(black_box(&large)).unwrap()));
    group.bench_function("grid_500", |b| b.iter(|| grid.plan(black_box(&large)).unwrap()));

    group.finish();
}

// -- Font filter --

fn bench_filter(c: &mut Criterion) {
    let fonts: Vec<String> = (0..2000).map(|i| format!("Family{}-Style{}", i / 8, i % 8)).collect();

    c.bench_function("filter_2000_fonts", |b| {
        b.iter(|| on_query_change(black_box(&fonts), "family1", black_box("family12-style3")))
    });
}

criterion_group!(benches, bench_parsing, bench_conversion, bench_layout, bench_filter);
criterion_main!(benches);
