//! Info command implementation.
//!
//! Prints the card lines (Pantone, CMYK, RGB, HEX) for inline colour values.

use clap::Args;
use serde::Serialize;

use crate::convert::{resolve, ColorInfo, NONE_SENTINEL};
use crate::error::Result;
use crate::output::{write_json, Printer};
use crate::parser::parse_color_value;

/// Show CMYK, RGB and HEX for colour values
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Colour values: #RRGGBB, rgb:R,G,B, cmyk:C,M,Y,K, spot:NAME=<colour>
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Print JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InfoRecord<'a> {
    input: &'a str,
    #[serde(flatten)]
    info: ColorInfo,
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let records = args
        .values
        .iter()
        .map(|input| {
            let value = parse_color_value(input)?;
            let info = resolve(&value);
            if info.is_none() {
                printer.warning("Unsupported", &format!("{} has no displayable colour model", input));
            }
            Ok(InfoRecord { input, info })
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        return write_json(&records, None);
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", printer.bold(record.input));
        for line in info_lines(&record.info) {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// Card-style text lines for one colour.
pub fn info_lines(info: &ColorInfo) -> [String; 4] {
    [
        format!("Pantone: {}", info.spot_name().unwrap_or(NONE_SENTINEL)),
        format!("CMYK: {}", info.cmyk_text()),
        format!("RGB: {}", info.rgb_text()),
        format!("HEX: {}", info.hex_text()),
    ]
}
