//! Inline colour values, as typed on the command line.
//!
//! - `#1E4B7A`, `1E4B7A`, `#F90`
//! - `rgb:255,153,0`
//! - `cmyk:0,100,81,4`
//! - `spot:PANTONE 186 C=cmyk:0,100,81,4`
//! - `gray`, `pattern`, `gradient`, `none`

use crate::error::{Result, SwatchError};
use crate::types::ColorValue;

/// Kinds the host may hand over that have no displayable model.
const UNSUPPORTED_KINDS: &[&str] = &["gray", "grey", "pattern", "gradient", "none"];

/// Parse an inline colour value.
pub fn parse_color_value(input: &str) -> Result<ColorValue> {
    let input = input.trim();

    if let Some(rest) = strip_prefix_ci(input, "spot:") {
        let (name, colour) = rest.split_once('=').ok_or_else(|| SwatchError::Parse {
            message: format!("Spot colour needs a value: {}", input),
            help: Some("Write spot:NAME=<colour>, e.g. spot:PANTONE 186 C=cmyk:0,100,81,4".to_string()),
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SwatchError::Parse {
                message: "Spot colour has no name".to_string(),
                help: None,
            });
        }
        return Ok(ColorValue::spot(name, parse_color_value(colour)?));
    }

    if let Some(rest) = strip_prefix_ci(input, "rgb:") {
        let [r, g, b] = components::<3>(rest, "rgb")?;
        return Ok(ColorValue::rgb(r, g, b));
    }

    if let Some(rest) = strip_prefix_ci(input, "cmyk:") {
        let [c, m, y, k] = components::<4>(rest, "cmyk")?;
        return Ok(ColorValue::cmyk(c, m, y, k));
    }

    let lower = input.to_ascii_lowercase();
    if UNSUPPORTED_KINDS.contains(&lower.as_str()) {
        return Ok(ColorValue::unsupported(lower));
    }

    ColorValue::hex(input)
}

fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}

fn components<const N: usize>(input: &str, model: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(SwatchError::Parse {
            message: format!("{} needs {} components, got {}", model, N, parts.len()),
            help: Some(format!("Example: {}", example_for(model))),
        });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().map_err(|_| SwatchError::Parse {
            message: format!("Invalid {} component: '{}'", model, part),
            help: Some(format!("Example: {}", example_for(model))),
        })?;
    }
    Ok(out)
}

fn example_for(model: &str) -> &'static str {
    match model {
        "rgb" => "rgb:255,153,0",
        _ => "cmyk:0,100,81,4",
    }
}
