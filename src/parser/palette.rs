//! Palette file parser.
//!
//! Parses `.swatches.yaml` files into swatch groups:
//!
//! ```yaml
//! groups:
//!   - name: Brand
//!     swatches:
//!       - name: Brand Blue
//!         hex: "#1E4B7A"
//!       - name: Ink
//!         cmyk: [100, 80, 0, 20]
//!       - name: PMS 186
//!         spot:
//!           name: PANTONE 186 C
//!           cmyk: [0, 100, 81, 4]
//! ```

use serde::Deserialize;

use crate::error::{Result, SwatchError};
use crate::types::{ColorValue, PaletteEntry, SwatchGroup};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPaletteFile {
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    swatches: Vec<RawSwatch>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpot {
    name: String,
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    rgb: Option<[f64; 3]>,
    #[serde(default)]
    cmyk: Option<[f64; 4]>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSwatch {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pantone: Option<String>,
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    rgb: Option<[f64; 3]>,
    #[serde(default)]
    cmyk: Option<[f64; 4]>,
    #[serde(default)]
    spot: Option<RawSpot>,
    #[serde(default)]
    unsupported: Option<String>,
}

fn one_colour_error(context: &str) -> SwatchError {
    SwatchError::Parse {
        message: format!("{} must define exactly one colour", context),
        help: Some("Use one of hex, rgb, cmyk, spot or unsupported".to_string()),
    }
}

fn process_colour(
    hex: Option<String>,
    rgb: Option<[f64; 3]>,
    cmyk: Option<[f64; 4]>,
    context: &str,
) -> Result<ColorValue> {
    match (hex, rgb, cmyk) {
        (Some(hex), None, None) => ColorValue::hex(&hex),
        (None, Some([r, g, b]), None) => Ok(ColorValue::rgb(r, g, b)),
        (None, None, Some([c, m, y, k])) => Ok(ColorValue::cmyk(c, m, y, k)),
        _ => Err(one_colour_error(context)),
    }
}

impl RawSwatch {
    fn has_process(&self) -> bool {
        self.hex.is_some() || self.rgb.is_some() || self.cmyk.is_some()
    }

    fn into_entry(self, context: &str) -> Result<PaletteEntry> {
        let has_process = self.has_process();
        let color = match (self.spot, self.unsupported) {
            (Some(spot), None) if !has_process => {
                let spot_context = format!("spot '{}' in {}", spot.name, context);
                let underlying = process_colour(spot.hex, spot.rgb, spot.cmyk, &spot_context)?;
                ColorValue::spot(spot.name, underlying)
            }
            (None, Some(kind)) if !has_process => ColorValue::unsupported(kind),
            (None, None) => process_colour(self.hex, self.rgb, self.cmyk, context)?,
            _ => return Err(one_colour_error(context)),
        };

        Ok(PaletteEntry {
            color,
            name: self.name,
            pantone: self.pantone,
        })
    }
}

/// Parse a palette file into its swatch groups, in file order.
pub fn parse_palette(source: &str) -> Result<Vec<SwatchGroup>> {
    let raw: RawPaletteFile = serde_yaml::from_str(source).map_err(|e| SwatchError::Parse {
        message: format!("Invalid palette file: {}", e),
        help: Some("Expected a top-level `groups:` list".to_string()),
    })?;

    raw.groups
        .into_iter()
        .enumerate()
        .map(|(gi, group)| {
            let group_label = group
                .name
                .clone()
                .unwrap_or_else(|| format!("Group {}", gi + 1));
            let entries = group
                .swatches
                .into_iter()
                .enumerate()
                .map(|(si, swatch)| {
                    let context = match &swatch.name {
                        Some(name) => format!("swatch '{}' in group '{}'", name, group_label),
                        None => format!("swatch {} in group '{}'", si + 1, group_label),
                    };
                    swatch.into_entry(&context)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(SwatchGroup::new(group.name, entries))
        })
        .collect()
}

/// Pick a group by name (exact, then case-insensitive) or 1-based number.
///
/// With no selector the file must hold exactly one group. Returns the
/// group's index along with the group.
pub fn select_group<'a>(
    groups: &'a [SwatchGroup],
    selector: Option<&str>,
) -> Result<(usize, &'a SwatchGroup)> {
    let names = || {
        groups
            .iter()
            .enumerate()
            .map(|(i, g)| g.display_name(i))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if groups.is_empty() {
        return Err(SwatchError::Selection {
            message: "No swatch groups found".to_string(),
            help: Some("Add at least one entry under `groups:`".to_string()),
        });
    }

    let Some(selector) = selector else {
        if groups.len() == 1 {
            return Ok((0, &groups[0]));
        }
        return Err(SwatchError::Selection {
            message: "Please select a swatch group".to_string(),
            help: Some(format!("Pass --group with one of: {}", names())),
        });
    };

    let by_name = groups
        .iter()
        .enumerate()
        .find(|(i, g)| g.display_name(*i) == selector)
        .or_else(|| {
            groups
                .iter()
                .enumerate()
                .find(|(i, g)| g.display_name(*i).eq_ignore_ascii_case(selector))
        });

    if let Some(found) = by_name {
        return Ok(found);
    }

    match selector.parse::<usize>() {
        Ok(n) if (1..=groups.len()).contains(&n) => Ok((n - 1, &groups[n - 1])),
        _ => Err(SwatchError::Selection {
            message: format!("No swatch group named '{}'", selector),
            help: Some(format!("Available groups: {}", names())),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BRAND: &str = r##"
groups:
  - name: Brand
    swatches:
      - name: Brand Blue
        hex: "#1E4B7A"
      - name: Ink
        cmyk: [100, 80, 0, 20]
      - name: Signal
        rgb: [255, 153, 0]
        pantone: PANTONE 137 C
      - name: Red Spot
        spot:
          name: PANTONE 186 C
          cmyk: [0, 100, 81, 4]
      - name: Fade
        unsupported: gradient
  - swatches:
      - hex: "#000"
"##;

    #[test]
    fn test_parse_all_colour_kinds() {
        let groups = parse_palette(BRAND).unwrap();
        assert_eq!(groups.len(), 2);

        let brand = &groups[0].entries;
        assert_eq!(brand[0].color, ColorValue::rgb(30.0, 75.0, 122.0));
        assert_eq!(brand[1].color, ColorValue::cmyk(100.0, 80.0, 0.0, 20.0));
        assert_eq!(brand[2].pantone.as_deref(), Some("PANTONE 137 C"));
        assert_eq!(brand[3].color.spot_name(), Some("PANTONE 186 C"));
        assert_eq!(brand[4].color, ColorValue::unsupported("gradient"));
        assert_eq!(groups[1].entries[0].color, ColorValue::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_two_colours_rejected() {
        let src = "groups:\n  - swatches:\n      - hex: \"#FFF\"\n        rgb: [1, 2, 3]\n";
        let err = parse_palette(src).unwrap_err();
        assert!(err.to_string().contains("swatch 1 in group 'Group 1'"));
    }

    #[test]
    fn test_no_colour_rejected() {
        let src = "groups:\n  - name: G\n    swatches:\n      - name: Empty\n";
        assert!(parse_palette(src).is_err());
    }

    #[test]
    fn test_bad_hex_rejected() {
        let src = "groups:\n  - swatches:\n      - hex: \"#12\"\n";
        assert!(parse_palette(src).is_err());
    }

    #[test]
    fn test_select_group() {
        let groups = parse_palette(BRAND).unwrap();

        assert_eq!(select_group(&groups, Some("Brand")).unwrap().0, 0);
        assert_eq!(select_group(&groups, Some("brand")).unwrap().1.len(), 5);
        assert_eq!(select_group(&groups, Some("Group 2")).unwrap().0, 1);
        assert_eq!(select_group(&groups, Some("2")).unwrap().1.len(), 1);
        assert!(select_group(&groups, Some("3")).is_err());
        assert!(select_group(&groups, None).is_err());
    }

    #[test]
    fn test_select_only_group() {
        let groups = parse_palette("groups:\n  - swatches: []\n").unwrap();
        assert!(select_group(&groups, None).unwrap().1.is_empty());
        assert!(select_group(&[], None).is_err());
    }
}
