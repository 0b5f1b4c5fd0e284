//! Core domain types for swatch.
//!
//! - `Colour` - 8-bit RGB with hex parsing and formatting
//! - `ColorValue` - a host colour in CMYK, RGB or spot form
//! - `PaletteEntry` / `SwatchGroup` - the caller-supplied input

mod colour;
mod entry;

pub use colour::{Cmyk, ColorValue, Colour, Rgb};
pub use entry::{PaletteEntry, SwatchGroup};
