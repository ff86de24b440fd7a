//! Palette types and palette files
//!
//! A [`Palette`] is the working set of catalog indices that dithering and
//! reduction operate on. Palette files are the plain-text exchange format
//! used by the command line and the GUI front-end.

mod error;
mod file;
mod palette;

pub use error::PaletteError;
pub use file::{
    codes_to_indices, format_palette_file, palette_from_file, parse_codes, parse_palette_file,
};
pub use palette::Palette;
