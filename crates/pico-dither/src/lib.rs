#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! pico-dither: palette reduction and dithering for the PICO-8 color catalog
//!
//! The console draws from a fixed catalog of 32 colors but shows only 16 at
//! a time. This crate picks the 16 that best serve an image, places them on
//! the hardware slots, and dithers the image onto them.
//!
//! # Quick Start
//!
//! The [`PicoConverter`] builder is the primary entry point:
//!
//! ```
//! use pico_dither::{DitherOptions, Palette, PicoConverter, Srgb};
//!
//! let pixels = vec![Srgb::from_u8(200, 120, 80); 16];
//! let image = PicoConverter::new(Palette::full())
//!     .options(DitherOptions::ordered(0.7))
//!     .convert(&pixels, 4, 4)
//!     .unwrap();
//!
//! assert_eq!(image.width(), 4);
//! assert_eq!(image.palette().len(), 16);
//! ```
//!
//! # Building Blocks
//!
//! - [`catalog`]: the 32 reference colors and console color codes
//! - [`Srgb`] and [`Oklab`]: device space and the perceptual space used for
//!   every color comparison
//! - [`classify::nearest`]: nearest candidate in Oklab
//! - [`dither_image`]: exact, ordered (Bayer) and Floyd-Steinberg passes
//! - [`reduce()`]: greedy least-used-color elimination down to 16 entries
//! - [`arrange()`]: maps 16 colors onto the hardware slots
//! - [`palette`]: palette files exchanged with the command line and GUI

pub mod api;
pub mod arrange;
pub mod catalog;
pub mod classify;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod reduce;


pub use api::{DitherError, ErrorKind, PicoConverter};
pub use arrange::arrange;
pub use color::{LinearRgb, Oklab, Srgb};
pub use dither::{
    dither_image, Dither, DitherMode, DitherOptions, Exact, FloydSteinberg, OrderedDither,
};
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError};
pub use preprocess::Adjustment;
pub use reduce::{measure, reduce, Histogram, MeasureAndReduce};
