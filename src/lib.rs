//! pico-imgproc - raster images to PICO-8 cartridges
//!
//! Decodes an image, picks 16 colors from the console's 32-color catalog,
//! dithers onto them and writes a `.p8` cartridge or a PNG preview.
//! This library exposes modules for integration testing.

pub mod error;
pub mod export;
pub mod models;
pub mod services;
