//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Srgb`]: device space, 0..=255 channels. Input pixels, catalog colors,
//!   ordered offsets and diffused error all live here.
//! - [`LinearRgb`]: gamma-decoded intermediate.
//! - [`Oklab`]: perceptual space used for every nearest-color decision.
//!
//! Only the forward direction (device to Oklab) exists; nothing in the
//! engine needs to come back from the perceptual space.
//!
//! # Example
//!
//! ```
//! use pico_dither::{Oklab, Srgb};
//!
//! let pixel = Srgb::from_u8(255, 0, 77);
//! let perceptual = Oklab::from(pixel);
//! assert!(perceptual.a > 0.0);
//! ```

mod linear_rgb;
mod oklab;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use srgb::Srgb;
