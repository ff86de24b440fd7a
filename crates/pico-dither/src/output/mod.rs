//! Output types for the dithering pipeline.
//!
//! [`IndexedImage`] is what every ditherer returns: palette-local indices
//! with dimensions and the palette they index into. Device-color rendering
//! ([`IndexedImage::to_rgb`]) feeds the preview export.

mod indexed_image;

pub use indexed_image::IndexedImage;
