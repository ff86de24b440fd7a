//! Dithering engine.
//!
//! Three strategies map a device-space image onto a palette:
//!
//! - **Exact**: nearest color per pixel, no perturbation
//! - **Ordered**: Bayer threshold offsets added before classification
//! - **Error diffusion**: serpentine Floyd-Steinberg
//!
//! All strategies implement the [`Dither`] trait and classify in Oklab.
//! [`dither_image`] validates input and dispatches on [`DitherOptions`].
//!
//! # Example
//!
//! ```
//! use pico_dither::{dither_image, DitherOptions, Palette, Srgb};
//!
//! let palette = Palette::primaries();
//! let pixels = vec![Srgb::from_u8(41, 173, 255); 4];
//! let image = dither_image(&pixels, 2, 2, &palette, &DitherOptions::exact()).unwrap();
//! assert!(image.indices().iter().all(|&i| i == 12));
//! ```

mod exact;
mod floyd_steinberg;
mod kernel;
mod options;
mod ordered;

pub use exact::Exact;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use options::{DitherMode, DitherOptions};
pub use ordered::{OrderedDither, ThresholdMatrix, BAYER_4X4, DEFAULT_MATRIX_SIZE};

use crate::api::DitherError;
use crate::color::Srgb;
use crate::output::IndexedImage;
use crate::palette::Palette;

/// A strategy that turns device-space pixels into palette-local indices.
///
/// Implementations assume validated input: `image.len() == width * height`
/// and a non-empty palette. [`dither_image`] checks both before calling in.
pub trait Dither {
    /// Dither an image to palette indices.
    ///
    /// # Arguments
    ///
    /// * `image` - Input pixels in device space (row-major order)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `palette` - Palette to classify against
    /// * `options` - Strength and matrix configuration
    ///
    /// # Returns
    ///
    /// One index per pixel, each in `0..palette.len()`.
    fn dither(
        &self,
        image: &[Srgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8>;
}

/// Sliding window of diffused error rows.
///
/// Only the rows a kernel can reach are kept: `rows[0]` is the current row,
/// `rows[1]` the next one, and so on.
#[derive(Debug)]
pub struct ErrorBuffer {
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a buffer `row_depth` rows deep (a kernel's `max_dy + 1`).
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for column `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to column `x`, `row_offset` rows below the current one.
    ///
    /// Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Move to the next row, recycling the finished one as a zeroed last row.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Dither an image against a palette.
///
/// Runs the strategy named by [`DitherOptions::effective_mode`], so any
/// mode at zero strength classifies exactly.
///
/// # Errors
///
/// [`DitherError::InvalidArgument`] if the palette is empty, if
/// `image.len() != width * height`, or if the ordered matrix size is not a
/// supported power of two.
pub fn dither_image(
    image: &[Srgb],
    width: usize,
    height: usize,
    palette: &Palette,
    options: &DitherOptions,
) -> Result<IndexedImage, DitherError> {
    validate(image, width, height, palette)?;

    let indices = match options.effective_mode() {
        DitherMode::Exact => Exact.dither(image, width, height, palette, options),
        DitherMode::Ordered => {
            let matrix = ThresholdMatrix::new(options.matrix_size)?;
            OrderedDither::new(matrix).dither(image, width, height, palette, options)
        }
        DitherMode::ErrorDiffusion => {
            FloydSteinberg.dither(image, width, height, palette, options)
        }
    };

    Ok(IndexedImage::new(indices, width, height, palette.clone()))
}

pub(crate) fn validate(
    image: &[Srgb],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Result<(), DitherError> {
    if palette.is_empty() {
        return Err(DitherError::invalid("palette has no entries"));
    }
    let expected = width.checked_mul(height).ok_or_else(|| {
        DitherError::invalid(format!("image dimensions {width}x{height} overflow"))
    })?;
    if image.len() != expected {
        return Err(DitherError::invalid(format!(
            "image has {} pixels, expected {width}x{height} = {expected}",
            image.len()
        )));
    }
    Ok(())
}
