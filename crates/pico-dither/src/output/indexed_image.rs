//! IndexedImage: palette-local indices plus the palette they refer to.

use crate::color::Srgb;
use crate::palette::Palette;
use crate::reduce::Histogram;

/// The output of one dithering pass.
///
/// Stores one palette-local index per pixel in row-major order, the image
/// dimensions, and the palette the indices were produced against. An index
/// map is only meaningful together with that palette, so the two travel as
/// one value.
///
/// # Example
///
/// ```
/// use pico_dither::{IndexedImage, Palette};
///
/// let palette = Palette::new(&[0, 7]).unwrap();
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.index_at(1, 0), 1);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    /// Wrap dithered indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Palette-local indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index at column `x`, row `y`.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.indices[y * self.width + x]
    }

    /// Rows of indices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() panics on 0; an empty image has no rows either way
        self.indices.chunks(self.width.max(1))
    }

    /// Pixel counts per catalog index.
    pub fn histogram(&self) -> Histogram {
        Histogram::from_indices(&self.indices, &self.palette)
    }

    /// Device colors of every pixel.
    pub fn to_colors(&self) -> Vec<Srgb> {
        self.indices
            .iter()
            .map(|&idx| self.palette.device(idx as usize))
            .collect()
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer of the device colors, length
    /// `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.device(idx as usize).to_bytes());
        }
        rgb
    }
}
