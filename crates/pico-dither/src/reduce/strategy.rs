//! Measurement strategies for palette reduction.
//!
//! Removing a color invalidates the index map. [`IncrementalReclassify`]
//! repairs only the pixels that used the removed color, which is exact when
//! every pixel is classified independently. Dithered maps couple neighboring
//! pixels, so [`FullReclassify`] re-dithers the whole image instead.

use super::Histogram;
use crate::api::DitherError;
use crate::classify::nearest_in;
use crate::color::{Oklab, Srgb};
use crate::dither::{dither_image, DitherOptions};
use crate::palette::Palette;

/// Produces an index map and histogram, then keeps them valid while the
/// reducer removes palette entries one at a time.
pub trait MeasureAndReduce {
    /// Classify the image against `palette` and count usage per catalog index.
    fn measure(&self, palette: &Palette) -> Result<(Vec<u8>, Histogram), DitherError>;

    /// Repair `indices` and `histogram` after the entry at `removed` was
    /// dropped from `palette`.
    ///
    /// `palette` is already shrunk and `histogram` no longer counts the
    /// removed catalog index.
    fn reclassify(
        &self,
        indices: &mut [u8],
        histogram: &mut Histogram,
        palette: &Palette,
        removed: usize,
    ) -> Result<(), DitherError>;
}

/// Exact-classification strategy that repairs only affected pixels.
#[derive(Debug, Clone)]
pub struct IncrementalReclassify {
    pixels: Vec<Oklab>,
}

impl IncrementalReclassify {
    /// Convert every pixel to Oklab once for the whole reduction.
    pub fn new(image: &[Srgb]) -> Self {
        Self {
            pixels: image.iter().map(|&p| Oklab::from(p)).collect(),
        }
    }
}

impl MeasureAndReduce for IncrementalReclassify {
    fn measure(&self, palette: &Palette) -> Result<(Vec<u8>, Histogram), DitherError> {
        if palette.is_empty() {
            return Err(DitherError::invalid("palette has no entries"));
        }
        let candidates = palette.oklab_colors();
        let indices: Vec<u8> = self
            .pixels
            .iter()
            .map(|&p| nearest_in(p, candidates) as u8)
            .collect();
        let histogram = Histogram::from_indices(&indices, palette);
        Ok((indices, histogram))
    }

    fn reclassify(
        &self,
        indices: &mut [u8],
        histogram: &mut Histogram,
        palette: &Palette,
        removed: usize,
    ) -> Result<(), DitherError> {
        if palette.is_empty() {
            return Err(DitherError::invalid("palette has no entries"));
        }
        let candidates = palette.oklab_colors();
        let removed = removed as u8;

        for (slot, &pixel) in indices.iter_mut().zip(&self.pixels) {
            if *slot == removed {
                let nearest = nearest_in(pixel, candidates);
                *slot = nearest as u8;
                histogram.increment(palette.catalog_index(nearest));
            } else if *slot > removed {
                *slot -= 1;
            }
        }
        Ok(())
    }
}

/// Dithering strategy that re-dithers the full image after every removal.
#[derive(Debug, Clone)]
pub struct FullReclassify<'a> {
    image: &'a [Srgb],
    width: usize,
    height: usize,
    options: DitherOptions,
}

impl<'a> FullReclassify<'a> {
    /// Re-dither `image` with `options` on every measurement.
    pub fn new(image: &'a [Srgb], width: usize, height: usize, options: DitherOptions) -> Self {
        Self {
            image,
            width,
            height,
            options,
        }
    }
}

impl MeasureAndReduce for FullReclassify<'_> {
    fn measure(&self, palette: &Palette) -> Result<(Vec<u8>, Histogram), DitherError> {
        let dithered = dither_image(self.image, self.width, self.height, palette, &self.options)?;
        let histogram = dithered.histogram();
        Ok((dithered.indices().to_vec(), histogram))
    }

    fn reclassify(
        &self,
        indices: &mut [u8],
        histogram: &mut Histogram,
        palette: &Palette,
        _removed: usize,
    ) -> Result<(), DitherError> {
        let (fresh, fresh_histogram) = self.measure(palette)?;
        indices.copy_from_slice(&fresh);
        *histogram = fresh_histogram;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn catalog_pixels(indices: &[u8]) -> Vec<Srgb> {
        indices.iter().filter_map(|&i| catalog::color(i)).collect()
    }

    #[test]
    fn test_incremental_repairs_only_removed_pixels() {
        let image = catalog_pixels(&[0, 7, 8, 7]);
        let strategy = IncrementalReclassify::new(&image);
        let mut palette = Palette::new(&[0, 7, 8]).unwrap();

        let (mut indices, mut histogram) = strategy.measure(&palette).unwrap();
        assert_eq!(indices, vec![0, 1, 2, 1]);

        // Drop white (position 1)
        let removed = palette.remove(1);
        assert_eq!(histogram.take(removed), 2);
        strategy
            .reclassify(&mut indices, &mut histogram, &palette, 1)
            .unwrap();

        // Red moved down from 2 to 1; former white pixels landed somewhere valid
        assert_eq!(indices[0], 0);
        assert_eq!(indices[2], 1);
        assert!(indices.iter().all(|&i| (i as usize) < palette.len()));
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram, Histogram::from_indices(&indices, &palette));
    }

    #[test]
    fn test_full_reclassify_rebuilds_histogram() {
        let image = vec![Srgb::from_u8(128, 128, 128); 16];
        let strategy = FullReclassify::new(&image, 4, 4, DitherOptions::error_diffusion(1.0));
        let mut palette = Palette::new(&[0, 5, 7]).unwrap();

        let (mut indices, mut histogram) = strategy.measure(&palette).unwrap();
        assert_eq!(histogram.total(), 16);

        let removed = palette.remove(1);
        histogram.take(removed);
        strategy
            .reclassify(&mut indices, &mut histogram, &palette, 1)
            .unwrap();

        assert_eq!(histogram.count(5), 0);
        assert_eq!(histogram.total(), 16);
        assert!(indices.iter().all(|&i| i < 2));
    }
}
