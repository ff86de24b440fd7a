//! PicoConverter builder, the main entry point for the crate.
//!
//! [`PicoConverter`] strings the engine together: tone adjustment, palette
//! reduction, slot arrangement and the final dithering pass.

use crate::api::DitherError;
use crate::arrange::arrange;
use crate::color::Srgb;
use crate::dither::{dither_image, DitherMode, DitherOptions};
use crate::output::IndexedImage;
use crate::palette::Palette;
use crate::preprocess::Adjustment;
use crate::reduce::{reduce, TARGET_COLORS};

/// Converts device-space images to 16-slot indexed images.
///
/// # Pipeline
///
/// 1. Apply the brightness/contrast [`Adjustment`]
/// 2. If the candidate palette has 16 or more entries, reduce it to 16 and
///    arrange it onto the hardware slots
/// 3. Dither the adjusted image against the final palette
///
/// Reduction measures usage with exact classification, which is fast and
/// repairs the index map incrementally. With
/// [`slower_recommend`](Self::slower_recommend) it measures with the final
/// dithering options instead, which tracks the dithered result more closely
/// at the cost of one full dithering pass per removed color.
///
/// # Example
///
/// ```
/// use pico_dither::{DitherOptions, Palette, PicoConverter, Srgb};
///
/// let pixels: Vec<Srgb> = (0..64).map(|i| Srgb::from_u8(i * 4, 128, 255 - i * 4)).collect();
/// let converter = PicoConverter::new(Palette::full())
///     .options(DitherOptions::error_diffusion(0.7))
///     .contrast(110.0);
///
/// let image = converter.convert(&pixels, 8, 8).unwrap();
/// assert_eq!(image.palette().len(), 16);
/// assert!(image.indices().iter().all(|&i| i < 16));
/// ```
#[derive(Debug, Clone)]
pub struct PicoConverter {
    candidates: Palette,
    options: DitherOptions,
    adjustment: Adjustment,
    slower_recommend: bool,
}

impl PicoConverter {
    /// Converter over `candidates` with exact classification and no adjustment.
    pub fn new(candidates: Palette) -> Self {
        Self {
            candidates,
            options: DitherOptions::default(),
            adjustment: Adjustment::default(),
            slower_recommend: false,
        }
    }

    /// Set the dithering options for the final pass.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the dithering mode.
    #[inline]
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.options = self.options.mode(mode);
        self
    }

    /// Set the dithering strength (0.0..=1.0).
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.options = self.options.strength(strength);
        self
    }

    /// Set the brightness shift (-100..=100).
    #[inline]
    pub fn brighten(mut self, brighten: f32) -> Self {
        self.adjustment = self.adjustment.brighten(brighten);
        self
    }

    /// Set the contrast percentage (100 = unchanged).
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.adjustment = self.adjustment.contrast(contrast);
        self
    }

    /// Measure palette usage with the final dithering options.
    #[inline]
    pub fn slower_recommend(mut self, enabled: bool) -> Self {
        self.slower_recommend = enabled;
        self
    }

    /// The candidate palette.
    pub fn candidates(&self) -> &Palette {
        &self.candidates
    }

    /// Options used for the final dithering pass.
    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    /// Options used to measure usage during reduction.
    pub fn measure_options(&self) -> DitherOptions {
        if self.slower_recommend {
            self.options.clone()
        } else {
            DitherOptions::exact()
        }
    }

    /// Pick the final palette for an already adjusted image.
    ///
    /// # Errors
    ///
    /// See [`reduce`] and [`arrange`].
    pub fn choose_palette(
        &self,
        pixels: &[Srgb],
        width: usize,
        height: usize,
    ) -> Result<Palette, DitherError> {
        if self.candidates.len() < TARGET_COLORS {
            return Ok(self.candidates.clone());
        }
        let reduced = reduce(
            pixels,
            width,
            height,
            self.candidates.clone(),
            &self.measure_options(),
        )?;
        arrange(&reduced)
    }

    /// Run the full conversion.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidArgument`] for an empty candidate palette,
    /// mismatched dimensions, or an empty image when reduction is needed.
    pub fn convert(
        &self,
        pixels: &[Srgb],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, DitherError> {
        let mut adjusted = pixels.to_vec();
        self.adjustment.apply_all(&mut adjusted);

        let palette = self.choose_palette(&adjusted, width, height)?;
        dither_image(&adjusted, width, height, &palette, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    fn gradient_8x8() -> Vec<Srgb> {
        (0..64)
            .map(|i| {
                let v = (i * 4) as u8;
                Srgb::from_u8(v, 255 - v, v / 2)
            })
            .collect()
    }

    #[test]
    fn test_new_defaults() {
        let converter = PicoConverter::new(Palette::full());
        assert_eq!(converter.dither_options(), &DitherOptions::exact());
        assert_eq!(converter.measure_options(), DitherOptions::exact());
        assert_eq!(converter.candidates().len(), 32);
    }

    #[test]
    fn test_builder_chaining() {
        let converter = PicoConverter::new(Palette::full())
            .mode(DitherMode::Ordered)
            .strength(0.5)
            .brighten(-10.0)
            .contrast(150.0)
            .slower_recommend(true);
        assert_eq!(converter.dither_options().mode, DitherMode::Ordered);
        assert_eq!(converter.dither_options().strength, 0.5);
        assert_eq!(converter.adjustment, Adjustment::new().brighten(-10.0).contrast(150.0));
        assert_eq!(converter.measure_options(), DitherOptions::ordered(0.5));
    }

    #[test]
    fn test_convert_produces_sixteen_slots() {
        let image = PicoConverter::new(Palette::full())
            .options(DitherOptions::error_diffusion(0.7))
            .convert(&gradient_8x8(), 8, 8)
            .unwrap();
        assert_eq!(image.palette().len(), 16);
        for (slot, &index) in image.palette().entries().iter().enumerate() {
            if index < 16 {
                assert_eq!(slot, index as usize, "primary {index} left its slot");
            }
        }
    }

    #[test]
    fn test_small_palette_used_as_is() {
        let palette = Palette::new(&[0, 7, 8]).unwrap();
        let image = PicoConverter::new(palette.clone())
            .convert(&gradient_8x8(), 8, 8)
            .unwrap();
        assert_eq!(image.palette(), &palette);
    }

    #[test]
    fn test_convert_is_reusable() {
        let converter = PicoConverter::new(Palette::full()).strength(0.6).mode(DitherMode::Ordered);
        let first = converter.convert(&gradient_8x8(), 8, 8).unwrap();
        let second = converter.convert(&gradient_8x8(), 8, 8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let err = PicoConverter::new(Palette::new(&[]).unwrap())
            .convert(&gradient_8x8(), 8, 8)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
