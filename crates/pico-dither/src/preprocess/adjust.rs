//! Brightness and contrast.

use crate::color::Srgb;

/// Device-space midpoint that contrast scales around.
const MIDPOINT: f32 = 127.5;

/// Brightness/contrast adjustment applied before palette reduction.
///
/// Each channel becomes
/// `(v - 127.5) * contrast / 100 + 127.5 + 2.55 * brighten`, clamped to
/// 0..=255. The default (`brighten = 0`, `contrast = 100`) is the identity.
///
/// # Example
///
/// ```
/// use pico_dither::{Adjustment, Srgb};
///
/// let brighter = Adjustment::new().brighten(10.0);
/// assert_eq!(brighter.apply(Srgb::from_u8(100, 100, 100)).to_bytes(), [126, 126, 126]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Brightness shift, -100.0..=100.0 (percent of full scale).
    ///
    /// Default: `0.0`
    pub brighten: f32,

    /// Contrast in percent; 100.0 leaves contrast unchanged.
    ///
    /// Default: `100.0`
    pub contrast: f32,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self {
            brighten: 0.0,
            contrast: 100.0,
        }
    }
}

impl Adjustment {
    /// The identity adjustment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness shift.
    pub fn brighten(mut self, brighten: f32) -> Self {
        self.brighten = brighten;
        self
    }

    /// Set the contrast percentage.
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Returns true if applying this adjustment changes nothing.
    pub fn is_identity(&self) -> bool {
        self.brighten == 0.0 && self.contrast == 100.0
    }

    /// Adjust one pixel.
    #[inline]
    pub fn apply(&self, pixel: Srgb) -> Srgb {
        let factor = self.contrast / 100.0;
        let shift = 2.55 * self.brighten;
        let channel = |v: f32| (v - MIDPOINT) * factor + MIDPOINT + shift;
        Srgb::new(channel(pixel.r), channel(pixel.g), channel(pixel.b)).clamped()
    }

    /// Adjust a whole image in place.
    pub fn apply_all(&self, pixels: &mut [Srgb]) {
        if self.is_identity() {
            return;
        }
        for pixel in pixels.iter_mut() {
            *pixel = self.apply(*pixel);
        }
    }
}
