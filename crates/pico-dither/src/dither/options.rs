//! Dithering options and configuration.

use super::ordered::DEFAULT_MATRIX_SIZE;

/// Which dithering strategy a pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Plain nearest-color classification of every pixel.
    #[default]
    Exact,
    /// Bayer threshold-matrix offsets added before classification.
    Ordered,
    /// Serpentine Floyd-Steinberg error diffusion.
    ErrorDiffusion,
}

/// Configuration for one dithering pass.
///
/// `strength` is a normalized factor. It is clamped into 0.0..=1.0 when
/// read through [`DitherOptions::effective_strength`], and a strength of 0.0
/// always behaves as [`DitherMode::Exact`].
///
/// # Example
///
/// ```
/// use pico_dither::{DitherMode, DitherOptions};
///
/// let options = DitherOptions::error_diffusion(0.7);
/// assert_eq!(options.mode, DitherMode::ErrorDiffusion);
/// assert!(options.is_dithering());
///
/// let off = DitherOptions::ordered(0.0);
/// assert!(!off.is_dithering());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Dithering strategy.
    ///
    /// Default: [`DitherMode::Exact`]
    pub mode: DitherMode,

    /// Dithering strength, 0.0..=1.0.
    ///
    /// Default: `0.0`
    pub strength: f32,

    /// Side length of the ordered-dither threshold matrix (power of two).
    ///
    /// Default: `4`
    pub matrix_size: usize,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            mode: DitherMode::Exact,
            strength: 0.0,
            matrix_size: DEFAULT_MATRIX_SIZE,
        }
    }
}

impl DitherOptions {
    /// Exact classification, no dithering.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact classification, no dithering.
    #[inline]
    pub fn exact() -> Self {
        Self::default()
    }

    /// Ordered dithering at the given strength.
    #[inline]
    pub fn ordered(strength: f32) -> Self {
        Self::default().mode(DitherMode::Ordered).strength(strength)
    }

    /// Error-diffusion dithering at the given strength.
    #[inline]
    pub fn error_diffusion(strength: f32) -> Self {
        Self::default()
            .mode(DitherMode::ErrorDiffusion)
            .strength(strength)
    }

    /// Set the dithering mode.
    #[inline]
    pub fn mode(mut self, mode: DitherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the dithering strength.
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Set the ordered-dither matrix size.
    #[inline]
    pub fn matrix_size(mut self, size: usize) -> Self {
        self.matrix_size = size;
        self
    }

    /// Strength clamped into 0.0..=1.0. NaN reads as 0.0.
    #[inline]
    pub fn effective_strength(&self) -> f32 {
        if self.strength.is_nan() {
            0.0
        } else {
            self.strength.clamp(0.0, 1.0)
        }
    }

    /// The mode that actually runs: any mode at zero strength is Exact.
    #[inline]
    pub fn effective_mode(&self) -> DitherMode {
        if self.effective_strength() > 0.0 {
            self.mode
        } else {
            DitherMode::Exact
        }
    }

    /// Returns true if this pass perturbs pixels before classification.
    #[inline]
    pub fn is_dithering(&self) -> bool {
        self.effective_mode() != DitherMode::Exact
    }
}
