//! Linear RGB color type
//!
//! Linear RGB is the intermediate step between gamma-encoded device colors
//! and Oklab. The engine never does arithmetic here; it only passes through
//! on the way to the perceptual space.

use super::srgb::Srgb;

/// A color in linear RGB color space (light intensity, 0.0..=1.0 for in-gamut colors).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Decode one gamma-encoded channel in 0.0..=1.0 (IEC 61966-2-1).
#[inline]
pub(crate) fn decode_gamma(encoded: f32) -> f32 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    /// Normalize device channels to 0.0..=1.0 and remove the sRGB gamma curve.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: decode_gamma(srgb.r / 255.0),
            g: decode_gamma(srgb.g / 255.0),
            b: decode_gamma(srgb.b / 255.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_gamma_values() {
        let black = LinearRgb::from(Srgb::from_u8(0, 0, 0));
        assert!(black.r.abs() < 1e-6);

        let white = LinearRgb::from(Srgb::from_u8(255, 255, 255));
        assert!((white.r - 1.0).abs() < 1e-6);

        // Exact: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        let mid = LinearRgb::from(Srgb::new(127.5, 127.5, 127.5));
        assert!(
            (mid.r - 0.214).abs() < 0.001,
            "sRGB 0.5 -> linear expected ~0.214, got {}",
            mid.r
        );
    }

    #[test]
    fn test_linear_segment_near_black() {
        // 8/255 = 0.0314 sits on the linear toe of the curve
        let dark = LinearRgb::from(Srgb::from_u8(8, 8, 8));
        assert!((dark.r - (8.0 / 255.0) / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_decoding_is_monotonic() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let linear = LinearRgb::from(Srgb::from_u8(v, v, v)).r;
            assert!(linear > previous, "not increasing at {v}");
            previous = linear;
        }
    }
}
