//! Device-space sRGB color type
//!
//! Pixels arrive from the image decoder as 8-bit sRGB triples. The engine
//! keeps them as floats on the 0..=255 scale so that dithering offsets and
//! diffused error can be added without losing precision.

/// A color in device (gamma-encoded sRGB) space.
///
/// Channels use the 0.0..=255.0 scale of the 8-bit source samples. Values
/// outside that range only exist transiently while error or ordered offsets
/// are being applied; [`Srgb::clamped`] brings them back before matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (0.0..=255.0)
    pub r: f32,
    /// Green channel (0.0..=255.0)
    pub g: f32,
    /// Blue channel (0.0..=255.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new device color from float channel values on the 0..=255 scale.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a device color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pico_dither::Srgb;
    /// let red = Srgb::from_u8(255, 0, 77);
    /// assert_eq!(red.r, 255.0);
    /// assert_eq!(red.b, 77.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Create a device color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`, rounding and clamping each channel.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Add the same offset to every channel.
    #[inline]
    pub fn offset(self, amount: f32) -> Self {
        Self::new(self.r + amount, self.g + amount, self.b + amount)
    }

    /// Add a per-channel `[r, g, b]` delta.
    #[inline]
    pub fn add(self, delta: [f32; 3]) -> Self {
        Self::new(self.r + delta[0], self.g + delta[1], self.b + delta[2])
    }

    /// Per-channel difference `self - other`.
    #[inline]
    pub fn difference(self, other: Srgb) -> [f32; 3] {
        [self.r - other.r, self.g - other.g, self.b - other.b]
    }

    /// Clamp every channel into 0.0..=255.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 255.0),
            self.g.clamp(0.0, 255.0),
            self.b.clamp(0.0, 255.0),
        )
    }
}
