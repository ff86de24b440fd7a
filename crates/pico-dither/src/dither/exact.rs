//! Plain nearest-color classification.

use super::{Dither, DitherOptions};
use crate::classify::nearest_in;
use crate::color::{Oklab, Srgb};
use crate::palette::Palette;

/// Maps every pixel to its nearest palette entry with no dithering.
///
/// Used when strength is zero and when measuring color usage for palette
/// reduction. Each pixel is independent of its neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl Dither for Exact {
    fn dither(
        &self,
        image: &[Srgb],
        _width: usize,
        _height: usize,
        palette: &Palette,
        _options: &DitherOptions,
    ) -> Vec<u8> {
        let candidates = palette.oklab_colors();
        image
            .iter()
            .map(|&pixel| nearest_in(Oklab::from(pixel), candidates) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_catalog_colors_map_to_themselves() {
        let palette = Palette::full();
        let image: Vec<Srgb> = (0..32u8).filter_map(catalog::color).collect();
        let result = Exact.dither(&image, 32, 1, &palette, &DitherOptions::exact());
        let expected: Vec<u8> = (0..32).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_off_palette_color_goes_to_nearest() {
        let palette = Palette::new(&[0, 7]).unwrap();
        let image = [Srgb::from_u8(10, 10, 10), Srgb::from_u8(250, 250, 240)];
        let result = Exact.dither(&image, 2, 1, &palette, &DitherOptions::exact());
        assert_eq!(result, vec![0, 1]);
    }
}
