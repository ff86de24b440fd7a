//! Floyd-Steinberg error diffusion.
//!
//! Rows are scanned serpentine: even rows left to right, odd rows right to
//! left with the kernel mirrored. Error is accumulated in device space and
//! scaled by the dithering strength before it is spread.

use super::{Dither, DitherOptions, ErrorBuffer, Kernel, FLOYD_STEINBERG};
use crate::classify::nearest_in;
use crate::color::{Oklab, Srgb};
use crate::palette::Palette;

/// Serpentine Floyd-Steinberg error diffusion.
///
/// For each pixel the accumulated debt is added and the result clamped to
/// 0..=255. The clamped color is classified in Oklab, and
/// `strength * (adjusted - chosen)` is spread to the unvisited neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Neighbors outside the image are skipped; their share of the error is
/// dropped.
///
/// # Example
///
/// ```
/// use pico_dither::{Dither, DitherOptions, FloydSteinberg, Palette, Srgb};
///
/// let palette = Palette::new(&[0, 7]).unwrap();
/// let pixels = vec![Srgb::from_u8(128, 128, 128); 16];
/// let indices = FloydSteinberg.dither(&pixels, 4, 4, &palette, &DitherOptions::error_diffusion(1.0));
/// assert_eq!(indices.len(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(
        &self,
        image: &[Srgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        diffuse(image, width, height, palette, &FLOYD_STEINBERG, options)
    }
}

fn diffuse(
    image: &[Srgb],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
    options: &DitherOptions,
) -> Vec<u8> {
    let strength = options.effective_strength();
    let candidates = palette.oklab_colors();
    let divisor = kernel.divisor as f32;

    let mut output = vec![0u8; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);

    for y in 0..height {
        let reverse = y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let idx = y * width + x;

            let adjusted = image[idx].add(error_buf.get_accumulated(x)).clamped();
            let nearest = nearest_in(Oklab::from(adjusted), candidates);
            output[idx] = nearest as u8;

            let diff = adjusted.difference(palette.device(nearest));
            let error = [strength * diff[0], strength * diff[1], strength * diff[2]];

            for &(dx, dy, weight) in kernel.entries {
                let effective_dx = if reverse { -dx } else { dx };
                let nx = x as i32 + effective_dx;
                if nx < 0 || nx as usize >= width {
                    continue;
                }
                let ny = y + dy as usize;
                if ny >= height {
                    continue;
                }
                let share = weight as f32 / divisor;
                error_buf.add_error(
                    nx as usize,
                    dy as usize,
                    [error[0] * share, error[1] * share, error[2] * share],
                );
            }
        }

        error_buf.advance_row();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::new(&[0, 7]).unwrap()
    }

    #[test]
    fn test_palette_colors_pass_through() {
        let palette = black_white();
        let white = palette.device(1);
        let black = palette.device(0);
        let image = vec![white, black, black, white];
        let result =
            FloydSteinberg.dither(&image, 2, 2, &palette, &DitherOptions::error_diffusion(1.0));
        assert_eq!(result, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_mid_grey_produces_mix() {
        let palette = black_white();
        let image = vec![Srgb::from_u8(128, 128, 128); 16 * 16];
        let result = FloydSteinberg.dither(
            &image,
            16,
            16,
            &palette,
            &DitherOptions::error_diffusion(1.0),
        );
        let light = result.iter().filter(|&&i| i == 1).count();
        // Roughly half the area should be light
        assert!(
            (80..=176).contains(&light),
            "expected roughly half light pixels, got {light}"
        );
    }

    #[test]
    fn test_single_column_and_single_row() {
        let palette = black_white();
        let column = vec![Srgb::from_u8(128, 128, 128); 5];
        let result = FloydSteinberg.dither(
            &column,
            1,
            5,
            &palette,
            &DitherOptions::error_diffusion(1.0),
        );
        assert_eq!(result.len(), 5);

        let row = vec![Srgb::from_u8(128, 128, 128); 5];
        let result =
            FloydSteinberg.dither(&row, 5, 1, &palette, &DitherOptions::error_diffusion(1.0));
        assert_eq!(result.len(), 5);
        assert!(result.contains(&0) && result.contains(&1));
    }

    #[test]
    fn test_odd_rows_push_error_leftward() {
        let palette = black_white();
        // Row 1 runs right to left: the 80 at x=1 is classified first and
        // hands 7/16 of its error to the 70 at x=0, lifting it over the
        // black/white boundary.
        let image = vec![
            Srgb::from_u8(0, 0, 0),
            Srgb::from_u8(0, 0, 0),
            Srgb::from_u8(70, 70, 70),
            Srgb::from_u8(80, 80, 80),
        ];
        let result =
            FloydSteinberg.dither(&image, 2, 2, &palette, &DitherOptions::error_diffusion(1.0));
        assert_eq!(result, vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_deterministic() {
        let palette = Palette::primaries();
        let image: Vec<Srgb> = (0..64)
            .map(|i| Srgb::from_u8((i * 4) as u8, (255 - i * 3) as u8, (i * 2) as u8))
            .collect();
        let options = DitherOptions::error_diffusion(0.7);
        let first = FloydSteinberg.dither(&image, 8, 8, &palette, &options);
        let second = FloydSteinberg.dither(&image, 8, 8, &palette, &options);
        assert_eq!(first, second);
    }
}
