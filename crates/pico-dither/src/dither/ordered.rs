//! Ordered (Bayer) dithering.
//!
//! The threshold matrix is built by recursive 2x2 subdivision. Starting from
//! `[[0, 2], [3, 1]]`, each doubling places `4M`, `4M + 2`, `4M + 3` and
//! `4M + 1` in the top-left, top-right, bottom-left and bottom-right
//! quadrants. Unrolled, the rank of a cell is a base-4 number whose digits
//! come from the bit pairs of its row and column, least significant bit pair
//! first.
//!
//! Each rank becomes a channel offset of `255 * (rank / N² - 0.5)`, centered
//! on zero. Pixels are independent of each other, so the pass is
//! order-independent.

use super::{Dither, DitherOptions};
use crate::api::DitherError;
use crate::classify::nearest_in;
use crate::color::{Oklab, Srgb};
use crate::palette::Palette;

/// Matrix side used when none is configured.
pub const DEFAULT_MATRIX_SIZE: usize = 4;

/// Largest supported matrix side.
pub const MAX_MATRIX_SIZE: usize = 256;

/// Rank offset of each 2x2 quadrant, indexed by `[row_bit][col_bit]`.
const QUADRANT: [[u32; 2]; 2] = [[0, 2], [3, 1]];

/// Rank of cell (`row`, `col`) in a Bayer matrix of side `1 << levels`.
const fn bayer_rank(row: usize, col: usize, levels: u32) -> u32 {
    let mut rank = 0;
    let mut level = 0;
    while level < levels {
        let row_bit = (row >> level) & 1;
        let col_bit = (col >> level) & 1;
        rank = rank * 4 + QUADRANT[row_bit][col_bit];
        level += 1;
    }
    rank
}

const fn build_bayer_4x4() -> [[u8; 4]; 4] {
    let mut matrix = [[0u8; 4]; 4];
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 4 {
            matrix[row][col] = bayer_rank(row, col, 2) as u8;
            col += 1;
        }
        row += 1;
    }
    matrix
}

/// The default 4x4 Bayer matrix, computed at compile time.
pub const BAYER_4X4: [[u8; 4]; 4] = build_bayer_4x4();

/// A square Bayer threshold matrix with precomputed channel offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMatrix {
    size: usize,
    ranks: Vec<u32>,
    offsets: Vec<f32>,
}

impl ThresholdMatrix {
    /// Build a matrix of side `size`.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidArgument`] unless `size` is a power of two in
    /// 2..=256.
    ///
    /// # Example
    ///
    /// ```
    /// use pico_dither::dither::ThresholdMatrix;
    ///
    /// let m = ThresholdMatrix::new(4).unwrap();
    /// assert_eq!(m.rank(0, 1), 8);
    /// assert!(ThresholdMatrix::new(6).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, DitherError> {
        if !(2..=MAX_MATRIX_SIZE).contains(&size) || !size.is_power_of_two() {
            return Err(DitherError::invalid(format!(
                "ordered dither matrix size must be a power of two between 2 and {MAX_MATRIX_SIZE}, got {size}"
            )));
        }

        let levels = size.trailing_zeros();
        let cells = (size * size) as f32;
        let mut ranks = Vec::with_capacity(size * size);
        let mut offsets = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let rank = bayer_rank(row, col, levels);
                ranks.push(rank);
                offsets.push(255.0 * (rank as f32 / cells - 0.5));
            }
        }

        Ok(Self {
            size,
            ranks,
            offsets,
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Integer rank at (`row`, `col`), both taken modulo the side length.
    #[inline]
    pub fn rank(&self, row: usize, col: usize) -> u32 {
        self.ranks[(row % self.size) * self.size + col % self.size]
    }

    /// Centered channel offset at (`row`, `col`), in -127.5..127.5.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> f32 {
        self.offsets[(row % self.size) * self.size + col % self.size]
    }
}

impl Default for ThresholdMatrix {
    fn default() -> Self {
        let cells = (DEFAULT_MATRIX_SIZE * DEFAULT_MATRIX_SIZE) as f32;
        let ranks: Vec<u32> = BAYER_4X4.iter().flatten().map(|&r| r as u32).collect();
        let offsets = ranks
            .iter()
            .map(|&rank| 255.0 * (rank as f32 / cells - 0.5))
            .collect();
        Self {
            size: DEFAULT_MATRIX_SIZE,
            ranks,
            offsets,
        }
    }
}

/// Ordered dithering against a Bayer threshold matrix.
///
/// For each pixel, `strength * offset[row % N][col % N]` is added to every
/// channel, the result is clamped to 0..=255 and classified in Oklab.
#[derive(Debug, Clone, Default)]
pub struct OrderedDither {
    matrix: ThresholdMatrix,
}

impl OrderedDither {
    /// Ordered ditherer using the given matrix.
    pub fn new(matrix: ThresholdMatrix) -> Self {
        Self { matrix }
    }

    /// The threshold matrix in use.
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }
}

impl Dither for OrderedDither {
    fn dither(
        &self,
        image: &[Srgb],
        width: usize,
        height: usize,
        palette: &Palette,
        options: &DitherOptions,
    ) -> Vec<u8> {
        let strength = options.effective_strength();
        let candidates = palette.oklab_colors();
        let mut output = vec![0u8; width * height];

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                let adjusted = image[idx]
                    .offset(strength * self.matrix.offset(y, x))
                    .clamped();
                output[idx] = nearest_in(Oklab::from(adjusted), candidates) as u8;
            }
        }

        output
    }
}
