//! Per-catalog-index pixel counts.

use crate::catalog::CATALOG_SIZE;
use crate::palette::Palette;

/// Pixel usage keyed by catalog index.
///
/// Keying by catalog index rather than palette position keeps counts stable
/// while entries are removed from the palette and positions shift.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: [u32; CATALOG_SIZE],
}

impl Histogram {
    /// An all-zero histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every palette-local index in `indices` under its catalog index.
    pub fn from_indices(indices: &[u8], palette: &Palette) -> Self {
        let mut histogram = Self::new();
        for &local in indices {
            histogram.increment(palette.catalog_index(local as usize));
        }
        histogram
    }

    /// Pixels assigned to a catalog index. Out-of-range indices count zero.
    #[inline]
    pub fn count(&self, catalog_index: u8) -> u32 {
        self.counts.get(catalog_index as usize).copied().unwrap_or(0)
    }

    /// Add one pixel to a catalog index.
    #[inline]
    pub fn increment(&mut self, catalog_index: u8) {
        if let Some(count) = self.counts.get_mut(catalog_index as usize) {
            *count += 1;
        }
    }

    /// Return the count of a catalog index and reset it to zero.
    #[inline]
    pub fn take(&mut self, catalog_index: u8) -> u32 {
        self.counts
            .get_mut(catalog_index as usize)
            .map(std::mem::take)
            .unwrap_or(0)
    }

    /// Total pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(catalog_index, count)` for every catalog index with a nonzero count.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(index, &count)| (index as u8, count))
    }
}
