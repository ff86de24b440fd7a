//! Working palette: an ordered set of catalog indices with precomputed colors.

use super::error::PaletteError;
use crate::api::DitherError;
use crate::catalog::{self, CATALOG_SIZE, PRIMARY_COUNT};
use crate::classify;
use crate::color::{Oklab, Srgb};

/// An ordered sequence of distinct catalog indices.
///
/// The position of an entry is its *palette-local* index, the value stored in
/// an index map. Device and Oklab colors for every entry are computed once at
/// construction and kept in step when entries are removed, so matching never
/// converts catalog colors per pixel.
///
/// An empty palette is a valid value (a user may ban every color); operations
/// that need candidates reject it with [`DitherError::InvalidArgument`].
///
/// # Example
///
/// ```
/// use pico_dither::Palette;
///
/// let palette = Palette::new(&[0, 7, 8]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.catalog_index(2), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<u8>,
    device: Vec<Srgb>,
    oklab: Vec<Oklab>,
}

impl Palette {
    /// Create a palette from catalog indices.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::TooManyColors`] for more than 32 entries
    /// - [`PaletteError::InvalidCatalogIndex`] for an index above 31
    /// - [`PaletteError::DuplicateIndex`] if an index repeats
    pub fn new(entries: &[u8]) -> Result<Self, PaletteError> {
        if entries.len() > CATALOG_SIZE {
            return Err(PaletteError::TooManyColors {
                count: entries.len(),
            });
        }

        let mut seen = [false; CATALOG_SIZE];
        let mut device = Vec::with_capacity(entries.len());
        for (position, &index) in entries.iter().enumerate() {
            let color =
                catalog::color(index).ok_or(PaletteError::InvalidCatalogIndex { index })?;
            if seen[index as usize] {
                return Err(PaletteError::DuplicateIndex { index, position });
            }
            seen[index as usize] = true;
            device.push(color);
        }

        let oklab = device.iter().map(|&c| Oklab::from(c)).collect();

        Ok(Self {
            entries: entries.to_vec(),
            device,
            oklab,
        })
    }

    /// All 32 catalog colors in catalog order.
    pub fn full() -> Self {
        Self::from_trusted((0..CATALOG_SIZE as u8).collect())
    }

    /// The 16 primary colors in catalog order.
    pub fn primaries() -> Self {
        Self::from_trusted((0..PRIMARY_COUNT as u8).collect())
    }

    /// Build from indices already known to be valid and distinct.
    fn from_trusted(entries: Vec<u8>) -> Self {
        let device: Vec<Srgb> = entries
            .iter()
            .filter_map(|&index| catalog::color(index))
            .collect();
        let oklab = device.iter().map(|&c| Oklab::from(c)).collect();
        Self {
            entries,
            device,
            oklab,
        }
    }

    /// A copy of this palette without the given catalog indices.
    ///
    /// Indices that are not present are ignored.
    pub fn without(&self, banned: &[u8]) -> Self {
        let kept: Vec<u8> = self
            .entries
            .iter()
            .copied()
            .filter(|index| !banned.contains(index))
            .collect();
        Self::from_trusted(kept)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog indices in palette order.
    #[inline]
    pub fn entries(&self) -> &[u8] {
        &self.entries
    }

    /// Catalog index at a palette position.
    #[inline]
    pub fn catalog_index(&self, position: usize) -> u8 {
        self.entries[position]
    }

    /// Device color at a palette position.
    #[inline]
    pub fn device(&self, position: usize) -> Srgb {
        self.device[position]
    }

    /// Oklab color at a palette position.
    #[inline]
    pub fn oklab(&self, position: usize) -> Oklab {
        self.oklab[position]
    }

    /// Oklab colors of every entry, in palette order.
    #[inline]
    pub fn oklab_colors(&self) -> &[Oklab] {
        &self.oklab
    }

    /// Position of a catalog index in this palette.
    pub fn position_of(&self, index: u8) -> Option<usize> {
        self.entries.iter().position(|&e| e == index)
    }

    /// Returns true if any entry comes from the secret bank.
    pub fn uses_secret_bank(&self) -> bool {
        self.entries.iter().any(|&index| catalog::is_secret(index))
    }

    /// Nearest entry to an Oklab color.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidArgument`] for an empty palette.
    #[inline]
    pub fn find_nearest(&self, color: Oklab) -> Result<usize, DitherError> {
        classify::nearest(color, &self.oklab)
    }

    /// Remove the entry at `position`, shifting later entries down by one.
    ///
    /// Returns the removed catalog index.
    pub(crate) fn remove(&mut self, position: usize) -> u8 {
        self.device.remove(position);
        self.oklab.remove(position);
        self.entries.remove(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_and_primaries() {
        let full = Palette::full();
        assert_eq!(full.len(), 32);
        assert_eq!(full.catalog_index(31), 31);
        assert!(full.uses_secret_bank());

        let primaries = Palette::primaries();
        assert_eq!(primaries.len(), 16);
        assert!(!primaries.uses_secret_bank());
    }

    #[test]
    fn test_new_precomputes_colors() {
        let palette = Palette::new(&[8, 16]).unwrap();
        assert_eq!(palette.device(0).to_bytes(), [0xff, 0x00, 0x4d]);
        assert_eq!(palette.device(1).to_bytes(), [0x29, 0x18, 0x14]);
        assert_eq!(palette.oklab(0), Oklab::from(Srgb::from_u8(0xff, 0x00, 0x4d)));
        assert_eq!(palette.oklab_colors().len(), 2);
    }

    #[test]
    fn test_empty_palette_is_allowed() {
        let palette = Palette::new(&[]).unwrap();
        assert!(palette.is_empty());
        assert!(palette.find_nearest(Oklab::new(0.5, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_invalid_index_rejected() {
        assert_eq!(
            Palette::new(&[0, 32]),
            Err(PaletteError::InvalidCatalogIndex { index: 32 })
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            Palette::new(&[4, 5, 4]),
            Err(PaletteError::DuplicateIndex {
                index: 4,
                position: 2
            })
        );
    }

    #[test]
    fn test_too_many_rejected() {
        let entries: Vec<u8> = (0..33).map(|i| (i % 32) as u8).collect();
        assert_eq!(
            Palette::new(&entries),
            Err(PaletteError::TooManyColors { count: 33 })
        );
    }

    #[test]
    fn test_without_removes_banned() {
        let palette = Palette::full().without(&[0, 17, 31, 99]);
        assert_eq!(palette.len(), 29);
        assert_eq!(palette.position_of(0), None);
        assert_eq!(palette.position_of(1), Some(0));
        assert_eq!(palette.device(0), catalog::color(1).unwrap());
    }

    #[test]
    fn test_remove_keeps_colors_in_step() {
        let mut palette = Palette::new(&[3, 9, 12]).unwrap();
        assert_eq!(palette.remove(1), 9);
        assert_eq!(palette.entries(), &[3, 12]);
        assert_eq!(palette.device(1), catalog::color(12).unwrap());
        assert_eq!(palette.oklab(1), Oklab::from(catalog::color(12).unwrap()));
    }

    #[test]
    fn test_find_nearest_matches_catalog_color() {
        let palette = Palette::full();
        for index in 0..32u8 {
            let color = Oklab::from(catalog::color(index).unwrap());
            assert_eq!(palette.find_nearest(color).unwrap(), index as usize);
        }
    }
}
