//! The fixed 32-entry PICO-8 color catalog.
//!
//! Catalog indices 0..=15 are the primary bank, always available on the
//! console. Indices 16..=31 are the secret bank; a cartridge that uses any of
//! them has to enable the bank-switch flag before remapping a slot to one.
//!
//! The console itself addresses colors by *code*: primaries use their index,
//! secret colors use `128 + index % 16`. [`code_to_index`] and
//! [`index_to_code`] convert between the two numberings.

use crate::color::Srgb;

/// Number of entries in the catalog.
pub const CATALOG_SIZE: usize = 32;

/// Number of primary colors (and of hardware palette slots).
pub const PRIMARY_COUNT: usize = 16;

/// RGB triples for every catalog index, primaries first.
pub const CATALOG_RGB: [[u8; 3]; CATALOG_SIZE] = [
    [0x00, 0x00, 0x00],
    [0x1d, 0x2b, 0x53],
    [0x7e, 0x25, 0x53],
    [0x00, 0x87, 0x51],
    [0xab, 0x52, 0x36],
    [0x5f, 0x57, 0x4f],
    [0xc2, 0xc3, 0xc7],
    [0xff, 0xf1, 0xe8],
    [0xff, 0x00, 0x4d],
    [0xff, 0xa3, 0x00],
    [0xff, 0xec, 0x27],
    [0x00, 0xe4, 0x36],
    [0x29, 0xad, 0xff],
    [0x83, 0x76, 0x9c],
    [0xff, 0x77, 0xa8],
    [0xff, 0xcc, 0xaa],
    // secret bank
    [0x29, 0x18, 0x14],
    [0x11, 0x1d, 0x35],
    [0x42, 0x21, 0x36],
    [0x12, 0x53, 0x59],
    [0x74, 0x2f, 0x29],
    [0x49, 0x33, 0x3b],
    [0xa2, 0x88, 0x79],
    [0xf3, 0xef, 0x7d],
    [0xbe, 0x12, 0x50],
    [0xff, 0x6c, 0x24],
    [0xa8, 0xe7, 0x2e],
    [0x00, 0xb5, 0x43],
    [0x06, 0x5a, 0xb5],
    [0x75, 0x46, 0x65],
    [0xff, 0x6e, 0x59],
    [0xff, 0x9d, 0x81],
];

/// Returns true if `index` is a valid catalog index.
#[inline]
pub const fn is_valid(index: u8) -> bool {
    (index as usize) < CATALOG_SIZE
}

/// Returns true if `index` belongs to the secret bank.
#[inline]
pub const fn is_secret(index: u8) -> bool {
    index as usize >= PRIMARY_COUNT
}

/// RGB bytes of a catalog entry, or `None` for an out-of-range index.
#[inline]
pub fn rgb(index: u8) -> Option<[u8; 3]> {
    CATALOG_RGB.get(index as usize).copied()
}

/// Device color of a catalog entry, or `None` for an out-of-range index.
#[inline]
pub fn color(index: u8) -> Option<Srgb> {
    rgb(index).map(Srgb::from_bytes)
}

/// Lowercase `#rrggbb` string for a catalog entry.
pub fn hex(index: u8) -> Option<String> {
    rgb(index).map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Map a console color code (0..=255) to its catalog index.
///
/// `code % 16` picks the column, `code / 128` picks the bank. Codes between
/// 16 and 127 wrap onto the primary bank, as the console does.
///
/// # Example
/// ```
/// use pico_dither::catalog::code_to_index;
/// assert_eq!(code_to_index(17), 1);
/// assert_eq!(code_to_index(144), 16);
/// ```
#[inline]
pub const fn code_to_index(code: u8) -> u8 {
    (code % 16) + 16 * (code / 128)
}

/// Map a catalog index to the console color code written into cartridges.
#[inline]
pub const fn index_to_code(index: u8) -> u8 {
    128 * (index / 16) + index % 16
}
