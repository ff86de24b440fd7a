//! Plain-text palette files.
//!
//! A palette file lists one console color code per line, each an integer in
//! 0..=255. Surrounding whitespace is ignored and blank lines are skipped.
//! Codes are folded onto the catalog with [`catalog::code_to_index`]; when two
//! codes land on the same catalog index only the first is kept.

use super::error::PaletteError;
use super::palette::Palette;
use crate::catalog;

/// Parse palette-file text into catalog indices, in file order.
///
/// # Errors
///
/// [`PaletteError::InvalidCode`] for a line that is not an integer in 0..=255.
///
/// # Example
///
/// ```
/// use pico_dither::palette::parse_palette_file;
///
/// let indices = parse_palette_file("0\n1\n17\n144\n").unwrap();
/// assert_eq!(indices, vec![0, 1, 16]);
/// ```
pub fn parse_palette_file(text: &str) -> Result<Vec<u8>, PaletteError> {
    Ok(codes_to_indices(&parse_codes(text)?))
}

/// Fold console codes onto catalog indices, keeping the first of any repeats.
pub fn codes_to_indices(codes: &[u8]) -> Vec<u8> {
    let mut indices = Vec::with_capacity(codes.len());
    for &code in codes {
        let index = catalog::code_to_index(code);
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    indices
}

/// Parse palette-file text into raw console codes, without folding or dedup.
pub fn parse_codes(text: &str) -> Result<Vec<u8>, PaletteError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let value = line.trim();
            value.parse::<u8>().map_err(|_| PaletteError::InvalidCode {
                line: i + 1,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Parse palette-file text straight into a [`Palette`].
pub fn palette_from_file(text: &str) -> Result<Palette, PaletteError> {
    Palette::new(&parse_palette_file(text)?)
}

/// Render a palette as palette-file text: one console code per line.
pub fn format_palette_file(palette: &Palette) -> String {
    palette
        .entries()
        .iter()
        .map(|&index| format!("{}\n", catalog::index_to_code(index)))
        .collect()
}
