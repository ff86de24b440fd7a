//! Error types for palette construction and palette files.

use thiserror::Error;

/// Error type for palette validation and palette-file parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A catalog index outside 0..=31
    #[error("invalid catalog index {index} (catalog has 32 entries)")]
    InvalidCatalogIndex {
        /// The offending index
        index: u8,
    },

    /// The same catalog index appears twice
    #[error("duplicate catalog index {index} at position {position}")]
    DuplicateIndex {
        /// The repeated catalog index
        index: u8,
        /// Position of the second occurrence
        position: usize,
    },

    /// More entries than the catalog holds
    #[error("palette has {count} entries (max 32)")]
    TooManyColors {
        /// Number of entries supplied
        count: usize,
    },

    /// A palette-file line that is not an integer in 0..=255
    #[error("line {line}: invalid color code {value:?} (expected an integer 0-255)")]
    InvalidCode {
        /// 1-based line number
        line: usize,
        /// The trimmed line content
        value: String,
    },
}
