//! Unified error type for the pico-dither public API.
//!
//! [`DitherError`] wraps every failure the engine can report so application
//! code can propagate it with `?`.

use crate::palette::PaletteError;
use thiserror::Error;

/// Broad failure classes shared by the engine and its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input: empty candidate set, malformed palette entry, size mismatch
    InvalidArgument,
    /// An operation was invoked before its input reached the required shape
    PreconditionViolation,
    /// A source outside the engine (image file, config) could not be read
    ResourceUnavailable,
}

/// Unified error type for the pico-dither public API.
///
/// # Example
///
/// ```
/// use pico_dither::{DitherError, Palette};
///
/// fn primaries() -> Result<Palette, DitherError> {
///     let palette = Palette::new(&[0, 1, 2, 3])?;
///     Ok(palette)
/// }
/// # assert!(primaries().is_ok());
/// ```
#[derive(Debug, Error)]
pub enum DitherError {
    /// Caller passed input the engine cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation requires a differently shaped input
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Palette validation or palette-file parse error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

impl DitherError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DitherError::InvalidArgument(_) | DitherError::Palette(_) => ErrorKind::InvalidArgument,
            DitherError::PreconditionViolation(_) => ErrorKind::PreconditionViolation,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DitherError::InvalidArgument(message.into())
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        DitherError::PreconditionViolation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            DitherError::invalid("empty candidate set").to_string(),
            "invalid argument: empty candidate set"
        );
        assert_eq!(
            DitherError::precondition("need 16 entries").to_string(),
            "precondition violated: need 16 entries"
        );
    }

    #[test]
    fn test_palette_errors_are_invalid_arguments() {
        let err: DitherError = PaletteError::InvalidCatalogIndex { index: 99 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            "palette error: invalid catalog index 99 (catalog has 32 entries)"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DitherError::invalid("x").kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            DitherError::precondition("x").kind(),
            ErrorKind::PreconditionViolation
        );
    }
}
