use pico_dither::{DitherError, ErrorKind, PaletteError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Cannot read image {path}: {reason}")]
    ImageUnavailable { path: PathBuf, reason: String },

    #[error("Palette file {path}: {source}")]
    PaletteFile {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("Output file {0} already exists (use --force to overwrite)")]
    OutputExists(PathBuf),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Failure class shared with the engine's errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::ImageUnavailable { .. } | ConvertError::Io(_) => {
                ErrorKind::ResourceUnavailable
            }
            ConvertError::Config(_) => ErrorKind::ResourceUnavailable,
            ConvertError::PaletteFile { .. } => ErrorKind::InvalidArgument,
            ConvertError::Dither(e) => e.kind(),
            ConvertError::Precondition(_) | ConvertError::OutputExists(_) => {
                ErrorKind::PreconditionViolation
            }
            ConvertError::PngEncode(_) => ErrorKind::ResourceUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_unavailable() {
        let error = ConvertError::ImageUnavailable {
            path: PathBuf::from("missing.png"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot read image missing.png: No such file or directory"
        );
        assert_eq!(error.kind(), ErrorKind::ResourceUnavailable);
    }

    #[test]
    fn test_palette_file() {
        let error = ConvertError::PaletteFile {
            path: PathBuf::from("colors.txt"),
            source: PaletteError::InvalidCode {
                line: 3,
                value: "red".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "Palette file colors.txt: line 3: invalid color code \"red\" (expected an integer 0-255)"
        );
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_output_exists() {
        let error = ConvertError::OutputExists(PathBuf::from("out.p8"));
        assert_eq!(
            error.to_string(),
            "Output file out.p8 already exists (use --force to overwrite)"
        );
        assert_eq!(error.kind(), ErrorKind::PreconditionViolation);
    }

    #[test]
    fn test_from_dither_error_keeps_kind() {
        let error: ConvertError = DitherError::PreconditionViolation("need 16".to_string()).into();
        assert!(matches!(error, ConvertError::Dither(_)));
        assert_eq!(error.kind(), ErrorKind::PreconditionViolation);
    }

    #[test]
    fn test_png_encode() {
        let error = ConvertError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }
}
