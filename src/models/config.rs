use pico_dither::DitherMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "PICO_IMGPROC_CONFIG";

/// Largest side the console's sprite sheet can hold.
pub const MAX_IMAGE_SIZE: u32 = 128;

/// Conversion defaults loaded from a YAML file.
///
/// Every field is optional in the file. Command-line flags override these.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Dithering strategy used when no dither flag is given
    pub dither_mode: DitherModeSetting,

    /// Dithering strength in percent (0-100)
    pub dither: f32,

    /// Brightness shift (-100..100)
    pub brighten: f32,

    /// Contrast in percent (100 = unchanged)
    pub contrast: f32,

    /// Measure palette usage with the final dithering options
    pub slower_recommend: bool,

    /// Candidate palette as console codes (all 32 colors when absent)
    pub palette: Option<Vec<u8>>,

    /// Console codes removed from the candidate palette
    pub ban: Vec<u8>,

    /// Images larger than this on either side are scaled down
    pub max_size: u32,

    /// Side of the ordered-dither Bayer matrix
    pub ordered_matrix_size: usize,
}

/// Dithering strategy as written in a config file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DitherModeSetting {
    #[default]
    None,
    Ordered,
    FloydSteinberg,
}

impl From<DitherModeSetting> for DitherMode {
    fn from(setting: DitherModeSetting) -> Self {
        match setting {
            DitherModeSetting::None => DitherMode::Exact,
            DitherModeSetting::Ordered => DitherMode::Ordered,
            DitherModeSetting::FloydSteinberg => DitherMode::ErrorDiffusion,
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dither_mode: DitherModeSetting::None,
            dither: 70.0,
            brighten: 0.0,
            contrast: 100.0,
            slower_recommend: false,
            palette: None,
            ban: Vec::new(),
            max_size: MAX_IMAGE_SIZE,
            ordered_matrix_size: pico_dither::dither::DEFAULT_MATRIX_SIZE,
        }
    }
}

impl ConvertConfig {
    /// Parse YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConvertError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            dither_mode = ?config.dither_mode,
            max_size = config.max_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load the explicit path, else the one named by [`CONFIG_ENV`], else defaults.
    ///
    /// A named file that is missing or malformed is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConvertError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Self {
        self.max_size = self.max_size.clamp(1, MAX_IMAGE_SIZE);
        self
    }
}
