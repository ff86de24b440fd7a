pub mod config;

pub use config::{ConvertConfig, DitherModeSetting, CONFIG_ENV, MAX_IMAGE_SIZE};
