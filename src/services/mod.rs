pub mod image_loader;
pub mod pipeline;

pub use image_loader::{load_image, load_image_bytes, LoadedImage};
pub use pipeline::{
    percent_to_strength, resolve_palette, ConversionPipeline, ConvertReport, ConvertRequest,
    PaletteChoice,
};
