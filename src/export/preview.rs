//! PNG preview of a converted image.

use pico_dither::IndexedImage;
use std::io::Cursor;

use crate::error::ConvertError;

/// Encode the device colors of every pixel as an 8-bit RGB PNG.
pub fn encode_preview(image: &IndexedImage) -> Result<Vec<u8>, ConvertError> {
    let width = u32::try_from(image.width())
        .map_err(|_| ConvertError::PngEncode("image too wide".to_string()))?;
    let height = u32::try_from(image.height())
        .map_err(|_| ConvertError::PngEncode("image too tall".to_string()))?;
    encode_png(width, height, &image.to_rgb())
}

fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
