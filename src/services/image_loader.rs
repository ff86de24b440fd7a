//! Decode source images into device-space pixels.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use pico_dither::Srgb;
use std::path::Path;

use crate::error::ConvertError;

/// A decoded image ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    pub pixels: Vec<Srgb>,
    pub width: usize,
    pub height: usize,
}

/// Decode `path` and scale it to fit `max_size` on its longest side.
///
/// Alpha is dropped. Images already within bounds keep their size.
pub fn load_image(path: &Path, max_size: u32) -> Result<LoadedImage, ConvertError> {
    let img = image::open(path).map_err(|e| ConvertError::ImageUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(prepare(img, max_size))
}

/// Decode an in-memory image.
pub fn load_image_bytes(bytes: &[u8], max_size: u32) -> Result<LoadedImage, ConvertError> {
    let img = image::load_from_memory(bytes).map_err(|e| ConvertError::ImageUnavailable {
        path: "<memory>".into(),
        reason: e.to_string(),
    })?;
    Ok(prepare(img, max_size))
}

/// Target dimensions for an image of `width` x `height` bounded by `max_size`.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_size {
        return (width, height);
    }
    let scale = max_size as f64 / longest as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_size);
    (scaled(width), scaled(height))
}

fn prepare(img: DynamicImage, max_size: u32) -> LoadedImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (target_w, target_h) = fit_dimensions(width, height, max_size);

    let rgb: RgbImage = if (target_w, target_h) != (width, height) {
        tracing::info!(
            from_width = width,
            from_height = height,
            width = target_w,
            height = target_h,
            "Resizing image"
        );
        image::imageops::resize(&rgb, target_w, target_h, FilterType::Triangle)
    } else {
        rgb
    };

    let pixels = rgb.pixels().map(|p| Srgb::from_bytes(p.0)).collect();
    LoadedImage {
        pixels,
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(fit_dimensions(100, 50, 128), (100, 50));
        assert_eq!(fit_dimensions(256, 128, 128), (128, 64));
        assert_eq!(fit_dimensions(128, 512, 128), (32, 128));
        assert_eq!(fit_dimensions(1000, 1, 128), (128, 1));
    }

    #[test]
    fn test_small_image_kept() {
        let img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let loaded = load_image_bytes(&png_bytes(DynamicImage::ImageRgb8(img)), 128).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 6);
        assert_eq!(loaded.pixels[0], Srgb::from_u8(10, 20, 30));
    }

    #[test]
    fn test_alpha_dropped() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 0]));
        let loaded = load_image_bytes(&png_bytes(DynamicImage::ImageRgba8(img)), 128).unwrap();
        assert!(loaded.pixels.iter().all(|&p| p == Srgb::from_u8(200, 100, 50)));
    }

    #[test]
    fn test_large_image_scaled_down() {
        let img = RgbImage::from_pixel(300, 150, Rgb([0, 0, 0]));
        let loaded = load_image_bytes(&png_bytes(DynamicImage::ImageRgb8(img)), 128).unwrap();
        assert_eq!((loaded.width, loaded.height), (128, 64));
        assert_eq!(loaded.pixels.len(), 128 * 64);
    }

    #[test]
    fn test_garbage_is_unavailable() {
        let result = load_image_bytes(b"not an image", 128);
        assert!(matches!(result, Err(ConvertError::ImageUnavailable { .. })));
    }
}
