//! Test fixtures: source images written into a scratch directory.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog colors used by the fixtures, as RGB.
pub mod colors {
    pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
    pub const RED: [u8; 3] = [0xff, 0x00, 0x4d];
    pub const WHITE: [u8; 3] = [0xff, 0xf1, 0xe8];
    pub const BLUE: [u8; 3] = [0x29, 0xad, 0xff];
    /// Secret color 12 (code 140)
    pub const TRUE_BLUE: [u8; 3] = [0x06, 0x5a, 0xb5];
}

/// A scratch directory holding inputs and outputs for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a PNG whose pixels come from `pixel(x, y)`.
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixel: impl Fn(u32, u32) -> [u8; 3],
    ) -> PathBuf {
        let path = self.path(name);
        let img = RgbImage::from_fn(width, height, |x, y| Rgb(pixel(x, y)));
        img.save(&path).expect("Failed to write fixture PNG");
        path
    }

    /// A single-color image.
    pub fn solid(&self, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        self.write_png(name, width, height, |_, _| color)
    }

    /// Vertical stripes cycling through `stripes`, each `band` pixels wide.
    pub fn stripes(
        &self,
        name: &str,
        width: u32,
        height: u32,
        band: u32,
        stripes: &[[u8; 3]],
    ) -> PathBuf {
        let stripes = stripes.to_vec();
        self.write_png(name, width, height, move |x, _| {
            stripes[(x / band) as usize % stripes.len()]
        })
    }

    /// A horizontal gray ramp.
    pub fn gray_ramp(&self, name: &str, width: u32, height: u32) -> PathBuf {
        self.write_png(name, width, height, move |x, _| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            [v, v, v]
        })
    }

    /// A smooth two-axis color gradient that touches many catalog colors.
    pub fn rainbow(&self, name: &str, width: u32, height: u32) -> PathBuf {
        self.write_png(name, width, height, move |x, y| {
            let r = (x * 255 / (width - 1).max(1)) as u8;
            let g = (y * 255 / (height - 1).max(1)) as u8;
            let b = 255 - r / 2 - g / 2;
            [r, g, b]
        })
    }

    /// Write a text file (palette files, configs).
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
