//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Write a `w`x`h` RGB gradient PNG into `dir` and return its path
pub fn write_gradient_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
    let path = dir.join(name);
    let image = RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 128])
    });
    image.save(&path).expect("Failed to write test image");
    path
}

/// Write a solid RGBA PNG into `dir` and return its path
pub fn write_rgba_png(dir: &Path, name: &str, px: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(8, 8, Rgba(px))
        .save(&path)
        .expect("Failed to write test image");
    path
}
