//! Test images and helpers.

use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// 2x2 image: dark gray, strong red, mid gray, black. One colored pixel.
pub const REFERENCE_PIXELS: [u8; 12] = [10, 10, 10, 200, 10, 10, 128, 128, 128, 0, 0, 0];

pub fn reference_image() -> RgbImage {
    RgbImage::from_raw(2, 2, REFERENCE_PIXELS.to_vec()).unwrap()
}

/// Every pixel on the neutral axis
pub fn gray_ramp(width: u32) -> RgbImage {
    RgbImage::from_fn(width, 1, |x, _| {
        let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
        image::Rgb([v, v, v])
    })
}

/// Every pixel far from neutral
pub fn saturated(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, image::Rgb([20, 40, 230]))
}

/// Left half red, right half gray
pub fn half_colored(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([220, 30, 30])
        } else {
            image::Rgb([90, 90, 90])
        }
    })
}

/// Save an image in the format implied by the extension
pub fn write_image(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

/// Save an image as WebP under a name without a telling extension
pub fn write_webp_as(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save_with_format(&path, ImageFormat::WebP).unwrap();
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Lines of a captured sink
pub fn lines(buffer: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buffer)
        .lines()
        .map(str::to_string)
        .collect()
}
