//! Image file helpers built on the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoding converts to
//! 8-bit luma and marks pixels darker than a threshold as ridge.

use crate::image::BinaryImage;
use crate::minutia::{minutia_kind, Minutia, MinutiaKind};
use crate::util::math::deg_to_rad;
use crate::util::{RidgeMatchError, RidgeMatchResult};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

/// Default binarization cut: the midpoint of the 8-bit range.
pub const DEFAULT_THRESHOLD: u8 = 128;

const RIDGE: Rgb<u8> = Rgb([0, 0, 0]);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const ENDING: Rgb<u8> = Rgb([255, 0, 0]);
const BIFURCATION: Rgb<u8> = Rgb([0, 0, 255]);
const UNCLASSIFIED: Rgb<u8> = Rgb([0, 160, 0]);
const TICK_LENGTH: i32 = 5;

/// Binarizes a grayscale image: luma below `threshold` is ridge.
pub fn binary_from_gray(img: &GrayImage, threshold: u8) -> RidgeMatchResult<BinaryImage> {
    let rows = img.height() as usize;
    let cols = img.width() as usize;
    let data = img.as_raw().iter().map(|&v| v < threshold).collect();
    BinaryImage::from_vec(data, rows, cols)
}

/// Binarizes a decoded image of any color type.
pub fn binary_from_dynamic(img: &DynamicImage, threshold: u8) -> RidgeMatchResult<BinaryImage> {
    binary_from_gray(&img.to_luma8(), threshold)
}

/// Loads an image from disk and binarizes it.
pub fn load_binary_image<P: AsRef<Path>>(path: P, threshold: u8) -> RidgeMatchResult<BinaryImage> {
    let img = image::open(path).map_err(|err| RidgeMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    binary_from_dynamic(&img, threshold)
}

/// Renders ridge pixels black on white.
pub fn to_gray_image(img: &BinaryImage) -> GrayImage {
    GrayImage::from_fn(img.cols() as u32, img.rows() as u32, |x, y| {
        if img.get(y as usize, x as usize) == Some(true) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// Writes a binary image; the format follows the file extension.
pub fn save_binary_image<P: AsRef<Path>>(img: &BinaryImage, path: P) -> RidgeMatchResult<()> {
    to_gray_image(img)
        .save(path)
        .map_err(|err| RidgeMatchError::ImageIo {
            reason: err.to_string(),
        })
}

/// Draws minutiae over their skeleton.
///
/// Endings are red, bifurcations blue, anything else green. Each minutia
/// gets a 3x3 marker and a short tick along its orientation.
pub fn draw_minutiae(skeleton: &BinaryImage, minutiae: &[Minutia]) -> RgbImage {
    let mut out = RgbImage::from_fn(skeleton.cols() as u32, skeleton.rows() as u32, |x, y| {
        if skeleton.get(y as usize, x as usize) == Some(true) {
            RIDGE
        } else {
            BACKGROUND
        }
    });

    for minutia in minutiae {
        let color = match minutia_kind(skeleton, minutia) {
            Some(MinutiaKind::Ending) => ENDING,
            Some(MinutiaKind::Bifurcation) => BIFURCATION,
            None => UNCLASSIFIED,
        };
        for dr in -1..=1 {
            for dc in -1..=1 {
                put(&mut out, minutia.row + dr, minutia.col + dc, color);
            }
        }
        let (sin, cos) = deg_to_rad(minutia.orientation).sin_cos();
        for step in 2..=TICK_LENGTH {
            let col = minutia.col + (f64::from(step) * cos).round() as i32;
            let row = minutia.row - (f64::from(step) * sin).round() as i32;
            put(&mut out, row, col, color);
        }
    }

    out
}

/// Draws minutiae over their skeleton and writes the result.
pub fn save_minutiae_overlay<P: AsRef<Path>>(
    skeleton: &BinaryImage,
    minutiae: &[Minutia],
    path: P,
) -> RidgeMatchResult<()> {
    draw_minutiae(skeleton, minutiae)
        .save(path)
        .map_err(|err| RidgeMatchError::ImageIo {
            reason: err.to_string(),
        })
}

fn put(img: &mut RgbImage, row: i32, col: i32, color: Rgb<u8>) {
    if row < 0 || col < 0 {
        return;
    }
    let (x, y) = (col as u32, row as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}
