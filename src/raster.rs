//! Conversions between [`GrayImage`] and the `image` crate
//!
//! This module is only available with the `image-io` feature. Decoding,
//! grayscale conversion and encoding are all delegated to `image`.

use crate::error::Result;
use crate::gray::GrayImage;

/// Convert any decoded image to grayscale brightness
///
/// Color images are reduced to luma by the `image` crate.
pub fn from_dynamic(image: &image::DynamicImage) -> Result<GrayImage> {
    from_luma(&image.to_luma8())
}

/// Wrap an 8-bit luma buffer
pub fn from_luma(image: &image::GrayImage) -> Result<GrayImage> {
    GrayImage::from_vec(
        image.width() as usize,
        image.height() as usize,
        image.as_raw().clone(),
    )
}

/// Convert to an 8-bit luma buffer ready for encoding
pub fn to_luma(gray: &GrayImage) -> image::GrayImage {
    image::GrayImage::from_fn(gray.width() as u32, gray.height() as u32, |x, y| {
        image::Luma([gray.brightness(x as usize, y as usize)])
    })
}
