//! Grayscale raster and the density model
//!
//! The stippler only ever reads brightness values. Density is derived on
//! demand as `1 - brightness / 255`, so dark pixels weigh more than light ones.

use crate::error::{Result, StippleError};

/// Brightness of a blank canvas pixel
pub const WHITE: u8 = 255;

/// Brightness of a painted stipple
pub const BLACK: u8 = 0;

/// Single-channel 8-bit image stored row-major
///
/// # Example
///
/// ```
/// use voronoi_stipple::GrayImage;
///
/// let image = GrayImage::from_vec(2, 1, vec![0, 255]).unwrap();
/// assert_eq!(image.density(0, 0), 1.0);
/// assert_eq!(image.density(1, 0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Wrap a row-major brightness buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidImage` if `data.len() != width * height`
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or(StippleError::InvalidImage {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(StippleError::InvalidImage {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image with every pixel set to `brightness`
    pub fn filled(width: usize, height: usize, brightness: u8) -> Self {
        Self {
            width,
            height,
            data: vec![brightness; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major brightness values
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether `(x, y)` lies inside the image
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Brightness at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn brightness(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Density at `(x, y)`, in `[0, 1]`
    ///
    /// Black is 1.0, white is 0.0.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn density(&self, x: usize, y: usize) -> f64 {
        1.0 - f64::from(self.brightness(x, y)) / 255.0
    }

    /// Sum of density over every pixel
    pub fn total_density(&self) -> f64 {
        self.data
            .iter()
            .map(|&b| 1.0 - f64::from(b) / 255.0)
            .sum()
    }

    /// Set the brightness at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn put(&mut self, x: usize, y: usize, brightness: u8) {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = brightness;
    }
}
