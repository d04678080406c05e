//! Rejection-sampled initial generators
//!
//! The image is cut into square blocks. Each block is accepted with
//! probability `1 - mean_brightness / 255`, i.e. its mean density, so dark
//! areas start with more generators than light ones.
//!
//! # Algorithm
//!
//! For every full block, in row-major order of block origins:
//! - compute `m = mean brightness / 255`
//! - draw `r` uniformly from `[0, 1)`
//! - if `m < r`, emit the block centre `origin + block_size / 2`
//!
//! Blocks that would extend past the right or bottom edge are skipped.

use glam::IVec2;
use rand::Rng;

use crate::gray::GrayImage;

/// Generate initial generator points by rejection sampling
///
/// Consumes exactly one random draw per full block. A fully white image
/// yields no generators.
///
/// # Arguments
///
/// * `image` - Source image
/// * `block_size` - Side length of each sampling block (must be >= 1)
/// * `rng` - Random source; seed it for reproducible output
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use voronoi_stipple::GrayImage;
/// use voronoi_stipple::generation::initial_generators;
///
/// let image = GrayImage::filled(8, 8, 0);
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let points = initial_generators(&image, 2, &mut rng);
/// assert_eq!(points.len(), 16);
/// ```
pub fn initial_generators<R: Rng + ?Sized>(
    image: &GrayImage,
    block_size: u32,
    rng: &mut R,
) -> Vec<IVec2> {
    let size = block_size.max(1) as usize;
    let half = (size / 2) as i32;
    let blocks_x = image.width() / size;
    let blocks_y = image.height() / size;
    let area = (size * size) as f64;

    let mut generators = Vec::new();
    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let x0 = bx * size;
            let y0 = by * size;

            let sum: u64 = (y0..y0 + size)
                .flat_map(|y| (x0..x0 + size).map(move |x| (x, y)))
                .map(|(x, y)| u64::from(image.brightness(x, y)))
                .sum();
            let mean_fraction = sum as f64 / area / 255.0;

            let r: f64 = rng.gen();
            if mean_fraction < r {
                generators.push(IVec2::new(x0 as i32 + half, y0 as i32 + half));
            }
        }
    }

    generators
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn gradient(width: usize, height: usize) -> GrayImage {
        let data = (0..height)
            .flat_map(|_| (0..width).map(move |x| (x * 255 / (width - 1)) as u8))
            .collect();
        GrayImage::from_vec(width, height, data).unwrap()
    }

    #[test]
    fn test_black_image_accepts_every_block() {
        let image = GrayImage::filled(6, 4, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let points = initial_generators(&image, 2, &mut rng);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], IVec2::new(1, 1));
        assert_eq!(points[1], IVec2::new(3, 1));
        assert_eq!(points[2], IVec2::new(5, 1));
        assert_eq!(points[3], IVec2::new(1, 3));
    }

    #[test]
    fn test_white_image_is_empty() {
        let image = GrayImage::filled(16, 16, 255);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(initial_generators(&image, 2, &mut rng).is_empty());
    }

    #[test]
    fn test_trailing_partial_blocks_dropped() {
        let image = GrayImage::filled(5, 3, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = initial_generators(&image, 2, &mut rng);

        assert_eq!(points, vec![IVec2::new(1, 1), IVec2::new(3, 1)]);
    }

    #[test]
    fn test_odd_block_size_centre() {
        let image = GrayImage::filled(6, 3, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = initial_generators(&image, 3, &mut rng);

        assert_eq!(points, vec![IVec2::new(1, 1), IVec2::new(4, 1)]);
    }

    #[test]
    fn test_image_smaller_than_block() {
        let image = GrayImage::filled(1, 1, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(initial_generators(&image, 2, &mut rng).is_empty());
    }

    #[test]
    fn test_determinism() {
        let image = gradient(64, 32);
        let points1 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(42));
        let points2 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(42));

        assert!(!points1.is_empty());
        assert_eq!(points1, points2);
    }

    #[test]
    fn test_different_seeds() {
        let image = gradient(64, 32);
        let points1 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(12345));
        let points2 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(67890));

        assert_ne!(points1, points2, "Different seeds should produce different points");
    }

    #[test]
    fn test_dark_side_is_denser() {
        // Black on the left, white on the right
        let image = gradient(128, 64);
        let points = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(7));

        let left = points.iter().filter(|p| p.x < 64).count();
        let right = points.len() - left;
        assert!(left > right * 2, "left={} right={}", left, right);
    }
}
