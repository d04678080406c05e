//! Core stippling pipeline
//!
//! Rejection-sampled generators are relaxed with Lloyd's algorithm over a
//! discrete, density-weighted Voronoi partition of the pixel grid.

mod centroid;
mod initial;
mod lloyd;
mod voronoi;

pub use centroid::{accumulate_region_mass, compute_centroids, RegionMass};
pub use initial::initial_generators;
pub use lloyd::{
    lloyd_relaxation, lloyd_relaxation_with_options, lloyd_step, round_centroid, LloydOptions,
    Relaxation,
};
pub use voronoi::{build_discrete_voronoi, LabelGrid};

use glam::IVec2;
use rand::Rng;

use crate::config::{DEFAULT_BLOCK_SIZE, DEFAULT_LLOYD_ITERATIONS};
use crate::error::Result;
use crate::gray::GrayImage;

/// Stipple an image with the default block size and iteration count
///
/// Draws initial generators from `rng`, then runs three Lloyd iterations.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use voronoi_stipple::{stipple, GrayImage};
///
/// let image = GrayImage::filled(16, 16, 64);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let points = stipple(&image, &mut rng).unwrap();
/// assert!(!points.is_empty());
/// ```
pub fn stipple<R: Rng + ?Sized>(image: &GrayImage, rng: &mut R) -> Result<Vec<IVec2>> {
    let generators = initial_generators(image, DEFAULT_BLOCK_SIZE, rng);
    lloyd_relaxation(image, generators, DEFAULT_LLOYD_ITERATIONS)
}
