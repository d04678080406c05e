//! Lloyd's Relaxation over the discrete weighted Voronoi diagram
//!
//! Each iteration partitions the pixel grid among the generators, computes the
//! density-weighted centroid of every region and moves each generator to its
//! centroid, rounded to the nearest pixel. Generator `i` keeps index `i`
//! across iterations.

use glam::{DVec2, IVec2};
use std::time::Instant;

use crate::config::DEFAULT_LLOYD_ITERATIONS;
use crate::error::Result;
use crate::generation::centroid::compute_centroids;
use crate::generation::voronoi::build_discrete_voronoi;
use crate::gray::GrayImage;

/// Options for Lloyd's relaxation
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Number of iterations to run
    pub max_iterations: usize,
    /// Stop as soon as an iteration reproduces its input generators
    pub stop_when_stable: bool,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_LLOYD_ITERATIONS,
            stop_when_stable: true,
        }
    }
}

/// Outcome of a relaxation run
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation {
    /// Final generator positions
    pub generators: Vec<IVec2>,
    /// Iterations actually performed
    pub iterations_run: usize,
    /// Whether the run ended on a fixed point
    pub converged: bool,
}

/// Round a centroid to the nearest pixel, ties to even
#[inline]
pub fn round_centroid(centroid: DVec2) -> IVec2 {
    IVec2::new(
        centroid.x.round_ties_even() as i32,
        centroid.y.round_ties_even() as i32,
    )
}

/// Perform one Lloyd iteration
///
/// Builds the partition, computes centroids and returns the rounded
/// centroids as the new generator set.
pub fn lloyd_step(image: &GrayImage, generators: &[IVec2]) -> Result<Vec<IVec2>> {
    let labels = build_discrete_voronoi(image, generators);
    let centroids = compute_centroids(image, &labels, generators)?;
    Ok(centroids.into_iter().map(round_centroid).collect())
}

/// Apply Lloyd's Relaxation for a fixed number of iterations
///
/// # Arguments
///
/// * `image` - Source image supplying the density field
/// * `generators` - Initial generators
/// * `iterations` - Number of iterations (3 by default elsewhere)
///
/// # Returns
///
/// Relaxed generators, same length and order as the input
pub fn lloyd_relaxation(
    image: &GrayImage,
    generators: Vec<IVec2>,
    iterations: usize,
) -> Result<Vec<IVec2>> {
    let options = LloydOptions {
        max_iterations: iterations,
        ..Default::default()
    };
    Ok(lloyd_relaxation_with_options(image, generators, options)?.generators)
}

/// Apply Lloyd's Relaxation with custom options
///
/// Early stopping never changes the result: every stage is deterministic, so
/// once an iteration maps the generators onto themselves all further
/// iterations would too.
pub fn lloyd_relaxation_with_options(
    image: &GrayImage,
    mut generators: Vec<IVec2>,
    options: LloydOptions,
) -> Result<Relaxation> {
    let total_start = Instant::now();

    eprintln!(
        "[Lloyd] Starting: {} generators on {}x{} image, max {} iterations",
        generators.len(),
        image.width(),
        image.height(),
        options.max_iterations
    );

    let mut iterations_run = 0;
    let mut converged = false;

    for iteration in 0..options.max_iterations {
        let iter_start = Instant::now();

        let fill_start = Instant::now();
        let labels = build_discrete_voronoi(image, &generators);
        let fill_time = fill_start.elapsed();

        let centroid_start = Instant::now();
        let centroids = compute_centroids(image, &labels, &generators)?;
        let centroid_time = centroid_start.elapsed();

        let next: Vec<IVec2> = centroids.into_iter().map(round_centroid).collect();
        let moved = next
            .iter()
            .zip(generators.iter())
            .filter(|(a, b)| a != b)
            .count();

        generators = next;
        iterations_run = iteration + 1;

        eprintln!(
            "[Lloyd] Iter {}: fill={:?}, centroids={:?}, total={:?}, moved={}",
            iteration + 1,
            fill_time,
            centroid_time,
            iter_start.elapsed(),
            moved
        );

        if moved == 0 {
            converged = true;
            if options.stop_when_stable {
                eprintln!("[Lloyd] Stable at iteration {}", iteration + 1);
                break;
            }
        }
    }

    eprintln!(
        "[Lloyd] Finished: {} iterations (of max {}), converged={}, total={:?}",
        iterations_run,
        options.max_iterations,
        converged,
        total_start.elapsed()
    );

    Ok(Relaxation {
        generators,
        iterations_run,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::initial::initial_generators;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn radial(size: usize) -> GrayImage {
        let c = size as f64 / 2.0;
        let data = (0..size)
            .flat_map(|y| {
                (0..size).map(move |x| {
                    let d = ((x as f64 - c).powi(2) + (y as f64 - c).powi(2)).sqrt();
                    (d / c * 255.0).min(255.0) as u8
                })
            })
            .collect();
        GrayImage::from_vec(size, size, data).unwrap()
    }

    #[test]
    fn test_round_centroid_ties_to_even() {
        assert_eq!(round_centroid(DVec2::new(1.5, 2.5)), IVec2::new(2, 2));
        assert_eq!(round_centroid(DVec2::new(0.49, 3.51)), IVec2::new(0, 4));
    }

    #[test]
    fn test_single_step_uniform_block() {
        let image = GrayImage::filled(4, 4, 128);
        let next = lloyd_step(&image, &[IVec2::new(0, 0)]).unwrap();
        assert_eq!(next, vec![IVec2::new(2, 2)]);
    }

    #[test]
    fn test_converged_configuration_is_fixed() {
        let image = GrayImage::filled(4, 4, 128);
        let generators = vec![IVec2::new(2, 2)];
        let next = lloyd_step(&image, &generators).unwrap();
        assert_eq!(next, generators);
    }

    #[test]
    fn test_relaxation_preserves_length() {
        let image = radial(48);
        let generators = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(42));
        let count = generators.len();
        let relaxed = lloyd_relaxation(&image, generators, 3).unwrap();

        assert_eq!(relaxed.len(), count);
        for p in &relaxed {
            assert!(p.x >= 0 && p.x < 48 && p.y >= 0 && p.y < 48);
        }
    }

    #[test]
    fn test_relaxation_determinism() {
        let image = radial(32);
        let g1 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(9));
        let g2 = initial_generators(&image, 2, &mut ChaCha8Rng::seed_from_u64(9));

        let r1 = lloyd_relaxation(&image, g1, 2).unwrap();
        let r2 = lloyd_relaxation(&image, g2, 2).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_early_stop_matches_full_run() {
        let image = GrayImage::filled(4, 4, 128);
        let stopping = lloyd_relaxation_with_options(
            &image,
            vec![IVec2::new(0, 0)],
            LloydOptions {
                max_iterations: 5,
                stop_when_stable: true,
            },
        )
        .unwrap();
        let full = lloyd_relaxation_with_options(
            &image,
            vec![IVec2::new(0, 0)],
            LloydOptions {
                max_iterations: 5,
                stop_when_stable: false,
            },
        )
        .unwrap();

        assert_eq!(stopping.generators, full.generators);
        assert_eq!(stopping.iterations_run, 2);
        assert_eq!(full.iterations_run, 5);
        assert!(stopping.converged && full.converged);
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let image = GrayImage::filled(8, 8, 0);
        let generators = vec![IVec2::new(1, 1), IVec2::new(6, 6)];
        let relaxed = lloyd_relaxation(&image, generators.clone(), 0).unwrap();
        assert_eq!(relaxed, generators);
    }

    #[test]
    fn test_empty_generators_stay_empty() {
        let image = GrayImage::filled(8, 8, 255);
        let outcome =
            lloyd_relaxation_with_options(&image, Vec::new(), LloydOptions::default()).unwrap();

        assert!(outcome.generators.is_empty());
        assert_eq!(outcome.iterations_run, 1);
        assert!(outcome.converged);
    }

    #[test]
    fn test_options_default() {
        let options = LloydOptions::default();
        assert_eq!(options.max_iterations, 3);
        assert!(options.stop_when_stable);
    }
}
