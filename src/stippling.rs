//! Stippling main structure

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use crate::config::StippleConfig;
use crate::error::Result;
use crate::generation::{initial_generators, lloyd_relaxation_with_options, LloydOptions};
use crate::gray::{GrayImage, BLACK, WHITE};
use crate::sink::StippleSink;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec2;

/// A finished stippling of one image
///
/// Holds the final stipple positions along with the configuration and
/// bookkeeping of the run that produced them.
///
/// # Examples
///
/// ```
/// use voronoi_stipple::*;
///
/// let image = GrayImage::filled(32, 32, 100);
/// let config = StippleConfigBuilder::new().seed(42).build().unwrap();
///
/// let stippling = Stippling::generate(&image, config).unwrap();
/// println!("Placed {} stipples", stippling.point_count());
/// ```
#[derive(Clone)]
pub struct Stippling {
    /// Configuration used for this run
    config: StippleConfig,

    /// Source image width
    width: usize,

    /// Source image height
    height: usize,

    /// Number of generators produced by rejection sampling
    initial_count: usize,

    /// Lloyd iterations actually performed
    iterations_run: usize,

    /// Final stipple positions; index `i` is generator `i`
    points: Vec<IVec2>,

    /// Nearest-stipple lookup, absent when there are no stipples
    #[cfg(feature = "spatial-index")]
    spatial_index: Option<SpatialIndex>,
}

impl Stippling {
    /// Stipple `image` using the seed from `config`
    ///
    /// # Returns
    ///
    /// `Result<Stippling>` - Finished stippling or error
    pub fn generate(image: &GrayImage, config: StippleConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);
        Self::generate_with_rng(image, config, &mut rng)
    }

    /// Stipple `image` drawing initial generators from `rng`
    ///
    /// `config.seed` is ignored; everything else applies.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use voronoi_stipple::*;
    ///
    /// let image = GrayImage::filled(16, 16, 0);
    /// let mut rng = ChaCha8Rng::seed_from_u64(5);
    /// let stippling = Stippling::generate_with_rng(&image, StippleConfig::default(), &mut rng).unwrap();
    /// assert_eq!(stippling.initial_count(), 64);
    /// ```
    pub fn generate_with_rng<R: Rng + ?Sized>(
        image: &GrayImage,
        config: StippleConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let start = Instant::now();

        let generators = initial_generators(image, config.block_size, rng);
        let initial_count = generators.len();
        eprintln!(
            "[Stipple] {} initial generators from {}x{} image (block size {})",
            initial_count,
            image.width(),
            image.height(),
            config.block_size
        );

        let options = LloydOptions {
            max_iterations: config.lloyd_iterations,
            stop_when_stable: config.stop_when_stable,
        };
        let relaxation = lloyd_relaxation_with_options(image, generators, options)?;

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(&relaxation.generators);

        eprintln!(
            "[Stipple] Finished: {} stipples in {:?}",
            relaxation.generators.len(),
            start.elapsed()
        );

        Ok(Self {
            config,
            width: image.width(),
            height: image.height(),
            initial_count,
            iterations_run: relaxation.iterations_run,
            points: relaxation.generators,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used for this stippling
    #[inline]
    pub fn config(&self) -> &StippleConfig {
        &self.config
    }

    /// Source image dimensions as `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of generators before relaxation
    #[inline]
    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Lloyd iterations actually performed
    #[inline]
    pub fn iterations_run(&self) -> usize {
        self.iterations_run
    }

    /// Number of stipples
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Final stipple positions
    ///
    /// Several stipples may share a position; zero-mass regions all collapse
    /// onto the origin.
    #[inline]
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    /// Consume the stippling, returning the stipple positions
    pub fn into_points(self) -> Vec<IVec2> {
        self.points
    }

    /// Paint every stipple as a black pixel on a white canvas
    ///
    /// The canvas has the source image's dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use voronoi_stipple::*;
    /// let image = GrayImage::filled(8, 8, 0);
    /// let stippling = Stippling::generate(&image, StippleConfig::default()).unwrap();
    /// let canvas = stippling.render();
    /// assert_eq!(canvas.width(), 8);
    /// ```
    pub fn render(&self) -> GrayImage {
        let mut canvas = GrayImage::filled(self.width, self.height, WHITE);
        for p in &self.points {
            if canvas.contains(i64::from(p.x), i64::from(p.y)) {
                canvas.put(p.x as usize, p.y as usize, BLACK);
            }
        }
        canvas
    }

    /// Hand the source image and the stipples to a downstream consumer
    pub fn emit<S: StippleSink + ?Sized>(&self, image: &GrayImage, sink: &mut S) {
        sink.consume(image, &self.points);
    }

    /// Find the stipple closest to a position (requires spatial-index feature)
    ///
    /// Returns `None` when there are no stipples.
    #[cfg(feature = "spatial-index")]
    pub fn find_nearest(&self, position: Vec2) -> Option<usize> {
        self.spatial_index
            .as_ref()
            .map(|index| index.find_nearest(position))
    }
}
