//! Density-weighted region centroids
//!
//! One pass over the full label grid accumulates, per region, the total
//! density ("mass") and the density-weighted sums of x and y.

use glam::{DVec2, IVec2};

use crate::error::{Result, StippleError};
use crate::generation::voronoi::LabelGrid;
use crate::gray::GrayImage;

/// Per-region mass accumulators
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMass {
    /// Total density per region
    pub mass: Vec<f64>,
    /// Sum of `x * density` per region
    pub x_mass: Vec<f64>,
    /// Sum of `y * density` per region
    pub y_mass: Vec<f64>,
}

impl RegionMass {
    fn zeroed(region_count: usize) -> Self {
        Self {
            mass: vec![0.0; region_count],
            x_mass: vec![0.0; region_count],
            y_mass: vec![0.0; region_count],
        }
    }

    /// Number of regions
    #[inline]
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// Sum of all region masses
    pub fn total_mass(&self) -> f64 {
        self.mass.iter().sum()
    }

    /// Centroid of each region
    ///
    /// Regions with no mass get `(0, 0)`.
    pub fn centroids(&self) -> Vec<DVec2> {
        (0..self.len())
            .map(|i| {
                let mass = self.mass[i];
                if mass > 0.0 {
                    DVec2::new(self.x_mass[i] / mass, self.y_mass[i] / mass)
                } else {
                    DVec2::ZERO
                }
            })
            .collect()
    }
}

/// Accumulate density mass for `region_count` regions over the whole grid
///
/// Unassigned pixels contribute nothing.
///
/// # Errors
///
/// - `DimensionMismatch` if `labels` and `image` differ in size
/// - `LabelOutOfRange` if a label is `>= region_count`
pub fn accumulate_region_mass(
    image: &GrayImage,
    labels: &LabelGrid,
    region_count: usize,
) -> Result<RegionMass> {
    if labels.width() != image.width() || labels.height() != image.height() {
        return Err(StippleError::DimensionMismatch {
            image: (image.width(), image.height()),
            labels: (labels.width(), labels.height()),
        });
    }

    let mut acc = RegionMass::zeroed(region_count);

    for y in 0..image.height() {
        for x in 0..image.width() {
            let Some(label) = labels.get(x, y) else {
                continue;
            };
            if label >= region_count {
                return Err(StippleError::LabelOutOfRange {
                    label,
                    regions: region_count,
                });
            }

            let density = image.density(x, y);
            acc.mass[label] += density;
            acc.x_mass[label] += x as f64 * density;
            acc.y_mass[label] += y as f64 * density;
        }
    }

    Ok(acc)
}

/// Compute the density-weighted centroid of every generator's region
///
/// Returns one centroid per generator, in generator order.
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use voronoi_stipple::GrayImage;
/// use voronoi_stipple::generation::{build_discrete_voronoi, compute_centroids};
///
/// let image = GrayImage::filled(4, 4, 128);
/// let generators = [IVec2::new(0, 0)];
/// let labels = build_discrete_voronoi(&image, &generators);
/// let centroids = compute_centroids(&image, &labels, &generators).unwrap();
/// assert!((centroids[0].x - 1.5).abs() < 1e-9);
/// ```
pub fn compute_centroids(
    image: &GrayImage,
    labels: &LabelGrid,
    generators: &[IVec2],
) -> Result<Vec<DVec2>> {
    Ok(accumulate_region_mass(image, labels, generators.len())?.centroids())
}
