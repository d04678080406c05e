//! Spatial indexing for nearest-stipple lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::{IVec2, Vec2};
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// KD-tree over stipple positions
///
/// Provides O(log n) nearest-neighbor lookups from an arbitrary image
/// position to the index of the closest stipple.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build an index over `points`
    ///
    /// Returns `None` for an empty point set.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::{IVec2, Vec2};
    /// use voronoi_stipple::SpatialIndex;
    ///
    /// let points = vec![IVec2::new(0, 0), IVec2::new(10, 0), IVec2::new(0, 10)];
    /// let index = SpatialIndex::new(&points).unwrap();
    /// assert_eq!(index.find_nearest(Vec2::new(9.0, 1.0)), 1);
    /// ```
    pub fn new(points: &[IVec2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let coords: Vec<[f32; 2]> = points
            .iter()
            .map(|p| [p.x as f32, p.y as f32])
            .collect();

        Some(Self {
            tree: ImmutableKdTree::new_from_slice(&coords),
        })
    }

    /// Index of the stipple closest to `position`
    pub fn find_nearest(&self, position: Vec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}
