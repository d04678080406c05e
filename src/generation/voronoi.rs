//! Discrete Voronoi partition of the pixel grid
//!
//! Labels every pixel with the index of its nearest generator using a
//! multi-source Dijkstra-style flood fill over the 4-connected grid. Each
//! queued candidate carries the straight-line distance from its originating
//! generator, recomputed from scratch, so regions follow Euclidean distance
//! even though expansion only steps horizontally and vertically.

use glam::IVec2;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::gray::GrayImage;

/// Pixel-to-region assignment
///
/// `None` marks an unassigned pixel. A grid built from at least one in-bounds
/// generator has no unassigned pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    width: usize,
    height: usize,
    labels: Vec<Option<usize>>,
}

impl LabelGrid {
    /// Create a grid with every pixel unassigned
    pub fn unassigned(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            labels: vec![None; width * height],
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

    /// Region index at `(x, y)`, or `None` if unassigned
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        assert!(x < self.width && y < self.height);
        self.labels[y * self.width + x]
    }

    /// All labels, row-major
    #[inline]
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Number of pixels carrying a label
    pub fn assigned_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_some()).count()
    }

    /// Whether every pixel carries a label
    pub fn is_complete(&self) -> bool {
        self.labels.iter().all(Option::is_some)
    }

    /// Pixel count per region, for `region_count` regions
    ///
    /// Labels at or beyond `region_count` are ignored.
    pub fn region_sizes(&self, region_count: usize) -> Vec<usize> {
        let mut sizes = vec![0; region_count];
        for label in self.labels.iter().flatten() {
            if let Some(size) = sizes.get_mut(*label) {
                *size += 1;
            }
        }
        sizes
    }

    #[inline]
    fn index(&self, pixel: IVec2) -> usize {
        pixel.y as usize * self.width + pixel.x as usize
    }
}

/// Flood-fill frontier entry
///
/// Ordered by squared distance, then pixel x, pixel y, then generator index.
/// Squared integer distance orders exactly like Euclidean distance and keeps
/// ties deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    distance_sq: i64,
    pixel: IVec2,
    generator: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_sq
            .cmp(&other.distance_sq)
            .then(self.pixel.x.cmp(&other.pixel.x))
            .then(self.pixel.y.cmp(&other.pixel.y))
            .then(self.generator.cmp(&other.generator))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

const NEIGHBOR_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, 1),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
];

#[inline]
fn distance_sq(a: IVec2, b: IVec2) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx * dx + dy * dy
}

/// Build the discrete Voronoi partition for `generators` over `image`
///
/// Generators outside the image are skipped; their regions stay empty. With no
/// in-bounds generator the result is entirely unassigned.
///
/// # Arguments
///
/// * `image` - Image defining the grid size
/// * `generators` - Generator points; index `i` becomes label `i`
///
/// # Example
///
/// ```rust
/// use glam::IVec2;
/// use voronoi_stipple::GrayImage;
/// use voronoi_stipple::generation::build_discrete_voronoi;
///
/// let image = GrayImage::filled(4, 1, 0);
/// let labels = build_discrete_voronoi(&image, &[IVec2::new(0, 0), IVec2::new(3, 0)]);
/// assert_eq!(labels.get(1, 0), Some(0));
/// assert_eq!(labels.get(2, 0), Some(1));
/// ```
pub fn build_discrete_voronoi(image: &GrayImage, generators: &[IVec2]) -> LabelGrid {
    let mut grid = LabelGrid::unassigned(image.width(), image.height());
    let in_bounds = |p: IVec2| image.contains(i64::from(p.x), i64::from(p.y));

    let mut queue: BinaryHeap<Reverse<Candidate>> = generators
        .iter()
        .enumerate()
        .filter(|(_, g)| in_bounds(**g))
        .map(|(generator, &pixel)| {
            Reverse(Candidate {
                distance_sq: 0,
                pixel,
                generator,
            })
        })
        .collect();

    while let Some(Reverse(candidate)) = queue.pop() {
        let idx = grid.index(candidate.pixel);
        if grid.labels[idx].is_some() {
            continue;
        }
        grid.labels[idx] = Some(candidate.generator);

        let origin = generators[candidate.generator];
        for offset in NEIGHBOR_OFFSETS {
            let neighbor = candidate.pixel + offset;
            if !in_bounds(neighbor) || grid.labels[grid.index(neighbor)].is_some() {
                continue;
            }
            queue.push(Reverse(Candidate {
                distance_sq: distance_sq(neighbor, origin),
                pixel: neighbor,
                generator: candidate.generator,
            }));
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nearest_unique(p: IVec2, generators: &[IVec2]) -> Option<usize> {
        let mut best: Option<(i64, usize)> = None;
        let mut tied = false;
        for (i, &g) in generators.iter().enumerate() {
            let d = distance_sq(p, g);
            match best {
                Some((bd, _)) if d == bd => tied = true,
                Some((bd, _)) if d > bd => {}
                _ => {
                    best = Some((d, i));
                    tied = false;
                }
            }
        }
        if tied {
            None
        } else {
            best.map(|(_, i)| i)
        }
    }

    #[test]
    fn test_single_generator_covers_grid() {
        let image = GrayImage::filled(4, 4, 128);
        let grid = build_discrete_voronoi(&image, &[IVec2::new(0, 0)]);

        assert!(grid.is_complete());
        assert_eq!(grid.assigned_count(), 16);
        assert!(grid.labels().iter().all(|&l| l == Some(0)));
    }

    #[test]
    fn test_coverage_many_generators() {
        let image = GrayImage::filled(37, 23, 0);
        let generators: Vec<IVec2> = (0..40)
            .map(|i| IVec2::new((i * 17) % 37, (i * 11) % 23))
            .collect();
        let grid = build_discrete_voronoi(&image, &generators);

        assert!(grid.is_complete());
        let sizes = grid.region_sizes(generators.len());
        assert_eq!(sizes.iter().sum::<usize>(), 37 * 23);
    }

    #[test]
    fn test_nearest_generator_correctness() {
        let image = GrayImage::filled(21, 19, 0);
        let generators: Vec<IVec2> = [2, 9, 16]
            .iter()
            .flat_map(|&y| [3, 10, 17].into_iter().map(move |x| IVec2::new(x, y)))
            .collect();
        let grid = build_discrete_voronoi(&image, &generators);

        let mut checked = 0;
        for y in 0..19 {
            for x in 0..21 {
                let p = IVec2::new(x as i32, y as i32);
                if let Some(expected) = nearest_unique(p, &generators) {
                    assert_eq!(grid.get(x, y), Some(expected), "pixel ({}, {})", x, y);
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 21 * 19);
    }

    #[test]
    fn test_diagonal_boundary() {
        let image = GrayImage::filled(10, 10, 0);
        let generators = vec![IVec2::new(0, 0), IVec2::new(9, 9)];
        let grid = build_discrete_voronoi(&image, &generators);

        for y in 0..10 {
            for x in 0..10 {
                let p = IVec2::new(x as i32, y as i32);
                if let Some(expected) = nearest_unique(p, &generators) {
                    assert_eq!(grid.get(x, y), Some(expected), "pixel ({}, {})", x, y);
                }
            }
        }
        assert!(grid.is_complete());
    }

    #[test]
    fn test_generators_label_themselves() {
        let image = GrayImage::filled(10, 10, 0);
        let generators = vec![IVec2::new(1, 1), IVec2::new(8, 8), IVec2::new(1, 8)];
        let grid = build_discrete_voronoi(&image, &generators);

        for (i, g) in generators.iter().enumerate() {
            assert_eq!(grid.get(g.x as usize, g.y as usize), Some(i));
        }
    }

    #[test]
    fn test_empty_generators() {
        let image = GrayImage::filled(5, 5, 0);
        let grid = build_discrete_voronoi(&image, &[]);

        assert_eq!(grid.assigned_count(), 0);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_out_of_bounds_generators_dropped() {
        let image = GrayImage::filled(5, 5, 0);
        let generators = vec![IVec2::new(-1, 2), IVec2::new(5, 0), IVec2::new(2, 2)];
        let grid = build_discrete_voronoi(&image, &generators);

        assert!(grid.is_complete());
        assert_eq!(grid.region_sizes(3), vec![0, 0, 25]);
    }

    #[test]
    fn test_only_out_of_bounds_generators() {
        let image = GrayImage::filled(3, 3, 0);
        let grid = build_discrete_voronoi(&image, &[IVec2::new(3, 3)]);
        assert_eq!(grid.assigned_count(), 0);
    }

    #[test]
    fn test_duplicate_generators_lower_index_wins() {
        let image = GrayImage::filled(3, 3, 0);
        let generators = vec![IVec2::new(1, 1), IVec2::new(1, 1)];
        let grid = build_discrete_voronoi(&image, &generators);

        assert_eq!(grid.region_sizes(2), vec![9, 0]);
    }

    #[test]
    fn test_determinism() {
        let image = GrayImage::filled(16, 16, 0);
        let generators = vec![IVec2::new(4, 4), IVec2::new(11, 11), IVec2::new(4, 11), IVec2::new(11, 4)];

        let a = build_discrete_voronoi(&image, &generators);
        let b = build_discrete_voronoi(&image, &generators);
        assert_eq!(a, b);
    }
}
