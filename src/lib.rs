//! Weighted Voronoi stippling
//!
//! Turns a grayscale image into a set of points whose local density follows
//! the image's darkness, using Lloyd's relaxation over a discrete
//! density-weighted Voronoi diagram of the pixel grid.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_stipple::*;
//!
//! // Brightness values, row-major
//! let image = GrayImage::filled(64, 64, 96);
//!
//! let config = StippleConfigBuilder::new()
//!     .seed(42)
//!     .lloyd_iterations(3)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let stippling = Stippling::generate(&image, config).unwrap();
//! let canvas = stippling.render();
//! println!("{} stipples on a {}x{} canvas", stippling.point_count(), canvas.width(), canvas.height());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) nearest-stipple lookups using KD-tree
//! - `serde`: Enables serialization support for configuration and points
//! - `image-io`: Conversions to and from the `image` crate

// Modules
pub mod error;
pub mod config;
pub mod gray;
pub mod generation;
pub mod sink;
pub mod stippling;

#[cfg(feature = "spatial-index")]
pub mod spatial;

#[cfg(feature = "image-io")]
pub mod raster;

// Re-export core types for convenience
pub use error::{StippleError, Result};
pub use config::{StippleConfig, StippleConfigBuilder};
pub use gray::GrayImage;
pub use generation::{stipple, LabelGrid};
pub use sink::StippleSink;
pub use stippling::Stippling;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;
