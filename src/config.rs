//! Stippling Configuration and Builder
//!
//! This module provides configuration types for reproducible stipple generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StippleError};

/// Default side length of an initializer block, in pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 2;

/// Default number of Lloyd iterations
pub const DEFAULT_LLOYD_ITERATIONS: usize = 3;

/// Upper bound accepted by the builder for Lloyd iterations
pub const MAX_LLOYD_ITERATIONS: usize = 100;

/// Configuration for stipple generation
///
/// The same configuration applied to the same image always produces the same
/// stipples.
///
/// # Example
///
/// ```rust
/// use voronoi_stipple::*;
///
/// let config = StippleConfigBuilder::new()
///     .seed(42)
///     .lloyd_iterations(5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.block_size, 2);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StippleConfig {
    /// Seed for the initializer's random source
    pub seed: u32,

    /// Side length of the square blocks sampled by the initializer
    ///
    /// Smaller blocks produce more initial generators. Trailing partial
    /// blocks are skipped.
    pub block_size: u32,

    /// Number of Lloyd iterations
    ///
    /// - 0: Raw rejection-sampled points
    /// - 3: Default
    /// - Higher values move closer to a centroidal tessellation at a cost of
    ///   one full flood fill and one full-grid pass each
    pub lloyd_iterations: usize,

    /// Stop early once an iteration leaves the generators unchanged
    ///
    /// Every stage is deterministic, so a fixed point stays fixed and the
    /// result is identical with or without early stopping.
    pub stop_when_stable: bool,
}

impl Default for StippleConfig {
    fn default() -> Self {
        StippleConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating StippleConfig with validation
///
/// # Example
///
/// ```rust
/// use voronoi_stipple::*;
///
/// let config = StippleConfigBuilder::new()
///     .seed(7)
///     .block_size(3)
///     .unwrap()
///     .stop_when_stable(false)
///     .build()
///     .unwrap();
/// assert_eq!(config.lloyd_iterations, 3);
/// ```
#[derive(Debug, Clone)]
pub struct StippleConfigBuilder {
    seed: Option<u32>,
    block_size: u32,
    lloyd_iterations: usize,
    stop_when_stable: bool,
}

impl StippleConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - block_size: 2
    /// - lloyd_iterations: 3
    /// - stop_when_stable: true
    pub fn new() -> Self {
        Self {
            seed: None,
            block_size: DEFAULT_BLOCK_SIZE,
            lloyd_iterations: DEFAULT_LLOYD_ITERATIONS,
            stop_when_stable: true,
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initializer block side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `size` is 0
    pub fn block_size(mut self, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(StippleError::InvalidConfig(
                "block size must be at least 1".to_string(),
            ));
        }
        self.block_size = size;
        Ok(self)
    }

    /// Set the number of Lloyd iterations
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if iterations > 100
    pub fn lloyd_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations > MAX_LLOYD_ITERATIONS {
            return Err(StippleError::InvalidConfig(format!(
                "Lloyd iterations must be <= {} (got {})",
                MAX_LLOYD_ITERATIONS, iterations
            )));
        }
        self.lloyd_iterations = iterations;
        Ok(self)
    }

    /// Enable or disable early stopping at a fixed point
    pub fn stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<StippleConfig> {
        let seed = self.seed.unwrap_or_else(|| rand::random());

        Ok(StippleConfig {
            seed,
            block_size: self.block_size,
            lloyd_iterations: self.lloyd_iterations,
            stop_when_stable: self.stop_when_stable,
        })
    }
}

impl Default for StippleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
