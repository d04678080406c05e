//! Error types for stipple generation

use std::fmt;

/// Errors that can occur while configuring or running the stippler
///
/// Out-of-bounds pixel access is not represented here: it is a caller bug
/// and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StippleError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Pixel buffer length does not match `width * height`
    InvalidImage { expected: usize, actual: usize },
    /// Label grid and image have different dimensions
    DimensionMismatch {
        image: (usize, usize),
        labels: (usize, usize),
    },
    /// Label grid refers to a region that has no generator
    LabelOutOfRange { label: usize, regions: usize },
}

impl fmt::Display for StippleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StippleError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            StippleError::InvalidImage { expected, actual } => write!(
                f,
                "invalid image buffer: expected {} pixels, got {}",
                expected, actual
            ),
            StippleError::DimensionMismatch { image, labels } => write!(
                f,
                "dimension mismatch: image is {}x{}, label grid is {}x{}",
                image.0, image.1, labels.0, labels.1
            ),
            StippleError::LabelOutOfRange { label, regions } => write!(
                f,
                "label {} out of range for {} regions",
                label, regions
            ),
        }
    }
}

impl std::error::Error for StippleError {}

/// Result type alias for stipple operations
pub type Result<T> = std::result::Result<T, StippleError>;
