//! Downstream consumers of a finished stippling

use glam::IVec2;

use crate::gray::GrayImage;

/// Receives the source image together with the final stipples
///
/// This is the hand-off point for anything built on top of the stipples,
/// such as connecting them into paths. Nothing is returned to the stippler.
pub trait StippleSink {
    /// Consume one finished stippling
    fn consume(&mut self, image: &GrayImage, stipples: &[IVec2]);
}

impl<F> StippleSink for F
where
    F: FnMut(&GrayImage, &[IVec2]),
{
    fn consume(&mut self, image: &GrayImage, stipples: &[IVec2]) {
        self(image, stipples)
    }
}
