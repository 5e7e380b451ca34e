//! Coordinate frame marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! pixel-frame regions from sky-frame regions at compile time. Each marker
//! names the coordinate type its regions are positioned with, so a
//! pixel-frame region can never hold a sky coordinate.

use std::fmt;

use super::pixel::PixCoord;
use super::sky::SkyCoord;

/// A coordinate frame that regions can be expressed in.
///
/// Implemented only by the [`Pixel`] and [`Sky`] markers.
pub trait Frame: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The coordinate primitive used for positions in this frame.
    type Coord: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Short lowercase name of the frame ("pixel" or "sky").
    const NAME: &'static str;
}

/// Marker type for image pixel coordinates.
///
/// Pixel coordinates are 0-based floats; (0, 0) is the center of the first
/// pixel of the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for celestial (world) coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sky {}

impl Frame for Pixel {
    type Coord = PixCoord;
    const NAME: &'static str = "pixel";
}

impl Frame for Sky {
    type Coord = SkyCoord;
    const NAME: &'static str = "sky";
}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Pixel has no variants
    }
}

impl fmt::Debug for Sky {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Sky has no variants
    }
}
