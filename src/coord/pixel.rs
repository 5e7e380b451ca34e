//! Pixel-space coordinate value.

use serde::{Deserialize, Serialize};

/// A position in image pixel coordinates.
///
/// Carries no projection metadata. Construction is permissive: non-finite
/// values can be represented, and the WCS and rendering seams check
/// [`PixCoord::is_finite`] before using them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixCoord {
    pub x: f64,
    pub y: f64,
}

impl PixCoord {
    /// Creates a new pixel coordinate.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another pixel coordinate, in pixels.
    #[inline]
    pub fn separation(&self, other: &PixCoord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for PixCoord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for PixCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
