//! Point regions.

use serde_json::Value;

use crate::coord::{Frame, PixCoord, Pixel, Sky};
use crate::region::{Patch, PatchCapability, Region, Shape, Visual, DEFAULT_MARKER_SIZE};
use crate::render::Surface;

/// A bare position; the point shape has no fields of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point;

/// A point in pixel coordinates.
pub type PointPixelRegion = Region<Pixel, Point>;

/// A point in sky coordinates.
pub type PointSkyRegion = Region<Sky, Point>;

impl<F: Frame> Region<F, Point> {
    /// Creates a point region at `center`.
    pub fn at(center: F::Coord) -> Self {
        Region::new(center, Point)
    }
}

impl Shape for Point {
    fn kind(&self) -> &'static str {
        "point"
    }

    fn draw<T: Surface + ?Sized>(&self, center: PixCoord, surface: &mut T, style: &Visual) {
        if let PatchCapability::HasPatch(patch) = self.patch(center, style) {
            surface.draw_patch(&patch, style);
        }
    }

    fn patch(&self, center: PixCoord, style: &Visual) -> PatchCapability {
        let size = style
            .get("markersize")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_MARKER_SIZE);
        PatchCapability::HasPatch(Patch::Marker { center, size })
    }
}
