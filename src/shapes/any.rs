//! A shape that can be any of the concrete shapes.
//!
//! Lets heterogeneous region lists share one type, e.g.
//! `Vec<Region<Pixel, AnyShape>>`.

use crate::coord::PixCoord;
use crate::region::{PatchCapability, Shape, Visual};
use crate::render::Surface;

use super::point::Point;
use super::text::Text;

#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Point(Point),
    Text(Text),
}

impl AnyShape {
    /// The label, for text shapes.
    pub fn text(&self) -> Option<&str> {
        match self {
            AnyShape::Text(text) => Some(text.as_str()),
            AnyShape::Point(_) => None,
        }
    }
}

impl Shape for AnyShape {
    fn kind(&self) -> &'static str {
        match self {
            AnyShape::Point(s) => s.kind(),
            AnyShape::Text(s) => s.kind(),
        }
    }

    fn draw<T: Surface + ?Sized>(&self, center: PixCoord, surface: &mut T, style: &Visual) {
        match self {
            AnyShape::Point(s) => s.draw(center, surface, style),
            AnyShape::Text(s) => s.draw(center, surface, style),
        }
    }

    fn patch(&self, center: PixCoord, style: &Visual) -> PatchCapability {
        match self {
            AnyShape::Point(s) => s.patch(center, style),
            AnyShape::Text(s) => s.patch(center, style),
        }
    }
}

impl From<Point> for AnyShape {
    fn from(point: Point) -> Self {
        AnyShape::Point(point)
    }
}

impl From<Text> for AnyShape {
    fn from(text: Text) -> Self {
        AnyShape::Text(text)
    }
}
