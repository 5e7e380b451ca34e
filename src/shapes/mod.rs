//! Concrete region shapes and their pixel/sky type aliases.

mod any;
mod point;
mod text;

pub use any::AnyShape;
pub use point::{Point, PointPixelRegion, PointSkyRegion};
pub use text::{Text, TextPixelRegion, TextSkyRegion};
