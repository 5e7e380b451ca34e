//! Coordinate primitives.
//!
//! [`PixCoord`] and [`SkyCoord`] are immutable value types. The [`Pixel`]
//! and [`Sky`] markers tie each region frame to its coordinate type.

mod pixel;
mod sky;
mod space;

pub use pixel::PixCoord;
pub use sky::{SkyCoord, SkyFrame};
pub use space::{Frame, Pixel, Sky};
