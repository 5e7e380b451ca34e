//! World coordinate system seam.
//!
//! Regions never inspect a WCS; they only call the two directions of
//! [`WcsTransform`]. [`TanWcs`] is the gnomonic implementation shipped with
//! the crate, but any projection engine can be plugged in by implementing
//! the trait.

mod tan;

pub use tan::TanWcs;

use thiserror::Error;

use crate::coord::{PixCoord, SkyCoord, SkyFrame};

/// A WCS could not map a coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateTransformError {
    #[error("coordinate {lon}°, {lat}° lies outside the projection domain")]
    OutsideProjection { lon: f64, lat: f64 },

    #[error("cannot transform non-finite input ({0}, {1})")]
    NonFiniteInput(f64, f64),

    #[error("transform produced a non-finite result for input ({0}, {1})")]
    NonFiniteResult(f64, f64),

    #[error("coordinate frame '{found}' does not match WCS frame '{expected}'")]
    FrameMismatch { expected: SkyFrame, found: SkyFrame },

    #[error("invalid WCS descriptor: {0}")]
    InvalidDescriptor(String),
}

/// A bidirectional pixel↔sky mapping.
///
/// Implementations must be pure: repeated calls with the same input return
/// the same output, and nothing about the call is retained. They should
/// signal failure rather than return NaN; the free functions
/// [`pixel_to_skycoord`] and [`skycoord_to_pixel`] check that regardless.
pub trait WcsTransform {
    /// Maps an image pixel position to a sky position.
    fn pixel_to_sky(&self, pixel: PixCoord) -> Result<SkyCoord, CoordinateTransformError>;

    /// Maps a sky position to an image pixel position.
    fn sky_to_pixel(&self, sky: &SkyCoord) -> Result<PixCoord, CoordinateTransformError>;
}

/// Converts pixel `(x, y)` to a sky coordinate through `wcs`.
///
/// # Errors
/// Fails if the input is non-finite, if the WCS rejects the position, or if
/// the WCS returns a non-finite coordinate.
pub fn pixel_to_skycoord<W: WcsTransform + ?Sized>(
    x: f64,
    y: f64,
    wcs: &W,
) -> Result<SkyCoord, CoordinateTransformError> {
    let pixel = PixCoord::new(x, y);
    if !pixel.is_finite() {
        return Err(CoordinateTransformError::NonFiniteInput(x, y));
    }
    let sky = wcs.pixel_to_sky(pixel)?;
    if !sky.is_finite() {
        return Err(CoordinateTransformError::NonFiniteResult(x, y));
    }
    Ok(sky)
}

/// Converts a sky coordinate to pixel `(x, y)` through `wcs`.
///
/// # Errors
/// Fails if the input is non-finite, if the WCS rejects the position, or if
/// the WCS returns a non-finite pixel.
pub fn skycoord_to_pixel<W: WcsTransform + ?Sized>(
    coord: &SkyCoord,
    wcs: &W,
) -> Result<(f64, f64), CoordinateTransformError> {
    if !coord.is_finite() {
        return Err(CoordinateTransformError::NonFiniteInput(coord.lon, coord.lat));
    }
    let pixel = wcs.sky_to_pixel(coord)?;
    if !pixel.is_finite() {
        return Err(CoordinateTransformError::NonFiniteResult(coord.lon, coord.lat));
    }
    Ok((pixel.x, pixel.y))
}
