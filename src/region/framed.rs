//! A region whose frame is only known at runtime.

use super::base::{Region, Shape};
use super::meta::{Meta, Visual};
use crate::coord::{Pixel, Sky};
use crate::wcs::{CoordinateTransformError, WcsTransform};

/// A region in either frame.
///
/// Unlike the typed [`Region`], both conversions are defined here. Asking
/// for the frame a region is already in returns a copy without calling the
/// WCS.
#[derive(Clone, Debug, PartialEq)]
pub enum FramedRegion<S: Shape> {
    Pixel(Region<Pixel, S>),
    Sky(Region<Sky, S>),
}

impl<S: Shape> FramedRegion<S> {
    /// Frame name, "pixel" or "sky".
    pub fn frame_name(&self) -> &'static str {
        match self {
            FramedRegion::Pixel(r) => r.frame_name(),
            FramedRegion::Sky(r) => r.frame_name(),
        }
    }

    pub fn shape(&self) -> &S {
        match self {
            FramedRegion::Pixel(r) => r.shape(),
            FramedRegion::Sky(r) => r.shape(),
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            FramedRegion::Pixel(r) => r.meta(),
            FramedRegion::Sky(r) => r.meta(),
        }
    }

    pub fn visual(&self) -> &Visual {
        match self {
            FramedRegion::Pixel(r) => r.visual(),
            FramedRegion::Sky(r) => r.visual(),
        }
    }

    /// Returns the region in pixel frame.
    pub fn to_pixel<W: WcsTransform + ?Sized>(
        &self,
        wcs: &W,
    ) -> Result<Region<Pixel, S>, CoordinateTransformError> {
        match self {
            FramedRegion::Pixel(r) => Ok(r.clone()),
            FramedRegion::Sky(r) => r.to_pixel(wcs),
        }
    }

    /// Returns the region in sky frame.
    pub fn to_sky<W: WcsTransform + ?Sized>(
        &self,
        wcs: &W,
    ) -> Result<Region<Sky, S>, CoordinateTransformError> {
        match self {
            FramedRegion::Pixel(r) => r.to_sky(wcs),
            FramedRegion::Sky(r) => Ok(r.clone()),
        }
    }

    /// The pixel-frame region, if this is one.
    pub fn as_pixel(&self) -> Option<&Region<Pixel, S>> {
        match self {
            FramedRegion::Pixel(r) => Some(r),
            FramedRegion::Sky(_) => None,
        }
    }

    /// The sky-frame region, if this is one.
    pub fn as_sky(&self) -> Option<&Region<Sky, S>> {
        match self {
            FramedRegion::Pixel(_) => None,
            FramedRegion::Sky(r) => Some(r),
        }
    }
}

impl<S: Shape> From<Region<Pixel, S>> for FramedRegion<S> {
    fn from(region: Region<Pixel, S>) -> Self {
        FramedRegion::Pixel(region)
    }
}

impl<S: Shape> From<Region<Sky, S>> for FramedRegion<S> {
    fn from(region: Region<Sky, S>) -> Self {
        FramedRegion::Sky(region)
    }
}
