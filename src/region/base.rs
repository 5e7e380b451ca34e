//! The region base abstraction shared by every shape.
//!
//! A region is a center coordinate in one frame plus shape-specific fields
//! and free-form metadata. The frame is a type parameter, so the center's
//! type always matches it. Frame conversion lives here rather than on each
//! shape: the center goes through the WCS, everything else is cloned into
//! the counterpart by [`Region::reframed`].

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, warn};

use super::meta::{Meta, Visual};
use super::patch::{Patch, PatchCapability};
use crate::coord::{Frame, PixCoord, Pixel, Sky};
use crate::error::RegionError;
use crate::render::{with_current_canvas, Canvas, Surface};
use crate::wcs::{pixel_to_skycoord, skycoord_to_pixel, CoordinateTransformError, WcsTransform};

/// Shape-specific region fields, independent of frame.
///
/// A shape only describes its own fields and how to draw itself at a pixel
/// position; it never sees a WCS. Fields added to an implementor are carried
/// through frame conversion automatically.
pub trait Shape: Clone + fmt::Debug + PartialEq + Send + Sync {
    /// Short lowercase shape name, e.g. "point" or "text".
    fn kind(&self) -> &'static str;

    /// Issues the draw requests for this shape at `center`.
    fn draw<T: Surface + ?Sized>(&self, center: PixCoord, surface: &mut T, style: &Visual);

    /// The fillable patch for this shape at `center`, if it has one.
    fn patch(&self, center: PixCoord, style: &Visual) -> PatchCapability;
}

/// A region of shape `S` positioned in frame `F`.
///
/// Immutable after construction: every accessor borrows and every
/// conversion returns a new region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region<F: Frame, S: Shape> {
    center: F::Coord,
    shape: S,
    meta: Meta,
    visual: Visual,
    _frame: PhantomData<F>,
}

impl<F: Frame, S: Shape> Region<F, S> {
    /// Creates a region with empty metadata and visual attributes.
    pub fn new(center: F::Coord, shape: S) -> Self {
        Self {
            center,
            shape,
            meta: Meta::default(),
            visual: Visual::default(),
            _frame: PhantomData,
        }
    }

    /// Replaces the metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Replaces the visual attributes.
    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn center(&self) -> &F::Coord {
        &self.center
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    /// Shape name, e.g. "text".
    pub fn kind(&self) -> &'static str {
        self.shape.kind()
    }

    /// Frame name, "pixel" or "sky".
    pub fn frame_name(&self) -> &'static str {
        F::NAME
    }

    /// Copies this region into frame `G` around a freshly computed center.
    ///
    /// Both conversion directions go through here, so shape fields, `meta`
    /// and `visual` are forwarded identically either way.
    fn reframed<G: Frame>(&self, center: G::Coord) -> Region<G, S> {
        Region {
            center,
            shape: self.shape.clone(),
            meta: self.meta.clone(),
            visual: self.visual.clone(),
            _frame: PhantomData,
        }
    }
}

impl<S: Shape> Region<Pixel, S> {
    /// Converts to a sky-frame region through `wcs`.
    ///
    /// # Errors
    /// Returns the WCS failure unchanged; no fallback coordinate is used.
    pub fn to_sky<W: WcsTransform + ?Sized>(
        &self,
        wcs: &W,
    ) -> Result<Region<Sky, S>, CoordinateTransformError> {
        let center = pixel_to_skycoord(self.center.x, self.center.y, wcs)?;
        debug!(kind = self.kind(), from = %self.center, to = %center, "pixel -> sky");
        Ok(self.reframed::<Sky>(center))
    }

    /// What [`Region::as_patch`] would produce, without failing.
    ///
    /// `style` overrides the region's own visual attributes.
    pub fn patch_capability(&self, style: &Visual) -> PatchCapability {
        self.shape.patch(self.center, &self.visual.merged(style))
    }

    /// Returns the fillable patch for this region.
    ///
    /// # Errors
    /// [`RegionError::UnsupportedOperation`] for shapes without a patch.
    pub fn as_patch(&self, style: &Visual) -> Result<Patch, RegionError> {
        self.patch_capability(style)
            .into_patch()
            .ok_or(RegionError::UnsupportedOperation {
                shape: self.kind(),
                operation: "as_patch",
            })
    }

    /// Draws this region onto `surface` and hands the surface back.
    ///
    /// The region's visual attributes are the default style; `style`
    /// overrides them key by key. A non-finite center draws nothing.
    pub fn plot<'s, T: Surface + ?Sized>(&self, surface: &'s mut T, style: &Visual) -> &'s mut T {
        if !self.center.is_finite() {
            warn!(kind = self.kind(), center = %self.center, "skipping plot of non-finite center");
            return surface;
        }
        self.shape
            .draw(self.center, surface, &self.visual.merged(style));
        surface
    }

    /// Draws this region onto the process-wide current canvas, then hands
    /// that canvas to `inspect` while the lock is still held.
    pub fn plot_current<R>(&self, style: &Visual, inspect: impl FnOnce(&mut Canvas) -> R) -> R {
        with_current_canvas(|canvas| inspect(self.plot(canvas, style)))
    }
}

impl<S: Shape> Region<Sky, S> {
    /// Converts to a pixel-frame region through `wcs`.
    ///
    /// # Errors
    /// Returns the WCS failure unchanged; no fallback coordinate is used.
    pub fn to_pixel<W: WcsTransform + ?Sized>(
        &self,
        wcs: &W,
    ) -> Result<Region<Pixel, S>, CoordinateTransformError> {
        let (x, y) = skycoord_to_pixel(&self.center, wcs)?;
        let center = PixCoord::new(x, y);
        debug!(kind = self.kind(), from = %self.center, to = %center, "sky -> pixel");
        Ok(self.reframed::<Pixel>(center))
    }
}
