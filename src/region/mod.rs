//! Region model: the frame-generic base, metadata and patches.
//!
//! # Design Principles
//!
//! 1. **Frame safety**: a region's frame is a type parameter, so a
//!    pixel-frame region cannot hold a sky coordinate and only the useful
//!    conversion direction exists on each typed region.
//!
//! 2. **Uniform conversion**: conversion is implemented once for every
//!    shape. Shapes contribute fields, never conversion code, so nothing a
//!    shape carries can be lost in either direction.
//!
//! 3. **Capabilities as values**: whether a shape has a patch is answered by
//!    [`PatchCapability`], not by catching an error.
//!
//! # Example
//!
//! ```
//! use skyregion::coord::{PixCoord, SkyFrame};
//! use skyregion::region::Meta;
//! use skyregion::shapes::TextPixelRegion;
//! use skyregion::wcs::TanWcs;
//!
//! let wcs = TanWcs::from_cdelt([101.0, 201.0], [10.0, 20.0], [-1e-4, 1e-4], 0.0, SkyFrame::Icrs)
//!     .unwrap();
//! let region = TextPixelRegion::labeled(PixCoord::new(100.0, 200.0), "target")
//!     .with_meta(Meta::new().with("source", "catalog"));
//!
//! let sky = region.to_sky(&wcs).unwrap();
//! assert_eq!(sky.text(), "target");
//! assert_eq!(sky.center().ra(), 10.0);
//! assert_eq!(sky.meta(), region.meta());
//! ```
//!
//! A pixel-frame region only accepts a pixel center:
//!
//! ```compile_fail
//! use skyregion::coord::SkyCoord;
//! use skyregion::shapes::TextPixelRegion;
//!
//! let region = TextPixelRegion::labeled(SkyCoord::icrs(0.0, 0.0), "x");
//! ```

mod base;
mod framed;
mod meta;
mod patch;

pub use base::{Region, Shape};
pub use framed::FramedRegion;
pub use meta::{Meta, Visual};
pub use patch::{Patch, PatchCapability, DEFAULT_MARKER_SIZE};
