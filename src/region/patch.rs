//! Fillable geometric patches and the capability to produce one.

use serde::Serialize;

use crate::coord::PixCoord;

/// Default marker size in pixels when the style does not set "markersize".
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;

/// A fillable 2-D shape in pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Patch {
    /// A filled marker symbol of `size` pixels centered on `center`.
    Marker { center: PixCoord, size: f64 },
}

/// Whether a shape can be drawn as a [`Patch`].
///
/// Callers branch on this instead of handling an error from
/// [`as_patch`](crate::region::Region::as_patch).
#[derive(Clone, Debug, PartialEq)]
pub enum PatchCapability {
    HasPatch(Patch),
    NoPatch,
}

impl PatchCapability {
    pub fn is_supported(&self) -> bool {
        matches!(self, PatchCapability::HasPatch(_))
    }

    /// Converts into the patch, if any.
    pub fn into_patch(self) -> Option<Patch> {
        match self {
            PatchCapability::HasPatch(patch) => Some(patch),
            PatchCapability::NoPatch => None,
        }
    }
}
