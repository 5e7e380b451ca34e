//! Text regions: a label anchored at a point.
//!
//! The center is the position of the leftmost point of the string. Text is
//! drawn as a glyph, so it has no patch.

use crate::coord::{Frame, PixCoord, Pixel, Sky};
use crate::region::{PatchCapability, Region, Shape, Visual};
use crate::render::Surface;

/// The text label carried by a text region. Any string, including empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A text label in pixel coordinates.
pub type TextPixelRegion = Region<Pixel, Text>;

/// A text label in sky coordinates.
pub type TextSkyRegion = Region<Sky, Text>;

impl<F: Frame> Region<F, Text> {
    /// Creates a text region with `text` anchored at `center`.
    pub fn labeled(center: F::Coord, text: impl Into<String>) -> Self {
        Region::new(center, Text::new(text))
    }

    /// The label content.
    pub fn text(&self) -> &str {
        self.shape().as_str()
    }
}

impl Shape for Text {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn draw<T: Surface + ?Sized>(&self, center: PixCoord, surface: &mut T, style: &Visual) {
        surface.draw_text(center.x, center.y, &self.text, style);
    }

    fn patch(&self, _center: PixCoord, _style: &Visual) -> PatchCapability {
        PatchCapability::NoPatch
    }
}
