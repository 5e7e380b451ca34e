//! Rendering bridge from pixel-frame regions to drawing surfaces.
//!
//! Regions only ever issue draw requests through [`Surface`]; style options
//! travel through unvalidated. [`Canvas`] is the recording surface shipped
//! with the crate, and a process-wide current canvas backs
//! [`Region::plot_current`](crate::region::Region::plot_current).

mod canvas;

pub use canvas::{Artist, Canvas};

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::region::{Patch, Visual};

/// A drawing target that accepts text glyphs and patches.
///
/// Implementations must accept any finite position and any style map;
/// interpreting style keys is their business.
pub trait Surface {
    /// Draws `text` with its anchor at `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &Visual);

    /// Draws a filled patch.
    fn draw_patch(&mut self, patch: &Patch, style: &Visual);
}

fn current_canvas() -> &'static Mutex<Canvas> {
    static CURRENT: OnceLock<Mutex<Canvas>> = OnceLock::new();
    CURRENT.get_or_init(|| Mutex::new(Canvas::new()))
}

/// Runs `f` with exclusive access to the process-wide current canvas.
pub fn with_current_canvas<R>(f: impl FnOnce(&mut Canvas) -> R) -> R {
    let mut guard = current_canvas()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Takes everything drawn on the current canvas, leaving it empty.
pub fn take_current_canvas() -> Canvas {
    with_current_canvas(std::mem::take)
}
