mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::core::Viewport;
use crate::error::TimelineResult;

/// Contract implemented by any canvas backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from the view transform and gesture logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;

    /// Resizes the backing surface. Prior raster content is discarded.
    fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        viewport.validate().map(|_| ())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
