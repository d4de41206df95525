use tracing::trace;

use crate::render::RenderFrame;

use super::SceneContext;
use super::axis_ruler_builder::append_scale_ruler;
use super::axis_tick_builder::append_year_ticks;
use super::period_band_builder::append_period_bands;

/// Materializes the full canvas scene for the given snapshot.
///
/// Builders run ruler, period bands and labels, axis line, then ticks. That
/// order only holds within each primitive list: backends paint every rect,
/// then every line, then every text, so kinds are not interleaved.
#[must_use]
pub fn build_render_frame(ctx: &SceneContext<'_>) -> RenderFrame {
    let mut frame = RenderFrame::new(ctx.viewport);
    append_scale_ruler(&mut frame, ctx);
    append_period_bands(&mut frame, ctx);
    append_year_ticks(&mut frame, ctx);
    trace!(
        rects = frame.rects.len(),
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        scale = ctx.transform.scale,
        offset_x = ctx.transform.offset_x,
        "built render frame"
    );
    frame
}
