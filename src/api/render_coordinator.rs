use tracing::{debug, trace};

use crate::core::{Viewport, format_zoom_info};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::{
    TimelineEngine, TimelineSurface, build_event_markers, build_render_frame, compute_stats,
};

impl<R: Renderer, S: TimelineSurface> TimelineEngine<R, S> {
    /// Requests a draw on the next frame. Any number of requests between two
    /// frames collapse into one draw.
    pub fn render(&mut self) {
        if !self.render_pending {
            trace!("render scheduled");
        }
        self.render_pending = true;
    }

    /// Draws immediately, bypassing frame coalescing.
    pub fn force_render(&mut self) -> TimelineResult<()> {
        let ctx = self.scene_context();
        let frame = build_render_frame(&ctx);
        let markers = build_event_markers(&ctx);
        let zoom_info = format_zoom_info(ctx.visible_years());
        let stats = compute_stats(&ctx);

        self.renderer.render(&frame)?;
        self.surface.replace_markers(&markers);
        self.surface.update_zoom_info(&zoom_info);
        self.surface.update_stats(&stats);
        self.draw_count += 1;
        Ok(())
    }

    /// Display-refresh callback.
    ///
    /// An active animation advances and draws; otherwise a pending render is
    /// flushed. At most one draw happens per call.
    pub fn on_frame(&mut self, now_ms: f64) -> TimelineResult<()> {
        if let Some(step) = self.interaction.step_animation(now_ms) {
            self.transform = step.transform;
            if step.finished {
                debug!(
                    scale = step.transform.scale,
                    offset_x = step.transform.offset_x,
                    "fly-to animation finished"
                );
            }
            self.render_pending = false;
            return self.force_render();
        }

        if self.render_pending {
            self.render_pending = false;
            return self.force_render();
        }
        Ok(())
    }

    /// Whether the host should schedule another display-refresh callback.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.render_pending || self.interaction.animation().is_some()
    }

    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    #[must_use]
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Adopts new canvas dimensions and redraws synchronously, since resizing
    /// the backing surface discards its raster.
    pub fn resize(&mut self, viewport: Viewport) -> TimelineResult<()> {
        let viewport = viewport.validate()?;
        self.renderer.resize(viewport)?;
        self.config.viewport = viewport;
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.force_render()
    }
}
