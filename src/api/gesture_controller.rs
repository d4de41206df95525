use tracing::{debug, warn};

use crate::core::ViewTransform;
use crate::error::TimelineResult;
use crate::interaction::TouchPoint;
use crate::render::Renderer;

use super::validation::{validate_finite, validate_positive, validate_touch, validate_transform};
use super::{TimelineEngine, TimelineSurface};

impl<R: Renderer, S: TimelineSurface> TimelineEngine<R, S> {
    /// Multiplies the scale by `delta` (floored at `min_scale`) while keeping
    /// the year under `anchor_x` fixed on screen.
    pub fn zoom(&mut self, delta: f64, anchor_x: f64) -> TimelineResult<()> {
        validate_positive("zoom delta", delta)?;
        validate_finite("zoom anchor", anchor_x)?;
        self.cancel_animation();

        let scale = (self.transform.scale * delta).max(self.config.min_scale);
        let next = validate_transform(self.anchored_transform(anchor_x, scale))?;
        self.transform = next;
        self.render();
        Ok(())
    }

    pub fn zoom_in(&mut self) -> TimelineResult<()> {
        self.zoom(self.config.button_zoom_factor, self.config.viewport.center_x())
    }

    pub fn zoom_out(&mut self) -> TimelineResult<()> {
        self.zoom(
            1.0 / self.config.button_zoom_factor,
            self.config.viewport.center_x(),
        )
    }

    pub fn start_drag(&mut self, client_x: f64) -> TimelineResult<()> {
        validate_finite("drag x", client_x)?;
        self.cancel_animation();
        self.interaction.start_drag(client_x, self.transform.offset_x);
        debug!(client_x, "drag started");
        Ok(())
    }

    /// Pans by the pointer delta since `start_drag`; no-op when not dragging.
    pub fn drag(&mut self, client_x: f64) -> TimelineResult<()> {
        validate_finite("drag x", client_x)?;
        let Some(session) = self.interaction.drag_session() else {
            return Ok(());
        };
        self.transform.offset_x = session.offset_for(client_x);
        self.render();
        Ok(())
    }

    pub fn end_drag(&mut self) {
        if self.interaction.is_dragging() {
            debug!("drag ended");
        }
        self.interaction.end_drag();
    }

    /// Captures the reference distance and scale for a two-finger zoom.
    ///
    /// Coincident touches would make every later ratio divide by zero, so such
    /// a session is kept but produces no scale change until the fingers move
    /// apart.
    pub fn pinch_start(&mut self, first: TouchPoint, second: TouchPoint) -> TimelineResult<()> {
        validate_touch(first)?;
        validate_touch(second)?;
        self.cancel_animation();

        let session = self
            .interaction
            .start_pinch(first.distance_to(second), self.transform.scale);
        if session.is_degenerate() {
            warn!(
                distance = session.initial_distance,
                "pinch started with coincident touches; ignoring scale until they separate"
            );
        } else {
            debug!(distance = session.initial_distance, "pinch started");
        }
        Ok(())
    }

    /// Applies the distance ratio since `pinch_start`, anchored at the touch
    /// midpoint in canvas coordinates (`canvas_left` is the canvas's client
    /// x-origin).
    pub fn pinch(
        &mut self,
        first: TouchPoint,
        second: TouchPoint,
        canvas_left: f64,
    ) -> TimelineResult<()> {
        validate_touch(first)?;
        validate_touch(second)?;
        validate_finite("canvas left", canvas_left)?;

        let distance = first.distance_to(second);
        let Some(requested) = self.interaction.pinch_scale(distance, self.transform.scale) else {
            return Ok(());
        };

        let anchor_x = first.midpoint_x(second) - canvas_left;
        let scale = requested.max(self.config.min_scale);
        let next = validate_transform(self.anchored_transform(anchor_x, scale))?;
        self.transform = next;
        self.render();
        Ok(())
    }

    pub fn end_pinch(&mut self) {
        if self.interaction.pinch_session().is_some() {
            debug!("pinch ended");
        }
        self.interaction.end_pinch();
    }

    /// Transform at `scale` that maps the year currently under `anchor_x`
    /// back to `anchor_x`. The anchor year is read before the scale changes.
    pub(super) fn anchored_transform(&self, anchor_x: f64, scale: f64) -> ViewTransform {
        let viewport = self.config.viewport;
        let anchor_year = self.axis.x_to_year(anchor_x, self.transform, viewport);
        let rescaled = ViewTransform::new(scale, self.transform.offset_x);
        let drifted_x = self.axis.year_to_x(anchor_year, rescaled, viewport);
        ViewTransform::new(scale, rescaled.offset_x + (anchor_x - drifted_x))
    }
}
