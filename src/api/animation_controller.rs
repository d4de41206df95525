use tracing::debug;

use crate::core::{Period, ViewTransform};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::FlyAnimation;
use crate::render::Renderer;

use super::validation::{validate_finite, validate_positive};
use super::{TimelineEngine, TimelineSurface};

impl<R: Renderer, S: TimelineSurface> TimelineEngine<R, S> {
    /// Starts an eased fly-to, replacing any animation already in flight.
    ///
    /// The clock starts on the next [`TimelineEngine::on_frame`].
    pub fn animate_to_position(
        &mut self,
        target_scale: f64,
        target_offset_x: f64,
        duration_ms: f64,
    ) -> TimelineResult<()> {
        validate_positive("animation target scale", target_scale)?;
        validate_finite("animation target offset", target_offset_x)?;
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(TimelineError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }

        self.cancel_animation();
        let target = ViewTransform::new(target_scale, target_offset_x);
        self.interaction
            .start_animation(FlyAnimation::new(self.transform, target, duration_ms));
        debug!(
            target_scale,
            target_offset_x, duration_ms, "fly-to animation started"
        );
        Ok(())
    }

    /// Flies to a view where the period, padded by `jump_padding_ratio`,
    /// fills the canvas with its midpoint centered.
    pub fn jump_to_period(&mut self, period: &Period) -> TimelineResult<()> {
        let target = self.jump_target(period);
        self.animate_to_position(
            target.scale,
            target.offset_x,
            self.config.animation_duration_ms,
        )
    }

    pub fn jump_to_period_index(&mut self, period_index: usize) -> TimelineResult<()> {
        let target = self
            .catalog
            .periods()
            .get(period_index)
            .map(|period| self.jump_target(period))
            .ok_or_else(|| {
                TimelineError::InvalidData(format!("period index {period_index} out of range"))
            })?;
        self.animate_to_position(
            target.scale,
            target.offset_x,
            self.config.animation_duration_ms,
        )
    }

    pub fn reset(&mut self) -> TimelineResult<()> {
        let home = ViewTransform::identity();
        self.animate_to_position(home.scale, home.offset_x, self.config.animation_duration_ms)
    }

    /// Stops the in-flight animation, leaving the transform where the last
    /// frame put it. Returns `true` when an animation was running.
    pub fn cancel_animation(&mut self) -> bool {
        let cancelled = self.interaction.cancel_animation();
        if cancelled {
            debug!("fly-to animation cancelled");
        }
        cancelled
    }

    pub(super) fn jump_target(&self, period: &Period) -> ViewTransform {
        let visible_years = (period.duration() * self.config.jump_padding_ratio)
            .max(self.config.min_jump_visible_years);
        let scale = self.axis.total_years() / visible_years;
        let viewport = self.config.viewport;
        let unshifted_x = self
            .axis
            .year_to_x(period.midpoint(), ViewTransform::new(scale, 0.0), viewport);
        ViewTransform::new(scale, viewport.center_x() - unshifted_x)
    }
}
