use serde::{Deserialize, Serialize};

use crate::core::ViewTransform;

/// Ease-in-out cubic: slow start, fast middle, slow finish.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased fly-to between two view transforms.
///
/// The start timestamp is latched by the first frame that steps the animation,
/// so a simulated clock drives it deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyAnimation {
    from: ViewTransform,
    to: ViewTransform,
    duration_ms: f64,
    start_time_ms: Option<f64>,
}

/// Result of stepping an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub transform: ViewTransform,
    pub progress: f64,
    pub finished: bool,
}

impl FlyAnimation {
    #[must_use]
    pub fn new(from: ViewTransform, to: ViewTransform, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_time_ms: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> ViewTransform {
        self.to
    }

    #[must_use]
    pub fn origin(&self) -> ViewTransform {
        self.from
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn start_time_ms(&self) -> Option<f64> {
        self.start_time_ms
    }

    /// Interpolated transform at `now_ms`. The terminal frame lands exactly on
    /// the target rather than on `from + (to - from) * 1.0`.
    pub fn step(&mut self, now_ms: f64) -> AnimationFrame {
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            return AnimationFrame {
                transform: self.to,
                progress: 1.0,
                finished: true,
            };
        }

        let eased = ease_in_out_cubic(progress);
        let transform = ViewTransform::new(
            self.from.scale + (self.to.scale - self.from.scale) * eased,
            self.from.offset_x + (self.to.offset_x - self.from.offset_x) * eased,
        );
        AnimationFrame {
            transform,
            progress,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlyAnimation, ease_in_out_cubic};
    use crate::core::ViewTransform;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.25), 0.0625);
    }

    #[test]
    fn easing_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_in_out_cubic(f64::from(i) / 100.0)).collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn first_step_latches_start_and_holds_origin() {
        let from = ViewTransform::new(1.0, 0.0);
        let to = ViewTransform::new(3.0, -200.0);
        let mut animation = FlyAnimation::new(from, to, 1_000.0);

        let frame = animation.step(5_000.0);
        assert_eq!(animation.start_time_ms(), Some(5_000.0));
        assert_eq!(frame.transform, from);
        assert!(!frame.finished);

        let frame = animation.step(5_500.0);
        assert_eq!(frame.transform, ViewTransform::new(2.0, -100.0));
    }

    #[test]
    fn terminal_step_snaps_to_target() {
        let to = ViewTransform::new(0.1 * 3.0, 1.0 / 3.0);
        let mut animation = FlyAnimation::new(ViewTransform::new(7.7, 91.3), to, 250.0);
        animation.step(0.0);
        let frame = animation.step(10_000.0);
        assert!(frame.finished);
        assert_eq!(frame.transform, to);
    }

    #[test]
    fn zero_duration_finishes_on_first_step() {
        let to = ViewTransform::new(2.0, 5.0);
        let mut animation = FlyAnimation::new(ViewTransform::identity(), to, 0.0);
        let frame = animation.step(12.0);
        assert!(frame.finished);
        assert_eq!(frame.transform, to);
    }
}
