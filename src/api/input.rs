use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::interaction::{TouchList, TouchPoint};
use crate::render::Renderer;

use super::{TimelineEngine, TimelineSurface};

/// Raw host input, in client (page) coordinates unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseDown { client_x: f64 },
    MouseMove { client_x: f64 },
    MouseUp,
    MouseLeave,
    Wheel { client_x: f64, delta_y: f64 },
    /// Carries every touch still on the surface after the change.
    TouchStart { touches: TouchList },
    TouchMove { touches: TouchList },
    TouchEnd { touches: TouchList },
    /// New canvas pixel size and its client x-origin.
    Resize { viewport: Viewport, canvas_left: f64 },
    ZoomInButton,
    ZoomOutButton,
    ResetButton,
    PeriodButton { period_index: usize },
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputOutcome {
    pub prevent_default: bool,
}

impl InputOutcome {
    const PASS: Self = Self {
        prevent_default: false,
    };
    const CONSUME: Self = Self {
        prevent_default: true,
    };
}

/// Routes raw input to engine gestures.
///
/// One touch drags, two touches pinch; lifting one finger of a pinch restarts
/// the drag at the remaining touch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputDispatcher {
    canvas_left: f64,
}

impl InputDispatcher {
    #[must_use]
    pub fn new(canvas_left: f64) -> Self {
        Self { canvas_left }
    }

    #[must_use]
    pub fn canvas_left(&self) -> f64 {
        self.canvas_left
    }

    pub fn set_canvas_left(&mut self, canvas_left: f64) {
        self.canvas_left = canvas_left;
    }

    pub fn dispatch<R: Renderer, S: TimelineSurface>(
        &mut self,
        engine: &mut TimelineEngine<R, S>,
        event: InputEvent,
    ) -> TimelineResult<InputOutcome> {
        trace!(?event, "dispatching input");
        match event {
            InputEvent::MouseDown { client_x } => {
                engine.start_drag(client_x)?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::MouseMove { client_x } => {
                engine.drag(client_x)?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::MouseUp | InputEvent::MouseLeave => {
                engine.end_drag();
                Ok(InputOutcome::PASS)
            }
            InputEvent::Wheel { client_x, delta_y } => {
                let config = engine.config();
                let delta = if delta_y > 0.0 {
                    config.wheel_zoom_out_factor
                } else {
                    config.wheel_zoom_in_factor
                };
                engine.zoom(delta, client_x - self.canvas_left)?;
                Ok(InputOutcome::CONSUME)
            }
            InputEvent::TouchStart { touches } => {
                Self::touch_start(engine, &touches)?;
                Ok(InputOutcome::CONSUME)
            }
            InputEvent::TouchMove { touches } => {
                self.touch_move(engine, &touches)?;
                Ok(InputOutcome::CONSUME)
            }
            InputEvent::TouchEnd { touches } => {
                Self::touch_end(engine, &touches)?;
                Ok(InputOutcome::CONSUME)
            }
            InputEvent::Resize {
                viewport,
                canvas_left,
            } => {
                self.canvas_left = canvas_left;
                engine.resize(viewport)?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::ZoomInButton => {
                engine.zoom_in()?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::ZoomOutButton => {
                engine.zoom_out()?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::ResetButton => {
                engine.reset()?;
                Ok(InputOutcome::PASS)
            }
            InputEvent::PeriodButton { period_index } => {
                engine.jump_to_period_index(period_index)?;
                Ok(InputOutcome::PASS)
            }
        }
    }

    fn touch_start<R: Renderer, S: TimelineSurface>(
        engine: &mut TimelineEngine<R, S>,
        touches: &[TouchPoint],
    ) -> TimelineResult<()> {
        engine.interaction.set_touches(touches);
        match touches {
            [only] => engine.start_drag(only.client_x),
            [first, second] => {
                engine.end_drag();
                engine.pinch_start(*first, *second)
            }
            _ => Ok(()),
        }
    }

    fn touch_move<R: Renderer, S: TimelineSurface>(
        &self,
        engine: &mut TimelineEngine<R, S>,
        touches: &[TouchPoint],
    ) -> TimelineResult<()> {
        engine.interaction.set_touches(touches);
        match touches {
            [only] if engine.interaction.is_dragging() => engine.drag(only.client_x),
            [first, second] => {
                if engine.interaction.pinch_session().is_none() {
                    engine.pinch_start(*first, *second)?;
                }
                engine.pinch(*first, *second, self.canvas_left)
            }
            _ => Ok(()),
        }
    }

    fn touch_end<R: Renderer, S: TimelineSurface>(
        engine: &mut TimelineEngine<R, S>,
        touches: &[TouchPoint],
    ) -> TimelineResult<()> {
        engine.interaction.set_touches(touches);
        match touches {
            [] => {
                engine.end_drag();
                engine.end_pinch();
                Ok(())
            }
            [only] => {
                engine.end_pinch();
                engine.start_drag(only.client_x)
            }
            _ => Ok(()),
        }
    }
}
