mod animation;

pub use animation::{AnimationFrame, FlyAnimation, ease_in_out_cubic};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pinches whose fingers start closer than this are treated as degenerate.
pub const MIN_PINCH_DISTANCE_PX: f64 = 1e-6;

/// Which gesture currently owns the view transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    Idle,
    Dragging,
    Pinching,
    Animating,
}

/// One active touch contact in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.client_x - self.client_x).hypot(other.client_y - self.client_y)
    }

    #[must_use]
    pub fn midpoint_x(self, other: Self) -> f64 {
        (self.client_x + other.client_x) / 2.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.client_x.is_finite() && self.client_y.is_finite()
    }
}

pub type TouchList = SmallVec<[TouchPoint; 4]>;

/// Delta-based panning anchored where the pointer went down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub start_drag_x: f64,
    pub start_offset_x: f64,
}

impl DragSession {
    #[must_use]
    pub fn offset_for(self, client_x: f64) -> f64 {
        self.start_offset_x + (client_x - self.start_drag_x)
    }
}

/// Two-finger zoom reference captured at pinch start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchSession {
    pub initial_distance: f64,
    pub initial_scale: f64,
}

impl PinchSession {
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.initial_distance > MIN_PINCH_DISTANCE_PX)
    }
}

/// Ephemeral gesture state owned by the engine.
///
/// Drag and pinch are mutually exclusive; the animation slot holds at most one
/// in-flight fly-to and clearing it is how a frame callback gets cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    drag: Option<DragSession>,
    pinch: Option<PinchSession>,
    touches: TouchList,
    animation: Option<FlyAnimation>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        if self.animation.is_some() {
            GestureMode::Animating
        } else if self.drag.is_some() {
            GestureMode::Dragging
        } else if self.pinch.is_some() {
            GestureMode::Pinching
        } else {
            GestureMode::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    #[must_use]
    pub fn pinch_session(&self) -> Option<PinchSession> {
        self.pinch
    }

    #[must_use]
    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    pub fn set_touches(&mut self, touches: &[TouchPoint]) {
        self.touches = touches.iter().copied().collect();
    }

    pub fn start_drag(&mut self, client_x: f64, offset_x: f64) {
        self.pinch = None;
        self.drag = Some(DragSession {
            start_drag_x: client_x,
            start_offset_x: offset_x,
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn start_pinch(&mut self, distance: f64, scale: f64) -> PinchSession {
        self.drag = None;
        let session = PinchSession {
            initial_distance: distance,
            initial_scale: scale,
        };
        self.pinch = Some(session);
        session
    }

    /// Scale requested by a pinch at `distance`, or `None` when the session is
    /// degenerate. A degenerate session re-seeds itself from the first
    /// non-degenerate distance so later moves zoom relative to that point.
    pub fn pinch_scale(&mut self, distance: f64, current_scale: f64) -> Option<f64> {
        let session = self.pinch.as_mut()?;
        if session.is_degenerate() {
            if distance > MIN_PINCH_DISTANCE_PX {
                session.initial_distance = distance;
                session.initial_scale = current_scale;
            }
            return None;
        }
        Some(session.initial_scale * (distance / session.initial_distance))
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    #[must_use]
    pub fn animation(&self) -> Option<&FlyAnimation> {
        self.animation.as_ref()
    }

    /// Installs a fly-to. Held drag and pinch sessions end here.
    pub fn start_animation(&mut self, animation: FlyAnimation) {
        self.drag = None;
        self.pinch = None;
        self.animation = Some(animation);
    }

    /// Drops any in-flight animation. Returns `true` when one was running.
    pub fn cancel_animation(&mut self) -> bool {
        self.animation.take().is_some()
    }

    /// Steps the active animation and clears it after its terminal frame.
    pub fn step_animation(&mut self, now_ms: f64) -> Option<AnimationFrame> {
        let frame = self.animation.as_mut()?.step(now_ms);
        if frame.finished {
            self.animation = None;
        }
        Some(frame)
    }
}
