use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Canvas pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    /// Vertical position of the main axis line.
    #[must_use]
    pub fn center_y(self) -> f64 {
        self.height_px() / 2.0
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.width_px() / 2.0
    }
}

/// Combined zoom + pan applied to the full-domain-to-canvas mapping.
///
/// `scale == 1` with `offset_x == 0` shows the whole domain across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
}

impl ViewTransform {
    #[must_use]
    pub const fn new(scale: f64, offset_x: f64) -> Self {
        Self { scale, offset_x }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.offset_x.is_finite()
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Axis-aligned rectangle in screen pixels (left/top origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Width/height pair in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
