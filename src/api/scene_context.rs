use crate::core::{Catalog, TimeAxis, ViewTransform, Viewport};

use super::{TimelineConfig, TimelineStyle};

/// Read-only snapshot handed to every scene builder for one draw pass.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a TimelineConfig,
    pub style: &'a TimelineStyle,
    pub axis: TimeAxis,
    pub transform: ViewTransform,
    pub viewport: Viewport,
}

impl SceneContext<'_> {
    #[must_use]
    pub fn year_to_x(&self, year: f64) -> f64 {
        self.axis.year_to_x(year, self.transform, self.viewport)
    }

    #[must_use]
    pub fn x_to_year(&self, x: f64) -> f64 {
        self.axis.x_to_year(x, self.transform, self.viewport)
    }

    #[must_use]
    pub fn visible_years(&self) -> f64 {
        self.axis.visible_years(self.transform.scale)
    }

    /// Year window covered by the canvas widened by `margin_px` on both sides.
    #[must_use]
    pub fn visible_range(&self, margin_px: f64) -> (f64, f64) {
        self.axis
            .visible_range(self.transform, self.viewport, margin_px)
    }
}
