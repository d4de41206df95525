use crate::core::{MIN_YEAR, TOTAL_YEARS, ViewTransform, Viewport};

/// Year <-> pixel mapping for the full navigable domain.
///
/// `x = ((year - MIN_YEAR) / TOTAL_YEARS) * canvas_width * scale + offset_x`
/// and `x_to_year` is its algebraic inverse. The canvas width is read at call
/// time so a resize is picked up without rebuilding the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    min_year: f64,
    total_years: f64,
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            total_years: TOTAL_YEARS,
        }
    }
}

impl TimeAxis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min_year, self.min_year + self.total_years)
    }

    #[must_use]
    pub fn total_years(self) -> f64 {
        self.total_years
    }

    #[must_use]
    pub fn year_to_x(self, year: f64, transform: ViewTransform, viewport: Viewport) -> f64 {
        year_to_x(year, transform.scale, transform.offset_x, viewport.width_px())
    }

    #[must_use]
    pub fn x_to_year(self, x: f64, transform: ViewTransform, viewport: Viewport) -> f64 {
        x_to_year(x, transform.scale, transform.offset_x, viewport.width_px())
    }

    /// Years spanned by the canvas width at `scale`.
    #[must_use]
    pub fn visible_years(self, scale: f64) -> f64 {
        self.total_years / scale
    }

    /// Year range covered by `[-margin_px, width + margin_px]`.
    #[must_use]
    pub fn visible_range(
        self,
        transform: ViewTransform,
        viewport: Viewport,
        margin_px: f64,
    ) -> (f64, f64) {
        (
            self.x_to_year(-margin_px, transform, viewport),
            self.x_to_year(viewport.width_px() + margin_px, transform, viewport),
        )
    }

    /// Pixel width of a span of `years` at `scale`.
    #[must_use]
    pub fn span_to_px(self, years: f64, scale: f64, viewport: Viewport) -> f64 {
        (years / self.total_years) * viewport.width_px() * scale
    }

    #[must_use]
    pub fn contains(self, year: f64) -> bool {
        let (start, end) = self.domain();
        year >= start && year <= end
    }
}

#[must_use]
pub fn year_to_x(year: f64, scale: f64, offset_x: f64, canvas_width: f64) -> f64 {
    let normalized = (year - MIN_YEAR) / TOTAL_YEARS;
    normalized * canvas_width * scale + offset_x
}

#[must_use]
pub fn x_to_year(x: f64, scale: f64, offset_x: f64, canvas_width: f64) -> f64 {
    let normalized = (x - offset_x) / (canvas_width * scale);
    normalized * TOTAL_YEARS + MIN_YEAR
}
