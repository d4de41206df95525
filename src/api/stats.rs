use serde::{Deserialize, Serialize};

use crate::core::format_span;

use super::SceneContext;

/// Readout for the stats panel, computed over the unmargined canvas window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStats {
    pub visible_events: usize,
    pub visible_periods: usize,
    pub span_years: f64,
    pub span_text: String,
}

#[must_use]
pub fn compute_stats(ctx: &SceneContext<'_>) -> TimelineStats {
    let (left_year, right_year) = ctx.visible_range(0.0);
    let visible_events = ctx
        .catalog
        .events()
        .iter()
        .filter(|event| event.year >= left_year && event.year <= right_year)
        .count();
    let visible_periods = ctx
        .catalog
        .periods()
        .iter()
        .filter(|period| period.intersects(left_year, right_year))
        .count();
    let span_years = (right_year - left_year).abs();

    TimelineStats {
        visible_events,
        visible_periods,
        span_years,
        span_text: format_span(span_years),
    }
}
