use serde::{Deserialize, Serialize};

use crate::core::{Rgb, TimelineEvent, format_year};

use super::SceneContext;

/// Positioned, hoverable marker for one catalog event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    /// Index into `Catalog::events()`; hosts echo it back on hover.
    pub event_index: usize,
    pub left: f64,
    pub top: f64,
    pub title: String,
    pub year_label: String,
    pub color: Rgb,
    pub period_index: Option<usize>,
}

/// Indices of events with `left_year <= year <= right_year`, in catalog
/// order, stopping once `max_markers` have been collected.
#[must_use]
pub fn visible_event_indices(
    events: &[TimelineEvent],
    left_year: f64,
    right_year: f64,
    max_markers: usize,
) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.year >= left_year && event.year <= right_year)
        .map(|(index, _)| index)
        .take(max_markers)
        .collect()
}

/// Full marker set for the snapshot; the surface replaces its previous set
/// with this one on every draw.
#[must_use]
pub fn build_event_markers(ctx: &SceneContext<'_>) -> Vec<EventMarker> {
    let (left_year, right_year) = ctx.visible_range(ctx.config.event_cull_margin_px);
    let events = ctx.catalog.events();
    let top = ctx.viewport.center_y() - ctx.style.event_marker_top_offset_px;

    visible_event_indices(events, left_year, right_year, ctx.config.max_event_markers)
        .into_iter()
        .map(|event_index| {
            let event = &events[event_index];
            let period = ctx.catalog.period_for_year(event.year);
            EventMarker {
                event_index,
                left: ctx.year_to_x(event.year),
                top,
                title: event.title.clone(),
                year_label: format_year(event.year),
                color: period.map_or(ctx.style.default_event_color, |(_, period)| period.color),
                period_index: period.map(|(index, _)| index),
            }
        })
        .collect()
}
