use super::{EventMarker, TimelineStats, TooltipView};

/// Host-side outputs that live outside the canvas: the marker layer, the
/// floating tooltip and the text readouts.
pub trait TimelineSurface {
    /// Replaces every marker from the previous draw.
    fn replace_markers(&mut self, markers: &[EventMarker]);

    fn show_tooltip(&mut self, tooltip: &TooltipView);

    fn hide_tooltip(&mut self);

    fn update_zoom_info(&mut self, text: &str);

    fn update_stats(&mut self, stats: &TimelineStats);
}

/// Surface that keeps the latest pushed state, for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub markers: Vec<EventMarker>,
    pub marker_replacements: usize,
    pub tooltip: Option<TooltipView>,
    pub tooltip_visible: bool,
    pub zoom_info: String,
    pub stats: Option<TimelineStats>,
}

impl TimelineSurface for RecordingSurface {
    fn replace_markers(&mut self, markers: &[EventMarker]) {
        self.markers = markers.to_vec();
        self.marker_replacements += 1;
    }

    fn show_tooltip(&mut self, tooltip: &TooltipView) {
        self.tooltip = Some(tooltip.clone());
        self.tooltip_visible = true;
    }

    fn hide_tooltip(&mut self) {
        self.tooltip_visible = false;
    }

    fn update_zoom_info(&mut self, text: &str) {
        text.clone_into(&mut self.zoom_info);
    }

    fn update_stats(&mut self, stats: &TimelineStats) {
        self.stats = Some(stats.clone());
    }
}
