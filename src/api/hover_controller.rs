use crate::core::{ScreenRect, ScreenSize};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{TimelineEngine, TimelineSurface, TooltipView, place_tooltip, tooltip_content};

impl<R: Renderer, S: TimelineSurface> TimelineEngine<R, S> {
    /// Shows the tooltip for a hovered marker.
    ///
    /// `marker_rect` and `screen` are in the same (screen) coordinate space;
    /// `tooltip_size` is the measured size of the tooltip box.
    pub fn marker_enter(
        &mut self,
        event_index: usize,
        marker_rect: ScreenRect,
        tooltip_size: ScreenSize,
        screen: ScreenSize,
    ) -> TimelineResult<()> {
        let event = self.catalog.events().get(event_index).ok_or_else(|| {
            TimelineError::InvalidData(format!("event index {event_index} out of range"))
        })?;
        let period = self
            .catalog
            .period_for_year(event.year)
            .map(|(_, period)| period);

        let view = TooltipView {
            event_index,
            content: tooltip_content(event, period),
            position: place_tooltip(marker_rect, tooltip_size, screen),
        };
        self.surface.show_tooltip(&view);
        Ok(())
    }

    pub fn marker_leave(&mut self) {
        self.surface.hide_tooltip();
    }
}
