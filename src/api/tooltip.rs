use serde::{Deserialize, Serialize};

use crate::core::{Period, ScreenRect, ScreenSize, TimelineEvent, format_year};

const FALLBACK_ICON: &str = "📍";
const UNKNOWN_PERIOD: &str = "Неизвестный период";
const MARKER_GAP_PX: f64 = 15.0;
const SCREEN_EDGE_PX: f64 = 10.0;

/// Text slots of the floating tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub icon: String,
    pub title: String,
    pub year_line: String,
    pub description: String,
}

/// Tooltip top-left corner in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub event_index: usize,
    pub content: TooltipContent,
    pub position: TooltipPosition,
}

#[must_use]
pub fn tooltip_content(event: &TimelineEvent, period: Option<&Period>) -> TooltipContent {
    let (icon, period_info) = match period {
        Some(period) => (period.icon.clone(), period.caption()),
        None => (FALLBACK_ICON.to_owned(), UNKNOWN_PERIOD.to_owned()),
    };
    TooltipContent {
        icon,
        title: event.title.clone(),
        year_line: format!("{} • {period_info}", format_year(event.year)),
        description: event.desc.clone(),
    }
}

/// Places the tooltip beside the hovered marker.
///
/// The side with more horizontal room wins (ties go right). The box is
/// centered on the marker vertically and then kept 10px inside the screen,
/// with the bottom edge taking precedence when the screen is too short.
#[must_use]
pub fn place_tooltip(marker: ScreenRect, tooltip: ScreenSize, screen: ScreenSize) -> TooltipPosition {
    let space_on_right = screen.width - marker.right();
    let space_on_left = marker.left;
    let left = if space_on_right >= space_on_left {
        marker.right() + MARKER_GAP_PX
    } else {
        marker.left - tooltip.width - MARKER_GAP_PX
    };

    let mut top = marker.center_y() - tooltip.height / 2.0;
    if top < SCREEN_EDGE_PX {
        top = SCREEN_EDGE_PX;
    }
    if top + tooltip.height > screen.height - SCREEN_EDGE_PX {
        top = screen.height - tooltip.height - SCREEN_EDGE_PX;
    }

    TooltipPosition { left, top }
}
