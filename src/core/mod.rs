pub mod catalog;
pub mod color;
pub mod label_policy;
pub mod time_axis;
pub mod types;

pub use catalog::{
    Catalog, MAX_YEAR, MIN_YEAR, Period, PeriodButton, PeriodButtonGroup, PeriodGroup,
    TOTAL_YEARS, TimelineEvent,
};
pub use color::Rgb;
pub use label_policy::{
    RulerInterval, TickWindow, YearTick, YearTicks, format_span, format_year, format_zoom_info,
    ruler_interval, tick_interval, year_ticks,
};
pub use time_axis::{TimeAxis, x_to_year, year_to_x};
pub use types::{ScreenRect, ScreenSize, ViewTransform, Viewport};
