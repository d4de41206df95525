//! Zoom-dependent interval selection and year formatting.
//!
//! Two ladders are kept on purpose: the ruler legend and the axis ticks step
//! through different bucket boundaries, and unifying them would change what is
//! drawn at several zoom levels.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// `(visible_years threshold, interval, legend text)`; first row whose
/// threshold is exceeded wins.
const RULER_LADDER: [(f64, f64, &str); 9] = [
    (5.0e9, 1.0e9, "1 млрд лет"),
    (1.0e9, 5.0e8, "500 млн лет"),
    (1.0e8, 1.0e8, "100 млн лет"),
    (1.0e7, 1.0e7, "10 млн лет"),
    (1.0e6, 1.0e6, "1 млн лет"),
    (1.0e5, 1.0e5, "100 тыс. лет"),
    (1.0e4, 1.0e4, "10 тыс. лет"),
    (1.0e3, 1.0e3, "1000 лет"),
    (1.0e2, 1.0e2, "100 лет"),
];
const RULER_FALLBACK: (f64, &str) = (10.0, "10 лет");

/// `(visible_years threshold, tick interval)`.
const TICK_LADDER: [(f64, f64); 15] = [
    (5.0e9, 1.0e9),
    (1.0e9, 5.0e8),
    (5.0e8, 1.0e8),
    (1.0e8, 5.0e7),
    (5.0e7, 1.0e7),
    (1.0e7, 5.0e6),
    (1.0e6, 1.0e6),
    (1.0e5, 1.0e5),
    (1.0e4, 1.0e4),
    (5.0e3, 1.0e3),
    (1.0e3, 500.0),
    (500.0, 100.0),
    (100.0, 50.0),
    (50.0, 10.0),
    (20.0, 5.0),
];
const TICK_FALLBACK: f64 = 1.0;

/// Below this span every tick gets a label instead of every other one.
pub const LABEL_EVERY_TICK_BELOW_YEARS: f64 = 1_000.0;

/// Interval shown by the floating scale legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RulerInterval {
    pub interval_years: f64,
    pub label: &'static str,
}

#[must_use]
pub fn ruler_interval(visible_years: f64) -> RulerInterval {
    let (interval_years, label) = RULER_LADDER
        .iter()
        .find(|(threshold, _, _)| visible_years > *threshold)
        .map(|(_, interval, label)| (*interval, *label))
        .unwrap_or(RULER_FALLBACK);
    RulerInterval {
        interval_years,
        label,
    }
}

#[must_use]
pub fn tick_interval(visible_years: f64) -> f64 {
    TICK_LADDER
        .iter()
        .find(|(threshold, _)| visible_years > *threshold)
        .map_or(TICK_FALLBACK, |(_, interval)| *interval)
}

/// One axis tick that landed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearTick {
    pub year: f64,
    pub x: f64,
    pub labeled: bool,
}

/// Inputs for one tick generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickWindow {
    pub left_year: f64,
    pub right_year: f64,
    pub max_year: f64,
    pub visible_years: f64,
    pub canvas_width: f64,
    pub max_ticks: usize,
}

pub type YearTicks = SmallVec<[YearTick; 32]>;

/// Walks round multiples of the zoom-appropriate interval across the window.
///
/// Ticks outside `[0, canvas_width]` are skipped without counting toward
/// `max_ticks`. Every other counted tick is labeled unless the visible span is
/// below [`LABEL_EVERY_TICK_BELOW_YEARS`].
pub fn year_ticks(window: TickWindow, year_to_x: impl Fn(f64) -> f64) -> YearTicks {
    let mut ticks = YearTicks::new();
    let interval = tick_interval(window.visible_years);
    if !interval.is_finite() || interval <= 0.0 || window.max_ticks == 0 {
        return ticks;
    }
    if !window.left_year.is_finite() || !window.right_year.is_finite() {
        return ticks;
    }

    let start_year = (window.left_year / interval).ceil() * interval;
    let end_year = window.right_year.min(window.max_year);
    let label_all = window.visible_years < LABEL_EVERY_TICK_BELOW_YEARS;

    let mut step = 0.0_f64;
    loop {
        let year = start_year + step * interval;
        if year > end_year || ticks.len() >= window.max_ticks {
            break;
        }
        step += 1.0;

        let x = year_to_x(year);
        if !(0.0..=window.canvas_width).contains(&x) {
            continue;
        }
        ticks.push(YearTick {
            year,
            x,
            labeled: label_all || ticks.len() % 2 == 0,
        });
    }
    ticks
}

/// Formats a year for axis labels, markers and tooltips.
///
/// Negative years are expressed as "ago" at billion/million/thousand
/// magnitudes and as BCE below a thousand; non-negative years are CE.
#[must_use]
pub fn format_year(year: f64) -> String {
    let year = year + 0.0;
    if year < 0.0 {
        let abs_year = year.abs();
        if abs_year >= BILLION {
            return format!("{} млрд лет назад", to_fixed(abs_year / BILLION, 1));
        }
        if abs_year >= MILLION {
            return format!("{} млн лет назад", to_fixed(abs_year / MILLION, 1));
        }
        if abs_year >= THOUSAND {
            return format!("{} тыс. лет назад", to_fixed(abs_year / THOUSAND, 0));
        }
        return format!("{abs_year} до н.э.");
    }
    format!("{year} н.э.")
}

/// Human-scaled length of a year span, as shown in the stats readout.
#[must_use]
pub fn format_span(years: f64) -> String {
    let years = years.abs();
    if years >= BILLION {
        format!("{} млрд лет", to_fixed(years / BILLION, 1))
    } else if years >= MILLION {
        format!("{} млн лет", to_fixed(years / MILLION, 1))
    } else if years >= THOUSAND {
        format!("{} тыс. лет", to_fixed(years / THOUSAND, 1))
    } else {
        format!("{} лет", years.round())
    }
}

/// Zoom readout text for the visible span at the current scale.
#[must_use]
pub fn format_zoom_info(visible_years: f64) -> String {
    let amount = if visible_years > BILLION {
        format!("{} млрд лет", to_fixed(visible_years / BILLION, 1))
    } else if visible_years > MILLION {
        format!("{} млн лет", to_fixed(visible_years / MILLION, 1))
    } else if visible_years > THOUSAND {
        format!("{} тыс. лет", to_fixed(visible_years / THOUSAND, 0))
    } else {
        format!("{} лет", visible_years.round())
    };
    format!("На экране: {amount}")
}

/// Fixed-point text with halves rounded away from zero, so adjacent
/// half-step ticks (`-1500`, `-2500`, ...) never share a label.
fn to_fixed(value: f64, decimals: u8) -> String {
    let factor = 10_f64.powi(i32::from(decimals));
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.precision$}", precision = usize::from(decimals))
}
