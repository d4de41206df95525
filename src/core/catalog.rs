use serde::{Deserialize, Serialize};

use crate::core::Rgb;
use crate::error::{TimelineError, TimelineResult};

/// Earliest navigable year (the Big Bang, 13.8 billion years ago).
pub const MIN_YEAR: f64 = -13_800_000_000.0;
/// Latest navigable year.
pub const MAX_YEAR: f64 = 2024.0;
pub const TOTAL_YEARS: f64 = MAX_YEAR - MIN_YEAR;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../assets/catalog.json");

/// Named time range used for background banding and event categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: f64,
    pub end: f64,
    pub name: String,
    pub icon: String,
    pub color: Rgb,
}

impl Period {
    #[must_use]
    pub fn contains(&self, year: f64) -> bool {
        year >= self.start && year <= self.end
    }

    #[must_use]
    pub fn intersects(&self, left_year: f64, right_year: f64) -> bool {
        !(self.end < left_year || self.start > right_year)
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Button / tooltip caption: `"{icon} {name}"`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Point-in-time record rendered as a hoverable marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: f64,
    pub title: String,
    pub desc: String,
}

/// Contiguous slice `[first, end)` of the period list shown under one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodGroup {
    pub title: String,
    pub first: usize,
    pub end: usize,
}

/// Styling and target for one jump-to-period button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodButton {
    pub period_index: usize,
    pub label: String,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
    pub text_color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodButtonGroup {
    pub title: String,
    pub buttons: Vec<PeriodButton>,
}

/// Read-only period/event source.
///
/// Periods are ordered by `start`; events carry no ordering guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogRepr")]
pub struct Catalog {
    periods: Vec<Period>,
    events: Vec<TimelineEvent>,
    groups: Vec<PeriodGroup>,
}

/// Unchecked wire shape; every deserialized `Catalog` passes through
/// `Catalog::new`.
#[derive(Deserialize)]
struct CatalogRepr {
    periods: Vec<Period>,
    events: Vec<TimelineEvent>,
    #[serde(default)]
    groups: Vec<PeriodGroup>,
}

impl TryFrom<CatalogRepr> for Catalog {
    type Error = TimelineError;

    fn try_from(repr: CatalogRepr) -> Result<Self, Self::Error> {
        Self::new(repr.periods, repr.events, repr.groups)
    }
}

impl Catalog {
    pub fn new(
        periods: Vec<Period>,
        events: Vec<TimelineEvent>,
        groups: Vec<PeriodGroup>,
    ) -> TimelineResult<Self> {
        let catalog = Self {
            periods,
            events,
            groups,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads the catalog bundled with the crate.
    pub fn builtin() -> TimelineResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input).map_err(|err| {
            TimelineError::InvalidCatalog(format!("failed to parse catalog json: {err}"))
        })
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let mut previous_start = f64::NEG_INFINITY;
        for (index, period) in self.periods.iter().enumerate() {
            if !period.start.is_finite() || !period.end.is_finite() {
                return Err(TimelineError::InvalidCatalog(format!(
                    "period #{index} `{}` has non-finite bounds",
                    period.name
                )));
            }
            if period.start > period.end {
                return Err(TimelineError::InvalidCatalog(format!(
                    "period #{index} `{}` starts after it ends",
                    period.name
                )));
            }
            if period.start < previous_start {
                return Err(TimelineError::InvalidCatalog(format!(
                    "period #{index} `{}` is out of order",
                    period.name
                )));
            }
            if period.name.trim().is_empty() {
                return Err(TimelineError::InvalidCatalog(format!(
                    "period #{index} has an empty name"
                )));
            }
            previous_start = period.start;
        }

        for (index, event) in self.events.iter().enumerate() {
            if !event.year.is_finite() {
                return Err(TimelineError::InvalidCatalog(format!(
                    "event #{index} `{}` has a non-finite year",
                    event.title
                )));
            }
            if event.title.trim().is_empty() {
                return Err(TimelineError::InvalidCatalog(format!(
                    "event #{index} has an empty title"
                )));
            }
        }

        for group in &self.groups {
            if group.first > group.end || group.end > self.periods.len() {
                return Err(TimelineError::InvalidCatalog(format!(
                    "group `{}` range {}..{} is outside {} periods",
                    group.title,
                    group.first,
                    group.end,
                    self.periods.len()
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    #[must_use]
    pub fn groups(&self) -> &[PeriodGroup] {
        &self.groups
    }

    /// First period whose closed range contains `year`.
    #[must_use]
    pub fn period_for_year(&self, year: f64) -> Option<(usize, &Period)> {
        self.periods
            .iter()
            .enumerate()
            .find(|(_, period)| period.contains(year))
    }

    #[must_use]
    pub fn period_buttons(&self) -> Vec<PeriodButtonGroup> {
        self.groups
            .iter()
            .map(|group| PeriodButtonGroup {
                title: group.title.clone(),
                buttons: (group.first..group.end)
                    .filter_map(|index| {
                        let period = self.periods.get(index)?;
                        Some(PeriodButton {
                            period_index: index,
                            label: period.caption(),
                            gradient_start: period.color,
                            gradient_end: period.color.adjusted(30),
                            text_color: period.color.contrast_text(),
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, MAX_YEAR, MIN_YEAR, Period, PeriodGroup, TimelineEvent};
    use crate::core::Rgb;

    fn period(start: f64, end: f64, name: &str) -> Period {
        Period {
            start,
            end,
            name: name.to_owned(),
            icon: "*".to_owned(),
            color: Rgb::new(10, 20, 30),
        }
    }

    #[test]
    fn builtin_catalog_loads_and_spans_domain() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.periods().len(), 27);
        assert_eq!(catalog.periods()[0].start, MIN_YEAR);
        assert_eq!(catalog.periods().last().unwrap().end, MAX_YEAR);
        assert_eq!(catalog.groups().len(), 5);
        assert!(!catalog.events().is_empty());
    }

    #[test]
    fn inverted_period_is_rejected() {
        let err = Catalog::new(vec![period(10.0, 0.0, "bad")], Vec::new(), Vec::new());
        assert!(err.is_err());
    }

    #[test]
    fn unordered_periods_are_rejected() {
        let err = Catalog::new(
            vec![period(10.0, 20.0, "b"), period(0.0, 5.0, "a")],
            Vec::new(),
            Vec::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn group_past_period_list_is_rejected() {
        let err = Catalog::new(
            vec![period(0.0, 5.0, "a")],
            Vec::new(),
            vec![PeriodGroup {
                title: "g".to_owned(),
                first: 0,
                end: 2,
            }],
        );
        assert!(err.is_err());
    }

    #[test]
    fn non_finite_event_year_is_rejected() {
        let err = Catalog::new(
            Vec::new(),
            vec![TimelineEvent {
                year: f64::NAN,
                title: "x".to_owned(),
                desc: String::new(),
            }],
            Vec::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn period_lookup_returns_first_overlapping_match() {
        let catalog = Catalog::new(
            vec![period(0.0, 10.0, "a"), period(10.0, 20.0, "b")],
            Vec::new(),
            Vec::new(),
        )
        .expect("catalog");
        assert_eq!(catalog.period_for_year(10.0).map(|(i, _)| i), Some(0));
        assert_eq!(catalog.period_for_year(15.0).map(|(i, _)| i), Some(1));
        assert!(catalog.period_for_year(25.0).is_none());
    }

    #[test]
    fn direct_deserialization_runs_validation() {
        let json = r##"{
            "periods": [
                { "start": 0, "end": 5, "name": "a", "icon": "*", "color": "#0a141e" }
            ],
            "events": [],
            "groups": [ { "title": "g", "first": 0, "end": 2 } ]
        }"##;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
        assert!(Catalog::from_json_str(json).is_err());
    }

    #[test]
    fn period_buttons_follow_groups() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let groups = catalog.period_buttons();
        let total: usize = groups.iter().map(|group| group.buttons.len()).sum();
        assert_eq!(total, 27);
        let first = &groups[0].buttons[0];
        assert_eq!(first.period_index, 0);
        assert_eq!(first.gradient_end, first.gradient_start.adjusted(30));
    }
}
