//! JSON order input.
//!
//! An order file carries the flight dates and one entry per line:
//!
//! ```json
//! {
//!   "flight_start": "2025-04-28",
//!   "flight_end": "2025-06-29",
//!   "lines": [
//!     { "days": "M-F", "time": "7-730p", "rate": 45.0, "duration": 30,
//!       "weekly_spots": [3, 3, 3, 5, 5, 5, 3, 3, 3] },
//!     { "bonus": true, "language": "Hmong",
//!       "weeks": [{ "start_date": "05/05/2025", "spots": 2 }] }
//!   ]
//! }
//! ```
//!
//! `weekly_spots` is laid out from the flight start in 7-day steps; `weeks`
//! gives each week's start date explicitly. Explicit weeks are indexed by
//! calendar week, so a week the file leaves out stays dark.

use flight_core::types::Date;
use flight_schedule::consolidation::{weekly_slots, WeekSlot};
use flight_schedule::entry::SpotKind;
use flight_schedule::planner::RawLine;
use flight_schedule::ros::Language;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// A whole insertion order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderInput {
    /// First day of the flight.
    pub flight_start: Date,
    /// Last day of the flight.
    pub flight_end: Date,
    /// Order lines.
    pub lines: Vec<LineInput>,
}

/// One order line as written in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineInput {
    /// Weekday descriptor.
    #[serde(default)]
    pub days: String,
    /// Air-time text.
    #[serde(default)]
    pub time: String,
    /// Rate per spot.
    #[serde(default)]
    pub rate: f64,
    /// Spot length in seconds.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Whether the line is bonus (no charge).
    #[serde(default)]
    pub bonus: bool,
    /// Programming language.
    #[serde(default)]
    pub language: Option<Language>,
    /// Programme description.
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit weeks.
    #[serde(default)]
    pub weeks: Vec<WeekInput>,
    /// Spot counts per week from the flight start.
    #[serde(default)]
    pub weekly_spots: Vec<u32>,
}

/// One explicit week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WeekInput {
    /// First day of the week.
    pub start_date: Date,
    /// Spots ordered for the week.
    pub spots: u32,
}

fn default_duration() -> u32 {
    30
}

impl OrderInput {
    /// Parse an order from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let order: Self = serde_json::from_str(content)?;
        order.validate()?;
        Ok(order)
    }

    /// Load an order from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the flight dates and each line's week source
    pub fn validate(&self) -> Result<()> {
        if self.flight_end < self.flight_start {
            return Err(CliError::input(format!(
                "flight end {} is before flight start {}",
                self.flight_end, self.flight_start
            )));
        }
        for (number, line) in self.lines.iter().enumerate() {
            if !line.weeks.is_empty() && !line.weekly_spots.is_empty() {
                return Err(CliError::input(format!(
                    "line {} gives both weeks and weekly_spots",
                    number + 1
                )));
            }
            let mut calendar_weeks: Vec<Date> =
                line.weeks.iter().map(|w| w.start_date.week_start()).collect();
            calendar_weeks.sort_unstable();
            if let Some(pair) = calendar_weeks.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(CliError::input(format!(
                    "line {} lists more than one week starting the week of {}",
                    number + 1,
                    pair[0]
                )));
            }
            if !line.rate.is_finite() || line.rate < 0.0 {
                return Err(CliError::input(format!(
                    "line {} has invalid rate {}",
                    number + 1,
                    line.rate
                )));
            }
        }
        Ok(())
    }

    /// Convert every line into the planner's input form
    pub fn to_raw_lines(&self) -> Vec<RawLine> {
        self.lines
            .iter()
            .map(|line| line.to_raw_line(self.flight_start, self.flight_end))
            .collect()
    }
}

impl LineInput {
    /// Returns the line's week slots in calendar order.
    ///
    /// Explicit weeks are indexed by calendar weeks since the earliest of the
    /// flight start and the first listed week, so weeks left out of the file
    /// show up as index gaps.
    pub fn week_slots(&self, flight_start: Date) -> Vec<WeekSlot> {
        if !self.weekly_spots.is_empty() {
            return weekly_slots(flight_start, &self.weekly_spots);
        }

        let base = self
            .weeks
            .iter()
            .map(|week| week.start_date)
            .fold(flight_start, std::cmp::min)
            .week_start();
        let mut slots: Vec<WeekSlot> = self
            .weeks
            .iter()
            .map(|week| {
                let offset = (week.start_date.week_start() - base) / 7;
                let index = u32::try_from(offset).unwrap_or(u32::MAX);
                WeekSlot::new(index, week.start_date, week.spots)
            })
            .collect();
        slots.sort_by_key(|slot| slot.start_date);
        slots
    }

    /// Convert into the planner's input form
    pub fn to_raw_line(&self, flight_start: Date, flight_end: Date) -> RawLine {
        let kind = if self.bonus {
            SpotKind::Bonus
        } else {
            SpotKind::Paid
        };
        let weeks = self.week_slots(flight_start);
        debug!(days = %self.days, time = %self.time, weeks = weeks.len(), "read order line");

        let mut raw = RawLine::new(
            self.days.as_str(),
            self.time.as_str(),
            weeks,
            flight_start,
            flight_end,
        )
        .with_rate(self.rate)
        .with_duration(self.duration)
        .with_kind(kind);
        raw.language = self.language;
        raw.description = self.description.clone();
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: &str = r#"{
        "flight_start": "2025-04-28",
        "flight_end": "06/29/2025",
        "lines": [
            { "days": "M-F", "time": "7-730p", "rate": 45.0,
              "weekly_spots": [3, 3, 3, 5, 5, 5, 3, 3, 3] },
            { "bonus": true, "language": "hmong", "duration": 15,
              "weeks": [
                { "start_date": "2025-05-05", "spots": 2 },
                { "start_date": "2025-05-12", "spots": 2 }
              ] }
        ]
    }"#;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_order() {
        let order = OrderInput::from_json(ORDER).unwrap();
        assert_eq!(order.flight_start, date(2025, 4, 28));
        assert_eq!(order.flight_end, date(2025, 6, 29));
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].duration, 30);
        assert_eq!(order.lines[1].language, Some(Language::Hmong));
    }

    #[test]
    fn test_weekly_spots_grid() {
        let order = OrderInput::from_json(ORDER).unwrap();
        let slots = order.lines[0].week_slots(order.flight_start);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[8].start_date, date(2025, 6, 23));
        assert_eq!(slots[3].spot_count, 5);
    }

    #[test]
    fn test_explicit_weeks() {
        let order = OrderInput::from_json(ORDER).unwrap();
        let slots = order.lines[1].week_slots(order.flight_start);
        assert_eq!(slots[0], WeekSlot::new(1, date(2025, 5, 5), 2));
        assert_eq!(slots[1], WeekSlot::new(2, date(2025, 5, 12), 2));
    }

    #[test]
    fn test_skipped_week_leaves_index_gap() {
        let json = r#"{ "flight_start": "2025-05-05", "flight_end": "2025-05-25", "lines": [
            { "weeks": [
                { "start_date": "2025-05-19", "spots": 2 },
                { "start_date": "2025-05-05", "spots": 2 }
            ] }
        ] }"#;
        let order = OrderInput::from_json(json).unwrap();
        let slots = order.lines[0].week_slots(order.flight_start);
        assert_eq!(slots[0], WeekSlot::new(0, date(2025, 5, 5), 2));
        assert_eq!(slots[1], WeekSlot::new(2, date(2025, 5, 19), 2));
    }

    #[test]
    fn test_mid_week_flight_start_indexes_by_calendar_week() {
        let json = r#"{ "flight_start": "2025-04-30", "flight_end": "2025-05-18", "lines": [
            { "weeks": [
                { "start_date": "2025-04-30", "spots": 1 },
                { "start_date": "2025-05-05", "spots": 1 },
                { "start_date": "2025-05-12", "spots": 1 }
            ] }
        ] }"#;
        let order = OrderInput::from_json(json).unwrap();
        let indices: Vec<u32> = order.lines[0]
            .week_slots(order.flight_start)
            .iter()
            .map(|slot| slot.week_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_week_before_flight_start_keeps_order() {
        let json = r#"{ "flight_start": "2025-05-05", "flight_end": "2025-05-18", "lines": [
            { "weeks": [
                { "start_date": "2025-05-05", "spots": 1 },
                { "start_date": "2025-04-28", "spots": 1 }
            ] }
        ] }"#;
        let order = OrderInput::from_json(json).unwrap();
        let slots = order.lines[0].week_slots(order.flight_start);
        assert_eq!(slots[0], WeekSlot::new(0, date(2025, 4, 28), 1));
        assert_eq!(slots[1], WeekSlot::new(1, date(2025, 5, 5), 1));
    }

    #[test]
    fn test_two_weeks_in_one_calendar_week_rejected() {
        let json = r#"{ "flight_start": "2025-05-05", "flight_end": "2025-05-18", "lines": [
            { "weeks": [
                { "start_date": "2025-05-05", "spots": 1 },
                { "start_date": "2025-05-07", "spots": 1 }
            ] }
        ] }"#;
        let err = OrderInput::from_json(json).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
        assert!(err.to_string().contains("week of 2025-05-05"));
    }

    #[test]
    fn test_raw_lines() {
        let order = OrderInput::from_json(ORDER).unwrap();
        let raw = order.to_raw_lines();
        assert_eq!(raw[0].kind, SpotKind::Paid);
        assert_eq!(raw[1].kind, SpotKind::Bonus);
        assert_eq!(raw[1].duration_secs, 15);
        assert_eq!(raw[1].flight_end, date(2025, 6, 29));
    }

    #[test]
    fn test_reversed_flight_rejected() {
        let json = r#"{ "flight_start": "2025-06-01", "flight_end": "2025-05-01", "lines": [] }"#;
        assert!(matches!(OrderInput::from_json(json), Err(CliError::Input(_))));
    }

    #[test]
    fn test_both_week_sources_rejected() {
        let json = r#"{ "flight_start": "2025-04-28", "flight_end": "2025-05-11", "lines": [
            { "weekly_spots": [1], "weeks": [{ "start_date": "2025-04-28", "spots": 1 }] }
        ] }"#;
        let err = OrderInput::from_json(json).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let json = r#"{ "flight_start": "2025-04-28", "flight_end": "2025-05-11", "lines": [
            { "rate": -5.0, "weekly_spots": [1] }
        ] }"#;
        assert!(matches!(OrderInput::from_json(json), Err(CliError::Input(_))));
    }

    #[test]
    fn test_bad_json_and_dates() {
        assert!(matches!(OrderInput::from_json("{"), Err(CliError::Json(_))));
        let json = r#"{ "flight_start": "someday", "flight_end": "2025-05-11", "lines": [] }"#;
        assert!(matches!(OrderInput::from_json(json), Err(CliError::Json(_))));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let json = r#"{ "flight_start": "2025-04-28", "flight_end": "2025-05-11", "lines": [
            { "language": "Klingon", "weekly_spots": [1] }
        ] }"#;
        assert!(matches!(OrderInput::from_json(json), Err(CliError::Json(_))));
    }
}
