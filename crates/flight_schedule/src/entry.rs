//! Downstream entry construction.
//!
//! A [`ScheduleLine`] is one resolved order line: its canonical days and
//! times, pricing, and consolidated runs. Each run becomes one [`EntrySpec`],
//! the unit the traffic system books.

use flight_core::types::{Date, TimeOfDay, WeekdaySet};
use std::fmt;

use crate::consolidation::ConsolidationRun;
use crate::daily_cap::run_daily_cap;
use crate::day_pattern::DayPattern;
use crate::ros::Language;
use crate::time_range::TimeRange;

/// Whether spots are sold or given as a bonus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpotKind {
    /// Sold at the line rate.
    #[default]
    Paid,
    /// No-charge spots; rate is always zero.
    Bonus,
}

impl fmt::Display for SpotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotKind::Paid => f.write_str("paid"),
            SpotKind::Bonus => f.write_str("bonus"),
        }
    }
}

/// One resolved order line.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::{consolidate_weeks, weekly_slots};
/// use flight_schedule::day_pattern::DayPattern;
/// use flight_schedule::entry::ScheduleLine;
/// use flight_schedule::time_range::parse_time_range;
/// use flight_core::types::Date;
///
/// let start = Date::from_ymd(2025, 4, 28).unwrap();
/// let runs = consolidate_weeks(&weekly_slots(start, &[10, 10, 5]), start.add_days(20));
/// let line = ScheduleLine::new(DayPattern::MonFri, parse_time_range("7p-8p").range, runs)
///     .with_rate(25.0)
///     .with_duration(30);
///
/// let entries = line.entries();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].daily_cap, 2);
/// assert_eq!(line.total_spots(), 25);
/// assert_eq!(entries[0].duration_timecode(), "00:00:30:00");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleLine {
    /// Canonical days.
    pub pattern: DayPattern,
    /// Canonical air times.
    pub range: TimeRange,
    /// Rate per spot.
    pub rate: f64,
    /// Spot length in seconds.
    pub duration_secs: u32,
    /// Paid or bonus.
    pub kind: SpotKind,
    /// Consolidated runs, in flight order.
    pub runs: Vec<ConsolidationRun>,
    /// Free-text programme description.
    pub description: Option<String>,
    /// Programming language, when known.
    pub language: Option<Language>,
}

impl ScheduleLine {
    /// Creates a paid line with zero rate and a 30-second spot length.
    pub fn new(pattern: DayPattern, range: TimeRange, runs: Vec<ConsolidationRun>) -> Self {
        Self {
            pattern,
            range,
            rate: 0.0,
            duration_secs: 30,
            kind: SpotKind::Paid,
            runs,
            description: None,
            language: None,
        }
    }

    /// Sets the rate per spot. Ignored for bonus lines.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = match self.kind {
            SpotKind::Paid => rate,
            SpotKind::Bonus => 0.0,
        };
        self
    }

    /// Sets the spot length in seconds.
    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Sets the spot kind; bonus lines drop their rate.
    pub fn with_kind(mut self, kind: SpotKind) -> Self {
        self.kind = kind;
        if kind == SpotKind::Bonus {
            self.rate = 0.0;
        }
        self
    }

    /// Sets the programme description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the programming language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Total spots across all runs.
    pub fn total_spots(&self) -> u32 {
        self.runs.iter().map(ConsolidationRun::total_spots).sum()
    }

    /// Total cost of the line (`rate × total_spots`).
    pub fn gross_amount(&self) -> f64 {
        self.rate * f64::from(self.total_spots())
    }

    /// Builds one entry per run.
    pub fn entries(&self) -> Vec<EntrySpec> {
        self.runs
            .iter()
            .map(|run| EntrySpec {
                start_date: run.start_date(),
                end_date: run.end_date(),
                pattern: self.pattern,
                weekdays: self.pattern.weekdays(),
                start_time: self.range.start(),
                end_time: self.range.end(),
                total_spots: run.total_spots(),
                spots_per_week: run.spots_per_week(),
                daily_cap: run_daily_cap(run, self.pattern),
                rate: self.rate,
                duration_secs: self.duration_secs,
                kind: self.kind,
                description: self.description.clone(),
            })
            .collect()
    }
}

/// One entry as booked downstream.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntrySpec {
    /// First air date.
    pub start_date: Date,
    /// Last air date.
    pub end_date: Date,
    /// Canonical days.
    pub pattern: DayPattern,
    /// Weekday checkboxes.
    pub weekdays: WeekdaySet,
    /// Earliest air time.
    pub start_time: TimeOfDay,
    /// Latest air time.
    pub end_time: TimeOfDay,
    /// Spots across the entry.
    pub total_spots: u32,
    /// Spots in each week.
    pub spots_per_week: u32,
    /// Most spots on any one day.
    pub daily_cap: u32,
    /// Rate per spot.
    pub rate: f64,
    /// Spot length in seconds.
    pub duration_secs: u32,
    /// Paid or bonus.
    pub kind: SpotKind,
    /// Free-text programme description.
    pub description: Option<String>,
}

impl EntrySpec {
    /// Formats the spot length as an `HH:MM:SS:FF` timecode.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_schedule::entry::EntrySpec;
    ///
    /// assert_eq!(EntrySpec::timecode(30), "00:00:30:00");
    /// assert_eq!(EntrySpec::timecode(60), "00:01:00:00");
    /// assert_eq!(EntrySpec::timecode(3661), "01:01:01:00");
    /// ```
    pub fn timecode(seconds: u32) -> String {
        format!(
            "{:02}:{:02}:{:02}:00",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }

    /// Returns the entry's spot length as a timecode.
    pub fn duration_timecode(&self) -> String {
        Self::timecode(self.duration_secs)
    }

    /// Total cost of the entry (`rate × total_spots`).
    pub fn gross_amount(&self) -> f64 {
        self.rate * f64::from(self.total_spots)
    }

    /// Returns whether the entry carries bonus spots.
    #[inline]
    pub fn is_bonus(&self) -> bool {
        self.kind == SpotKind::Bonus
    }
}
