//! One-call planning of raw order lines.
//!
//! [`LinePlanner`] runs the full normalisation pipeline for a line as it
//! arrives from a document parser: resolve days, parse times, apply the
//! Sunday carve-out, consolidate weeks and build entries. Anything a human
//! should double-check is reported as a [`PlanWarning`] rather than an error.
//!
//! # Examples
//!
//! ```
//! use flight_schedule::consolidation::weekly_slots;
//! use flight_schedule::day_pattern::DayPattern;
//! use flight_schedule::planner::{LinePlanner, PlanWarning, RawLine};
//! use flight_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 4, 28).unwrap();
//! let raw = RawLine::new("M-Su", "6:00a-7:00a", weekly_slots(start, &[7, 7]), start, start.add_days(13));
//!
//! let plan = LinePlanner::default().plan(&raw);
//! assert_eq!(plan.line.pattern, DayPattern::MonSat);
//! assert_eq!(plan.entries.len(), 1);
//! assert_eq!(plan.entries[0].daily_cap, 2);
//! assert!(plan.warnings.contains(&PlanWarning::SundayRemoved {
//!     from: DayPattern::MonSun,
//!     to: DayPattern::MonSat,
//! }));
//! ```

use flight_core::types::Date;
use std::fmt;
use tracing::{debug, warn};

use crate::consolidation::{ConsolidationConfig, ScheduleConsolidator, WeekSlot};
use crate::day_pattern::{resolve_day_pattern, DayPattern};
use crate::entry::{EntrySpec, ScheduleLine, SpotKind};
use crate::ros::{ros_block, Language};
use crate::sunday::apply_sunday_rule;
use crate::time_range::parse_time_range;

/// A line as extracted from an order document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLine {
    /// Weekday descriptor as written.
    pub days: String,
    /// Air-time text as written.
    pub time: String,
    /// One slot per calendar week of the flight.
    pub weeks: Vec<WeekSlot>,
    /// First day of the flight.
    pub flight_start: Date,
    /// Last day of the flight.
    pub flight_end: Date,
    /// Rate per spot.
    pub rate: f64,
    /// Spot length in seconds.
    pub duration_secs: u32,
    /// Paid or bonus.
    pub kind: SpotKind,
    /// Programming language, when known.
    pub language: Option<Language>,
    /// Free-text programme description.
    pub description: Option<String>,
}

impl RawLine {
    /// Creates a paid 30-second line with zero rate.
    pub fn new(
        days: impl Into<String>,
        time: impl Into<String>,
        weeks: Vec<WeekSlot>,
        flight_start: Date,
        flight_end: Date,
    ) -> Self {
        Self {
            days: days.into(),
            time: time.into(),
            weeks,
            flight_start,
            flight_end,
            rate: 0.0,
            duration_secs: 30,
            kind: SpotKind::Paid,
            language: None,
            description: None,
        }
    }

    /// Sets the rate per spot.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the spot length in seconds.
    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Sets the spot kind.
    pub fn with_kind(mut self, kind: SpotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the programming language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the programme description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Something in a planned line that deserves a second look.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PlanWarning {
    /// The time text could not be parsed; the full broadcast day was used.
    LowConfidenceTime {
        /// The time text as written.
        text: String,
    },
    /// No weekday was found in the day text; `M-Su` was used.
    UnrecognizedDays {
        /// The day text as written.
        text: String,
    },
    /// Sunday was dropped for paid programming.
    SundayRemoved {
        /// Pattern before the carve-out.
        from: DayPattern,
        /// Pattern after the carve-out.
        to: DayPattern,
    },
    /// The language's run-of-schedule block replaced blank day/time text.
    RosApplied {
        /// The language whose block was used.
        language: Language,
    },
    /// A week starts outside the flight dates.
    WeekOutsideFlight {
        /// Index of the offending week.
        week_index: u32,
    },
    /// Every week is dark, so no entry was produced.
    NothingScheduled,
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::LowConfidenceTime { text } => {
                write!(f, "could not parse time '{}', using 6:00a-11:59p", text)
            }
            PlanWarning::UnrecognizedDays { text } => {
                write!(f, "could not recognise days '{}', using M-Su", text)
            }
            PlanWarning::SundayRemoved { from, to } => {
                write!(f, "Sunday 6-7a is paid programming, {} changed to {}", from, to)
            }
            PlanWarning::RosApplied { language } => {
                write!(f, "no days/time given, using {} ROS block", language)
            }
            PlanWarning::WeekOutsideFlight { week_index } => {
                write!(f, "week {} starts outside the flight dates", week_index)
            }
            PlanWarning::NothingScheduled => f.write_str("no spots scheduled in any week"),
        }
    }
}

/// The planned form of one raw line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinePlan {
    /// The resolved line.
    pub line: ScheduleLine,
    /// One entry per consolidated run.
    pub entries: Vec<EntrySpec>,
    /// Review notes, in pipeline order.
    pub warnings: Vec<PlanWarning>,
}

impl LinePlan {
    /// Returns whether any input text fell back to a default.
    pub fn needs_confirmation(&self) -> bool {
        self.warnings.iter().any(|w| {
            matches!(
                w,
                PlanWarning::LowConfidenceTime { .. } | PlanWarning::UnrecognizedDays { .. }
            )
        })
    }
}

/// Runs the normalisation pipeline over raw lines.
#[derive(Clone, Debug, Default)]
pub struct LinePlanner {
    consolidator: ScheduleConsolidator,
}

impl LinePlanner {
    /// Creates a planner with the given consolidation settings.
    pub fn new(config: ConsolidationConfig) -> Self {
        Self {
            consolidator: ScheduleConsolidator::new(config),
        }
    }

    /// Returns the consolidation settings.
    pub fn config(&self) -> &ConsolidationConfig {
        self.consolidator.config()
    }

    /// Plans one line. Never fails.
    pub fn plan(&self, raw: &RawLine) -> LinePlan {
        let mut warnings = Vec::new();

        let (days_text, time_text) = match ros_fallback(raw) {
            Some(language) => {
                let block = ros_block(language);
                debug!(%language, days = block.days, time = block.time, "using ROS block");
                warnings.push(PlanWarning::RosApplied { language });
                (block.days, block.time)
            }
            None => (raw.days.as_str(), raw.time.as_str()),
        };

        let days = resolve_day_pattern(days_text);
        if !days.recognized {
            warnings.push(PlanWarning::UnrecognizedDays {
                text: days_text.to_string(),
            });
        }

        let time = parse_time_range(time_text);
        if time.is_low_confidence() {
            warnings.push(PlanWarning::LowConfidenceTime {
                text: time_text.to_string(),
            });
        }

        let pattern = apply_sunday_rule(days.pattern, &time.range);
        if pattern != days.pattern {
            warnings.push(PlanWarning::SundayRemoved {
                from: days.pattern,
                to: pattern,
            });
        }

        for slot in &raw.weeks {
            if slot.start_date < raw.flight_start.add_days(-6) || slot.start_date > raw.flight_end {
                warn!(
                    week_index = slot.week_index,
                    start_date = %slot.start_date,
                    "week starts outside the flight"
                );
                warnings.push(PlanWarning::WeekOutsideFlight {
                    week_index: slot.week_index,
                });
            }
        }

        let runs = self.consolidator.consolidate(&raw.weeks, raw.flight_end);
        if runs.is_empty() {
            warnings.push(PlanWarning::NothingScheduled);
        }

        let mut line = ScheduleLine::new(pattern, time.range, runs)
            .with_kind(raw.kind)
            .with_rate(raw.rate)
            .with_duration(raw.duration_secs);
        line.language = raw.language;
        line.description = raw.description.clone();

        let entries = line.entries();
        debug!(
            days = %line.pattern,
            time = %line.range,
            entries = entries.len(),
            warnings = warnings.len(),
            "planned line"
        );

        LinePlan {
            line,
            entries,
            warnings,
        }
    }

    /// Plans a batch of lines, preserving input order.
    #[cfg(feature = "parallel")]
    pub fn plan_all(&self, lines: &[RawLine]) -> Vec<LinePlan> {
        use rayon::prelude::*;

        lines.par_iter().map(|raw| self.plan(raw)).collect()
    }

    /// Plans a batch of lines, preserving input order.
    #[cfg(not(feature = "parallel"))]
    pub fn plan_all(&self, lines: &[RawLine]) -> Vec<LinePlan> {
        lines.iter().map(|raw| self.plan(raw)).collect()
    }
}

/// Returns the language whose ROS block should replace a bonus line's text.
fn ros_fallback(raw: &RawLine) -> Option<Language> {
    let blank = |text: &str| {
        let text = text.trim();
        text.is_empty() || text.eq_ignore_ascii_case("ros")
    };
    match (raw.kind, raw.language) {
        (SpotKind::Bonus, Some(language)) if blank(&raw.days) && blank(&raw.time) => Some(language),
        _ => None,
    }
}
