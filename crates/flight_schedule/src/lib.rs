//! # flight_schedule: Schedule Normalisation and Consolidation Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! flight_schedule turns the weekday/time descriptors and weekly spot counts
//! found on advertising insertion orders into the minimal set of date-range
//! entries a traffic system will accept:
//! - Air-time parsing onto the 06:00-23:59 broadcast day (`time_range`)
//! - Weekday descriptor resolution to canonical spans (`day_pattern`)
//! - Sunday 6-7a paid-programming carve-out (`sunday`)
//! - Weekly spot-count consolidation into runs (`consolidation`)
//! - Per-day spot ceilings (`daily_cap`)
//! - Run-of-schedule blocks for bonus lines (`ros`)
//! - Downstream entry construction (`entry`)
//! - The composed per-line pipeline (`planner`)
//!
//! Every operation is pure and total: malformed text degrades to a
//! conservative default that is flagged for confirmation, never to an error.
//!
//! ## Usage Examples
//!
//! ```rust
//! use flight_schedule::prelude::*;
//! use flight_core::types::Date;
//!
//! // Normalise the descriptors
//! let days = resolve_day_pattern("M-Su");
//! let time = parse_time_range("6:00a-7:00a");
//! let pattern = apply_sunday_rule(days.pattern, &time.range);
//! assert_eq!(pattern, DayPattern::MonSat);
//!
//! // Consolidate the weeks
//! let start = Date::from_ymd(2025, 4, 28).unwrap();
//! let slots = weekly_slots(start, &[3, 3, 3, 5, 5, 5, 3, 3, 3]);
//! let runs = consolidate_weeks(&slots, start.add_days(62));
//! assert_eq!(runs.len(), 3);
//!
//! // Cap each day
//! assert_eq!(daily_cap(runs[1].spots_per_week(), pattern.active_days()), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Plan batches of lines on the rayon thread pool
//! - `serde` (default): Enable serialisation for engine types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod consolidation;
pub mod daily_cap;
pub mod day_pattern;
pub mod entry;
pub mod planner;
pub mod ros;
pub mod sunday;
pub mod time_range;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::consolidation::{
        consolidate_weeks, expand_runs, weekly_slots, Adjacency, ConfigError, ConsolidationConfig,
        ConsolidationRun, ScheduleConsolidator, WeekSlot,
    };
    pub use crate::daily_cap::{daily_cap, run_daily_cap};
    pub use crate::day_pattern::{resolve_day_pattern, DayPattern, ResolvedDays};
    pub use crate::entry::{EntrySpec, ScheduleLine, SpotKind};
    pub use crate::planner::{LinePlan, LinePlanner, PlanWarning, RawLine};
    pub use crate::ros::{is_ros, ros_block, Language, RosBlock, UnknownLanguage};
    pub use crate::sunday::{apply_sunday_rule, is_paid_programming_hour};
    pub use crate::time_range::{parse_time_range, ParseConfidence, ParsedTimeRange, TimeRange};
}
