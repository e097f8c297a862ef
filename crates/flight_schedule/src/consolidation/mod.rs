//! Weekly spot-count consolidation.
//!
//! This module provides:
//! - [`WeekSlot`]: One calendar week of a line's flight and its spot count
//! - [`ConsolidationRun`]: A contiguous span of weeks sharing one spot count
//! - [`ScheduleConsolidator`]: Collapses a week series into the fewest runs
//! - [`ConsolidationConfig`] / [`Adjacency`]: What counts as "next week"
//!
//! # Examples
//!
//! ```
//! use flight_schedule::consolidation::{weekly_slots, ScheduleConsolidator};
//! use flight_core::types::Date;
//!
//! let flight_start = Date::from_ymd(2025, 4, 28).unwrap();
//! let flight_end = Date::from_ymd(2025, 6, 29).unwrap();
//! let slots = weekly_slots(flight_start, &[3, 3, 3, 5, 5, 5, 3, 3, 3]);
//!
//! let runs = ScheduleConsolidator::default().consolidate(&slots, flight_end);
//! let totals: Vec<u32> = runs.iter().map(|run| run.total_spots()).collect();
//! assert_eq!(totals, vec![9, 15, 9]);
//! ```

mod config;
mod consolidator;
mod error;
mod run;
mod week_slot;

pub use config::{Adjacency, ConsolidationConfig};
pub use consolidator::{consolidate_weeks, ScheduleConsolidator};
pub use error::ConfigError;
pub use run::{expand_runs, ConsolidationRun};
pub use week_slot::{weekly_slots, WeekSlot};
