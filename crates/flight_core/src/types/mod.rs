//! Calendar, clock, and weekday types.
//!
//! This module provides:
//! - `date`: Type-safe calendar date with week arithmetic
//! - `time_of_day`: Minute-precision time of day with the broadcast-day floor and ceiling
//! - `weekday`: Explicit weekday selections iterated Monday first
//! - `error`: Structured error types for date and time construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `date`
//! - [`TimeOfDay`] from `time_of_day`
//! - [`WeekdaySet`] from `weekday`
//! - [`DateError`], [`TimeError`] from `error`

pub mod date;
pub mod error;
pub mod time_of_day;
pub mod weekday;

// Re-export commonly used types at module level
pub use date::Date;
pub use error::{DateError, TimeError};
pub use time_of_day::TimeOfDay;
pub use weekday::{weekday_code, WeekdaySet};
