//! # flight_core: Calendar Foundation for Flight Schedule Normalisation
//!
//! ## Layer 1 (Foundation) Role
//!
//! flight_core serves as the bottom layer of the workspace, providing:
//! - Calendar dates: `Date` (`types::date`)
//! - Minute-precision times of day with broadcast-day bounds: `TimeOfDay` (`types::time_of_day`)
//! - Explicit weekday selections: `WeekdaySet` (`types::weekday`)
//! - Error types: `DateError`, `TimeError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other flight_* crates, with minimal external dependencies:
//! - chrono: Date and time arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use flight_core::types::{Date, TimeOfDay, WeekdaySet};
//! use chrono::Weekday;
//!
//! // Date operations
//! let week = Date::from_ymd(2025, 4, 28).unwrap();
//! assert_eq!(week.add_days(6), Date::from_ymd(2025, 5, 4).unwrap());
//!
//! // Broadcast-day bounds
//! assert_eq!(TimeOfDay::FLOOR.to_string(), "06:00");
//! assert_eq!(TimeOfDay::CEILING.to_string(), "23:59");
//!
//! // Weekday selections
//! let weekend: WeekdaySet = [Weekday::Sat, Weekday::Sun].into_iter().collect();
//! assert_eq!(weekend.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, TimeOfDay, WeekdaySet

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
