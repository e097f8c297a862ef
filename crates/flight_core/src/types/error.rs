//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `TimeError`: Errors from time-of-day construction and parsing

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use flight_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Time-of-day errors.
///
/// # Variants
/// - `InvalidTime`: Hour or minute outside the 24-hour clock
/// - `ParseError`: Failed to parse a `HH:MM` string
///
/// # Examples
/// ```
/// use flight_core::types::TimeError;
///
/// let err = TimeError::InvalidTime { hour: 25, minute: 0 };
/// assert_eq!(format!("{}", err), "Invalid time: 25:00");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Hour or minute outside the 24-hour clock.
    #[error("Invalid time: {hour}:{minute:02}")]
    InvalidTime {
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
    },

    /// Failed to parse time string.
    #[error("Time parse error: {0}")]
    ParseError(String),
}
