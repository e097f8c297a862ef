//! Consolidation configuration error types.

use thiserror::Error;

/// Errors raised when validating a consolidation configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A date-window tolerance of a week or more would merge non-adjacent weeks.
    #[error("Grace window of {grace_days} days must be less than 7")]
    InvalidGraceWindow {
        /// The rejected tolerance in days.
        grace_days: u32,
    },
}
