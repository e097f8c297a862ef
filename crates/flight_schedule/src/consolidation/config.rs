//! Consolidation configuration.

use super::error::ConfigError;

/// Days between the starts of two consecutive calendar weeks.
const DAYS_PER_WEEK: u32 = 7;

/// Rule deciding whether two week slots are consecutive.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::Adjacency;
///
/// assert_eq!(Adjacency::default(), Adjacency::Index);
/// let window = Adjacency::DateWindow { grace_days: 1 };
/// assert!(window.allows_gap(8));
/// assert!(!window.allows_gap(14));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum Adjacency {
    /// Week indices must differ by exactly one.
    #[default]
    Index,
    /// Week start dates must be `7 ± grace_days` days apart.
    DateWindow {
        /// Tolerance either side of seven days.
        grace_days: u32,
    },
}

impl Adjacency {
    /// Returns whether two week starts `gap_days` apart are consecutive
    /// under a date window. Always `false` for [`Adjacency::Index`].
    pub fn allows_gap(&self, gap_days: i64) -> bool {
        match self {
            Adjacency::Index => false,
            Adjacency::DateWindow { grace_days } => {
                let low = i64::from(DAYS_PER_WEEK.saturating_sub(*grace_days));
                let high = i64::from(DAYS_PER_WEEK.saturating_add(*grace_days));
                (low..=high).contains(&gap_days)
            }
        }
    }
}

/// Configuration for [`ScheduleConsolidator`](super::ScheduleConsolidator).
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::{Adjacency, ConsolidationConfig};
///
/// let config = ConsolidationConfig::new()
///     .with_adjacency(Adjacency::DateWindow { grace_days: 1 });
/// assert!(config.validate().is_ok());
///
/// let bad = ConsolidationConfig::new()
///     .with_adjacency(Adjacency::DateWindow { grace_days: 7 });
/// assert!(bad.validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsolidationConfig {
    /// How consecutive weeks are recognised.
    pub adjacency: Adjacency,
}

impl ConsolidationConfig {
    /// Creates the default configuration (index adjacency).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the adjacency rule.
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGraceWindow`] when a date-window tolerance
    /// reaches a full week, which would let a skipped week look adjacent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.adjacency {
            Adjacency::DateWindow { grace_days } if grace_days >= DAYS_PER_WEEK => {
                Err(ConfigError::InvalidGraceWindow { grace_days })
            }
            _ => Ok(()),
        }
    }
}
