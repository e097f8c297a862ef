//! Per-day spot ceilings.

use crate::consolidation::ConsolidationRun;
use crate::day_pattern::DayPattern;

/// Returns the most spots a line may air on any one active day.
///
/// `max(1, ceil(spots_per_week / active_days))`. An active-day count of
/// zero is treated as one. The cap is advisory: the traffic system uses it
/// to spread a week's spots, it does not change the weekly total.
///
/// # Examples
///
/// ```
/// use flight_schedule::daily_cap::daily_cap;
///
/// assert_eq!(daily_cap(10, 5), 2);
/// assert_eq!(daily_cap(3, 7), 1);
/// assert_eq!(daily_cap(14, 7), 2);
/// assert_eq!(daily_cap(0, 5), 1);
/// assert_eq!(daily_cap(4, 0), 4);
/// ```
#[inline]
pub fn daily_cap(spots_per_week: u32, active_days: u32) -> u32 {
    spots_per_week.div_ceil(active_days.max(1)).max(1)
}

/// Returns the daily cap for one run aired on `pattern`.
#[inline]
pub fn run_daily_cap(run: &ConsolidationRun, pattern: DayPattern) -> u32 {
    daily_cap(run.spots_per_week(), pattern.active_days())
}
