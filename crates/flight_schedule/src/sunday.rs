//! Sunday paid-programming carve-out.
//!
//! Sunday 6:00-7:00 AM is sold as paid programming on every channel, so a
//! line booked for exactly that hour cannot air on Sunday.

use chrono::Weekday;
use flight_core::types::TimeOfDay;
use tracing::{debug, warn};

use crate::day_pattern::DayPattern;
use crate::time_range::TimeRange;

/// End of the Sunday paid-programming hour, in minutes since midnight.
const PAID_PROGRAMMING_END: u32 = 7 * 60;

/// Returns whether `range` is exactly the 06:00-07:00 paid-programming hour.
///
/// # Examples
///
/// ```
/// use flight_schedule::sunday::is_paid_programming_hour;
/// use flight_schedule::time_range::parse_time_range;
///
/// assert!(is_paid_programming_hour(&parse_time_range("6a-7a").range));
/// assert!(!is_paid_programming_hour(&parse_time_range("6a-8a").range));
/// ```
pub fn is_paid_programming_hour(range: &TimeRange) -> bool {
    range.start() == TimeOfDay::FLOOR && range.end().minutes_since_midnight() == PAID_PROGRAMMING_END
}

/// Removes Sunday from `pattern` when `range` is the paid-programming hour.
///
/// `M-Su` becomes `M-Sa` and `Sa-Su` becomes `Sa`. Every other combination
/// is returned unchanged, including a Sunday-only pattern, which has no
/// day left to keep. Applying the rule twice gives the same result as
/// applying it once.
///
/// # Examples
///
/// ```
/// use flight_schedule::day_pattern::DayPattern;
/// use flight_schedule::sunday::apply_sunday_rule;
/// use flight_schedule::time_range::parse_time_range;
/// use chrono::Weekday;
///
/// let early = parse_time_range("6:00a-7:00a").range;
/// assert_eq!(apply_sunday_rule(DayPattern::MonSun, &early), DayPattern::MonSat);
/// assert_eq!(apply_sunday_rule(DayPattern::SatSun, &early), DayPattern::Single(Weekday::Sat));
///
/// let evening = parse_time_range("7p-8p").range;
/// assert_eq!(apply_sunday_rule(DayPattern::MonSun, &evening), DayPattern::MonSun);
/// ```
pub fn apply_sunday_rule(pattern: DayPattern, range: &TimeRange) -> DayPattern {
    if !is_paid_programming_hour(range) || !pattern.includes(Weekday::Sun) {
        return pattern;
    }

    let adjusted = match pattern {
        DayPattern::MonSun => DayPattern::MonSat,
        DayPattern::SatSun => DayPattern::Single(Weekday::Sat),
        DayPattern::Single(_) => {
            warn!(%range, "Sunday-only line booked into paid programming, left unchanged");
            return pattern;
        }
        DayPattern::MonFri | DayPattern::MonSat => return pattern,
    };

    debug!(from = %pattern, to = %adjusted, %range, "removed Sunday for paid programming");
    adjusted
}
