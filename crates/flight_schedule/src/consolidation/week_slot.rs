//! Calendar-week spot counts.

use flight_core::types::Date;

/// Days from a week's start to its last day.
pub(crate) const LAST_DAY_OFFSET: i64 = 6;

/// One calendar week of a line's flight.
///
/// Zero-spot ("dark") weeks are included so gaps in a flight stay visible.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::WeekSlot;
/// use flight_core::types::Date;
///
/// let slot = WeekSlot::new(0, Date::from_ymd(2025, 4, 28).unwrap(), 3);
/// assert_eq!(slot.last_day(), Date::from_ymd(2025, 5, 4).unwrap());
/// assert!(!slot.is_dark());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekSlot {
    /// Position of the week within the flight, starting at zero.
    pub week_index: u32,
    /// First day of the week.
    pub start_date: Date,
    /// Spots ordered for the week.
    pub spot_count: u32,
}

impl WeekSlot {
    /// Creates a week slot.
    pub fn new(week_index: u32, start_date: Date, spot_count: u32) -> Self {
        Self {
            week_index,
            start_date,
            spot_count,
        }
    }

    /// Returns whether the week has no spots.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.spot_count == 0
    }

    /// Returns the last day of the week (start + 6 days).
    #[inline]
    pub fn last_day(&self) -> Date {
        self.start_date.add_days(LAST_DAY_OFFSET)
    }
}

/// Lays `counts` out on a regular weekly grid starting at `first_week_start`.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::weekly_slots;
/// use flight_core::types::Date;
///
/// let slots = weekly_slots(Date::from_ymd(2025, 4, 28).unwrap(), &[3, 0, 2]);
/// assert_eq!(slots.len(), 3);
/// assert_eq!(slots[2].week_index, 2);
/// assert_eq!(slots[2].start_date, Date::from_ymd(2025, 5, 12).unwrap());
/// ```
pub fn weekly_slots(first_week_start: Date, counts: &[u32]) -> Vec<WeekSlot> {
    counts
        .iter()
        .zip(0u32..)
        .map(|(&spot_count, week_index)| {
            WeekSlot::new(
                week_index,
                first_week_start.add_weeks(i64::from(week_index)),
                spot_count,
            )
        })
        .collect()
}
