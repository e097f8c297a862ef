//! Consolidated runs of identical weeks.

use flight_core::types::Date;

use super::week_slot::WeekSlot;

/// A maximal span of contiguous weeks sharing one spot count.
///
/// `total_spots` always equals `spots_per_week * week_count`.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::ConsolidationRun;
/// use flight_core::types::Date;
///
/// let start = Date::from_ymd(2025, 4, 28).unwrap();
/// let run = ConsolidationRun::new(0, start, start.add_days(20), 3, 3);
/// assert_eq!(run.total_spots(), 9);
/// assert!(run.covers_week(2));
/// assert!(!run.covers_week(3));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConsolidationRun {
    first_week: u32,
    start_date: Date,
    end_date: Date,
    spots_per_week: u32,
    week_count: u32,
    total_spots: u32,
}

impl ConsolidationRun {
    /// Creates a run, deriving the total from the weekly count.
    pub fn new(
        first_week: u32,
        start_date: Date,
        end_date: Date,
        spots_per_week: u32,
        week_count: u32,
    ) -> Self {
        Self {
            first_week,
            start_date,
            end_date,
            spots_per_week,
            week_count,
            total_spots: spots_per_week.saturating_mul(week_count),
        }
    }

    /// Index of the run's first week.
    #[inline]
    pub fn first_week(&self) -> u32 {
        self.first_week
    }

    /// First day of the run.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of the run, never after the flight end.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Spots in each week of the run.
    #[inline]
    pub fn spots_per_week(&self) -> u32 {
        self.spots_per_week
    }

    /// Number of weeks merged into the run.
    #[inline]
    pub fn week_count(&self) -> u32 {
        self.week_count
    }

    /// Spots across the whole run.
    #[inline]
    pub fn total_spots(&self) -> u32 {
        self.total_spots
    }

    /// Returns whether the week with `week_index` lies inside the run.
    #[inline]
    pub fn covers_week(&self, week_index: u32) -> bool {
        week_index >= self.first_week && week_index - self.first_week < self.week_count
    }

    /// Expands the run back into its weeks on a regular weekly grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_schedule::consolidation::ConsolidationRun;
    /// use flight_core::types::Date;
    ///
    /// let start = Date::from_ymd(2025, 5, 12).unwrap();
    /// let run = ConsolidationRun::new(2, start, start.add_days(13), 4, 2);
    /// let weeks = run.weeks();
    /// assert_eq!(weeks.len(), 2);
    /// assert_eq!(weeks[1].week_index, 3);
    /// assert_eq!(weeks[1].start_date, Date::from_ymd(2025, 5, 19).unwrap());
    /// assert_eq!(weeks[1].spot_count, 4);
    /// ```
    pub fn weeks(&self) -> Vec<WeekSlot> {
        (0..self.week_count)
            .map(|offset| {
                WeekSlot::new(
                    self.first_week + offset,
                    self.start_date.add_weeks(i64::from(offset)),
                    self.spots_per_week,
                )
            })
            .collect()
    }
}

/// Reconstructs per-week spot counts for `slots` from consolidated `runs`.
///
/// Weeks no run covers get zero, so consolidating a slot sequence and
/// expanding it again reproduces the original counts.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::{expand_runs, weekly_slots, consolidate_weeks};
/// use flight_core::types::Date;
///
/// let start = Date::from_ymd(2025, 4, 28).unwrap();
/// let slots = weekly_slots(start, &[0, 3, 3, 0, 5]);
/// let runs = consolidate_weeks(&slots, start.add_days(34));
/// assert_eq!(expand_runs(&runs, &slots), vec![0, 3, 3, 0, 5]);
/// ```
pub fn expand_runs(runs: &[ConsolidationRun], slots: &[WeekSlot]) -> Vec<u32> {
    slots
        .iter()
        .map(|slot| {
            runs.iter()
                .find(|run| run.covers_week(slot.week_index))
                .map_or(0, ConsolidationRun::spots_per_week)
        })
        .collect()
}
