//! Single-pass week consolidation.

use flight_core::types::Date;
use tracing::{debug, warn};

use super::config::{Adjacency, ConsolidationConfig};
use super::run::ConsolidationRun;
use super::week_slot::{WeekSlot, LAST_DAY_OFFSET};

/// Collapses a line's week series into the fewest schedulable runs.
///
/// # Examples
///
/// ```
/// use flight_schedule::consolidation::{weekly_slots, ScheduleConsolidator};
/// use flight_core::types::Date;
///
/// let start = Date::from_ymd(2025, 4, 28).unwrap();
/// let slots = weekly_slots(start, &[0, 0, 3, 3, 3, 0, 0, 0, 0]);
/// let runs = ScheduleConsolidator::default().consolidate(&slots, start.add_days(62));
///
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].start_date(), Date::from_ymd(2025, 5, 12).unwrap());
/// assert_eq!(runs[0].end_date(), Date::from_ymd(2025, 6, 1).unwrap());
/// assert_eq!(runs[0].total_spots(), 9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScheduleConsolidator {
    config: ConsolidationConfig,
}

/// The run being accumulated during the scan.
struct OpenRun<'a> {
    first: &'a WeekSlot,
    last: &'a WeekSlot,
    week_count: u32,
}

impl ScheduleConsolidator {
    /// Creates a consolidator with the given configuration.
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Consolidates `slots` into ordered, non-overlapping runs.
    ///
    /// Dark weeks close the open run. A week extends the open run only when
    /// its spot count matches and it is adjacent to the previous week under
    /// the configured [`Adjacency`]. Each run ends on the last day of its
    /// final week, capped at `flight_end` and at the day before the next
    /// week starts.
    ///
    /// Weeks starting after `flight_end` are not scheduled. Empty or
    /// all-dark input yields no runs.
    pub fn consolidate(&self, slots: &[WeekSlot], flight_end: Date) -> Vec<ConsolidationRun> {
        let mut runs = Vec::new();
        let mut open: Option<OpenRun<'_>> = None;

        for slot in slots {
            let after_flight = slot.start_date > flight_end;
            if slot.is_dark() || after_flight {
                if after_flight && !slot.is_dark() {
                    warn!(
                        week_index = slot.week_index,
                        start_date = %slot.start_date,
                        %flight_end,
                        "skipping week that starts after the flight end"
                    );
                }
                if let Some(run) = open.take() {
                    runs.push(close(run, Some(slot), flight_end));
                }
                continue;
            }

            open = match open.take() {
                Some(mut run)
                    if run.last.spot_count == slot.spot_count && self.adjacent(run.last, slot) =>
                {
                    run.last = slot;
                    run.week_count += 1;
                    Some(run)
                }
                previous => {
                    if let Some(run) = previous {
                        runs.push(close(run, Some(slot), flight_end));
                    }
                    Some(OpenRun {
                        first: slot,
                        last: slot,
                        week_count: 1,
                    })
                }
            };
        }

        if let Some(run) = open {
            runs.push(close(run, None, flight_end));
        }

        debug!(
            weeks = slots.len(),
            runs = runs.len(),
            %flight_end,
            "consolidated week slots"
        );
        runs
    }

    fn adjacent(&self, previous: &WeekSlot, next: &WeekSlot) -> bool {
        match self.config.adjacency {
            Adjacency::Index => previous.week_index.checked_add(1) == Some(next.week_index),
            window @ Adjacency::DateWindow { .. } => {
                window.allows_gap(next.start_date - previous.start_date)
            }
        }
    }
}

/// Ends `run` on the last day of its final week, no later than the flight
/// end or the day before `next` starts. Never ends before the run starts.
fn close(run: OpenRun<'_>, next: Option<&WeekSlot>, flight_end: Date) -> ConsolidationRun {
    let start_date = run.first.start_date;
    let mut end_date = run.last.start_date.add_days(LAST_DAY_OFFSET).min(flight_end);
    if let Some(next) = next.filter(|next| next.start_date > run.last.start_date) {
        end_date = end_date.min(next.start_date.add_days(-1));
    }
    if end_date < start_date {
        debug!(
            %start_date,
            %end_date,
            week_index = run.first.week_index,
            "run weeks out of calendar order"
        );
        end_date = start_date;
    }
    ConsolidationRun::new(
        run.first.week_index,
        start_date,
        end_date,
        run.first.spot_count,
        run.week_count,
    )
}

/// Consolidates `slots` with the default configuration.
pub fn consolidate_weeks(slots: &[WeekSlot], flight_end: Date) -> Vec<ConsolidationRun> {
    ScheduleConsolidator::default().consolidate(slots, flight_end)
}
