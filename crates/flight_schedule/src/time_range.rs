//! Time-range parsing for order-sheet air times.
//!
//! Order sheets write air times in dozens of shapes: `6:00a-7:00a`,
//! `7-730p`, `11-130p`, `1130-12p`, `6a-11:59p`, `18:00-20:00`. This module
//! turns any of them into one canonical [`TimeRange`] inside the broadcast
//! day. Parsing never fails: text that cannot be understood yields the
//! full-day range flagged [`ParseConfidence::Fallback`].
//!
//! # Examples
//!
//! ```
//! use flight_schedule::time_range::{parse_time_range, ParseConfidence};
//!
//! let parsed = parse_time_range("11-130p");
//! assert_eq!(parsed.range.to_string(), "11:00-13:30");
//! assert_eq!(parsed.confidence, ParseConfidence::Parsed);
//!
//! let unknown = parse_time_range("see attached");
//! assert_eq!(unknown.range.to_string(), "06:00-23:59");
//! assert!(unknown.is_low_confidence());
//! ```

use flight_core::types::TimeOfDay;
use std::fmt;
use tracing::{debug, warn};

/// Separators joining sub-ranges whose union is still in force.
const UNION_SEPARATORS: [char; 2] = [';', '/'];

/// Minutes in a full calendar day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// A start/end pair of air times within one broadcast day.
///
/// Invariant: `06:00 <= start <= end <= 23:59`. The constructor clamps its
/// inputs to hold it, so no `TimeRange` ever spans midnight.
///
/// # Examples
///
/// ```
/// use flight_schedule::time_range::TimeRange;
/// use flight_core::types::TimeOfDay;
///
/// let range = TimeRange::new(
///     TimeOfDay::from_hm(19, 0).unwrap(),
///     TimeOfDay::from_hm(19, 30).unwrap(),
/// );
/// assert_eq!(range.to_string(), "19:00-19:30");
/// assert_eq!(range.to_meridiem_string(), "7:00p-7:30p");
/// assert_eq!(range.duration_minutes(), 30);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    /// The whole broadcast day, 06:00-23:59.
    pub const FULL_DAY: TimeRange = TimeRange {
        start: TimeOfDay::FLOOR,
        end: TimeOfDay::CEILING,
    };

    /// Creates a range, raising `start` to the floor and `end` to at least `start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        let start = start.at_least_floor();
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Returns the start time.
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the end time.
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns whether this is the full broadcast day.
    #[inline]
    pub fn is_full_day(&self) -> bool {
        *self == Self::FULL_DAY
    }

    /// Returns the length of the range in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Returns whether `time` falls inside the range (inclusive).
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }

    /// Formats the range in the compact 12-hour form used on order sheets.
    pub fn to_meridiem_string(&self) -> String {
        format!(
            "{}-{}",
            self.start.to_meridiem_string(),
            self.end.to_meridiem_string()
        )
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

impl fmt::Display for TimeRange {
    /// Formats the range as `HH:MM-HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// How much a parsed range can be trusted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParseConfidence {
    /// The text was understood.
    Parsed,
    /// The text was not understood and the full-day default was substituted.
    Fallback,
}

/// A parsed range together with its confidence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedTimeRange {
    /// The canonical range.
    pub range: TimeRange,
    /// Whether the range came from the text or from the default.
    pub confidence: ParseConfidence,
}

impl ParsedTimeRange {
    fn parsed(range: TimeRange) -> Self {
        Self {
            range,
            confidence: ParseConfidence::Parsed,
        }
    }

    fn fallback() -> Self {
        Self {
            range: TimeRange::FULL_DAY,
            confidence: ParseConfidence::Fallback,
        }
    }

    /// Returns whether the caller should ask for confirmation.
    #[inline]
    pub fn is_low_confidence(&self) -> bool {
        self.confidence == ParseConfidence::Fallback
    }
}

/// Parses raw time text into a canonical range.
///
/// Sub-ranges joined by `;` or `/` are collapsed to the earliest start and
/// latest end among those that parse. A start without an am/pm marker takes
/// the end's marker, except that it is read as morning when the end is
/// afternoon and either starts a lower clock hour (`11-130p`) or is noon
/// (`1130-12p`). Ends at or past midnight clamp to 23:59 and starts before
/// 06:00 are raised to 06:00.
///
/// # Examples
///
/// ```
/// use flight_schedule::time_range::parse_time_range;
///
/// assert_eq!(parse_time_range("6:00a-7:00a").range.to_string(), "06:00-07:00");
/// assert_eq!(parse_time_range("1130-12p").range.to_string(), "11:30-12:00");
/// assert_eq!(parse_time_range("11:00p-1a").range.to_string(), "23:00-23:59");
/// assert_eq!(parse_time_range("4p-5p; 6p-7p").range.to_string(), "16:00-19:00");
/// ```
pub fn parse_time_range(text: &str) -> ParsedTimeRange {
    if text.contains(&UNION_SEPARATORS[..]) {
        return parse_union(text);
    }

    match parse_single(text) {
        Some(range) => ParsedTimeRange::parsed(range),
        None => {
            warn!(text, "unparsable time range, using full broadcast day");
            ParsedTimeRange::fallback()
        }
    }
}

fn parse_union(text: &str) -> ParsedTimeRange {
    let ranges: Vec<TimeRange> = text
        .split(&UNION_SEPARATORS[..])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let range = parse_single(part);
            if range.is_none() {
                warn!(part, text, "skipping unparsable sub-range");
            }
            range
        })
        .collect();

    let start = ranges.iter().map(TimeRange::start).min();
    let end = ranges.iter().map(TimeRange::end).max();
    match (start, end) {
        (Some(start), Some(end)) => {
            let range = TimeRange::new(start, end);
            debug!(text, %range, sub_ranges = ranges.len(), "collapsed union of time ranges");
            ParsedTimeRange::parsed(range)
        }
        _ => {
            warn!(text, "no sub-range parsed, using full broadcast day");
            ParsedTimeRange::fallback()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// One side of a range as written: clock digits plus an optional marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Endpoint {
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
}

impl Endpoint {
    /// Minutes since midnight under the given marker (24-hour when `None`).
    fn minutes(&self, meridiem: Option<Meridiem>) -> u32 {
        let hour = match meridiem {
            Some(Meridiem::Am) => self.hour % 12,
            Some(Meridiem::Pm) => self.hour % 12 + 12,
            None => self.hour,
        };
        hour * 60 + self.minute
    }
}

fn normalise(text: &str) -> String {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .map(|c| if c == '–' || c == '—' { '-' } else { c })
        .collect();
    compact
        .replace("midnight", "12a")
        .replace("noon", "12p")
        .replace("am", "a")
        .replace("pm", "p")
        .replace("to", "-")
}

fn parse_single(text: &str) -> Option<TimeRange> {
    let normalised = normalise(text);
    let (start, end) = normalised.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    let start = parse_endpoint(start)?;
    let end = parse_endpoint(end)?;
    Some(resolve(start, end))
}

fn parse_endpoint(token: &str) -> Option<Endpoint> {
    let split = token
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (clock, marker) = token.split_at(split);

    let (hour, minute) = parse_clock(clock)?;
    if minute > 59 {
        return None;
    }

    let meridiem = match marker {
        "" => None,
        "a" => Some(Meridiem::Am),
        "p" => Some(Meridiem::Pm),
        // 12m / 12n are order-sheet shorthand for midnight and noon.
        "m" if hour == 12 => Some(Meridiem::Am),
        "n" if hour == 12 => Some(Meridiem::Pm),
        _ => return None,
    };

    let hour_ok = match meridiem {
        Some(_) => (1..=12).contains(&hour),
        None => hour < 24 || (hour == 24 && minute == 0),
    };
    hour_ok.then_some(Endpoint {
        hour,
        minute,
        meridiem,
    })
}

/// Splits `h`, `hh`, `h:mm`, `hh:mm`, `hmm` or `hhmm` into hour and minute.
fn parse_clock(clock: &str) -> Option<(u32, u32)> {
    fn digits(s: &str) -> Option<u32> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }

    if !clock.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    if let Some((hour, minute)) = clock.split_once(':') {
        if hour.len() > 2 || minute.len() != 2 {
            return None;
        }
        return Some((digits(hour)?, digits(minute)?));
    }

    match clock.len() {
        1 | 2 => Some((digits(clock)?, 0)),
        3 => Some((digits(&clock[..1])?, digits(&clock[1..])?)),
        4 => Some((digits(&clock[..2])?, digits(&clock[2..])?)),
        _ => None,
    }
}

fn resolve(start: Endpoint, end: Endpoint) -> TimeRange {
    let start_meridiem = match (start.meridiem, end.meridiem) {
        (Some(marker), _) => Some(marker),
        (None, _) if start.hour > 12 => None,
        (None, Some(Meridiem::Pm))
            if start.hour != 12 && (end.hour == 12 || start.hour > end.hour) =>
        {
            Some(Meridiem::Am)
        }
        (None, end_marker) => end_marker,
    };
    let raw_start = start.minutes(start_meridiem);

    let end_meridiem = match (end.meridiem, start_meridiem) {
        (Some(marker), _) => Some(marker),
        (None, Some(Meridiem::Am)) if end.hour <= 12 => {
            if end.minutes(Some(Meridiem::Am)) < raw_start {
                Some(Meridiem::Pm)
            } else {
                Some(Meridiem::Am)
            }
        }
        (None, Some(Meridiem::Pm)) if end.hour <= 12 => Some(Meridiem::Pm),
        (None, _) => None,
    };
    let raw_end = end.minutes(end_meridiem);

    let past_midnight = end_meridiem == Some(Meridiem::Am) && (end.hour == 12 || end.hour < 6);
    let end_time = if past_midnight || raw_end >= MINUTES_PER_DAY || raw_end < raw_start {
        TimeOfDay::CEILING
    } else {
        TimeOfDay::from_minutes_saturating(raw_end)
    };

    TimeRange::new(TimeOfDay::from_minutes_saturating(raw_start), end_time)
}
