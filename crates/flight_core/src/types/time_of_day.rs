//! Minute-precision time of day within a broadcast day.
//!
//! Traffic systems accept air times between the start of the broadcast day
//! ([`TimeOfDay::FLOOR`], 06:00) and the last minute of the calendar day
//! ([`TimeOfDay::CEILING`], 23:59). A schedule entry never spans midnight.

use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

use super::error::TimeError;

/// A time of day with minute precision.
///
/// Stored as minutes since midnight, ordered chronologically, and displayed
/// in 24-hour `HH:MM` form.
///
/// # Examples
///
/// ```
/// use flight_core::types::TimeOfDay;
///
/// let t = TimeOfDay::from_hm(13, 30).unwrap();
/// assert_eq!(t.to_string(), "13:30");
/// assert_eq!(t.to_meridiem_string(), "1:30p");
/// assert!(TimeOfDay::FLOOR < t && t < TimeOfDay::CEILING);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Earliest schedulable time (06:00).
    pub const FLOOR: TimeOfDay = TimeOfDay(6 * 60);

    /// Latest schedulable time (23:59).
    pub const CEILING: TimeOfDay = TimeOfDay(23 * 60 + 59);

    /// Creates a time from a 24-hour clock hour (0-23) and minute (0-59).
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::TimeOfDay;
    ///
    /// assert!(TimeOfDay::from_hm(23, 59).is_ok());
    /// assert!(TimeOfDay::from_hm(24, 0).is_err());
    /// assert!(TimeOfDay::from_hm(7, 60).is_err());
    /// ```
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        // Bounded above by 23 * 60 + 59, fits in u16.
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Creates a time from minutes since midnight, saturating at 23:59.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_minutes_saturating(810).to_string(), "13:30");
    /// assert_eq!(TimeOfDay::from_minutes_saturating(24 * 60), TimeOfDay::CEILING);
    /// ```
    pub fn from_minutes_saturating(minutes: u32) -> Self {
        let capped = minutes.min(u32::from(Self::CEILING.0));
        TimeOfDay(capped as u16)
    }

    /// Returns the hour on the 24-hour clock.
    #[inline]
    pub fn hour(&self) -> u32 {
        u32::from(self.0) / 60
    }

    /// Returns the minute within the hour.
    #[inline]
    pub fn minute(&self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Returns minutes elapsed since midnight.
    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.0)
    }

    /// Raises the time to [`TimeOfDay::FLOOR`] if it is earlier.
    #[inline]
    pub fn at_least_floor(self) -> Self {
        self.max(Self::FLOOR)
    }

    /// Converts to a chrono `NaiveTime`.
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// Formats the time in the compact 12-hour form used on order sheets.
    ///
    /// Whole hours keep their minutes (`6:00a`), noon is `12:00p`, and
    /// midnight is `12:00a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::FLOOR.to_meridiem_string(), "6:00a");
    /// assert_eq!(TimeOfDay::from_hm(12, 0).unwrap().to_meridiem_string(), "12:00p");
    /// assert_eq!(TimeOfDay::CEILING.to_meridiem_string(), "11:59p");
    /// ```
    pub fn to_meridiem_string(&self) -> String {
        let hour = self.hour();
        let marker = if hour < 12 { 'a' } else { 'p' };
        let clock_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02}{}", clock_hour, self.minute(), marker)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses a 24-hour `HH:MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::ParseError(format!("expected HH:MM, got '{}'", s)))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| TimeError::ParseError(format!("invalid hour in '{}'", s)))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| TimeError::ParseError(format!("invalid minute in '{}'", s)))?;
        TimeOfDay::from_hm(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats the time as `HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::TimeOfDay;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for TimeOfDay {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for TimeOfDay {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            TimeOfDay::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
        assert_eq!(TimeOfDay::FLOOR, t(6, 0));
        assert_eq!(TimeOfDay::CEILING, t(23, 59));
    }

    #[test]
    fn test_from_hm_rejects_out_of_range() {
        assert_eq!(
            TimeOfDay::from_hm(24, 0),
            Err(TimeError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(TimeOfDay::from_hm(0, 60).is_err());
    }

    #[test]
    fn test_components() {
        let time = t(19, 30);
        assert_eq!(time.hour(), 19);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.minutes_since_midnight(), 1170);
    }

    #[test]
    fn test_from_minutes_saturating() {
        assert_eq!(TimeOfDay::from_minutes_saturating(0), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_minutes_saturating(1439), TimeOfDay::CEILING);
        assert_eq!(TimeOfDay::from_minutes_saturating(5000), TimeOfDay::CEILING);
    }

    #[test]
    fn test_at_least_floor() {
        assert_eq!(t(5, 0).at_least_floor(), TimeOfDay::FLOOR);
        assert_eq!(t(7, 0).at_least_floor(), t(7, 0));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("06:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::FLOOR);
        assert_eq!("7:05".parse::<TimeOfDay>().unwrap().to_string(), "07:05");
        assert!("0700".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_meridiem_string() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_meridiem_string(), "12:00a");
        assert_eq!(t(11, 30).to_meridiem_string(), "11:30a");
        assert_eq!(t(19, 0).to_meridiem_string(), "7:00p");
    }

    #[test]
    fn test_naive_conversion() {
        let time = t(13, 45);
        assert_eq!(TimeOfDay::from(time.to_naive()), time);
    }
}
