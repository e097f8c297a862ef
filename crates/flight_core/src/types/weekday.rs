//! Explicit weekday selections.
//!
//! A [`WeekdaySet`] is the day-of-week checkbox row of a traffic-system
//! entry: any subset of the seven weekdays, iterated Monday first.

use chrono::Weekday;
use std::fmt;

/// Week order used throughout the workspace (Monday first).
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the short order-sheet code for a weekday.
///
/// # Examples
///
/// ```
/// use flight_core::types::weekday_code;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_code(Weekday::Mon), "M");
/// assert_eq!(weekday_code(Weekday::Thu), "Th");
/// assert_eq!(weekday_code(Weekday::Sun), "Su");
/// ```
pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue => "Tu",
        Weekday::Wed => "W",
        Weekday::Thu => "Th",
        Weekday::Fri => "F",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// A set of weekdays.
///
/// # Examples
///
/// ```
/// use flight_core::types::WeekdaySet;
/// use chrono::Weekday;
///
/// let set = WeekdaySet::MON_FRI.with(Weekday::Sat);
/// assert_eq!(set.len(), 6);
/// assert!(set.contains(Weekday::Sat));
/// assert!(!set.contains(Weekday::Sun));
/// assert_eq!(set.to_string(), "M,Tu,W,Th,F,Sa");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// No days.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Monday through Friday.
    pub const MON_FRI: WeekdaySet = WeekdaySet(0b0001_1111);

    /// Saturday and Sunday.
    pub const SAT_SUN: WeekdaySet = WeekdaySet(0b0110_0000);

    /// Monday through Saturday.
    pub const MON_SAT: WeekdaySet = WeekdaySet(0b0011_1111);

    /// Every day of the week.
    pub const ALL: WeekdaySet = WeekdaySet(0b0111_1111);

    #[inline]
    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }

    /// Returns a set containing only `day`.
    #[inline]
    pub fn single(day: Weekday) -> Self {
        WeekdaySet(Self::bit(day))
    }

    /// Returns the days from `first` through `last` in week order.
    ///
    /// A range whose end precedes its start wraps through Sunday, so
    /// `Fri..=Mon` covers Friday, Saturday, Sunday and Monday.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_core::types::WeekdaySet;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(WeekdaySet::span(Weekday::Mon, Weekday::Fri), WeekdaySet::MON_FRI);
    /// assert_eq!(WeekdaySet::span(Weekday::Fri, Weekday::Mon).len(), 4);
    /// ```
    pub fn span(first: Weekday, last: Weekday) -> Self {
        let mut set = WeekdaySet::EMPTY;
        let mut day = first;
        loop {
            set = set.with(day);
            if day == last {
                return set;
            }
            day = day.succ();
        }
    }

    /// Returns whether `day` is in the set.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Returns a copy of the set with `day` added.
    #[inline]
    pub fn with(self, day: Weekday) -> Self {
        WeekdaySet(self.0 | Self::bit(day))
    }

    /// Returns a copy of the set with `day` removed.
    #[inline]
    pub fn without(self, day: Weekday) -> Self {
        WeekdaySet(self.0 & !Self::bit(day))
    }

    /// Returns the union of two sets.
    #[inline]
    pub fn union(self, other: WeekdaySet) -> Self {
        WeekdaySet(self.0 | other.0)
    }

    /// Returns whether every day in `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &WeekdaySet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns the number of days in the set.
    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the days in the set, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(WeekdaySet::EMPTY, WeekdaySet::with)
    }
}

impl fmt::Display for WeekdaySet {
    /// Formats the set as comma-separated day codes (`M,W,F`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.iter().map(weekday_code).collect();
        write!(f, "{}", codes.join(","))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{weekday_code, WeekdaySet, WEEK};
    use serde::ser::SerializeSeq;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for WeekdaySet {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(self.len() as usize))?;
            for day in self.iter() {
                seq.serialize_element(weekday_code(day))?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for WeekdaySet {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let codes = Vec::<String>::deserialize(deserializer)?;
            codes
                .iter()
                .map(|code| {
                    WEEK.iter()
                        .copied()
                        .find(|day| weekday_code(*day).eq_ignore_ascii_case(code))
                        .or_else(|| code.parse().ok())
                        .ok_or_else(|| de::Error::custom(format!("unknown weekday '{}'", code)))
                })
                .collect()
        }
    }
}
