//! Weekday descriptor resolution.
//!
//! Order sheets describe air days as `M-F`, `Sat-Sun`, `MTuWThF`,
//! `Mon, Wed & Fri`, `weekends` and many variations besides. The traffic
//! system accepts only a handful of canonical spans, so every descriptor is
//! mapped to the widest [`DayPattern`] consistent with the days it mentions.

use chrono::Weekday;
use flight_core::types::{weekday_code, WeekdaySet};
use std::fmt;
use tracing::{debug, warn};

/// A canonical weekday span accepted downstream.
///
/// # Examples
///
/// ```
/// use flight_schedule::day_pattern::DayPattern;
/// use chrono::Weekday;
///
/// assert_eq!(DayPattern::MonFri.code(), "M-F");
/// assert_eq!(DayPattern::MonSat.active_days(), 6);
/// assert!(DayPattern::SatSun.includes(Weekday::Sun));
/// assert_eq!(DayPattern::Single(Weekday::Thu).to_string(), "Th");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DayPattern {
    /// Monday through Friday.
    MonFri,
    /// Saturday and Sunday.
    SatSun,
    /// Monday through Saturday.
    MonSat,
    /// Every day of the week.
    #[default]
    MonSun,
    /// One day only.
    Single(Weekday),
}

impl DayPattern {
    /// Returns the narrowest pattern covering every day in `days`.
    ///
    /// An empty set has no covering pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_schedule::day_pattern::DayPattern;
    /// use flight_core::types::WeekdaySet;
    /// use chrono::Weekday;
    ///
    /// let mwf: WeekdaySet = [Weekday::Mon, Weekday::Wed, Weekday::Fri].into_iter().collect();
    /// assert_eq!(DayPattern::covering(mwf), Some(DayPattern::MonFri));
    /// assert_eq!(DayPattern::covering(WeekdaySet::single(Weekday::Sat)), Some(DayPattern::Single(Weekday::Sat)));
    /// assert_eq!(DayPattern::covering(WeekdaySet::EMPTY), None);
    /// ```
    pub fn covering(days: WeekdaySet) -> Option<Self> {
        if days.is_empty() {
            return None;
        }
        if days.len() == 1 {
            return days.iter().next().map(DayPattern::Single);
        }
        let pattern = if days.is_subset(&WeekdaySet::MON_FRI) {
            DayPattern::MonFri
        } else if days.is_subset(&WeekdaySet::SAT_SUN) {
            DayPattern::SatSun
        } else if days.is_subset(&WeekdaySet::MON_SAT) {
            DayPattern::MonSat
        } else {
            DayPattern::MonSun
        };
        Some(pattern)
    }

    /// Returns the explicit weekdays of the pattern.
    pub fn weekdays(&self) -> WeekdaySet {
        match self {
            DayPattern::MonFri => WeekdaySet::MON_FRI,
            DayPattern::SatSun => WeekdaySet::SAT_SUN,
            DayPattern::MonSat => WeekdaySet::MON_SAT,
            DayPattern::MonSun => WeekdaySet::ALL,
            DayPattern::Single(day) => WeekdaySet::single(*day),
        }
    }

    /// Returns the number of days the pattern airs on.
    #[inline]
    pub fn active_days(&self) -> u32 {
        self.weekdays().len()
    }

    /// Returns whether the pattern airs on `day`.
    #[inline]
    pub fn includes(&self, day: Weekday) -> bool {
        self.weekdays().contains(day)
    }

    /// Returns the canonical code (`M-F`, `Sa-Su`, `M-Sa`, `M-Su`, `Th`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            DayPattern::MonFri => "M-F",
            DayPattern::SatSun => "Sa-Su",
            DayPattern::MonSat => "M-Sa",
            DayPattern::MonSun => "M-Su",
            DayPattern::Single(day) => weekday_code(*day),
        }
    }
}

impl fmt::Display for DayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DayPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// Outcome of resolving a weekday descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedDays {
    /// The canonical pattern.
    pub pattern: DayPattern,
    /// Days the text actually named (empty when unrecognized).
    pub mentioned: WeekdaySet,
    /// Whether any weekday was found in the text.
    pub recognized: bool,
}

impl ResolvedDays {
    /// Returns the explicit weekdays of the resolved pattern.
    #[inline]
    pub fn weekdays(&self) -> WeekdaySet {
        self.pattern.weekdays()
    }

    /// Returns the active-day count of the resolved pattern.
    #[inline]
    pub fn active_days(&self) -> u32 {
        self.pattern.active_days()
    }
}

/// Day spellings, longest first so greedy decomposition prefers full words.
const DAY_NAMES: &[(&str, Weekday)] = &[
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("saturday", Weekday::Sat),
    ("tuesday", Weekday::Tue),
    ("monday", Weekday::Mon),
    ("friday", Weekday::Fri),
    ("sunday", Weekday::Sun),
    ("thurs", Weekday::Thu),
    ("tues", Weekday::Tue),
    ("thur", Weekday::Thu),
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
    ("mo", Weekday::Mon),
    ("tu", Weekday::Tue),
    ("we", Weekday::Wed),
    ("th", Weekday::Thu),
    ("fr", Weekday::Fri),
    ("sa", Weekday::Sat),
    ("su", Weekday::Sun),
    ("m", Weekday::Mon),
    ("t", Weekday::Tue),
    ("w", Weekday::Wed),
    ("r", Weekday::Thu),
    ("f", Weekday::Fri),
    ("s", Weekday::Sat),
    ("u", Weekday::Sun),
];

/// Longest day code allowed inside a concatenated word such as `mtuwthf`.
const MAX_CODE_LEN: usize = 2;

/// Words naming a fixed group of days.
const KEYWORDS: &[(&str, WeekdaySet, Weekday, Weekday)] = &[
    ("daily", WeekdaySet::ALL, Weekday::Mon, Weekday::Sun),
    ("everyday", WeekdaySet::ALL, Weekday::Mon, Weekday::Sun),
    ("weekdays", WeekdaySet::MON_FRI, Weekday::Mon, Weekday::Fri),
    ("weekday", WeekdaySet::MON_FRI, Weekday::Mon, Weekday::Fri),
    ("weekends", WeekdaySet::SAT_SUN, Weekday::Sat, Weekday::Sun),
    ("weekend", WeekdaySet::SAT_SUN, Weekday::Sat, Weekday::Sun),
];

/// Words that read as a range dash.
const RANGE_WORDS: [&str; 3] = ["to", "thru", "through"];

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token<'a> {
    Dash,
    Word(&'a str),
}

/// Days named by one word, with its first and last day for range joining.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Clause {
    days: WeekdaySet,
    first: Weekday,
    last: Weekday,
}

/// Resolves a free-text weekday descriptor to its canonical pattern.
///
/// Never fails. Text naming no weekday at all resolves to
/// [`DayPattern::MonSun`] with `recognized == false`.
///
/// # Examples
///
/// ```
/// use flight_schedule::day_pattern::{resolve_day_pattern, DayPattern};
/// use chrono::Weekday;
///
/// assert_eq!(resolve_day_pattern("M-F").pattern, DayPattern::MonFri);
/// assert_eq!(resolve_day_pattern("MTuWThF").pattern, DayPattern::MonFri);
/// assert_eq!(resolve_day_pattern("Sat-Sun").pattern, DayPattern::SatSun);
/// assert_eq!(resolve_day_pattern("Wed").pattern, DayPattern::Single(Weekday::Wed));
/// assert_eq!(resolve_day_pattern("M-F, Sa-Su").pattern, DayPattern::MonSun);
///
/// let unknown = resolve_day_pattern("per schedule");
/// assert_eq!(unknown.pattern, DayPattern::MonSun);
/// assert!(!unknown.recognized);
/// ```
pub fn resolve_day_pattern(text: &str) -> ResolvedDays {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);

    let mut days = WeekdaySet::EMPTY;
    let mut previous: Option<Weekday> = None;
    let mut pending_range = false;

    for (position, token) in tokens.iter().enumerate() {
        match *token {
            Token::Dash => pending_range = previous.is_some(),
            Token::Word(word) => match word_clause(word, previous, tokens.get(position + 1)) {
                Some(clause) => {
                    if let (true, Some(from)) = (pending_range, previous) {
                        days = days.union(WeekdaySet::span(from, clause.first));
                    }
                    days = days.union(clause.days);
                    previous = Some(clause.last);
                    pending_range = false;
                }
                None => {
                    debug!(word, text, "ignoring non-day word in day descriptor");
                    previous = None;
                    pending_range = false;
                }
            },
        }
    }

    match DayPattern::covering(days) {
        Some(pattern) => ResolvedDays {
            pattern,
            mentioned: days,
            recognized: true,
        },
        None => {
            warn!(text, "unrecognized day descriptor, defaulting to M-Su");
            ResolvedDays {
                pattern: DayPattern::MonSun,
                mentioned: WeekdaySet::EMPTY,
                recognized: false,
            }
        }
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let is_separator = |c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/' | '&' | '+' | '.');
    let is_dash = |c: char| matches!(c, '-' | '–' | '—');

    for chunk in text.split(is_separator).filter(|chunk| !chunk.is_empty()) {
        let mut rest = chunk;
        while !rest.is_empty() {
            match rest.find(is_dash) {
                Some(0) => {
                    tokens.push(Token::Dash);
                    let width = rest.chars().next().map_or(1, char::len_utf8);
                    rest = &rest[width..];
                }
                Some(at) => {
                    tokens.push(word_token(&rest[..at]));
                    rest = &rest[at..];
                }
                None => {
                    tokens.push(word_token(rest));
                    rest = "";
                }
            }
        }
    }
    tokens
        .into_iter()
        .filter(|token| *token != Token::Word("and"))
        .collect()
}

fn word_token(word: &str) -> Token<'_> {
    if RANGE_WORDS.contains(&word) {
        Token::Dash
    } else {
        Token::Word(word)
    }
}

/// Resolves one word, reading a standalone `s` from its neighbours.
fn word_clause(word: &str, previous: Option<Weekday>, next: Option<&Token<'_>>) -> Option<Clause> {
    if word != "s" {
        return clause(word);
    }
    let next_is_monday = match next {
        Some(Token::Word(next)) => clause(next).is_some_and(|c| c.first == Weekday::Mon),
        _ => false,
    };
    let day = bare_s_day(previous, next_is_monday);
    Some(Clause {
        days: WeekdaySet::single(day),
        first: day,
        last: day,
    })
}

/// A bare `s` is Sunday when it leads into Monday (`SMTWTFS`) or follows
/// Saturday (`Sa S`), and Saturday otherwise.
fn bare_s_day(previous: Option<Weekday>, next_is_monday: bool) -> Weekday {
    if next_is_monday || previous == Some(Weekday::Sat) {
        Weekday::Sun
    } else {
        Weekday::Sat
    }
}

fn clause(word: &str) -> Option<Clause> {
    if let Some(&(_, days, first, last)) = KEYWORDS.iter().find(|(name, ..)| *name == word) {
        return Some(Clause { days, first, last });
    }

    let named = decompose(word)?;
    let first = *named.first()?;
    let last = *named.last()?;
    Some(Clause {
        days: named.into_iter().collect(),
        first,
        last,
    })
}

/// Reads a word as weekdays, in order.
///
/// A word is either one day name (`thurs`, `saturday`) or a run of short
/// codes (`mtuwthf`, `sasu`). Longer names never combine, so ordinary words
/// such as `month` are not mistaken for days.
fn decompose(word: &str) -> Option<Vec<Weekday>> {
    if let Some(&(_, day)) = DAY_NAMES.iter().find(|(name, _)| *name == word) {
        return Some(vec![day]);
    }

    let mut pieces = Vec::new();
    let mut rest = word;
    while !rest.is_empty() {
        let &(name, day) = DAY_NAMES
            .iter()
            .filter(|(name, _)| name.len() <= MAX_CODE_LEN)
            .find(|(name, _)| rest.starts_with(name))?;
        pieces.push((name, day));
        rest = &rest[name.len()..];
    }

    let mut days: Vec<Weekday> = Vec::with_capacity(pieces.len());
    for (position, &(name, day)) in pieces.iter().enumerate() {
        let day = if name == "s" {
            let next_is_monday = pieces
                .get(position + 1)
                .is_some_and(|&(_, next)| next == Weekday::Mon);
            bare_s_day(days.last().copied(), next_is_monday)
        } else {
            day
        };
        days.push(day);
    }
    (!days.is_empty()).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> DayPattern {
        resolve_day_pattern(text).pattern
    }

    // --- Canonical codes ---

    #[test]
    fn test_canonical_ranges() {
        assert_eq!(pattern("M-F"), DayPattern::MonFri);
        assert_eq!(pattern("Sa-Su"), DayPattern::SatSun);
        assert_eq!(pattern("M-Sa"), DayPattern::MonSat);
        assert_eq!(pattern("M-Su"), DayPattern::MonSun);
    }

    #[test]
    fn test_single_day_codes() {
        assert_eq!(pattern("M"), DayPattern::Single(Weekday::Mon));
        assert_eq!(pattern("Tu"), DayPattern::Single(Weekday::Tue));
        assert_eq!(pattern("R"), DayPattern::Single(Weekday::Thu));
        assert_eq!(pattern("Th"), DayPattern::Single(Weekday::Thu));
        assert_eq!(pattern("S"), DayPattern::Single(Weekday::Sat));
        assert_eq!(pattern("U"), DayPattern::Single(Weekday::Sun));
        assert_eq!(pattern("Sunday"), DayPattern::Single(Weekday::Sun));
    }

    #[test]
    fn test_full_and_short_names() {
        assert_eq!(pattern("Monday-Friday"), DayPattern::MonFri);
        assert_eq!(pattern("Sat-Sun"), DayPattern::SatSun);
        assert_eq!(pattern("MON - SAT"), DayPattern::MonSat);
        assert_eq!(pattern("Mon thru Fri"), DayPattern::MonFri);
        assert_eq!(pattern("Tues to Thurs"), DayPattern::MonFri);
    }

    // --- Widest consistent span ---

    #[test]
    fn test_partial_weekday_ranges_widen() {
        assert_eq!(pattern("M-Th"), DayPattern::MonFri);
        assert_eq!(pattern("Tu-Th"), DayPattern::MonFri);
        assert_eq!(pattern("M,W,F"), DayPattern::MonFri);
    }

    #[test]
    fn test_weekday_plus_saturday_is_mon_sat() {
        assert_eq!(pattern("M-F, Sa"), DayPattern::MonSat);
        assert_eq!(pattern("W-Sa"), DayPattern::MonSat);
    }

    #[test]
    fn test_weekday_plus_weekend_is_mon_sun() {
        assert_eq!(pattern("M-F, Sa-Su"), DayPattern::MonSun);
        assert_eq!(pattern("M-F & Su"), DayPattern::MonSun);
        assert_eq!(pattern("F-Su"), DayPattern::MonSun);
    }

    #[test]
    fn test_wrap_around_range() {
        let resolved = resolve_day_pattern("F-M");
        assert_eq!(resolved.pattern, DayPattern::MonSun);
        assert_eq!(resolved.mentioned.len(), 4);
        assert!(resolved.mentioned.contains(Weekday::Sun));
    }

    #[test]
    fn test_concatenated_codes() {
        assert_eq!(pattern("MTuWThF"), DayPattern::MonFri);
        assert_eq!(pattern("MTWRF"), DayPattern::MonFri);
        assert_eq!(pattern("SaSu"), DayPattern::SatSun);
        assert_eq!(pattern("MWF"), DayPattern::MonFri);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(pattern("Daily"), DayPattern::MonSun);
        assert_eq!(pattern("weekdays"), DayPattern::MonFri);
        assert_eq!(pattern("Weekends"), DayPattern::SatSun);
        assert_eq!(pattern("weekdays and weekends"), DayPattern::MonSun);
    }

    #[test]
    fn test_clause_separators() {
        assert_eq!(pattern("Mon; Wed"), DayPattern::MonFri);
        assert_eq!(pattern("Sa/Su"), DayPattern::SatSun);
        assert_eq!(pattern("Mon and Fri"), DayPattern::MonFri);
        assert_eq!(pattern("M W F"), DayPattern::MonFri);
    }

    // --- Unrecognized input ---

    #[test]
    fn test_unrecognized_defaults_to_mon_sun() {
        for text in ["", "   ", "ROS", "per schedule", "123"] {
            let resolved = resolve_day_pattern(text);
            assert_eq!(resolved.pattern, DayPattern::MonSun, "{text:?}");
            assert!(!resolved.recognized, "{text:?}");
            assert!(resolved.mentioned.is_empty());
        }
    }

    #[test]
    fn test_ordinary_words_are_not_days() {
        for text in ["Month of May", "see attached", "tbd", "as needed"] {
            let resolved = resolve_day_pattern(text);
            assert_eq!(resolved.pattern, DayPattern::MonSun, "{text:?}");
            assert!(!resolved.recognized, "{text:?}");
        }
    }

    #[test]
    fn test_long_names_do_not_combine() {
        assert!(decompose("month").is_none());
        assert!(decompose("monwed").is_none());
        assert_eq!(decompose("thurs"), Some(vec![Weekday::Thu]));
        assert_eq!(decompose("sasu"), Some(vec![Weekday::Sat, Weekday::Sun]));
    }

    #[test]
    fn test_sunday_first_week_header() {
        let resolved = resolve_day_pattern("SMTWTFS");
        assert_eq!(resolved.pattern, DayPattern::MonSun);
        assert!(resolved.recognized);
        assert!(resolved.mentioned.contains(Weekday::Sun));
        assert!(resolved.mentioned.contains(Weekday::Sat));

        assert_eq!(pattern("S M T W T F S"), DayPattern::MonSun);
        assert_eq!(pattern("S-M"), DayPattern::MonSun);
    }

    #[test]
    fn test_bare_s_after_saturday_is_sunday() {
        assert_eq!(pattern("Sa S"), DayPattern::SatSun);
        assert_eq!(pattern("SS"), DayPattern::SatSun);
        assert_eq!(pattern("M-F, S"), DayPattern::MonSat);
    }

    #[test]
    fn test_stray_words_are_ignored() {
        let resolved = resolve_day_pattern("M-F only");
        assert_eq!(resolved.pattern, DayPattern::MonFri);
        assert!(resolved.recognized);
    }

    // --- DayPattern ---

    #[test]
    fn test_active_days() {
        assert_eq!(DayPattern::MonFri.active_days(), 5);
        assert_eq!(DayPattern::SatSun.active_days(), 2);
        assert_eq!(DayPattern::MonSat.active_days(), 6);
        assert_eq!(DayPattern::MonSun.active_days(), 7);
        assert_eq!(DayPattern::Single(Weekday::Wed).active_days(), 1);
    }

    #[test]
    fn test_codes_round_trip_through_resolver() {
        let all = [
            DayPattern::MonFri,
            DayPattern::SatSun,
            DayPattern::MonSat,
            DayPattern::MonSun,
            DayPattern::Single(Weekday::Mon),
            DayPattern::Single(Weekday::Tue),
            DayPattern::Single(Weekday::Thu),
            DayPattern::Single(Weekday::Sun),
        ];
        for p in all {
            assert_eq!(pattern(p.code()), p, "{}", p);
        }
    }

    #[test]
    fn test_resolved_weekdays_match_pattern() {
        let resolved = resolve_day_pattern("Tu-Th");
        assert_eq!(resolved.weekdays(), WeekdaySet::MON_FRI);
        assert_eq!(resolved.active_days(), 5);
        assert_eq!(resolved.mentioned.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&DayPattern::SatSun).unwrap();
        assert_eq!(json, "\"Sa-Su\"");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        const WEEK: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_pattern_covers_mentioned_days(bits in 1u8..128) {
                let days: WeekdaySet = WEEK
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| bits & (1 << i) != 0)
                    .map(|(_, day)| *day)
                    .collect();
                let text = days.to_string();
                let resolved = resolve_day_pattern(&text);
                prop_assert!(resolved.recognized);
                prop_assert_eq!(resolved.mentioned, days);
                prop_assert!(days.is_subset(&resolved.pattern.weekdays()));
            }

            #[test]
            fn test_resolver_never_panics(text in ".{0,32}") {
                let resolved = resolve_day_pattern(&text);
                prop_assert!(resolved.pattern.active_days() >= 1);
            }
        }
    }
}
