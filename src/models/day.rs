//! Day-of-week model.
//!
//! A configuration with `working_days = n` uses the first `n` days of the
//! week starting Monday. Grid day index `d` therefore maps to
//! `Weekday::from_index(d)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day for a zero-based grid index (`0` = Monday).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Whether this day is part of a week with `working_days` days.
    #[inline]
    pub fn is_working(self, working_days: usize) -> bool {
        self.index() < working_days
    }

    /// The first `working_days` days of the week.
    pub fn working_week(working_days: usize) -> &'static [Weekday] {
        &Self::ALL[..working_days.min(Self::ALL.len())]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; accepts full names and three-letter abbreviations.
impl FromStr for Weekday {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                needle == name || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| TimetableError::UnknownDay(s.trim().to_string()))
    }
}

impl TryFrom<String> for Weekday {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.name().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*day));
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("  FRIDAY ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Funday".parse::<Weekday>().unwrap_err();
        assert!(matches!(err, TimetableError::UnknownDay(ref d) if d == "Funday"));
        // Partial prefixes other than three letters are ambiguous-prone
        assert!("mo".parse::<Weekday>().is_err());
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_working_week() {
        assert_eq!(Weekday::working_week(5).len(), 5);
        assert_eq!(Weekday::working_week(5)[4], Weekday::Friday);
        assert_eq!(Weekday::working_week(9).len(), 7);
        assert!(Weekday::Friday.is_working(5));
        assert!(!Weekday::Saturday.is_working(5));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Weekday::Tuesday).unwrap();
        assert_eq!(json, "\"tuesday\"");
        let day: Weekday = serde_json::from_str("\"Thu\"").unwrap();
        assert_eq!(day, Weekday::Thursday);
        assert!(serde_json::from_str::<Weekday>("\"someday\"").is_err());
    }
}
