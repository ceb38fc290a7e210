//! Calendar month enumeration.
//!
//! The schedule always addresses one named month of one year; this module
//! defines the `Month` type and the date arithmetic the rest of the engine
//! needs (real day counts, per-day calendar dates).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the twelve calendar months.
///
/// Serializes as the English month name ("January" .. "December"), matching
/// the persisted schedule format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    /// January.
    #[default]
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the 1-based calendar number of the month (January = 1).
    pub fn number(self) -> u32 {
        Month::ALL.iter().position(|m| *m == self).unwrap_or(0) as u32 + 1
    }

    /// Returns the English name of the month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Returns the number of days in this month for the given year,
    /// accounting for leap years.
    pub fn day_count(self, year: i32) -> u32 {
        let first = match NaiveDate::from_ymd_opt(year, self.number(), 1) {
            Some(d) => d,
            None => return 0,
        };
        let next_first = if self == Month::December {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, self.number() + 1, 1)
        };
        match next_first {
            Some(n) => (n - first).num_days() as u32,
            None => 0,
        }
    }

    /// Returns the calendar date of the given 1-based day of this month,
    /// or `None` when the day does not exist (e.g. February 30).
    pub fn date_of(self, year: i32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.number(), day)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown month: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers_are_calendar_order() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::June.number(), 6);
        assert_eq!(Month::December.number(), 12);
    }

    #[test]
    fn test_day_count_regular_months() {
        assert_eq!(Month::January.day_count(2025), 31);
        assert_eq!(Month::April.day_count(2025), 30);
        assert_eq!(Month::February.day_count(2025), 28);
    }

    #[test]
    fn test_day_count_leap_february() {
        assert_eq!(Month::February.day_count(2024), 29);
        assert_eq!(Month::February.day_count(2000), 29);
        assert_eq!(Month::February.day_count(2100), 28);
    }

    #[test]
    fn test_date_of_rejects_nonexistent_days() {
        assert!(Month::February.date_of(2025, 30).is_none());
        assert!(Month::April.date_of(2025, 31).is_none());
        assert_eq!(
            Month::January.date_of(2025, 15),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_serializes_as_english_name() {
        let json = serde_json::to_string(&Month::March).unwrap();
        assert_eq!(json, "\"March\"");
        let back: Month = serde_json::from_str("\"October\"").unwrap();
        assert_eq!(back, Month::October);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("january".parse::<Month>().unwrap(), Month::January);
        assert_eq!("DECEMBER".parse::<Month>().unwrap(), Month::December);
        assert!("Smarch".parse::<Month>().is_err());
    }
}
