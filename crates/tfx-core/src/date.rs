#![forbid(unsafe_code)]

//! Literal calendar dates.
//!
//! Event dates arrive as `YYYY-MM-DD` strings. Calendar rules compare month
//! and day, so the components are read straight out of the string and never
//! routed through a timestamp: a midnight-UTC instant rendered in a western
//! timezone lands on the previous day, which is exactly the off-by-one the
//! rules must not see.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(1);
    pub const FEBRUARY: Self = Self(2);
    pub const MARCH: Self = Self(3);
    pub const APRIL: Self = Self(4);
    pub const MAY: Self = Self(5);
    pub const JUNE: Self = Self(6);
    pub const JULY: Self = Self(7);
    pub const AUGUST: Self = Self(8);
    pub const SEPTEMBER: Self = Self(9);
    pub const OCTOBER: Self = Self(10);
    pub const NOVEMBER: Self = Self(11);
    pub const DECEMBER: Self = Self(12);

    /// Create a month from its 1-based number, rejecting anything outside 1-12.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self(number))
        } else {
            None
        }
    }

    /// 1-based month number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index, suitable for indexing twelve-entry tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[self.index()]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DateParseError::MonthOutOfRange { month: value })
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to read a strict `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The string is not ten characters of the form `dddd-dd-dd`.
    WrongShape { raw: String },
    /// A component contains something other than ASCII digits.
    NonNumeric { raw: String },
    /// Month number outside 1-12.
    MonthOutOfRange { month: u8 },
    /// The components do not name a real day (e.g. `2023-02-29`).
    OutOfRange { year: i32, month: u8, day: u8 },
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongShape { raw } => write!(f, "date {raw:?} is not in YYYY-MM-DD form"),
            Self::NonNumeric { raw } => write!(f, "date {raw:?} has non-numeric components"),
            Self::MonthOutOfRange { month } => write!(f, "month {month} is outside 1-12"),
            Self::OutOfRange { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a calendar day")
            }
        }
    }
}

impl std::error::Error for DateParseError {}

/// A validated calendar day read from literal `YYYY-MM-DD` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: u8,
}

impl CalendarDate {
    /// Build a date from components, rejecting days that do not exist.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateParseError> {
        let month_value = Month::try_from(month)?;
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(|_| Self {
                year,
                month: month_value,
                day,
            })
            .ok_or(DateParseError::OutOfRange { year, month, day })
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(raw: &str) -> Result<Self, DateParseError> {
        let bytes = raw.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(DateParseError::WrongShape {
                raw: raw.to_string(),
            });
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u32, DateParseError> {
            let part = &raw[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DateParseError::NonNumeric {
                    raw: raw.to_string(),
                });
            }
            part.parse::<u32>().map_err(|_| DateParseError::NonNumeric {
                raw: raw.to_string(),
            })
        };
        let year = digits(0..4)? as i32;
        let month = digits(5..7)? as u8;
        let day = digits(8..10)? as u8;
        Self::from_ymd(year, month, day)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// True when this date falls on the given month and day, in any year.
    #[inline]
    #[must_use]
    pub fn is_month_day(&self, month: u8, day: u8) -> bool {
        self.month.number() == month && self.day == day
    }

    /// 1-indexed day of the year, counting days since January 0.
    ///
    /// Leap-aware: `2024-03-09` and `2023-03-10` are both day 69.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        const CUMULATIVE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
        let leap_shift = u16::from(self.month.number() > 2 && is_leap_year(self.year));
        CUMULATIVE[self.month.index()] + leap_shift + u16::from(self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

/// Gregorian leap year test.
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Pull a month out of a loosely formed date string.
///
/// Strict dates answer directly. Otherwise the second `-`-separated
/// component is read up to its first non-digit, so `2024-06-15T10:00:00Z`
/// and `2024-6` both give June. Anything else gives `None`.
#[must_use]
pub fn best_effort_month(raw: &str) -> Option<Month> {
    if let Ok(date) = CalendarDate::parse(raw) {
        return Some(date.month());
    }
    let mut parts = raw.trim().split('-');
    let year = parts.next()?;
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month_part = parts.next()?;
    let digits: String = month_part
        .chars()
        .take_while(char::is_ascii_digit)
        .take(2)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u8>().ok().and_then(Month::new)
}

/// Current local date as a [`CalendarDate`].
#[must_use]
pub fn today_local() -> CalendarDate {
    let now = chrono::Local::now().date_naive();
    CalendarDate {
        year: now.year(),
        month: Month(now.month() as u8),
        day: now.day() as u8,
    }
}
