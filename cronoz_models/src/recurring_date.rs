use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Leap year used to check whether a month/day pair can exist at all.
const VALIDATION_YEAR: i32 = 2000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { month: u32, day: u32 },

    #[error("Unable to parse date {0:?}, expected YYYY-MM-DD")]
    Unparseable(String),

    #[error("No date configured")]
    Missing,

    #[error("No occurrence after {after} within the supported calendar range")]
    OutOfRange { after: NaiveDate },
}

/// A month/day pair that repeats every year, such as a birthday.
///
/// Feb 29 is accepted. In years without one the date is observed on Feb 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurringDate {
    month: u32,
    day: u32,
    origin_year: Option<i32>,
}

impl RecurringDate {
    pub fn new(month: u32, day: u32, origin_year: Option<i32>) -> Result<Self, DateError> {
        if NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).is_none() {
            return Err(DateError::InvalidDate { month, day });
        }

        Ok(Self {
            month,
            day,
            origin_year,
        })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
            origin_year: Some(date.year()),
        }
    }

    /// Parses the birth date string kept in a user profile.
    ///
    /// Absent or blank values are not an error: they mean the user has not
    /// configured a date yet.
    pub fn parse_profile(value: Option<&str>) -> Result<Option<Self>, DateError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }

    pub fn require(value: Option<Self>) -> Result<Self, DateError> {
        value.ok_or(DateError::Missing)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn origin_year(&self) -> Option<i32> {
        self.origin_year
    }

    pub fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// The date this anniversary is observed on in `year`.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).or_else(|| {
            if self.is_leap_day() {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// Completed years since the origin year as of `date`.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let origin_year = self.origin_year?;
        let occurrence = self.occurrence_in(date.year())?;

        let mut years = date.year() - origin_year;
        if date < occurrence {
            years -= 1;
        }

        u32::try_from(years).ok()
    }
}

impl FromStr for RecurringDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || DateError::Unparseable(s.to_string());
        let trimmed = s.trim();

        let mut parts = trimmed.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(unparseable());
        };

        let is_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_digits(year, 4) || !is_digits(month, 2) || !is_digits(day, 2) {
            return Err(unparseable());
        }

        let year: i32 = year.parse().map_err(|_| unparseable())?;
        let month: u32 = month.parse().map_err(|_| unparseable())?;
        let day: u32 = day.parse().map_err(|_| unparseable())?;

        let date = Self::new(month, day, Some(year))?;

        // Feb 29 of a non-leap year cannot have been a real birth date.
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(DateError::InvalidDate { month, day });
        }

        Ok(date)
    }
}

impl fmt::Display for RecurringDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin_year {
            Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
            None => write!(f, "{:02}-{:02}", self.month, self.day),
        }
    }
}
