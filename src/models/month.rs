//! Month key model
//!
//! Budget ceilings are keyed by calendar month. A [`MonthKey`] displays and
//! parses in "YYYY-MM" form and orders chronologically.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// Earliest year accepted for budget months.
///
/// The year policy is 2000 through the current year + 10; call sites in the
/// tracker's history disagreed (1900-2100 in places), this is the one
/// authoritative bound now.
pub const MIN_BUDGET_YEAR: i32 = 2000;

/// Years beyond the current year accepted for budget months
pub const BUDGET_YEAR_HEADROOM: i32 = 10;

/// A calendar month ("YYYY-MM") used to key budget ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> ExpenseResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::validation(
                "month",
                "the month must be between 1 and 12",
            ));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Validate the year policy for budget operations, relative to `today`
    pub fn validate_year(&self, today: NaiveDate) -> ExpenseResult<()> {
        let max_year = today.year() + BUDGET_YEAR_HEADROOM;
        if !(MIN_BUDGET_YEAR..=max_year).contains(&self.year) {
            return Err(ExpenseError::validation(
                "date",
                format!("the year must be between {} and {}", MIN_BUDGET_YEAR, max_year),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ExpenseError;

    /// Parse a "YYYY-MM" string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ExpenseError::validation(
                "date",
                format!("'{}' is not a valid month. Use 'YYYY-MM' format.", s),
            )
        };

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

// Serializes in its "YYYY-MM" display form.
impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a "YYYY" or "YYYY-MM" filter argument into a year and optional month
pub fn parse_year_month(s: &str) -> ExpenseResult<(i32, Option<u32>)> {
    let s = s.trim();
    match s.len() {
        4 => {
            let year: i32 = s.parse().map_err(|_| {
                ExpenseError::validation(
                    "date",
                    format!("'{}' is not a valid year. Use 'YYYY' or 'YYYY-MM'.", s),
                )
            })?;
            Ok((year, None))
        }
        7 => {
            let key: MonthKey = s.parse()?;
            Ok((key.year, Some(key.month)))
        }
        _ => Err(ExpenseError::validation(
            "date",
            format!("'{}' is not a valid date filter. Use 'YYYY' or 'YYYY-MM'.", s),
        )),
    }
}
