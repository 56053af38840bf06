//! Expense record model
//!
//! A single recorded expense: sequential id, calendar date, category,
//! free-text description and a positive amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::category::Category;
use super::money::Money;
use super::month::MonthKey;

/// Placeholder used when no description is supplied
pub const DEFAULT_DESCRIPTION: &str = "...";

/// Minimum description length in characters
pub const MIN_DESCRIPTION_LEN: usize = 3;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 60;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned as max(existing ids) + 1
    pub id: u32,

    /// Date the expense was incurred
    pub date: NaiveDate,

    /// Amount spent, always positive
    pub amount: Money,

    /// Expense category
    pub category: Category,

    /// Free-text description (3-60 characters, "..." when omitted)
    pub description: String,
}

impl Expense {
    /// The month this expense counts against
    pub fn month(&self) -> MonthKey {
        MonthKey::for_date(self.date)
    }
}

/// Validate a description, applying the placeholder default when omitted
pub fn validate_description(description: Option<&str>) -> ExpenseResult<String> {
    let description = match description {
        None => return Ok(DEFAULT_DESCRIPTION.to_string()),
        Some(d) if d.is_empty() => return Ok(DEFAULT_DESCRIPTION.to_string()),
        Some(d) => d,
    };

    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LEN {
        return Err(ExpenseError::validation(
            "description",
            format!("must be at least {} characters", MIN_DESCRIPTION_LEN),
        ));
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(ExpenseError::validation(
            "description",
            format!("must be no more than {} characters", MAX_DESCRIPTION_LEN),
        ));
    }

    Ok(description.to_string())
}

/// Validate an expense date against `today`
///
/// Future dates are rejected unless `allow_future` is set (the update command
/// exposes this as an explicit override).
pub fn validate_date(date: NaiveDate, today: NaiveDate, allow_future: bool) -> ExpenseResult<()> {
    if !allow_future && date > today {
        return Err(ExpenseError::validation(
            "date",
            "please enter a valid past or current date",
        ));
    }
    Ok(())
}
