//! Filter & aggregation engine
//!
//! Pure functions over the in-memory record set: given zero or more filter
//! predicates (ANDed together), compute the unfiltered grand total, the
//! filtered subtotal, and a per-category breakdown.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Expense, Money};

/// Optional filter predicates applied to the record set
///
/// All dimensions are optional and combine with logical AND. Call
/// [`ExpenseFilter::normalize`] before matching to resolve a reversed date
/// range and a month given without a year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
}

impl ExpenseFilter {
    /// Filter restricted to a single calendar month
    pub fn for_month(year: i32, month: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            ..Self::default()
        }
    }

    /// Whether no filter dimension is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resolve implicit parts of the filter
    ///
    /// - A reversed `start/end` date range is swapped before comparing.
    /// - A month given without a year defaults to the current year, except
    ///   that a month chronologically after the current one resolves to last
    ///   year (so "what happened last November" works in January).
    pub fn normalize(mut self, today: NaiveDate) -> Self {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                self.start_date = Some(end);
                self.end_date = Some(start);
            }
        }

        if let (Some(month), None) = (self.month, self.year) {
            let mut year = today.year();
            if month > today.month() {
                year -= 1;
            }
            self.year = Some(year);
        }

        self
    }

    /// Whether an expense matches every supplied filter dimension
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_ignoring_category(expense)
            && self.category.map_or(true, |c| c == expense.category)
    }

    /// Whether an expense matches the date and amount dimensions only
    ///
    /// The per-category breakdown is computed against this, so that the
    /// breakdown covers all categories even when one is singled out.
    pub fn matches_ignoring_category(&self, expense: &Expense) -> bool {
        if let Some(year) = self.year {
            if expense.date.year() != year {
                return false;
            }
        }
        if let Some(month) = self.month {
            if expense.date.month() != month {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        true
    }
}

/// Aggregates produced by one pass over the record set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateSummary {
    /// Sum over all records, regardless of filters
    pub total: Money,

    /// Sum over records matching all supplied filters
    pub filtered: Money,

    /// Per-category subtotals over records matching the non-category filters
    pub breakdown: BTreeMap<Category, Money>,
}

/// Compute totals and the category breakdown in a single scan
///
/// Pure function: identical inputs always yield identical outputs. An empty
/// match produces a zero subtotal and an empty breakdown.
pub fn aggregate(expenses: &[Expense], filter: &ExpenseFilter) -> AggregateSummary {
    let mut summary = AggregateSummary::default();

    for expense in expenses {
        summary.total += expense.amount;

        if filter.matches_ignoring_category(expense) {
            *summary.breakdown.entry(expense.category).or_insert(Money::zero()) += expense.amount;

            if filter.category.map_or(true, |c| c == expense.category) {
                summary.filtered += expense.amount;
            }
        }
    }

    summary
}
