//! Expense service
//!
//! Business logic for recording, updating and deleting expenses. Every
//! mutation validates fully before touching the store, then rewrites it
//! wholesale, and reports the budget standing of the month it touched.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::{validate_date, validate_description};
use crate::models::{Category, Expense, Money};
use crate::storage::Storage;

use super::aggregation::ExpenseFilter;
use super::budget::{BudgetService, BudgetStatus};
use super::Confirm;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category: Category,
    pub description: Option<String>,
    pub amount: Money,
    /// Defaults to today when omitted; must not be in the future
    pub date: Option<NaiveDate>,
}

/// Partial update for an existing expense; only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
    /// Permit a date in the future
    pub allow_future: bool,
}

impl ExpenseUpdate {
    /// Whether no field was supplied
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

/// Before/after pair produced by a successful update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub before: Expense,
    pub after: Expense,
}

/// Result of a bulk delete
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteAllOutcome {
    /// All records removed
    Cleared(usize),
    /// The caller declined the confirmation
    Cancelled,
    /// There was nothing to delete
    Empty,
}

/// Service for expense record management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and report the month's budget standing
    pub fn add(&self, new: NewExpense) -> ExpenseResult<(Expense, BudgetStatus)> {
        new.amount.validate_expense_amount()?;
        let description = validate_description(new.description.as_deref())?;

        let today = today();
        let date = new.date.unwrap_or(today);
        validate_date(date, today, false)?;

        let expense = Expense {
            id: self.storage.expenses.next_id()?,
            date,
            amount: new.amount,
            category: new.category,
            description,
        };

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        let status = BudgetService::new(self.storage).status(expense.month())?;
        Ok((expense, status))
    }

    /// Update an existing expense in place
    ///
    /// At least one field must be supplied; unknown ids are `NotFound`.
    /// Reports the budget standing of the updated record's month.
    pub fn update(
        &self,
        id: u32,
        update: ExpenseUpdate,
    ) -> ExpenseResult<(UpdateOutcome, BudgetStatus)> {
        if id == 0 {
            return Err(ExpenseError::validation(
                "id",
                "must be a positive number greater than 0",
            ));
        }
        if update.is_empty() {
            return Err(ExpenseError::validation(
                "update",
                "provide at least one field to update (e.g. --date)",
            ));
        }

        let before = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        let mut after = before.clone();
        if let Some(date) = update.date {
            validate_date(date, today(), update.allow_future)?;
            after.date = date;
        }
        if let Some(amount) = update.amount {
            amount.validate_expense_amount()?;
            after.amount = amount;
        }
        if let Some(category) = update.category {
            after.category = category;
        }
        if let Some(description) = update.description {
            after.description = validate_description(Some(&description))?;
        }

        self.storage.expenses.upsert(after.clone())?;
        self.storage.expenses.save()?;

        let status = BudgetService::new(self.storage).status(after.month())?;
        Ok((UpdateOutcome { before, after }, status))
    }

    /// Delete one expense by id; `false` means it did not exist
    pub fn delete(&self, id: u32) -> ExpenseResult<bool> {
        if id == 0 {
            return Err(ExpenseError::validation(
                "id",
                "must be a positive number greater than 0",
            ));
        }
        if !self.storage.expenses.remove(id)? {
            return Ok(false);
        }
        self.storage.expenses.save()?;
        Ok(true)
    }

    /// Delete every expense after confirmation
    pub fn delete_all(&self, confirm: &mut dyn Confirm) -> ExpenseResult<DeleteAllOutcome> {
        if self.storage.expenses.is_empty()? {
            return Ok(DeleteAllOutcome::Empty);
        }
        if !confirm.confirm("Are you sure you want to delete all expenses? (y/n)") {
            return Ok(DeleteAllOutcome::Cancelled);
        }

        let count = self.storage.expenses.clear()?;
        self.storage.expenses.save()?;
        Ok(DeleteAllOutcome::Cleared(count))
    }

    /// List expenses matching a filter, in id order
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let filter = filter.clone().normalize(today());
        let expenses = self.storage.expenses.get_all()?;
        Ok(expenses.into_iter().filter(|e| filter.matches(e)).collect())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
