//! Budget ledger service
//!
//! Maintains monthly budget ceilings and derives a month's remaining or
//! exceeded amount from the aggregation engine.

use chrono::{Local, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{Money, MonthKey};
use crate::storage::Storage;

use super::aggregation::{aggregate, ExpenseFilter};
use super::Confirm;

/// Result of setting a budget ceiling
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    /// No ceiling existed for the month
    Created,
    /// An existing ceiling was overwritten after confirmation
    Replaced { previous: Money },
    /// The caller declined the overwrite; the old value stands
    Declined { existing: Money },
}

/// Budget standing for a month, reported after every add/update
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetStatus {
    /// No ceiling is set for the month
    NotSet,
    /// Spend is at or under the ceiling
    Within {
        ceiling: Money,
        spent: Money,
        remaining: Money,
    },
    /// Spend is over the ceiling
    Exceeded {
        ceiling: Money,
        spent: Money,
        overage: Money,
    },
}

/// Service for budget ceiling management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set or overwrite the ceiling for a month
    ///
    /// Overwriting an existing ceiling asks the caller-supplied [`Confirm`]
    /// capability first; declining leaves the old value in place and nothing
    /// is written.
    pub fn set(
        &self,
        key: MonthKey,
        ceiling: Money,
        confirm: &mut dyn Confirm,
    ) -> ExpenseResult<SetOutcome> {
        ceiling.validate_budget_amount()?;
        key.validate_year(today())?;

        if let Some(existing) = self.storage.budgets.get(key)? {
            let prompt = format!(
                "A budget of ${} is already set for {}. Overwrite it? (y/n)",
                existing, key
            );
            if !confirm.confirm(&prompt) {
                return Ok(SetOutcome::Declined { existing });
            }
            self.storage.budgets.set(key, ceiling)?;
            self.storage.budgets.save()?;
            return Ok(SetOutcome::Replaced { previous: existing });
        }

        self.storage.budgets.set(key, ceiling)?;
        self.storage.budgets.save()?;
        Ok(SetOutcome::Created)
    }

    /// Delete the ceiling for a month; `false` means there was none
    pub fn delete(&self, key: MonthKey) -> ExpenseResult<bool> {
        if self.storage.budgets.remove(key)?.is_none() {
            return Ok(false);
        }
        self.storage.budgets.save()?;
        Ok(true)
    }

    /// The month's actual spend, via the aggregation engine
    pub fn spent(&self, key: MonthKey) -> ExpenseResult<Money> {
        let expenses = self.storage.expenses.get_all()?;
        let filter = ExpenseFilter::for_month(key.year, key.month);
        Ok(aggregate(&expenses, &filter).filtered)
    }

    /// `ceiling - spent` for the month, or `None` when no ceiling is set
    pub fn remaining(&self, key: MonthKey) -> ExpenseResult<Option<Money>> {
        match self.storage.budgets.get(key)? {
            Some(ceiling) => Ok(Some(ceiling - self.spent(key)?)),
            None => Ok(None),
        }
    }

    /// The month's budget standing
    ///
    /// `Exceeded` exactly when spend is strictly over the ceiling.
    pub fn status(&self, key: MonthKey) -> ExpenseResult<BudgetStatus> {
        let Some(ceiling) = self.storage.budgets.get(key)? else {
            return Ok(BudgetStatus::NotSet);
        };

        let spent = self.spent(key)?;
        if spent > ceiling {
            Ok(BudgetStatus::Exceeded {
                ceiling,
                spent,
                overage: spent - ceiling,
            })
        } else {
            Ok(BudgetStatus::Within {
                ceiling,
                spent,
                remaining: ceiling - spent,
            })
        }
    }

    /// All ledger entries with their spend, most recent month first
    pub fn overview(&self) -> ExpenseResult<Vec<(MonthKey, Money, Money)>> {
        let mut rows = Vec::new();
        for (key, ceiling) in self.storage.budgets.entries()? {
            rows.push((key, ceiling, self.spent(key)?));
        }
        Ok(rows)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Category, Expense};
    use crate::services::AlwaysConfirm;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_expense(storage: &Storage, id: u32, date: &str, cents: i64) {
        storage
            .expenses
            .upsert(Expense {
                id,
                date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                amount: Money::from_cents(cents),
                category: Category::Groceries,
                description: "...".to_string(),
            })
            .unwrap();
    }

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    struct DeclineConfirm;
    impl Confirm for DeclineConfirm {
        fn confirm(&mut self, _prompt: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_set_creates_then_confirms_overwrite() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let outcome = service
            .set(key("2025-01"), Money::from_cents(20000), &mut AlwaysConfirm)
            .unwrap();
        assert_eq!(outcome, SetOutcome::Created);

        let outcome = service
            .set(key("2025-01"), Money::from_cents(30000), &mut AlwaysConfirm)
            .unwrap();
        assert_eq!(
            outcome,
            SetOutcome::Replaced {
                previous: Money::from_cents(20000)
            }
        );
        assert_eq!(
            storage.budgets.get(key("2025-01")).unwrap(),
            Some(Money::from_cents(30000))
        );
    }

    #[test]
    fn test_declined_overwrite_keeps_old_value() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set(key("2025-01"), Money::from_cents(20000), &mut AlwaysConfirm)
            .unwrap();
        let outcome = service
            .set(key("2025-01"), Money::from_cents(99900), &mut DeclineConfirm)
            .unwrap();

        assert_eq!(
            outcome,
            SetOutcome::Declined {
                existing: Money::from_cents(20000)
            }
        );
        assert_eq!(
            storage.budgets.get(key("2025-01")).unwrap(),
            Some(Money::from_cents(20000))
        );
    }

    #[test]
    fn test_set_rejects_bad_amounts_and_years() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service
            .set(key("2025-01"), Money::zero(), &mut AlwaysConfirm)
            .is_err());
        assert!(service
            .set(key("1999-01"), Money::from_cents(100), &mut AlwaysConfirm)
            .is_err());
        assert!(storage.budgets.is_empty().unwrap());
    }

    #[test]
    fn test_delete_missing_is_informational() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(!service.delete(key("2025-01")).unwrap());

        service
            .set(key("2025-01"), Money::from_cents(100), &mut AlwaysConfirm)
            .unwrap();
        assert!(service.delete(key("2025-01")).unwrap());
        assert!(!service.delete(key("2025-01")).unwrap());
    }

    #[test]
    fn test_remaining_is_ceiling_minus_spend() {
        let (_temp_dir, storage) = create_test_storage();
        add_expense(&storage, 1, "2025-01-07", 5000);
        add_expense(&storage, 2, "2025-01-20", 2500);
        add_expense(&storage, 3, "2025-02-01", 9999);

        let service = BudgetService::new(&storage);
        service
            .set(key("2025-01"), Money::from_cents(20000), &mut AlwaysConfirm)
            .unwrap();

        assert_eq!(service.spent(key("2025-01")).unwrap(), Money::from_cents(7500));
        assert_eq!(
            service.remaining(key("2025-01")).unwrap(),
            Some(Money::from_cents(12500))
        );
        assert_eq!(service.remaining(key("2025-03")).unwrap(), None);
    }

    #[test]
    fn test_status_exceeded_by_50() {
        let (_temp_dir, storage) = create_test_storage();
        add_expense(&storage, 1, "2025-01-07", 25000);

        let service = BudgetService::new(&storage);
        service
            .set(key("2025-01"), Money::from_cents(20000), &mut AlwaysConfirm)
            .unwrap();

        assert_eq!(
            service.status(key("2025-01")).unwrap(),
            BudgetStatus::Exceeded {
                ceiling: Money::from_cents(20000),
                spent: Money::from_cents(25000),
                overage: Money::from_cents(5000),
            }
        );
    }

    #[test]
    fn test_status_at_ceiling_is_within() {
        let (_temp_dir, storage) = create_test_storage();
        add_expense(&storage, 1, "2025-01-07", 20000);

        let service = BudgetService::new(&storage);
        service
            .set(key("2025-01"), Money::from_cents(20000), &mut AlwaysConfirm)
            .unwrap();

        assert_eq!(
            service.status(key("2025-01")).unwrap(),
            BudgetStatus::Within {
                ceiling: Money::from_cents(20000),
                spent: Money::from_cents(20000),
                remaining: Money::zero(),
            }
        );
    }

    #[test]
    fn test_status_without_ceiling_is_not_set() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert_eq!(service.status(key("2025-01")).unwrap(), BudgetStatus::NotSet);
    }
}
