//! Business logic layer
//!
//! Stateless services over the storage layer: the filter/aggregation engine,
//! the expense record service, and the budget ledger service.

pub mod aggregation;
pub mod budget;
pub mod expense;

pub use aggregation::{aggregate, AggregateSummary, ExpenseFilter};
pub use budget::{BudgetService, BudgetStatus, SetOutcome};
pub use expense::{DeleteAllOutcome, ExpenseService, ExpenseUpdate, NewExpense, UpdateOutcome};

/// Capability for asking the user a yes/no question
///
/// The services never touch the terminal themselves; the CLI supplies a
/// blocking stdin prompt and tests supply scripted answers.
pub trait Confirm {
    /// Ask the question; `true` means yes
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// A [`Confirm`] that always answers yes (used by `--yes` flags and tests)
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
