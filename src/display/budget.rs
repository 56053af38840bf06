//! Budget display formatting

use crate::models::{Money, MonthKey};
use crate::services::BudgetStatus;

/// A budget table row: month, ceiling, spend so far
pub type BudgetRow = (MonthKey, Money, Money);

/// Format budget entries as a table with their spend and difference
pub fn format_budget_table(rows: &[BudgetRow], title: &str) -> String {
    if rows.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&format!(
        "{:9}  {:>14}  {:>16}  {:>12}\n",
        "Date", "Budget Total", "Current Expenses", "Difference"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for (key, ceiling, spent) in rows {
        let difference = *ceiling - *spent;
        output.push_str(&format!(
            "{:9}  {:>14}  {:>16}  {:>12}\n",
            key.to_string(),
            format!("${}", ceiling),
            format!("${}", spent),
            format!("${}", difference),
        ));
    }

    output
}

/// Format the budget warning/informational message shown after a mutation
///
/// Returns `None` when no budget is set for the month (silent case).
pub fn format_budget_status(status: &BudgetStatus) -> Option<String> {
    match status {
        BudgetStatus::NotSet => None,
        BudgetStatus::Within {
            ceiling,
            spent,
            remaining,
        } => Some(format!(
            "Monthly budget: ${}. Current expenses: ${}. Remaining budget: ${}.",
            ceiling, spent, remaining
        )),
        BudgetStatus::Exceeded {
            ceiling,
            spent,
            overage,
        } => Some(format!(
            "Warning: You have exceeded your monthly budget of ${} with a total expense of ${} (over by ${}).",
            ceiling, spent, overage
        )),
    }
}
