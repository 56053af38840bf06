//! Expense display formatting
//!
//! Plain-text tables and detail views for expense records. All functions
//! return strings; printing is left to the caller.

use crate::models::Expense;
use crate::services::UpdateOutcome;
use crate::storage::SkippedRow;

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], title: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&format!(
        "{:>6}  {:10}  {:>10}  {:12}  {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:>6}  {:10}  {:>10}  {:12}  {}\n",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            format!("${}", expense.amount),
            expense.category,
            truncate(&expense.description, 40)
        ));
    }

    output
}

/// Format the detail view shown after recording an expense
pub fn format_expense_details(expense: &Expense) -> String {
    format!(
        "- ID: {}\n- Date: {}\n- Amount: ${}\n- Category: '{}'\n- Description: '{}'\n",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.amount,
        expense.category,
        expense.description
    )
}

/// Format the field-by-field summary shown after an update
///
/// Changed fields show the old and new values; unchanged fields show the
/// current value.
pub fn format_update_summary(outcome: &UpdateOutcome) -> String {
    let before = &outcome.before;
    let after = &outcome.after;
    let mut output = String::new();

    if before.date != after.date {
        output.push_str(&format!(
            "- New Date: {} ---> {}\n",
            before.date.format("%Y-%m-%d"),
            after.date.format("%Y-%m-%d")
        ));
    } else {
        output.push_str(&format!("- Date: {}\n", after.date.format("%Y-%m-%d")));
    }

    if before.amount != after.amount {
        output.push_str(&format!("- New Amount: ${} ---> ${}\n", before.amount, after.amount));
    } else {
        output.push_str(&format!("- Amount: ${}\n", after.amount));
    }

    if before.category != after.category {
        output.push_str(&format!(
            "- New Category: '{}' ---> '{}'\n",
            before.category, after.category
        ));
    } else {
        output.push_str(&format!("- Category: '{}'\n", after.category));
    }

    if before.description != after.description {
        output.push_str(&format!(
            "- New Description: '{}' ---> '{}'\n",
            before.description, after.description
        ));
    } else {
        output.push_str(&format!("- Description: '{}'\n", after.description));
    }

    output
}

/// Format the skipped-row report emitted alongside aggregates
pub fn format_skipped_rows(skipped: &[SkippedRow]) -> String {
    let mut output = String::new();
    for row in skipped {
        output.push_str(&format!("Skipping row {} ({})\n", row.line, row.reason));
    }
    output
}

/// Truncate a string for display, appending an ellipsis when cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            amount: Money::from_cents(5000),
            category: Category::Groceries,
            description: "weekly shop".to_string(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "Expenses"), "No expenses found.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let output = format_expense_table(&[sample()], "Expenses");
        assert!(output.contains("2025-01-07"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("weekly shop"));
    }

    #[test]
    fn test_update_summary_marks_changes() {
        let before = sample();
        let mut after = before.clone();
        after.amount = Money::from_cents(7500);

        let output = format_update_summary(&UpdateOutcome { before, after });
        assert!(output.contains("New Amount: $50.00 ---> $75.00"));
        assert!(output.contains("- Category: 'Groceries'"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer text", 8), "a much …");
    }
}
