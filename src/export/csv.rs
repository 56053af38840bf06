//! CSV export encoder

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::expenses::FIELD_NAMES;

use super::BudgetInfo;

/// Write expenses (and optional budget information) as CSV
pub fn write_csv_export<W: Write>(
    writer: &mut W,
    expenses: &[Expense],
    budget: Option<&BudgetInfo>,
) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    csv_writer
        .write_record(FIELD_NAMES)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.amount.to_string(),
                expense.category.to_string(),
                expense.description.clone(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writer
        .write_all(&bytes)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    // Budget section appended after the expense rows
    if let Some(info) = budget {
        writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
        writeln!(writer, "Budget Month,Budget Total,Current Expenses,Remaining")
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        writeln!(
            writer,
            "{},{},{},{}",
            info.month, info.ceiling, info.spent, info.remaining
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
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
    fn test_csv_export_rows() {
        let mut buffer = Vec::new();
        write_csv_export(&mut buffer, &[sample()], None).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("ID,Date,Amount,Category,Description\n"));
        assert!(text.contains("1,2025-01-07,50.00,Groceries,weekly shop\n"));
        assert!(!text.contains("Budget Month"));
    }

    #[test]
    fn test_csv_export_with_budget_section() {
        let info = BudgetInfo {
            month: "2025-01".parse().unwrap(),
            ceiling: Money::from_cents(20000),
            spent: Money::from_cents(5000),
            remaining: Money::from_cents(15000),
        };

        let mut buffer = Vec::new();
        write_csv_export(&mut buffer, &[sample()], Some(&info)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Budget Month,Budget Total,Current Expenses,Remaining"));
        assert!(text.contains("2025-01,200.00,50.00,150.00"));
    }
}
