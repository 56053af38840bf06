//! JSON export encoder

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::BudgetInfo;

/// JSON export document
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    expenses: &'a [Expense],
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a BudgetInfo>,
}

/// Write expenses (and optional budget information) as pretty-printed JSON
pub fn write_json_export<W: Write>(
    writer: &mut W,
    expenses: &[Expense],
    budget: Option<&BudgetInfo>,
) -> ExpenseResult<()> {
    let document = JsonExport { expenses, budget };

    serde_json::to_writer_pretty(&mut *writer, &document)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
