//! Export CLI command

use std::fs::{self, File};
use std::io::BufWriter;

use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{
    generate_unique_filename, write_csv_export, write_json_export, BudgetInfo, ExportFormat,
};
use crate::models::month::parse_year_month;
use crate::models::MonthKey;
use crate::services::{BudgetService, BudgetStatus, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Arguments for `expenses export`
#[derive(Args)]
pub struct ExportArgs {
    /// Name of the exported file (e.g. expenses.csv, expenses.json)
    #[arg(short, long)]
    pub output: String,

    /// Filter by year (YYYY) or year and month (YYYY-MM)
    #[arg(long)]
    pub date: Option<String>,

    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Include budget information; requires --date with year and month
    #[arg(long)]
    pub include_budget: bool,
}

/// Handle `expenses export`
pub fn handle_export(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let exports_dir = storage.paths().exports_dir();
    fs::create_dir_all(&exports_dir)
        .map_err(|e| ExpenseError::Io(format!("Failed to create exports directory: {}", e)))?;

    let output_path = exports_dir.join(&args.output);
    let format = ExportFormat::from_path(&output_path)?;

    let (year, month) = match &args.date {
        Some(date) => {
            let (year, month) = parse_year_month(date)?;
            (Some(year), month)
        }
        None => (None, None),
    };

    if args.include_budget && (year.is_none() || month.is_none()) {
        return Err(ExpenseError::validation(
            "include-budget",
            "--include-budget requires --date with both year and month specified",
        ));
    }

    let filter = ExpenseFilter {
        year,
        month,
        category: args.category.as_deref().map(str::parse).transpose()?,
        ..Default::default()
    };

    let expenses = ExpenseService::new(storage).list(&filter)?;
    if expenses.is_empty() {
        println!("No expenses match the specified filters.");
        return Ok(());
    }

    // Budget information for the selected month, if any
    let budget = if let (true, Some(year), Some(month)) = (args.include_budget, year, month) {
        let key = MonthKey::new(year, month)?;
        match BudgetService::new(storage).status(key)? {
            BudgetStatus::NotSet => {
                println!(
                    "No budget found for {}. Exporting expenses without budget information.",
                    key
                );
                None
            }
            BudgetStatus::Within {
                ceiling,
                spent,
                remaining,
            } => Some(BudgetInfo {
                month: key,
                ceiling,
                spent,
                remaining,
            }),
            BudgetStatus::Exceeded {
                ceiling,
                spent,
                overage,
            } => Some(BudgetInfo {
                month: key,
                ceiling,
                spent,
                remaining: -overage,
            }),
        }
    } else {
        None
    };

    let output_path = generate_unique_filename(&output_path);
    let file = File::create(&output_path)
        .map_err(|e| ExpenseError::Export(format!("Failed to create {}: {}", output_path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => write_csv_export(&mut writer, &expenses, budget.as_ref())?,
        ExportFormat::Json => write_json_export(&mut writer, &expenses, budget.as_ref())?,
    }

    println!(
        "Exported {} expenses to {}.",
        expenses.len(),
        output_path.display()
    );
    Ok(())
}
