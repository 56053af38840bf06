//! Expense CLI commands
//!
//! Handlers for add, update, delete, list and summary. These parse and
//! validate the raw flag values, call into the services, and print the
//! formatted results.

use chrono::NaiveDate;
use clap::Args;

use crate::display::{
    format_breakdown, format_budget_status, format_expense_details, format_expense_table,
    format_skipped_rows, format_update_summary, describe_filter, show_breakdown,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::month::parse_year_month;
use crate::models::Money;
use crate::services::{
    aggregate, BudgetService, Confirm, DeleteAllOutcome, ExpenseFilter, ExpenseService,
    ExpenseUpdate, NewExpense,
};
use crate::storage::Storage;

use super::confirm::StdinConfirm;
use crate::services::AlwaysConfirm;

/// Arguments for `expenses add`
#[derive(Args)]
pub struct AddArgs {
    /// Category of the expense
    #[arg(short, long)]
    pub category: String,

    /// Expense description (3-60 characters)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Amount of the expense
    #[arg(short, long)]
    pub amount: f64,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `expenses update`
#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the expense to update
    #[arg(short, long)]
    pub id: u32,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<f64>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Permit a date in the future
    #[arg(long)]
    pub allow_future: bool,
}

/// Arguments for `expenses delete`
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the expense to delete
    #[arg(short, long)]
    pub id: Option<u32>,

    /// Delete all expenses
    #[arg(long, conflicts_with = "id")]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `expenses list`
#[derive(Args)]
pub struct ListArgs {
    /// Filter by expense category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter expenses from this date onwards (YYYY-MM-DD)
    #[arg(long = "from")]
    pub start_date: Option<String>,

    /// Filter expenses up to this date (YYYY-MM-DD)
    #[arg(long = "to")]
    pub end_date: Option<String>,

    /// Show expenses above or equal to this amount
    #[arg(long = "min")]
    pub min_amount: Option<f64>,

    /// Show expenses below or equal to this amount
    #[arg(long = "max")]
    pub max_amount: Option<f64>,
}

/// Arguments for `expenses summary`
#[derive(Args)]
pub struct SummaryArgs {
    /// Filter by year (YYYY) or year and month (YYYY-MM)
    #[arg(long, conflicts_with_all = ["month", "year"])]
    pub date: Option<String>,

    /// Filter by month number (1-12); the year defaults to the current one
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Filter by year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Filter by a specific category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `expenses add`
pub fn handle_add(storage: &Storage, args: AddArgs) -> ExpenseResult<()> {
    let new = NewExpense {
        category: args.category.parse()?,
        description: args.description,
        amount: Money::from_f64(args.amount)?,
        date: args.date.as_deref().map(parse_full_date).transpose()?,
    };

    let service = ExpenseService::new(storage);
    let (expense, status) = service.add(new)?;

    println!("Expense added successfully:");
    print!("{}", format_expense_details(&expense));
    if let Some(message) = format_budget_status(&status) {
        println!("{}", message);
    }
    Ok(())
}

/// Handle `expenses update`
pub fn handle_update(storage: &Storage, args: UpdateArgs) -> ExpenseResult<()> {
    let update = ExpenseUpdate {
        date: args.date.as_deref().map(parse_full_date).transpose()?,
        amount: args.amount.map(Money::from_f64).transpose()?,
        category: args.category.as_deref().map(str::parse).transpose()?,
        description: args.description,
        allow_future: args.allow_future,
    };

    let service = ExpenseService::new(storage);
    let (outcome, status) = service.update(args.id, update)?;

    println!("Expense with ID {} updated successfully:", args.id);
    print!("{}", format_update_summary(&outcome));
    if let Some(message) = format_budget_status(&status) {
        println!("{}", message);
    }
    Ok(())
}

/// Handle `expenses delete`
pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    if args.all {
        let mut stdin = StdinConfirm;
        let mut always = AlwaysConfirm;
        let confirm: &mut dyn Confirm = if args.yes { &mut always } else { &mut stdin };

        match service.delete_all(confirm)? {
            DeleteAllOutcome::Cleared(count) => {
                println!("All {} expenses have been deleted successfully.", count)
            }
            DeleteAllOutcome::Cancelled => println!("Deletion cancelled."),
            DeleteAllOutcome::Empty => println!("No expenses found. Nothing to delete."),
        }
        return Ok(());
    }

    let id = args.id.ok_or_else(|| {
        ExpenseError::validation("id", "provide --id <ID> or --all to delete expenses")
    })?;

    if service.delete(id)? {
        println!("Expense with ID {} has been deleted successfully.", id);
    } else {
        println!("No expense found with ID {}.", id);
    }
    Ok(())
}

/// Handle `expenses list`
pub fn handle_list(storage: &Storage, args: ListArgs) -> ExpenseResult<()> {
    if storage.expenses.is_empty()? {
        println!("No expenses recorded.");
        return Ok(());
    }

    let filter = ExpenseFilter {
        category: args.category.as_deref().map(str::parse).transpose()?,
        start_date: args.start_date.as_deref().map(parse_full_date).transpose()?,
        end_date: args.end_date.as_deref().map(parse_full_date).transpose()?,
        min_amount: args.min_amount.map(Money::from_f64).transpose()?,
        max_amount: args.max_amount.map(Money::from_f64).transpose()?,
        ..Default::default()
    };

    report_skipped(storage)?;

    let service = ExpenseService::new(storage);
    let expenses = service.list(&filter)?;

    if expenses.is_empty() {
        println!("No expenses matched the given filters.");
        return Ok(());
    }

    let title = if filter.is_empty() { "Expenses" } else { "Filtered Expenses" };
    print!("{}", format_expense_table(&expenses, title));
    Ok(())
}

/// Handle `expenses summary`
pub fn handle_summary(storage: &Storage, args: SummaryArgs) -> ExpenseResult<()> {
    if storage.expenses.is_empty()? && storage.expenses.skipped_rows()?.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    let (year, month) = match &args.date {
        Some(date) => {
            let (year, month) = parse_year_month(date)?;
            (Some(year), month)
        }
        None => (args.year, validate_month(args.month)?),
    };

    let filter = ExpenseFilter {
        year,
        month,
        category: args.category.as_deref().map(str::parse).transpose()?,
        ..Default::default()
    }
    .normalize(chrono::Local::now().date_naive());

    report_skipped(storage)?;

    let expenses = storage.expenses.get_all()?;
    let summary = aggregate(&expenses, &filter);

    if filter.is_empty() {
        println!("Total expenses: ${}", summary.total);
        return Ok(());
    }

    // Amounts are always positive, so a zero subtotal means nothing matched
    if summary.filtered.is_zero() {
        println!("No expenses found for the specified filters.");
        return Ok(());
    }

    println!(
        "Total expenses for {}: ${}",
        describe_filter(&filter),
        summary.filtered
    );

    // Budget standing when a single month is targeted
    if let (Some(year), Some(month)) = (filter.year, filter.month) {
        let key = crate::models::MonthKey::new(year, month)?;
        if let Some(message) = format_budget_status(&BudgetService::new(storage).status(key)?) {
            println!("{}", message);
        }
    }

    if show_breakdown(&filter) {
        print!("{}", format_breakdown(&summary));
    }
    Ok(())
}

/// Parse a strict YYYY-MM-DD date argument
fn parse_full_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::validation(
            "date",
            format!("invalid date '{}'. Use YYYY-MM-DD and ensure the values are valid.", s),
        )
    })
}

fn validate_month(month: Option<u32>) -> ExpenseResult<Option<u32>> {
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::validation(
                "month",
                "the month must be between 1 and 12",
            ));
        }
    }
    Ok(month)
}

fn report_skipped(storage: &Storage) -> ExpenseResult<()> {
    let skipped = storage.expenses.skipped_rows()?;
    if !skipped.is_empty() {
        print!("{}", format_skipped_rows(&skipped));
    }
    Ok(())
}
