//! Budget CLI commands

use clap::Subcommand;

use crate::display::{format_budget_table, month_name};
use crate::error::ExpenseResult;
use crate::models::month::parse_year_month;
use crate::models::{Money, MonthKey};
use crate::services::{AlwaysConfirm, BudgetService, Confirm, SetOutcome};
use crate::storage::Storage;

use super::confirm::StdinConfirm;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly budget ceiling
    Set {
        /// Month for the budget (YYYY-MM)
        #[arg(short, long)]
        date: String,
        /// Amount for the budget
        #[arg(short, long)]
        amount: f64,
        /// Overwrite an existing budget without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete the budget for a month
    Delete {
        /// Month of the budget to delete (YYYY-MM)
        #[arg(short, long)]
        date: String,
    },

    /// View budgets with their spend so far
    View {
        /// Show the current month's budget
        #[arg(long, conflicts_with_all = ["all", "date"])]
        current: bool,
        /// Show all budgets
        #[arg(long, conflicts_with = "date")]
        all: bool,
        /// Show budgets for a month (YYYY-MM) or year (YYYY)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { date, amount, yes } => {
            let key: MonthKey = date.parse()?;
            let amount = Money::from_f64(amount)?;

            let mut stdin = StdinConfirm;
            let mut always = AlwaysConfirm;
            let confirm: &mut dyn Confirm = if yes { &mut always } else { &mut stdin };

            match service.set(key, amount, confirm)? {
                SetOutcome::Created => {
                    println!("Budget of ${} set for {}.", amount, key)
                }
                SetOutcome::Replaced { previous } => {
                    println!("Budget for {} updated from ${} to ${}.", key, previous, amount)
                }
                SetOutcome::Declined { existing } => {
                    println!("Budget for {} left at ${}.", key, existing)
                }
            }
        }

        BudgetCommands::Delete { date } => {
            let key: MonthKey = date.parse()?;
            if service.delete(key)? {
                println!("Budget for {} has been deleted.", key);
            } else {
                println!("No budget found for {}.", key);
            }
        }

        BudgetCommands::View { current, all, date } => {
            handle_view(storage, &service, current, all, date)?;
        }
    }

    Ok(())
}

fn handle_view(
    storage: &Storage,
    service: &BudgetService<'_>,
    current: bool,
    all: bool,
    date: Option<String>,
) -> ExpenseResult<()> {
    if storage.budgets.is_empty()? {
        println!("No budgets found.");
        return Ok(());
    }

    if !current && !all && date.is_none() {
        println!("Please specify an option: --current, --all, or --date 'YYYY-MM'/'YYYY'.");
        return Ok(());
    }

    if let Some(date) = date {
        let (year, month) = parse_year_month(&date)?;

        match month {
            // Whole year
            None => {
                let rows: Vec<_> = service
                    .overview()?
                    .into_iter()
                    .filter(|(key, _, _)| key.year == year)
                    .collect();
                if rows.is_empty() {
                    println!("No budgets found for the year {}.", year);
                } else {
                    print!("{}", format_budget_table(&rows, &format!("Budgets for {}", year)));
                }
            }
            // Single month
            Some(month) => {
                let key = MonthKey::new(year, month)?;
                print_single_month(service, key)?;
            }
        }
        return Ok(());
    }

    if current {
        let today = chrono::Local::now().date_naive();
        print_single_month(service, MonthKey::for_date(today))?;
        return Ok(());
    }

    // --all
    let rows = service.overview()?;
    print!("{}", format_budget_table(&rows, "All Budgets"));
    Ok(())
}

fn print_single_month(service: &BudgetService<'_>, key: MonthKey) -> ExpenseResult<()> {
    let rows: Vec<_> = service
        .overview()?
        .into_iter()
        .filter(|(k, _, _)| *k == key)
        .collect();

    if rows.is_empty() {
        println!("No budget found for {}.", key);
    } else {
        let title = format!("Budget for {} ({})", key, month_name(key.month));
        print!("{}", format_budget_table(&rows, &title));
    }
    Ok(())
}
