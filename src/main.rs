use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_budget_command, handle_delete, handle_export, handle_list, handle_summary,
    handle_update, AddArgs, BudgetCommands, DeleteArgs, ExportArgs, ListArgs, SummaryArgs,
    UpdateArgs,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Track personal spending from the command line: record expenses \
                  into a flat CSV store, set monthly budget ceilings, and produce \
                  filtered summaries and exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// Update an existing expense by ID
    Update(UpdateArgs),

    /// Delete an expense by ID, or all expenses
    Delete(DeleteArgs),

    /// List and filter expenses
    List(ListArgs),

    /// Show a summary of expenses, with optional filters
    Summary(SummaryArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export expenses to a CSV or JSON file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&storage, args)?,
        Some(Commands::Update(args)) => handle_update(&storage, args)?,
        Some(Commands::Delete(args)) => handle_delete(&storage, args)?,
        Some(Commands::List(args)) => handle_list(&storage, args)?,
        Some(Commands::Summary(args)) => handle_summary(&storage, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Export(args)) => handle_export(&storage, args)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense store:  {}", paths.expenses_file().display());
            println!("Budget ledger:  {}", paths.budgets_file().display());
            println!("Exports:        {}", paths.exports_dir().display());
            println!();
            println!("Schema version: {}", settings.schema_version);
        }
        None => {
            println!("Expense Tracker - Personal spending from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add --category groceries --amount 12.50' to record an expense.");
        }
    }

    Ok(())
}
