//! CLI command definitions and handlers

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod export;

pub use budget::{handle_budget_command, BudgetCommands};
pub use confirm::StdinConfirm;
pub use expense::{
    handle_add, handle_delete, handle_list, handle_summary, handle_update, AddArgs, DeleteArgs,
    ListArgs, SummaryArgs, UpdateArgs,
};
pub use export::{handle_export, ExportArgs};
