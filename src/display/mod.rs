//! Plain-text formatting for terminal output
//!
//! The services hand back plain values; everything the user reads is
//! rendered here and printed by the CLI handlers.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::{format_budget_status, format_budget_table};
pub use expense::{
    format_expense_details, format_expense_table, format_skipped_rows, format_update_summary,
};
pub use summary::{describe_filter, format_breakdown, month_name, show_breakdown};
