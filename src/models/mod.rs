//! Core data models for the expense tracker

pub mod category;
pub mod expense;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{Expense, DEFAULT_DESCRIPTION};
pub use money::{Money, MAX_AMOUNT};
pub use month::MonthKey;
