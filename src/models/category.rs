//! Expense category model
//!
//! The valid categories form a closed set with a single authoritative
//! definition here. Parsing is case-normalizing: "groceries", "GROCERIES"
//! and "Groceries" all resolve to the same variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A fixed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Leisure,
    Electronics,
    Utilities,
    Clothing,
    Health,
    Others,
}

impl Category {
    /// All valid categories, in display order
    pub const ALL: [Category; 7] = [
        Category::Groceries,
        Category::Leisure,
        Category::Electronics,
        Category::Utilities,
        Category::Clothing,
        Category::Health,
        Category::Others,
    ];

    /// The category name in its canonical capitalized form
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Leisure => "Leisure",
            Category::Electronics => "Electronics",
            Category::Utilities => "Utilities",
            Category::Clothing => "Clothing",
            Category::Health => "Health",
            Category::Others => "Others",
        }
    }

    /// Comma-separated list of valid category names, for error messages
    pub fn valid_options() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|c| c.name().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| {
                ExpenseError::validation(
                    "category",
                    format!(
                        "'{}' is not a valid category. The valid ones are: {}.",
                        s,
                        Self::valid_options()
                    ),
                )
            })
    }
}
