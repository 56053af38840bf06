//! Export encoders for filtered expense data
//!
//! Supports CSV and JSON output, chosen by the output file extension.

pub mod csv;
pub mod json;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};

pub use self::csv::write_csv_export;
pub use self::json::write_json_export;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Determine the format from an output file name
    pub fn from_path(path: &Path) -> ExpenseResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ExpenseError::validation(
                "output",
                "unsupported output format. Supported formats are '.csv' and '.json'",
            )),
        }
    }
}

/// Budget information embedded in an export (with `--include-budget`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInfo {
    pub month: MonthKey,
    pub ceiling: Money,
    pub spent: Money,
    pub remaining: Money,
}

/// Resolve a non-colliding output path by appending `_1`, `_2`, ...
pub fn generate_unique_filename(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    for suffix in 1.. {
        let candidate = parent.join(format!("{}_{}.{}", stem, suffix, extension));
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!()
}
