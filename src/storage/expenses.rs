//! Expense repository for the flat CSV store
//!
//! Loads the whole record set into memory, mutates it there, and rewrites
//! the file wholesale on save. Rows that fail to parse are skipped (and
//! reported), never fatal for the operation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};

use super::file_io::write_text_atomic;

/// Column order of the expense store
pub const FIELD_NAMES: [&str; 5] = ["ID", "Date", "Amount", "Category", "Description"];

/// A stored row that could not be parsed and was left out of the record set
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the CSV file
    pub line: u64,
    /// What was wrong with the row
    pub reason: String,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<u32, Expense>>,
    skipped: RwLock<Vec<SkippedRow>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            skipped: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file behaves as an empty store. Unparseable rows are
    /// collected into the skipped list instead of failing the load.
    pub fn load(&self) -> ExpenseResult<()> {
        let mut data = self.write_data()?;
        let mut skipped = self
            .skipped
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.clear();
        skipped.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        for (index, result) in reader.records().enumerate() {
            // Line 1 is the header
            let line = index as u64 + 2;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    skipped.push(SkippedRow {
                        line,
                        reason: format!("malformed row: {}", e),
                    });
                    continue;
                }
            };

            match parse_record(&record) {
                Ok(expense) => {
                    data.insert(expense.id, expense);
                }
                Err(reason) => skipped.push(SkippedRow { line, reason }),
            }
        }

        Ok(())
    }

    /// Save all expenses to disk, rewriting the file wholesale
    ///
    /// Rows are written in id order and the header is always present.
    pub fn save(&self) -> ExpenseResult<()> {
        let expenses = self.get_all()?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(FIELD_NAMES)
            .map_err(|e| ExpenseError::Storage(format!("Failed to write header: {}", e)))?;

        for expense in &expenses {
            writer
                .write_record([
                    expense.id.to_string(),
                    expense.date.format("%Y-%m-%d").to_string(),
                    expense.amount.to_string(),
                    expense.category.to_string(),
                    expense.description.clone(),
                ])
                .map_err(|e| ExpenseError::Storage(format!("Failed to write row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush rows: {}", e)))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ExpenseError::Storage(format!("Failed to encode rows: {}", e)))?;

        write_text_atomic(&self.path, &text)
    }

    /// Get an expense by id
    pub fn get(&self, id: u32) -> ExpenseResult<Option<Expense>> {
        Ok(self.read_data()?.get(&id).cloned())
    }

    /// Get all expenses, ordered by id
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        let data = self.read_data()?;
        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by_key(|e| e.id);
        Ok(expenses)
    }

    /// Insert or replace an expense
    pub fn upsert(&self, expense: Expense) -> ExpenseResult<()> {
        self.write_data()?.insert(expense.id, expense);
        Ok(())
    }

    /// Remove an expense by id, returning whether it was present
    pub fn remove(&self, id: u32) -> ExpenseResult<bool> {
        Ok(self.write_data()?.remove(&id).is_some())
    }

    /// Remove every expense, returning how many were removed
    pub fn clear(&self) -> ExpenseResult<usize> {
        let mut data = self.write_data()?;
        let count = data.len();
        data.clear();
        Ok(count)
    }

    /// Number of expenses currently loaded
    pub fn len(&self) -> ExpenseResult<usize> {
        Ok(self.read_data()?.len())
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.read_data()?.is_empty())
    }

    /// The next id to assign: max(existing ids) + 1, or 1 for an empty store
    pub fn next_id(&self) -> ExpenseResult<u32> {
        let data = self.read_data()?;
        Ok(data.keys().max().copied().unwrap_or(0) + 1)
    }

    /// Rows skipped during the last load
    pub fn skipped_rows(&self) -> ExpenseResult<Vec<SkippedRow>> {
        let skipped = self
            .skipped
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(skipped.clone())
    }

    fn read_data(&self) -> ExpenseResult<std::sync::RwLockReadGuard<'_, HashMap<u32, Expense>>> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_data(&self) -> ExpenseResult<std::sync::RwLockWriteGuard<'_, HashMap<u32, Expense>>> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Parse one CSV record into an expense
fn parse_record(record: &StringRecord) -> Result<Expense, String> {
    if record.len() < FIELD_NAMES.len() {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_NAMES.len(),
            record.len()
        ));
    }

    let id: u32 = record[0]
        .trim()
        .parse()
        .map_err(|_| format!("invalid id '{}'", &record[0]))?;

    let date = NaiveDate::parse_from_str(record[1].trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}'", &record[1]))?;

    let amount = Money::parse(record[2].trim()).map_err(|_| format!("invalid amount '{}'", &record[2]))?;

    let category: Category = record[3]
        .parse()
        .map_err(|_| format!("invalid category '{}'", &record[3]))?;

    Ok(Expense {
        id,
        date,
        amount,
        category,
        description: record[4].to_string(),
    })
}
