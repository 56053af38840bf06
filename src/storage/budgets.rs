//! Budget ledger repository
//!
//! Persists the mapping of "YYYY-MM" month keys to budget ceilings as a
//! single JSON document, rewritten wholesale on every mutation. Keys are
//! written in descending order so the most recent months come first.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// On-disk ledger document: `{"2025-02": 400.0, "2025-01": 200.0}`
#[derive(Debug, Clone, Default, PartialEq)]
struct BudgetData {
    ceilings: BTreeMap<MonthKey, Money>,
}

impl Serialize for BudgetData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Most recent month first
        let mut map = serializer.serialize_map(Some(self.ceilings.len()))?;
        for (key, amount) in self.ceilings.iter().rev() {
            map.serialize_entry(&key.to_string(), amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BudgetData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Money>::deserialize(deserializer)?;
        let mut ceilings = BTreeMap::new();
        for (key, amount) in raw {
            let key: MonthKey = key
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid month key '{}'", key)))?;
            ceilings.insert(key, amount);
        }
        Ok(Self { ceilings })
    }
}

/// Repository for budget ceiling persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<BudgetData>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetData::default()),
        }
    }

    /// Load the ledger from disk; a missing file is an empty ledger
    pub fn load(&self) -> ExpenseResult<()> {
        let loaded: BudgetData = read_json(&self.path)?;
        *self.write_data()? = loaded;
        Ok(())
    }

    /// Save the ledger to disk, keys descending
    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.read_data()?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get the ceiling for a month, if one is set
    pub fn get(&self, key: MonthKey) -> ExpenseResult<Option<Money>> {
        Ok(self.read_data()?.ceilings.get(&key).copied())
    }

    /// Set the ceiling for a month, returning the previous value if any
    pub fn set(&self, key: MonthKey, ceiling: Money) -> ExpenseResult<Option<Money>> {
        Ok(self.write_data()?.ceilings.insert(key, ceiling))
    }

    /// Remove the ceiling for a month, returning it if it was present
    pub fn remove(&self, key: MonthKey) -> ExpenseResult<Option<Money>> {
        Ok(self.write_data()?.ceilings.remove(&key))
    }

    /// All entries, most recent month first
    pub fn entries(&self) -> ExpenseResult<Vec<(MonthKey, Money)>> {
        let data = self.read_data()?;
        Ok(data.ceilings.iter().rev().map(|(k, v)| (*k, *v)).collect())
    }

    /// Whether the ledger has no entries
    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.read_data()?.ceilings.is_empty())
    }

    fn read_data(&self) -> ExpenseResult<std::sync::RwLockReadGuard<'_, BudgetData>> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_data(&self) -> ExpenseResult<std::sync::RwLockWriteGuard<'_, BudgetData>> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        repo.load().unwrap();
        assert!(repo.is_empty().unwrap());
        assert_eq!(repo.get(key("2025-01")).unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        assert_eq!(repo.set(key("2025-01"), Money::from_cents(20000)).unwrap(), None);
        assert_eq!(
            repo.set(key("2025-01"), Money::from_cents(25000)).unwrap(),
            Some(Money::from_cents(20000))
        );
        assert_eq!(repo.get(key("2025-01")).unwrap(), Some(Money::from_cents(25000)));

        assert_eq!(repo.remove(key("2025-01")).unwrap(), Some(Money::from_cents(25000)));
        assert_eq!(repo.remove(key("2025-01")).unwrap(), None);
    }

    #[test]
    fn test_persisted_keys_sorted_descending() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path.clone());

        repo.set(key("2024-11"), Money::from_cents(10000)).unwrap();
        repo.set(key("2025-02"), Money::from_cents(30000)).unwrap();
        repo.set(key("2025-01"), Money::from_cents(20000)).unwrap();
        repo.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let feb = text.find("2025-02").unwrap();
        let jan = text.find("2025-01").unwrap();
        let nov = text.find("2024-11").unwrap();
        assert!(feb < jan && jan < nov);
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        let repo = BudgetRepository::new(path.clone());

        repo.set(key("2025-01"), Money::from_cents(20050)).unwrap();
        repo.save().unwrap();

        let reloaded = BudgetRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(key("2025-01")).unwrap(), Some(Money::from_cents(20050)));
    }

    #[test]
    fn test_entries_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        repo.set(key("2024-12"), Money::from_cents(10000)).unwrap();
        repo.set(key("2025-01"), Money::from_cents(20000)).unwrap();

        let entries = repo.entries().unwrap();
        assert_eq!(entries[0].0, key("2025-01"));
        assert_eq!(entries[1].0, key("2024-12"));
    }
}
