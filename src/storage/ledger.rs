//! Ledger repository for JSON storage
//!
//! Manages loading and saving the single persisted record - the transaction
//! list and the goal list - to ledger.json. Both lists are kept in insertion
//! order; that order is authoritative for the running-balance series, so the
//! repository never sorts.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{Goal, GoalId, Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// The serialized record: everything the tracker persists
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Repository for the persisted ledger record
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<LedgerData>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(LedgerData::default()),
        }
    }

    /// Load the record from disk
    ///
    /// A missing or malformed file loads as two empty lists; corruption is
    /// never fatal.
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: LedgerData = read_json_or_default(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;

        Ok(())
    }

    /// Save the record to disk, preserving list order
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all transactions in insertion order
    pub fn transactions(&self) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.clone())
    }

    /// Get all goals in insertion order
    pub fn goals(&self) -> Result<Vec<Goal>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.goals.clone())
    }

    /// Append a transaction to the ledger
    pub fn add_transaction(&self, txn: Transaction) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.transactions.push(txn);
        Ok(())
    }

    /// Remove a transaction by id, returning whether it was present
    pub fn remove_transaction(&self, id: TransactionId) -> Result<bool, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.transactions.len();
        data.transactions.retain(|txn| txn.id != id);
        Ok(data.transactions.len() < before)
    }

    /// Append a goal
    pub fn add_goal(&self, goal: Goal) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.goals.push(goal);
        Ok(())
    }

    /// Remove a goal by id, returning whether it was present
    pub fn remove_goal(&self, id: GoalId) -> Result<bool, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.goals.len();
        data.goals.retain(|goal| goal.id != id);
        Ok(data.goals.len() < before)
    }

    /// Fresh unique transaction id: the current millisecond timestamp, bumped
    /// past the maximum existing id so rapid adds stay unique and monotonic
    pub fn next_transaction_id(&self) -> Result<TransactionId, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let candidate = TransactionId::now();
        Ok(match data.transactions.iter().map(|txn| txn.id).max() {
            Some(max) if max >= candidate => max.next(),
            _ => candidate,
        })
    }

    /// Fresh unique goal id, assigned the same way as transaction ids
    pub fn next_goal_id(&self) -> Result<GoalId, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let candidate = GoalId::now();
        Ok(match data.goals.iter().map(|goal| goal.id).max() {
            Some(max) if max >= candidate => max.next(),
            _ => candidate,
        })
    }

    /// Number of transactions
    pub fn transaction_count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.len())
    }

    /// Number of goals
    pub fn goal_count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.goals.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_txn(id: i64, description: &str, dollars: i64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description,
            Money::from_dollars(dollars),
            kind,
            "Uncategorized",
        )
    }

    #[test]
    fn test_add_and_get_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        repo.add_transaction(make_txn(1, "Salary", 2000, TransactionKind::Income))
            .unwrap();
        repo.add_transaction(make_txn(2, "Groceries", 80, TransactionKind::Expense))
            .unwrap();

        let txns = repo.transactions().unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(repo.transaction_count().unwrap(), 2);
    }

    #[test]
    fn test_remove_transaction() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        repo.add_transaction(make_txn(1, "Salary", 2000, TransactionKind::Income))
            .unwrap();

        assert!(repo.remove_transaction(TransactionId::from_raw(1)).unwrap());
        assert!(!repo.remove_transaction(TransactionId::from_raw(1)).unwrap());
        assert_eq!(repo.transaction_count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_load_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let repo = LedgerRepository::new(path.clone());
        // Insert with descending ids and out-of-order dates; load must give
        // back exactly this order
        repo.add_transaction(make_txn(30, "Third", 10, TransactionKind::Expense))
            .unwrap();
        repo.add_transaction(make_txn(10, "First", 20, TransactionKind::Expense))
            .unwrap();
        repo.add_transaction(make_txn(20, "Second", 30, TransactionKind::Income))
            .unwrap();
        repo.save().unwrap();

        let reloaded = LedgerRepository::new(path);
        reloaded.load().unwrap();

        let txns = reloaded.transactions().unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].description, "Third");
        assert_eq!(txns[1].description, "First");
        assert_eq!(txns[2].description, "Second");
    }

    #[test]
    fn test_load_missing_file_gives_empty_lists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        repo.load().unwrap();

        assert!(repo.transactions().unwrap().is_empty());
        assert!(repo.goals().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file_gives_empty_lists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(&path, "{{{ this is not json").unwrap();

        let repo = LedgerRepository::new(path);
        repo.load().unwrap();

        assert!(repo.transactions().unwrap().is_empty());
        assert!(repo.goals().unwrap().is_empty());
    }

    #[test]
    fn test_goals_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let repo = LedgerRepository::new(path.clone());
        repo.add_goal(Goal::new(
            GoalId::from_raw(1),
            "Vacation",
            Money::from_dollars(500),
        ))
        .unwrap();
        repo.save().unwrap();

        let reloaded = LedgerRepository::new(path);
        reloaded.load().unwrap();

        let goals = reloaded.goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].name, "Vacation");

        assert!(reloaded.remove_goal(GoalId::from_raw(1)).unwrap());
        assert_eq!(reloaded.goal_count().unwrap(), 0);
    }

    #[test]
    fn test_next_transaction_id_is_unique_and_monotonic() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        let first = repo.next_transaction_id().unwrap();
        repo.add_transaction(make_txn(
            first.as_i64(),
            "One",
            10,
            TransactionKind::Expense,
        ))
        .unwrap();

        let second = repo.next_transaction_id().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_next_id_bumps_past_far_future_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        // An existing id far beyond any current timestamp
        let far_future = i64::MAX - 1;
        repo.add_transaction(make_txn(far_future, "Future", 10, TransactionKind::Expense))
            .unwrap();

        let next = repo.next_transaction_id().unwrap();
        assert_eq!(next.as_i64(), i64::MAX);
    }
}
