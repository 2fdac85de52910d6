//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Goal, Transaction};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions, in the order they were recorded
    pub transactions: Vec<Transaction>,

    /// All goals
    pub goals: Vec<Goal>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Total number of goals
    pub goal_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        let transactions = storage.ledger.transactions()?;
        let goals = storage.ledger.goals()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            goals,
            metadata,
        })
    }
}

/// Export the complete ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Money, TransactionKind};
    use crate::services::{GoalService, TransactionDraft, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) {
        let transactions = TransactionService::new(storage);
        transactions
            .add_draft(TransactionDraft {
                description: "Salary".to_string(),
                amount: Some(Money::from_cents(200_000)),
                kind: TransactionKind::Income,
                date: NaiveDate::from_ymd_opt(2025, 1, 15),
                category: None,
            })
            .unwrap();
        transactions
            .add_draft(TransactionDraft {
                description: "Groceries".to_string(),
                amount: Some(Money::from_cents(8_000)),
                kind: TransactionKind::Expense,
                date: NaiveDate::from_ymd_opt(2025, 1, 20),
                category: None,
            })
            .unwrap();

        let goals = GoalService::new(storage);
        goals.add("Vacation", Money::from_cents(800_000)).unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.transactions.len(), 2);
        assert_eq!(export.goals.len(), 1);
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2025-01-15")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("2025-01-20")
        );
    }

    #[test]
    fn test_json_export_parses_back() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&json_output).unwrap();
        assert_eq!(parsed.transactions.len(), 2);
        assert_eq!(parsed.transactions[0].description, "Salary");
        assert_eq!(parsed.goals[0].name, "Vacation");
    }

    #[test]
    fn test_export_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.metadata.transaction_count, 0);
        assert!(export.metadata.earliest_transaction.is_none());
    }
}
