//! CSV Export functionality
//!
//! Exports the transaction register to CSV format.

use crate::error::{BudgetError, BudgetResult};
use crate::storage::Storage;
use std::io::Write;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "ID,Date,Description,Category,Type,Amount")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    let transactions = storage.ledger.transactions()?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2}",
            txn.id,
            txn.date,
            escape_csv(&txn.description),
            escape_csv(&txn.category),
            txn.kind,
            txn.amount.cents() as f64 / 100.0
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field if it contains special characters
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Money, TransactionKind};
    use crate::services::{TransactionDraft, TransactionService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn record(storage: &Storage, description: &str, cents: i64, kind: TransactionKind) {
        let service = TransactionService::new(storage);
        service
            .add_draft(TransactionDraft {
                description: description.to_string(),
                amount: Some(Money::from_cents(cents)),
                kind,
                date: None,
                category: None,
            })
            .unwrap();
    }

    #[test]
    fn test_export_transactions_csv() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, "Salary", 200_000, TransactionKind::Income);
        record(&storage, "Burger lunch", 2_000, TransactionKind::Expense);

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("ID,Date,Description,Category,Type,Amount"));
        assert!(csv_string.contains("Salary,Income,income,2000.00"));
        assert!(csv_string.contains("Burger lunch,Food,expense,20.00"));
    }

    #[test]
    fn test_export_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(csv_string.lines().count(), 1);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_descriptions_with_commas_are_quoted() {
        let (_temp_dir, storage) = create_test_storage();
        record(
            &storage,
            "Dinner, drinks, and a movie",
            7_500,
            TransactionKind::Expense,
        );

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("\"Dinner, drinks, and a movie\""));
    }
}
