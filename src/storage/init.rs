//! Storage initialization
//!
//! Handles first-run setup and optional starter data creation.

use chrono::NaiveDate;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

use super::file_io::write_json_atomic;
use super::ledger::LedgerData;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and, if ledger.json does not exist yet, an
/// empty record - or the starter record when `seed_sample` is set. An
/// existing ledger is left untouched.
pub fn initialize_storage(paths: &BudgetPaths, seed_sample: bool) -> Result<(), BudgetError> {
    paths.ensure_directories()?;

    if !paths.ledger_file().exists() {
        let data = if seed_sample {
            sample_ledger()
        } else {
            LedgerData::default()
        };
        write_json_atomic(paths.ledger_file(), &data)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetPaths) -> bool {
    !paths.ledger_file().exists()
}

/// The starter record: one salary deposit and one grocery run
fn sample_ledger() -> LedgerData {
    LedgerData {
        transactions: vec![
            Transaction::new(
                TransactionId::from_raw(1),
                NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid starter date"),
                "Salary",
                Money::from_dollars(2000),
                TransactionKind::Income,
                "Income",
            ),
            Transaction::new(
                TransactionId::from_raw(2),
                NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid starter date"),
                "Groceries",
                Money::from_dollars(80),
                TransactionKind::Expense,
                "Food",
            ),
        ],
        goals: Vec::new(),
    }
}
