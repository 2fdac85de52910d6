//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Everything persists to a single record in ledger.json.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use ledger::{LedgerData, LedgerRepository};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BudgetError> {
        self.ledger.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.ledger.save()?;
        Ok(())
    }
}
