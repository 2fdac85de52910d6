//! Export module
//!
//! Provides ledger export functionality in multiple formats:
//! - CSV: For the transaction register (spreadsheet-compatible)
//! - JSON: For machine-readable full ledger export

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
