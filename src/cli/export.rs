//! CLI commands for data export
//!
//! Provides commands for exporting the ledger in various formats.

use crate::error::{BudgetError, BudgetResult};
use crate::export::{csv, json};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full ledger)
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_transactions_csv(storage, &mut writer)?;
            let count = storage.ledger.transaction_count()?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer, pretty)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}
