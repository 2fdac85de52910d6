//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, and removing
//! transactions.

use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::transaction::{format_transaction_register, format_transaction_short};
use crate::error::{BudgetError, BudgetResult};
use crate::ledger::KindFilter;
use crate::models::{Money, TransactionId, TransactionKind};
use crate::services::{TransactionDraft, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "20" or "19.99")
        amount: String,
        /// Description, used for automatic categorization
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
        /// Record as income rather than an expense
        #[arg(long)]
        income: bool,
        /// Category, overriding automatic categorization
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Show only one kind of transaction
        #[arg(short, long, value_enum, default_value_t)]
        filter: KindFilterArg,
    },
    /// Remove a transaction
    Remove {
        /// Transaction ID (e.g., "txn-1705312800000")
        id: String,
    },
}

/// Kind filter accepted on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum KindFilterArg {
    /// All transactions
    #[default]
    All,
    /// Income only
    Income,
    /// Expenses only
    Expense,
}

impl From<KindFilterArg> for KindFilter {
    fn from(arg: KindFilterArg) -> Self {
        match arg {
            KindFilterArg::All => KindFilter::All,
            KindFilterArg::Income => KindFilter::Income,
            KindFilterArg::Expense => KindFilter::Expense,
        }
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service = TransactionService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            income,
            category,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                BudgetError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '20' or '19.99'. Error: {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(date_str) => Some(parse_date(&date_str)?),
                None => None,
            };

            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            let draft = TransactionDraft {
                description: description.join(" "),
                amount: Some(amount),
                kind,
                date,
                category,
            };

            match service.add_draft(draft)? {
                Some(txn) => {
                    println!("Recorded: {}", format_transaction_short(&txn, symbol));
                    println!("  ID: {}", txn.id);
                }
                None => {
                    println!("Nothing recorded: a description and a non-negative amount are required.");
                }
            }
        }

        TransactionCommands::List { filter } => {
            let transactions = service.list(filter.into())?;
            print!("{}", format_transaction_register(&transactions, symbol));
            if !transactions.is_empty() {
                println!("\nShowing {} transactions", transactions.len());
            }
        }

        TransactionCommands::Remove { id } => {
            let id = parse_transaction_id(&id)?;
            let txn = service.get(id)?;
            service.remove(id)?;
            println!("Removed: {}", format_transaction_short(&txn, symbol));
        }
    }

    Ok(())
}

fn parse_date(date_str: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        BudgetError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

fn parse_transaction_id(id: &str) -> BudgetResult<TransactionId> {
    TransactionId::from_str(id)
        .map_err(|_| BudgetError::Validation(format!("Invalid transaction id: '{}'", id)))
}
