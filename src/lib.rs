//! Budget tracker - keyword-categorizing terminal ledger
//!
//! This library provides the core functionality for a small budget
//! tracker. Transactions are auto-categorized by matching keywords in
//! their descriptions against an ordered keyword table, and savings
//! goals are measured against the running balance of the ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, goals, money, ids)
//! - `categorize`: Keyword table and description categorization
//! - `ledger`: Pure calculations over recorded transactions
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal rendering (register, summary, goals, chart)
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod categorize;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
