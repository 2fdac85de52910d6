//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_chart_command, handle_summary_command};
pub use transaction::{handle_transaction_command, KindFilterArg, TransactionCommands};
