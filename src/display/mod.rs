//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including the register view, goal progress bars, and the balance chart.

pub mod chart;
pub mod goal;
pub mod report;
pub mod summary;
pub mod transaction;

pub use chart::format_balance_chart;
pub use goal::format_goal_list;
pub use summary::format_summary;
pub use transaction::{format_transaction_register, format_transaction_short};
