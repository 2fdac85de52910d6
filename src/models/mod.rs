//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the budgeting
//! domain: transactions, savings goals, money, and typed ids.

pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use goal::Goal;
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
