//! Service layer
//!
//! The service layer provides business logic on top of the storage layer,
//! handling draft validation, automatic categorization, and computed views.

pub mod goal;
pub mod transaction;

pub use goal::{GoalProgress, GoalService};
pub use transaction::{TransactionDraft, TransactionService};
