//! Transaction service
//!
//! Provides business logic for recording and listing transactions,
//! including draft validation and automatic categorization.

use chrono::{Local, NaiveDate};

use crate::categorize::categorize;
use crate::error::{BudgetError, BudgetResult};
use crate::ledger::{self, KindFilter};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
///
/// Mirrors a partially-filled entry form: the description and amount may
/// be absent or blank, in which case the draft is rejected without error.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Free-text description of the transaction
    pub description: String,
    /// Amount as a non-negative magnitude
    pub amount: Option<Money>,
    /// Whether this is income or an expense
    pub kind: TransactionKind,
    /// Transaction date (defaults to today)
    pub date: Option<NaiveDate>,
    /// Explicit category, overriding automatic categorization
    pub category: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction from a draft
    ///
    /// Returns `Ok(None)` when the draft is incomplete (blank description,
    /// missing amount) or carries a negative amount. Incomplete drafts are
    /// dropped silently rather than treated as errors.
    pub fn add_draft(&self, draft: TransactionDraft) -> BudgetResult<Option<Transaction>> {
        if draft.description.trim().is_empty() {
            return Ok(None);
        }
        let amount = match draft.amount {
            Some(amount) if !amount.is_negative() => amount,
            _ => return Ok(None),
        };

        let description = draft.description.trim().to_string();
        let category = match draft.category {
            Some(explicit) if !explicit.trim().is_empty() => explicit.trim().to_string(),
            _ => categorize(&description).to_string(),
        };
        let date = draft.date.unwrap_or_else(|| Local::now().date_naive());

        let txn = Transaction {
            id: self.storage.ledger.next_transaction_id()?,
            date,
            description,
            amount,
            kind: draft.kind,
            category,
        };

        self.storage.ledger.add_transaction(txn.clone())?;
        self.storage.ledger.save()?;

        Ok(Some(txn))
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> BudgetResult<Transaction> {
        self.storage
            .ledger
            .transactions()?
            .into_iter()
            .find(|txn| txn.id == id)
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))
    }

    /// Remove a transaction by id
    pub fn remove(&self, id: TransactionId) -> BudgetResult<()> {
        if !self.storage.ledger.remove_transaction(id)? {
            return Err(BudgetError::transaction_not_found(id.to_string()));
        }
        self.storage.ledger.save()?;
        Ok(())
    }

    /// List transactions, optionally restricted to one kind
    ///
    /// Transactions come back in the order they were recorded.
    pub fn list(&self, filter: KindFilter) -> BudgetResult<Vec<Transaction>> {
        let transactions = self.storage.ledger.transactions()?;
        Ok(ledger::filter_by_kind(&transactions, filter))
    }

    /// Current balance across all recorded transactions
    pub fn balance(&self) -> BudgetResult<Money> {
        let transactions = self.storage.ledger.transactions()?;
        Ok(ledger::balance(&transactions))
    }
}
