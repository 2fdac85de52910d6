//! Transaction model
//!
//! A transaction is a single dated income or expense entry. Amounts are
//! unsigned magnitudes; the kind decides the sign of the balance effect.
//! Transactions are immutable once created - they can only be removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::categorize::UNCATEGORIZED;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    /// Default kind for new drafts
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the serialized form
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (millisecond timestamp at creation)
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description, also used as the chart label
    pub description: String,

    /// Amount as an unsigned magnitude
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category label; never empty
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        let category = category.into();
        Self {
            id,
            date,
            description: description.into(),
            amount,
            kind,
            category: if category.is_empty() {
                default_category()
            } else {
                category
            },
        }
    }

    /// Check if this transaction is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this transaction is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with its balance effect applied: positive for income,
    /// negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}
