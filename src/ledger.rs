//! Ledger calculator
//!
//! Pure functions over a snapshot of the transaction and goal lists: totals,
//! net balance, kind filtering, goal progress, and the running-balance series
//! the chart plots. No persistence concerns; callers pass slices and every
//! derived value is recomputed on each call. List order is authoritative
//! throughout - the running balance follows insertion order, not date order.

use crate::models::{Goal, Money, Transaction};

/// Transaction list filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Keep every transaction
    #[default]
    All,
    /// Keep only income transactions
    Income,
    /// Keep only expense transactions
    Expense,
}

impl KindFilter {
    /// Check whether a transaction passes this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.is_income(),
            Self::Expense => txn.is_expense(),
        }
    }
}

/// One point of the running-balance series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePoint {
    /// The transaction's description
    pub label: String,
    /// Balance after applying the transaction
    pub balance: Money,
}

/// Sum of amounts over income transactions
pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|txn| txn.is_income())
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of amounts over expense transactions
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.amount)
        .sum()
}

/// Net balance: total income minus total expenses. May be negative.
pub fn balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// Filter transactions by kind, preserving original relative order.
/// `KindFilter::All` returns the full list unchanged.
pub fn filter_by_kind(transactions: &[Transaction], filter: KindFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.matches(txn))
        .cloned()
        .collect()
}

/// Progress toward a goal as an integer percentage in [0, 100]
///
/// Measured against the global balance, not a per-goal allocation: goals do
/// not partition funds. A non-positive target yields 0, and the result is
/// clamped so an overshoot reads 100 and a negative balance reads 0.
pub fn goal_progress(goal: &Goal, current_balance: Money) -> u8 {
    if !goal.has_valid_target() {
        return 0;
    }

    let ratio = current_balance.cents() as f64 / goal.target.cents() as f64;
    (ratio.min(1.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Running balance after each transaction, in list order, one point per
/// transaction labelled with its description
pub fn balance_series(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut series = Vec::with_capacity(transactions.len());
    let mut running = Money::zero();

    for txn in transactions {
        running += txn.signed_amount();
        series.push(BalancePoint {
            label: txn.description.clone(),
            balance: running,
        });
    }

    series
}
