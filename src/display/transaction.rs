//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register view with a running balance.

use crate::display::report::{separator, truncate};
use crate::models::{Money, Transaction};

const REGISTER_WIDTH: usize = 95;

/// Format a list of transactions as a register with a running balance
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:<24} {:<14} {:>12} {:>12}  {}\n",
        "Date", "Description", "Category", "Amount", "Balance", "ID"
    ));
    output.push_str(&separator(REGISTER_WIDTH));
    output.push('\n');

    let mut running_balance = Money::zero();

    for txn in transactions {
        running_balance += txn.signed_amount();

        output.push_str(&format!(
            "{} {:<24} {:<14} {:>12} {:>12}  {}\n",
            txn.date.format("%Y-%m-%d"),
            truncate(&txn.description, 24),
            truncate(&txn.category, 14),
            txn.signed_amount().format_with_symbol(symbol),
            running_balance.format_with_symbol(symbol),
            txn.id
        ));
    }

    output.push_str(&separator(REGISTER_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:>76}\n",
        format!("Balance: {}", running_balance.format_with_symbol(symbol))
    ));

    output
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {} {} [{}]",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24).trim_end(),
        txn.signed_amount().format_with_symbol(symbol),
        txn.category
    )
}
