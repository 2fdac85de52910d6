//! Summary display formatting
//!
//! Formats the income/expense/balance overview block.

use crate::display::report::{double_separator, format_money_colored, separator};
use crate::models::Money;

const SUMMARY_WIDTH: usize = 40;

/// Format the ledger summary block
pub fn format_summary(
    total_income: Money,
    total_expenses: Money,
    balance: Money,
    transaction_count: usize,
    goal_count: usize,
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&double_separator(SUMMARY_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:   {:>15}\n",
        total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>15}\n",
        total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&separator(SUMMARY_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Balance:        {:>15}\n",
        format_money_colored(balance, symbol)
    ));
    output.push('\n');
    output.push_str(&format!("Transactions: {}\n", transaction_count));
    output.push_str(&format!("Goals:        {}\n", goal_count));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let formatted = format_summary(
            Money::from_cents(200_000),
            Money::from_cents(8_000),
            Money::from_cents(192_000),
            2,
            1,
            "$",
        );

        assert!(formatted.contains("Budget Summary"));
        assert!(formatted.contains("$2000.00"));
        assert!(formatted.contains("$80.00"));
        assert!(formatted.contains("$1920.00"));
        assert!(formatted.contains("Transactions: 2"));
        assert!(formatted.contains("Goals:        1"));
    }

    #[test]
    fn test_negative_balance_is_shown() {
        let formatted = format_summary(
            Money::from_cents(1_000),
            Money::from_cents(5_000),
            Money::from_cents(-4_000),
            2,
            0,
            "$",
        );

        assert!(formatted.contains("-$40.00"));
    }
}
