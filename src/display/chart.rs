//! Balance chart formatting
//!
//! Renders the running balance after each transaction as a horizontal
//! bar chart in the terminal.

use crate::display::report::{double_separator, format_bar, truncate};
use crate::ledger::BalancePoint;

const CHART_WIDTH: usize = 65;
const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

/// Format the running balance series as a bar chart
///
/// Each transaction contributes one row labeled with its description.
/// Bars are scaled against the largest balance in the series; rows
/// where the balance is zero or negative get an empty bar, with the
/// amount still shown.
pub fn format_balance_chart(series: &[BalancePoint], symbol: &str) -> String {
    if series.is_empty() {
        return "No transactions recorded. Add one with 'budget txn add'.\n".to_string();
    }

    let max_balance = series
        .iter()
        .map(|point| point.balance.cents())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Balance Over Time\n");
    output.push_str(&double_separator(CHART_WIDTH));
    output.push('\n');

    for point in series {
        let bar = format_bar(point.balance.cents() as f64, max_balance as f64, BAR_WIDTH);
        output.push_str(&format!(
            "{:<20} {}  {:>12}\n",
            truncate(&point.label, LABEL_WIDTH),
            bar,
            point.balance.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn point(label: &str, cents: i64) -> BalancePoint {
        BalancePoint {
            label: label.to_string(),
            balance: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_empty_chart_message() {
        let formatted = format_balance_chart(&[], "$");
        assert!(formatted.contains("No transactions recorded"));
    }

    #[test]
    fn test_chart_has_title_and_labels() {
        let series = vec![point("Salary", 200_000), point("Groceries", 192_000)];

        let formatted = format_balance_chart(&series, "$");
        assert!(formatted.contains("Balance Over Time"));
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("$1920.00"));
    }

    #[test]
    fn test_largest_balance_fills_the_bar() {
        let series = vec![point("Salary", 200_000), point("Rent", 100_000)];

        let formatted = format_balance_chart(&series, "$");
        let lines: Vec<&str> = formatted.lines().collect();
        let salary_line = lines.iter().find(|l| l.contains("Salary")).unwrap();
        assert_eq!(salary_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        let rent_line = lines.iter().find(|l| l.contains("Rent")).unwrap();
        assert_eq!(rent_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_negative_balance_gets_empty_bar() {
        let series = vec![point("Salary", 50_000), point("Big purchase", -10_000)];

        let formatted = format_balance_chart(&series, "$");
        let lines: Vec<&str> = formatted.lines().collect();
        let negative_line = lines.iter().find(|l| l.contains("Big purchase")).unwrap();
        assert_eq!(negative_line.chars().filter(|c| *c == '█').count(), 0);
        assert!(negative_line.contains("-$100.00"));
    }
}
