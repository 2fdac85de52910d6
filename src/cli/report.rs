//! CLI commands for the summary and balance chart views

use crate::config::Settings;
use crate::display::{format_balance_chart, format_summary};
use crate::error::BudgetResult;
use crate::ledger;
use crate::storage::Storage;

/// Handle the summary command
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let transactions = storage.ledger.transactions()?;
    let goal_count = storage.ledger.goal_count()?;

    let total_income = ledger::total_income(&transactions);
    let total_expenses = ledger::total_expenses(&transactions);
    let balance = ledger::balance(&transactions);

    print!(
        "{}",
        format_summary(
            total_income,
            total_expenses,
            balance,
            transactions.len(),
            goal_count,
            &settings.currency_symbol,
        )
    );

    Ok(())
}

/// Handle the chart command
pub fn handle_chart_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let transactions = storage.ledger.transactions()?;
    let series = ledger::balance_series(&transactions);

    print!(
        "{}",
        format_balance_chart(&series, &settings.currency_symbol)
    );

    Ok(())
}
