//! Goal display formatting
//!
//! Formats savings goals with progress bars measured against the
//! current balance.

use crate::display::report::{format_bar, separator, truncate};
use crate::services::GoalProgress;

const GOAL_LIST_WIDTH: usize = 78;
const BAR_WIDTH: usize = 20;

/// Format a list of goals with their progress toward the current balance
pub fn format_goal_list(goals: &[GoalProgress], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals yet. Add one with 'budget goal add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12}  {:<20} {:>5}  {}\n",
        "Goal", "Target", "Progress", "%", "ID"
    ));
    output.push_str(&separator(GOAL_LIST_WIDTH));
    output.push('\n');

    for entry in goals {
        let bar = format_bar(f64::from(entry.percent), 100.0, BAR_WIDTH);
        output.push_str(&format!(
            "{:<20} {:>12}  {}  {:>4}%  {}\n",
            truncate(&entry.goal.name, 20),
            entry.goal.target.format_with_symbol(symbol),
            bar,
            entry.percent,
            entry.goal.id
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalId, Money};

    fn entry(name: &str, target_cents: i64, percent: u8) -> GoalProgress {
        GoalProgress {
            goal: Goal {
                id: GoalId::from_raw(1),
                name: name.to_string(),
                target: Money::from_cents(target_cents),
            },
            percent,
        }
    }

    #[test]
    fn test_format_empty_goal_list() {
        let formatted = format_goal_list(&[], "$");
        assert!(formatted.contains("No goals yet"));
    }

    #[test]
    fn test_format_goal_list_shows_progress() {
        let goals = vec![entry("Vacation", 800_000, 25), entry("Laptop", 200_000, 100)];

        let formatted = format_goal_list(&goals, "$");
        assert!(formatted.contains("Vacation"));
        assert!(formatted.contains("$8000.00"));
        assert!(formatted.contains("25%"));
        assert!(formatted.contains("100%"));
        assert!(formatted.contains('█'));
    }

    #[test]
    fn test_zero_progress_renders_empty_bar() {
        let formatted = format_goal_list(&[entry("Rainy day", 10_000, 0)], "$");
        assert!(!formatted.contains('█'));
        assert!(formatted.contains("0%"));
    }
}
