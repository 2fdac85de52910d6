//! Shared formatting helpers for terminal output

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let rendered = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", rendered) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", rendered) // Green for positive
    } else {
        rendered
    }
}

/// Create a simple bar chart representation
///
/// Non-positive values render as an empty bar.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
///
/// Counts characters, not bytes, so multi-byte text never splits
/// mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_format_bar_empty_for_non_positive() {
        assert_eq!(format_bar(-5.0, 100.0, 8), " ".repeat(8));
        assert_eq!(format_bar(5.0, 0.0, 8), " ".repeat(8));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Two-byte character straddling the cut point
        let s = "aaaaaaaaaaaaaaaaaaaaé lunch with the whole team";
        let truncated = truncate(s, 24);
        assert_eq!(truncated.chars().count(), 24);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate("crème brûlée éclair", 10), "crème b...");
        assert_eq!(truncate("héllo", 24), "héllo");
    }

    #[test]
    fn test_format_money_colored() {
        assert!(format_money_colored(Money::from_cents(-100), "$").contains("\x1b[31m"));
        assert!(format_money_colored(Money::from_cents(100), "$").contains("\x1b[32m"));
        assert_eq!(format_money_colored(Money::zero(), "$"), "$0.00");
        assert!(format_money_colored(Money::from_cents(100), "€").contains("€1.00"));
    }
}
