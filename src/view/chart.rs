use colored::{Color, Colorize};

use crate::cli::output::{self, preferences};
use crate::ledger::CategoryBreakdown;

use super::summary::format_currency;

const BAR_WIDTH: usize = 24;

/// Slice colors cycle when there are more categories than colors.
const SLICE_COLORS: &[Color] = &[
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
];

/// One legend row per slice: label, proportional bar, amount, and share.
/// The labels are exactly what the `filter` command accepts.
pub fn slice_rows(breakdown: &CategoryBreakdown, symbol: &str) -> Vec<String> {
    let total = breakdown.total();
    if total <= 0.0 {
        return Vec::new();
    }
    let label_width = breakdown
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    breakdown
        .iter()
        .map(|(label, value)| {
            let share = value / total;
            let filled = ((share * BAR_WIDTH as f64).round() as usize).clamp(1, BAR_WIDTH);
            format!(
                "  {:<label_width$}  {:<BAR_WIDTH$}  {} ({:.1}%)",
                label,
                "█".repeat(filled),
                format_currency(symbol, value),
                share * 100.0
            )
        })
        .collect()
}

/// Replaces whatever chart was shown before with the current breakdown.
pub fn render(breakdown: &CategoryBreakdown, symbol: &str) {
    output::section("Spending by Category");
    if breakdown.is_empty() {
        output::info("No expense data to chart yet.");
        return;
    }

    let plain = preferences().plain_mode;
    for (index, row) in slice_rows(breakdown, symbol).into_iter().enumerate() {
        if plain {
            output::info(row);
        } else {
            let color = SLICE_COLORS[index % SLICE_COLORS.len()];
            output::info(row.color(color).to_string());
        }
    }
    output::info("Use `filter <category>` to focus the list on one slice.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{category_totals, Transaction, TransactionKind};

    fn breakdown() -> CategoryBreakdown {
        let transactions = vec![
            Transaction::new(TransactionKind::Expense, "Groceries", None, None, 25.0),
            Transaction::new(TransactionKind::Expense, "Rent", None, None, 75.0),
        ];
        category_totals(&transactions)
    }

    #[test]
    fn rows_carry_label_amount_and_share() {
        let rows = slice_rows(&breakdown(), "$");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Groceries"));
        assert!(rows[0].contains("$25.00"));
        assert!(rows[0].contains("(25.0%)"));
        assert!(rows[1].contains("Rent"));
        assert!(rows[1].contains("(75.0%)"));
    }

    #[test]
    fn bars_scale_with_share() {
        let rows = slice_rows(&breakdown(), "$");
        let bar_len = |row: &str| row.chars().filter(|c| *c == '█').count();
        assert!(bar_len(&rows[1]) > bar_len(&rows[0]));
    }

    #[test]
    fn empty_breakdown_renders_no_rows() {
        assert!(slice_rows(&CategoryBreakdown::default(), "$").is_empty());
    }
}
