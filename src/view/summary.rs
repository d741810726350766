use crate::cli::output::{self, preferences};
use crate::ledger::Totals;

use super::animation::{self, NumberTransition, SUMMARY_TRANSITION};

/// Fixed-point currency, exactly two decimals, no thousands separators.
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{symbol}{value:.2}")
}

pub fn summary_lines(symbol: &str, totals: Totals) -> Vec<String> {
    vec![
        format!("  Total Income:    {}", format_currency(symbol, totals.income)),
        format!("  Total Expenses:  {}", format_currency(symbol, totals.expenses)),
        format!("  Current Balance: {}", format_currency(symbol, totals.balance)),
    ]
}

/// Renders the three running totals, gliding each from the value it last
/// displayed when animations are on.
pub struct SummaryView {
    symbol: String,
    displayed: Totals,
}

impl SummaryView {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            displayed: Totals::default(),
        }
    }

    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_string();
    }

    pub fn render(&mut self, totals: Totals) {
        output::section("Summary");
        if preferences().animations {
            self.render_animated(totals);
        } else {
            for line in summary_lines(&self.symbol, totals) {
                output::info(line);
            }
        }
        self.displayed = totals;
    }

    fn render_animated(&self, totals: Totals) {
        let income = NumberTransition::new(self.displayed.income, totals.income);
        let expenses = NumberTransition::new(self.displayed.expenses, totals.expenses);
        let balance = NumberTransition::new(self.displayed.balance, totals.balance);
        let symbol = self.symbol.clone();

        let played = animation::play_block(SUMMARY_TRANSITION, 3, |elapsed| {
            summary_lines(
                &symbol,
                Totals {
                    income: income.sample(elapsed),
                    expenses: expenses.sample(elapsed),
                    balance: balance.sample(elapsed),
                },
            )
        });
        if played.is_err() {
            for line in summary_lines(&self.symbol, totals) {
                output::info(line);
            }
        }
    }
}
