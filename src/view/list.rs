use colored::Colorize;

use crate::cli::output::{self, preferences};
use crate::ledger::{Transaction, TransactionKind};

use super::summary::format_currency;

/// Signed display amount: expense rows carry a minus sign, income rows are
/// unsigned.
pub fn format_signed(symbol: &str, txn: &Transaction) -> String {
    let amount = format_currency(symbol, txn.amount);
    match txn.kind {
        TransactionKind::Income => amount,
        TransactionKind::Expense => format!("-{amount}"),
    }
}

/// Rows for every transaction matching the filter, in sequence order. Each
/// row keeps the entry's 1-based position in the unfiltered sequence as its
/// delete tag, so `delete N` targets the right entry even while filtered.
pub fn rows(
    transactions: &[Transaction],
    filter_category: Option<&str>,
    symbol: &str,
) -> Vec<String> {
    transactions
        .iter()
        .enumerate()
        .filter(|(_, txn)| filter_category.map_or(true, |category| txn.category == category))
        .map(|(index, txn)| {
            let label = match txn.description.as_deref() {
                Some(description) => format!("{} • {}", txn.category, description),
                None => txn.category.clone(),
            };
            format!(
                "[#{}] {:<10}  {}  {}",
                index + 1,
                txn.date_display(),
                label,
                format_signed(symbol, txn)
            )
        })
        .collect()
}

pub fn render(transactions: &[Transaction], filter_category: Option<&str>, symbol: &str) {
    output::section("Transactions");
    let rows = rows(transactions, filter_category, symbol);
    if rows.is_empty() {
        match filter_category {
            Some(category) => output::info(format!("No transactions in {category}.")),
            None => output::info("No transactions yet."),
        }
        return;
    }

    let plain = preferences().plain_mode;
    for (row, txn) in rows.iter().zip(
        transactions
            .iter()
            .filter(|txn| filter_category.map_or(true, |category| txn.category == category)),
    ) {
        if plain {
            output::info(row);
        } else {
            let styled = match txn.kind {
                TransactionKind::Income => row.green().to_string(),
                TransactionKind::Expense => row.red().to_string(),
            };
            output::info(styled);
        }
    }
    output::info("Use `delete <number>` to remove an entry.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use chrono::NaiveDate;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionKind::Income,
                "Salary",
                NaiveDate::from_ymd_opt(2024, 1, 1),
                None,
                1000.0,
            ),
            Transaction::new(
                TransactionKind::Expense,
                "Groceries",
                None,
                Some("weekly shop".into()),
                40.0,
            ),
            Transaction::new(TransactionKind::Expense, "Rent", None, None, 500.0),
        ]
    }

    #[test]
    fn rows_follow_sequence_order_with_signed_amounts() {
        let rows = rows(&sample(), None, "$");
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("[#1]"));
        assert!(rows[0].contains("2024-01-01"));
        assert!(rows[0].contains("Salary"));
        assert!(rows[0].ends_with("$1000.00"));
        assert!(rows[1].contains("Groceries • weekly shop"));
        assert!(rows[1].ends_with("-$40.00"));
    }

    #[test]
    fn filtered_rows_keep_unfiltered_positions() {
        let rows = rows(&sample(), Some("Rent"), "$");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("[#3]"), "got: {}", rows[0]);
    }

    #[test]
    fn unknown_filter_matches_nothing() {
        assert!(rows(&sample(), Some("Travel"), "$").is_empty());
    }
}
