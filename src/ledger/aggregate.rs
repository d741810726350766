//! Chart-facing aggregation over the expense subset of a ledger.
//!
//! The running summary totals are maintained incrementally by the ledger
//! itself; this breakdown is recomputed in full at every chart render, which
//! is fine at the data volumes a personal tracker sees.

use super::transaction::{Transaction, TransactionKind};

/// Expense category totals in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    entries: Vec<(String, f64)>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value).sum()
    }

    pub fn value_for(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }
}

/// Sums expense amounts per category. Income entries are ignored and
/// categories without expenses are absent rather than zero-valued.
pub fn category_totals(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut entries: Vec<(String, f64)> = Vec::new();
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        match entries.iter_mut().find(|(name, _)| name == &txn.category) {
            Some((_, sum)) => *sum += txn.amount,
            None => entries.push((txn.category.clone(), txn.amount)),
        }
    }
    CategoryBreakdown { entries }
}
