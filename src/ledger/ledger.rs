use super::transaction::{Transaction, TransactionKind};

/// The three running aggregate scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Totals {
    fn apply(&mut self, kind: TransactionKind, amount: f64) {
        match kind {
            TransactionKind::Income => {
                self.income += amount;
                self.balance += amount;
            }
            TransactionKind::Expense => {
                self.expenses += amount;
                self.balance -= amount;
            }
        }
    }
}

/// The ordered transaction sequence plus its derived totals.
///
/// The scalars are maintained incrementally: every mutation updates the
/// sequence and all three totals together, so they are never recomputed from
/// a full scan outside of tests.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    totals: Totals,
}

impl Ledger {
    /// Rebuilds a ledger from persisted parts. The stored totals are trusted
    /// as written; storage decides when they are unusable.
    pub fn from_parts(transactions: Vec<Transaction>, totals: Totals) -> Self {
        Self {
            transactions,
            totals,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Appends an already-validated transaction and rolls it into the totals.
    pub fn add(&mut self, transaction: Transaction) {
        self.totals.apply(transaction.kind, transaction.amount);
        self.transactions.push(transaction);
    }

    /// Removes the entry at `index` and reverses its contribution to the
    /// totals. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<Transaction> {
        if index >= self.transactions.len() {
            return None;
        }
        let removed = self.transactions.remove(index);
        self.totals.apply(removed.kind, -removed.amount);
        Some(removed)
    }

    /// Empties the sequence and zeroes all three totals.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.totals = Totals::default();
    }

    /// Full-scan totals, used as the oracle for the incremental ones.
    pub fn recomputed_totals(&self) -> Totals {
        let mut totals = Totals::default();
        for txn in &self.transactions {
            totals.apply(txn.kind, txn.amount);
        }
        totals
    }
}
