use crate::{
    ledger::{Ledger, Totals, Transaction},
    storage::{keys, KeyValueStore, Result},
};

/// Owns the ledger and its persistence backend.
///
/// Every mutation writes the full state through to the backend before
/// returning, so data loss on abrupt termination is bounded to the in-flight
/// operation. Loading never fails the caller: unreadable state degrades to
/// the zero-value ledger.
pub struct LedgerStore {
    backend: Box<dyn KeyValueStore>,
    ledger: Ledger,
}

impl LedgerStore {
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let ledger = match read_ledger(backend.as_ref()) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!("persisted ledger is unreadable, starting fresh: {err}");
                Ledger::default()
            }
        };
        Self { backend, ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    /// Appends an already-validated transaction and persists before
    /// returning.
    pub fn add(&mut self, transaction: Transaction) -> Result<()> {
        self.ledger.add(transaction);
        self.persist()
    }

    /// Removes the entry at `index`, returning it for UI feedback. A stale
    /// or out-of-range index is a no-op and persists nothing.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<Transaction>> {
        let Some(removed) = self.ledger.remove_at(index) else {
            tracing::debug!("ignoring delete for out-of-range index {index}");
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empties the ledger and deletes the stored representation.
    pub fn clear(&mut self) -> Result<()> {
        self.ledger.clear();
        for key in keys::ALL {
            self.backend.remove(key)?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(self.ledger.transactions())?;
        let totals = self.ledger.totals();
        self.backend.set(keys::TRANSACTIONS, &json)?;
        self.backend.set(keys::TOTAL_INCOME, &totals.income.to_string())?;
        self.backend
            .set(keys::TOTAL_EXPENSES, &totals.expenses.to_string())?;
        self.backend
            .set(keys::CURRENT_BALANCE, &totals.balance.to_string())?;
        Ok(())
    }
}

/// Strict decode of the persisted representation. Any unreadable piece fails
/// the whole read; the caller substitutes the zero-value ledger.
fn read_ledger(backend: &dyn KeyValueStore) -> Result<Ledger> {
    let transactions = match backend.get(keys::TRANSACTIONS)? {
        Some(json) => serde_json::from_str(&json)?,
        None => Vec::new(),
    };
    let totals = Totals {
        income: read_scalar(backend, keys::TOTAL_INCOME)?,
        expenses: read_scalar(backend, keys::TOTAL_EXPENSES)?,
        balance: read_scalar(backend, keys::CURRENT_BALANCE)?,
    };
    Ok(Ledger::from_parts(transactions, totals))
}

fn read_scalar(backend: &dyn KeyValueStore, key: &str) -> Result<f64> {
    match backend.get(key)? {
        Some(raw) => raw.trim().parse().map_err(|_| {
            crate::errors::TrackerError::Storage(format!("`{key}` holds a non-numeric value"))
        }),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use crate::storage::MemoryStore;

    fn store() -> LedgerStore {
        LedgerStore::load(Box::new(MemoryStore::new()))
    }

    fn income(category: &str, amount: f64) -> Transaction {
        Transaction::new(TransactionKind::Income, category, None, None, amount)
    }

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction::new(TransactionKind::Expense, category, None, None, amount)
    }

    #[test]
    fn starts_empty_when_backend_is_blank() {
        let store = store();
        assert!(store.ledger().is_empty());
        assert_eq!(store.totals(), Totals::default());
    }

    #[test]
    fn add_persists_all_four_keys() {
        let mut store = store();
        store.add(income("Salary", 1000.0)).expect("add");
        store.add(expense("Groceries", 40.0)).expect("add");

        // reload through a fresh store over the same backend state
        let backend = MemoryStore::with_entries([
            (
                keys::TRANSACTIONS,
                serde_json::to_string(store.transactions()).unwrap(),
            ),
            (keys::TOTAL_INCOME, "1000".to_string()),
            (keys::TOTAL_EXPENSES, "40".to_string()),
            (keys::CURRENT_BALANCE, "960".to_string()),
        ]);
        let reloaded = LedgerStore::load(Box::new(backend));
        assert_eq!(reloaded.transactions().len(), 2);
        assert_eq!(reloaded.totals().balance, 960.0);
    }

    #[test]
    fn corrupt_transactions_json_degrades_to_zero_ledger() {
        let backend = MemoryStore::with_entries([(keys::TRANSACTIONS, "{not json")]);
        let store = LedgerStore::load(Box::new(backend));
        assert!(store.ledger().is_empty());
        assert_eq!(store.totals(), Totals::default());
    }

    #[test]
    fn non_numeric_scalar_degrades_to_zero_ledger() {
        let backend = MemoryStore::with_entries([
            (keys::TRANSACTIONS, "[]"),
            (keys::TOTAL_INCOME, "lots"),
        ]);
        let store = LedgerStore::load(Box::new(backend));
        assert_eq!(store.totals(), Totals::default());
    }

    #[test]
    fn missing_keys_mean_zero() {
        let backend = MemoryStore::with_entries([(keys::TOTAL_INCOME, "250")]);
        let store = LedgerStore::load(Box::new(backend));
        assert_eq!(store.totals().income, 250.0);
        assert_eq!(store.totals().expenses, 0.0);
        assert!(store.ledger().is_empty());
    }

    #[test]
    fn remove_at_returns_the_removed_entry() {
        let mut store = store();
        store.add(income("Salary", 1000.0)).expect("add");
        store.add(expense("Groceries", 40.0)).expect("add");

        let removed = store.remove_at(1).expect("remove").expect("in range");
        assert_eq!(removed.category, "Groceries");
        assert_eq!(store.totals().balance, 1000.0);

        assert!(store.remove_at(10).expect("remove").is_none());
    }

    #[test]
    fn clear_removes_stored_keys() {
        let mut backend = MemoryStore::new();
        backend.set(keys::TOTAL_INCOME, "5").unwrap();
        let mut store = LedgerStore::load(Box::new(backend));
        store.add(income("Salary", 10.0)).expect("add");
        store.clear().expect("clear");
        assert!(store.ledger().is_empty());
        assert_eq!(store.totals(), Totals::default());
    }
}
