use chrono::NaiveDate;
use tempfile::TempDir;

use tally_core::core::LedgerStore;
use tally_core::ledger::{Totals, Transaction, TransactionKind};
use tally_core::storage::{keys, JsonFileStore, KeyValueStore};

fn open_store(dir: &TempDir) -> LedgerStore {
    let backend = JsonFileStore::open(dir.path().join("store.json")).expect("open backend");
    LedgerStore::load(Box::new(backend))
}

#[test]
fn ledger_roundtrips_identically() {
    let dir = TempDir::new().expect("temp dir");

    let mut store = open_store(&dir);
    store
        .add(Transaction::new(
            TransactionKind::Income,
            "Salary",
            NaiveDate::from_ymd_opt(2024, 1, 1),
            Some("january pay".into()),
            2500.0,
        ))
        .unwrap();
    store
        .add(Transaction::new(
            TransactionKind::Expense,
            "Rent",
            None,
            None,
            1200.0,
        ))
        .unwrap();
    let written = store.transactions().to_vec();
    let totals = store.totals();
    drop(store);

    let reloaded = open_store(&dir);
    assert_eq!(reloaded.transactions().len(), written.len());
    for (before, after) in written.iter().zip(reloaded.transactions()) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.kind, after.kind);
        assert_eq!(before.category, after.category);
        assert_eq!(before.date, after.date);
        assert_eq!(before.description, after.description);
        assert_eq!(before.amount, after.amount);
    }
    assert_eq!(reloaded.totals(), totals);
}

#[test]
fn corrupt_transactions_key_means_fresh_start() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut backend = JsonFileStore::open(&path).expect("open backend");
    backend.set(keys::TRANSACTIONS, "][ not json").unwrap();
    backend.set(keys::TOTAL_INCOME, "100").unwrap();
    drop(backend);

    let backend = JsonFileStore::open(&path).expect("reopen backend");
    let store = LedgerStore::load(Box::new(backend));
    assert!(store.ledger().is_empty());
    assert_eq!(store.totals(), Totals::default());
}

#[test]
fn non_numeric_scalar_means_fresh_start() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut backend = JsonFileStore::open(&path).expect("open backend");
    backend.set(keys::TRANSACTIONS, "[]").unwrap();
    backend.set(keys::CURRENT_BALANCE, "plenty").unwrap();
    drop(backend);

    let backend = JsonFileStore::open(&path).expect("reopen backend");
    let store = LedgerStore::load(Box::new(backend));
    assert_eq!(store.totals(), Totals::default());
}

#[test]
fn clear_removes_the_stored_keys() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut store =
        LedgerStore::load(Box::new(JsonFileStore::open(&path).expect("open backend")));
    store
        .add(Transaction::new(
            TransactionKind::Income,
            "Salary",
            None,
            None,
            10.0,
        ))
        .unwrap();
    store.clear().unwrap();
    drop(store);

    let backend = JsonFileStore::open(&path).expect("reopen backend");
    for key in keys::ALL {
        assert_eq!(backend.get(key).unwrap(), None, "key `{key}` should be gone");
    }
}

#[test]
fn mutations_write_through_immediately() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("store.json");

    let mut store =
        LedgerStore::load(Box::new(JsonFileStore::open(&path).expect("open backend")));
    store
        .add(Transaction::new(
            TransactionKind::Expense,
            "Groceries",
            None,
            None,
            40.0,
        ))
        .unwrap();

    // an independent reader of the file sees the completed add
    let backend = JsonFileStore::open(&path).expect("independent open");
    assert!(backend
        .get(keys::TRANSACTIONS)
        .unwrap()
        .expect("transactions key written")
        .contains("Groceries"));
    assert_eq!(
        backend.get(keys::TOTAL_EXPENSES).unwrap().as_deref(),
        Some("40")
    );
}
