pub mod json_backend;
pub mod memory;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Key names of the persisted ledger representation. Each value is a string:
/// a JSON array under `transactions`, decimal strings for the three scalars.
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const TOTAL_INCOME: &str = "totalIncome";
    pub const TOTAL_EXPENSES: &str = "totalExpenses";
    pub const CURRENT_BALANCE: &str = "currentBalance";

    pub const ALL: &[&str] = &[TRANSACTIONS, TOTAL_INCOME, TOTAL_EXPENSES, CURRENT_BALANCE];
}

/// Abstraction over string key-value persistence backends. Writes are
/// whole-value overwrites; absence of a key is a valid state.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
