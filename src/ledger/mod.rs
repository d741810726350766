//! Ledger domain models, aggregation helpers, and input validation.

pub mod aggregate;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use aggregate::{category_totals, CategoryBreakdown};
pub use category::{suggestions_for, EXPENSE_PRESETS, INCOME_PRESETS};
pub use ledger::{Ledger, Totals};
pub use transaction::{
    InputError, Transaction, TransactionDraft, TransactionKind, DESCRIPTION_MAX_LEN,
};
