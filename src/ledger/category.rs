use super::transaction::TransactionKind;

/// Advisory category suggestions; free-text entry is never constrained.
pub const INCOME_PRESETS: &[&str] = &[
    "Salary",
    "Bonus",
    "Interest",
    "Investment",
    "Refund",
    "Other",
];

pub const EXPENSE_PRESETS: &[&str] = &[
    "Groceries",
    "Rent",
    "Utilities",
    "Transport",
    "Entertainment",
    "Dining",
    "Healthcare",
    "Shopping",
    "Bills",
    "Other",
];

pub fn suggestions_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_PRESETS,
        TransactionKind::Expense => EXPENSE_PRESETS,
    }
}
