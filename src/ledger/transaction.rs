use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted length for a transaction description.
pub const DESCRIPTION_MAX_LEN: usize = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// A single recorded income or expense entry.
///
/// Observable identity is the entry's position in the ledger sequence; the
/// `id` is an internal stable handle and never replaces positional deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
}

impl Transaction {
    /// Builds an already-validated transaction. Use [`TransactionDraft`] for
    /// anything that originates from user input.
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        date: Option<NaiveDate>,
        description: Option<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            category: category.into(),
            date,
            description,
            amount,
        }
    }

    /// Amount with the sign the balance sees: expenses are negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn date_display(&self) -> String {
        self.date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Rejections surfaced to the user before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a category.")]
    EmptyCategory,
    #[error("Please enter an amount greater than 0.")]
    InvalidAmount,
    #[error("Dates must look like 2024-01-31 (or be left blank).")]
    InvalidDate,
    #[error("Descriptions are limited to {DESCRIPTION_MAX_LEN} characters.")]
    DescriptionTooLong,
}

/// Raw transaction input as entered, before validation.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            category: String::new(),
            date: String::new(),
            description: String::new(),
            amount: String::new(),
        }
    }

    /// Presence and positivity checks; everything else is accepted as-is.
    pub fn validate(&self) -> Result<Transaction, InputError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(InputError::EmptyCategory);
        }

        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;

        let description = self.description.trim();
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(InputError::DescriptionTooLong);
        }
        let description = (!description.is_empty()).then(|| description.to_string());

        Ok(Transaction::new(
            self.kind, category, date, description, amount,
        ))
    }
}

fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let amount: f64 = raw.trim().parse().map_err(|_| InputError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(InputError::InvalidAmount);
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| InputError::InvalidDate)
}
