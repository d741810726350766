//! Interactive entry wizard for new transactions.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::ledger::{suggestions_for, TransactionDraft, TransactionKind, DESCRIPTION_MAX_LEN};

/// Walks through the transaction fields. Returns `None` when the user backs
/// out at the type prompt; field-level problems are re-prompted in place.
pub fn transaction_wizard(
    theme: &ColorfulTheme,
) -> Result<Option<TransactionDraft>, CommandError> {
    let kinds = ["income", "expense"];
    let Some(selected) = Select::with_theme(theme)
        .with_prompt("Type")
        .items(&kinds)
        .default(1)
        .interact_opt()
        .map_err(interaction_failed)?
    else {
        return Ok(None);
    };
    let kind = if selected == 0 {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    // Suggestions track the selected type, advisory only.
    output::info(format!(
        "Suggestions: {}",
        suggestions_for(kind).join(", ")
    ));

    let category: String = Input::with_theme(theme)
        .with_prompt("Category")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Please enter a category.")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(interaction_failed)?;

    let date: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD, blank for none)")
        .allow_empty(true)
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if trimmed.is_empty() || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err("Dates must look like 2024-01-31 (or be left blank).")
            }
        })
        .interact_text()
        .map_err(interaction_failed)?;

    let description: String = Input::with_theme(theme)
        .with_prompt(format!("Description (blank for none, max {DESCRIPTION_MAX_LEN})"))
        .allow_empty(true)
        .validate_with(|input: &String| {
            let used = input.trim().chars().count();
            if used > DESCRIPTION_MAX_LEN {
                Err(format!("Too long: {used}/{DESCRIPTION_MAX_LEN} characters."))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(interaction_failed)?;
    output::info(format!(
        "{}/{} characters used.",
        description.trim().chars().count(),
        DESCRIPTION_MAX_LEN
    ));

    let amount: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .validate_with(|input: &String| match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(()),
            _ => Err("Please enter an amount greater than 0."),
        })
        .interact_text()
        .map_err(interaction_failed)?;

    let mut draft = TransactionDraft::new(kind);
    draft.category = category;
    draft.date = date;
    draft.description = description;
    draft.amount = amount;
    Ok(Some(draft))
}

fn interaction_failed(err: dialoguer::Error) -> CommandError {
    CommandError::Invalid(format!("input interrupted: {err}"))
}
