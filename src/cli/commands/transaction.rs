use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::output;
use crate::ledger::{TransactionDraft, TransactionKind};
use crate::view::format_currency;

use super::CommandDefinition;

const ADD_USAGE: &str = "add [income|expense <category> <amount> [date] [description…]]";
const DELETE_USAGE: &str = "delete <number>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record an income or expense transaction",
            ADD_USAGE,
            handle_add,
        ),
        CommandDefinition::new(
            "delete",
            "Delete a transaction by its list number",
            DELETE_USAGE,
            handle_delete,
        ),
    ]
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if context.mode() == CliMode::Script {
            return Err(CommandError::Usage(ADD_USAGE));
        }
        match forms::transaction_wizard(context.theme())? {
            Some(draft) => draft,
            None => {
                output::info("Add cancelled.");
                return Ok(());
            }
        }
    } else {
        draft_from_args(args)?
    };

    let transaction = draft.validate()?;
    let feedback = format!(
        "Recorded {} of {} in {}.",
        transaction.kind.as_str(),
        format_currency(context.currency_symbol(), transaction.amount),
        transaction.category
    );
    context.store_mut().add(transaction)?;
    context.refresh_data_views();
    output::success(feedback);
    Ok(())
}

fn draft_from_args(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    let [kind, category, amount, rest @ ..] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    let kind = TransactionKind::parse(kind).ok_or_else(|| {
        CommandError::Invalid(format!(
            "`{kind}` is not a transaction type; use `income` or `expense`."
        ))
    })?;

    let mut draft = TransactionDraft::new(kind);
    draft.category = category.to_string();
    draft.amount = amount.to_string();

    // An optional date may sit between the amount and the description.
    let description_parts = match rest {
        [first, tail @ ..] if looks_like_date(first) => {
            draft.date = first.to_string();
            tail
        }
        _ => rest,
    };
    draft.description = description_parts.join(" ");
    Ok(draft)
}

fn looks_like_date(value: &str) -> bool {
    value.len() >= 8 && value.chars().take(4).all(|c| c.is_ascii_digit()) && value.contains('-')
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::Usage(DELETE_USAGE));
    };
    let raw = raw.trim_start_matches('#');
    let number: usize = raw
        .parse()
        .ok()
        .filter(|number| *number > 0)
        .ok_or_else(|| CommandError::Invalid(format!("`{raw}` is not a list number.")))?;

    // A stale or out-of-range number is silently ignored.
    if let Some(removed) = context.store_mut().remove_at(number - 1)? {
        let feedback = format!(
            "Removed {} of {} in {}.",
            removed.kind.as_str(),
            format_currency(context.currency_symbol(), removed.amount),
            removed.category
        );
        context.refresh_data_views();
        output::success(feedback);
    }
    Ok(())
}
