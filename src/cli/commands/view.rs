use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::ledger::{category_totals, suggestions_for, TransactionKind};
use crate::view::chart;

use super::CommandDefinition;

const CATEGORIES_USAGE: &str = "categories [income|expense]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "list",
            "Show the transaction list (respects the active filter)",
            "list",
            handle_list,
        ),
        CommandDefinition::new("summary", "Show the three running totals", "summary", handle_summary),
        CommandDefinition::new(
            "chart",
            "Show spending by category",
            "chart",
            handle_chart,
        ),
        CommandDefinition::new(
            "filter",
            "Toggle the list filter for a chart category; no argument clears it",
            "filter [category]",
            handle_filter,
        ),
        CommandDefinition::new(
            "categories",
            "Show advisory category suggestions",
            CATEGORIES_USAGE,
            handle_categories,
        ),
    ]
}

fn handle_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.refresh_filter_views();
    Ok(())
}

fn handle_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.store().totals();
    context.summary_mut().render(totals);
    Ok(())
}

fn handle_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    chart::render(
        &category_totals(context.store().transactions()),
        context.currency_symbol(),
    );
    Ok(())
}

fn handle_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        let was_active = context.filter().is_active();
        context.filter_mut().clear();
        if !was_active {
            output::info("No filter is active.");
        }
    } else {
        let category = args.join(" ");
        context.filter_mut().toggle(&category);
        if !context.filter().is_active() {
            output::info("Showing all transactions.");
        }
    }
    context.refresh_filter_views();
    Ok(())
}

fn handle_categories(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds: &[TransactionKind] = match args {
        [] => &[TransactionKind::Income, TransactionKind::Expense],
        [raw] => match TransactionKind::parse(raw) {
            Some(TransactionKind::Income) => &[TransactionKind::Income],
            Some(TransactionKind::Expense) => &[TransactionKind::Expense],
            None => return Err(CommandError::Usage(CATEGORIES_USAGE)),
        },
        _ => return Err(CommandError::Usage(CATEGORIES_USAGE)),
    };

    output::section("Categories");
    for kind in kinds {
        output::info(format!(
            "  {:<8} {}",
            kind.as_str(),
            suggestions_for(*kind).join(", ")
        ));
    }
    output::info("Suggestions are advisory; any category name is accepted.");
    Ok(())
}
