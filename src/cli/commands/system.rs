use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;

use super::CommandDefinition;

const CLEAR_USAGE: &str = "clear [--yes]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "clear",
            "Delete every transaction and reset the totals",
            CLEAR_USAGE,
            handle_clear,
        ),
        CommandDefinition::new("help", "Show available commands", "help [command]", handle_help),
        CommandDefinition::new("exit", "Leave the shell", "exit", handle_exit),
    ]
}

fn handle_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let confirmed = match args {
        [] => {
            if context.mode() == CliMode::Script {
                return Err(CommandError::Invalid(
                    "Confirmation is required: use `clear --yes`.".into(),
                ));
            }
            context.confirm("Clear all transactions and reset totals?")?
        }
        [flag] if matches!(*flag, "--yes" | "-y") => true,
        _ => return Err(CommandError::Usage(CLEAR_USAGE)),
    };

    if !confirmed {
        output::info("Clear cancelled.");
        return Ok(());
    }

    context.store_mut().clear()?;
    context.filter_mut().clear();
    context.refresh_data_views();
    output::success("All transactions cleared.");
    Ok(())
}

fn handle_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Available commands");
            for definition in context.registry().list() {
                output::info(format!("  {:<12} {}", definition.name, definition.description));
            }
            output::info("Use `help <command>` for usage details.");
        }
        [name] => {
            let Some(definition) = context.registry().get(&name.to_lowercase()) else {
                return Err(CommandError::Invalid(format!("Unknown command `{name}`.")));
            };
            output::section(format!("Help: {}", definition.name));
            output::info(format!("  Description: {}", definition.description));
            output::info(format!("  Usage: {}", definition.usage));
        }
        _ => return Err(CommandError::Usage("help [command]")),
    }
    Ok(())
}

fn handle_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    output::info("Exiting shell.");
    Ok(())
}
