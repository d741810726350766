use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

use super::CommandDefinition;

const CONFIG_USAGE: &str = "config [currency <symbol> | plain <on|off>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "Show or change shell preferences",
        CONFIG_USAGE,
        handle_config,
    )]
}

fn handle_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = context.config();
            output::section("Configuration");
            output::info(format!("  currency  {}", config.currency_symbol));
            output::info(format!(
                "  plain     {}",
                if config.plain_output { "on" } else { "off" }
            ));
            Ok(())
        }
        ["currency", symbol] => {
            context.set_currency_symbol(symbol)?;
            output::success(format!("Currency symbol set to `{symbol}`."));
            Ok(())
        }
        ["plain", value] => {
            let plain = match *value {
                "on" => true,
                "off" => false,
                _ => return Err(CommandError::Usage(CONFIG_USAGE)),
            };
            context.set_plain_output(plain)?;
            output::success(format!(
                "Plain output {}.",
                if plain { "enabled" } else { "disabled" }
            ));
            Ok(())
        }
        _ => Err(CommandError::Usage(CONFIG_USAGE)),
    }
}
