//! Shell context, command dispatch, and the error types between them.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::store::LedgerStore,
    errors::TrackerError,
    ledger::{category_totals, InputError},
    storage::JsonFileStore,
    view::{banner, chart, list, SummaryView},
};

use super::commands::{self, CommandRegistry};
use super::output::{self, OutputPreferences};
use super::state::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Errors that abort the shell entirely.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Errors reported to the user without leaving the shell loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Invalid(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    theme: ColorfulTheme,
    store: LedgerStore,
    filter: FilterState,
    summary: SummaryView,
    config: Config,
    config_manager: ConfigManager,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let registry = CommandRegistry::new(commands::all_definitions());

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        output::set_preferences(preferences_for(&config, mode));

        let backend = JsonFileStore::open_default(config.data_dir.clone())?;
        let store = LedgerStore::load(Box::new(backend));
        let summary = SummaryView::new(config.currency_symbol.clone());

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            store,
            filter: FilterState::default(),
            summary,
            config,
            config_manager,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn command_names(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn prompt(&self) -> String {
        match self.filter.category() {
            Some(category) => format!("tally[{category}]> "),
            None => "tally> ".into(),
        }
    }

    pub(crate) fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut LedgerStore {
        &mut self.store
    }

    pub(crate) fn summary_mut(&mut self) -> &mut SummaryView {
        &mut self.summary
    }

    pub(crate) fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn set_currency_symbol(&mut self, symbol: &str) -> CommandResult {
        self.config.currency_symbol = symbol.to_string();
        self.summary.set_symbol(symbol);
        self.persist_config()
    }

    pub(crate) fn set_plain_output(&mut self, plain: bool) -> CommandResult {
        self.config.plain_output = plain;
        output::set_preferences(preferences_for(&self.config, self.mode));
        self.persist_config()
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    /// Summary, list, and chart, in that order. This is the refresh that
    /// follows every ledger mutation.
    pub(crate) fn refresh_data_views(&mut self) {
        let totals = self.store.totals();
        self.summary.render(totals);
        let symbol = self.config.currency_symbol.clone();
        list::render(self.store.transactions(), self.filter.category(), &symbol);
        chart::render(&category_totals(self.store.transactions()), &symbol);
    }

    /// Banner and list only; filter changes never re-aggregate.
    pub(crate) fn refresh_filter_views(&self) {
        banner::render(self.filter.category());
        list::render(
            self.store.transactions(),
            self.filter.category(),
            &self.config.currency_symbol,
        );
    }

    pub(crate) fn render_startup(&mut self) {
        self.refresh_data_views();
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| CommandError::Invalid(format!("confirmation failed: {err}")))
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        let confirmed = dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt("Exit the shell?")
            .default(true)
            .interact()
            .unwrap_or(true);
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(err);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = match self.registry.get(command) {
            Some(definition) => definition.handler,
            None => {
                return Err(CommandError::Invalid(unknown_command_message(
                    command,
                    &self.registry.names(),
                )))
            }
        };
        handler(self, args)?;
        Ok(if self.running {
            LoopControl::Continue
        } else {
            LoopControl::Exit
        })
    }
}

fn preferences_for(config: &Config, mode: CliMode) -> OutputPreferences {
    let plain = config.plain_output || mode == CliMode::Script;
    OutputPreferences {
        plain_mode: plain,
        animations: mode == CliMode::Interactive && !plain,
    }
}

fn unknown_command_message(command: &str, names: &[&str]) -> String {
    let suggestion = names
        .iter()
        .map(|name| (levenshtein(command, name), *name))
        .min()
        .filter(|(distance, _)| *distance <= 3);
    match suggestion {
        Some((_, name)) => format!("Unknown command `{command}`. Did you mean `{name}`?"),
        None => format!("Unknown command `{command}`. Type `help` for the command list."),
    }
}
