//! Command dispatch and handlers.
//!
//! Each handler returns the text to print; `dispatch` writes it to stdout.
//! Mutating handlers load the store, apply one roster operation, and save.

pub mod drivers;
pub mod duty;
mod format;
pub mod overrides;
pub mod template;

use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::RosterConfig;
use crate::context::ServiceContext;
use crate::roster::{parse_date, resolver, DutyRoster};
use crate::store::RosterStore;

/// Everything a handler needs: ports, configuration, output mode.
pub struct Session {
    /// Port adapters.
    pub ctx: ServiceContext,
    /// Resolved configuration.
    pub config: RosterConfig,
    /// Emit JSON instead of tables.
    pub json: bool,
}

impl Session {
    /// Bundles a context and configuration.
    #[must_use]
    pub fn new(ctx: ServiceContext, config: RosterConfig, json: bool) -> Self {
        Self { ctx, config, json }
    }

    fn store(&self) -> RosterStore<'_> {
        RosterStore::new(&self.ctx, &self.config.store_root)
    }

    fn load(&self) -> Result<DutyRoster, String> {
        self.store().load().map_err(|e| e.to_string())
    }

    fn save(&self, roster: &DutyRoster) -> Result<(), String> {
        self.store().save(roster).map_err(|e| e.to_string())
    }

    fn date_or_today(&self, date: Option<&str>) -> Result<NaiveDate, String> {
        match date {
            Some(date) => parse_date(date).map_err(|e| e.to_string()),
            None => Ok(resolver::local_date(self.ctx.clock.now(), self.config.utc_offset)),
        }
    }

    /// JSON of `value` in JSON mode, otherwise the text built by `text`.
    fn render<T, F>(&self, value: &T, text: F) -> Result<String, String>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            serde_json::to_string_pretty(value)
                .map(|json| json + "\n")
                .map_err(|e| format!("Failed to serialize output: {e}"))
        } else {
            Ok(text())
        }
    }
}

/// Dispatch a parsed command.
///
/// Configuration is read from `.env` and the environment, then overridden
/// by the command-line flags.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = RosterConfig::from_env()?.with_flags(cli.store.clone(), cli.locale);
    let ctx = ServiceContext::from_config(&config);
    let session = Session::new(ctx, config, cli.json);

    let output = dispatch_with_session(&cli.command, &session)?;
    print!("{output}");
    Ok(())
}

/// Dispatch a command against an explicit session and return its output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_session(command: &Command, session: &Session) -> Result<String, String> {
    match command {
        Command::Drivers(command) => drivers::run(session, command),
        Command::Template(command) => template::run(session, command),
        Command::Overrides(command) => overrides::run(session, command),
        Command::Duty { date } => duty::run_day(session, date.as_deref()),
        Command::Week { date } => duty::run_week(session, date.as_deref()),
    }
}
