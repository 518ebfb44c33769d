//! `roster overrides` commands.

use super::format::{duty_list, table};
use super::Session;
use crate::cli::OverridesCommand;
use crate::roster::{parse_date, Locale, Override, Weekday};

/// Execute an `overrides` subcommand.
///
/// # Errors
///
/// Returns an error string if a date is malformed, a driver id is unknown,
/// or the store cannot be loaded or saved.
pub fn run(session: &Session, command: &OverridesCommand) -> Result<String, String> {
    let roster = session.load()?;
    let locale = session.config.locale;

    match command {
        OverridesCommand::List => {
            let overrides = roster.list_overrides();
            session.render(&overrides, || override_table(&overrides, locale))
        }
        OverridesCommand::Set { date, driver_ids } => {
            let date = parse_date(date).map_err(|e| e.to_string())?;
            let drivers = roster.snapshots_of(driver_ids).map_err(|e| e.to_string())?;
            let saved = roster.upsert_override(date, drivers);
            session.save(&roster)?;
            session.render(&saved, || {
                format!("Override saved for {date}: {}\n", duty_list(&saved.drivers))
            })
        }
        OverridesCommand::Seed { date } => {
            let date = parse_date(date).map_err(|e| e.to_string())?;
            let seed = roster.override_seed(date);
            session.render(&seed, || format!("{}\n", duty_list(&seed)))
        }
        OverridesCommand::Reset { date } => {
            let date = parse_date(date).map_err(|e| e.to_string())?;
            let removed = roster.reset_override(date);
            session.save(&roster)?;
            let result = serde_json::json!({ "date": date, "removed": removed });
            session.render(&result, || {
                if removed {
                    format!("Override for {date} removed; the weekly template applies.\n")
                } else {
                    format!("No override for {date}; nothing to reset.\n")
                }
            })
        }
    }
}

fn override_table(overrides: &[Override], locale: Locale) -> String {
    if overrides.is_empty() {
        return "No overrides saved.\n".to_string();
    }
    let rows: Vec<Vec<String>> = overrides
        .iter()
        .map(|o| {
            vec![
                o.date.to_string(),
                Weekday::of(o.date).label(locale).to_string(),
                duty_list(&o.drivers),
            ]
        })
        .collect();
    table(&["DATE", "DAY", "ON DUTY"], &rows)
}
