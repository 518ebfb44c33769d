//! `roster template` commands.

use std::path::Path;

use super::format::{duty_list, table};
use super::Session;
use crate::cli::TemplateCommand;
use crate::roster::{Locale, WeeklyEntry, WeeklyTemplate};

/// Execute a `template` subcommand.
///
/// # Errors
///
/// Returns an error string if the store cannot be loaded or saved, a
/// driver id is unknown, or the new template is rejected.
pub fn run(session: &Session, command: &TemplateCommand) -> Result<String, String> {
    let roster = session.load()?;

    let template = match command {
        TemplateCommand::Show => roster.weekly_template(),
        TemplateCommand::Assign { day, driver_ids } => {
            let drivers = roster.snapshots_of(driver_ids).map_err(|e| e.to_string())?;
            // The template is only ever saved whole.
            let entries = Vec::<WeeklyEntry>::from(roster.weekly_template())
                .into_iter()
                .map(|entry| {
                    if entry.day == *day {
                        WeeklyEntry::new(*day, drivers.clone())
                    } else {
                        entry
                    }
                })
                .collect();
            let template = roster.replace_weekly_template(entries).map_err(|e| e.to_string())?;
            session.save(&roster)?;
            template
        }
        TemplateCommand::Load { file } => {
            let entries = read_entries(session, file)?;
            let template = roster.replace_weekly_template(entries).map_err(|e| e.to_string())?;
            session.save(&roster)?;
            template
        }
    };

    session.render(&template, || template_table(&template, session.config.locale))
}

fn read_entries(session: &Session, file: &Path) -> Result<Vec<WeeklyEntry>, String> {
    let contents = session
        .ctx
        .fs
        .read_to_string(file)
        .map_err(|e| format!("Failed to read template file {}: {e}", file.display()))?;
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse template file {}: {e}", file.display()))
}

fn template_table(template: &WeeklyTemplate, locale: Locale) -> String {
    let rows: Vec<Vec<String>> = template
        .entries()
        .iter()
        .map(|entry| vec![entry.day.label(locale).to_string(), duty_list(&entry.drivers)])
        .collect();
    table(&["DAY", "ON DUTY"], &rows)
}
