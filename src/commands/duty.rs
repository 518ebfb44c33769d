//! `roster duty` and `roster week` commands.

use super::format::{duty_list, table};
use super::Session;
use crate::roster::{parse_date, DutyDay, DutySource, Locale};

const WEEK_LEN: usize = 7;

/// Execute the `duty` command: who is on duty on one date.
///
/// # Errors
///
/// Returns an error string if the date is malformed or the store cannot be loaded.
pub fn run_day(session: &Session, date: Option<&str>) -> Result<String, String> {
    let roster = session.load()?;
    let day = match date {
        Some(date) => roster.resolve_day(parse_date(date).map_err(|e| e.to_string())?),
        None => roster.resolve_today(session.ctx.clock.as_ref(), session.config.utc_offset),
    };

    session.render(&day, || {
        let mut out = format!(
            "{} {} ({})\n",
            day.date,
            day.day.label(session.config.locale),
            source_label(day.source)
        );
        if day.drivers.is_empty() {
            out.push_str("  (nobody)\n");
        }
        for driver in &day.drivers {
            out.push_str(&format!("  {}  {}\n", driver.name, driver.phone));
        }
        out
    })
}

/// Execute the `week` command: seven consecutive days from a date.
///
/// # Errors
///
/// Returns an error string if the date is malformed or the store cannot be loaded.
pub fn run_week(session: &Session, date: Option<&str>) -> Result<String, String> {
    let start = session.date_or_today(date)?;
    let roster = session.load()?;
    let days = roster.resolve_range(start, WEEK_LEN);

    session.render(&days, || week_table(&days, session.config.locale))
}

fn week_table(days: &[DutyDay], locale: Locale) -> String {
    let rows: Vec<Vec<String>> = days
        .iter()
        .map(|d| {
            vec![
                d.date.to_string(),
                d.day.label(locale).to_string(),
                source_label(d.source).to_string(),
                duty_list(&d.drivers),
            ]
        })
        .collect();
    table(&["DATE", "DAY", "SOURCE", "ON DUTY"], &rows)
}

fn source_label(source: DutySource) -> &'static str {
    match source {
        DutySource::Override => "override",
        DutySource::Template => "template",
    }
}
