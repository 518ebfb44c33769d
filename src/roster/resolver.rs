//! Effective duty resolution.
//!
//! An override for the exact date always wins; otherwise the weekly
//! template entry for the date's weekday applies. Nothing here mutates.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use super::model::{DutyDay, DutySnapshot, DutySource, WeeklyTemplate};
use super::overrides::OverrideStore;
use super::weekday::Weekday;

/// Resolves the on-duty drivers for `date`.
#[must_use]
pub fn resolve(
    template: &WeeklyTemplate,
    overrides: &OverrideStore,
    date: NaiveDate,
) -> Vec<DutySnapshot> {
    resolve_day(template, overrides, date).drivers
}

/// Resolves `date` and reports which store supplied the result.
#[must_use]
pub fn resolve_day(template: &WeeklyTemplate, overrides: &OverrideStore, date: NaiveDate) -> DutyDay {
    let day = Weekday::of(date);

    if let Some(drivers) = overrides.get(date) {
        return DutyDay { date, day, source: DutySource::Override, drivers: drivers.to_vec() };
    }

    let drivers = if let Some(drivers) = template.day(day) {
        drivers.to_vec()
    } else {
        tracing::warn!(%date, %day, "weekly template has no entry for weekday");
        Vec::new()
    };
    DutyDay { date, day, source: DutySource::Template, drivers }
}

/// Resolves `days` consecutive dates starting at `start`.
#[must_use]
pub fn resolve_range(
    template: &WeeklyTemplate,
    overrides: &OverrideStore,
    start: NaiveDate,
    days: usize,
) -> Vec<DutyDay> {
    start.iter_days().take(days).map(|date| resolve_day(template, overrides, date)).collect()
}

/// What an editor should pre-fill when opening the override form for `date`.
///
/// The saved override if there is one, else the resolved duty list.
#[must_use]
pub fn override_seed(
    template: &WeeklyTemplate,
    overrides: &OverrideStore,
    date: NaiveDate,
) -> Vec<DutySnapshot> {
    overrides.get(date).map_or_else(|| resolve(template, overrides, date), <[_]>::to_vec)
}

/// Calendar date of `now` in the reference zone `offset`.
#[must_use]
pub fn local_date(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}
