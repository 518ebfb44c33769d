//! Roster data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RosterError;
use super::weekday::Weekday;

/// A driver record owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Stable identifier assigned at creation.
    pub id: String,
    /// Display name. Duty snapshots are matched against this.
    pub name: String,
    /// Contact number.
    pub phone: String,
    /// Avatar URL or opaque reference.
    pub avatar: String,
}

impl Driver {
    /// Copies the driver's current name and phone into a duty snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DutySnapshot {
        DutySnapshot::new(self.name.clone(), self.phone.clone())
    }
}

/// Who is on duty: a `{name, phone}` copy with no link back to a driver id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DutySnapshot {
    /// Driver name at the time the snapshot was taken.
    pub name: String,
    /// Driver phone at the time the snapshot was taken.
    pub phone: String,
}

impl DutySnapshot {
    /// Creates a snapshot from a name and phone.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into() }
    }
}

/// One day of the weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    /// Weekday this entry applies to.
    pub day: Weekday,
    /// Drivers on duty for that weekday, in display order.
    #[serde(default)]
    pub drivers: Vec<DutySnapshot>,
}

impl WeeklyEntry {
    /// Creates an entry for `day` with the given drivers.
    #[must_use]
    pub fn new(day: Weekday, drivers: Vec<DutySnapshot>) -> Self {
        Self { day, drivers }
    }
}

/// The seven-entry recurring roster, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeeklyEntry>", into = "Vec<WeeklyEntry>")]
pub struct WeeklyTemplate {
    entries: Vec<WeeklyEntry>,
}

impl WeeklyTemplate {
    /// A template with all seven days present and nobody on duty.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: Weekday::ALL.iter().map(|day| WeeklyEntry::new(*day, Vec::new())).collect() }
    }

    /// Builds a template from exactly seven entries covering each weekday once.
    ///
    /// Entries are reordered Sunday first.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidTemplate`] when an entry count other
    /// than seven is supplied or a weekday is repeated or missing.
    pub fn from_entries(entries: Vec<WeeklyEntry>) -> Result<Self, RosterError> {
        if entries.len() != Weekday::ALL.len() {
            return Err(RosterError::invalid_template(format!(
                "expected {} entries, got {}",
                Weekday::ALL.len(),
                entries.len()
            )));
        }

        let mut slots: [Option<WeeklyEntry>; 7] = Default::default();
        for entry in entries {
            let slot = &mut slots[entry.day.index()];
            if slot.is_some() {
                return Err(RosterError::invalid_template(format!(
                    "{} appears more than once",
                    entry.day
                )));
            }
            *slot = Some(entry);
        }

        // Seven entries with no repeats cover every weekday.
        Ok(Self { entries: slots.into_iter().flatten().collect() })
    }

    /// All entries, Sunday first.
    #[must_use]
    pub fn entries(&self) -> &[WeeklyEntry] {
        &self.entries
    }

    /// Drivers on duty for `day`, if the template has that day.
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&[DutySnapshot]> {
        self.entries.iter().find(|entry| entry.day == day).map(|entry| entry.drivers.as_slice())
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [WeeklyEntry] {
        &mut self.entries
    }

    /// Consumes the template, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<WeeklyEntry> {
        self.entries
    }
}

impl TryFrom<Vec<WeeklyEntry>> for WeeklyTemplate {
    type Error = RosterError;

    fn try_from(entries: Vec<WeeklyEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<WeeklyTemplate> for Vec<WeeklyEntry> {
    fn from(template: WeeklyTemplate) -> Self {
        template.entries
    }
}

impl Default for WeeklyTemplate {
    fn default() -> Self {
        Self::empty()
    }
}

/// A roster for one calendar date that supersedes the weekly template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// The calendar date this override applies to.
    pub date: NaiveDate,
    /// Drivers on duty that date.
    #[serde(default)]
    pub drivers: Vec<DutySnapshot>,
}

/// Where a resolved duty list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DutySource {
    /// A date-specific override.
    Override,
    /// The weekly template entry for the date's weekday.
    Template,
}

/// One resolved calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyDay {
    /// The resolved date.
    pub date: NaiveDate,
    /// Weekday of `date`.
    pub day: Weekday,
    /// Which store supplied `drivers`.
    pub source: DutySource,
    /// Drivers on duty.
    pub drivers: Vec<DutySnapshot>,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO `YYYY-MM-DD` date key.
///
/// # Errors
///
/// Returns [`RosterError::InvalidDate`] for anything that is not a valid
/// calendar date in that exact format.
pub fn parse_date(input: &str) -> Result<NaiveDate, RosterError> {
    let trimmed = input.trim();
    let invalid = || RosterError::InvalidDate { input: input.to_string() };
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())?;
    // chrono tolerates padding, signs and short fields; keys must be canonical.
    if date.format(DATE_FORMAT).to_string() != trimmed {
        return Err(invalid());
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: Weekday, names: &[&str]) -> WeeklyEntry {
        WeeklyEntry::new(day, names.iter().map(|n| DutySnapshot::new(*n, "0100")).collect())
    }

    fn full_week() -> Vec<WeeklyEntry> {
        Weekday::ALL.iter().map(|day| entry(*day, &[])).collect()
    }

    #[test]
    fn empty_template_has_seven_days_sunday_first() {
        let template = WeeklyTemplate::empty();
        let days: Vec<Weekday> = template.entries().iter().map(|e| e.day).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
        assert!(template.entries().iter().all(|e| e.drivers.is_empty()));
    }

    #[test]
    fn from_entries_reorders_sunday_first() {
        let mut entries = full_week();
        entries.reverse();
        entries[0] = entry(Weekday::Saturday, &["Sara"]);

        let template = WeeklyTemplate::from_entries(entries).unwrap();
        assert_eq!(template.entries()[0].day, Weekday::Sunday);
        assert_eq!(template.entries()[6].day, Weekday::Saturday);
        assert_eq!(template.day(Weekday::Saturday).unwrap()[0].name, "Sara");
    }

    #[test]
    fn from_entries_rejects_short_list() {
        let mut entries = full_week();
        entries.pop();
        let err = WeeklyTemplate::from_entries(entries).unwrap_err();
        assert!(matches!(err, RosterError::InvalidTemplate { .. }));
        assert!(err.to_string().contains("got 6"));
    }

    #[test]
    fn from_entries_rejects_duplicate_day() {
        let mut entries = full_week();
        entries[3] = entry(Weekday::Monday, &[]);
        let err = WeeklyTemplate::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("Monday appears more than once"));
    }

    #[test]
    fn parse_date_is_strict() {
        assert_eq!(parse_date("2024-03-10").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(parse_date("2024-3-10").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-03-10T08:00").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_date_rejects_padded_and_signed_fields() {
        for input in ["2024- 3-10", "2024-03- 1", "+2024-3-10", "2024-+3-10", " 2024-3-1 "] {
            assert_eq!(
                parse_date(input).unwrap_err(),
                RosterError::InvalidDate { input: input.to_string() },
                "{input:?} should be rejected"
            );
        }
        assert_eq!(parse_date(" 2024-03-10\n").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn template_serializes_as_plain_list() {
        let yaml = serde_yaml::to_string(&WeeklyTemplate::empty()).unwrap();
        assert!(yaml.starts_with("- day: sunday"));
    }

    #[test]
    fn deserializing_enforces_seven_days() {
        let yaml = "- day: sunday\n  drivers: []\n- day: monday\n";
        let err = serde_yaml::from_str::<WeeklyTemplate>(yaml).unwrap_err();
        assert!(err.to_string().contains("expected 7 entries"));
    }
}
