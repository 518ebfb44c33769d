//! Date-keyed overrides of the weekly template.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::{DutySnapshot, Override};

/// Sparse set of per-date rosters, at most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideStore {
    by_date: BTreeMap<NaiveDate, Vec<DutySnapshot>>,
}

impl OverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All overrides in ascending date order.
    #[must_use]
    pub fn list(&self) -> Vec<Override> {
        self.by_date
            .iter()
            .map(|(date, drivers)| Override { date: *date, drivers: drivers.clone() })
            .collect()
    }

    /// The override for `date`, if one has been saved.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&[DutySnapshot]> {
        self.by_date.get(&date).map(Vec::as_slice)
    }

    /// Saves `drivers` as the roster for `date`, replacing any earlier override.
    pub fn upsert(&mut self, date: NaiveDate, drivers: Vec<DutySnapshot>) -> Override {
        self.by_date.insert(date, drivers.clone());
        Override { date, drivers }
    }

    /// Drops the override for `date`. Returns whether one existed.
    pub fn reset(&mut self, date: NaiveDate) -> bool {
        self.by_date.remove(&date).is_some()
    }

    /// Number of dates with an override.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns `true` when no date is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl FromIterator<Override> for OverrideStore {
    /// Later entries for the same date replace earlier ones.
    fn from_iter<I: IntoIterator<Item = Override>>(iter: I) -> Self {
        let mut store = Self::new();
        for entry in iter {
            store.upsert(entry.date, entry.drivers);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sara() -> Vec<DutySnapshot> {
        vec![DutySnapshot::new("Sara", "0111")]
    }

    #[test]
    fn upsert_twice_keeps_one_entry_with_latest_drivers() {
        let mut store = OverrideStore::new();
        store.upsert(date(2024, 3, 10), sara());
        let saved = store.upsert(date(2024, 3, 10), vec![DutySnapshot::new("Omar", "0222")]);

        assert_eq!(store.len(), 1);
        assert_eq!(saved.drivers[0].name, "Omar");
        assert_eq!(store.get(date(2024, 3, 10)).unwrap()[0].name, "Omar");
    }

    #[test]
    fn upsert_allows_an_empty_roster() {
        let mut store = OverrideStore::new();
        store.upsert(date(2024, 3, 10), Vec::new());
        assert_eq!(store.get(date(2024, 3, 10)), Some(&[] as &[DutySnapshot]));
    }

    #[test]
    fn reset_is_a_no_op_when_absent() {
        let mut store = OverrideStore::new();
        assert!(!store.reset(date(2024, 3, 10)));
        store.upsert(date(2024, 3, 10), sara());
        assert!(store.reset(date(2024, 3, 10)));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_sorted_by_date() {
        let mut store = OverrideStore::new();
        store.upsert(date(2024, 5, 1), sara());
        store.upsert(date(2024, 1, 2), sara());
        store.upsert(date(2024, 3, 10), sara());

        let dates: Vec<NaiveDate> = store.list().into_iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 2), date(2024, 3, 10), date(2024, 5, 1)]);
    }

    #[test]
    fn collecting_folds_duplicate_dates() {
        let store: OverrideStore = vec![
            Override { date: date(2024, 3, 10), drivers: sara() },
            Override { date: date(2024, 3, 10), drivers: Vec::new() },
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 1);
        assert!(store.get(date(2024, 3, 10)).unwrap().is_empty());
    }
}
