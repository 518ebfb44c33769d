//! Library-level behaviour of the duty roster: precedence, fallback and cascades.

use std::sync::Arc;

use chrono::NaiveDate;
use duty_roster::adapters::fixed::SequentialIdGenerator;
use duty_roster::roster::{
    parse_date, Driver, DriverInput, DutyRoster, DutySnapshot, RosterError, WeeklyEntry, Weekday,
};

fn date(input: &str) -> NaiveDate {
    parse_date(input).unwrap()
}

fn snap(name: &str, phone: &str) -> DutySnapshot {
    DutySnapshot::new(name, phone)
}

fn template_with(roster: &DutyRoster, day: Weekday, drivers: Vec<DutySnapshot>) {
    let entries = Weekday::ALL
        .iter()
        .map(|d| WeeklyEntry::new(*d, if *d == day { drivers.clone() } else { Vec::new() }))
        .collect();
    roster.replace_weekly_template(entries).unwrap();
}

struct Fixture {
    roster: DutyRoster,
    ahmed: Driver,
    sara: Driver,
}

fn fixture() -> Fixture {
    let roster = DutyRoster::new(Arc::new(SequentialIdGenerator::new("drv")));
    let ahmed = roster.create_driver(DriverInput::new("Ahmed", "0100")).unwrap();
    let sara = roster.create_driver(DriverInput::new("Sara", "0111")).unwrap();
    template_with(&roster, Weekday::Sunday, vec![ahmed.snapshot()]);
    Fixture { roster, ahmed, sara }
}

#[test]
fn walkthrough_from_template_to_cascades() {
    let Fixture { roster, ahmed, sara } = fixture();
    let sunday = date("2024-03-10");

    // Template applies when no override exists.
    assert_eq!(roster.resolve_duty_for_date(sunday), vec![snap("Ahmed", "0100")]);

    // An override wins.
    roster.upsert_override(sunday, vec![sara.snapshot()]);
    assert_eq!(roster.resolve_duty_for_date(sunday), vec![snap("Sara", "0111")]);

    // Reset falls back to the template.
    assert!(roster.reset_override(sunday));
    assert_eq!(roster.resolve_duty_for_date(sunday), vec![snap("Ahmed", "0100")]);

    // Rename follows into the template but not into an override on another date.
    let next_sunday = date("2024-03-17");
    roster.upsert_override(next_sunday, vec![sara.snapshot(), ahmed.snapshot()]);
    roster.update_driver(&ahmed.id, DriverInput::new("Ahmed K.", "0199")).unwrap();
    assert_eq!(roster.weekly_template().day(Weekday::Sunday).unwrap(), [snap("Ahmed K.", "0199")]);
    assert_eq!(
        roster.resolve_duty_for_date(next_sunday),
        vec![snap("Sara", "0111"), snap("Ahmed", "0100")]
    );

    // Delete removes from the template; the override keeps its snapshot.
    template_with(&roster, Weekday::Monday, vec![snap("Sara", "0111"), snap("Ahmed K.", "0199")]);
    roster.delete_driver(&sara.id).unwrap();
    assert_eq!(roster.weekly_template().day(Weekday::Monday).unwrap(), [snap("Ahmed K.", "0199")]);
    assert!(roster.resolve_duty_for_date(next_sunday).contains(&snap("Sara", "0111")));
}

#[test]
fn override_takes_precedence_on_every_date_of_a_week() {
    let Fixture { roster, sara, .. } = fixture();
    let start = date("2024-03-10");

    for day in start.iter_days().take(7) {
        roster.upsert_override(day, vec![sara.snapshot()]);
        assert_eq!(roster.resolve_duty_for_date(day), vec![sara.snapshot()]);
    }
}

#[test]
fn template_fallback_matches_weekday() {
    let Fixture { roster, .. } = fixture();

    for day in date("2024-02-25").iter_days().take(21) {
        let expected = roster.weekly_template().day(Weekday::of(day)).unwrap().to_vec();
        assert_eq!(roster.resolve_duty_for_date(day), expected);
    }
}

#[test]
fn resetting_a_date_without_override_is_a_no_op() {
    let Fixture { roster, .. } = fixture();
    assert!(!roster.reset_override(date("2024-03-12")));
    assert!(roster.list_overrides().is_empty());
}

#[test]
fn upsert_replaces_by_date() {
    let Fixture { roster, ahmed, sara } = fixture();
    let day = date("2024-03-11");

    roster.upsert_override(day, vec![ahmed.snapshot()]);
    roster.upsert_override(day, vec![sara.snapshot()]);

    let overrides = roster.list_overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].drivers, vec![sara.snapshot()]);
}

#[test]
fn empty_override_means_nobody_on_duty() {
    let Fixture { roster, .. } = fixture();
    let sunday = date("2024-03-10");
    roster.upsert_override(sunday, Vec::new());
    assert!(roster.resolve_duty_for_date(sunday).is_empty());
}

#[test]
fn rename_reaches_every_occurrence_on_every_day() {
    let Fixture { roster, ahmed, .. } = fixture();
    let entries = Weekday::ALL
        .iter()
        .map(|d| WeeklyEntry::new(*d, vec![ahmed.snapshot(), snap("Omar", "0222"), ahmed.snapshot()]))
        .collect();
    roster.replace_weekly_template(entries).unwrap();

    roster.update_driver(&ahmed.id, DriverInput::new("Ahmed K.", "0199")).unwrap();

    for entry in roster.weekly_template().entries() {
        assert!(entry.drivers.iter().all(|d| d.name != "Ahmed"));
        assert_eq!(entry.drivers.iter().filter(|d| **d == snap("Ahmed K.", "0199")).count(), 2);
    }
}

#[test]
fn drivers_sharing_a_name_are_renamed_together() {
    let roster = DutyRoster::new(Arc::new(SequentialIdGenerator::new("drv")));
    let first = roster.create_driver(DriverInput::new("Ali", "0300")).unwrap();
    roster.create_driver(DriverInput::new("Ali", "0301")).unwrap();
    template_with(&roster, Weekday::Tuesday, vec![snap("Ali", "0300"), snap("Ali", "0301")]);

    roster.update_driver(&first.id, DriverInput::new("Ali B.", "0300")).unwrap();

    assert_eq!(
        roster.weekly_template().day(Weekday::Tuesday).unwrap(),
        [snap("Ali B.", "0300"), snap("Ali B.", "0300")]
    );
}

#[test]
fn rejected_template_leaves_prior_template() {
    let Fixture { roster, .. } = fixture();
    let before = roster.weekly_template();

    let six_days: Vec<WeeklyEntry> =
        Weekday::ALL[..6].iter().map(|d| WeeklyEntry::new(*d, Vec::new())).collect();
    let err = roster.replace_weekly_template(six_days).unwrap_err();
    assert!(matches!(err, RosterError::InvalidTemplate { .. }));

    let mut repeated: Vec<WeeklyEntry> =
        Weekday::ALL[..6].iter().map(|d| WeeklyEntry::new(*d, Vec::new())).collect();
    repeated.push(WeeklyEntry::new(Weekday::Monday, Vec::new()));
    assert!(roster.replace_weekly_template(repeated).is_err());

    assert_eq!(roster.weekly_template(), before);
}

#[test]
fn unknown_ids_are_not_found() {
    let Fixture { roster, .. } = fixture();
    assert_eq!(
        roster.update_driver("ghost", DriverInput::new("X", "0")).unwrap_err(),
        RosterError::NotFound { id: "ghost".into() }
    );
    assert!(matches!(roster.delete_driver("ghost"), Err(RosterError::NotFound { .. })));
}
