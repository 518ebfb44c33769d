//! The duty roster facade.
//!
//! [`DutyRoster`] owns the driver registry, weekly template and override
//! store as one unit of state. Writers hold the lock across the whole
//! mutation including any cascade it triggers, so readers never see a
//! template that is updated for some days but not others.
//!
//! Concurrent editors are not reconciled: the last write wins. The roster
//! assumes a single administrator edits at a time.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{FixedOffset, NaiveDate};
use tracing::{debug, info};

use super::cascade::CascadeCoordinator;
use super::error::RosterError;
use super::model::{Driver, DutyDay, DutySnapshot, Override, WeeklyEntry, WeeklyTemplate};
use super::overrides::OverrideStore;
use super::registry::{DriverInput, DriverRegistry};
use super::resolver;
use super::snapshot::RosterSnapshot;
use super::template::WeeklyTemplateStore;
use crate::ports::clock::Clock;
use crate::ports::id_gen::IdGenerator;

#[derive(Debug, Default)]
struct RosterState {
    registry: DriverRegistry,
    template: WeeklyTemplateStore,
    overrides: OverrideStore,
}

/// Driver registry, weekly template and overrides behind one lock.
pub struct DutyRoster {
    state: RwLock<RosterState>,
    id_gen: Arc<dyn IdGenerator>,
    cascades: CascadeCoordinator,
}

impl DutyRoster {
    /// Creates an empty roster: no drivers, seven empty days, no overrides.
    #[must_use]
    pub fn new(id_gen: Arc<dyn IdGenerator>) -> Self {
        Self { state: RwLock::new(RosterState::default()), id_gen, cascades: CascadeCoordinator }
    }

    /// Rebuilds a roster from its persisted shape.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Storage`] if two drivers share an id.
    pub fn from_snapshot(
        snapshot: RosterSnapshot,
        id_gen: Arc<dyn IdGenerator>,
    ) -> Result<Self, RosterError> {
        let state = RosterState {
            registry: DriverRegistry::from_drivers(snapshot.drivers)?,
            template: WeeklyTemplateStore::from_template(snapshot.weekly_template),
            overrides: snapshot.overrides.into_iter().collect(),
        };
        Ok(Self { state: RwLock::new(state), id_gen, cascades: CascadeCoordinator })
    }

    /// Captures the current state in its persisted shape.
    #[must_use]
    pub fn snapshot(&self) -> RosterSnapshot {
        let state = self.read();
        RosterSnapshot {
            drivers: state.registry.list().to_vec(),
            weekly_template: state.template.get().clone(),
            overrides: state.overrides.list(),
        }
    }

    // Mutations validate before writing, so a poisoned guard still holds
    // consistent state.
    fn read(&self) -> RwLockReadGuard<'_, RosterState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RosterState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // --- driver registry ---

    /// All drivers in insertion order.
    #[must_use]
    pub fn list_drivers(&self) -> Vec<Driver> {
        self.read().registry.list().to_vec()
    }

    /// Looks up one driver.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id.
    pub fn driver(&self, id: &str) -> Result<Driver, RosterError> {
        self.read().registry.get(id).cloned()
    }

    /// Registers a new driver with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidDriver`] for a blank name, or if the id
    /// generator hands out an id that is already taken.
    pub fn create_driver(&self, input: DriverInput) -> Result<Driver, RosterError> {
        let id = self.id_gen.generate_id();
        let mut state = self.write();
        if state.registry.get(&id).is_ok() {
            return Err(RosterError::invalid_driver(format!("generated id {id} is already in use")));
        }
        let driver = state.registry.create(id, input)?;
        info!(driver_id = %driver.id, name = %driver.name, "driver created");
        Ok(driver)
    }

    /// Edits a driver, renaming its template snapshots if name or phone changed.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id and
    /// [`RosterError::InvalidDriver`] for a blank name.
    pub fn update_driver(&self, id: &str, input: DriverInput) -> Result<Driver, RosterError> {
        let mut state = self.write();
        let (driver, cascade) = state.registry.update(id, input)?;
        let touched = cascade.map_or(0, |cascade| self.cascades.apply(&cascade, &mut state.template));
        info!(driver_id = %driver.id, name = %driver.name, touched, "driver updated");
        Ok(driver)
    }

    /// Deletes a driver and strips it from the weekly template.
    ///
    /// Overrides that name the driver are left as written.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id.
    pub fn delete_driver(&self, id: &str) -> Result<Driver, RosterError> {
        let mut state = self.write();
        let (driver, cascade) = state.registry.delete(id)?;
        let touched = self.cascades.apply(&cascade, &mut state.template);
        info!(driver_id = %driver.id, name = %driver.name, touched, "driver deleted");
        Ok(driver)
    }

    /// Duty snapshots of the given drivers, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for the first unknown id.
    pub fn snapshots_of<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<DutySnapshot>, RosterError> {
        let state = self.read();
        ids.iter().map(|id| state.registry.get(id.as_ref()).map(Driver::snapshot)).collect()
    }

    // --- weekly template ---

    /// The current seven-day template.
    #[must_use]
    pub fn weekly_template(&self) -> WeeklyTemplate {
        self.read().template.get().clone()
    }

    /// Replaces the whole weekly template.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidTemplate`] unless each weekday appears
    /// exactly once; the previous template is kept.
    pub fn replace_weekly_template(
        &self,
        entries: Vec<WeeklyEntry>,
    ) -> Result<WeeklyTemplate, RosterError> {
        let mut state = self.write();
        let template = state.template.replace_all(entries)?.clone();
        let assigned: usize = template.entries().iter().map(|e| e.drivers.len()).sum();
        info!(assigned, "weekly template replaced");
        Ok(template)
    }

    // --- overrides ---

    /// All overrides in date order.
    #[must_use]
    pub fn list_overrides(&self) -> Vec<Override> {
        self.read().overrides.list()
    }

    /// The override saved for `date`, if any.
    #[must_use]
    pub fn override_for(&self, date: NaiveDate) -> Option<Override> {
        self.read()
            .overrides
            .get(date)
            .map(|drivers| Override { date, drivers: drivers.to_vec() })
    }

    /// Saves the roster for `date`, replacing any earlier override.
    pub fn upsert_override(&self, date: NaiveDate, drivers: Vec<DutySnapshot>) -> Override {
        let saved = self.write().overrides.upsert(date, drivers);
        info!(%date, drivers = saved.drivers.len(), "override saved");
        saved
    }

    /// Returns `date` to template resolution. Absent overrides are not an error.
    pub fn reset_override(&self, date: NaiveDate) -> bool {
        let removed = self.write().overrides.reset(date);
        info!(%date, removed, "override reset");
        removed
    }

    // --- resolution ---

    /// Drivers on duty for `date`.
    #[must_use]
    pub fn resolve_duty_for_date(&self, date: NaiveDate) -> Vec<DutySnapshot> {
        let state = self.read();
        let drivers = resolver::resolve(state.template.get(), &state.overrides, date);
        debug!(%date, drivers = drivers.len(), "duty resolved");
        drivers
    }

    /// Resolves `date`, reporting whether an override or the template applied.
    #[must_use]
    pub fn resolve_day(&self, date: NaiveDate) -> DutyDay {
        let state = self.read();
        resolver::resolve_day(state.template.get(), &state.overrides, date)
    }

    /// Resolves `days` consecutive dates from `start`.
    #[must_use]
    pub fn resolve_range(&self, start: NaiveDate, days: usize) -> Vec<DutyDay> {
        let state = self.read();
        resolver::resolve_range(state.template.get(), &state.overrides, start, days)
    }

    /// Resolves today's date as seen from the reference `offset`.
    #[must_use]
    pub fn resolve_today(&self, clock: &dyn Clock, offset: FixedOffset) -> DutyDay {
        let today = resolver::local_date(clock.now(), offset);
        let state = self.read();
        resolver::resolve_day(state.template.get(), &state.overrides, today)
    }

    /// Pre-fill for the override editor of `date`. Creates nothing.
    #[must_use]
    pub fn override_seed(&self, date: NaiveDate) -> Vec<DutySnapshot> {
        let state = self.read();
        resolver::override_seed(state.template.get(), &state.overrides, date)
    }
}
