//! Roster store: persistence of the whole roster as one YAML document.
//!
//! All I/O goes through the `FileSystem` port. Layout:
//!
//! ```text
//! <root>/
//!   └── roster.yaml
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::ServiceContext;
use crate::roster::{DutyRoster, RosterError, RosterSnapshot};

const ROSTER_FILE: &str = "roster.yaml";

/// Loads and saves a [`DutyRoster`] under a store root.
pub struct RosterStore<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> RosterStore<'a> {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, path: root.join(ROSTER_FILE) }
    }

    /// Path of the roster document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the roster, or an empty one if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Storage`] if the document cannot be read or
    /// parsed, including a weekly template that does not list each weekday
    /// exactly once.
    pub fn load(&self) -> Result<DutyRoster, RosterError> {
        if !self.ctx.fs.exists(&self.path) {
            debug!(path = %self.path.display(), "no saved roster, starting empty");
            return Ok(DutyRoster::new(self.ctx.id_gen.clone()));
        }
        let contents = self.ctx.fs.read_to_string(&self.path).map_err(|e| {
            RosterError::storage(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        let snapshot: RosterSnapshot = serde_yaml::from_str(&contents).map_err(|e| {
            RosterError::storage(format!("Failed to parse {}: {e}", self.path.display()))
        })?;
        debug!(
            path = %self.path.display(),
            drivers = snapshot.drivers.len(),
            overrides = snapshot.overrides.len(),
            "roster loaded"
        );
        DutyRoster::from_snapshot(snapshot, self.ctx.id_gen.clone())
    }

    /// Writes the roster's current state.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Storage`] if serialization or writing fails.
    pub fn save(&self, roster: &DutyRoster) -> Result<(), RosterError> {
        let yaml = serde_yaml::to_string(&roster.snapshot())
            .map_err(|e| RosterError::storage(format!("Failed to serialize roster: {e}")))?;
        self.ctx.fs.write(&self.path, &yaml).map_err(|e| {
            RosterError::storage(format!("Failed to write {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "roster saved");
        Ok(())
    }
}
