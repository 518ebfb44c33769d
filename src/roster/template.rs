//! Weekly template store.

use super::error::RosterError;
use super::model::{DutySnapshot, WeeklyEntry, WeeklyTemplate};

/// Owns the seven-day recurring roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyTemplateStore {
    template: WeeklyTemplate,
}

impl WeeklyTemplateStore {
    /// Creates a store holding an empty seven-day template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-validated template.
    #[must_use]
    pub fn from_template(template: WeeklyTemplate) -> Self {
        Self { template }
    }

    /// Returns the current template.
    #[must_use]
    pub fn get(&self) -> &WeeklyTemplate {
        &self.template
    }

    /// Replaces the whole template.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidTemplate`] unless `entries` covers each
    /// weekday exactly once. The current template is left untouched.
    pub fn replace_all(&mut self, entries: Vec<WeeklyEntry>) -> Result<&WeeklyTemplate, RosterError> {
        self.template = WeeklyTemplate::from_entries(entries)?;
        Ok(&self.template)
    }

    /// Runs `mutate` over each day's duty list.
    pub(crate) fn apply_cascade<F>(&mut self, mut mutate: F)
    where
        F: FnMut(&mut Vec<DutySnapshot>),
    {
        for entry in self.template.entries_mut() {
            mutate(&mut entry.drivers);
        }
    }
}
