//! Propagates driver renames and deletions into the weekly template.
//!
//! Snapshots carry no driver id, so matching is by exact name. Two drivers
//! sharing a name are indistinguishable here: renaming or deleting one
//! rewrites the other's template snapshots too. Overrides are never
//! touched; they keep whatever was written when they were saved.

use super::model::DutySnapshot;
use super::template::WeeklyTemplateStore;

/// A template repair requested by a registry mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cascade {
    /// A driver's name or phone changed.
    Rename {
        /// Name the snapshots currently carry.
        old_name: String,
        /// Replacement name.
        new_name: String,
        /// Replacement phone.
        new_phone: String,
    },
    /// A driver was deleted.
    Remove {
        /// Name of the deleted driver.
        name: String,
    },
}

/// Applies [`Cascade`] requests to the weekly template.
#[derive(Debug, Default, Clone, Copy)]
pub struct CascadeCoordinator;

impl CascadeCoordinator {
    /// Applies `cascade` to every day of the template.
    ///
    /// Returns the number of snapshots rewritten or removed.
    pub fn apply(self, cascade: &Cascade, template: &mut WeeklyTemplateStore) -> usize {
        match cascade {
            Cascade::Rename { old_name, new_name, new_phone } => {
                Self::rename(template, old_name, new_name, new_phone)
            }
            Cascade::Remove { name } => Self::remove(template, name),
        }
    }

    fn rename(
        template: &mut WeeklyTemplateStore,
        old_name: &str,
        new_name: &str,
        new_phone: &str,
    ) -> usize {
        let mut touched = 0;
        template.apply_cascade(|drivers| {
            for snapshot in drivers.iter_mut().filter(|s| s.name == old_name) {
                *snapshot = DutySnapshot::new(new_name, new_phone);
                touched += 1;
            }
        });
        touched
    }

    fn remove(template: &mut WeeklyTemplateStore, name: &str) -> usize {
        let mut touched = 0;
        template.apply_cascade(|drivers| {
            let before = drivers.len();
            drivers.retain(|s| s.name != name);
            touched += before - drivers.len();
        });
        touched
    }
}
