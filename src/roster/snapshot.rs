//! Serializable image of a whole roster.

use serde::{Deserialize, Serialize};

use super::model::{Driver, Override, WeeklyTemplate};

/// Everything the roster owns, in its persisted shape.
///
/// Drivers keyed by id, the template keyed by weekday, overrides keyed by
/// date. Missing sections deserialize to their empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Driver registry contents in insertion order.
    #[serde(default)]
    pub drivers: Vec<Driver>,
    /// The seven-day template.
    #[serde(default)]
    pub weekly_template: WeeklyTemplate,
    /// Saved overrides in date order.
    #[serde(default)]
    pub overrides: Vec<Override>,
}
