//! Transportation duty roster core.
//!
//! A recurring weekly template of on-duty drivers, date-specific overrides
//! that supersede it, and a driver registry whose renames and deletions
//! cascade into the template. [`DutyRoster`] ties the pieces together.

mod cascade;
mod error;
mod model;
mod overrides;
mod registry;
pub mod resolver;
mod service;
mod snapshot;
mod template;
mod weekday;

pub use cascade::{Cascade, CascadeCoordinator};
pub use error::RosterError;
pub use model::{
    parse_date, Driver, DutyDay, DutySnapshot, DutySource, Override, WeeklyEntry, WeeklyTemplate,
};
pub use overrides::OverrideStore;
pub use registry::{placeholder_avatar, DriverInput, DriverRegistry};
pub use service::DutyRoster;
pub use snapshot::RosterSnapshot;
pub use template::WeeklyTemplateStore;
pub use weekday::{Locale, Weekday};
