//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::roster::{Locale, Weekday};

/// Top-level CLI parser for `roster`.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Edit and query the transportation duty roster")]
pub struct Cli {
    /// Directory holding roster.yaml (overrides `ROSTER_STORE`).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    /// Weekday label language, `en` or `ar` (overrides `ROSTER_LOCALE`).
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the driver registry.
    #[command(subcommand)]
    Drivers(DriversCommand),
    /// View or edit the recurring weekly template.
    #[command(subcommand)]
    Template(TemplateCommand),
    /// Manage date-specific overrides.
    #[command(subcommand)]
    Overrides(OverridesCommand),
    /// Show who is on duty on a date (today if omitted).
    Duty {
        /// Date as YYYY-MM-DD.
        date: Option<String>,
    },
    /// Show seven days of duty starting at a date (today if omitted).
    Week {
        /// First date as YYYY-MM-DD.
        date: Option<String>,
    },
}

/// `roster drivers ...`
#[derive(Debug, Subcommand)]
pub enum DriversCommand {
    /// List all drivers.
    List,
    /// Register a new driver.
    Add {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Contact number.
        #[arg(long)]
        phone: String,
        /// Avatar URL; a placeholder is used when omitted.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Edit a driver; the weekly template follows name and phone changes.
    Edit {
        /// Driver id.
        id: String,
        /// New display name.
        #[arg(long)]
        name: String,
        /// New contact number.
        #[arg(long)]
        phone: String,
        /// New avatar URL; kept when omitted.
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Delete a driver and remove it from the weekly template.
    Remove {
        /// Driver id.
        id: String,
    },
}

/// `roster template ...`
#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// Print the weekly template.
    Show,
    /// Set who is on duty for one weekday.
    Assign {
        /// Weekday name (English or Arabic, or a three-letter abbreviation).
        day: Weekday,
        /// Ids of the drivers on duty, in order. None clears the day.
        driver_ids: Vec<String>,
    },
    /// Replace the whole template from a YAML list of `{day, drivers}` entries.
    Load {
        /// Path to the YAML file.
        file: PathBuf,
    },
}

/// `roster overrides ...`
#[derive(Debug, Subcommand)]
pub enum OverridesCommand {
    /// List saved overrides.
    List,
    /// Save the roster for one date.
    Set {
        /// Date as YYYY-MM-DD.
        date: String,
        /// Ids of the drivers on duty, in order. None means nobody.
        driver_ids: Vec<String>,
    },
    /// Show what the override editor would pre-fill for a date.
    Seed {
        /// Date as YYYY-MM-DD.
        date: String,
    },
    /// Return a date to the weekly template.
    Reset {
        /// Date as YYYY-MM-DD.
        date: String,
    },
}
