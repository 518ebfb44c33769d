//! `roster drivers` commands.

use super::format::table;
use super::Session;
use crate::cli::DriversCommand;
use crate::roster::{Driver, DriverInput};

/// Execute a `drivers` subcommand.
///
/// # Errors
///
/// Returns an error string if the store cannot be loaded or saved, or the
/// registry rejects the operation (unknown id, blank name).
pub fn run(session: &Session, command: &DriversCommand) -> Result<String, String> {
    let roster = session.load()?;

    match command {
        DriversCommand::List => {
            let drivers = roster.list_drivers();
            session.render(&drivers, || driver_table(&drivers))
        }
        DriversCommand::Add { name, phone, avatar } => {
            let driver = roster
                .create_driver(input(name, phone, avatar.as_deref()))
                .map_err(|e| e.to_string())?;
            session.save(&roster)?;
            session.render(&driver, || format!("Added driver {} ({})\n", driver.name, driver.id))
        }
        DriversCommand::Edit { id, name, phone, avatar } => {
            let driver = roster
                .update_driver(id, input(name, phone, avatar.as_deref()))
                .map_err(|e| e.to_string())?;
            session.save(&roster)?;
            session.render(&driver, || format!("Updated driver {} ({})\n", driver.name, driver.id))
        }
        DriversCommand::Remove { id } => {
            let driver = roster.delete_driver(id).map_err(|e| e.to_string())?;
            session.save(&roster)?;
            session.render(&driver, || format!("Removed driver {} ({})\n", driver.name, driver.id))
        }
    }
}

fn input(name: &str, phone: &str, avatar: Option<&str>) -> DriverInput {
    let input = DriverInput::new(name, phone);
    match avatar {
        Some(avatar) => input.with_avatar(avatar),
        None => input,
    }
}

fn driver_table(drivers: &[Driver]) -> String {
    if drivers.is_empty() {
        return "No drivers registered.\n".to_string();
    }
    let rows: Vec<Vec<String>> = drivers
        .iter()
        .map(|d| vec![d.id.clone(), d.name.clone(), d.phone.clone(), d.avatar.clone()])
        .collect();
    table(&["ID", "NAME", "PHONE", "AVATAR"], &rows)
}
