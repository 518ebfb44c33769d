//! Driver registry: the canonical list of drivers.

use super::cascade::Cascade;
use super::error::RosterError;
use super::model::Driver;

/// Editable driver fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverInput {
    /// Display name; must not be blank.
    pub name: String,
    /// Contact number.
    pub phone: String,
    /// Avatar reference. `None` or blank means keep (update) or default (create).
    pub avatar: Option<String>,
}

impl DriverInput {
    /// Convenience constructor without an avatar.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into(), avatar: None }
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    fn normalized(self) -> Result<(String, String, Option<String>), RosterError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::invalid_driver("name must not be blank"));
        }
        let avatar = self.avatar.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());
        Ok((name, self.phone.trim().to_string(), avatar))
    }
}

/// Placeholder avatar for a driver created without one.
#[must_use]
pub fn placeholder_avatar(id: &str) -> String {
    format!("https://i.pravatar.cc/150?u={id}")
}

/// Owns driver records in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
}

impl DriverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a registry from stored records.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Storage`] if two records share an id.
    pub fn from_drivers(drivers: Vec<Driver>) -> Result<Self, RosterError> {
        for (i, driver) in drivers.iter().enumerate() {
            if drivers[..i].iter().any(|d| d.id == driver.id) {
                return Err(RosterError::storage(format!("duplicate driver id {}", driver.id)));
            }
        }
        Ok(Self { drivers })
    }

    /// All drivers in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Driver] {
        &self.drivers
    }

    /// Looks up a driver by id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id.
    pub fn get(&self, id: &str) -> Result<&Driver, RosterError> {
        self.drivers.iter().find(|d| d.id == id).ok_or_else(|| RosterError::not_found(id))
    }

    /// Adds a driver under `id`, which the caller guarantees is fresh.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidDriver`] for a blank name.
    pub fn create(&mut self, id: String, input: DriverInput) -> Result<Driver, RosterError> {
        let (name, phone, avatar) = input.normalized()?;
        let avatar = avatar.unwrap_or_else(|| placeholder_avatar(&id));
        let driver = Driver { id, name, phone, avatar };
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    /// Edits a driver in place.
    ///
    /// Returns the updated record and, when the name or phone changed, the
    /// rename cascade the template needs.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id and
    /// [`RosterError::InvalidDriver`] for a blank name.
    pub fn update(
        &mut self,
        id: &str,
        input: DriverInput,
    ) -> Result<(Driver, Option<Cascade>), RosterError> {
        let driver =
            self.drivers.iter_mut().find(|d| d.id == id).ok_or_else(|| RosterError::not_found(id))?;
        let (name, phone, avatar) = input.normalized()?;

        let cascade = (driver.name != name || driver.phone != phone).then(|| Cascade::Rename {
            old_name: driver.name.clone(),
            new_name: name.clone(),
            new_phone: phone.clone(),
        });

        driver.name = name;
        driver.phone = phone;
        if let Some(avatar) = avatar {
            driver.avatar = avatar;
        }
        Ok((driver.clone(), cascade))
    }

    /// Removes a driver, returning it with the remove cascade.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<(Driver, Cascade), RosterError> {
        let index =
            self.drivers.iter().position(|d| d.id == id).ok_or_else(|| RosterError::not_found(id))?;
        let driver = self.drivers.remove(index);
        let cascade = Cascade::Remove { name: driver.name.clone() };
        Ok((driver, cascade))
    }
}
