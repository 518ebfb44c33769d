//! ID generator port for driver identifiers.

/// Generates unique identifiers.
///
/// The registry assigns every new driver an id from this port, so tests
/// can substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
