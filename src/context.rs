//! Service context bundling the port trait objects.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::fixed::{FixedClock, MemoryFileSystem, SequentialIdGenerator};
use crate::adapters::system::{DiskFileSystem, SystemClock, UuidGenerator};
use crate::config::RosterConfig;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter sets (system, in-memory).
#[derive(Clone)]
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Arc<dyn Clock>,
    /// Filesystem the roster store reads and writes through.
    pub fs: Arc<dyn FileSystem>,
    /// ID generator for new drivers.
    pub id_gen: Arc<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context backed by the system clock, UUIDs, and real disk.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            fs: Arc::new(DiskFileSystem),
            id_gen: Arc::new(UuidGenerator),
        }
    }

    /// Creates the live context, pinning the clock if the config asks for it.
    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        let mut ctx = Self::live();
        if let Some(now) = config.pinned_now {
            ctx.clock = Arc::new(FixedClock::new(now));
        }
        ctx
    }

    /// Creates a fully deterministic context: pinned clock, `drv-N` ids, and
    /// an in-memory filesystem.
    #[must_use]
    pub fn in_memory(now: DateTime<Utc>) -> Self {
        Self {
            clock: Arc::new(FixedClock::new(now)),
            fs: Arc::new(MemoryFileSystem::new()),
            id_gen: Arc::new(SequentialIdGenerator::new("drv")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn in_memory_context_is_deterministic() {
        let ctx = ServiceContext::in_memory(instant("2024-03-10T08:00:00Z"));
        assert_eq!(ctx.clock.now(), instant("2024-03-10T08:00:00Z"));
        assert_eq!(ctx.id_gen.generate_id(), "drv-1");
        assert!(!ctx.fs.exists(Path::new("/anything")));
    }

    #[test]
    fn config_can_pin_the_live_clock() {
        let config = RosterConfig {
            pinned_now: Some(instant("2030-01-01T00:00:00Z")),
            ..RosterConfig::default()
        };
        let ctx = ServiceContext::from_config(&config);
        assert_eq!(ctx.clock.now(), instant("2030-01-01T00:00:00Z"));
    }

    #[test]
    fn clones_share_the_same_adapters() {
        let ctx = ServiceContext::in_memory(instant("2024-03-10T08:00:00Z"));
        let copy = ctx.clone();
        ctx.fs.write(Path::new("/store/roster.yaml"), "drivers: []\n").unwrap();
        assert!(copy.fs.exists(Path::new("/store/roster.yaml")));
        assert_eq!(copy.id_gen.generate_id(), "drv-1");
        assert_eq!(ctx.id_gen.generate_id(), "drv-2");
    }
}
