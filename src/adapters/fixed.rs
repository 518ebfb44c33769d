//! Deterministic adapters: pinned clock, counting ids, in-memory files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::ports::{Clock, FileSystem, IdGenerator};

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Pins the clock to `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pins the clock to an RFC 3339 timestamp such as `2024-03-10T08:00:00Z`.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed timestamp.
    pub fn parse(timestamp: &str) -> Result<Self, chrono::ParseError> {
        let now = DateTime::parse_from_rfc3339(timestamp)?.with_timezone(&Utc);
        Ok(Self::new(now))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Hands out `<prefix>-1`, `<prefix>-2`, ... in order.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
    step: u64,
}

impl SequentialIdGenerator {
    /// Starts a sequence at `<prefix>-1`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicU64::new(1), step: 1 }
    }

    /// Always returns `<prefix>-0`; useful for exercising id collisions.
    #[must_use]
    pub fn repeating(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicU64::new(0), step: 0 }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(self.step, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

/// Filesystem held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned().ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_parses_rfc3339() {
        let clock = FixedClock::parse("2024-03-10T08:00:00+03:00").unwrap();
        assert_eq!(clock.now().to_rfc3339(), "2024-03-10T05:00:00+00:00");
        assert!(FixedClock::parse("yesterday").is_err());
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("drv");
        assert_eq!(ids.generate_id(), "drv-1");
        assert_eq!(ids.generate_id(), "drv-2");
    }

    #[test]
    fn repeating_ids_never_change() {
        let ids = SequentialIdGenerator::repeating("same");
        assert_eq!(ids.generate_id(), ids.generate_id());
    }

    #[test]
    fn memory_fs_reads_back_writes() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("/store/roster.yaml");

        assert!(!fs.exists(path));
        assert!(fs.read_to_string(path).is_err());

        fs.write(path, "overrides: []\n").unwrap();
        assert!(fs.exists(path));
        assert!(fs.exists(Path::new("/store")));
        assert_eq!(fs.read_to_string(path).unwrap(), "overrides: []\n");
    }
}
