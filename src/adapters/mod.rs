//! Adapters implementing the port traits.
//!
//! `system` talks to the real clock, disk, and UUID generator. `fixed`
//! holds deterministic stand-ins for tests and pinned runs.

pub mod fixed;
pub mod system;
