//! Core domain logic for Habitual.
//! This crate is the single source of truth for habit-tracking invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitId};
pub use repo::habit_repo::{
    HabitRepository, KvHabitRepository, RepoError, RepoResult, DEFAULT_COLLECTION_KEY,
};
pub use repo::kv_store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};
pub use service::habit_service::HabitService;
pub use stats::{compute_stats, HabitStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
