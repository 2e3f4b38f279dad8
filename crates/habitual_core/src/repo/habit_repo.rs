//! Habit collection persistence over a key-value backend.
//!
//! # Responsibility
//! - Serialize the full collection as one JSON array under one key.
//! - Recover from malformed persisted state instead of failing.
//!
//! # Invariants
//! - `save` always writes the entire collection, never a delta.
//! - `load` returns a collection satisfying model invariants even when
//!   the stored value is corrupt: an unreadable value degrades to the
//!   empty collection, an unreadable record is skipped.
//! - Backend transport failures still propagate; only malformed data
//!   degrades.

use crate::model::habit::{Habit, HabitId};
use crate::repo::kv_store::{KvStore, StoreError};
use log::warn;
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default storage key for the persisted collection.
///
/// A configuration parameter rather than a hardcoded global: callers that
/// host several collections in one store pick their own keys.
pub const DEFAULT_COLLECTION_KEY: &str = "habitual.habits";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize habit collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Persistence contract for the habit collection.
pub trait HabitRepository {
    fn load(&self) -> RepoResult<Vec<Habit>>;
    fn save(&self, habits: &[Habit]) -> RepoResult<()>;
}

/// Key-value backed repository storing the collection as one JSON array.
pub struct KvHabitRepository<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> KvHabitRepository<S> {
    /// Creates a repository over `store` using the default collection key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_COLLECTION_KEY)
    }

    /// Creates a repository bound to a caller-chosen storage key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the storage key this repository reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KvStore> HabitRepository for KvHabitRepository<S> {
    fn load(&self) -> RepoResult<Vec<Habit>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let records: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("event=collection_load module=repo status=fallback_empty error={err}");
                return Ok(Vec::new());
            }
        };

        let mut habits = Vec::with_capacity(records.len());
        let mut seen: HashSet<HabitId> = HashSet::with_capacity(records.len());
        for record in records {
            if let Some(habit) = parse_record(record, &mut seen) {
                habits.push(habit);
            }
        }
        Ok(habits)
    }

    fn save(&self, habits: &[Habit]) -> RepoResult<()> {
        let payload = serde_json::to_string(habits).map_err(RepoError::Serialize)?;
        self.store.set(&self.key, &payload)?;
        Ok(())
    }
}

/// Deserializes and validates one persisted record.
///
/// Records that fail field validation are dropped with a warning so the
/// rest of the collection survives a partially damaged value.
fn parse_record(record: Value, seen: &mut HashSet<HabitId>) -> Option<Habit> {
    let habit: Habit = match serde_json::from_value(record) {
        Ok(habit) => habit,
        Err(err) => {
            warn!("event=collection_load module=repo status=record_skipped error={err}");
            return None;
        }
    };

    if habit.name.trim().is_empty() {
        warn!(
            "event=collection_load module=repo status=record_skipped reason=empty_name id={}",
            habit.id
        );
        return None;
    }
    if !seen.insert(habit.id) {
        warn!(
            "event=collection_load module=repo status=record_skipped reason=duplicate_id id={}",
            habit.id
        );
        return None;
    }

    Some(habit)
}
