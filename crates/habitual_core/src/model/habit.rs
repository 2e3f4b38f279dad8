//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical record for one tracked behavior.
//! - Provide completion-toggle and streak-refresh helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - `completions` holds at most one entry per calendar day.
//! - `streak` matches the backward-walk count over `completions` as of the
//!   day the last mutation observed.

use crate::stats::streak::current_streak;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Stable identifier for every tracked habit.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// A freshly generated v4 value is distinct from every other id produced
/// in the process lifetime with overwhelming probability.
pub type HabitId = Uuid;

/// Canonical record for one tracked behavior.
///
/// The serialized form uses camelCase field names (`createdAt`, `isDemo`)
/// to keep the persisted value readable by the widget shells that share
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Stable global ID used as the sole lookup key.
    pub id: HabitId,
    /// Display name. Non-empty after trimming; mutable via rename.
    pub name: String,
    /// Creation instant, serialized as an RFC 3339 string.
    pub created_at: DateTime<Utc>,
    /// Calendar days (observer-local, `YYYY-MM-DD` on the wire) the habit
    /// was marked done. The set type rules out duplicate days.
    #[serde(default)]
    pub completions: BTreeSet<NaiveDate>,
    /// Derived cache: consecutive completed days ending today.
    ///
    /// Never set directly; refreshed by every completion mutation.
    #[serde(default)]
    pub streak: u32,
    /// Marks seeded example habits. Provenance only, never computation.
    #[serde(default)]
    pub is_demo: bool,
}

impl Habit {
    /// Creates a new habit with a generated stable ID and empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a habit with a caller-provided stable ID.
    ///
    /// Used by tests and restore paths where identity already exists.
    pub fn with_id(id: HabitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
            completions: BTreeSet::new(),
            streak: 0,
            is_demo: false,
        }
    }

    /// Returns whether the habit is marked done on `day`.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completions.contains(&day)
    }

    /// Toggles membership of `day` in the completion history, then
    /// refreshes the streak cache against `today`.
    ///
    /// Returns `true` when `day` is now marked done, `false` when the
    /// toggle un-marked it.
    pub fn toggle_completion(&mut self, day: NaiveDate, today: NaiveDate) -> bool {
        let marked = if self.completions.remove(&day) {
            false
        } else {
            self.completions.insert(day);
            true
        };
        self.refresh_streak(today);
        marked
    }

    /// Recomputes the streak cache from the completion history.
    pub fn refresh_streak(&mut self, today: NaiveDate) {
        self.streak = current_streak(&self.completions, today);
    }
}

#[cfg(test)]
mod tests {
    use super::Habit;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn new_habit_starts_with_empty_history() {
        let habit = Habit::new("Stretch");
        assert_eq!(habit.name, "Stretch");
        assert!(habit.completions.is_empty());
        assert_eq!(habit.streak, 0);
        assert!(!habit.is_demo);
    }

    #[test]
    fn toggle_pairs_restore_original_membership() {
        let mut habit = Habit::new("Stretch");
        let today = day(2026, 8, 6);

        assert!(habit.toggle_completion(today, today));
        assert!(habit.is_completed_on(today));
        assert_eq!(habit.streak, 1);

        assert!(!habit.toggle_completion(today, today));
        assert!(!habit.is_completed_on(today));
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn toggle_refreshes_streak_across_days() {
        let mut habit = Habit::new("Stretch");
        let today = day(2026, 8, 6);

        habit.toggle_completion(day(2026, 8, 5), today);
        assert_eq!(habit.streak, 0);

        habit.toggle_completion(today, today);
        assert_eq!(habit.streak, 2);
    }
}
