//! Habit store use-case service.
//!
//! # Responsibility
//! - Own the authoritative habit collection and perform all mutations.
//! - Persist the full collection after every successful mutation.
//! - Signal the view collaborator to re-render after each change.
//!
//! # Invariants
//! - Invalid input and lookup misses are silent no-ops, never errors; the
//!   error channel is reserved for backend persistence failures.
//! - Every mutation is immediately followed by a full save reflecting
//!   exactly that mutation's effect.
//! - No component outside this service mutates the collection.

use crate::model::habit::{Habit, HabitId};
use crate::repo::habit_repo::{HabitRepository, RepoResult};
use crate::stats::{compute_stats, HabitStats};
use chrono::{Local, NaiveDate};
use log::{debug, info};

/// Names used for first-run demo population.
const DEMO_HABIT_NAMES: [&str; 4] = [
    "Morning exercise",
    "Read 20 minutes",
    "Drink 8 glasses of water",
    "Evening journal",
];

/// Re-render callback fired after every mutating operation.
pub type RenderHook = Box<dyn FnMut(&[Habit])>;

/// The habit store: single owner of the collection.
pub struct HabitService<R: HabitRepository> {
    repo: R,
    habits: Vec<Habit>,
    render_hook: Option<RenderHook>,
}

impl<R: HabitRepository> HabitService<R> {
    /// Loads the persisted collection and refreshes streak caches.
    ///
    /// Cached streaks can be stale when the local day advanced since the
    /// last session; they are recomputed before the collection becomes
    /// readable.
    pub fn open(repo: R) -> RepoResult<Self> {
        let mut habits = repo.load()?;
        let today = today();
        for habit in &mut habits {
            habit.refresh_streak(today);
        }

        info!(
            "event=store_open module=service status=ok total={}",
            habits.len()
        );
        Ok(Self {
            repo,
            habits,
            render_hook: None,
        })
    }

    /// Registers the view collaborator's re-render hook.
    ///
    /// The hook fires after every mutating operation; no-ops do not fire
    /// it.
    pub fn set_render_hook(&mut self, hook: impl FnMut(&[Habit]) + 'static) {
        self.render_hook = Some(Box::new(hook));
    }

    /// Read-only view of the collection in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Looks up one habit by its stable ID.
    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    /// On-demand aggregate statistics for the current local day.
    pub fn stats(&self) -> HabitStats {
        compute_stats(&self.habits, today())
    }

    /// Appends a new habit with the trimmed name.
    ///
    /// A name that is empty after trimming is a silent no-op returning
    /// `None`.
    pub fn add_habit(&mut self, raw_name: &str) -> RepoResult<Option<HabitId>> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let habit = Habit::new(name);
        let id = habit.id;
        self.habits.push(habit);
        self.commit("habit_add")?;
        Ok(Some(id))
    }

    /// Renames a habit in place.
    ///
    /// An empty trimmed name or an unknown ID is a silent no-op returning
    /// `false`.
    pub fn rename_habit(&mut self, id: HabitId, raw_new_name: &str) -> RepoResult<bool> {
        let name = raw_new_name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return Ok(false);
        };

        habit.name = name.to_string();
        self.commit("habit_rename")?;
        Ok(true)
    }

    /// Removes a habit, preserving the relative order of the rest.
    ///
    /// # Contract
    /// - The caller obtains user confirmation before invoking this; the
    ///   decision function lives outside the store.
    /// - An unknown ID is a silent no-op returning `false`.
    pub fn remove_habit(&mut self, id: HabitId) -> RepoResult<bool> {
        let Some(position) = self.habits.iter().position(|habit| habit.id == id) else {
            return Ok(false);
        };

        self.habits.remove(position);
        self.commit("habit_remove")?;
        Ok(true)
    }

    /// Toggles today's completion mark and recomputes the streak cache.
    ///
    /// Returns `Some(marked)` with the new membership state of today's
    /// day, or `None` for an unknown ID.
    pub fn toggle_completion(&mut self, id: HabitId) -> RepoResult<Option<bool>> {
        let day = today();
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return Ok(None);
        };

        let marked = habit.toggle_completion(day, day);
        debug!(
            "event=habit_toggle module=service status=ok id={id} marked={marked} streak={}",
            habit.streak
        );
        self.commit("habit_toggle")?;
        Ok(Some(marked))
    }

    /// First-run population with example habits.
    ///
    /// A no-op unless the collection is empty; otherwise appends the
    /// fixed demo set flagged `is_demo` through the normal construction
    /// contract.
    pub fn seed_demo_habits(&mut self) -> RepoResult<bool> {
        if !self.habits.is_empty() {
            return Ok(false);
        }

        for name in DEMO_HABIT_NAMES {
            let mut habit = Habit::new(name);
            habit.is_demo = true;
            self.habits.push(habit);
        }
        self.commit("demo_seed")?;
        Ok(true)
    }

    fn commit(&mut self, event: &str) -> RepoResult<()> {
        self.repo.save(&self.habits)?;
        info!(
            "event={event} module=service status=ok total={}",
            self.habits.len()
        );
        if let Some(hook) = self.render_hook.as_mut() {
            hook(&self.habits);
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
