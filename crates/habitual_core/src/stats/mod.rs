//! Aggregate statistics over the habit collection.
//!
//! # Responsibility
//! - Compute on-demand aggregates for the stats header.
//! - Keep the streak walk pure and separately testable.
//!
//! # Invariants
//! - Aggregates are recomputed from the collection on every call; nothing
//!   here is cached.
//! - The completion-rate window is uniform for every habit regardless of
//!   its creation date.

pub mod streak;

use crate::model::habit::Habit;
use chrono::{Days, NaiveDate};

/// Window length in days, today inclusive, for the completion rate.
pub const COMPLETION_RATE_WINDOW_DAYS: u64 = 7;

/// On-demand aggregate snapshot of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStats {
    /// Number of tracked habits.
    pub total_habits: usize,
    /// Habits completed on the reference day.
    pub completed_today: usize,
    /// Best streak across all habits, 0 for an empty collection.
    pub current_streak: u32,
    /// Integer percentage of habit-days completed over the trailing
    /// window, rendered with a trailing `%` sign.
    pub completion_rate: String,
}

/// Computes the aggregate snapshot of `habits` as of `today`.
pub fn compute_stats(habits: &[Habit], today: NaiveDate) -> HabitStats {
    HabitStats {
        total_habits: habits.len(),
        completed_today: habits
            .iter()
            .filter(|habit| habit.is_completed_on(today))
            .count(),
        current_streak: habits.iter().map(|habit| habit.streak).max().unwrap_or(0),
        completion_rate: completion_rate(habits, today),
    }
}

/// Percentage of habit-days completed out of all possible habit-days in
/// the trailing window, rounded to the nearest integer.
fn completion_rate(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return "0%".to_string();
    }

    let mut completed = 0usize;
    for offset in 0..COMPLETION_RATE_WINDOW_DAYS {
        // The calendar lower bound is unreachable for real dates; a window
        // day that does not exist simply contributes no completions.
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        completed += habits
            .iter()
            .filter(|habit| habit.is_completed_on(day))
            .count();
    }

    let possible = habits.len() * COMPLETION_RATE_WINDOW_DAYS as usize;
    let percent = (completed as f64 / possible as f64 * 100.0).round() as u32;
    format!("{percent}%")
}
