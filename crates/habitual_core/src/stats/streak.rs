//! Consecutive-day streak computation.
//!
//! # Responsibility
//! - Count the unbroken run of completed days ending at a reference day.
//!
//! # Invariants
//! - Only the run ending at `today` (inclusive) is counted; the walk stops
//!   at the first missing day.
//! - A habit not completed today has a zero streak no matter how long an
//!   earlier run was.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Counts consecutive completed days walking backward from `today`.
pub fn current_streak(completions: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut cursor = today;
    while completions.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            // No earlier calendar day exists; the run ends here.
            None => break,
        }
    }
    count
}
