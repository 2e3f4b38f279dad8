use chrono::{Days, NaiveDate};
use habitual_core::stats::streak::current_streak;
use habitual_core::Habit;
use std::collections::BTreeSet;

#[test]
fn consecutive_run_ending_today_counts_k_days() {
    for k in 1..=10u64 {
        let completions: BTreeSet<NaiveDate> =
            (0..k).map(|offset| today() - Days::new(offset)).collect();
        assert_eq!(current_streak(&completions, today()), k as u32);
    }
}

#[test]
fn run_ending_yesterday_scores_zero() {
    let completions: BTreeSet<NaiveDate> =
        (1..=30u64).map(|offset| today() - Days::new(offset)).collect();
    assert_eq!(current_streak(&completions, today()), 0);
}

#[test]
fn completions_today_and_three_days_ago_count_only_today() {
    let completions: BTreeSet<NaiveDate> =
        [today(), today() - Days::new(3)].into_iter().collect();
    assert_eq!(current_streak(&completions, today()), 1);
}

#[test]
fn gap_anywhere_truncates_at_the_first_missing_day() {
    let completions: BTreeSet<NaiveDate> = [0u64, 1, 2, 4, 5, 6]
        .into_iter()
        .map(|offset| today() - Days::new(offset))
        .collect();
    assert_eq!(current_streak(&completions, today()), 3);
}

#[test]
fn toggling_a_past_day_extends_the_streak_retroactively() {
    let mut habit = Habit::new("Read");
    habit.toggle_completion(today(), today());
    assert_eq!(habit.streak, 1);

    habit.toggle_completion(today() - Days::new(1), today());
    assert_eq!(habit.streak, 2);

    // Un-marking yesterday reopens the gap.
    habit.toggle_completion(today() - Days::new(1), today());
    assert_eq!(habit.streak, 1);
}

#[test]
fn even_number_of_toggles_restores_membership() {
    let mut habit = Habit::new("Read");
    let day = today() - Days::new(2);
    habit.toggle_completion(day, today());
    let marked_once = habit.completions.clone();

    habit.toggle_completion(day, today());
    habit.toggle_completion(day, today());
    assert_eq!(habit.completions, marked_once);

    habit.toggle_completion(day, today());
    assert!(habit.completions.is_empty());
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid test date")
}
