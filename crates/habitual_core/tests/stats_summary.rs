use habitual_core::{compute_stats, HabitService, KvHabitRepository, MemoryKvStore};

#[test]
fn empty_collection_reports_zero_rate_exactly() {
    let service = fresh_service();

    let stats = service.stats();
    assert_eq!(stats.total_habits, 0);
    assert_eq!(stats.completed_today, 0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.completion_rate, "0%");
}

#[test]
fn three_habits_with_two_completed_today() {
    let mut service = fresh_service();
    let first = service.add_habit("Read").unwrap().unwrap();
    service.add_habit("Walk").unwrap();
    let third = service.add_habit("Journal").unwrap().unwrap();

    service.toggle_completion(first).unwrap();
    service.toggle_completion(third).unwrap();

    let stats = service.stats();
    assert_eq!(stats.total_habits, 3);
    assert_eq!(stats.completed_today, 2);
    assert_eq!(stats.current_streak, 1);
    // 2 completed habit-days of 21 possible -> 9.52... -> "10%".
    assert_eq!(stats.completion_rate, "10%");
    assert_rate_format(&stats.completion_rate);
}

#[test]
fn rate_keeps_integer_percent_format_for_full_completion() {
    let mut service = fresh_service();
    let id = service.add_habit("Read").unwrap().unwrap();
    service.toggle_completion(id).unwrap();

    let stats = service.stats();
    // 1 of 7 habit-days -> "14%".
    assert_eq!(stats.completion_rate, "14%");
    assert_rate_format(&stats.completion_rate);
}

#[test]
fn stats_are_recomputed_on_demand_after_removal() {
    let mut service = fresh_service();
    let first = service.add_habit("Read").unwrap().unwrap();
    service.toggle_completion(first).unwrap();
    assert_eq!(service.stats().completed_today, 1);

    service.remove_habit(first).unwrap();
    let stats = service.stats();
    assert_eq!(stats.total_habits, 0);
    assert_eq!(stats.completion_rate, "0%");
}

#[test]
fn compute_stats_is_pure_over_a_borrowed_collection() {
    let mut service = fresh_service();
    let id = service.add_habit("Read").unwrap().unwrap();
    service.toggle_completion(id).unwrap();

    let today = chrono::Local::now().date_naive();
    let direct = compute_stats(service.habits(), today);
    assert_eq!(direct, service.stats());
}

fn assert_rate_format(rate: &str) {
    let digits = rate.strip_suffix('%').expect("rate ends with %");
    assert!(!digits.is_empty());
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

fn fresh_service() -> HabitService<KvHabitRepository<MemoryKvStore>> {
    HabitService::open(KvHabitRepository::new(MemoryKvStore::new())).unwrap()
}
