//! Tests for the week availability grid.

use freeslot_core::{FreeRun, WeekGrid};

/// Helper: collect the grid's free runs into a vec for assertions.
fn runs(grid: &WeekGrid) -> Vec<FreeRun> {
    grid.free_runs().collect()
}

#[test]
fn new_grid_is_all_free() {
    let grid = WeekGrid::new(5, 9);
    assert_eq!(grid.day_count(), 5);
    assert_eq!(grid.slots_per_day(), 9);
    assert_eq!(grid.count_free(), 45);
    assert!(!grid.is_exhausted());
}

#[test]
#[should_panic(expected = "grid dimensions")]
fn zero_days_panics() {
    WeekGrid::new(0, 9);
}

#[test]
#[should_panic(expected = "grid dimensions")]
fn zero_slots_panics() {
    WeekGrid::new(5, 0);
}

#[test]
fn mark_busy_drops_count() {
    let mut grid = WeekGrid::new(5, 9);
    grid.mark_busy(0, 0, 2);
    assert_eq!(grid.count_free(), 43);
    assert!(!grid.is_free(0, 0));
    assert!(!grid.is_free(0, 1));
    assert!(grid.is_free(0, 2));
}

#[test]
fn mark_busy_is_idempotent() {
    let mut once = WeekGrid::new(5, 9);
    once.mark_busy(2, 3, 6);

    let mut twice = WeekGrid::new(5, 9);
    twice.mark_busy(2, 3, 6);
    twice.mark_busy(2, 3, 6);

    assert_eq!(once, twice);
    assert_eq!(twice.count_free(), 42);
}

#[test]
fn empty_range_is_a_no_op() {
    let mut grid = WeekGrid::new(5, 9);
    grid.mark_busy(1, 4, 4);
    assert_eq!(grid.count_free(), 45);
}

#[test]
fn all_free_grid_yields_one_full_run_per_day() {
    let grid = WeekGrid::new(5, 9);
    let runs = runs(&grid);
    assert_eq!(runs.len(), 5);
    for (day, run) in runs.iter().enumerate() {
        assert_eq!(
            *run,
            FreeRun {
                day,
                start_slot: 0,
                end_slot: 9
            }
        );
    }
}

#[test]
fn runs_split_around_busy_slots() {
    let mut grid = WeekGrid::new(5, 9);
    // Monday: busy 2-4, free 0-2 and 4-9.
    grid.mark_busy(0, 2, 4);

    let monday: Vec<FreeRun> = grid.free_runs().filter(|r| r.day == 0).collect();
    assert_eq!(
        monday,
        vec![
            FreeRun {
                day: 0,
                start_slot: 0,
                end_slot: 2
            },
            FreeRun {
                day: 0,
                start_slot: 4,
                end_slot: 9
            },
        ]
    );
}

#[test]
fn single_slot_runs_are_reported() {
    let mut grid = WeekGrid::new(1, 5);
    // Free pattern: busy, free, busy, free, busy.
    grid.mark_busy(0, 0, 1);
    grid.mark_busy(0, 2, 3);
    grid.mark_busy(0, 4, 5);

    let runs = runs(&grid);
    assert_eq!(runs.len(), 2);
    assert!(runs.iter().all(|r| r.len() == 1));
    assert_eq!(runs[0].start_slot, 1);
    assert_eq!(runs[1].start_slot, 3);
}

#[test]
fn runs_never_cross_day_boundaries() {
    // Both days fully free: trailing free slots on day 0 must not merge with
    // leading free slots on day 1.
    let grid = WeekGrid::new(2, 3);
    let runs = runs(&grid);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].day, 0);
    assert_eq!(runs[1].day, 1);
}

#[test]
fn fully_busy_day_yields_no_runs() {
    let mut grid = WeekGrid::new(2, 4);
    grid.mark_busy(0, 0, 4);

    let runs = runs(&grid);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].day, 1);
}

#[test]
fn free_runs_is_restartable() {
    let mut grid = WeekGrid::new(3, 6);
    grid.mark_busy(1, 0, 6);
    grid.mark_busy(2, 2, 4);

    let first: Vec<FreeRun> = grid.free_runs().collect();
    let second: Vec<FreeRun> = grid.free_runs().collect();
    assert_eq!(first, second);
}

#[test]
fn exhausted_grid_stays_exhausted() {
    let mut grid = WeekGrid::new(2, 2);
    for day in 0..2 {
        grid.mark_busy(day, 0, 2);
    }
    assert!(grid.is_exhausted());
    assert_eq!(grid.free_runs().count(), 0);

    // Marking busy on an exhausted grid is a no-op.
    grid.mark_busy(0, 0, 2);
    assert_eq!(grid.count_free(), 0);
}
