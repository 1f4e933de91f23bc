//! Week availability grid: a fixed day x slot matrix of free/busy booleans.
//!
//! The grid starts all-free and only ever transitions slots free -> busy, so
//! the free count is monotonically non-increasing and once it reaches zero it
//! stays there. The grid knows nothing about clock times or schedule sources;
//! callers convert lesson times to slot indices before marking.

/// A maximal run of consecutive free slots on a single day.
///
/// `end_slot` is exclusive. Runs never cross day boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRun {
    pub day: usize,
    pub start_slot: usize,
    pub end_slot: usize,
}

impl FreeRun {
    /// Number of slots in the run.
    pub fn len(&self) -> usize {
        self.end_slot - self.start_slot
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-size availability grid for one week.
///
/// Dimensions are set at construction and never change. `true` means "free
/// for everyone processed so far", `false` means "busy for at least one".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    days: Vec<Vec<bool>>,
}

impl WeekGrid {
    /// Create an all-free grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(days: usize, slots_per_day: usize) -> Self {
        assert!(
            days >= 1 && slots_per_day >= 1,
            "grid dimensions must be at least 1x1"
        );
        WeekGrid {
            days: vec![vec![true; slots_per_day]; days],
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn slots_per_day(&self) -> usize {
        self.days[0].len()
    }

    /// Mark slots `[start_slot, end_slot)` on `day` as busy.
    ///
    /// Index validity is the caller's contract: the time-range conversion in
    /// [`crate::intersect::Window::slot_range`] guarantees in-window indices
    /// before this is reached. Idempotent; an empty range is a no-op.
    pub fn mark_busy(&mut self, day: usize, start_slot: usize, end_slot: usize) {
        debug_assert!(day < self.day_count());
        debug_assert!(start_slot <= end_slot && end_slot <= self.slots_per_day());
        for slot in &mut self.days[day][start_slot..end_slot] {
            *slot = false;
        }
    }

    /// Whether a single slot is still free.
    pub fn is_free(&self, day: usize, slot: usize) -> bool {
        self.days[day][slot]
    }

    /// Total free slots remaining across the whole grid.
    pub fn count_free(&self) -> usize {
        self.days
            .iter()
            .map(|slots| slots.iter().filter(|free| **free).count())
            .sum()
    }

    /// True once no common free slot remains anywhere in the week.
    pub fn is_exhausted(&self) -> bool {
        self.count_free() == 0
    }

    /// Enumerate maximal runs of free slots, in day-then-slot order.
    ///
    /// Pure function of the current state: the iterator can be re-created at
    /// any time and yields the same runs until the grid is mutated again.
    pub fn free_runs(&self) -> impl Iterator<Item = FreeRun> + '_ {
        self.days.iter().enumerate().flat_map(|(day, slots)| DayRuns {
            day,
            slots,
            cursor: 0,
        })
    }
}

/// Scans one day's slots for maximal free runs.
struct DayRuns<'a> {
    day: usize,
    slots: &'a [bool],
    cursor: usize,
}

impl Iterator for DayRuns<'_> {
    type Item = FreeRun;

    fn next(&mut self) -> Option<FreeRun> {
        while self.cursor < self.slots.len() && !self.slots[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor >= self.slots.len() {
            return None;
        }
        let start_slot = self.cursor;
        while self.cursor < self.slots.len() && self.slots[self.cursor] {
            self.cursor += 1;
        }
        Some(FreeRun {
            day: self.day,
            start_slot,
            end_slot: self.cursor,
        })
    }
}
