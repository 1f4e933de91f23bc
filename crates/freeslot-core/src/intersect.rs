//! Schedule intersection: the sequential fetch-then-mark loop.
//!
//! For each student in input order, fetch their weekly timetable, keep the
//! lessons recurring in the requested week, convert lesson times to grid slot
//! indices, and mark those slots busy. After each student the loop checks the
//! remaining free count and stops fetching the moment it hits zero -- no later
//! timetable can restore a slot to free, so further lookups would only cost
//! external calls without changing the answer.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::WeekGrid;
use crate::timetable::{Lesson, ScheduleSource};
use crate::types::{Day, StudentId, WeekId};

/// The bookable window of a teaching day: hours `[opening, closing)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    opening_hour: u32,
    closing_hour: u32,
}

impl Window {
    /// # Errors
    /// Returns [`Error::InvalidWindow`] unless `opening < closing <= 23`.
    pub fn new(opening_hour: u32, closing_hour: u32) -> Result<Self> {
        if opening_hour < closing_hour && closing_hour <= 23 {
            Ok(Window {
                opening_hour,
                closing_hour,
            })
        } else {
            Err(Error::InvalidWindow {
                opening: opening_hour,
                closing: closing_hour,
            })
        }
    }

    pub fn opening_hour(&self) -> u32 {
        self.opening_hour
    }

    pub fn closing_hour(&self) -> u32 {
        self.closing_hour
    }

    /// One slot per whole hour in the window.
    pub fn slots_per_day(&self) -> usize {
        (self.closing_hour - self.opening_hour) as usize
    }

    /// Create an all-free grid sized to this window.
    pub fn grid(&self, days: usize) -> WeekGrid {
        WeekGrid::new(days, self.slots_per_day())
    }

    /// Clock time at which the given slot starts. Also gives the exclusive
    /// end time of slot `slot - 1`, so it accepts `slot == slots_per_day()`.
    pub fn slot_start(&self, slot: usize) -> NaiveTime {
        debug_assert!(slot <= self.slots_per_day());
        NaiveTime::from_hms_opt(self.opening_hour + slot as u32, 0, 0)
            .expect("window hours are validated at construction")
    }

    /// Convert a lesson's time range to grid slot indices `(from, to)`,
    /// `to` exclusive.
    ///
    /// Partial-hour boundaries round outward (start floors, end ceils) so a
    /// lesson blocks every slot it touches. Returns `None` when the lesson is
    /// not fully inside the window or its range is inverted; the caller turns
    /// that into a data-integrity error instead of silently writing
    /// out-of-range indices.
    pub fn slot_range(&self, lesson: &Lesson) -> Option<(usize, usize)> {
        if lesson.from_time > lesson.to_time {
            return None;
        }
        let from_hour = lesson.from_time.hour();
        let mut to_hour = lesson.to_time.hour();
        if lesson.to_time.minute() > 0 || lesson.to_time.second() > 0 {
            to_hour += 1;
        }
        if from_hour < self.opening_hour || to_hour > self.closing_hour {
            return None;
        }
        Some((
            (from_hour - self.opening_hour) as usize,
            (to_hour - self.opening_hour) as usize,
        ))
    }
}

/// How an intersection run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every student was processed and at least one common slot survived.
    Completed,
    /// The grid hit zero free slots; remaining students were never fetched.
    Exhausted,
}

/// Final state of an intersection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: RunStatus,
    /// Students actually fetched; less than the input length when the run
    /// terminated early.
    pub students_processed: usize,
    pub free_slots: usize,
}

/// A reportable span of common free time on one day. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeInterval {
    pub day: Day,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Fetch one student's timetable and mark their week-`week` lessons busy on
/// the grid. Returns the free-slot count after marking.
///
/// This is the per-student step [`intersect_schedules`] is built on; callers
/// that want to interleave their own progress reporting (the CLI does) can
/// drive it directly.
///
/// # Errors
/// Propagates [`Error::Lookup`] from the source and raises
/// [`Error::LessonOutOfWindow`] for any applicable lesson outside the window.
/// Either way the grid keeps the marks applied so far; the caller decides
/// what to do with the partial state.
pub fn apply_student(
    week: WeekId,
    student: &StudentId,
    grid: &mut WeekGrid,
    window: &Window,
    source: &impl ScheduleSource,
) -> Result<usize> {
    debug_assert_eq!(grid.slots_per_day(), window.slots_per_day());

    let schedule = source.fetch_weekly_schedule(student)?;
    for day in Day::ALL.into_iter().take(grid.day_count()) {
        for lesson in schedule.lessons_for_week(day, week) {
            let (from_slot, to_slot) =
                window
                    .slot_range(lesson)
                    .ok_or_else(|| Error::LessonOutOfWindow {
                        student_id: student.to_string(),
                        day,
                        from: lesson.from_time,
                        to: lesson.to_time,
                        opening: window.opening_hour,
                        closing: window.closing_hour,
                    })?;
            grid.mark_busy(day.index(), from_slot, to_slot);
        }
    }
    Ok(grid.count_free())
}

/// Intersect the timetables of all `students` for one teaching week into
/// `grid`, fetching each timetable from `source` strictly in input order.
///
/// Stops fetching as soon as the grid is exhausted. The input order affects
/// only how early that short-circuit can fire, never the final grid.
///
/// # Errors
/// A fetch or data failure aborts the run for the remaining students and
/// propagates; the caller still owns the partially-marked grid and must flag
/// the abort rather than present partial state as a final answer.
pub fn intersect_schedules(
    week: WeekId,
    students: &[StudentId],
    grid: &mut WeekGrid,
    window: &Window,
    source: &impl ScheduleSource,
) -> Result<Outcome> {
    let mut students_processed = 0;
    for student in students {
        let remaining = apply_student(week, student, grid, window, source)?;
        students_processed += 1;
        if remaining == 0 {
            return Ok(Outcome {
                status: RunStatus::Exhausted,
                students_processed,
                free_slots: 0,
            });
        }
    }
    Ok(Outcome {
        status: RunStatus::Completed,
        students_processed,
        free_slots: grid.count_free(),
    })
}

/// Map the grid's free runs to clock-time intervals, in day-then-time order.
///
/// Lazy and restartable: recomputed from the grid state each call.
pub fn free_intervals<'a>(
    grid: &'a WeekGrid,
    window: &'a Window,
) -> impl Iterator<Item = FreeInterval> + 'a {
    grid.free_runs().filter_map(move |run| {
        let day = Day::from_index(run.day)?;
        Some(FreeInterval {
            day,
            start: window.slot_start(run.start_slot),
            end: window.slot_start(run.end_slot),
        })
    })
}
