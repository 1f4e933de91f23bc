//! Lesson data model and the external schedule-source contract.
//!
//! Lessons are read-only input data owned by whatever backs the
//! [`ScheduleSource`]: a timetable web service in production, a JSON file in
//! the CLI, an in-memory map in tests.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Day, StudentId, WeekId};

/// One scheduled commitment belonging to one student.
///
/// `to_time` is exclusive. `week_ids` lists the teaching weeks in which the
/// lesson recurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub day: Day,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
    pub week_ids: Vec<u8>,
}

impl Lesson {
    /// Whether this lesson takes place in the given teaching week.
    pub fn recurs_in(&self, week: WeekId) -> bool {
        self.week_ids.contains(&week.get())
    }
}

/// One student's full weekly timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub lessons: Vec<Lesson>,
}

impl WeeklySchedule {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        WeeklySchedule { lessons }
    }

    /// All lessons on one day, in input order.
    pub fn lessons_on(&self, day: Day) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(move |lesson| lesson.day == day)
    }

    /// Lessons on one day that recur in the given teaching week.
    pub fn lessons_for_week(&self, day: Day, week: WeekId) -> impl Iterator<Item = &Lesson> {
        self.lessons_on(day).filter(move |lesson| lesson.recurs_in(week))
    }
}

/// The external collaborator that looks up a student's weekly timetable.
///
/// The intersection loop issues exactly one fetch per student, strictly
/// sequentially, and stops fetching once the grid is exhausted. Retry and
/// timeout policy, if any, belong to the implementor, not the loop.
pub trait ScheduleSource {
    /// Fetch the full weekly timetable for one student.
    ///
    /// # Errors
    /// Returns [`crate::Error::Lookup`] when the student is unknown or the
    /// backing service fails. The error aborts the run for all remaining
    /// students.
    fn fetch_weekly_schedule(&self, student: &StudentId) -> Result<WeeklySchedule>;
}
