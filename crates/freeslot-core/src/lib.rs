//! # freeslot-core
//!
//! Finds the time slots in a single teaching week during which a group of
//! students are all simultaneously free, given each student's weekly class
//! timetable.
//!
//! The week is a fixed grid of hour-long slots (five weekdays, one row per
//! day). Each student's busy lessons are intersected into the grid in turn;
//! whatever survives is common free time. The loop stops fetching timetables
//! the moment no common slot remains.
//!
//! ## Quick start
//!
//! ```rust
//! use freeslot_core::{
//!     free_intervals, intersect_schedules, ScheduleSource, StudentId, WeekId, WeeklySchedule,
//!     Window, TEACHING_DAYS,
//! };
//!
//! struct NoLessons;
//!
//! impl ScheduleSource for NoLessons {
//!     fn fetch_weekly_schedule(
//!         &self,
//!         _student: &StudentId,
//!     ) -> freeslot_core::Result<WeeklySchedule> {
//!         Ok(WeeklySchedule::default())
//!     }
//! }
//!
//! let window = Window::new(9, 18).unwrap();
//! let mut grid = window.grid(TEACHING_DAYS);
//! let week = WeekId::new(3).unwrap();
//! let students = vec![StudentId::parse("1234567").unwrap()];
//!
//! let outcome = intersect_schedules(week, &students, &mut grid, &window, &NoLessons).unwrap();
//! assert_eq!(outcome.free_slots, 45);
//! assert_eq!(free_intervals(&grid, &window).count(), 5);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — the week's free/busy slot state
//! - [`intersect`] — the fetch-then-mark loop, time-to-slot conversion, early termination
//! - [`timetable`] — lesson data model and the [`ScheduleSource`] contract
//! - [`types`] — validated identifiers and day-of-week values
//! - [`error`] — error taxonomy

pub mod error;
pub mod grid;
pub mod intersect;
pub mod timetable;
pub mod types;

pub use error::{Error, Result};
pub use grid::{FreeRun, WeekGrid};
pub use intersect::{
    apply_student, free_intervals, intersect_schedules, FreeInterval, Outcome, RunStatus, Window,
};
pub use timetable::{Lesson, ScheduleSource, WeeklySchedule};
pub use types::{Day, StudentId, WeekId, CLOSING_HOUR, OPENING_HOUR, TEACHING_DAYS};
