//! Error types for free-slot computation.

use chrono::NaiveTime;
use thiserror::Error;

use crate::types::Day;

#[derive(Error, Debug)]
pub enum Error {
    /// Week number outside the teaching range (1-13). Raised at identifier
    /// construction, never from inside the intersection loop.
    #[error("Invalid week number: {0} (expected 1-13)")]
    InvalidWeek(String),

    /// Student ID that is not 7-8 ASCII digits. Raised at identifier
    /// construction, never from inside the intersection loop.
    #[error("Invalid student ID: {0} (expected 7-8 digits)")]
    InvalidStudentId(String),

    /// Misconfigured slot window (opening must precede closing, both within
    /// the same day).
    #[error("Invalid slot window: {opening}-{closing} (expected opening < closing <= 23)")]
    InvalidWindow { opening: u32, closing: u32 },

    /// The schedule source could not return a timetable for a student.
    /// Aborts the run for all remaining students.
    #[error("Timetable lookup failed for student {student_id}: {reason}")]
    Lookup { student_id: String, reason: String },

    /// A lesson's time range falls outside the configured slot window.
    /// Rejected rather than clamped, so a bad timetable can never silently
    /// corrupt the grid.
    #[error("Lesson for student {student_id} on {day} runs {from}-{to}, outside the {opening:02}:00-{closing:02}:00 window")]
    LessonOutOfWindow {
        student_id: String,
        day: Day,
        from: NaiveTime,
        to: NaiveTime,
        opening: u32,
        closing: u32,
    },
}

/// Convenience alias used throughout freeslot-core.
pub type Result<T> = std::result::Result<T, Error>;
