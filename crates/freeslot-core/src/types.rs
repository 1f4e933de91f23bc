//! Validated identifiers and day-of-week value types.
//!
//! Week numbers and student IDs are validated once, at construction. The
//! intersection loop assumes every `WeekId` and `StudentId` it receives is
//! well-formed and never re-validates them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First bookable hour of a teaching day in the reference configuration.
pub const OPENING_HOUR: u32 = 9;

/// Hour the last bookable slot ends in the reference configuration.
pub const CLOSING_HOUR: u32 = 18;

/// Teaching days per week. Five, so Saturday timetables are ignored.
pub const TEACHING_DAYS: usize = 5;

/// A teaching day. Maps to a grid row via [`Day::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in grid order, Monday first.
    pub const ALL: [Day; TEACHING_DAYS] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Zero-based grid row for this day.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Day::index`]. Returns `None` past Friday.
    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    /// English display label ("Monday", ...).
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated student identifier: exactly 7 or 8 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Parse and validate a raw identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStudentId`] unless the input is 7-8 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let digits_only = raw.bytes().all(|b| b.is_ascii_digit());
        if digits_only && (7..=8).contains(&raw.len()) {
            Ok(StudentId(raw.to_string()))
        } else {
            Err(Error::InvalidStudentId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated teaching-week number in 1..=13.
///
/// Selects which recurrence of a weekly-recurring lesson schedule is being
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekId(u8);

impl WeekId {
    /// # Errors
    /// Returns [`Error::InvalidWeek`] for weeks outside 1..=13.
    pub fn new(week: u8) -> Result<Self> {
        if (1..=13).contains(&week) {
            Ok(WeekId(week))
        } else {
            Err(Error::InvalidWeek(week.to_string()))
        }
    }

    /// Parse a week number from raw text (CLI input).
    ///
    /// # Errors
    /// Returns [`Error::InvalidWeek`] if the text is not an integer in 1..=13.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| Error::InvalidWeek(raw.to_string()))
            .and_then(WeekId::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
