//! File-backed schedule source.
//!
//! Stands in for the timetable web service: a JSON document mapping student
//! IDs to weekly schedules, loaded once at startup.
//!
//! ```json
//! {
//!   "1234567": {
//!     "lessons": [
//!       { "day": "monday", "from_time": "09:00:00", "to_time": "11:00:00", "week_ids": [3] }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use freeslot_core::{Error, ScheduleSource, StudentId, WeeklySchedule};

pub struct JsonFileSource {
    timetables: HashMap<String, WeeklySchedule>,
}

impl JsonFileSource {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading timetable file {}", path.display()))?;
        let timetables = serde_json::from_str(&raw)
            .with_context(|| format!("parsing timetable file {}", path.display()))?;
        Ok(JsonFileSource { timetables })
    }
}

impl ScheduleSource for JsonFileSource {
    fn fetch_weekly_schedule(&self, student: &StudentId) -> freeslot_core::Result<WeeklySchedule> {
        self.timetables
            .get(student.as_str())
            .cloned()
            .ok_or_else(|| Error::Lookup {
                student_id: student.to_string(),
                reason: "no timetable on record".to_string(),
            })
    }
}
