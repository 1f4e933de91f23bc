//! `freeslot` CLI — find the slots in one teaching week where a group of
//! students are all free.
//!
//! ## Usage
//!
//! ```sh
//! # Week 3, two students, timetables from a JSON file
//! freeslot 3 1234567 7654321 --timetables timetables.json
//!
//! # Machine-readable output
//! freeslot 3 1234567 --timetables timetables.json --json
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use freeslot_core::{
    apply_student, free_intervals, intersect_schedules, FreeInterval, Outcome, RunStatus,
    StudentId, WeekGrid, WeekId, Window, CLOSING_HOUR, OPENING_HOUR, TEACHING_DAYS,
};

mod source;
use source::JsonFileSource;

#[derive(Parser)]
#[command(
    name = "freeslot",
    version,
    about = "Find common free timetable slots for a group of students"
)]
struct Cli {
    /// Teaching week to check (1-13)
    week: String,

    /// Student IDs to intersect (7-8 digits each)
    #[arg(required = true)]
    student_ids: Vec<String>,

    /// JSON file mapping student IDs to weekly timetables
    #[arg(short, long)]
    timetables: PathBuf,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// First bookable hour of the day
    #[arg(long, default_value_t = OPENING_HOUR, hide = true)]
    opening: u32,

    /// Hour the last bookable slot ends
    #[arg(long, default_value_t = CLOSING_HOUR, hide = true)]
    closing: u32,
}

/// JSON output shape for `--json` mode.
#[derive(Serialize)]
struct Report {
    status: RunStatus,
    students_processed: usize,
    free_slots: usize,
    free_intervals: Vec<FreeInterval>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate inputs up front; the core assumes well-formed identifiers.
    let week = match WeekId::parse(&cli.week) {
        Ok(week) => week,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    };

    let mut students = Vec::with_capacity(cli.student_ids.len());
    let mut invalid = 0;
    for raw in &cli.student_ids {
        match StudentId::parse(raw) {
            Ok(id) => students.push(id),
            Err(err) => {
                println!("{err}");
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        process::exit(1);
    }

    let window = Window::new(cli.opening, cli.closing)?;
    let mut grid = window.grid(TEACHING_DAYS);
    let source = JsonFileSource::load(&cli.timetables)?;

    if cli.json {
        let outcome = intersect_schedules(week, &students, &mut grid, &window, &source)?;
        print_json(&outcome, &grid, &window)?;
    } else {
        let outcome = run_with_progress(week, &students, &mut grid, &window, &source)?;
        print_text(&outcome, &grid, &window);
    }

    Ok(())
}

/// Drive the intersection one student at a time so progress can be reported
/// between external lookups, the way an interactive user expects.
fn run_with_progress(
    week: WeekId,
    students: &[StudentId],
    grid: &mut WeekGrid,
    window: &Window,
    source: &JsonFileSource,
) -> Result<Outcome> {
    let mut students_processed = 0;
    for (position, student) in students.iter().enumerate() {
        println!(
            "Querying week {} timetable for student {}... ({}/{})",
            week,
            student,
            position + 1,
            students.len()
        );
        let remaining = apply_student(week, student, grid, window, source)?;
        students_processed += 1;
        println!("Available slots: {remaining}");
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

fn print_text(outcome: &Outcome, grid: &WeekGrid, window: &Window) {
    println!("Final available slots: {}", outcome.free_slots);
    for interval in free_intervals(grid, window) {
        println!(
            "{}, {}-{}",
            interval.day,
            interval.start.format("%H:%M"),
            interval.end.format("%H:%M")
        );
    }
}

fn print_json(outcome: &Outcome, grid: &WeekGrid, window: &Window) -> Result<()> {
    let report = Report {
        status: outcome.status,
        students_processed: outcome.students_processed,
        free_slots: outcome.free_slots,
        free_intervals: free_intervals(grid, window).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
