//! Day-range compression.
//!
//! Walks the week in canonical order and groups maximal runs of consecutive
//! days whose interval lists (their signatures) are identical. Closed days
//! form runs like any other; whether those runs are printed is decided when
//! rendering, through [`ClosedDays`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::interval::TimeInterval;
use crate::schedule::WeeklySchedule;
use crate::vocabulary::DayVocabulary;

/// A maximal run of consecutive days sharing one interval list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRun {
    /// Consecutive days, canonical order, never empty.
    pub days: Vec<Day>,
    /// The shared signature; empty when the run is closed.
    pub intervals: Vec<TimeInterval>,
}

impl DayRun {
    pub fn is_closed(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// One output line: a day-range label and a time-range label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressedEntry {
    /// e.g. `"Mon - Fri"`.
    pub days: String,
    /// e.g. `"09:00 - 18:00"`, or the closed label.
    pub hours: String,
}

impl fmt::Display for CompressedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.days, self.hours)
    }
}

/// What to emit for runs with no opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosedDays {
    /// Closed runs produce no output lines.
    #[default]
    Omit,
    /// Closed runs produce one line with this text in place of a time range.
    Label(String),
}

/// Rendering options for compressed schedules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub closed: ClosedDays,
}

/// Group consecutive days with identical interval lists.
///
/// A week where all seven days match yields a single `Mon…Sun` run.
pub fn compress(schedule: &WeeklySchedule) -> Vec<DayRun> {
    let mut runs: Vec<DayRun> = Vec::new();

    for entry in schedule.days() {
        match runs.last_mut() {
            Some(run) if run.intervals == entry.intervals => run.days.push(entry.day),
            _ => runs.push(DayRun {
                days: vec![entry.day],
                intervals: entry.intervals.clone(),
            }),
        }
    }

    runs
}

/// Render runs as output lines: one line per interval in each run, labelled
/// through the vocabulary.
pub fn render_entries(
    runs: &[DayRun],
    vocabulary: &DayVocabulary,
    options: &FormatOptions,
) -> Vec<CompressedEntry> {
    let mut entries = Vec::new();

    for run in runs {
        let days = vocabulary.format_day_range(&run.days);
        if run.is_closed() {
            if let ClosedDays::Label(label) = &options.closed {
                entries.push(CompressedEntry {
                    days,
                    hours: label.clone(),
                });
            }
            continue;
        }
        entries.extend(run.intervals.iter().map(|interval| CompressedEntry {
            days: days.clone(),
            hours: interval.to_string(),
        }));
    }

    entries
}

/// [`compress`] followed by [`render_entries`].
pub fn compress_schedule(
    schedule: &WeeklySchedule,
    vocabulary: &DayVocabulary,
    options: &FormatOptions,
) -> Vec<CompressedEntry> {
    render_entries(&compress(schedule), vocabulary, options)
}
