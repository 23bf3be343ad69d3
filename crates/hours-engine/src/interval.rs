//! Same-day opening intervals and the per-day interval merger.
//!
//! Sorts intervals by start time, then folds overlapping or touching intervals
//! into one. `[08:00-12:00]` and `[12:00-18:00]` become `[08:00-18:00]`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::to_clock_string;
use crate::error::{HoursError, Result};

/// Minutes in one day; the largest valid interval end.
pub const MINUTES_PER_DAY: u32 = 1440;

/// An opening interval within one day, in minutes since midnight.
///
/// Invariant: `start < end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

#[derive(Serialize, Deserialize)]
struct RawInterval {
    start: u32,
    end: u32,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = HoursError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        TimeInterval::new(raw.start, raw.end)
    }
}

impl From<TimeInterval> for RawInterval {
    fn from(interval: TimeInterval) -> Self {
        RawInterval {
            start: interval.start,
            end: interval.end,
        }
    }
}

impl TimeInterval {
    /// # Errors
    /// `OutOfRange` when either bound is outside the day or the interval is
    /// empty; `OvernightInterval` when `end < start`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start >= MINUTES_PER_DAY || end > MINUTES_PER_DAY {
            return Err(HoursError::OutOfRange(format!(
                "interval {}-{} exceeds 0..=1440",
                start, end
            )));
        }
        if end < start {
            return Err(HoursError::OvernightInterval { start, end });
        }
        if end == start {
            return Err(HoursError::OutOfRange(format!(
                "interval {}-{} is empty",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Like [`TimeInterval::new`], but an end of `0` after a later start means
    /// closing at midnight.
    pub fn closing_at(start: u32, end: u32) -> Result<Self> {
        if end == 0 && start > 0 {
            return Self::new(start, MINUTES_PER_DAY);
        }
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both bounds were validated at construction; only `end == 1440` needs
        // the explicit "24:00" spelling.
        let start = to_clock_string(self.start).map_err(|_| fmt::Error)?;
        let end = if self.end == MINUTES_PER_DAY {
            "24:00".to_string()
        } else {
            to_clock_string(self.end).map_err(|_| fmt::Error)?
        };
        write!(f, "{} - {}", start, end)
    }
}

/// Merge a day's intervals into the minimal sorted, non-overlapping list.
///
/// Touching intervals (`next.start == current.end`) are merged as well.
pub fn merge_intervals(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
