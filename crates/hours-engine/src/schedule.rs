//! Per-day and weekly schedules.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{HoursError, Result};
use crate::interval::{merge_intervals, TimeInterval};

/// Opening intervals for one day. An empty list means closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Day,
    /// Sorted by start, non-overlapping.
    pub intervals: Vec<TimeInterval>,
}

impl DaySchedule {
    pub fn closed(day: Day) -> Self {
        Self {
            day,
            intervals: Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Exactly one [`DaySchedule`] per day, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    /// A week with every day closed.
    pub fn closed() -> Self {
        Self {
            days: Day::ALL.iter().map(|d| DaySchedule::closed(*d)).collect(),
        }
    }

    /// Assemble a week from per-day entries, merging each day's intervals.
    ///
    /// # Errors
    /// `MissingDay` when the entries are not exactly Mon…Sun in order.
    pub fn from_days(days: Vec<DaySchedule>) -> Result<Self> {
        for (position, expected) in Day::ALL.iter().enumerate() {
            match days.get(position) {
                Some(entry) if entry.day == *expected => {}
                _ => return Err(HoursError::MissingDay(*expected)),
            }
        }
        if days.len() != Day::ALL.len() {
            // Extra trailing entries mean some day was listed twice.
            return Err(HoursError::MissingDay(days[Day::ALL.len()].day));
        }

        Ok(Self {
            days: days
                .into_iter()
                .map(|entry| DaySchedule {
                    day: entry.day,
                    intervals: merge_intervals(&entry.intervals),
                })
                .collect(),
        })
    }

    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day.position()]
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn is_closed_all_week(&self) -> bool {
        self.days.iter().all(DaySchedule::is_closed)
    }

    /// The entry for the weekday `date` falls on.
    pub fn on_date(&self, date: NaiveDate) -> &DaySchedule {
        self.day(Day::from(date.weekday()))
    }

    /// Whether the location is open at the wall-clock moment `at`.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let minute = at.hour() * 60 + at.minute();
        self.on_date(at.date())
            .intervals
            .iter()
            .any(|interval| interval.contains(minute))
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            days: Vec<DaySchedule>,
        }
        let raw = Raw::deserialize(deserializer)?;
        WeeklySchedule::from_days(raw.days).map_err(serde::de::Error::custom)
    }
}

/// Accumulates intervals per day from any number of fragments, then merges.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    pending: [Vec<TimeInterval>; 7],
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: Day, interval: TimeInterval) -> &mut Self {
        self.pending[day.position()].push(interval);
        self
    }

    pub fn add_days(&mut self, days: &[Day], interval: TimeInterval) -> &mut Self {
        for day in days {
            self.add(*day, interval);
        }
        self
    }

    pub fn build(&self) -> WeeklySchedule {
        WeeklySchedule {
            days: Day::ALL
                .iter()
                .map(|day| DaySchedule {
                    day: *day,
                    intervals: merge_intervals(&self.pending[day.position()]),
                })
                .collect(),
        }
    }
}
