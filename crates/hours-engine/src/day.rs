//! Canonical day enumeration and the day sets a vocabulary token can stand for.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};

/// A day of the week in canonical Mon→Sun order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Zero-based position in canonical order (Mon = 0).
    pub fn position(self) -> usize {
        self as usize
    }

    /// Parse a 1-based day index (1 = Mon … 7 = Sun), as used by numeric sources.
    pub fn from_index(index: u8) -> Result<Day> {
        match index {
            1..=7 => Ok(Day::ALL[usize::from(index - 1)]),
            other => Err(HoursError::OutOfRange(format!(
                "day index {} not in 1..=7",
                other
            ))),
        }
    }

    /// 1-based day index, the inverse of [`Day::from_index`].
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Inclusive list of days from `self` to `end`. No wrap past Sunday.
    pub fn through(self, end: Day) -> Result<Vec<Day>> {
        if end < self {
            return Err(HoursError::WrappingDayRange {
                from: self,
                to: end,
            });
        }
        Ok(Day::ALL[self.position()..=end.position()].to_vec())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        };
        f.write_str(name)
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// What a recognized day token refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySpec {
    /// A single day: `"Mon"`.
    Single(Day),
    /// An inclusive span: `{"from": "Mon", "to": "Fri"}`.
    Range { from: Day, to: Day },
    /// An explicit, possibly non-contiguous set: `["Mon", "Thu"]`.
    Set(Vec<Day>),
}

impl DaySpec {
    /// Expand to the canonical, deduplicated list of days.
    pub fn days(&self) -> Result<Vec<Day>> {
        let mut days = match self {
            DaySpec::Single(day) => vec![*day],
            DaySpec::Range { from, to } => from.through(*to)?,
            DaySpec::Set(days) => days.clone(),
        };
        days.sort();
        days.dedup();
        Ok(days)
    }
}
