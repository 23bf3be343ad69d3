//! Engine entry points.
//!
//! Both fragment shapes converge on the same [`ScheduleBuilder`]. Each fragment
//! is parsed on its own; a fragment that fails is reported in
//! [`Normalized::errors`] and the rest of the week is still built.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::parse_time_range;
use crate::compress::{compress, render_entries, CompressedEntry, DayRun, FormatOptions};
use crate::day::Day;
use crate::error::{ErrorKind, HoursError, Result};
use crate::interval::TimeInterval;
use crate::schedule::{ScheduleBuilder, WeeklySchedule};
use crate::vocabulary::DayVocabulary;

/// One textual unit of schedule evidence: `"Lunes a viernes"` + `"8:00 a.m. - 6:00 p.m."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFragment {
    #[serde(rename = "day")]
    pub day_token: String,
    #[serde(rename = "hours")]
    pub time_range_text: String,
}

impl RawFragment {
    pub fn new(day_token: impl Into<String>, time_range_text: impl Into<String>) -> Self {
        Self {
            day_token: day_token.into(),
            time_range_text: time_range_text.into(),
        }
    }
}

impl fmt::Display for RawFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_token, self.time_range_text)
    }
}

/// One numeric unit of schedule evidence: day 1 (Mon) … 7 (Sun) and minute offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNumericFragment {
    #[serde(rename = "day")]
    pub day_index: i64,
    #[serde(rename = "from")]
    pub from_minutes: i64,
    #[serde(rename = "to")]
    pub to_minutes: i64,
}

impl fmt::Display for RawNumericFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day={} from={} to={}",
            self.day_index, self.from_minutes, self.to_minutes
        )
    }
}

/// A fragment that could not be used, with its position in the input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentError {
    pub index: usize,
    /// The fragment as it was received, for logging or verbatim pass-through.
    pub input: String,
    pub error: HoursError,
}

impl FragmentError {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// The merged week plus every per-fragment failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub schedule: WeeklySchedule,
    pub errors: Vec<FragmentError>,
}

impl Normalized {
    pub fn runs(&self) -> Vec<DayRun> {
        compress(&self.schedule)
    }

    /// Compressed, labelled output lines in canonical day order.
    pub fn entries(&self, vocabulary: &DayVocabulary, options: &FormatOptions) -> Vec<CompressedEntry> {
        render_entries(&self.runs(), vocabulary, options)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Normalize textual fragments with the given day vocabulary.
pub fn normalize_text(fragments: &[RawFragment], vocabulary: &DayVocabulary) -> Normalized {
    normalize_with(fragments, |fragment| {
        let days = vocabulary.parse_day_token(&fragment.day_token)?.days()?;
        let interval = parse_time_range(&fragment.time_range_text)?;
        Ok((days, interval))
    })
}

/// Normalize numeric fragments.
pub fn normalize_numeric(fragments: &[RawNumericFragment]) -> Normalized {
    normalize_with(fragments, |fragment| {
        let day = u8::try_from(fragment.day_index)
            .map_err(|_| out_of_range("day index", fragment.day_index))
            .and_then(Day::from_index)?;
        let from = minute_offset(fragment.from_minutes)?;
        let to = minute_offset(fragment.to_minutes)?;
        Ok((vec![day], TimeInterval::closing_at(from, to)?))
    })
}

fn normalize_with<F, P>(fragments: &[F], parse: P) -> Normalized
where
    F: fmt::Display,
    P: Fn(&F) -> Result<(Vec<Day>, TimeInterval)>,
{
    let mut builder = ScheduleBuilder::new();
    let mut errors = Vec::new();

    for (index, fragment) in fragments.iter().enumerate() {
        match parse(fragment) {
            Ok((days, interval)) => {
                debug!(index, fragment = %fragment, %interval, ?days, "accepted fragment");
                builder.add_days(&days, interval);
            }
            Err(error) => {
                warn!(index, fragment = %fragment, %error, "rejected fragment");
                errors.push(FragmentError {
                    index,
                    input: fragment.to_string(),
                    error,
                });
            }
        }
    }

    let schedule = builder.build();
    debug!(
        fragments = fragments.len(),
        rejected = errors.len(),
        "built weekly schedule"
    );
    Normalized { schedule, errors }
}

fn minute_offset(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| out_of_range("minute offset", value))
}

fn out_of_range(what: &str, value: i64) -> HoursError {
    HoursError::OutOfRange(format!("{} {} is out of range", what, value))
}
