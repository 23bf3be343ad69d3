//! Time codec: minute offsets since midnight ⇄ `HH:MM`, plus free-form clock text.
//!
//! Source pages write times as `"8:30 a.m."`, `"8:30pm"`, `"8 p.m."` or plain
//! 24-hour `"20:30"`. Everything is reduced to a minute offset in `0..1440`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{HoursError, Result};
use crate::interval::{TimeInterval, MINUTES_PER_DAY};

static CLOCK_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?([ap])m$").expect("12-hour clock pattern is valid")
});

static CLOCK_24H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("24-hour clock pattern is valid"));

static RANGE_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[-–—/]\s*|\s+(?:a|to|hasta|до)\s+").expect("range connector pattern is valid")
});

static WHOLE_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:las\s+)?24\s*(?:horas|hours|hrs|h|часа)$").expect("whole-day pattern is valid")
});

/// `hour * 60 + minute`, with both components bounds-checked.
pub fn to_minutes(hour: u32, minute: u32) -> Result<u32> {
    if hour > 23 || minute > 59 {
        return Err(HoursError::OutOfRange(format!(
            "{}:{:02} is not a valid time of day",
            hour, minute
        )));
    }
    Ok(hour * 60 + minute)
}

/// Render a minute offset as zero-padded 24-hour `HH:MM`.
pub fn to_clock_string(minutes: u32) -> Result<String> {
    if minutes >= MINUTES_PER_DAY {
        return Err(HoursError::OutOfRange(format!(
            "minute offset {} not in 0..1440",
            minutes
        )));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Parse a single clock reading into a minute offset.
///
/// Case-insensitive; spaces (including non-breaking ones) and periods are
/// ignored, so `"8:30 a.m."`, `"8:30AM"` and `"8:30 am"` are equivalent.
/// Input without an AM/PM marker is read as 24-hour time.
///
/// # Errors
/// `InvalidTime` when the text is not a recognizable clock reading,
/// `OutOfRange` when a 24-hour reading has an impossible hour or minute.
pub fn parse_clock_text(text: &str) -> Result<u32> {
    let compact: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    if let Some(caps) = CLOCK_12H.captures(&compact) {
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| HoursError::InvalidTime(text.to_string()))?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| HoursError::InvalidTime(text.to_string()))?,
            None => 0,
        };
        if !(1..=12).contains(&hour) {
            return Err(HoursError::InvalidTime(text.to_string()));
        }
        let pm = &caps[3] == "p";
        let hour24 = hour % 12 + if pm { 12 } else { 0 };
        return to_minutes(hour24, minute);
    }

    if let Some(caps) = CLOCK_24H.captures(&compact) {
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| HoursError::InvalidTime(text.to_string()))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| HoursError::InvalidTime(text.to_string()))?;
        return to_minutes(hour, minute);
    }

    Err(HoursError::InvalidTime(text.to_string()))
}

/// Parse an opening-time range such as `"8:00 a.m. – 9:00 p.m."`,
/// `"9:00 a 19:00"` or `"10:00 - 00:00"`.
///
/// The end side additionally accepts `"24:00"`; an end of `00:00` after a later
/// start is read as closing at midnight. Whole-day phrases (`"24 horas"`,
/// `"24 hours"`) yield `00:00-24:00`.
pub fn parse_time_range(text: &str) -> Result<TimeInterval> {
    let cleaned = text.replace('\u{a0}', " ").trim().to_lowercase();

    if WHOLE_DAY.is_match(&cleaned) {
        return TimeInterval::new(0, MINUTES_PER_DAY);
    }

    let mut first_error = None;
    for connector in RANGE_CONNECTOR.find_iter(&cleaned) {
        let start_text = &cleaned[..connector.start()];
        let end_text = &cleaned[connector.end()..];
        if start_text.is_empty() || end_text.is_empty() {
            continue;
        }
        let parsed = parse_clock_text(start_text)
            .and_then(|start| Ok((start, parse_interval_end(end_text)?)))
            .and_then(|(start, end)| TimeInterval::closing_at(start, end));
        match parsed {
            Ok(interval) => return Ok(interval),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    Err(first_error.unwrap_or_else(|| HoursError::InvalidTime(text.to_string())))
}

fn parse_interval_end(text: &str) -> Result<u32> {
    if text.trim() == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    parse_clock_text(text)
}
