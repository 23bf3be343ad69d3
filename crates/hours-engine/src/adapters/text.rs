//! Text adapter: cut schedule prose into (day token, time range) fragments.
//!
//! The text before each time range is that range's day token. A range with no
//! new day text in front of it belongs to the previous day token, which covers
//! split shifts written as `"Lunes a viernes 8:00 am - 12:00 pm, 2:00 pm - 6:00 pm"`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::normalize::RawFragment;

const TIME: &str = r"(?:\d{1,2}:\d{2}(?:\s*[ap]\.?\s*m\b\.?)?|\d{1,2}\s*[ap]\.?\s*m\b\.?)";
const CONNECTOR: &str = r"(?:\s*[-–—/]\s*|\s+(?:a|to|hasta|до)\s+)";

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i){time}{connector}{time}|\b24\s*(?:horas|hours|hrs|h|часа)\b",
        time = TIME,
        connector = CONNECTOR
    );
    Regex::new(&pattern).expect("time range pattern is valid")
});

/// Split free text (one or more lines) into raw fragments.
///
/// Text left over after the last time range is returned as a fragment with an
/// empty time range, so it is reported downstream instead of disappearing.
pub fn split_schedule_text(text: &str) -> Vec<RawFragment> {
    let text = text.replace('\u{a0}', " ");
    let mut fragments = Vec::new();
    let mut previous_day: Option<String> = None;
    let mut cursor = 0;

    for range in TIME_RANGE.find_iter(&text) {
        let day_text = trim_separators(&text[cursor..range.start()]);
        let day_token = if day_text.is_empty() {
            previous_day.clone().unwrap_or_default()
        } else {
            day_text.to_string()
        };
        fragments.push(RawFragment::new(day_token.clone(), range.as_str().trim()));
        previous_day = Some(day_token);
        cursor = range.end();
    }

    let trailing = trim_separators(&text[cursor..]);
    if !trailing.is_empty() {
        debug!(trailing, "schedule text has no time range after it");
        fragments.push(RawFragment::new(trailing, ""));
    }

    fragments
}

/// [`split_schedule_text`] over several lines; a line holding only day text
/// applies to the ranges on the following line.
pub fn split_schedule_lines<S: AsRef<str>>(lines: &[S]) -> Vec<RawFragment> {
    let joined = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    split_schedule_text(&joined)
}

fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '|' | '.'))
}
