//! Serializable location record carrying the normalized schedule.

use serde::{Deserialize, Serialize};

use crate::adapters::text::split_schedule_lines;
use crate::compress::{CompressedEntry, FormatOptions};
use crate::extract::LocationFields;
use crate::normalize::{normalize_text, Normalized};
use crate::vocabulary::DayVocabulary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub address: Option<String>,
    /// `[latitude, longitude]` when the source (or a caller-side geocoder) provides it.
    pub latlon: Option<[f64; 2]>,
    pub phones: Vec<String>,
    /// Rendered entries, e.g. `"Mon - Fri 09:00 - 18:00"`.
    pub working_hours: Vec<String>,
}

impl LocationRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            latlon: None,
            phones: Vec::new(),
            working_hours: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: &[CompressedEntry]) -> Self {
        self.working_hours = entries.iter().map(ToString::to_string).collect();
        self
    }

    /// Build a record from extracted fields, normalizing the schedule lines.
    ///
    /// The [`Normalized`] result is returned alongside so the caller can act
    /// on rejected fragments.
    pub fn from_fields(
        name: impl Into<String>,
        fields: LocationFields,
        vocabulary: &DayVocabulary,
        options: &FormatOptions,
    ) -> (Self, Normalized) {
        let fragments = split_schedule_lines(&fields.hours);
        let normalized = normalize_text(&fragments, vocabulary);
        let entries = normalized.entries(vocabulary, options);

        let record = Self {
            address: fields.address,
            phones: fields.phones,
            ..Self::new(name)
        }
        .with_entries(&entries);

        (record, normalized)
    }
}
