//! Labeled-field extraction over a stream of text fragments.
//!
//! Location blocks on source pages are sequences of short paragraphs where a
//! label introduces a value, either inline (`"Teléfono: 604 123, 604 456"`) or
//! on the following paragraph(s):
//!
//! ```text
//! Dirección
//! Cra 43A # 1-50
//! Horario de atención:
//! Lunes a sábado: 7:00 a.m. – 9:00 p.m.
//! Domingos y festivos: 8:00 a.m. – 8:00 p.m.
//! ```
//!
//! [`FieldExtractor`] walks the fragments with an explicit state machine:
//! `SeekingLabel` → `CollectingValue(field)` → … → `Done`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A field a label can introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Address,
    Phone,
    Hours,
}

/// Label texts per field. Matching is case-insensitive on the start of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabels {
    pub address: Vec<String>,
    pub phone: Vec<String>,
    pub hours: Vec<String>,
}

impl Default for FieldLabels {
    fn default() -> Self {
        let owned = |labels: &[&str]| labels.iter().map(|s| s.to_string()).collect();
        Self {
            address: owned(&["Dirección", "Direccion", "Address", "Адрес"]),
            phone: owned(&["Teléfono", "Telefono", "Phone", "Телефон"]),
            hours: owned(&[
                "Horario de atención",
                "Horario de atencion",
                "Horario",
                "Opening hours",
                "Hours",
                "Режим работы",
            ]),
        }
    }
}

impl FieldLabels {
    /// Longest label that starts `fragment`, with the byte offset where the
    /// value text begins.
    fn match_label(&self, fragment: &str) -> Option<(Field, usize)> {
        let lowered = fragment.to_lowercase();
        [
            (Field::Address, &self.address),
            (Field::Phone, &self.phone),
            (Field::Hours, &self.hours),
        ]
        .into_iter()
        .flat_map(|(field, labels)| labels.iter().map(move |label| (field, label)))
        .filter(|(_, label)| !label.is_empty() && lowered.starts_with(&label.to_lowercase()))
        .max_by_key(|(_, label)| label.chars().count())
        .map(|(field, label)| {
            let offset = fragment
                .char_indices()
                .nth(label.chars().count())
                .map_or(fragment.len(), |(i, _)| i);
            (field, offset)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorState {
    SeekingLabel,
    CollectingValue(Field),
    Done,
}

/// Fields recovered from one location block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFields {
    pub address: Option<String>,
    pub phones: Vec<String>,
    /// Raw schedule lines, in source order.
    pub hours: Vec<String>,
}

impl LocationFields {
    pub fn is_complete(&self) -> bool {
        self.address.is_some() && !self.phones.is_empty() && !self.hours.is_empty()
    }
}

pub struct FieldExtractor<'a> {
    labels: &'a FieldLabels,
    state: ExtractorState,
    fields: LocationFields,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(labels: &'a FieldLabels) -> Self {
        Self {
            labels,
            state: ExtractorState::SeekingLabel,
            fields: LocationFields::default(),
        }
    }

    pub fn state(&self) -> ExtractorState {
        self.state
    }

    /// Consume one text fragment.
    pub fn feed(&mut self, fragment: &str) {
        if self.state == ExtractorState::Done {
            warn!(fragment, "fragment after extraction finished, ignored");
            return;
        }

        let fragment = fragment.replace('\u{a0}', " ");
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }

        if let Some((field, offset)) = self.labels.match_label(fragment) {
            let value = fragment[offset..].trim_start_matches(|c: char| c == ':' || c.is_whitespace());
            if value.is_empty() {
                self.state = ExtractorState::CollectingValue(field);
            } else {
                self.store(field, value);
                self.state = match field {
                    Field::Hours => ExtractorState::CollectingValue(Field::Hours),
                    Field::Address | Field::Phone => ExtractorState::SeekingLabel,
                };
            }
            return;
        }

        match self.state {
            ExtractorState::CollectingValue(Field::Hours) => self.store(Field::Hours, fragment),
            ExtractorState::CollectingValue(field) => {
                self.store(field, fragment);
                self.state = ExtractorState::SeekingLabel;
            }
            ExtractorState::SeekingLabel => debug!(fragment, "unlabeled fragment skipped"),
            ExtractorState::Done => {}
        }
    }

    /// Stop extracting and hand back what was found.
    pub fn finish(&mut self) -> LocationFields {
        self.state = ExtractorState::Done;
        std::mem::take(&mut self.fields)
    }

    fn store(&mut self, field: Field, value: &str) {
        match field {
            Field::Address => {
                if self.fields.address.is_none() {
                    self.fields.address = Some(value.to_string());
                }
            }
            Field::Phone => self.fields.phones.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            ),
            Field::Hours => self.fields.hours.push(value.to_string()),
        }
    }
}

/// Run a fresh extractor over all fragments.
pub fn extract_fields<S: AsRef<str>>(labels: &FieldLabels, fragments: &[S]) -> LocationFields {
    let mut extractor = FieldExtractor::new(labels);
    for fragment in fragments {
        extractor.feed(fragment.as_ref());
    }
    extractor.finish()
}
