//! Numeric adapter: structured opening-hours records → numeric fragments.
//!
//! Sources that ship their schedule as JSON describe each opening with a day
//! index (1 = Monday) and minute offsets, usually tagged with a schedule type:
//!
//! ```json
//! [{"day": 1, "from": 600, "to": 1380, "type": "default", "shop_id": 12}]
//! ```
//!
//! Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalize::RawNumericFragment;

/// The schedule type regular opening hours are tagged with.
pub const DEFAULT_KIND: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRecord {
    pub day: i64,
    pub from: i64,
    pub to: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<&NumericRecord> for RawNumericFragment {
    fn from(record: &NumericRecord) -> Self {
        RawNumericFragment {
            day_index: record.day,
            from_minutes: record.from,
            to_minutes: record.to,
        }
    }
}

/// Keep records of the given schedule type (untyped records are kept too).
pub fn fragments_from_records(records: &[NumericRecord], kind: &str) -> Vec<RawNumericFragment> {
    records
        .iter()
        .filter(|record| record.kind.as_deref().is_none_or(|k| k == kind))
        .map(RawNumericFragment::from)
        .collect()
}

/// Decode a JSON array of records and keep those of the given type.
pub fn fragments_from_json(json: &str, kind: &str) -> Result<Vec<RawNumericFragment>> {
    let records: Vec<NumericRecord> = serde_json::from_str(json)?;
    Ok(fragments_from_records(&records, kind))
}
