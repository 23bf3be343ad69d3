//! # hours-engine
//!
//! Opening-hours normalization for business-location records.
//!
//! Sources describe a weekly schedule in many shapes: Spanish prose
//! ("Lunes a viernes 8:00 a.m. – 6:00 p.m."), single-letter codes
//! ("L-V 9:00 a 19:00"), Russian abbreviations, or numeric
//! `(day index, minute offset)` records. The engine reduces all of them to one
//! canonical, deduplicated, interval-merged, range-compressed weekly schedule.
//!
//! ## Quick start
//!
//! ```rust
//! use hours_engine::{normalize_text, DayVocabulary, FormatOptions, Locale, RawFragment};
//!
//! let vocabulary = DayVocabulary::preset(Locale::Spanish);
//! let fragments = vec![
//!     RawFragment::new("Lunes a viernes", "9:00 a.m. - 6:00 p.m."),
//!     RawFragment::new("Sábados y domingos", "10:00 - 14:00"),
//! ];
//!
//! let normalized = normalize_text(&fragments, &vocabulary);
//! let lines: Vec<String> = normalized
//!     .entries(&vocabulary, &FormatOptions::default())
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(lines, ["Mon - Fri 09:00 - 18:00", "Sat - Sun 10:00 - 14:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`clock`]: minute offsets ⇄ `HH:MM`, 12-hour clock text, time ranges
//! - [`day`]: canonical `Day` order and `DaySpec`
//! - [`vocabulary`]: per-locale day tokens, longest match first
//! - [`interval`]: `TimeInterval` and the per-day merger
//! - [`schedule`]: `DaySchedule`, `WeeklySchedule`, `ScheduleBuilder`
//! - [`compress`]: day-range compression and rendering
//! - [`normalize`]: text and numeric entry points with per-fragment errors
//! - [`adapters`]: reference text and numeric source adapters
//! - [`extract`]: labeled-field state machine for location blocks
//! - [`record`]: serializable location record
//! - [`error`]: error types

pub mod adapters;
pub mod clock;
pub mod compress;
pub mod day;
pub mod error;
pub mod extract;
pub mod interval;
pub mod normalize;
pub mod record;
pub mod schedule;
pub mod vocabulary;

pub use clock::{parse_clock_text, parse_time_range, to_clock_string, to_minutes};
pub use compress::{compress, compress_schedule, ClosedDays, CompressedEntry, DayRun, FormatOptions};
pub use day::{Day, DaySpec};
pub use error::{ErrorKind, HoursError};
pub use interval::{merge_intervals, TimeInterval};
pub use normalize::{normalize_numeric, normalize_text, FragmentError, Normalized, RawFragment, RawNumericFragment};
pub use record::LocationRecord;
pub use schedule::{DaySchedule, ScheduleBuilder, WeeklySchedule};
pub use vocabulary::{DayVocabulary, Locale, VocabularyConfig};
