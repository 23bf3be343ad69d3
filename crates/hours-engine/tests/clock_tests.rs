//! Tests for the time codec: minute offsets, `HH:MM` strings and clock text.

use hours_engine::error::ErrorKind;
use hours_engine::{parse_clock_text, parse_time_range, to_clock_string, to_minutes, HoursError};

// ── to_minutes / to_clock_string ────────────────────────────────────────────

#[test]
fn to_minutes_basic() {
    assert_eq!(to_minutes(0, 0).unwrap(), 0);
    assert_eq!(to_minutes(8, 30).unwrap(), 510);
    assert_eq!(to_minutes(23, 59).unwrap(), 1439);
}

#[test]
fn to_minutes_rejects_bad_components() {
    assert_eq!(to_minutes(24, 0).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(to_minutes(12, 60).unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn clock_string_is_zero_padded() {
    assert_eq!(to_clock_string(0).unwrap(), "00:00");
    assert_eq!(to_clock_string(65).unwrap(), "01:05");
    assert_eq!(to_clock_string(1439).unwrap(), "23:59");
}

#[test]
fn clock_string_rejects_full_day() {
    let err = to_clock_string(1440).unwrap_err();
    assert!(matches!(err, HoursError::OutOfRange(_)));
}

// ── parse_clock_text ────────────────────────────────────────────────────────

#[test]
fn twelve_hour_variants() {
    assert_eq!(parse_clock_text("8:30 a.m.").unwrap(), 510);
    assert_eq!(parse_clock_text("8:30am").unwrap(), 510);
    assert_eq!(parse_clock_text("8:30 PM").unwrap(), 1230);
    assert_eq!(parse_clock_text("8:30pm").unwrap(), 1230);
    assert_eq!(parse_clock_text("11:59 p. m.").unwrap(), 1439);
}

#[test]
fn non_breaking_spaces_are_ignored() {
    assert_eq!(parse_clock_text("7:00\u{a0}p.m.").unwrap(), 1140);
}

#[test]
fn twenty_four_hour_input() {
    assert_eq!(parse_clock_text("20:30").unwrap(), 1230);
    assert_eq!(parse_clock_text(" 9:05 ").unwrap(), 545);
}

#[test]
fn out_of_bounds_24_hour_is_range_error() {
    assert_eq!(parse_clock_text("25:00").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(parse_clock_text("10:75").unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn unrecognized_text_is_parse_error() {
    for text in ["", "noon", "12:00 m", "8.30", "ab:cd"] {
        let err = parse_clock_text(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "input {:?}", text);
    }
}

#[test]
fn noon_and_midnight_markers() {
    assert_eq!(parse_clock_text("12:00 pm").unwrap(), 720);
    assert_eq!(parse_clock_text("12:00 am").unwrap(), 0);
    assert_eq!(parse_clock_text("12:30a.m.").unwrap(), 30);
}

#[test]
fn hour_only_with_marker() {
    assert_eq!(parse_clock_text("8am").unwrap(), 480);
    assert_eq!(parse_clock_text("8 P.M.").unwrap(), 1200);
}

#[test]
fn marker_with_24_hour_value_is_parse_error() {
    let err = parse_clock_text("13:00 pm").unwrap_err();
    assert!(matches!(err, HoursError::InvalidTime(_)));
}

// ── parse_time_range ────────────────────────────────────────────────────────

fn bounds(text: &str) -> (u32, u32) {
    let interval = parse_time_range(text).unwrap();
    (interval.start(), interval.end())
}

#[test]
fn range_connectors() {
    assert_eq!(bounds("09:00 - 18:00"), (540, 1080));
    assert_eq!(bounds("9:00 a 19:00"), (540, 1140));
    assert_eq!(bounds("7:00 a.m. – 9:00 p.m."), (420, 1260));
    assert_eq!(bounds("8am to 5pm"), (480, 1020));
    assert_eq!(bounds("10:00/14:00"), (600, 840));
    assert_eq!(bounds("10:00 до 22:00"), (600, 1320));
}

#[test]
fn midnight_close() {
    assert_eq!(bounds("10:00 - 24:00"), (600, 1440));
    assert_eq!(bounds("10:00 - 00:00"), (600, 1440));
    assert_eq!(bounds("10:00 am - 12:00 am"), (600, 1440));
}

#[test]
fn whole_day_phrases() {
    assert_eq!(bounds("24 horas"), (0, 1440));
    assert_eq!(bounds("24 hours"), (0, 1440));
}

#[test]
fn overnight_range_is_flagged() {
    let err = parse_time_range("22:00 - 02:00").unwrap_err();
    assert_eq!(err, HoursError::OvernightInterval { start: 1320, end: 120 });
    assert_eq!(err.kind(), ErrorKind::Overnight);
}

#[test]
fn range_without_connector_is_parse_error() {
    let err = parse_time_range("9:00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn empty_range_is_range_error() {
    let err = parse_time_range("09:00 - 09:00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn connector_inside_marker_is_skipped() {
    // " a " splits too early here; the next connector candidate wins.
    assert_eq!(bounds("8:00 a m - 5:00 p m"), (480, 1020));
}
