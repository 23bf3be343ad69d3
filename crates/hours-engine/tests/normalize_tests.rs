//! End-to-end tests for the text and numeric entry points.

use hours_engine::error::ErrorKind;
use hours_engine::{
    normalize_numeric, normalize_text, Day, DayVocabulary, FormatOptions, HoursError, Locale,
    RawFragment, RawNumericFragment,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn text(day: &str, hours: &str) -> RawFragment {
    RawFragment::new(day, hours)
}

fn numeric(day_index: i64, from_minutes: i64, to_minutes: i64) -> RawNumericFragment {
    RawNumericFragment {
        day_index,
        from_minutes,
        to_minutes,
    }
}

fn render(vocab: &DayVocabulary, normalized: &hours_engine::Normalized) -> Vec<String> {
    normalized
        .entries(vocab, &FormatOptions::default())
        .iter()
        .map(ToString::to_string)
        .collect()
}

// ── Text entry point ────────────────────────────────────────────────────────

#[test]
fn spanish_prose_schedule() {
    let vocab = DayVocabulary::preset(Locale::Spanish);
    let fragments = vec![
        text("Lunes a sábado", "7:00 a.m. – 9:00 p.m."),
        text("Domingos y festivos", "8:00 a.m. – 8:00 p.m."),
    ];
    let normalized = normalize_text(&fragments, &vocab);

    assert!(!normalized.has_errors());
    assert_eq!(
        render(&vocab, &normalized),
        vec!["Mon - Sat 07:00 - 21:00", "Sun 08:00 - 20:00"]
    );
}

#[test]
fn split_shift_reported_in_separate_fragments() {
    let vocab = DayVocabulary::preset(Locale::English);
    let fragments = vec![
        text("Monday", "08:00 - 12:00"),
        text("Monday", "14:00 - 18:00"),
        text("Monday", "12:00 - 14:00"),
    ];
    let normalized = normalize_text(&fragments, &vocab);
    assert_eq!(render(&vocab, &normalized), vec!["Mon 08:00 - 18:00"]);
}

#[test]
fn overlapping_fragments_from_range_and_single_day() {
    let vocab = DayVocabulary::preset(Locale::SpanishCodes);
    let fragments = vec![
        text("L-V", "9:00 a 14:00"),
        text("V", "13:00 a 19:00"),
    ];
    let normalized = normalize_text(&fragments, &vocab);
    assert_eq!(
        render(&vocab, &normalized),
        vec!["Mon - Thu 09:00 - 14:00", "Fri 09:00 - 19:00"]
    );
}

#[test]
fn unknown_day_token_is_isolated() {
    let vocab = DayVocabulary::preset(Locale::English);
    let fragments = vec![
        text("Monday", "09:00 - 18:00"),
        text("Tuesday", "09:00 - 18:00"),
        text("Wednesday", "09:00 - 18:00"),
        text("Thursday", "09:00 - 18:00"),
        text("Friday", "09:00 - 18:00"),
        text("Saturday", "10:00 - 14:00"),
        text("Caturday", "10:00 - 14:00"),
    ];
    let normalized = normalize_text(&fragments, &vocab);

    assert_eq!(normalized.errors.len(), 1);
    let failure = &normalized.errors[0];
    assert_eq!(failure.index, 6);
    assert_eq!(failure.kind(), ErrorKind::Parse);
    assert_eq!(failure.error, HoursError::UnknownDay("Caturday".to_string()));
    assert_eq!(failure.input, "Caturday 10:00 - 14:00");

    assert_eq!(
        render(&vocab, &normalized),
        vec!["Mon - Fri 09:00 - 18:00", "Sat 10:00 - 14:00"]
    );
    assert!(normalized.schedule.day(Day::Sun).is_closed());
}

#[test]
fn bad_time_text_rejects_only_that_fragment() {
    let vocab = DayVocabulary::preset(Locale::English);
    let fragments = vec![
        text("Mon - Fri", "09:00 - 18:00"),
        text("Sat", "10:00 - noon"),
        text("Sun", "25:00 - 26:00"),
    ];
    let normalized = normalize_text(&fragments, &vocab);

    let kinds: Vec<ErrorKind> = normalized.errors.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![ErrorKind::Parse, ErrorKind::Range]);
    assert_eq!(render(&vocab, &normalized), vec!["Mon - Fri 09:00 - 18:00"]);
}

#[test]
fn overnight_fragment_is_flagged_not_dropped_silently() {
    let vocab = DayVocabulary::preset(Locale::English);
    let fragments = vec![text("Fri", "22:00 - 02:00")];
    let normalized = normalize_text(&fragments, &vocab);

    assert_eq!(normalized.errors.len(), 1);
    assert_eq!(normalized.errors[0].kind(), ErrorKind::Overnight);
    assert!(normalized.schedule.is_closed_all_week());
}

// ── Numeric entry point ─────────────────────────────────────────────────────

#[test]
fn numeric_schedule_all_week() {
    let fragments: Vec<RawNumericFragment> = (1..=7).map(|d| numeric(d, 600, 1380)).collect();
    let normalized = normalize_numeric(&fragments);
    let vocab = DayVocabulary::preset(Locale::Russian);
    assert_eq!(render(&vocab, &normalized), vec!["Пн - Вс 10:00 - 23:00"]);
}

#[test]
fn numeric_merges_split_periods() {
    let fragments = vec![numeric(1, 480, 720), numeric(1, 700, 1080), numeric(2, 480, 1080)];
    let normalized = normalize_numeric(&fragments);
    let vocab = DayVocabulary::preset(Locale::English);
    assert_eq!(render(&vocab, &normalized), vec!["Mon - Tue 08:00 - 18:00"]);
}

#[test]
fn numeric_out_of_range_values_are_isolated() {
    let fragments = vec![
        numeric(0, 600, 1200),
        numeric(8, 600, 1200),
        numeric(3, -5, 1200),
        numeric(4, 600, 1500),
        numeric(5, 600, 1200),
    ];
    let normalized = normalize_numeric(&fragments);

    assert_eq!(normalized.errors.len(), 4);
    assert!(normalized.errors.iter().all(|e| e.kind() == ErrorKind::Range));
    let indexes: Vec<usize> = normalized.errors.iter().map(|e| e.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3]);

    let vocab = DayVocabulary::preset(Locale::English);
    assert_eq!(render(&vocab, &normalized), vec!["Fri 10:00 - 20:00"]);
}

#[test]
fn numeric_midnight_close() {
    let normalized = normalize_numeric(&[numeric(6, 720, 0), numeric(7, 720, 1440)]);
    let vocab = DayVocabulary::preset(Locale::English);
    assert_eq!(render(&vocab, &normalized), vec!["Sat - Sun 12:00 - 24:00"]);
}

// ── Equivalence of the two entry points ─────────────────────────────────────

#[test]
fn numeric_and_text_forms_agree() {
    let vocab = DayVocabulary::preset(Locale::English);
    let text_fragments = vec![
        text("Mon - Fri", "9:00 am - 6:00 pm"),
        text("Sat", "10:00 - 14:00"),
        text("Sun", "10:00 - 14:00"),
        text("Wed", "12:00 - 13:00"),
    ];
    let mut numeric_fragments: Vec<RawNumericFragment> =
        (1..=5).map(|d| numeric(d, 540, 1080)).collect();
    numeric_fragments.push(numeric(6, 600, 840));
    numeric_fragments.push(numeric(7, 600, 840));

    let from_text = normalize_text(&text_fragments, &vocab);
    let from_numeric = normalize_numeric(&numeric_fragments);

    assert_eq!(from_text.schedule, from_numeric.schedule);
    assert_eq!(
        from_text.entries(&vocab, &FormatOptions::default()),
        from_numeric.entries(&vocab, &FormatOptions::default())
    );
}

#[test]
fn fragment_serde_shape() {
    let fragment: RawFragment =
        serde_json::from_str(r#"{"day": "Lunes", "hours": "9:00 - 18:00"}"#).unwrap();
    assert_eq!(fragment, text("Lunes", "9:00 - 18:00"));

    let fragment: RawNumericFragment =
        serde_json::from_str(r#"{"day": 1, "from": 540, "to": 1080}"#).unwrap();
    assert_eq!(fragment, numeric(1, 540, 1080));
}
