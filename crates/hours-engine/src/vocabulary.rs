//! Locale-specific day vocabulary.
//!
//! A [`DayVocabulary`] is an immutable lookup table built once per locale and
//! passed explicitly to every parsing call. Day tokens are matched longest
//! phrase first, so a short code (`"l"`) never matches inside a longer known
//! phrase (`"l-v"`, `"lunes"`). Phrases combine through range connectors
//! (`"lunes a viernes"`) and list connectors (`"sábados y domingos"`).

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::day::{Day, DaySpec};
use crate::error::{HoursError, Result};

/// Built-in vocabulary presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Full English names, three- and two-letter abbreviations, "weekdays".
    English,
    /// Spanish day names and schedule phrases ("lunes a viernes").
    Spanish,
    /// Spanish single-letter codes (L M X J V S D) and shorthands ("L-V").
    SpanishCodes,
    /// Russian two-letter codes (Пн…Вс) and full names.
    Russian,
}

impl Locale {
    pub const ALL: [Locale; 4] = [
        Locale::English,
        Locale::Spanish,
        Locale::SpanishCodes,
        Locale::Russian,
    ];

    /// The preset's configuration table.
    pub fn config(self) -> VocabularyConfig {
        match self {
            Locale::English => english(),
            Locale::Spanish => spanish(),
            Locale::SpanishCodes => spanish_codes(),
            Locale::Russian => russian(),
        }
    }
}

impl FromStr for Locale {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "es" | "spanish" => Ok(Locale::Spanish),
            "es-codes" | "spanish-codes" => Ok(Locale::SpanishCodes),
            "ru" | "russian" => Ok(Locale::Russian),
            other => Err(HoursError::Config(format!(
                "unknown locale '{}' (available: en, es, es-codes, ru)",
                other
            ))),
        }
    }
}

/// Serializable vocabulary table.
///
/// ```json
/// {
///   "labels": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
///   "days": { "lun": "Mon", "l-v": { "from": "Mon", "to": "Fri" }, "l y j": ["Mon", "Thu"] },
///   "range_connectors": ["-", "a"],
///   "list_connectors": [",", "y"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Output labels in canonical order, Mon first.
    #[serde(default = "english_labels")]
    pub labels: [String; 7],
    /// Source token → the day(s) it denotes.
    pub days: BTreeMap<String, DaySpec>,
    /// Words or symbols joining the two ends of a day span.
    #[serde(default)]
    pub range_connectors: Vec<String>,
    /// Words or symbols joining independent days or spans.
    #[serde(default)]
    pub list_connectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Lexeme {
    Days(DaySpec),
    RangeConnector,
    ListConnector,
}

/// Immutable day-token lookup for one locale (or a merge of several).
#[derive(Debug, Clone)]
pub struct DayVocabulary {
    labels: [String; 7],
    /// Normalized keys, longest first.
    lexicon: Vec<(String, Lexeme)>,
}

impl DayVocabulary {
    /// Build a vocabulary from a configuration table.
    ///
    /// # Errors
    /// `Config` when a key normalizes to nothing or a day range wraps.
    pub fn new(config: VocabularyConfig) -> Result<Self> {
        Self::from_configs(vec![config])
    }

    /// A built-in preset.
    pub fn preset(locale: Locale) -> Self {
        Self::from_configs(vec![locale.config()])
            .unwrap_or_else(|err| unreachable!("built-in preset {:?} is invalid: {}", locale, err))
    }

    /// Several presets combined; on token collisions the earlier locale wins.
    /// Output labels come from the first locale.
    pub fn merged(locales: &[Locale]) -> Result<Self> {
        if locales.is_empty() {
            return Err(HoursError::Config("no locales given".to_string()));
        }
        Self::from_configs(locales.iter().map(|l| l.config()).collect())
    }

    /// Load a vocabulary from its JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: VocabularyConfig =
            serde_json::from_str(json).map_err(|err| HoursError::Config(err.to_string()))?;
        Self::new(config)
    }

    fn from_configs(configs: Vec<VocabularyConfig>) -> Result<Self> {
        let labels = configs
            .first()
            .map(|c| c.labels.clone())
            .unwrap_or_else(english_labels);

        let mut seen = HashSet::new();
        let mut lexicon = Vec::new();
        for config in configs {
            let entries = config
                .days
                .into_iter()
                .map(|(key, spec)| (key, Lexeme::Days(spec)))
                .chain(
                    config
                        .range_connectors
                        .into_iter()
                        .map(|key| (key, Lexeme::RangeConnector)),
                )
                .chain(
                    config
                        .list_connectors
                        .into_iter()
                        .map(|key| (key, Lexeme::ListConnector)),
                );

            for (key, lexeme) in entries {
                let normalized = match lexeme {
                    Lexeme::Days(_) => normalize_token(&key),
                    Lexeme::RangeConnector | Lexeme::ListConnector => normalize_connector(&key),
                };
                if normalized.is_empty() {
                    return Err(HoursError::Config(format!("empty vocabulary key '{}'", key)));
                }
                if let Lexeme::Days(spec) = &lexeme {
                    spec.days()
                        .map_err(|err| HoursError::Config(format!("'{}': {}", key, err)))?;
                }
                if seen.insert(normalized.clone()) {
                    lexicon.push((normalized, lexeme));
                }
            }
        }

        lexicon.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Ok(Self { labels, lexicon })
    }

    /// Output label for one day.
    pub fn label(&self, day: Day) -> &str {
        &self.labels[day.position()]
    }

    pub fn labels(&self) -> &[String; 7] {
        &self.labels
    }

    /// Resolve a day token: a single name or code, a known shorthand phrase,
    /// or a combination of those joined by range/list connectors.
    ///
    /// # Errors
    /// `UnknownDay` when any part of the token is not in the vocabulary or the
    /// connectors are dangling; `WrappingDayRange` for spans like "Sun - Mon".
    pub fn parse_day_token(&self, token: &str) -> Result<DaySpec> {
        let normalized = normalize_token(token);
        let unknown = || HoursError::UnknownDay(token.trim().to_string());
        let lexemes = self.tokenize(&normalized).ok_or_else(unknown)?;

        let mut terms: Vec<DaySpec> = Vec::new();
        let mut pending: Option<DaySpec> = None;
        let mut range_open = false;
        let mut list_open = false;

        for lexeme in lexemes {
            match lexeme {
                Lexeme::Days(spec) => {
                    if range_open {
                        let from = match pending.take() {
                            Some(DaySpec::Single(day)) => day,
                            _ => return Err(unknown()),
                        };
                        let to = match spec {
                            DaySpec::Single(day) => *day,
                            _ => return Err(unknown()),
                        };
                        from.through(to)?;
                        terms.push(DaySpec::Range { from, to });
                        range_open = false;
                    } else {
                        // Adjacent names without a connector read as a list.
                        if let Some(previous) = pending.replace(spec.clone()) {
                            terms.push(previous);
                        }
                    }
                    list_open = false;
                }
                Lexeme::RangeConnector => {
                    if range_open || !matches!(pending, Some(DaySpec::Single(_))) {
                        return Err(unknown());
                    }
                    range_open = true;
                }
                Lexeme::ListConnector => {
                    if range_open || list_open || (pending.is_none() && terms.is_empty()) {
                        return Err(unknown());
                    }
                    if let Some(previous) = pending.take() {
                        terms.push(previous);
                    }
                    list_open = true;
                }
            }
        }

        if range_open || list_open {
            return Err(unknown());
        }
        if let Some(last) = pending {
            terms.push(last);
        }

        match terms.len() {
            0 => Err(unknown()),
            1 => Ok(terms.remove(0)),
            _ => {
                let mut days = Vec::new();
                for term in &terms {
                    days.extend(term.days()?);
                }
                days.sort();
                days.dedup();
                Ok(DaySpec::Set(days))
            }
        }
    }

    /// Render an ordered run of consecutive days: one day as its label, two or
    /// more as `"<first> - <last>"`.
    pub fn format_day_range(&self, days: &[Day]) -> String {
        match days {
            [] => String::new(),
            [only] => self.label(*only).to_string(),
            [first, .., last] => format!("{} - {}", self.label(*first), self.label(*last)),
        }
    }

    fn tokenize<'a>(&'a self, normalized: &str) -> Option<Vec<&'a Lexeme>> {
        let mut lexemes = Vec::new();
        let mut rest = normalized;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return Some(lexemes);
            }
            let (key, lexeme) = self
                .lexicon
                .iter()
                .find(|(key, _)| rest.starts_with(key.as_str()) && ends_on_boundary(key, &rest[key.len()..]))?;
            lexemes.push(lexeme);
            rest = &rest[key.len()..];
        }
    }
}

/// A key ending in a letter or digit must not be followed by another one,
/// so `"mar"` never matches the start of `"martes"`.
fn ends_on_boundary(key: &str, after: &str) -> bool {
    let key_ends_alnum = key.chars().last().is_some_and(char::is_alphanumeric);
    let next_is_alnum = after.chars().next().is_some_and(char::is_alphanumeric);
    !(key_ends_alnum && next_is_alnum)
}

/// Lowercase, unify dashes and spaces, drop periods and colons, collapse
/// whitespace, write every comma as `", "` and trim leading or trailing
/// separators.
fn normalize_token(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .filter(|c| *c != '.' && *c != ':')
        .collect();
    normalize_connector(&mapped)
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
        .trim_matches(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .to_string()
}

/// Case, dash and whitespace folding only. Connector keys such as `","` must
/// come out unchanged.
fn normalize_connector(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '\u{a0}' => ' ',
            '–' | '—' => '-',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

fn english_labels() -> [String; 7] {
    Day::ALL.map(|d| d.to_string())
}

fn table(
    labels: [String; 7],
    days: &[(&str, DaySpec)],
    range_connectors: &[&str],
    list_connectors: &[&str],
) -> VocabularyConfig {
    VocabularyConfig {
        labels,
        days: days
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
        range_connectors: range_connectors.iter().map(|s| s.to_string()).collect(),
        list_connectors: list_connectors.iter().map(|s| s.to_string()).collect(),
    }
}

fn single(day: Day) -> DaySpec {
    DaySpec::Single(day)
}

fn span(from: Day, to: Day) -> DaySpec {
    DaySpec::Range { from, to }
}

fn english() -> VocabularyConfig {
    use Day::*;
    table(
        english_labels(),
        &[
            ("monday", single(Mon)),
            ("mondays", single(Mon)),
            ("mon", single(Mon)),
            ("mo", single(Mon)),
            ("tuesday", single(Tue)),
            ("tuesdays", single(Tue)),
            ("tues", single(Tue)),
            ("tue", single(Tue)),
            ("tu", single(Tue)),
            ("wednesday", single(Wed)),
            ("wednesdays", single(Wed)),
            ("weds", single(Wed)),
            ("wed", single(Wed)),
            ("we", single(Wed)),
            ("thursday", single(Thu)),
            ("thursdays", single(Thu)),
            ("thurs", single(Thu)),
            ("thur", single(Thu)),
            ("thu", single(Thu)),
            ("th", single(Thu)),
            ("friday", single(Fri)),
            ("fridays", single(Fri)),
            ("fri", single(Fri)),
            ("fr", single(Fri)),
            ("saturday", single(Sat)),
            ("saturdays", single(Sat)),
            ("sat", single(Sat)),
            ("sa", single(Sat)),
            ("sunday", single(Sun)),
            ("sundays", single(Sun)),
            ("sun", single(Sun)),
            ("su", single(Sun)),
            ("weekdays", span(Mon, Fri)),
            ("weekends", span(Sat, Sun)),
            ("weekend", span(Sat, Sun)),
            ("daily", span(Mon, Sun)),
            ("every day", span(Mon, Sun)),
            ("everyday", span(Mon, Sun)),
            ("sunday and holidays", single(Sun)),
            ("sun and holidays", single(Sun)),
        ],
        &["-", "to", "through", "thru", "until"],
        &[",", "and", "&"],
    )
}

fn spanish() -> VocabularyConfig {
    use Day::*;
    table(
        english_labels(),
        &[
            ("lunes", single(Mon)),
            ("lun", single(Mon)),
            ("martes", single(Tue)),
            ("mar", single(Tue)),
            ("miércoles", single(Wed)),
            ("miercoles", single(Wed)),
            ("mié", single(Wed)),
            ("mie", single(Wed)),
            ("jueves", single(Thu)),
            ("jue", single(Thu)),
            ("viernes", single(Fri)),
            ("vie", single(Fri)),
            ("sábado", single(Sat)),
            ("sábados", single(Sat)),
            ("sabado", single(Sat)),
            ("sabados", single(Sat)),
            ("sáb", single(Sat)),
            ("sab", single(Sat)),
            ("domingo", single(Sun)),
            ("domingos", single(Sun)),
            ("dom", single(Sun)),
            ("lunes a domingos incluye festivos", span(Mon, Sun)),
            ("domingos y festivos", single(Sun)),
            ("domingo y festivos", single(Sun)),
            ("todos los días", span(Mon, Sun)),
            ("todos los dias", span(Mon, Sun)),
            ("prestamos servicio", span(Mon, Sun)),
            ("prestamos servicio las", span(Mon, Sun)),
        ],
        &["-", "a", "al", "hasta"],
        &[",", "y", "e"],
    )
}

fn spanish_codes() -> VocabularyConfig {
    use Day::*;
    table(
        english_labels(),
        &[
            ("l", single(Mon)),
            ("m", single(Tue)),
            ("x", single(Wed)),
            ("j", single(Thu)),
            ("v", single(Fri)),
            ("s", single(Sat)),
            ("d", single(Sun)),
            ("l-v", span(Mon, Fri)),
            ("s-d", span(Sat, Sun)),
            ("l-d", span(Mon, Sun)),
            ("l-s", span(Mon, Sat)),
            ("l, j", span(Mon, Thu)),
            ("l y j", DaySpec::Set(vec![Mon, Thu])),
        ],
        &["-", "a"],
        &[",", "y"],
    )
}

fn russian() -> VocabularyConfig {
    use Day::*;
    table(
        ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"].map(String::from),
        &[
            ("пн", single(Mon)),
            ("понедельник", single(Mon)),
            ("вт", single(Tue)),
            ("вторник", single(Tue)),
            ("ср", single(Wed)),
            ("среда", single(Wed)),
            ("чт", single(Thu)),
            ("четверг", single(Thu)),
            ("пт", single(Fri)),
            ("пятница", single(Fri)),
            ("сб", single(Sat)),
            ("суббота", single(Sat)),
            ("вс", single(Sun)),
            ("воскресенье", single(Sun)),
            ("будни", span(Mon, Fri)),
            ("выходные", span(Sat, Sun)),
            ("ежедневно", span(Mon, Sun)),
            ("без выходных", span(Mon, Sun)),
        ],
        &["-", "до", "по"],
        &[",", "и"],
    )
}
