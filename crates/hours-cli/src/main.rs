//! `hours` CLI: normalize opening hours from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize text fragments (stdin → stdout)
//! echo '[{"day":"L-V","hours":"9:00 a 19:00"}]' | hours normalize --locale es-codes
//!
//! # Normalize numeric records, keeping only "default" hours, Russian labels
//! hours normalize -i working_hours.json --locale ru
//!
//! # Cut schedule prose into fragments
//! echo 'Lunes a viernes 8:00 am - 6:00 pm' | hours split
//!
//! # Build a location record from a labeled text block
//! hours extract -i block.txt --name "Tienda Centro" --locale es
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for fragment-level detail.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hours_engine::adapters::numeric::{self, NumericRecord};
use hours_engine::adapters::text::split_schedule_text;
use hours_engine::extract::{extract_fields, FieldLabels};
use hours_engine::{
    normalize_numeric, normalize_text, ClosedDays, DayVocabulary, FormatOptions, FragmentError,
    Locale, LocationRecord, Normalized, RawFragment,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hours",
    version,
    about = "Normalize scraped opening hours into a canonical weekly schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every accepted and rejected fragment to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a JSON array of text or numeric fragments
    Normalize {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        vocabulary: VocabularyArgs,
        /// Schedule type to keep from numeric records
        #[arg(long, default_value = numeric::DEFAULT_KIND)]
        kind: String,
        /// Fail when any fragment is rejected
        #[arg(long)]
        strict: bool,
    },
    /// Split schedule prose into text fragments
    Split {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Build a location record from a labeled text block (one fragment per line)
    Extract {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        vocabulary: VocabularyArgs,
        /// Location name for the record
        #[arg(long)]
        name: String,
        /// Coordinates as "lat,lon"
        #[arg(long, value_parser = parse_latlon, allow_hyphen_values = true)]
        latlon: Option<[f64; 2]>,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct VocabularyArgs {
    /// Day vocabulary preset: en, es, es-codes, ru (repeat to merge; first wins)
    #[arg(long = "locale", default_value = "en")]
    locales: Vec<Locale>,
    /// JSON vocabulary file; overrides --locale
    #[arg(long)]
    vocabulary: Option<PathBuf>,
    /// Emit closed day runs with this label instead of omitting them
    #[arg(long)]
    closed_label: Option<String>,
}

impl VocabularyArgs {
    fn load(&self) -> Result<DayVocabulary> {
        match &self.vocabulary {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read vocabulary: {}", path.display()))?;
                DayVocabulary::from_json(&json)
                    .with_context(|| format!("Invalid vocabulary: {}", path.display()))
            }
            None => DayVocabulary::merged(&self.locales).context("Failed to build vocabulary"),
        }
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            closed: match &self.closed_label {
                Some(label) => ClosedDays::Label(label.clone()),
                None => ClosedDays::Omit,
            },
        }
    }
}

/// Either fragment shape; numeric records are tried first since text
/// fragments never carry `from`/`to`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FragmentBatch {
    Numeric(Vec<NumericRecord>),
    Text(Vec<RawFragment>),
}

#[derive(Serialize)]
struct NormalizeOutput {
    working_hours: Vec<String>,
    errors: Vec<FragmentErrorDto>,
}

#[derive(Serialize)]
struct FragmentErrorDto {
    index: usize,
    input: String,
    kind: String,
    message: String,
}

impl From<&FragmentError> for FragmentErrorDto {
    fn from(e: &FragmentError) -> Self {
        Self {
            index: e.index,
            input: e.input.clone(),
            kind: format!("{:?}", e.kind()),
            message: e.error.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Normalize {
            io,
            vocabulary,
            kind,
            strict,
        } => {
            let vocab = vocabulary.load()?;
            let raw = read_input(io.input.as_ref())?;
            let batch: FragmentBatch =
                serde_json::from_str(&raw).context("Failed to parse fragments JSON")?;

            let normalized = match batch {
                FragmentBatch::Numeric(records) => {
                    normalize_numeric(&numeric::fragments_from_records(&records, &kind))
                }
                FragmentBatch::Text(fragments) => normalize_text(&fragments, &vocab),
            };
            let output = render(&normalized, &vocab, &vocabulary.format_options());
            write_output(io.output.as_ref(), &serde_json::to_string_pretty(&output)?)?;

            if strict && normalized.has_errors() {
                anyhow::bail!("{} fragment(s) rejected", normalized.errors.len());
            }
        }
        Commands::Split { io } => {
            let text = read_input(io.input.as_ref())?;
            let fragments = split_schedule_text(&text);
            info!(fragments = fragments.len(), "split schedule text");
            write_output(io.output.as_ref(), &serde_json::to_string_pretty(&fragments)?)?;
        }
        Commands::Extract {
            io,
            vocabulary,
            name,
            latlon,
        } => {
            let vocab = vocabulary.load()?;
            let text = read_input(io.input.as_ref())?;
            let lines: Vec<&str> = text.lines().collect();
            let fields = extract_fields(&FieldLabels::default(), &lines);
            if !fields.is_complete() {
                tracing::warn!(?fields, "location block is missing fields");
            }

            let (mut record, normalized) =
                LocationRecord::from_fields(name, fields, &vocab, &vocabulary.format_options());
            record.latlon = latlon;
            for error in &normalized.errors {
                tracing::warn!(index = error.index, input = %error.input, error = %error.error, "schedule fragment rejected");
            }
            write_output(io.output.as_ref(), &serde_json::to_string_pretty(&record)?)?;
        }
    }

    Ok(())
}

fn render(normalized: &Normalized, vocab: &DayVocabulary, options: &FormatOptions) -> NormalizeOutput {
    NormalizeOutput {
        working_hours: normalized
            .entries(vocab, options)
            .iter()
            .map(ToString::to_string)
            .collect(),
        errors: normalized.errors.iter().map(FragmentErrorDto::from).collect(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse `"lat,lon"` into a coordinate pair.
fn parse_latlon(raw: &str) -> Result<[f64; 2]> {
    let (lat, lon) = raw
        .split_once(',')
        .with_context(|| format!("expected 'lat,lon', got '{}'", raw))?;
    let lat: f64 = lat.trim().parse().with_context(|| format!("bad latitude '{}'", lat))?;
    let lon: f64 = lon.trim().parse().with_context(|| format!("bad longitude '{}'", lon))?;
    Ok([lat, lon])
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
