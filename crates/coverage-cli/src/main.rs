use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coverage_engine::{
    build_items_with_options, present_items, CoverageOptions, DisplayRow, OutputItem, Severity,
    Shift, Window, DEFAULT_GAP_THRESHOLD_SECS,
};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(
    name = "coverage",
    version,
    about = "Print the day-by-day coverage of a shift schedule"
)]
struct Cli {
    /// Schedule document (JSON). Use - for stdin.
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Gaps must be strictly longer than this many seconds to be reported
    #[arg(
        long,
        default_value_t = DEFAULT_GAP_THRESHOLD_SECS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    gap_threshold_secs: i64,

    /// IANA timezone overriding the one in the document
    #[arg(long)]
    timezone: Option<String>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Indented, human-readable rows
    Text,
    /// The raw item sequence
    Json,
}

#[derive(Deserialize)]
struct ScheduleDocument {
    window: WindowInput,
    #[serde(default)]
    shifts: Vec<Shift>,
}

#[derive(Deserialize)]
struct WindowInput {
    start: String,
    end: String,
    timezone: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = read_input(&cli.input)?;
    let doc: ScheduleDocument =
        serde_json::from_str(&raw).context("Failed to parse schedule document")?;

    let timezone = cli.timezone.as_deref().unwrap_or(&doc.window.timezone);
    let window = Window::parse(&doc.window.start, &doc.window.end, timezone)?;
    let options = CoverageOptions {
        gap_threshold: chrono::Duration::try_seconds(cli.gap_threshold_secs)
            .context("Gap threshold out of range")?,
    };
    debug!(shifts = doc.shifts.len(), timezone, "schedule loaded");

    let items = build_items_with_options(&window, &doc.shifts, &options)?;
    info!(items = items.len(), "coverage computed");

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&items)?;
            writeln!(stdout, "{json}")?;
        }
        OutputFormat::Text => {
            let rows = present_items(&items, &window.timezone);
            for (item, row) in items.iter().zip(&rows) {
                writeln!(stdout, "{}", render_row(item, row))?;
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// One line of text output. Day headers sit flush left, everything else is
/// indented under them with a severity marker.
fn render_row(item: &OutputItem, row: &DisplayRow) -> String {
    if matches!(item, OutputItem::DayHeader { .. }) {
        return row.label.clone();
    }

    let marker = match row.severity {
        None => ' ',
        Some(Severity::Info) => '>',
        Some(Severity::Warning) => '!',
        Some(Severity::Critical) => 'x',
    };
    let mut line = format!("  {marker} {}", row.label);
    if let Some(subtext) = &row.subtext {
        line.push_str(&format!(" | {subtext}"));
    }
    if let Some(handle) = &row.remove_handle {
        line.push_str(&format!(" [remove: {handle}]"));
    }
    line
}
