use std::path::PathBuf;

use anyhow::{Context, Result};
use business_hours::{Calendar, CalendarConfig};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "bizhours", version, about = "Business-hours working-time queries and arithmetic")]
struct Cli {
    /// Calendar configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use this UTC offset (minutes east) instead of resolving the configured timezone
    #[arg(long, global = true, allow_negative_numbers = true)]
    utc_offset: Option<i32>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an instant: holiday, working day, working time
    Check { instant: String },
    /// First working day after a date
    NextDay { date: String },
    /// Last working day before a date
    PrevDay { date: String },
    /// The instant itself if working, else the next working instant
    Next { instant: String },
    /// The instant itself if working, else the previous working instant
    Prev { instant: String },
    /// Seconds until the end of the current window
    Remaining { instant: String },
    /// Seconds since the start of the current window
    Elapsed { instant: String },
    /// Add working seconds to an instant
    Add {
        instant: String,
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Subtract working seconds from an instant
    Sub {
        instant: String,
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Working seconds between two instants (negative if end < start)
    Diff { start: String, end: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let calendar = load_calendar(&cli)?;
    let output = run(&calendar, &cli.command)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_calendar(cli: &Cli) -> Result<Calendar> {
    let path = cli
        .config
        .as_ref()
        .context("a calendar configuration is required (--config <FILE>)")?;
    let config = CalendarConfig::from_path(path)?;
    debug!(path = %path.display(), "loaded calendar configuration");

    let calendar = match cli.utc_offset {
        Some(minutes) => Calendar::with_offset_minutes(&config, minutes),
        None => Calendar::new(&config),
    }
    .with_context(|| format!("invalid calendar in {}", path.display()))?;
    Ok(calendar)
}

fn run(calendar: &Calendar, command: &Command) -> Result<Value> {
    let output = match command {
        Command::Check { instant } => {
            let t = parse_instant(calendar, instant)?;
            json!({
                "instant": format_instant(t),
                "is_holiday": calendar.is_holiday(t.date()),
                "is_working_day": calendar.is_working_day(t.date()),
                "is_working_time": calendar.is_working_time(t),
                "remaining_seconds": calendar.remaining_working_time(t),
                "elapsed_seconds": calendar.elapsed_working_time(t),
            })
        }
        Command::NextDay { date } => {
            let next = calendar.next_working_day(parse_date(date)?)?;
            json!({ "date": next.format(DATE_FORMAT).to_string() })
        }
        Command::PrevDay { date } => {
            let previous = calendar.previous_working_day(parse_date(date)?)?;
            json!({ "date": previous.format(DATE_FORMAT).to_string() })
        }
        Command::Next { instant } => {
            let t = calendar.next_working_time(parse_instant(calendar, instant)?)?;
            json!({ "instant": format_instant(t) })
        }
        Command::Prev { instant } => {
            let t = calendar.previous_working_time(parse_instant(calendar, instant)?)?;
            json!({ "instant": format_instant(t) })
        }
        Command::Remaining { instant } => {
            let t = parse_instant(calendar, instant)?;
            json!({ "seconds": calendar.remaining_working_time(t) })
        }
        Command::Elapsed { instant } => {
            let t = parse_instant(calendar, instant)?;
            json!({ "seconds": calendar.elapsed_working_time(t) })
        }
        Command::Add { instant, seconds } => {
            let t = calendar.add_time(parse_instant(calendar, instant)?, *seconds)?;
            json!({ "instant": format_instant(t) })
        }
        Command::Sub { instant, seconds } => {
            let t = calendar.subtract_time(parse_instant(calendar, instant)?, *seconds)?;
            json!({ "instant": format_instant(t) })
        }
        Command::Diff { start, end } => {
            let seconds = calendar.diff(
                parse_instant(calendar, start)?,
                parse_instant(calendar, end)?,
            )?;
            json!({ "seconds": seconds })
        }
    };
    Ok(output)
}

/// Parse local wall-clock (`2024-03-11T10:00[:00]`) or RFC 3339, converting
/// the latter into the calendar's fixed offset.
fn parse_instant(calendar: &Calendar, s: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(calendar.to_local(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(s, INSTANT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .with_context(|| {
            format!("invalid instant '{s}': expected YYYY-MM-DDTHH:MM[:SS] or RFC 3339")
        })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("invalid date '{s}': expected YYYY-MM-DD"))
}

fn format_instant(t: NaiveDateTime) -> String {
    t.format(INSTANT_FORMAT).to_string()
}
