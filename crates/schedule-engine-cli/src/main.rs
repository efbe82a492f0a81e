//! `schedcheck` CLI — check class timetables for double-bookings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a new slot against the current timetable
//! schedcheck check -c candidate.json -e timetable.json
//!
//! # Re-check an edited slot (its own stale copy is skipped)
//! schedcheck check -c edited.json -e timetable.json --update
//!
//! # List every clash instead of the first one
//! curl -s $API/schedules | schedcheck check -c candidate.json -e - --all
//!
//! # Free slots of a room on Monday
//! schedcheck free -e timetable.json -d MONDAY --room R101 --from 08:00 --to 18:00
//!
//! # Calendar colors for labels
//! schedcheck color "Computer Science" Mathematics
//! ```
//!
//! `check` exits 0 when the slot is free and 2 when it clashes.

mod settings;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use schedule_engine::freebusy::{entries_for_room, entries_for_teacher, find_free_slots, DayWindow};
use schedule_engine::{
    check_conflict, color_for, find_all_conflicts, CheckMode, ConflictResult, DayOfWeek,
    ScheduleEntry,
};
use settings::CheckerConfig;
use std::io::{self, Read};
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for a candidate that clashes with the timetable.
const EXIT_CONFLICT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "schedcheck",
    version,
    about = "Class timetable conflict checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one candidate slot against a timetable
    Check {
        /// Candidate entry as a JSON object ("-" for stdin)
        #[arg(short, long)]
        candidate: String,
        /// Existing timetable as a JSON array ("-" for stdin)
        #[arg(short, long)]
        existing: String,
        /// The candidate replaces the timetable entry with the same id
        #[arg(long)]
        update: bool,
        /// Report every clashing entry instead of the first
        #[arg(long)]
        all: bool,
    },
    /// List free slots of a room or teacher on one day
    #[command(group(ArgGroup::new("resource").required(true).args(["room", "teacher"])))]
    Free {
        /// Existing timetable as a JSON array ("-" for stdin)
        #[arg(short, long)]
        existing: String,
        /// Day of week (MONDAY..SATURDAY, or Mon..Sat)
        #[arg(short, long)]
        day: DayOfWeek,
        /// Room id
        #[arg(long)]
        room: Option<String>,
        /// Teacher id
        #[arg(long)]
        teacher: Option<String>,
        /// Start of the bookable day, HH:MM (default from config: 07:00)
        #[arg(long)]
        from: Option<String>,
        /// End of the bookable day, HH:MM (default from config: 21:00)
        #[arg(long)]
        to: Option<String>,
        /// Hide slots shorter than this many minutes
        #[arg(long)]
        min: Option<u32>,
    },
    /// Print the calendar color of each label
    Color {
        /// Labels to color (subject, section, ...)
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            candidate,
            existing,
            update,
            all,
        } => {
            if candidate == "-" && existing == "-" {
                anyhow::bail!("Only one of --candidate and --existing can read from stdin");
            }
            let candidate: ScheduleEntry = parse_json(&candidate, "candidate")?;
            let existing: Vec<ScheduleEntry> = parse_json(&existing, "timetable")?;
            let mode = if update {
                CheckMode::Update
            } else {
                CheckMode::Create
            };
            debug!(entries = existing.len(), ?mode, "checking candidate");

            let reasons: Vec<String> = if all {
                find_all_conflicts(&candidate, &existing, mode)
                    .context("Failed to check candidate")?
                    .iter()
                    .map(|c| c.reason())
                    .collect()
            } else {
                match check_conflict(&candidate, &existing, mode)
                    .context("Failed to check candidate")?
                {
                    ConflictResult::NoConflict => Vec::new(),
                    ConflictResult::Conflict(c) => vec![c.reason()],
                }
            };

            if reasons.is_empty() {
                println!("OK: no conflict");
            } else {
                for reason in &reasons {
                    println!("{}", reason);
                }
                process::exit(EXIT_CONFLICT);
            }
        }
        Commands::Free {
            existing,
            day,
            room,
            teacher,
            from,
            to,
            min,
        } => {
            let cfg = CheckerConfig::load().context("Failed to load configuration")?;
            let window = DayWindow::parse(
                from.as_deref().unwrap_or(cfg.day_start.as_str()),
                to.as_deref().unwrap_or(cfg.day_end.as_str()),
            )
            .context("Invalid day window")?;
            let min = min.unwrap_or(cfg.min_slot_minutes);

            let existing: Vec<ScheduleEntry> = parse_json(&existing, "timetable")?;
            let bookings = match (&room, &teacher) {
                (Some(room), _) => entries_for_room(&existing, room),
                (None, Some(teacher)) => entries_for_teacher(&existing, teacher),
                (None, None) => unreachable!("clap requires --room or --teacher"),
            };

            let slots: Vec<_> = find_free_slots(&bookings, day, window)
                .context("Failed to compute free slots")?
                .into_iter()
                .filter(|slot| slot.duration_minutes >= min)
                .collect();

            if slots.is_empty() {
                println!("No free slots on {}", day);
            }
            for slot in slots {
                println!("{}-{} ({} min)", slot.start, slot.end, slot.duration_minutes);
            }
        }
        Commands::Color { labels } => {
            for label in labels {
                println!("{}\t{}", label, color_for(&label));
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &str, what: &str) -> Result<T> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {} JSON from {}", what, path))
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}
