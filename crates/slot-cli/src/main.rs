//! `slots` CLI: check a meeting slot or list free slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is this slot free for one attendee? (stdin → stdout)
//! echo '{"availability":{...},"events":[...],"slot":{...}}' | slots check
//!
//! # Same, and say why not
//! slots check -i request.json --explain
//!
//! # Only look at availability windows, or ignore buffers
//! slots check -i request.json --mode window
//! slots check -i request.json --mode events
//!
//! # Every 30-minute slot all attendees can make
//! slots list -i meeting.json
//!
//! # 60-minute slots, first three only, written to a file
//! slots list -i meeting.json --duration 60 --limit 3 -o slots.json
//! ```
//!
//! Logs go to stderr. `--debug` turns on debug output; otherwise `RUST_LOG`
//! is honored and the default level is `warn`.

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use slot_engine::feasibility::check_slot;
use slot_engine::{Attendee, Interval, Rejection, Slot, DEFAULT_SLOT_MINUTES};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find meeting slots that fit everyone's availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a single slot is free for one attendee
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Which constraints to apply
        #[arg(long, value_enum, default_value_t = CheckMode::Buffer)]
        mode: CheckMode,
        /// Include the reason a slot was rejected
        #[arg(long)]
        explain: bool,
    },
    /// List every slot in a range that all attendees can make
    List {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Slot length in minutes (overrides `durationM` in the request)
        #[arg(long)]
        duration: Option<u32>,
        /// Stop after this many slots
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CheckMode {
    /// Availability windows only
    Window,
    /// Windows and events, ignoring buffers
    Events,
    /// Windows and buffered events
    Buffer,
}

/// `slots check` input: one attendee plus the slot to test.
#[derive(Deserialize)]
struct CheckRequest {
    #[serde(flatten)]
    attendee: Attendee,
    slot: Slot,
}

#[derive(Serialize)]
struct CheckResponse {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

/// `slots list` input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListRequest {
    attendees: Vec<Attendee>,
    range: [DateTime<Utc>; 2],
    duration_m: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Check {
            input,
            mode,
            explain,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: CheckRequest =
                serde_json::from_str(&raw).context("Failed to parse check request")?;
            request
                .attendee
                .validate()
                .context("Invalid attendee configuration")?;
            request.slot.validate().context("Invalid slot")?;

            let response = run_check(&request, mode, explain);
            info!(available = response.available, "slot checked");
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::List {
            input,
            output,
            duration,
            limit,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: ListRequest =
                serde_json::from_str(&raw).context("Failed to parse list request")?;
            for (i, attendee) in request.attendees.iter().enumerate() {
                attendee
                    .validate()
                    .with_context(|| format!("Invalid configuration for attendee {}", i))?;
            }
            let duration_m = duration
                .or(request.duration_m)
                .unwrap_or(DEFAULT_SLOT_MINUTES);
            let range = Interval::new(request.range[0], request.range[1])
                .context("Invalid search range")?;

            let slots = run_list(&request.attendees, range, duration_m, limit)?;
            info!(count = slots.len(), "slots listed");
            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_check(request: &CheckRequest, mode: CheckMode, explain: bool) -> CheckResponse {
    let availability = &request.attendee.availability;
    let events = &request.attendee.events;
    let slot = &request.slot;

    let available = match mode {
        CheckMode::Window => slot_engine::is_slot_available(availability, slot),
        CheckMode::Events => slot_engine::is_slot_available_with_events(availability, events, slot),
        CheckMode::Buffer => slot_engine::is_slot_available_with_buffer(availability, events, slot),
    };

    // The rejection reason always reflects the full buffered check.
    let rejection = if explain && !available {
        check_slot(availability, events, slot).err()
    } else {
        None
    };

    CheckResponse {
        available,
        rejection,
    }
}

fn run_list(
    attendees: &[Attendee],
    range: Interval,
    duration_m: u32,
    limit: Option<usize>,
) -> Result<Vec<Slot>> {
    debug!(attendees = attendees.len(), duration_m, ?limit, "listing slots");
    let limit = limit.unwrap_or(usize::MAX);

    let slots: Vec<Slot> = match attendees {
        [single] => slot_engine::list_available_slots(
            &single.availability,
            &single.events,
            range,
            duration_m,
        )
        .context("Failed to list available slots")?
        .take(limit)
        .collect(),
        _ => slot_engine::list_common_slots(attendees, range, duration_m)
            .context("Failed to list common slots")?
            .take(limit)
            .collect(),
    };

    Ok(slots)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
