//! Standings CLI - compute player and pair standings from exported games.
//!
//! Reads a JSON document with a roster and its games, aggregates the
//! finished games and prints the standings as a table, JSON or CSV.

mod input;
mod output;
mod types;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use input::StandingsInput;
use league::{compute_competition_results_with, MatchRules};
use tracing::{debug, info};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Compute domino league standings from a roster and its games")]
struct Args {
    /// Input JSON file, or `-` for stdin
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Points needed to win a game (overrides LEAGUE_TARGET_POINTS)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    target_points: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; logs go to stderr so stdout stays parseable.
    let filter = if args.verbose { "debug" } else { "warn" };
    if args.json_logs {
        league::telemetry::init_tracing(filter);
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut rules = MatchRules::from_env()?;
    if let Some(target) = args.target_points {
        rules = rules.with_target_points(target);
    }
    debug!(?rules, "match rules");

    let (roster, games) = StandingsInput::load(&args.input)?.into_domain();
    info!(
        input = %args.input.display(),
        players = roster.len(),
        games = games.len(),
        "loaded standings input"
    );

    let results = compute_competition_results_with(&roster, &games, &rules);
    let rendered = output::render(&results, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output = %path.display(), "standings written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
