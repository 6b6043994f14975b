//! Fortune Simulator CLI - batch games between computer players.
//!
//! Runs games entirely in memory with narration off, then prints per-seat
//! statistics and optionally writes one JSON line per game.

mod metrics;
mod output;
mod simulator;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use fortune::PlayerKind;
use metrics::{build_game_metrics, seat_stats};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

const DEFAULT_PHRASES: &[&str] = &[
    "TO BE OR NOT TO BE",
    "A PENNY SAVED IS A PENNY EARNED",
    "WHERE THERE'S SMOKE, THERE'S FIRE!",
    "ALL THAT GLITTERS IS NOT GOLD.",
    "BETTER LATE THAN NEVER",
];

#[derive(Parser)]
#[command(name = "fortune-simulator")]
#[command(about = "Batch simulator for computer players")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Phrase to play; repeat to rotate through several
    #[arg(short, long = "phrase")]
    phrases: Vec<String>,

    /// Player kind for each seat, in turn order (repeatable)
    #[arg(long = "seat", value_enum, default_values = ["frequency-en", "random"])]
    seats: Vec<PlayerKind>,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Abort a game after this many spins
    #[arg(long, default_value = "10000")]
    max_spins: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show the summary table
    #[arg(long)]
    show_output: bool,

    /// Write per-game metrics as JSON lines to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let phrases: Vec<String> = if args.phrases.is_empty() {
        DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect()
    } else {
        args.phrases.clone()
    };

    let simulator = Simulator::new(args.seats.clone(), args.max_spins)?;
    let seat_names = simulator.seat_names();
    info!(games = args.games, seats = ?seat_names, "starting simulator");

    let mut output_writer = args.output.as_deref().map(OutputWriter::create).transpose()?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(s) => s.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };
        let phrase = &phrases[(game_num as usize - 1) % phrases.len()];

        match simulator.simulate_game(phrase, game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                if let Some(writer) = output_writer.as_mut() {
                    let metrics =
                        build_game_metrics(game_num, game_seed, &seat_names, &result, duration_ms);
                    if let Err(e) = writer.write_game(&metrics) {
                        warn!("Failed to write metrics for game {}: {}", game_num, e);
                    }
                }
                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?} spins={}",
                        game_num, result.final_scores, result.spins
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    if let Some(writer) = output_writer {
        let path = writer.finish()?;
        info!("Detailed results written to: {}", path.display());
    }

    if args.show_output {
        print_summary(&results, &seat_names, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    seat_names: &[String],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );
    let avg_spins =
        results.iter().map(|r| r.spins as f64).sum::<f64>() / results.len() as f64;
    println!("Average spins per game: {:.1}", avg_spins);

    println!("\n=== Results by Seat ===");
    for (seat, stats) in seat_stats(results, seat_names.len()).iter().enumerate() {
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            seat_names[seat],
            stats.average(),
            stats.min_score.unwrap_or(0),
            stats.max_score.unwrap_or(0),
            stats.wins,
            stats.win_rate()
        );
    }
}
