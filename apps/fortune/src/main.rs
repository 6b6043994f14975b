//! Console wheel-of-fortune game.
//!
//! ```bash
//! fortune --phrase "TO BE OR NOT TO BE" --seat Karel --seat Bot:frequency-en
//! fortune --config game.json --quiet
//! ```

use std::path::PathBuf;

use clap::Parser;
use fortune::domain::rules::DEFAULT_GUESS_ATTEMPTS;
use fortune::telemetry::init_tracing;
use fortune::{GameConfig, GameError, SeatConfig};

#[derive(Parser)]
#[command(name = "fortune")]
#[command(about = "Guess the hidden phrase one letter at a time")]
struct Args {
    /// Phrase to guess
    #[arg(short, long, default_value = "TO BE OR NOT TO BE")]
    phrase: String,

    /// Seat as NAME or NAME:KIND (human, frequency-en, frequency-cz, random); repeat for more players
    #[arg(short, long = "seat", default_value = "Player")]
    seats: Vec<SeatConfig>,

    /// Read phrase, seats and limits from a JSON game file
    #[arg(long, conflicts_with_all = ["phrase", "seats"])]
    config: Option<PathBuf>,

    /// Suppress narration
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed for the wheel and computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Attempts a player gets per spin before losing the turn
    #[arg(long, default_value_t = DEFAULT_GUESS_ATTEMPTS)]
    max_attempts: u8,

    /// Abort the game after this many spins
    #[arg(long)]
    max_spins: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Cannot read the game file: {e}");
            std::process::exit(2);
        }
    };

    let mut moderator = match config.build_moderator() {
        Ok(moderator) => moderator,
        Err(e) => {
            eprintln!("❌ Cannot start the game: {e}");
            std::process::exit(2);
        }
    };

    match moderator.run_game() {
        Ok(summary) => {
            if config.quiet {
                for record in &summary.standings {
                    println!("{}\t{}", record.name(), record.score());
                }
            }
            Ok(())
        }
        Err(GameError::Policy { player, source }) => {
            eprintln!("Game abandoned: {player} stopped playing ({source})");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Game file settings, with command-line flags layered on top.
fn load_config(args: Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let Some(path) = args.config else {
        return Ok(GameConfig {
            phrase: args.phrase,
            seats: args.seats,
            quiet: args.quiet,
            max_guess_attempts: args.max_attempts,
            max_spins: args.max_spins,
            seed: args.seed,
        });
    };
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config = GameConfig::from_json(&text)?;
    config.quiet |= args.quiet;
    config.seed = args.seed.or(config.seed);
    config.max_spins = args.max_spins.or(config.max_spins);
    Ok(config)
}
