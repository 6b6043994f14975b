//! Headless game runner for computer-only seats.
//!
//! Each game is wired through the same `GameConfig` path the interactive
//! binary uses, with narration switched off and a spin cap so a table of
//! unlucky players cannot loop forever.

use fortune::{GameConfig, GameError, PlayerKind, SeatConfig};

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Final scores indexed by seat
    pub final_scores: Vec<i64>,
    /// Seats sharing the top score
    pub winners: Vec<usize>,
    /// Number of wheel spins the game took
    pub spins: usize,
    /// Distinct letters guessed, in order
    pub guessed_letters: Vec<char>,
    pub phrase: String,
}

/// Runs fully automated games for a fixed table of seats.
pub struct Simulator {
    seats: Vec<PlayerKind>,
    max_spins: usize,
}

impl Simulator {
    pub fn new(seats: Vec<PlayerKind>, max_spins: usize) -> Result<Self, SimulatorError> {
        if let Some(kind) = seats.iter().find(|k| k.is_human()) {
            return Err(SimulatorError::UnsupportedSeat(*kind));
        }
        Ok(Self { seats, max_spins })
    }

    pub fn seat_names(&self) -> Vec<String> {
        self.seats.iter().map(|k| k.to_string()).collect()
    }

    /// Play one game of `phrase`; the same seed replays the same game.
    pub fn simulate_game(&self, phrase: &str, game_seed: u64) -> Result<GameResult, SimulatorError> {
        let seats = self
            .seats
            .iter()
            .enumerate()
            .map(|(seat, kind)| SeatConfig::new(format!("Seat {seat}"), *kind))
            .collect();
        let mut config = GameConfig::new(phrase, seats);
        config.quiet = true;
        config.seed = Some(game_seed);
        config.max_spins = Some(self.max_spins);

        let mut moderator = config.build_moderator().map_err(SimulatorError::Setup)?;
        let summary = moderator.run_game().map_err(SimulatorError::Game)?;

        let state = moderator.state();
        Ok(GameResult {
            final_scores: state.players().iter().map(|p| p.score()).collect(),
            winners: summary.winners.iter().map(|id| id.slot()).collect(),
            spins: summary.spins,
            guessed_letters: summary.guessed_letters,
            phrase: summary.phrase,
        })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// Seat kind that needs a console
    UnsupportedSeat(PlayerKind),
    /// Configuration rejected before the game started
    Setup(GameError),
    /// Game aborted mid-play
    Game(GameError),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::UnsupportedSeat(kind) => {
                write!(f, "seat kind {kind} cannot be simulated")
            }
            SimulatorError::Setup(err) => write!(f, "Setup error: {err}"),
            SimulatorError::Game(err) => write!(f, "Game error: {err}"),
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::UnsupportedSeat(_) => None,
            SimulatorError::Setup(err) | SimulatorError::Game(err) => Some(err),
        }
    }
}
