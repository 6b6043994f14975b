//! Startup parameters for a single game and the wiring that turns them into
//! a ready-to-run [`Moderator`].

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{roster_bounds, DEFAULT_GUESS_ATTEMPTS, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{default_wheel, GameState, PrizeWheel, SecretPhrase};
use crate::errors::domain::GameError;
use crate::moderator::{narrator_for, Moderator};
use crate::players::{create_player, GuessPolicy, HumanPlayer, PlayerConfig};

/// Which policy plays a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    FrequencyEn,
    FrequencyCz,
    Random,
}

impl PlayerKind {
    /// Registry name for computer seats; `None` for humans.
    pub fn registry_name(self) -> Option<&'static str> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::FrequencyEn => Some("frequency-en"),
            PlayerKind::FrequencyCz => Some("frequency-cz"),
            PlayerKind::Random => Some("random"),
        }
    }

    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }
}

impl Display for PlayerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.registry_name().unwrap_or("human"))
    }
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Letter table replacing a frequency player's built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            seed: None,
            alphabet: None,
        }
    }
}

/// Parses `NAME` or `NAME:KIND`; a bare name is a human seat.
impl FromStr for SeatConfig {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, kind) = match s.rsplit_once(':') {
            Some((name, kind)) => {
                let kind = <PlayerKind as ValueEnum>::from_str(kind.trim(), true)
                    .map_err(|_| GameError::config(format!("unknown player kind {kind:?}")))?;
                (name.trim(), kind)
            }
            None => (s.trim(), PlayerKind::Human),
        };
        if name.is_empty() {
            return Err(GameError::config("seat name must not be empty"));
        }
        Ok(Self::new(name, kind))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub phrase: String,
    pub seats: Vec<SeatConfig>,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default = "default_attempts")]
    pub max_guess_attempts: u8,
    #[serde(default)]
    pub max_spins: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_attempts() -> u8 {
    DEFAULT_GUESS_ATTEMPTS
}

impl GameConfig {
    pub fn new(phrase: impl Into<String>, seats: Vec<SeatConfig>) -> Self {
        Self {
            phrase: phrase.into(),
            seats,
            quiet: false,
            max_guess_attempts: DEFAULT_GUESS_ATTEMPTS,
            max_spins: None,
            seed: None,
        }
    }

    /// Parse a game description from JSON; omitted fields take defaults.
    ///
    /// ```json
    /// {"phrase": "TO BE", "seats": [{"name": "Bot", "kind": "frequency-en", "alphabet": "EOT"}]}
    /// ```
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        serde_json::from_str(text).map_err(|e| GameError::config(format!("invalid game file: {e}")))
    }

    /// Reject configurations that cannot start a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.phrase.is_empty() {
            return Err(GameError::EmptyPhrase);
        }
        if !roster_bounds().contains(&self.seats.len()) {
            return Err(GameError::InvalidRosterSize {
                actual: self.seats.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.max_guess_attempts == 0 {
            return Err(GameError::config("max_guess_attempts must be at least 1"));
        }
        if self.max_spins == Some(0) {
            return Err(GameError::config("max_spins must be at least 1"));
        }
        Ok(())
    }

    /// Build the game state for these seats on the given wheel.
    ///
    /// One seat gives a single-player game, more give a rotating one.
    pub fn build_state(&self, wheel: PrizeWheel) -> Result<GameState, GameError> {
        self.validate()?;
        let phrase = SecretPhrase::new(&self.phrase)?;
        let state = match self.seats.as_slice() {
            [only] => GameState::single_player(phrase, wheel, only.name.clone()),
            seats => GameState::multiplayer(phrase, wheel, seats.iter().map(|s| s.name.clone()))?,
        };
        Ok(match self.seed {
            Some(seed) => state.with_seed(seed),
            None => state,
        })
    }

    /// Policies for every seat, in roster order; humans read from stdin.
    pub fn build_policies(&self) -> Result<Vec<Box<dyn GuessPolicy>>, GameError> {
        self.seats
            .iter()
            .enumerate()
            .map(|(slot, seat)| self.policy_for(slot, seat))
            .collect()
    }

    fn policy_for(&self, slot: usize, seat: &SeatConfig) -> Result<Box<dyn GuessPolicy>, GameError> {
        let Some(name) = seat.kind.registry_name() else {
            return Ok(Box::new(HumanPlayer::stdio(seat.name.clone())));
        };
        // derive distinct per-seat seeds from the game seed
        let seed = seat
            .seed
            .or_else(|| self.seed.map(|s| s.wrapping_add(slot as u64 + 1)));
        let config = PlayerConfig::with_seed(seed).with_alphabet(seat.alphabet.clone());
        create_player(name, &config)
            .ok_or_else(|| GameError::config(format!("player kind {name} is not registered")))
    }

    /// Fully wired moderator on the default wheel.
    pub fn build_moderator(&self) -> Result<Moderator, GameError> {
        let state = self.build_state(default_wheel())?;
        let policies = self.build_policies()?;
        Ok(Moderator::new(state, policies)?
            .with_narrator(narrator_for(self.quiet))
            .with_max_guess_attempts(self.max_guess_attempts)
            .with_max_spins(self.max_spins))
    }
}
