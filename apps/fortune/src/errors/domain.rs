//! Domain-level error type used by the game engine and the moderator.
//!
//! Every variant is a caller-input violation rather than a system fault.
//! Only [`GameError::InvalidGuessShape`] and [`GameError::AlreadyGuessed`]
//! are recoverable; the moderator re-prompts the same player for those.
//! Everything else aborts the construction call or the running game.

use thiserror::Error;

use crate::domain::roster::PlayerId;
use crate::players::PolicyError;

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Phrase constructed from zero-length text.
    #[error("the secret phrase must not be empty")]
    EmptyPhrase,

    /// Phrase text contains the wildcard placeholder.
    #[error("the secret phrase must not contain the reserved character '{0}'")]
    ReservedCharacter(char),

    /// Phrase text holds a character no guess could ever reveal.
    #[error("the secret phrase must not contain {0:?}; no guess can reveal it")]
    UnrevealableCharacter(char),

    /// Guess candidate is not exactly one character.
    #[error("a guess must be exactly one character, got {0:?}")]
    InvalidGuessShape(String),

    /// Letter was already tried earlier in this game.
    #[error("letter '{0}' has already been guessed")]
    AlreadyGuessed(char),

    /// Wheel constructed with no segments.
    #[error("the prize wheel needs at least one segment")]
    EmptyWheel,

    /// Score mutation for a player outside the roster.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// Roster size outside the supported bounds.
    #[error("roster must hold between {min} and {max} players, got {actual}")]
    InvalidRosterSize {
        actual: usize,
        min: usize,
        max: usize,
    },

    /// Orchestrator given a policy list that does not line up with the roster.
    #[error("{seats} roster slots but {policies} guess policies")]
    RosterMismatch { seats: usize, policies: usize },

    /// A guess policy failed in a way that cannot be retried.
    #[error("player {player} could not guess: {source}")]
    Policy {
        player: PlayerId,
        #[source]
        source: PolicyError,
    },

    /// Safety cap on spins reached before the phrase was solved.
    #[error("game stopped after {0} spins without solving the phrase")]
    TurnLimitExceeded(usize),

    /// Turn requested after the phrase was already solved.
    #[error("the phrase is already solved")]
    GameFinished,

    /// Game configuration rejected before startup.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GameError {
    pub fn invalid_guess(candidate: impl Into<String>) -> Self {
        Self::InvalidGuessShape(candidate.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Whether the moderator may re-prompt the same player after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidGuessShape(_) | GameError::AlreadyGuessed(_)
        )
    }
}
