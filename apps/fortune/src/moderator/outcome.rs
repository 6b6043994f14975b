use serde::Serialize;

use crate::domain::{PlayerId, PlayerRecord, PrizeSegment};

/// How a single spin ended for the player who took it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Score zeroed; the turn passed on.
    Bankrupt,
    /// Letter found; the same player spins again.
    Hit {
        letter: char,
        occurrences: usize,
        prize: i64,
    },
    /// Letter not in the phrase; the turn passed on.
    Miss { letter: char },
    /// No usable letter within the retry cap; the turn passed on.
    Forfeit { attempts: u8 },
}

impl TurnOutcome {
    /// Whether the same player keeps the turn.
    pub fn keeps_turn(&self) -> bool {
        matches!(self, TurnOutcome::Hit { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub segment: PrizeSegment,
    pub outcome: TurnOutcome,
}

/// Final result of a finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub phrase: String,
    /// Roster ordered by descending score.
    pub standings: Vec<PlayerRecord>,
    pub winners: Vec<PlayerId>,
    pub guessed_letters: Vec<char>,
    pub spins: usize,
}
