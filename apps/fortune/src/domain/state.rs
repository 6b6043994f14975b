use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::letter::same_letter;
use crate::domain::phrase::SecretPhrase;
use crate::domain::roster::{PlayerId, PlayerRecord, Roster};
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::wheel::{PrizeSegment, PrizeWheel};
use crate::errors::domain::GameError;

/// Rule for which roster slot becomes current when a turn ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrder {
    /// Multiplayer: slots take turns in roster order, wrapping to 0.
    Rotating { roster_size: usize },
    /// Single player: the only slot stays current.
    Fixed,
}

impl TurnOrder {
    /// Slot that follows `current` under this policy.
    pub fn next(self, current: usize) -> usize {
        match self {
            TurnOrder::Rotating { roster_size } => (current + 1) % roster_size,
            TurnOrder::Fixed => current,
        }
    }
}

/// Entire game container: phrase, wheel, roster, history and turn pointer.
///
/// Scores change only through the scoring methods here, and the turn
/// pointer only through [`GameState::advance_turn`].
#[derive(Debug, Clone)]
pub struct GameState {
    phrase: SecretPhrase,
    wheel: PrizeWheel,
    roster: Roster,
    guessed: Vec<char>,
    current: usize,
    order: TurnOrder,
    rng: StdRng,
}

impl GameState {
    /// Game with a rotating turn order over `names` (1 to 5 players).
    pub fn multiplayer<I, S>(
        phrase: SecretPhrase,
        wheel: PrizeWheel,
        names: I,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roster = Roster::new(names);
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
            return Err(GameError::InvalidRosterSize {
                actual: roster.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        let order = TurnOrder::Rotating {
            roster_size: roster.len(),
        };
        Ok(Self::build(phrase, wheel, roster, order))
    }

    /// Game with exactly one player who takes every turn.
    pub fn single_player(phrase: SecretPhrase, wheel: PrizeWheel, name: impl Into<String>) -> Self {
        Self::build(phrase, wheel, Roster::new([name.into()]), TurnOrder::Fixed)
    }

    fn build(phrase: SecretPhrase, wheel: PrizeWheel, roster: Roster, order: TurnOrder) -> Self {
        Self {
            phrase,
            wheel,
            roster,
            guessed: Vec::new(),
            current: 0,
            order,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reseed the wheel's random source for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn phrase(&self) -> &SecretPhrase {
        &self.phrase
    }

    pub fn wheel(&self) -> &PrizeWheel {
        &self.wheel
    }

    pub fn turn_order(&self) -> TurnOrder {
        self.order
    }

    pub fn is_single_player(&self) -> bool {
        self.order == TurnOrder::Fixed
    }

    pub fn players(&self) -> &[PlayerRecord] {
        self.roster.records()
    }

    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    pub fn player(&self, id: PlayerId) -> Result<&PlayerRecord, GameError> {
        self.roster.get(id)
    }

    pub fn score_of(&self, id: PlayerId) -> Result<i64, GameError> {
        self.roster.get(id).map(PlayerRecord::score)
    }

    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current)
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    /// Whether `c` (or an accent/case variant of it) was tried already.
    pub fn has_guessed(&self, c: char) -> bool {
        self.guessed.iter().any(|g| same_letter(*g, c))
    }

    pub fn is_finished(&self) -> bool {
        self.phrase.is_finished()
    }

    pub fn spin_wheel(&mut self) -> PrizeSegment {
        self.wheel.spin(&mut self.rng).clone()
    }

    /// Resolve a guess against the phrase; see [`SecretPhrase::guess_char`].
    pub fn reveal(&mut self, c: char) -> usize {
        self.phrase.guess_char(c)
    }

    pub fn record_score(&mut self, player: PlayerId, score: i64) -> Result<(), GameError> {
        self.roster.set_score(player, score)
    }

    /// Add `delta` to the player's score and return the new total.
    pub fn adjust_score(&mut self, player: PlayerId, delta: i64) -> Result<i64, GameError> {
        let score = self.score_of(player)? + delta;
        self.record_score(player, score)?;
        Ok(score)
    }

    pub fn bankrupt(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.record_score(player, 0)
    }

    /// Append to the guess history. No deduplication happens here.
    pub fn record_guess(&mut self, letter: char) {
        self.guessed.push(letter);
    }

    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.order.next(self.current);
        self.current_player()
    }

    /// Roster sorted by descending score; ties keep roster order.
    pub fn standings(&self) -> Vec<PlayerRecord> {
        let mut records = self.roster.records().to_vec();
        records.sort_by(|a, b| b.score().cmp(&a.score()));
        records
    }

    /// Every player holding the top score.
    pub fn winners(&self) -> Vec<PlayerId> {
        let top = self.roster.records().iter().map(PlayerRecord::score).max();
        self.roster
            .records()
            .iter()
            .filter(|r| Some(r.score()) == top)
            .map(PlayerRecord::id)
            .collect()
    }
}
