use tracing::{debug, info, warn};

use crate::domain::letter::single_char;
use crate::domain::rules::DEFAULT_GUESS_ATTEMPTS;
use crate::domain::{GameState, PlayerId, PrizeSegment};
use crate::errors::domain::GameError;
use crate::moderator::narration::{Narrator, QuietNarrator};
use crate::moderator::outcome::{GameSummary, TurnOutcome, TurnReport};
use crate::players::GuessPolicy;

/// Steps of a single spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    SpinPending,
    Bankrupt(PrizeSegment),
    AwaitGuess(PrizeSegment),
}

/// Runs a game: spins for the current player, asks their policy for a
/// letter, applies the score and decides who plays next.
///
/// Policies are indexed by roster slot, so `policies[i]` plays for
/// `PlayerId::new(i)`.
pub struct Moderator {
    state: GameState,
    policies: Vec<Box<dyn GuessPolicy>>,
    narrator: Box<dyn Narrator>,
    max_guess_attempts: u8,
    max_spins: Option<usize>,
    spins: usize,
}

impl Moderator {
    pub fn new(state: GameState, policies: Vec<Box<dyn GuessPolicy>>) -> Result<Self, GameError> {
        if policies.len() != state.player_count() {
            return Err(GameError::RosterMismatch {
                seats: state.player_count(),
                policies: policies.len(),
            });
        }
        Ok(Self {
            state,
            policies,
            narrator: Box::new(QuietNarrator),
            max_guess_attempts: DEFAULT_GUESS_ATTEMPTS,
            max_spins: None,
            spins: 0,
        })
    }

    pub fn with_narrator(mut self, narrator: Box<dyn Narrator>) -> Self {
        self.narrator = narrator;
        self
    }

    /// Attempts per spin before the turn is forfeited. Clamped to at least 1.
    pub fn with_max_guess_attempts(mut self, attempts: u8) -> Self {
        self.max_guess_attempts = attempts.max(1);
        self
    }

    /// Stop the game with an error once this many spins have happened.
    pub fn with_max_spins(mut self, max_spins: Option<usize>) -> Self {
        self.max_spins = max_spins;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn spins(&self) -> usize {
        self.spins
    }

    /// Play until the phrase is fully revealed.
    pub fn run_game(&mut self) -> Result<GameSummary, GameError> {
        info!(
            players = self.state.player_count(),
            single_player = self.state.is_single_player(),
            length = self.state.phrase().len(),
            "game started"
        );
        self.say(&format!(
            "Let's play! The phrase has {} characters: {}",
            self.state.phrase().len(),
            self.state.phrase().masked_view()
        ));

        while !self.state.is_finished() {
            if let Some(limit) = self.max_spins {
                if self.spins >= limit {
                    warn!(limit, "spin limit reached");
                    return Err(GameError::TurnLimitExceeded(limit));
                }
            }
            self.play_turn()?;
        }

        let summary = self.summary();
        info!(spins = summary.spins, winners = ?summary.winners, "game finished");
        self.announce(&summary);
        Ok(summary)
    }

    /// One spin for the current player.
    ///
    /// After a hit the same player stays current; every other outcome
    /// advances the turn. Fails with [`GameError::GameFinished`] once the
    /// phrase is solved, without spinning.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.state.is_finished() {
            return Err(GameError::GameFinished);
        }
        let player = self.state.current_player();
        let name = self.state.player(player)?.name().to_string();
        let mut phase = TurnPhase::SpinPending;

        loop {
            phase = match phase {
                TurnPhase::SpinPending => {
                    let segment = self.state.spin_wheel();
                    self.spins += 1;
                    debug!(%player, segment = %segment, "spin");
                    if segment.is_bankrupt() {
                        TurnPhase::Bankrupt(segment)
                    } else {
                        TurnPhase::AwaitGuess(segment)
                    }
                }
                TurnPhase::Bankrupt(segment) => {
                    self.say(&format!(
                        "Bad luck, {name} landed on {segment} and loses every point."
                    ));
                    self.state.bankrupt(player)?;
                    self.state.advance_turn();
                    return Ok(TurnReport {
                        player,
                        segment,
                        outcome: TurnOutcome::Bankrupt,
                    });
                }
                TurnPhase::AwaitGuess(segment) => {
                    self.say(&format!(
                        "{name} landed on {segment}. Which letter will it be?"
                    ));
                    let outcome = match self.ask_for_letter(player)? {
                        Some(letter) => self.resolve_guess(player, &name, &segment, letter)?,
                        None => {
                            warn!(%player, attempts = self.max_guess_attempts, "turn forfeited");
                            self.say(&format!(
                                "{name} did not come up with a usable letter and loses the turn."
                            ));
                            self.state.advance_turn();
                            TurnOutcome::Forfeit {
                                attempts: self.max_guess_attempts,
                            }
                        }
                    };
                    return Ok(TurnReport {
                        player,
                        segment,
                        outcome,
                    });
                }
            };
        }
    }

    /// Ask the player's policy until it yields a single untried letter.
    ///
    /// Returns `None` once the retry cap is spent.
    fn ask_for_letter(&mut self, player: PlayerId) -> Result<Option<char>, GameError> {
        let masked = self.state.phrase().masked_view();
        for attempt in 1..=self.max_guess_attempts {
            let policy = self
                .policies
                .get_mut(player.slot())
                .ok_or(GameError::UnknownPlayer(player))?;
            let raw = policy
                .guess_letter(self.state.guessed_letters(), &masked)
                .map_err(|source| GameError::Policy { player, source })?;

            match self.validate_guess(&raw) {
                Ok(letter) => return Ok(Some(letter)),
                Err(err) if err.is_recoverable() => {
                    debug!(%player, attempt, candidate = %raw, error = %err, "guess rejected");
                    self.say(&format!("That will not do: {err}. Try again."));
                }
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }

    fn validate_guess(&self, raw: &str) -> Result<char, GameError> {
        let letter = single_char(raw)?;
        if self.state.has_guessed(letter) {
            return Err(GameError::AlreadyGuessed(letter));
        }
        Ok(letter)
    }

    fn resolve_guess(
        &mut self,
        player: PlayerId,
        name: &str,
        segment: &PrizeSegment,
        letter: char,
    ) -> Result<TurnOutcome, GameError> {
        let occurrences = self.state.reveal(letter);
        self.state.record_guess(letter);
        debug!(%player, %letter, occurrences, "guess resolved");

        if occurrences == 0 {
            self.say(&format!("Sorry, there is no '{letter}' in the phrase."));
            self.state.advance_turn();
            return Ok(TurnOutcome::Miss { letter });
        }

        let prize = i64::from(segment.multiplier()) * occurrences as i64;
        let total = self.state.adjust_score(player, prize)?;
        self.say(&format!(
            "'{letter}' appears {occurrences} time(s)! {name} wins {prize} points and now has {total}."
        ));
        let view = self.state.phrase().masked_view();
        self.say(&view);
        Ok(TurnOutcome::Hit {
            letter,
            occurrences,
            prize,
        })
    }

    fn summary(&self) -> GameSummary {
        GameSummary {
            phrase: self.state.phrase().text().to_string(),
            standings: self.state.standings(),
            winners: self.state.winners(),
            guessed_letters: self.state.guessed_letters().to_vec(),
            spins: self.spins,
        }
    }

    fn announce(&mut self, summary: &GameSummary) {
        self.say(&format!("Solved! The phrase was: {}", summary.phrase));
        for (rank, record) in summary.standings.iter().enumerate() {
            self.say(&format!(
                "{}. {} - {} points",
                rank + 1,
                record.name(),
                record.score()
            ));
        }
    }

    fn say(&mut self, line: &str) {
        self.narrator.say(line);
    }
}
