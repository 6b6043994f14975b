//! Random player - guesses a uniformly random untried letter.
//!
//! [`RandomPlayer`] is the baseline computer seat. It only ever proposes
//! letters `A..=Z` that are not already in the history, so every answer it
//! gives is accepted by the moderator. Seeding makes its choices
//! reproducible in tests and simulations.

use rand::prelude::*;

use crate::domain::letter::same_letter;

use super::trait_def::{GuessPolicy, PolicyError};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub struct RandomPlayer {
    label: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomPlayer`.
    ///
    /// * `seed` - `Some` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            label: "Random bot".to_string(),
            rng,
        }
    }
}

impl GuessPolicy for RandomPlayer {
    fn label(&self) -> &str {
        &self.label
    }

    fn guess_letter(
        &mut self,
        already_guessed: &[char],
        _masked_phrase: &str,
    ) -> Result<String, PolicyError> {
        let untried: Vec<char> = ALPHABET
            .chars()
            .filter(|c| !already_guessed.iter().any(|g| same_letter(*g, *c)))
            .collect();

        untried
            .choose(&mut self.rng)
            .map(|c| c.to_string())
            .ok_or(PolicyError::Exhausted)
    }
}
