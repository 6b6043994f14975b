//! Per-player configuration for computer seats.

/// Options a computer player is built with.
///
/// Fields a policy does not use are ignored by its factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    /// RNG seed for reproducible choices.
    pub seed: Option<u64>,

    /// Replacement letter table for frequency-driven players.
    pub alphabet: Option<String>,
}

impl PlayerConfig {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_alphabet(mut self, alphabet: Option<String>) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Alphabet override, upper-cased, or `None` when absent or blank.
    pub fn alphabet(&self) -> Option<String> {
        self.alphabet
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_uppercase)
    }
}
