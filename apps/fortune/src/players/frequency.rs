//! Letter-frequency player: always tries the most common untried letter.

use crate::domain::letter::same_letter;

use super::trait_def::{GuessPolicy, PolicyError};

/// English letters, most frequent first.
pub const ENGLISH_FREQUENCY: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Czech letters (diacritics folded), most frequent first.
pub const CZECH_FREQUENCY: &str = "OENATVSILKRDPMUZJYCBHFGXWQ";

/// Computer player driven by a fixed letter-frequency table.
#[derive(Debug, Clone)]
pub struct FrequencyPlayer {
    label: String,
    table: Vec<char>,
}

impl FrequencyPlayer {
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(label: impl Into<String>, table: &str) -> Self {
        Self {
            label: label.into(),
            table: table.chars().collect(),
        }
    }

    pub fn english() -> Self {
        Self::new("English frequency bot", ENGLISH_FREQUENCY)
    }

    pub fn czech() -> Self {
        Self::new("Czech frequency bot", CZECH_FREQUENCY)
    }

    pub fn table(&self) -> &[char] {
        &self.table
    }
}

impl GuessPolicy for FrequencyPlayer {
    fn label(&self) -> &str {
        &self.label
    }

    fn guess_letter(
        &mut self,
        already_guessed: &[char],
        _masked_phrase: &str,
    ) -> Result<String, PolicyError> {
        self.table
            .iter()
            .find(|c| !already_guessed.iter().any(|g| same_letter(*g, **c)))
            .map(|c| c.to_string())
            .ok_or(PolicyError::Exhausted)
    }
}
