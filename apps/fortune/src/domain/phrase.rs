use std::fmt::{Display, Formatter, Result as FmtResult};

use unicode_normalization::UnicodeNormalization;

use crate::domain::letter::{single_char, LetterCell};
use crate::domain::rules::{is_unrevealable, WILDCARD};
use crate::errors::domain::GameError;

/// The hidden phrase, one [`LetterCell`] per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPhrase {
    text: String,
    cells: Vec<LetterCell>,
}

impl SecretPhrase {
    /// Build a phrase from literal text.
    ///
    /// The text is NFC-composed first so a letter written with a combining
    /// accent still occupies a single cell.
    pub fn new(text: &str) -> Result<Self, GameError> {
        if text.is_empty() {
            return Err(GameError::EmptyPhrase);
        }
        let text: String = text.nfc().collect();
        if text.contains(WILDCARD) {
            return Err(GameError::ReservedCharacter(WILDCARD));
        }
        if let Some(c) = text.chars().find(|c| is_unrevealable(*c)) {
            return Err(GameError::UnrevealableCharacter(c));
        }
        let cells = text.chars().map(LetterCell::new).collect();
        Ok(Self { text, cells })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (and cells) in the phrase.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[LetterCell] {
        &self.cells
    }

    /// Submit a guess and return how many cells it newly revealed.
    pub fn guess(&mut self, candidate: &str) -> Result<usize, GameError> {
        let c = single_char(candidate)?;
        Ok(self.guess_char(c))
    }

    pub fn guess_char(&mut self, c: char) -> usize {
        // every cell is visited; no short-circuit
        self.cells
            .iter_mut()
            .map(|cell| cell.reveal_char(c))
            .filter(|revealed| *revealed)
            .count()
    }

    pub fn masked_view(&self) -> String {
        self.cells.iter().map(LetterCell::display).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.cells.iter().all(LetterCell::is_revealed)
    }

    pub fn revealed_cells(&self) -> impl Iterator<Item = &LetterCell> {
        self.cells.iter().filter(|cell| cell.is_revealed())
    }

    pub fn special_cells(&self) -> impl Iterator<Item = &LetterCell> {
        self.cells.iter().filter(|cell| cell.is_special())
    }

    /// Whether some still-hidden cell would be revealed by `c`.
    pub fn contains_unrevealed(&self, c: char) -> bool {
        self.cells
            .iter()
            .any(|cell| !cell.is_revealed() && cell.matches(c))
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_revealed()).count()
    }
}

impl Display for SecretPhrase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.masked_view())
    }
}
