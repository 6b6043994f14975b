//! A single phrase character and the comparison rules for guessing it.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::rules::{is_special, WILDCARD};
use crate::errors::domain::GameError;

/// Comparison key for a character: diacritics stripped, upper-cased.
///
/// `Ř`, `ř` and `r` all normalize to `"R"`. The result is a `String`
/// because upper-casing may expand (`ß` becomes `"SS"`).
pub fn normalize(c: char) -> String {
    c.nfd()
        .filter(|m| !is_combining_mark(*m))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Require `candidate` to be exactly one character once NFC-composed.
///
/// `R` followed by a combining caron is accepted as `Ř`.
pub fn single_char(candidate: &str) -> Result<char, GameError> {
    let mut chars = candidate.nfc();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GameError::invalid_guess(candidate)),
    }
}

/// Whether two characters are the same letter once normalized.
pub fn same_letter(a: char, b: char) -> bool {
    a == b || normalize(a) == normalize(b)
}

/// One phrase character with its revealed/hidden state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCell {
    canonical: char,
    key: String,
    special: bool,
    revealed: bool,
}

impl LetterCell {
    pub fn new(c: char) -> Self {
        let special = is_special(c);
        Self {
            canonical: c,
            key: normalize(c),
            special,
            revealed: special,
        }
    }

    pub fn canonical(&self) -> char {
        self.canonical
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reveal this cell if `candidate` is the same letter.
    ///
    /// Returns `true` only on the hidden-to-revealed transition, so guessing
    /// a cell that is already showing never counts twice.
    pub fn reveal(&mut self, candidate: &str) -> Result<bool, GameError> {
        let c = single_char(candidate)?;
        Ok(self.reveal_char(c))
    }

    pub(crate) fn reveal_char(&mut self, c: char) -> bool {
        if self.revealed || !self.matches(c) {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Normalized equality, independent of the revealed state.
    pub fn matches(&self, c: char) -> bool {
        c == self.canonical || normalize(c) == self.key
    }

    pub fn display(&self) -> char {
        if self.revealed {
            self.canonical
        } else {
            WILDCARD
        }
    }
}
