//! Guess-policy trait definition.

use thiserror::Error;

/// Errors a guess policy cannot recover from by being asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The input source reached end of file.
    #[error("input closed")]
    InputClosed,
    /// Reading from or writing to the player's terminal failed.
    #[error("i/o error: {0}")]
    Io(String),
    /// Every letter the policy knows about has already been tried.
    #[error("no untried letters left")]
    Exhausted,
    /// The policy hit an internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for PolicyError {
    fn from(err: std::io::Error) -> Self {
        PolicyError::Io(err.to_string())
    }
}

/// Capability that supplies the next guessed letter for one seat.
///
/// Implementations only read the two inputs; they never see or change the
/// game state. The returned text is not trusted: the moderator rejects
/// anything that is not a single, untried character and asks again.
pub trait GuessPolicy {
    /// Display label used in narration and logs.
    fn label(&self) -> &str;

    /// Choose the next letter.
    ///
    /// `already_guessed` is in guess order; `masked_phrase` shows unrevealed
    /// letters as the wildcard placeholder.
    fn guess_letter(
        &mut self,
        already_guessed: &[char],
        masked_phrase: &str,
    ) -> Result<String, PolicyError>;
}

impl<P: GuessPolicy + ?Sized> GuessPolicy for Box<P> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn guess_letter(
        &mut self,
        already_guessed: &[char],
        masked_phrase: &str,
    ) -> Result<String, PolicyError> {
        (**self).guess_letter(already_guessed, masked_phrase)
    }
}
