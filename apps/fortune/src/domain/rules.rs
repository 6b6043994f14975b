use std::ops::RangeInclusive;

/// Character shown in place of an unrevealed phrase letter.
pub const WILDCARD: char = '_';

/// Phrase characters that are never guessed and start out revealed.
pub const SPECIAL_CHARACTERS: [char; 8] = [' ', '"', '\'', ',', '-', '.', '!', '?'];

/// Reserved segment name that marks a bankrupt outcome.
pub const BANKRUPT_NAME: &str = "BANKRUPT";

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 5;

/// Default number of attempts a player gets to produce a usable guess.
pub const DEFAULT_GUESS_ATTEMPTS: u8 = 5;

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Whether a phrase character can appear in a game at all.
///
/// Whitespace other than the plain space and control characters could never
/// be typed back as a guess, so a phrase holding one could not be solved.
pub fn is_unrevealable(c: char) -> bool {
    !is_special(c) && (c.is_whitespace() || c.is_control())
}

pub fn roster_bounds() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}
