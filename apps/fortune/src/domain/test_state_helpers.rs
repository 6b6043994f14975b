//! Test-only game state builders for domain unit tests.

use crate::domain::{GameState, PrizeSegment, PrizeWheel, SecretPhrase};

/// Wheel that always lands on a single `$multiplier` prize.
pub fn fixed_wheel(multiplier: u32) -> PrizeWheel {
    PrizeWheel::new([PrizeSegment::prize(multiplier)]).expect("one segment")
}

/// Multiplayer game over `phrase` with players named `P0..Pn`.
pub fn make_multiplayer(phrase: &str, players: usize, wheel: PrizeWheel) -> GameState {
    let phrase = SecretPhrase::new(phrase).expect("test phrase must be valid");
    GameState::multiplayer(phrase, wheel, (0..players).map(|i| format!("P{i}")))
        .expect("test roster must be valid")
        .with_seed(7)
}

pub fn make_single(phrase: &str, wheel: PrizeWheel) -> GameState {
    let phrase = SecretPhrase::new(phrase).expect("test phrase must be valid");
    GameState::single_player(phrase, wheel, "Solo").with_seed(7)
}
