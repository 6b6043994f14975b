//! Domain layer: phrase masking, prize wheel, roster and turn/score state.

pub mod letter;
pub mod phrase;
pub mod roster;
pub mod rules;
pub mod state;
pub mod wheel;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_phrase;
#[cfg(test)]
mod tests_props_turn_order;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_turn_order;

// Re-exports for ergonomics
pub use letter::{normalize, LetterCell};
pub use phrase::SecretPhrase;
pub use roster::{PlayerId, PlayerRecord, Roster};
pub use state::{GameState, TurnOrder};
pub use wheel::{default_wheel, PrizeSegment, PrizeWheel};
