#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod moderator;
pub mod players;
pub mod telemetry;
#[cfg(test)]
mod test_bootstrap;

// Re-exports for public API
pub use config::{GameConfig, PlayerKind, SeatConfig};
pub use domain::{
    default_wheel, GameState, PlayerId, PlayerRecord, PrizeSegment, PrizeWheel, SecretPhrase,
    TurnOrder,
};
pub use errors::GameError;
pub use moderator::{GameSummary, Moderator, Narrator, TurnOutcome, TurnReport};
pub use players::{GuessPolicy, PolicyError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
