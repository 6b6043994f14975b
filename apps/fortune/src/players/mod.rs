//! Player module - guess policies that supply letters for each seat.
//!
//! This module provides:
//! - `GuessPolicy`, the one capability every seat implements
//! - `FrequencyPlayer` and `RandomPlayer` computer seats
//! - `HumanPlayer`, a console adapter for any reader/writer pair
//! - a registry of computer players by stable name

pub mod config;
mod frequency;
mod human;
mod random;
pub mod registry;
mod trait_def;

pub use config::PlayerConfig;
pub use frequency::{FrequencyPlayer, CZECH_FREQUENCY, ENGLISH_FREQUENCY};
pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use trait_def::{GuessPolicy, PolicyError};

/// Create a computer player by registry name and optional config.
///
/// Returns `None` if the name is unrecognized.
pub fn create_player(name: &str, config: &PlayerConfig) -> Option<Box<dyn GuessPolicy>> {
    registry::by_name(name).map(|factory| (factory.make)(config))
}
