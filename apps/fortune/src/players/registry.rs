//! How to register a computer player
//!
//! 1) Implement `GuessPolicy` for your type in its module.
//! 2) Add an entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Same config seed ⇒ same behavior (where applicable).

use crate::players::{FrequencyPlayer, GuessPolicy, PlayerConfig, RandomPlayer};

/// Factory definition for constructing computer players.
pub struct PlayerFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &PlayerConfig) -> Box<dyn GuessPolicy>,
}

static PLAYER_FACTORIES: &[PlayerFactory] = &[
    PlayerFactory {
        name: "frequency-en",
        version: FrequencyPlayer::VERSION,
        make: make_frequency_en,
    },
    PlayerFactory {
        name: "frequency-cz",
        version: FrequencyPlayer::VERSION,
        make: make_frequency_cz,
    },
    PlayerFactory {
        name: "random",
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered computer players.
pub fn registered_players() -> &'static [PlayerFactory] {
    PLAYER_FACTORIES
}

/// Finds a registered factory by its name.
pub fn by_name(name: &str) -> Option<&'static PlayerFactory> {
    registered_players()
        .iter()
        .find(|factory| factory.name == name)
}

fn frequency_with(base: FrequencyPlayer, config: &PlayerConfig) -> Box<dyn GuessPolicy> {
    match config.alphabet() {
        Some(table) => Box::new(FrequencyPlayer::new(base.label().to_string(), &table)),
        None => Box::new(base),
    }
}

fn make_frequency_en(config: &PlayerConfig) -> Box<dyn GuessPolicy> {
    frequency_with(FrequencyPlayer::english(), config)
}

fn make_frequency_cz(config: &PlayerConfig) -> Box<dyn GuessPolicy> {
    frequency_with(FrequencyPlayer::czech(), config)
}

fn make_random_player(config: &PlayerConfig) -> Box<dyn GuessPolicy> {
    Box::new(RandomPlayer::new(config.seed()))
}
