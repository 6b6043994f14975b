//! Game configuration: what a hosting binary must supply before a game starts.

pub mod game;

pub use game::{GameConfig, PlayerKind, SeatConfig};
