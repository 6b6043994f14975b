//! Turn orchestration: drives a game by combining the game state with each
//! seat's guess policy, and narrates progress to an optional sink.

pub mod narration;
mod orchestrator;
mod outcome;

pub use narration::{narrator_for, ConsoleNarrator, Narrator, QuietNarrator};
pub use orchestrator::{Moderator, TurnPhase};
pub use outcome::{GameSummary, TurnOutcome, TurnReport};
