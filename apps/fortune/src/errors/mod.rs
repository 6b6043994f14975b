//! Error handling for the fortune game engine.

pub mod domain;

pub use domain::GameError;
