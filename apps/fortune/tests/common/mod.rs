#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use fortune::players::{GuessPolicy, PolicyError};
use fortune::{GameState, PrizeSegment, PrizeWheel, SecretPhrase};

pub mod logging;

/// Policy that replays a fixed list of answers, then reports exhaustion.
pub struct ScriptedPolicy {
    answers: VecDeque<String>,
    pub asked: Rc<RefCell<usize>>,
}

impl ScriptedPolicy {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Rc::new(RefCell::new(0)),
        }
    }

    pub fn boxed<I, S>(answers: I) -> Box<dyn GuessPolicy>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Box::new(Self::new(answers))
    }
}

impl GuessPolicy for ScriptedPolicy {
    fn label(&self) -> &str {
        "scripted"
    }

    fn guess_letter(&mut self, _: &[char], _: &str) -> Result<String, PolicyError> {
        *self.asked.borrow_mut() += 1;
        self.answers.pop_front().ok_or(PolicyError::Exhausted)
    }
}

pub fn fixed_wheel(multiplier: u32) -> PrizeWheel {
    PrizeWheel::new([PrizeSegment::prize(multiplier)]).expect("one segment")
}

pub fn bankrupt_wheel() -> PrizeWheel {
    PrizeWheel::new([PrizeSegment::bankrupt()]).expect("one segment")
}

pub fn multiplayer(phrase: &str, players: usize, wheel: PrizeWheel) -> GameState {
    GameState::multiplayer(
        SecretPhrase::new(phrase).expect("valid phrase"),
        wheel,
        (0..players).map(|i| format!("Player {i}")),
    )
    .expect("valid roster")
    .with_seed(11)
}

pub fn single(phrase: &str, wheel: PrizeWheel) -> GameState {
    GameState::single_player(SecretPhrase::new(phrase).expect("valid phrase"), wheel, "Solo")
        .with_seed(11)
}

/// Narration sink that keeps every line for later assertions.
pub fn recording_narrator() -> (Box<dyn fortune::Narrator>, Rc<RefCell<Vec<String>>>) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&lines);
    let narrator: Box<dyn fortune::Narrator> =
        Box::new(move |line: &str| sink.borrow_mut().push(line.to_string()));
    (narrator, lines)
}
