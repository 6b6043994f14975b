//! Prize wheel: named segments with multipliers, one of which is drawn per spin.
//!
//! Duplicated segments weight the draw; the reserved [`BANKRUPT_NAME`]
//! segment zeroes the spinner's score instead of offering a guess.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rand::Rng;

use crate::domain::rules::BANKRUPT_NAME;
use crate::errors::domain::GameError;

/// One wedge of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrizeSegment {
    name: String,
    multiplier: u32,
    bankrupt: bool,
}

impl PrizeSegment {
    pub fn new(name: impl Into<String>, multiplier: u32) -> Self {
        let name = name.into();
        let bankrupt = name == BANKRUPT_NAME;
        Self {
            name,
            multiplier,
            bankrupt,
        }
    }

    /// Numbered prize named after its multiplier, e.g. `$500`.
    pub fn prize(multiplier: u32) -> Self {
        Self::new(format!("${multiplier}"), multiplier)
    }

    pub fn bankrupt() -> Self {
        Self::new(BANKRUPT_NAME, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }
}

impl Display for PrizeSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)
    }
}

/// Non-empty, immutable collection of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeWheel {
    segments: Vec<PrizeSegment>,
}

impl PrizeWheel {
    pub fn new(segments: impl IntoIterator<Item = PrizeSegment>) -> Result<Self, GameError> {
        let segments: Vec<PrizeSegment> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(GameError::EmptyWheel);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PrizeSegment] {
        &self.segments
    }

    /// Draw a segment uniformly, with replacement.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> &PrizeSegment {
        let idx = rng.random_range(0..self.segments.len());
        &self.segments[idx]
    }
}

const DEFAULT_PRIZES: [u32; 21] = [
    800, 500, 650, 500, 500, 900, 700, 600, 800, 500, 700, 500, 600, 550, 500, 900, 650, 900, 900,
    300, 700,
];

/// Stock wheel: 21 numbered prizes and two bankrupt segments.
pub fn default_wheel() -> PrizeWheel {
    let segments = DEFAULT_PRIZES
        .iter()
        .map(|m| PrizeSegment::prize(*m))
        .chain([PrizeSegment::bankrupt(), PrizeSegment::bankrupt()]);
    PrizeWheel {
        segments: segments.collect(),
    }
}
