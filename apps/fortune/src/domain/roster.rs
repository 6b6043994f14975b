use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::errors::domain::GameError;

/// Stable player identity: the roster slot assigned at game construction.
///
/// Names may collide, so equality is slot equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(usize);

impl PlayerId {
    pub const fn new(slot: usize) -> Self {
        Self(slot)
    }

    pub const fn slot(self) -> usize {
        self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "P{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    id: PlayerId,
    name: String,
    score: i64,
}

impl PlayerRecord {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Fixed-size arena of player records, indexed by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    records: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = names
            .into_iter()
            .enumerate()
            .map(|(slot, name)| PlayerRecord {
                id: PlayerId(slot),
                name: name.into(),
                score: 0,
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn get(&self, id: PlayerId) -> Result<&PlayerRecord, GameError> {
        self.records
            .get(id.slot())
            .ok_or(GameError::UnknownPlayer(id))
    }

    pub(crate) fn set_score(&mut self, id: PlayerId, score: i64) -> Result<(), GameError> {
        let record = self
            .records
            .get_mut(id.slot())
            .ok_or(GameError::UnknownPlayer(id))?;
        record.score = score;
        Ok(())
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.records.iter().map(PlayerRecord::id)
    }
}
