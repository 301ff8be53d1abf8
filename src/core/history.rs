//! Append-only action history.
//!
//! Uses an `im::Vector` so that copying a state shares the log
//! structurally instead of duplicating it. Recorded actions are dead,
//! read-only values; nothing mutates them after they are logged.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::KernelError;
use super::player::PlayerId;

/// One applied action, with the context it was applied in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord<A> {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: A,

    /// Human-readable line, `"Player {p} : {description}"`.
    pub text: String,

    /// Turn counter when the action was taken.
    pub turn: u32,

    /// Round counter when the action was taken.
    pub round: u32,
}

/// The log of every action applied since the last reset.
#[derive(Clone, Debug)]
pub struct History<A: Clone> {
    records: Vector<ActionRecord<A>>,
}

impl<A: Clone> Default for History<A> {
    fn default() -> Self {
        Self {
            records: Vector::new(),
        }
    }
}

impl<A: Clone> History<A> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: ActionRecord<A>) {
        self.records.push_back(record);
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord<A>> {
        self.records.iter()
    }

    /// The most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&ActionRecord<A>> {
        self.records.last()
    }

    /// Recorded actions, in order.
    #[must_use]
    pub fn actions(&self) -> Vec<A> {
        self.records.iter().map(|r| r.action.clone()).collect()
    }

    /// Recorded text lines, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.text.clone()).collect()
    }

    /// Export the text side of the log for replay tooling.
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        Transcript {
            lines: self
                .records
                .iter()
                .map(|r| TranscriptLine {
                    player: r.player,
                    turn: r.turn,
                    round: r.round,
                    text: r.text.clone(),
                })
                .collect(),
        }
    }
}

/// One line of a [`Transcript`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub player: PlayerId,
    pub turn: u32,
    pub round: u32,
    pub text: String,
}

/// Serializable, game-independent export of a history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KernelError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a transcript written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KernelError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
