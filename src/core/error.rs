//! Error types.
//!
//! Only recoverable conditions live here. Broken invariants (duplicate
//! component ids, a turn owner outside the table, rewriting a terminal
//! status) panic instead.

use thiserror::Error;

use super::component::ComponentId;
use super::player::PlayerId;

/// Failure raised while applying an action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("game is already over")]
    GameOver,
    #[error("component {0} not found")]
    ComponentNotFound(ComponentId),
    #[error("{player} has no {what} in {pile}")]
    NotInPile {
        player: PlayerId,
        what: String,
        pile: &'static str,
    },
    #[error("illegal action: {0}")]
    Illegal(String),
}

/// Failure at the crate's serialization boundary.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("transcript encoding failed: {0}")]
    Transcript(#[from] bincode::Error),
}
