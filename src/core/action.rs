//! The action contract.
//!
//! An action is a value describing one legal mutation of a game state,
//! parameterized by the acting player and whatever targets were chosen.
//! Games usually implement [`Action`] on one enum covering every move the
//! game has.
//!
//! ## Extended actions
//!
//! Some actions need further decisions before they are done ("play this
//! card" followed by "discard which card?"). Such an action returns
//! [`Outcome::Extended`] from `execute`; the forward model then pushes a
//! copy of it onto the state's action stack, and while it sits on top:
//!
//! - legal moves come from `legal_follow_ups` instead of the game's normal
//!   legality rules,
//! - `acting_player` may hand the decision to someone else,
//! - `on_follow_up_chosen` is told about every move applied beneath it,
//! - it is popped once `is_sequence_complete` returns true.
//!
//! Actions that need none of this only implement `execute`, `describe` and
//! `no_op`.

use super::error::ActionError;
use super::player::PlayerId;
use super::state::{GameData, GameState};

/// What applying an action left behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action is fully applied.
    Complete,
    /// The action needs more decisions and becomes the controlling context.
    Extended,
}

/// A move that can be applied to a `GameState<D>`.
///
/// `Clone` is the copy operation: the forward model keeps one copy in the
/// history and mutates another on the action stack.
pub trait Action<D: GameData>: Clone + PartialEq + std::fmt::Debug {
    /// Apply the mutation.
    ///
    /// Called at most once per instance. Errors are surfaced to the forward
    /// model untouched; the state may already be partially modified.
    fn execute(&self, state: &mut GameState<D>) -> Result<Outcome, ActionError>;

    /// Human-readable description, evaluated against the state the action
    /// is about to be applied to.
    fn describe(&self, state: &GameState<D>) -> String;

    /// The move offered when an extended action has no legal follow-up.
    ///
    /// Must execute as [`Outcome::Complete`] without changing the state.
    fn no_op(player: PlayerId) -> Self;

    /// Ordered legal next moves while this action is on top of the stack.
    ///
    /// Must be stable: the same state always yields the same list.
    fn legal_follow_ups(&self, _state: &GameState<D>) -> Vec<Self> {
        Vec::new()
    }

    /// Whether the sequence started by this action is finished.
    fn is_sequence_complete(&self, _state: &GameState<D>) -> bool {
        true
    }

    /// Bookkeeping after a follow-up has been executed.
    fn on_follow_up_chosen(
        &mut self,
        _state: &mut GameState<D>,
        _chosen: &Self,
    ) -> Result<(), ActionError> {
        Ok(())
    }

    /// Who makes the next decision while this action is on top of the
    /// stack. `None` leaves it to the turn order.
    fn acting_player(&self, _state: &GameState<D>) -> Option<PlayerId> {
        None
    }
}
