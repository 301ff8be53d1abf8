//! Turn order: whose decision it is, and how turns and rounds are counted.
//!
//! Turn order is a small state machine over (owner, turn, round) plus
//! whatever policy state an implementation adds, such as a direction.
//! It never terminates by itself; the end of a game is signaled through
//! the state's status.
//!
//! - [`StandardTurnOrder`]: owner moves one seat forward each turn.
//! - [`AlternatingTurnOrder`]: the step can be reversed mid-game.
//!
//! Games with other rules implement [`TurnOrder`] themselves.

mod alternating;
mod order;

pub use alternating::AlternatingTurnOrder;
pub use order::{StandardTurnOrder, TurnCounters, TurnOrder};
