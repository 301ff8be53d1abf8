//! The Forward Model boundary.
//!
//! Games implement [`ForwardModel`] to define:
//! - Legal actions when no extended action is in progress
//! - What happens after a top-level action (turn and phase advance, game end)
//!
//! Applying actions, recording history and driving the extended-action stack
//! are provided by the trait and identical for every game.

pub mod engine;

pub use engine::ForwardModel;
