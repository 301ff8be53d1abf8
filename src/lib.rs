//! # tabletop-kernel
//!
//! A rule-engine-agnostic simulation kernel for turn-based tabletop games,
//! built for search and agent play.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The kernel knows nothing about cards, boards or
//!    scoring. Games supply them through the [`GameData`] and [`Action`]
//!    traits.
//!
//! 2. **N-Player First**: Every API takes `player_count` as context.
//!    No convenience methods that assume 2 players.
//!
//! 3. **Copy and Isolate**: A state copy shares nothing mutable with its
//!    source. Search explores many copies in parallel without locks.
//!
//! ## Architecture
//!
//! - **Arena of Components**: The [`ComponentRegistry`] owns every piece;
//!   game data and actions refer to pieces by [`ComponentId`]. Copies only
//!   rebuild the index.
//!
//! - **Observer-Scoped Copies**: `GameState::copy(Observer::Player(p))`
//!   hides or redeals what `p` cannot see.
//!
//! - **Extended Actions**: Actions that need further decisions push
//!   themselves onto an action stack and control legality until complete.
//!
//! - **Persistent History**: Action history uses `im::Vector`, so copying
//!   shares it.
//!
//! ## Modules
//!
//! - `core`: Components, players, state, actions, RNG, configuration
//! - `turns`: Turn order state machine
//! - `stack`: Extended-action stack
//! - `rules`: ForwardModel trait for game implementations
//! - `games`: Reference rule sets

pub mod core;
pub mod games;
pub mod rules;
pub mod stack;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, Component, ComponentId, ComponentKind, ComponentRegistry,
    DefaultPhase, GameData, GamePhase, GameResult, GameRng, GameRngState, GameState, History,
    KernelError, Observer, Outcome, Parameters, PlayerId, PlayerMap, Setup, Transcript,
};

pub use crate::rules::ForwardModel;

pub use crate::stack::ActionStack;

pub use crate::turns::{AlternatingTurnOrder, StandardTurnOrder, TurnCounters, TurnOrder};
