//! Core kernel types: components, players, state, actions, RNG, configuration.
//!
//! Everything here is game-agnostic. Games plug in through the [`GameData`]
//! and [`Action`] traits rather than modifying the core.

pub mod action;
pub mod component;
pub mod config;
pub mod error;
pub mod history;
pub mod player;
pub mod registry;
pub mod rng;
pub mod state;

pub use action::{Action, Outcome};
pub use component::{Component, ComponentId, ComponentIds, ComponentKind};
pub use config::{DefaultPhase, GamePhase, GameResult, Parameters};
pub use error::{ActionError, KernelError};
pub use history::{ActionRecord, History, Transcript, TranscriptLine};
pub use player::{Observer, PlayerId, PlayerMap};
pub use registry::ComponentRegistry;
pub use rng::{GameRng, GameRngState};
pub use state::{GameData, GameState, Setup};
