//! Ruleset configuration, phases and results.
//!
//! - `Parameters`: the immutable ruleset a game is played under, including
//!   the random seed. Shared read-only between every copy of a state.
//! - `GamePhase`: a closed, per-game enumeration of phases.
//! - `GameResult`: the fixed set of game/player outcomes.

use serde::{Deserialize, Serialize};

/// Ruleset parameters for a game.
///
/// The kernel only needs the seed; everything else is game-defined. State
/// copies share the same parameters through an `Arc`, so implementors should
/// hold plain data only.
pub trait Parameters: Clone + PartialEq + std::fmt::Debug {
    /// Seed for the game's deterministic RNG.
    fn random_seed(&self) -> u64;

    /// Replace the seed. Only called by `GameState::reset_with_seed`.
    fn set_random_seed(&mut self, seed: u64);
}

/// A game's phase type.
///
/// Games use [`DefaultPhase`] or their own enum. Either way the kernel
/// needs to know which phase a freshly reset game starts in.
pub trait GamePhase: Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {
    /// The phase a reset game starts in.
    fn main() -> Self;
}

/// Phases available to every game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultPhase {
    #[default]
    Main,
    PlayerReaction,
    End,
}

impl GamePhase for DefaultPhase {
    fn main() -> Self {
        DefaultPhase::Main
    }
}

/// Status of a game, or of one player in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Draw,
    Lose,
    Disqualify,
    Ongoing,
    Ended,
}

impl GameResult {
    /// Numeric value of the outcome, for agents that want a reward.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.0,
            GameResult::Lose => -1.0,
            GameResult::Disqualify => -2.0,
            GameResult::Ongoing => 0.0,
            GameResult::Ended => 3.0,
        }
    }

    /// Anything other than `Ongoing`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameResult::Win => "WIN",
            GameResult::Draw => "DRAW",
            GameResult::Lose => "LOSE",
            GameResult::Disqualify => "DISQUALIFY",
            GameResult::Ongoing => "GAME_ONGOING",
            GameResult::Ended => "GAME_END",
        };
        f.write_str(name)
    }
}
