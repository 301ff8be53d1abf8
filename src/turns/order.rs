//! The `TurnOrder` trait and the default forward rotation.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Counters shared by every turn order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnCounters {
    player_count: usize,
    first_player: PlayerId,
    turn_owner: PlayerId,
    /// Turns ended since reset.
    turn: u32,
    /// Rounds completed since reset.
    round: u32,
    /// Turns ended in the current round.
    turns_in_round: u32,
}

impl TurnCounters {
    /// Counters for a table of `player_count`, player 0 starting.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::with_first_player(player_count, PlayerId::new(0))
    }

    /// Counters with an explicit starting player.
    #[must_use]
    pub fn with_first_player(player_count: usize, first_player: PlayerId) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");
        assert!(
            first_player.index() < player_count,
            "First player {} outside table of {}",
            first_player,
            player_count
        );

        Self {
            player_count,
            first_player,
            turn_owner: first_player,
            turn: 0,
            round: 0,
            turns_in_round: 0,
        }
    }

    fn reset(&mut self) {
        self.turn_owner = self.first_player;
        self.turn = 0;
        self.round = 0;
        self.turns_in_round = 0;
    }
}

/// Policy deciding whose decision is next.
///
/// Implementors only provide access to their [`TurnCounters`] and the
/// `next_player` rule; turn and round bookkeeping is shared.
///
/// `next_player` must always return an index inside the table. A rule that
/// does not is a bug in the game, and `end_player_turn` panics on it.
pub trait TurnOrder: Clone + PartialEq + std::fmt::Debug {
    /// Shared counters.
    fn counters(&self) -> &TurnCounters;

    /// Shared counters, mutably.
    fn counters_mut(&mut self) -> &mut TurnCounters;

    /// The player who would own the next turn. Pure.
    fn next_player(&self) -> PlayerId;

    /// Reset policy state (direction etc.). Counters are reset separately.
    fn reset_policy(&mut self) {}

    /// Per-round bookkeeping, run whenever a new round starts.
    fn on_round_end(&mut self) {}

    // === Provided ===

    /// Number of players at the table.
    fn player_count(&self) -> usize {
        self.counters().player_count
    }

    /// The player whose turn it is.
    fn current_player(&self) -> PlayerId {
        self.counters().turn_owner
    }

    /// The player every round starts with.
    fn first_player(&self) -> PlayerId {
        self.counters().first_player
    }

    /// Turns ended since reset.
    fn turn(&self) -> u32 {
        self.counters().turn
    }

    /// Rounds completed since reset.
    fn round(&self) -> u32 {
        self.counters().round
    }

    /// Turns ended in the current round.
    fn turns_in_round(&self) -> u32 {
        self.counters().turns_in_round
    }

    /// Back to the first player with zeroed counters.
    fn reset(&mut self) {
        self.counters_mut().reset();
        self.reset_policy();
    }

    /// End the current owner's turn.
    ///
    /// Moves ownership to `next_player`, counts the turn, and starts a new
    /// round when ownership comes back to the first player.
    fn end_player_turn(&mut self) {
        let next = self.next_player();
        assert!(
            next.index() < self.player_count(),
            "Turn order selected {} outside table of {}",
            next,
            self.player_count()
        );

        let counters = self.counters_mut();
        counters.turn_owner = next;
        counters.turn += 1;
        counters.turns_in_round += 1;

        if next == counters.first_player {
            counters.round += 1;
            counters.turns_in_round = 0;
            self.on_round_end();
        }
    }

    /// Hand the turn to a specific player without counting a turn.
    ///
    /// Panics if `player` is not at the table.
    fn set_turn_owner(&mut self, player: PlayerId) {
        assert!(
            player.index() < self.player_count(),
            "Cannot give the turn to {} at a table of {}",
            player,
            self.player_count()
        );
        self.counters_mut().turn_owner = player;
    }
}

/// Ownership moves one seat forward every turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardTurnOrder {
    counters: TurnCounters,
}

impl StandardTurnOrder {
    /// Turn order for `player_count` players, player 0 first.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            counters: TurnCounters::new(player_count),
        }
    }

    /// Turn order with an explicit first player.
    #[must_use]
    pub fn with_first_player(player_count: usize, first_player: PlayerId) -> Self {
        Self {
            counters: TurnCounters::with_first_player(player_count, first_player),
        }
    }
}

impl TurnOrder for StandardTurnOrder {
    fn counters(&self) -> &TurnCounters {
        &self.counters
    }

    fn counters_mut(&mut self) -> &mut TurnCounters {
        &mut self.counters
    }

    fn next_player(&self) -> PlayerId {
        self.current_player().rotate(1, self.player_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let order = StandardTurnOrder::new(3);
        assert_eq!(order.player_count(), 3);
        assert_eq!(order.current_player(), PlayerId::new(0));
        assert_eq!(order.turn(), 0);
        assert_eq!(order.round(), 0);
    }

    #[test]
    fn test_end_turn_advances_owner() {
        let mut order = StandardTurnOrder::new(3);
        assert_eq!(order.next_player(), PlayerId::new(1));

        order.end_player_turn();
        assert_eq!(order.current_player(), PlayerId::new(1));
        assert_eq!(order.turn(), 1);
        assert_eq!(order.turns_in_round(), 1);
        assert_eq!(order.round(), 0);
    }

    #[test]
    fn test_round_counted_on_wrap() {
        let mut order = StandardTurnOrder::new(3);
        for _ in 0..3 {
            order.end_player_turn();
        }

        assert_eq!(order.current_player(), PlayerId::new(0));
        assert_eq!(order.turn(), 3);
        assert_eq!(order.round(), 1);
        assert_eq!(order.turns_in_round(), 0);
    }

    #[test]
    fn test_first_player_other_than_zero() {
        let mut order = StandardTurnOrder::with_first_player(4, PlayerId::new(2));
        assert_eq!(order.current_player(), PlayerId::new(2));

        order.end_player_turn();
        order.end_player_turn();
        assert_eq!(order.current_player(), PlayerId::new(0));
        assert_eq!(order.round(), 0);

        order.end_player_turn();
        order.end_player_turn();
        assert_eq!(order.current_player(), PlayerId::new(2));
        assert_eq!(order.round(), 1);
    }

    #[test]
    fn test_single_player_rounds() {
        let mut order = StandardTurnOrder::new(1);
        order.end_player_turn();
        order.end_player_turn();

        assert_eq!(order.current_player(), PlayerId::new(0));
        assert_eq!(order.round(), 2);
    }

    #[test]
    fn test_reset() {
        let mut order = StandardTurnOrder::new(2);
        order.end_player_turn();
        order.end_player_turn();
        order.end_player_turn();

        order.reset();
        assert_eq!(order, StandardTurnOrder::new(2));
    }

    #[test]
    fn test_set_turn_owner() {
        let mut order = StandardTurnOrder::new(4);
        order.set_turn_owner(PlayerId::new(3));
        assert_eq!(order.current_player(), PlayerId::new(3));
        assert_eq!(order.turn(), 0);
    }

    #[test]
    #[should_panic(expected = "Cannot give the turn")]
    fn test_set_turn_owner_out_of_range() {
        let mut order = StandardTurnOrder::new(2);
        order.set_turn_owner(PlayerId::new(2));
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Broken {
        counters: TurnCounters,
    }

    impl TurnOrder for Broken {
        fn counters(&self) -> &TurnCounters {
            &self.counters
        }

        fn counters_mut(&mut self) -> &mut TurnCounters {
            &mut self.counters
        }

        fn next_player(&self) -> PlayerId {
            PlayerId::new(self.player_count() as u8)
        }
    }

    #[test]
    #[should_panic(expected = "outside table")]
    fn test_out_of_range_rule_is_fatal() {
        let mut order = Broken {
            counters: TurnCounters::new(2),
        };
        order.end_player_turn();
    }
}
