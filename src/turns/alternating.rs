//! Turn order whose direction can be reversed mid-game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::order::{TurnCounters, TurnOrder};

/// Ownership moves one seat per turn in the current direction.
///
/// ```
/// use tabletop_kernel::core::PlayerId;
/// use tabletop_kernel::turns::{AlternatingTurnOrder, TurnOrder};
///
/// let mut order = AlternatingTurnOrder::new(4);
/// assert_eq!(order.next_player(), PlayerId::new(1));
///
/// order.reverse();
/// assert_eq!(order.next_player(), PlayerId::new(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlternatingTurnOrder {
    counters: TurnCounters,
    /// +1 clockwise, -1 counter-clockwise.
    direction: i32,
}

impl AlternatingTurnOrder {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            counters: TurnCounters::new(player_count),
            direction: 1,
        }
    }

    #[must_use]
    pub fn with_first_player(player_count: usize, first_player: PlayerId) -> Self {
        Self {
            counters: TurnCounters::with_first_player(player_count, first_player),
            direction: 1,
        }
    }

    /// Flip the direction of play.
    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }

    #[must_use]
    pub fn direction(&self) -> i32 {
        self.direction
    }
}

impl TurnOrder for AlternatingTurnOrder {
    fn counters(&self) -> &TurnCounters {
        &self.counters
    }

    fn counters_mut(&mut self) -> &mut TurnCounters {
        &mut self.counters
    }

    fn next_player(&self) -> PlayerId {
        self.current_player()
            .rotate(self.direction, self.player_count())
    }

    fn reset_policy(&mut self) {
        self.direction = 1;
    }
}
