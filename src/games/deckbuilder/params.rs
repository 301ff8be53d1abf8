//! Ruleset parameters.

use serde::{Deserialize, Serialize};

use crate::core::Parameters;

use super::cards::CardKind;

/// Parameters for one deck-building match.
///
/// Built fluently from [`DeckbuilderParams::first_game`] or `default()`:
///
/// ```
/// use tabletop_kernel::games::deckbuilder::DeckbuilderParams;
///
/// let params = DeckbuilderParams::first_game(7)
///     .hand_size(6)
///     .max_rounds(20);
/// assert_eq!(params.hand_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckbuilderParams {
    pub seed: u64,
    pub hand_size: usize,
    pub starting_coppers: usize,
    pub starting_estates: usize,
    /// Hand size an attack such as Militia forces other players down to.
    pub attack_hand_limit: usize,
    /// Action cards available in the supply, in supply order.
    pub kingdom: Vec<CardKind>,
    /// Copies of each kingdom card in the supply.
    pub kingdom_pile_size: u32,
    /// End the game after this many completed rounds.
    pub max_rounds: Option<u32>,
}

impl Default for DeckbuilderParams {
    fn default() -> Self {
        Self::first_game(0)
    }
}

impl DeckbuilderParams {
    /// The standard introductory setup.
    #[must_use]
    pub fn first_game(seed: u64) -> Self {
        Self {
            seed,
            hand_size: 5,
            starting_coppers: 7,
            starting_estates: 3,
            attack_hand_limit: 3,
            kingdom: vec![
                CardKind::Cellar,
                CardKind::Village,
                CardKind::Smithy,
                CardKind::Militia,
                CardKind::Festival,
                CardKind::Laboratory,
                CardKind::Market,
            ],
            kingdom_pile_size: 10,
            max_rounds: None,
        }
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be positive");
        self.hand_size = size;
        self
    }

    pub fn starting_deck(mut self, coppers: usize, estates: usize) -> Self {
        assert!(coppers + estates > 0, "Starting deck cannot be empty");
        self.starting_coppers = coppers;
        self.starting_estates = estates;
        self
    }

    pub fn attack_hand_limit(mut self, limit: usize) -> Self {
        self.attack_hand_limit = limit;
        self
    }

    pub fn kingdom(mut self, kingdom: Vec<CardKind>) -> Self {
        assert!(
            kingdom.iter().all(|kind| kind.is_action()),
            "Kingdom cards must be action cards"
        );
        self.kingdom = kingdom;
        self
    }

    pub fn kingdom_pile_size(mut self, size: u32) -> Self {
        self.kingdom_pile_size = size;
        self
    }

    pub fn max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Round limit must be positive");
        self.max_rounds = Some(rounds);
        self
    }

    /// Supply size for a base card at a table of `player_count`.
    #[must_use]
    pub fn base_pile_size(&self, kind: CardKind, player_count: usize) -> u32 {
        let victory = if player_count <= 2 { 8 } else { 12 };
        match kind {
            CardKind::Copper => 60u32.saturating_sub(7 * player_count as u32),
            CardKind::Silver => 40,
            CardKind::Gold => 30,
            CardKind::Estate | CardKind::Duchy | CardKind::Province => victory,
            _ => self.kingdom_pile_size,
        }
    }
}

impl Parameters for DeckbuilderParams {
    fn random_seed(&self) -> u64 {
        self.seed
    }

    fn set_random_seed(&mut self, seed: u64) {
        self.seed = seed;
    }
}
