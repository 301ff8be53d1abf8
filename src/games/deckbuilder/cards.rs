//! Card definitions.

use serde::{Deserialize, Serialize};

use crate::core::{Component, ComponentId, ComponentKind, PlayerId};

use super::actions::{Cellar, DeckAction, Militia};

/// Every card in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Copper,
    Silver,
    Gold,
    Estate,
    Duchy,
    Province,
    Cellar,
    Village,
    Smithy,
    Militia,
    Festival,
    Laboratory,
    Market,
}

/// What playing an action card grants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bonus {
    pub cards: u32,
    pub actions: u32,
    pub buys: u32,
    pub coins: u32,
}

impl CardKind {
    /// Treasure and victory cards.
    pub const BASE: [CardKind; 6] = [
        CardKind::Copper,
        CardKind::Silver,
        CardKind::Gold,
        CardKind::Estate,
        CardKind::Duchy,
        CardKind::Province,
    ];

    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            CardKind::Copper => 0,
            CardKind::Silver => 3,
            CardKind::Gold => 6,
            CardKind::Estate => 2,
            CardKind::Duchy => 5,
            CardKind::Province => 8,
            CardKind::Cellar => 2,
            CardKind::Village => 3,
            CardKind::Smithy => 4,
            CardKind::Militia => 4,
            CardKind::Festival => 5,
            CardKind::Laboratory => 5,
            CardKind::Market => 5,
        }
    }

    #[must_use]
    pub const fn treasure(self) -> u32 {
        match self {
            CardKind::Copper => 1,
            CardKind::Silver => 2,
            CardKind::Gold => 3,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn victory_points(self) -> i32 {
        match self {
            CardKind::Estate => 1,
            CardKind::Duchy => 3,
            CardKind::Province => 6,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(
            self,
            CardKind::Cellar
                | CardKind::Village
                | CardKind::Smithy
                | CardKind::Militia
                | CardKind::Festival
                | CardKind::Laboratory
                | CardKind::Market
        )
    }

    #[must_use]
    pub const fn is_victory(self) -> bool {
        self.victory_points() > 0
    }

    /// Immediate effect of playing this card. Zero for non-action cards.
    #[must_use]
    pub const fn bonus(self) -> Bonus {
        let (cards, actions, buys, coins) = match self {
            CardKind::Cellar => (0, 1, 0, 0),
            CardKind::Village => (1, 2, 0, 0),
            CardKind::Smithy => (3, 0, 0, 0),
            CardKind::Militia => (0, 0, 0, 2),
            CardKind::Festival => (0, 2, 1, 2),
            CardKind::Laboratory => (2, 1, 0, 0),
            CardKind::Market => (1, 1, 1, 1),
            _ => (0, 0, 0, 0),
        };
        Bonus {
            cards,
            actions,
            buys,
            coins,
        }
    }

    /// The action produced by playing this card, `None` for cards that
    /// cannot be played.
    ///
    /// ```
    /// use tabletop_kernel::core::PlayerId;
    /// use tabletop_kernel::games::deckbuilder::{CardKind, DeckAction};
    ///
    /// let player = PlayerId::new(1);
    /// assert_eq!(
    ///     CardKind::Village.play_action(player),
    ///     Some(DeckAction::Play { player, card: CardKind::Village })
    /// );
    /// assert_eq!(CardKind::Copper.play_action(player), None);
    /// ```
    #[must_use]
    pub fn play_action(self, player: PlayerId) -> Option<DeckAction> {
        match self {
            CardKind::Cellar => Some(DeckAction::Cellar(Cellar::new(player))),
            CardKind::Militia => Some(DeckAction::Militia(Militia::new(player))),
            kind if kind.is_action() => Some(DeckAction::Play { player, card: kind }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Copper => "Copper",
            CardKind::Silver => "Silver",
            CardKind::Gold => "Gold",
            CardKind::Estate => "Estate",
            CardKind::Duchy => "Duchy",
            CardKind::Province => "Province",
            CardKind::Cellar => "Cellar",
            CardKind::Village => "Village",
            CardKind::Smithy => "Smithy",
            CardKind::Militia => "Militia",
            CardKind::Festival => "Festival",
            CardKind::Laboratory => "Laboratory",
            CardKind::Market => "Market",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A physical card. Only the kind matters to the rules; the id is what
/// game data and history refer to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: ComponentId,
    pub kind: CardKind,
}

impl Component for Card {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        self.kind.name()
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Card
    }
}

/// The piles each player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    /// Cards played this turn.
    Table,
}

impl Pile {
    pub const ALL: [Pile; 4] = [Pile::Draw, Pile::Hand, Pile::Discard, Pile::Table];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pile::Draw => "draw pile",
            Pile::Hand => "hand",
            Pile::Discard => "discard pile",
            Pile::Table => "table",
        }
    }
}
