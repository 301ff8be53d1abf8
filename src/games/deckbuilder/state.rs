//! Deck-builder game data and the state helpers its actions use.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    ActionError, ComponentId, GameData, GamePhase, GameRng, GameState, Observer, PlayerId,
    PlayerMap, Setup,
};
use crate::turns::{StandardTurnOrder, TurnOrder};

use super::actions::DeckAction;
use super::cards::{Card, CardKind, Pile};
use super::params::DeckbuilderParams;

/// Phases of a player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckbuilderPhase {
    /// Play action cards.
    Action,
    /// Buy cards from the supply.
    Buy,
}

impl GamePhase for DeckbuilderPhase {
    fn main() -> Self {
        DeckbuilderPhase::Action
    }
}

/// One player's cards, by id. Index 0 of the draw pile is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDecks {
    pub draw: Vec<ComponentId>,
    pub hand: Vec<ComponentId>,
    pub discard: Vec<ComponentId>,
    pub table: Vec<ComponentId>,
}

impl PlayerDecks {
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &Vec<ComponentId> {
        match pile {
            Pile::Draw => &self.draw,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
            Pile::Table => &self.table,
        }
    }

    pub fn pile_mut(&mut self, pile: Pile) -> &mut Vec<ComponentId> {
        match pile {
            Pile::Draw => &mut self.draw,
            Pile::Hand => &mut self.hand,
            Pile::Discard => &mut self.discard,
            Pile::Table => &mut self.table,
        }
    }

    /// Every card the player owns.
    pub fn all(&self) -> impl Iterator<Item = ComponentId> + '_ {
        Pile::ALL.into_iter().flat_map(move |pile| self.pile(pile).iter().copied())
    }
}

/// A supply pile. Supply cards are counted, not instantiated; a card gets
/// an id when it is bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    pub kind: CardKind,
    pub count: u32,
}

/// Data of a deck-building match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deckbuilder {
    pub decks: PlayerMap<PlayerDecks>,
    pub supply: Vec<SupplyPile>,
    pub actions_left: u32,
    pub buys_left: u32,
    /// Coins granted by action cards this turn.
    pub additional_spend: u32,
    /// Coins spent on buys this turn.
    pub spent: u32,
}

impl Deckbuilder {
    /// A freshly set up match.
    #[must_use]
    pub fn new_game(params: DeckbuilderParams, player_count: usize) -> GameState<Self> {
        GameState::new(params, StandardTurnOrder::new(player_count))
    }

    #[must_use]
    pub fn supply_pile(&self, kind: CardKind) -> Option<&SupplyPile> {
        self.supply.iter().find(|pile| pile.kind == kind)
    }

    /// Number of supply piles that have run out.
    #[must_use]
    pub fn empty_supply_piles(&self) -> usize {
        self.supply.iter().filter(|pile| pile.count == 0).count()
    }
}

impl GameData for Deckbuilder {
    type Params = DeckbuilderParams;
    type Component = Card;
    type Phase = DeckbuilderPhase;
    type TurnOrder = StandardTurnOrder;
    type Action = DeckAction;

    fn setup(setup: &mut Setup<'_, DeckbuilderParams>) -> (Self, Vec<Card>) {
        let params = setup.params;
        let player_count = setup.player_count;
        assert!(
            player_count <= 6,
            "Deckbuilder supports 1-6 players, got {}",
            player_count
        );

        let mut cards = Vec::new();
        let mut decks: PlayerMap<PlayerDecks> = PlayerMap::with_default(player_count);
        for (_, player_decks) in decks.iter_mut() {
            let starting = std::iter::repeat(CardKind::Copper)
                .take(params.starting_coppers)
                .chain(std::iter::repeat(CardKind::Estate).take(params.starting_estates));
            for kind in starting {
                let id = setup.allocate();
                cards.push(Card { id, kind });
                player_decks.draw.push(id);
            }
            setup.rng.shuffle(&mut player_decks.draw);

            let hand_size = params.hand_size.min(player_decks.draw.len());
            player_decks.hand = player_decks.draw.drain(..hand_size).collect();
        }

        let supply = CardKind::BASE
            .iter()
            .chain(params.kingdom.iter())
            .map(|&kind| SupplyPile {
                kind,
                count: params.base_pile_size(kind, player_count),
            })
            .collect();

        let data = Deckbuilder {
            decks,
            supply,
            actions_left: 1,
            buys_left: 1,
            additional_spend: 0,
            spent: 0,
        };
        (data, cards)
    }

    fn reachable_ids(&self) -> Vec<ComponentId> {
        self.decks.iter().flat_map(|(_, decks)| decks.all()).collect()
    }

    fn score(state: &GameState<Self>, player: PlayerId) -> f64 {
        f64::from(state.victory_points(player))
    }

    /// The observer keeps their own hand and every face-up pile. Each
    /// player's hidden pool (draw pile, plus hand for everyone but the
    /// observer) is redealt from a shuffle of the cards in it.
    fn copy_for(
        state: &GameState<Self>,
        observer: Observer,
        rng: &mut GameRng,
    ) -> (Self, Vec<Card>) {
        let data = state.data().clone();
        let mut cards: Vec<Card> = state.all_components().iter().cloned().collect();

        if observer.player().is_some() {
            let mut redeal = FxHashMap::default();
            for (player, decks) in data.decks.iter() {
                let mut hidden = decks.draw.clone();
                if !observer.sees_private(player) {
                    hidden.extend(decks.hand.iter().copied());
                }

                let mut kinds: Vec<CardKind> = hidden
                    .iter()
                    .filter_map(|&id| state.component(id).map(|card| card.kind))
                    .collect();
                rng.shuffle(&mut kinds);
                redeal.extend(hidden.into_iter().zip(kinds));
            }

            for card in &mut cards {
                if let Some(&kind) = redeal.get(&card.id) {
                    card.kind = kind;
                }
            }
        }

        (data, cards)
    }

    /// Every draw pile is hidden from everyone; hands are hidden from the
    /// other players.
    fn unknown_component_ids(state: &GameState<Self>, player: PlayerId) -> Vec<ComponentId> {
        let mut unknown = Vec::new();
        for (owner, decks) in state.data().decks.iter() {
            unknown.extend(decks.draw.iter().copied());
            if owner != player {
                unknown.extend(decks.hand.iter().copied());
            }
        }
        unknown
    }
}

impl GameState<Deckbuilder> {
    /// Cards in one of `player`'s piles.
    #[must_use]
    pub fn deck(&self, player: PlayerId, pile: Pile) -> &[ComponentId] {
        self.data().decks[player].pile(pile)
    }

    #[must_use]
    pub fn card_kind(&self, id: ComponentId) -> Option<CardKind> {
        self.component(id).map(|card| card.kind)
    }

    /// Kinds of the cards in a pile, in pile order.
    #[must_use]
    pub fn pile_kinds(&self, player: PlayerId, pile: Pile) -> Vec<CardKind> {
        self.deck(player, pile)
            .iter()
            .filter_map(|&id| self.card_kind(id))
            .collect()
    }

    /// Each kind in a pile once, in order of first appearance.
    #[must_use]
    pub fn distinct_kinds(&self, player: PlayerId, pile: Pile) -> Vec<CardKind> {
        let mut kinds = Vec::new();
        for kind in self.pile_kinds(player, pile) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Create a new card and put it on a pile.
    pub fn add_card(&mut self, kind: CardKind, player: PlayerId, pile: Pile) -> ComponentId {
        let (data, registry, _) = self.parts_mut();
        let id = registry.allocate();
        registry.insert(Card { id, kind });
        data.decks[player].pile_mut(pile).push(id);
        id
    }

    /// Move the first card of `kind` from one pile to another.
    pub fn move_card(
        &mut self,
        player: PlayerId,
        kind: CardKind,
        from: Pile,
        to: Pile,
    ) -> Result<ComponentId, ActionError> {
        let index = self
            .deck(player, from)
            .iter()
            .position(|&id| self.card_kind(id) == Some(kind))
            .ok_or_else(|| ActionError::NotInPile {
                player,
                what: kind.name().to_string(),
                pile: from.name(),
            })?;

        let decks = &mut self.data_mut().decks[player];
        let id = decks.pile_mut(from).remove(index);
        decks.pile_mut(to).push(id);
        Ok(id)
    }

    /// Move the last card of one pile to another.
    pub fn move_top_card(&mut self, player: PlayerId, from: Pile, to: Pile) -> Option<ComponentId> {
        let decks = &mut self.data_mut().decks[player];
        let id = decks.pile_mut(from).pop()?;
        decks.pile_mut(to).push(id);
        Some(id)
    }

    /// Draw up to `count` cards into `player`'s hand, shuffling the discard
    /// pile into the draw pile when it runs out. Returns the number drawn.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> usize {
        let (data, _, rng) = self.parts_mut();
        let decks = &mut data.decks[player];

        let mut drawn = 0;
        while drawn < count {
            if decks.draw.is_empty() {
                if decks.discard.is_empty() {
                    break;
                }
                decks.draw.append(&mut decks.discard);
                rng.shuffle(&mut decks.draw);
            }
            let id = decks.draw.remove(0);
            decks.hand.push(id);
            drawn += 1;
        }
        drawn
    }

    /// Coins `player` can still spend this turn.
    #[must_use]
    pub fn available_spend(&self, player: PlayerId) -> u32 {
        let treasure: u32 = self
            .pile_kinds(player, Pile::Hand)
            .iter()
            .map(|kind| kind.treasure())
            .sum();
        (treasure + self.data().additional_spend).saturating_sub(self.data().spent)
    }

    #[must_use]
    pub fn actions_left(&self) -> u32 {
        self.data().actions_left
    }

    #[must_use]
    pub fn buys_left(&self) -> u32 {
        self.data().buys_left
    }

    #[must_use]
    pub fn victory_points(&self, player: PlayerId) -> i32 {
        self.data().decks[player]
            .all()
            .filter_map(|id| self.card_kind(id))
            .map(CardKind::victory_points)
            .sum()
    }

    /// Clean up the turn owner's cards, draw a new hand and pass the turn.
    pub fn end_of_turn(&mut self) {
        let player = self.turn_order().current_player();
        let hand_size = self.params().hand_size;

        let data = self.data_mut();
        let decks = &mut data.decks[player];
        let mut played = std::mem::take(&mut decks.table);
        let mut hand = std::mem::take(&mut decks.hand);
        decks.discard.append(&mut played);
        decks.discard.append(&mut hand);

        data.actions_left = 1;
        data.buys_left = 1;
        data.additional_spend = 0;
        data.spent = 0;

        self.draw_cards(player, hand_size);
        self.set_main_phase();
        self.end_player_turn();
    }
}
