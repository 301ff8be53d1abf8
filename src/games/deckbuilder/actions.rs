//! Deck-builder moves.
//!
//! Most cards resolve in one step. Two open an extended sequence:
//!
//! - [`Cellar`]: its player discards any number of cards one at a time, then
//!   draws as many as were discarded.
//! - [`Militia`]: every other player, in seat order after the attacker,
//!   discards down to the attack hand limit. The player discarding is the
//!   acting player while they do.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameState, Outcome, PlayerId};

use super::cards::{CardKind, Pile};
use super::state::{Deckbuilder, DeckbuilderPhase};

/// Every move of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckAction {
    /// Play a single-step action card from hand.
    Play { player: PlayerId, card: CardKind },
    Cellar(Cellar),
    Militia(Militia),
    /// Discard a card of this kind from hand.
    Discard { player: PlayerId, card: CardKind },
    /// Buy a card from the supply into the discard pile.
    Buy { player: PlayerId, card: CardKind },
    /// Leave the action phase, or end the turn from the buy phase.
    EndPhase { player: PlayerId },
    DoNothing { player: PlayerId },
}

/// Discard any number of cards, then draw that many.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cellar {
    pub player: PlayerId,
    pub discarded: u32,
    pub finished: bool,
}

impl Cellar {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            discarded: 0,
            finished: false,
        }
    }
}

/// +2 coins; every other player discards down to the attack hand limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Militia {
    pub player: PlayerId,
}

impl Militia {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }

    /// The next player who still has to discard.
    #[must_use]
    pub fn victim(&self, state: &GameState<Deckbuilder>) -> Option<PlayerId> {
        let player_count = state.player_count();
        let limit = state.params().attack_hand_limit;
        (1..player_count as i32)
            .map(|offset| self.player.rotate(offset, player_count))
            .find(|&other| state.deck(other, Pile::Hand).len() > limit)
    }
}

/// Move an action card from hand to table and apply its bonus.
fn play_card(
    state: &mut GameState<Deckbuilder>,
    player: PlayerId,
    card: CardKind,
) -> Result<(), ActionError> {
    if state.game_phase() != DeckbuilderPhase::Action {
        return Err(ActionError::Illegal(format!(
            "{} can only be played in the action phase",
            card
        )));
    }
    if state.actions_left() == 0 {
        return Err(ActionError::Illegal(format!("{} has no actions left", player)));
    }

    state.move_card(player, card, Pile::Hand, Pile::Table)?;

    let bonus = card.bonus();
    let data = state.data_mut();
    data.actions_left = data.actions_left - 1 + bonus.actions;
    data.buys_left += bonus.buys;
    data.additional_spend += bonus.coins;
    state.draw_cards(player, bonus.cards as usize);
    Ok(())
}

fn buy_card(
    state: &mut GameState<Deckbuilder>,
    player: PlayerId,
    card: CardKind,
) -> Result<(), ActionError> {
    if state.game_phase() != DeckbuilderPhase::Buy {
        return Err(ActionError::Illegal("cards are bought in the buy phase".into()));
    }
    if state.buys_left() == 0 {
        return Err(ActionError::Illegal(format!("{} has no buys left", player)));
    }
    let cost = card.cost();
    if state.available_spend(player) < cost {
        return Err(ActionError::Illegal(format!("{} cannot afford {}", player, card)));
    }

    let data = state.data_mut();
    let pile = data
        .supply
        .iter_mut()
        .find(|pile| pile.kind == card && pile.count > 0)
        .ok_or_else(|| ActionError::Illegal(format!("no {} left in the supply", card)))?;
    pile.count -= 1;
    data.buys_left -= 1;
    data.spent += cost;

    state.add_card(card, player, Pile::Discard);
    Ok(())
}

impl Action<Deckbuilder> for DeckAction {
    fn execute(&self, state: &mut GameState<Deckbuilder>) -> Result<Outcome, ActionError> {
        match self {
            DeckAction::Play { player, card } => {
                play_card(state, *player, *card)?;
                Ok(Outcome::Complete)
            }
            DeckAction::Cellar(cellar) => {
                play_card(state, cellar.player, CardKind::Cellar)?;
                Ok(Outcome::Extended)
            }
            DeckAction::Militia(militia) => {
                play_card(state, militia.player, CardKind::Militia)?;
                Ok(Outcome::Extended)
            }
            DeckAction::Discard { player, card } => {
                state.move_card(*player, *card, Pile::Hand, Pile::Discard)?;
                Ok(Outcome::Complete)
            }
            DeckAction::Buy { player, card } => {
                buy_card(state, *player, *card)?;
                Ok(Outcome::Complete)
            }
            DeckAction::EndPhase { .. } => {
                match state.game_phase() {
                    DeckbuilderPhase::Action => state.set_game_phase(DeckbuilderPhase::Buy),
                    DeckbuilderPhase::Buy => state.end_of_turn(),
                }
                Ok(Outcome::Complete)
            }
            DeckAction::DoNothing { .. } => Ok(Outcome::Complete),
        }
    }

    fn describe(&self, _state: &GameState<Deckbuilder>) -> String {
        match self {
            DeckAction::Play { card, .. } => format!("Play {}", card),
            DeckAction::Cellar(_) => "Play Cellar".to_string(),
            DeckAction::Militia(_) => "Play Militia".to_string(),
            DeckAction::Discard { card, .. } => format!("Discard {}", card),
            DeckAction::Buy { card, .. } => format!("Buy {}", card),
            DeckAction::EndPhase { .. } => "End Phase".to_string(),
            DeckAction::DoNothing { .. } => "Do Nothing".to_string(),
        }
    }

    fn no_op(player: PlayerId) -> Self {
        DeckAction::DoNothing { player }
    }

    fn legal_follow_ups(&self, state: &GameState<Deckbuilder>) -> Vec<Self> {
        match self {
            DeckAction::Cellar(cellar) => {
                let player = cellar.player;
                let mut follow_ups: Vec<_> = state
                    .distinct_kinds(player, Pile::Hand)
                    .into_iter()
                    .map(|card| DeckAction::Discard { player, card })
                    .collect();
                follow_ups.push(DeckAction::DoNothing { player });
                follow_ups
            }
            DeckAction::Militia(militia) => match militia.victim(state) {
                Some(victim) => state
                    .distinct_kinds(victim, Pile::Hand)
                    .into_iter()
                    .map(|card| DeckAction::Discard {
                        player: victim,
                        card,
                    })
                    .collect(),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn is_sequence_complete(&self, state: &GameState<Deckbuilder>) -> bool {
        match self {
            DeckAction::Cellar(cellar) => cellar.finished,
            DeckAction::Militia(militia) => militia.victim(state).is_none(),
            _ => true,
        }
    }

    fn on_follow_up_chosen(
        &mut self,
        state: &mut GameState<Deckbuilder>,
        chosen: &Self,
    ) -> Result<(), ActionError> {
        if let DeckAction::Cellar(cellar) = self {
            match chosen {
                DeckAction::Discard { .. } => cellar.discarded += 1,
                DeckAction::DoNothing { .. } => {
                    state.draw_cards(cellar.player, cellar.discarded as usize);
                    cellar.finished = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn acting_player(&self, state: &GameState<Deckbuilder>) -> Option<PlayerId> {
        match self {
            DeckAction::Cellar(cellar) => Some(cellar.player),
            DeckAction::Militia(militia) => militia.victim(state),
            _ => None,
        }
    }
}
