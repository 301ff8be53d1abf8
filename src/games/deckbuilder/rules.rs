//! Turn structure and end of game.

use tracing::debug;

use crate::core::{ActionError, GameResult, GameState, PlayerId};
use crate::rules::ForwardModel;

use super::actions::DeckAction;
use super::cards::{CardKind, Pile};
use super::state::{Deckbuilder, DeckbuilderPhase};

/// Empty supply piles that end the game.
const EMPTY_PILES_TO_END: usize = 3;

/// Forward model of the deck-building game.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeckbuilderRules;

impl DeckbuilderRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Province pile exhausted, enough empty piles, or the round limit.
    #[must_use]
    pub fn is_game_over(&self, state: &GameState<Deckbuilder>) -> bool {
        let data = state.data();
        let provinces_gone = data
            .supply_pile(CardKind::Province)
            .map_or(true, |pile| pile.count == 0);
        let round_limit = state
            .params()
            .max_rounds
            .is_some_and(|limit| state.round() >= limit);

        provinces_gone || data.empty_supply_piles() >= EMPTY_PILES_TO_END || round_limit
    }

    /// Unique top score wins, tied top scores draw, everyone else loses.
    fn end_game(&self, state: &mut GameState<Deckbuilder>) {
        let scores: Vec<(PlayerId, i32)> = PlayerId::all(state.player_count())
            .map(|player| (player, state.victory_points(player)))
            .collect();
        let best = scores.iter().map(|&(_, score)| score).max().unwrap_or(0);
        let leaders = scores.iter().filter(|&&(_, score)| score == best).count();

        for &(player, score) in &scores {
            let result = match (score == best, leaders) {
                (true, 1) => GameResult::Win,
                (true, _) => GameResult::Draw,
                (false, _) => GameResult::Lose,
            };
            state.set_player_result(player, result);
        }
        state.set_game_status(GameResult::Ended);

        debug!(round = state.round(), ?scores, "game over");
    }
}

impl ForwardModel<Deckbuilder> for DeckbuilderRules {
    fn compute_available_actions(&self, state: &GameState<Deckbuilder>) -> Vec<DeckAction> {
        let player = state.current_player();
        let mut actions = Vec::new();

        match state.game_phase() {
            DeckbuilderPhase::Action => {
                if state.actions_left() > 0 {
                    actions.extend(
                        state
                            .distinct_kinds(player, Pile::Hand)
                            .into_iter()
                            .filter_map(|card| card.play_action(player)),
                    );
                }
            }
            DeckbuilderPhase::Buy => {
                if state.buys_left() > 0 {
                    let spend = state.available_spend(player);
                    actions.extend(
                        state
                            .data()
                            .supply
                            .iter()
                            .filter(|pile| pile.count > 0 && pile.kind.cost() <= spend)
                            .map(|pile| DeckAction::Buy {
                                player,
                                card: pile.kind,
                            }),
                    );
                }
            }
        }

        actions.push(DeckAction::EndPhase { player });
        actions
    }

    /// Leaves the action phase once actions run out and ends the turn once
    /// buys run out. The turn does not end otherwise.
    fn after_action(
        &self,
        state: &mut GameState<Deckbuilder>,
        _action: &DeckAction,
    ) -> Result<(), ActionError> {
        match state.game_phase() {
            DeckbuilderPhase::Action if state.actions_left() == 0 => {
                state.set_game_phase(DeckbuilderPhase::Buy);
            }
            DeckbuilderPhase::Buy if state.buys_left() == 0 => {
                state.end_of_turn();
            }
            _ => {}
        }

        if self.is_game_over(state) {
            self.end_game(state);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observer;
    use crate::games::deckbuilder::DeckbuilderParams;

    fn new_game(players: usize) -> GameState<Deckbuilder> {
        Deckbuilder::new_game(DeckbuilderParams::first_game(9), players)
    }

    #[test]
    fn test_initial_actions() {
        let state = new_game(2);
        let actions = DeckbuilderRules.legal_actions(&state);

        // Starting hands hold no action cards
        assert_eq!(
            actions,
            vec![DeckAction::EndPhase {
                player: PlayerId::new(0)
            }]
        );
    }

    #[test]
    fn test_buy_phase_actions_affordable() {
        let mut state = new_game(2);
        let rules = DeckbuilderRules::new();
        rules
            .next(&mut state, DeckAction::EndPhase { player: PlayerId::new(0) })
            .unwrap();
        assert_eq!(state.game_phase(), DeckbuilderPhase::Buy);

        let spend = state.available_spend(PlayerId::new(0));
        for action in rules.legal_actions(&state) {
            if let DeckAction::Buy { card, .. } = action {
                assert!(card.cost() <= spend);
            }
        }
    }

    #[test]
    fn test_buy_ends_turn() {
        let mut state = new_game(2);
        let rules = DeckbuilderRules::new();
        let player = PlayerId::new(0);
        rules.next(&mut state, DeckAction::EndPhase { player }).unwrap();
        rules
            .next(
                &mut state,
                DeckAction::Buy {
                    player,
                    card: CardKind::Copper,
                },
            )
            .unwrap();

        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.game_phase(), DeckbuilderPhase::Action);
        assert_eq!(state.deck(player, Pile::Discard).len(), 6);
        assert_eq!(
            state.history_as_text(),
            vec!["Player 0 : End Phase", "Player 0 : Buy Copper"]
        );
    }

    #[test]
    fn test_game_ends_when_provinces_run_out() {
        let mut state = new_game(2);
        let rules = DeckbuilderRules::new();
        let player = PlayerId::new(0);

        for pile in &mut state.data_mut().supply {
            if pile.kind == CardKind::Province {
                pile.count = 1;
            }
        }
        state.add_card(CardKind::Gold, player, Pile::Hand);
        state.add_card(CardKind::Gold, player, Pile::Hand);
        state.add_card(CardKind::Gold, player, Pile::Hand);
        rules.next(&mut state, DeckAction::EndPhase { player }).unwrap();
        rules
            .next(
                &mut state,
                DeckAction::Buy {
                    player,
                    card: CardKind::Province,
                },
            )
            .unwrap();

        assert!(!state.is_not_terminal());
        assert_eq!(state.game_status(), GameResult::Ended);
        assert_eq!(state.player_result(player), GameResult::Win);
        assert_eq!(state.player_result(PlayerId::new(1)), GameResult::Lose);
        assert!(rules.legal_actions(&state).is_empty());
    }

    #[test]
    fn test_round_limit_draw() {
        let mut state = Deckbuilder::new_game(DeckbuilderParams::first_game(1).max_rounds(1), 2);
        let rules = DeckbuilderRules::new();

        for _ in 0..4 {
            let player = state.current_player();
            rules.next(&mut state, DeckAction::EndPhase { player }).unwrap();
        }

        assert_eq!(state.round(), 1);
        assert_eq!(state.game_status(), GameResult::Ended);
        assert_eq!(state.player_result(PlayerId::new(0)), GameResult::Draw);
        assert_eq!(state.player_result(PlayerId::new(1)), GameResult::Draw);
    }

    #[test]
    fn test_observer_copy_plays_on() {
        let state = new_game(3);
        let mut copy = state.copy(Observer::Player(PlayerId::new(0)));
        let rules = DeckbuilderRules::new();

        let action = rules.legal_actions(&copy)[0].clone();
        rules.next(&mut copy, action).unwrap();
        assert_eq!(copy.game_phase(), DeckbuilderPhase::Buy);
        assert_eq!(state.game_phase(), DeckbuilderPhase::Action);
    }
}
