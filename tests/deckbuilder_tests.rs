//! Deckbuilder rule tests.
//!
//! These tests drive the reference game through the forward model:
//! - Single-step action cards and their bonuses
//! - Extended actions (Cellar, Militia) on the action stack
//! - Copy equality after divergent play

use tabletop_kernel::core::{GameRng, GameState, Observer, PlayerId, Transcript};
use tabletop_kernel::games::deckbuilder::{
    Cellar, CardKind, DeckAction, Deckbuilder, DeckbuilderParams, DeckbuilderPhase,
    DeckbuilderRules, Pile,
};
use tabletop_kernel::rules::ForwardModel;

fn four_player_game() -> GameState<Deckbuilder> {
    Deckbuilder::new_game(DeckbuilderParams::first_game(373), 4)
}

fn hand_size(state: &GameState<Deckbuilder>, player: u8) -> usize {
    state.deck(PlayerId::new(player), Pile::Hand).len()
}

/// Play an action card that was just put into `player`'s hand.
fn play(state: &mut GameState<Deckbuilder>, kind: CardKind, player: u8) {
    let player = PlayerId::new(player);
    state.add_card(kind, player, Pile::Hand);
    let action = kind.play_action(player).expect("action card");
    DeckbuilderRules.next(state, action).unwrap();
}

/// Resolve discard decisions at random until `until` holds the decision
/// again. Returns the number of discards each player made.
fn resolve_discards(state: &mut GameState<Deckbuilder>, until: u8) -> Vec<usize> {
    let mut rng = GameRng::new(373);
    let mut discards = vec![0; state.player_count()];

    while state.current_player() != PlayerId::new(until) {
        let actions = DeckbuilderRules.legal_actions(state);
        assert!(actions
            .iter()
            .all(|a| matches!(a, DeckAction::Discard { .. })));

        let player = state.current_player();
        let choice = actions[rng.gen_range_usize(0..actions.len())].clone();
        DeckbuilderRules.next(state, choice).unwrap();
        discards[player.index()] += 1;
    }
    discards
}

// =============================================================================
// Single-step action cards
// =============================================================================

/// Village: +1 card +2 actions, card moves from hand to table.
#[test]
fn test_village() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Village, 0);

    assert_eq!(hand_size(&state, 0), 6);
    assert_eq!(state.deck(PlayerId::new(0), Pile::Table).len(), 1);
    assert_eq!(state.actions_left(), 2);
    assert_eq!(state.game_phase(), DeckbuilderPhase::Action);
}

/// Smithy uses the last action, so the buy phase starts.
#[test]
fn test_smithy() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Smithy, 0);

    assert_eq!(hand_size(&state, 0), 8);
    assert_eq!(state.deck(PlayerId::new(0), Pile::Table).len(), 1);
    assert_eq!(state.actions_left(), 0);
    assert_eq!(state.game_phase(), DeckbuilderPhase::Buy);
}

#[test]
fn test_laboratory() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Laboratory, 0);

    assert_eq!(hand_size(&state, 0), 7);
    assert_eq!(state.actions_left(), 1);
}

#[test]
fn test_market() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Market, 0);

    let player = PlayerId::new(0);
    let treasure: u32 = state
        .pile_kinds(player, Pile::Hand)
        .iter()
        .map(|kind| kind.treasure())
        .sum();
    assert_eq!(hand_size(&state, 0), 6);
    assert_eq!(state.actions_left(), 1);
    assert_eq!(state.buys_left(), 2);
    assert_eq!(state.available_spend(player), treasure + 1);
    assert_eq!(state.game_phase(), DeckbuilderPhase::Action);
}

#[test]
fn test_festival() {
    let mut state = four_player_game();
    let money = state.available_spend(PlayerId::new(0));
    play(&mut state, CardKind::Festival, 0);

    assert_eq!(hand_size(&state, 0), 5);
    assert_eq!(state.actions_left(), 2);
    assert_eq!(state.buys_left(), 2);
    assert_eq!(state.available_spend(PlayerId::new(0)), money + 2);
}

/// Every player's cards stay in their own piles.
#[test]
fn test_play_only_touches_own_piles() {
    let mut state = four_player_game();
    let before: Vec<_> = (1..4)
        .map(|p| state.pile_kinds(PlayerId::new(p), Pile::Hand))
        .collect();
    play(&mut state, CardKind::Laboratory, 0);

    for p in 1..4 {
        assert_eq!(state.pile_kinds(PlayerId::new(p), Pile::Hand), before[p as usize - 1]);
    }
}

// =============================================================================
// Cellar
// =============================================================================

/// Cellar stays in progress and offers a discard per kind plus stopping.
#[test]
fn test_cellar_base() {
    let mut state = four_player_game();
    let player = PlayerId::new(0);
    state.add_card(CardKind::Estate, player, Pile::Hand);
    play(&mut state, CardKind::Cellar, 0);

    assert_eq!(state.game_phase(), DeckbuilderPhase::Action);
    assert_eq!(
        state.current_action_in_progress(),
        Some(&DeckAction::Cellar(Cellar::new(player)))
    );
    assert_eq!(hand_size(&state, 0), 6);
    assert_eq!(state.deck(player, Pile::Table).len(), 1);
    assert_eq!(state.actions_left(), 1);

    let actions = DeckbuilderRules.legal_actions(&state);
    assert_eq!(actions.len(), 3);
    assert!(actions.contains(&DeckAction::Discard {
        player,
        card: CardKind::Estate
    }));
    assert!(actions.contains(&DeckAction::Discard {
        player,
        card: CardKind::Copper
    }));
    assert!(actions.contains(&DeckAction::DoNothing { player }));
}

/// Cellar draws as many cards as were discarded once its player stops.
#[test]
fn test_cellar_discards_and_draws() {
    let mut state = four_player_game();
    let player = PlayerId::new(0);
    state.add_card(CardKind::Estate, player, Pile::Hand);
    play(&mut state, CardKind::Cellar, 0);

    for card in [CardKind::Estate, CardKind::Copper, CardKind::Copper] {
        DeckbuilderRules
            .next(&mut state, DeckAction::Discard { player, card })
            .unwrap();
    }
    assert_eq!(state.deck(player, Pile::Discard).len(), 3);
    assert_eq!(hand_size(&state, 0), 3);
    assert_eq!(state.deck(player, Pile::Draw).len(), 5);
    assert!(state.is_action_in_progress());

    DeckbuilderRules
        .next(&mut state, DeckAction::DoNothing { player })
        .unwrap();
    assert_eq!(state.deck(player, Pile::Discard).len(), 3);
    assert_eq!(hand_size(&state, 0), 6);
    assert_eq!(state.deck(player, Pile::Draw).len(), 2);
    assert_eq!(state.current_action_in_progress(), None);

    assert_eq!(
        DeckbuilderRules.legal_actions(&state),
        vec![DeckAction::EndPhase { player }]
    );
}

// =============================================================================
// Militia
// =============================================================================

/// Every other player discards from 5 down to 3, in seat order after the
/// attacker, and the decision then returns to the attacker.
#[test]
fn test_militia_discards_down_to_limit() {
    let mut state = four_player_game();
    state.end_of_turn();
    state.end_of_turn();
    assert_eq!(state.current_player(), PlayerId::new(2));
    for p in [0, 1, 3] {
        assert_eq!(hand_size(&state, p), 5);
    }

    let start = state.available_spend(PlayerId::new(2));
    play(&mut state, CardKind::Militia, 2);
    assert_eq!(state.current_player(), PlayerId::new(3));
    assert_eq!(state.available_spend(PlayerId::new(2)), start + 2);

    let discards = resolve_discards(&mut state, 2);
    assert_eq!(discards, vec![2, 2, 0, 2]);
    for p in [0, 1, 3] {
        assert_eq!(hand_size(&state, p), 3);
    }
    assert!(!state.is_action_in_progress());
}

/// Players already at or below the limit are never asked to discard.
#[test]
fn test_militia_skips_small_hands() {
    let mut state = four_player_game();
    state.end_of_turn();
    state.end_of_turn();
    state.end_of_turn();
    assert_eq!(state.current_player(), PlayerId::new(3));

    for _ in 0..3 {
        state.move_top_card(PlayerId::new(0), Pile::Hand, Pile::Discard);
    }
    for _ in 0..2 {
        state.move_top_card(PlayerId::new(2), Pile::Hand, Pile::Discard);
    }
    assert_eq!(hand_size(&state, 0), 2);
    assert_eq!(hand_size(&state, 1), 5);
    assert_eq!(hand_size(&state, 2), 3);

    play(&mut state, CardKind::Militia, 3);
    assert_eq!(state.current_player(), PlayerId::new(1));

    let discards = resolve_discards(&mut state, 3);
    assert_eq!(discards, vec![0, 2, 0, 0]);
    assert_eq!(hand_size(&state, 0), 2);
    assert_eq!(hand_size(&state, 1), 3);
    assert_eq!(hand_size(&state, 2), 3);
}

/// With nobody to attack, Militia resolves at once.
#[test]
fn test_militia_without_victims() {
    let mut state = four_player_game();
    for p in 1..4 {
        state.move_top_card(PlayerId::new(p), Pile::Hand, Pile::Discard);
        state.move_top_card(PlayerId::new(p), Pile::Hand, Pile::Discard);
    }

    play(&mut state, CardKind::Militia, 0);
    assert!(!state.is_action_in_progress());
    assert_eq!(state.game_phase(), DeckbuilderPhase::Buy);
    assert_eq!(state.current_player(), PlayerId::new(0));
}

/// History attributes each discard to the player who made it.
#[test]
fn test_militia_history() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Militia, 0);
    resolve_discards(&mut state, 0);

    let texts = state.history_as_text();
    assert_eq!(texts[0], "Player 0 : Play Militia");
    assert!(texts[1].starts_with("Player 1 : Discard"));
    assert!(texts[3].starts_with("Player 2 : Discard"));
    assert!(texts[5].starts_with("Player 3 : Discard"));
    assert_eq!(texts.len(), 7);
}

// =============================================================================
// Copies
// =============================================================================

/// Copies of the same state are equal until they diverge.
#[test]
fn test_copies_diverge() {
    let mut state = four_player_game();
    let player = PlayerId::new(0);
    state.add_card(CardKind::Village, player, Pile::Hand);

    let mut a = state.copy_full();
    let mut b = state.copy_full();
    assert_eq!(a, b);

    DeckbuilderRules
        .next(&mut a, CardKind::Village.play_action(player).unwrap())
        .unwrap();
    DeckbuilderRules
        .next(&mut b, DeckAction::EndPhase { player })
        .unwrap();
    assert_ne!(a, b);
    assert_ne!(a, state);
    assert_ne!(b, state);
}

/// Two copies for the same observer redeal hidden cards identically.
#[test]
fn test_observer_copies_are_deterministic() {
    let state = four_player_game();
    let observer = Observer::Player(PlayerId::new(2));

    assert_eq!(state.copy(observer), state.copy(observer));
}

/// A copy taken mid-sequence continues the same sequence.
#[test]
fn test_copy_during_militia() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Militia, 0);

    let mut copy = state.copy_full();
    assert_eq!(copy.current_player(), PlayerId::new(1));
    resolve_discards(&mut copy, 0);

    assert!(state.is_action_in_progress());
    assert_eq!(hand_size(&state, 1), 5);
    assert_eq!(hand_size(&copy, 1), 3);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_transcript_round_trip() {
    let mut state = four_player_game();
    let player = PlayerId::new(0);
    DeckbuilderRules
        .next(&mut state, DeckAction::EndPhase { player })
        .unwrap();
    DeckbuilderRules
        .next(&mut state, DeckAction::EndPhase { player })
        .unwrap();

    let transcript = state.history().transcript();
    let decoded = Transcript::from_bytes(&transcript.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded.lines.len(), 2);
    assert_eq!(decoded.lines[1].text, "Player 0 : End Phase");
    assert_eq!(decoded.lines[1].turn, 0);
}

#[test]
fn test_reset_clears_history() {
    let mut state = four_player_game();
    play(&mut state, CardKind::Smithy, 0);
    assert_eq!(state.history().len(), 1);

    state.reset();
    assert!(state.history().is_empty());

    let fresh = four_player_game();
    assert_eq!(state.data().supply, fresh.data().supply);
    assert_eq!(state.game_phase(), fresh.game_phase());
    assert_eq!(state.turn(), fresh.turn());
    for player in PlayerId::all(4) {
        assert_eq!(
            state.pile_kinds(player, Pile::Hand),
            fresh.pile_kinds(player, Pile::Hand)
        );
        assert_eq!(
            state.pile_kinds(player, Pile::Draw),
            fresh.pile_kinds(player, Pile::Draw)
        );
    }
}

/// A card id held from before a reset never names a new card.
#[test]
fn test_reset_keeps_old_ids_dead() {
    let mut state = four_player_game();
    let gold = state.add_card(CardKind::Gold, PlayerId::new(0), Pile::Hand);

    state.reset();
    assert_eq!(state.card_kind(gold), None);
    assert!(state.all_components().iter().all(|card| card.id > gold));

    let copper = state.add_card(CardKind::Copper, PlayerId::new(0), Pile::Hand);
    assert_ne!(copper, gold);
    assert_eq!(state.card_kind(gold), None);
    assert_eq!(state.card_kind(copper), Some(CardKind::Copper));
}
