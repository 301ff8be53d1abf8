//! Game state: the kernel's snapshot of a match.
//!
//! ## GameData
//!
//! The game-specific payload and the operations only the game can answer:
//! initial setup, observer-scoped copying, scoring and the ids hidden from
//! a player. Everything else about a state is generic.
//!
//! ## GameState
//!
//! Complete state of one match:
//! - Shared parameters (ruleset and seed)
//! - Turn order
//! - Component registry (every piece, by id)
//! - Status, per-player results and phase
//! - Append-only history and the extended-action stack
//! - RNG
//! - The game's data
//!
//! ## Copying
//!
//! [`GameState::copy`] asks the game for a reduced copy of its data plus the
//! components that copy refers to, then rebuilds the registry from those
//! components. The copy shares nothing mutable with the original: parameters
//! are behind an `Arc` and read-only, history is a persistent vector of dead
//! records.

use std::sync::Arc;

use tracing::debug;

use super::action::Action;
use super::component::{Component, ComponentId, ComponentIds};
use super::config::{GamePhase, GameResult, Parameters};
use super::history::{ActionRecord, History};
use super::player::{Observer, PlayerId, PlayerMap};
use super::registry::ComponentRegistry;
use super::rng::GameRng;
use crate::stack::ActionStack;
use crate::turns::TurnOrder;

/// Game-specific payload of a [`GameState`].
///
/// Pieces are referenced by [`ComponentId`] inside the data; the pieces
/// themselves are handed to the kernel, which keeps them in the registry.
pub trait GameData: Clone + PartialEq + std::fmt::Debug + Sized {
    /// Immutable ruleset configuration.
    type Params: Parameters;
    /// Piece type stored in the registry.
    type Component: Component;
    /// Phase enumeration.
    type Phase: GamePhase;
    /// Turn order policy.
    type TurnOrder: TurnOrder;
    /// Every move of the game.
    type Action: Action<Self>;

    /// Build fresh data for a new match, returning the components it refers to.
    ///
    /// Component ids must come from [`Setup::allocate`].
    fn setup(setup: &mut Setup<'_, Self::Params>) -> (Self, Vec<Self::Component>);

    /// Ids of every component the data refers to.
    fn reachable_ids(&self) -> Vec<ComponentId>;

    /// Subjective evaluation of `player`'s position; higher is better.
    fn score(state: &GameState<Self>, player: PlayerId) -> f64;

    /// Deep copy of the data reduced to what `observer` may see, plus the
    /// components it refers to.
    ///
    /// Hidden components may be omitted or replaced with randomized
    /// equivalents, drawing from `rng`. The default is a full copy, which
    /// suits perfect-information games.
    fn copy_for(
        state: &GameState<Self>,
        _observer: Observer,
        _rng: &mut GameRng,
    ) -> (Self, Vec<Self::Component>) {
        (
            state.data().clone(),
            state.all_components().iter().cloned().collect(),
        )
    }

    /// Ids of components `player` cannot see.
    fn unknown_component_ids(_state: &GameState<Self>, _player: PlayerId) -> Vec<ComponentId> {
        Vec::new()
    }
}

/// Everything a game needs to build its initial data.
pub struct Setup<'a, P> {
    pub params: &'a P,
    pub player_count: usize,
    pub rng: &'a mut GameRng,
    ids: &'a mut ComponentIds,
}

impl<P> Setup<'_, P> {
    /// Allocate an id for a new component.
    pub fn allocate(&mut self) -> ComponentId {
        self.ids.allocate()
    }
}

/// Complete state of one match.
#[derive(Debug)]
pub struct GameState<D: GameData> {
    params: Arc<D::Params>,
    turn_order: D::TurnOrder,
    registry: ComponentRegistry<D::Component>,
    status: GameResult,
    player_results: PlayerMap<GameResult>,
    phase: D::Phase,
    history: History<D::Action>,
    stack: ActionStack<D::Action>,
    rng: GameRng,
    data: D,
}

impl<D: GameData> GameState<D> {
    /// Create a state and reset it.
    #[must_use]
    pub fn new(params: D::Params, turn_order: D::TurnOrder) -> Self {
        Self::build(Arc::new(params), turn_order, ComponentIds::new())
    }

    /// Build initial state, allocating component ids from `ids`.
    fn build(params: Arc<D::Params>, mut turn_order: D::TurnOrder, mut ids: ComponentIds) -> Self {
        turn_order.reset();
        let player_count = turn_order.player_count();
        let seed = params.random_seed();

        let mut rng = GameRng::new(seed);
        let first_id = ids.peek();
        let (data, components) = D::setup(&mut Setup {
            params: params.as_ref(),
            player_count,
            rng: &mut rng,
            ids: &mut ids,
        });

        let mut registry = ComponentRegistry::with_ids(ids);
        registry.put_all(components);

        let state = Self {
            params,
            turn_order,
            registry,
            status: GameResult::Ongoing,
            player_results: PlayerMap::with_value(player_count, GameResult::Ongoing),
            phase: D::Phase::main(),
            history: History::new(),
            stack: ActionStack::new(),
            rng,
            data,
        };
        state.debug_assert_reachable();

        debug!(
            seed,
            player_count,
            components = state.registry.len(),
            %first_id,
            "reset state"
        );
        state
    }

    /// Return to the initial state for the current parameters.
    ///
    /// Clears history and the action stack, reseeds the RNG and rebuilds
    /// the game data and registry. New components continue this state's id
    /// sequence, so an id held from before the reset never names a new piece.
    pub fn reset(&mut self) {
        let ids = self.registry.ids();
        *self = Self::build(Arc::clone(&self.params), self.turn_order.clone(), ids);
    }

    /// Overwrite the parameters' seed, then reset.
    pub fn reset_with_seed(&mut self, seed: u64) {
        Arc::make_mut(&mut self.params).set_random_seed(seed);
        self.reset();
    }

    /// Copy reduced to what `observer` may see.
    ///
    /// The RNG of a player-scoped copy is an independent stream derived from
    /// this state's, so the copy cannot replay the original's future draws.
    #[must_use]
    pub fn copy(&self, observer: Observer) -> Self {
        let mut rng = match observer.player() {
            None => self.rng.clone(),
            Some(player) => {
                assert!(
                    player.index() < self.player_count(),
                    "Observer {} outside table of {}",
                    player,
                    self.player_count()
                );
                self.rng.derive("observer", u64::from(player.0))
            }
        };

        let (data, components) = D::copy_for(self, observer, &mut rng);
        let mut registry = ComponentRegistry::with_ids(self.registry.ids());
        registry.put_all(components);

        let copy = Self {
            params: Arc::clone(&self.params),
            turn_order: self.turn_order.clone(),
            registry,
            status: self.status,
            player_results: self.player_results.clone(),
            phase: self.phase,
            history: self.history.clone(),
            stack: self.stack.clone(),
            rng,
            data,
        };
        copy.debug_assert_reachable();

        debug!(?observer, components = copy.registry.len(), "copied state");
        copy
    }

    /// Copy with no information hidden.
    #[must_use]
    pub fn copy_full(&self) -> Self {
        self.copy(Observer::Full)
    }

    fn debug_assert_reachable(&self) {
        if cfg!(debug_assertions) {
            for id in self.data.reachable_ids() {
                assert!(
                    self.registry.contains(id),
                    "{} is reachable from game data but not registered",
                    id
                );
            }
        }
    }

    // === Evaluation ===

    /// Subjective evaluation of `player`'s position; higher is better.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> f64 {
        D::score(self, player)
    }

    /// Ids of components `player` cannot see in this state.
    #[must_use]
    pub fn unknown_component_ids(&self, player: PlayerId) -> Vec<ComponentId> {
        D::unknown_component_ids(self, player)
    }

    // === Turn and status ===

    /// The player who makes the next decision.
    ///
    /// While an extended action is in progress it may nominate someone
    /// other than the turn owner.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.stack
            .top()
            .and_then(|action| action.acting_player(self))
            .unwrap_or_else(|| self.turn_order.current_player())
    }

    #[must_use]
    pub fn game_status(&self) -> GameResult {
        self.status
    }

    /// Set the overall status.
    ///
    /// Panics if the status is already terminal.
    pub fn set_game_status(&mut self, status: GameResult) {
        assert!(
            !self.status.is_terminal(),
            "Game status is already {}, cannot change it to {}",
            self.status,
            status
        );
        self.status = status;
    }

    #[must_use]
    pub fn player_results(&self) -> &PlayerMap<GameResult> {
        &self.player_results
    }

    #[must_use]
    pub fn player_result(&self, player: PlayerId) -> GameResult {
        self.player_results[player]
    }

    pub fn set_player_result(&mut self, player: PlayerId, result: GameResult) {
        self.player_results[player] = result;
    }

    /// Check if the game is still ongoing.
    #[must_use]
    pub fn is_not_terminal(&self) -> bool {
        self.status == GameResult::Ongoing
    }

    #[must_use]
    pub fn game_phase(&self) -> D::Phase {
        self.phase
    }

    pub fn set_game_phase(&mut self, phase: D::Phase) {
        self.phase = phase;
    }

    /// Return to the game's main phase.
    pub fn set_main_phase(&mut self) {
        self.phase = D::Phase::main();
    }

    #[must_use]
    pub fn turn_order(&self) -> &D::TurnOrder {
        &self.turn_order
    }

    pub fn turn_order_mut(&mut self) -> &mut D::TurnOrder {
        &mut self.turn_order
    }

    /// End the turn owner's turn.
    pub fn end_player_turn(&mut self) {
        self.turn_order.end_player_turn();
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.turn_order.player_count()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn_order.turn()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.turn_order.round()
    }

    // === Components ===

    /// Look up a component. Absence is not an error.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&D::Component> {
        self.registry.get(id)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut D::Component> {
        self.registry.get_mut(id)
    }

    #[must_use]
    pub fn all_components(&self) -> &ComponentRegistry<D::Component> {
        &self.registry
    }

    /// Split borrow of the pieces actions usually mutate together.
    pub fn parts_mut(&mut self) -> (&mut D, &mut ComponentRegistry<D::Component>, &mut GameRng) {
        (&mut self.data, &mut self.registry, &mut self.rng)
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &History<D::Action> {
        &self.history
    }

    /// History lines, `"Player {p} : {description}"`.
    #[must_use]
    pub fn history_as_text(&self) -> Vec<String> {
        self.history.texts()
    }

    pub(crate) fn record_action(&mut self, record: ActionRecord<D::Action>) {
        self.history.push(record);
    }

    // === Action stack ===

    #[must_use]
    pub fn action_stack(&self) -> &ActionStack<D::Action> {
        &self.stack
    }

    pub(crate) fn action_stack_mut(&mut self) -> &mut ActionStack<D::Action> {
        &mut self.stack
    }

    /// The extended action currently in control, if any.
    #[must_use]
    pub fn current_action_in_progress(&self) -> Option<&D::Action> {
        self.stack.top()
    }

    #[must_use]
    pub fn is_action_in_progress(&self) -> bool {
        !self.stack.is_empty()
    }

    // === Accessors ===

    #[must_use]
    pub fn params(&self) -> &D::Params {
        &self.params
    }

    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

impl<D: GameData> Clone for GameState<D> {
    fn clone(&self) -> Self {
        self.copy_full()
    }
}

/// Value equality over everything that defines a position. History and the
/// RNG are not compared.
impl<D: GameData> PartialEq for GameState<D> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && self.turn_order == other.turn_order
            && self.registry == other.registry
            && self.status == other.status
            && self.player_results == other.player_results
            && self.phase == other.phase
            && self.stack == other.stack
            && self.data == other.data
    }
}
