//! Forward model trait for game implementations.

use tracing::{debug, trace, warn};

use crate::core::{Action, ActionError, ActionRecord, GameData, GameState, Outcome};

/// Forward model trait.
///
/// Games implement this trait to define their rules. Agents and search call
/// [`legal_actions`](ForwardModel::legal_actions) and
/// [`next`](ForwardModel::next); neither should be overridden.
///
/// ## Stack discipline
///
/// - While the action stack is non-empty, legal moves are the top frame's
///   follow-ups. If it has none, the only legal move is
///   `Action::no_op(current_player)`.
/// - An action executing as [`Outcome::Extended`] is pushed and becomes the
///   controlling context.
/// - After every move, frames reporting their sequence complete are popped,
///   re-testing each newly exposed frame until one is incomplete or the stack
///   is empty.
/// - A frame that had no legal follow-up when a move was applied beneath it
///   is popped regardless of what it reports, so the no-op always makes
///   progress.
/// - `after_action` runs only once the stack is empty.
pub trait ForwardModel<D: GameData> {
    /// Legal actions for the current player when no extended action is in
    /// progress.
    ///
    /// Must be stable: the same state always yields the same list.
    fn compute_available_actions(&self, state: &GameState<D>) -> Vec<D::Action>;

    /// Advance the game after an action has fully resolved.
    ///
    /// The default ends the current player's turn.
    fn after_action(&self, state: &mut GameState<D>, _action: &D::Action) -> Result<(), ActionError> {
        state.end_player_turn();
        Ok(())
    }

    // === Provided ===

    /// Enumerate every legal action for the current player.
    ///
    /// Empty only when the game is over.
    fn legal_actions(&self, state: &GameState<D>) -> Vec<D::Action> {
        if !state.is_not_terminal() {
            return Vec::new();
        }

        match state.current_action_in_progress() {
            Some(top) => {
                let follow_ups = top.legal_follow_ups(state);
                if follow_ups.is_empty() {
                    let player = state.current_player();
                    debug!(%player, action = ?top, "no legal follow-up, offering no-op");
                    vec![<D::Action as Action<D>>::no_op(player)]
                } else {
                    follow_ups
                }
            }
            None => self.compute_available_actions(state),
        }
    }

    /// Apply `action` for the current player.
    ///
    /// The action is recorded in history only once it has executed and the
    /// extended action it answers (if any) has accepted it. Errors are
    /// returned as-is; nothing is retried. A rejected follow-up leaves the
    /// extended action on the stack and the turn where it was, though the
    /// effects of `execute` are not rolled back.
    fn next(&self, state: &mut GameState<D>, action: D::Action) -> Result<(), ActionError> {
        if !state.is_not_terminal() {
            return Err(ActionError::GameOver);
        }

        let player = state.current_player();
        let record = ActionRecord {
            player,
            text: format!("{} : {}", player, action.describe(state)),
            action: action.clone(),
            turn: state.turn(),
            round: state.round(),
        };
        let exhausted = state
            .current_action_in_progress()
            .is_some_and(|top| top.legal_follow_ups(state).is_empty());

        trace!(%player, text = %record.text, "applying action");
        let outcome = action.execute(state)?;

        if let Some(mut parent) = state.action_stack_mut().pop() {
            let chosen = parent.on_follow_up_chosen(state, &action);
            if exhausted {
                warn!(action = ?parent, "dropping extended action with no legal follow-up");
            } else {
                state.action_stack_mut().push(parent);
            }
            chosen?;
        }
        state.record_action(record);

        if outcome == Outcome::Extended {
            debug!(action = ?action, depth = state.action_stack().len() + 1, "pushing extended action");
            state.action_stack_mut().push(action.clone());
        }

        while let Some(top) = state.action_stack().top() {
            if !top.is_sequence_complete(state) {
                break;
            }
            if let Some(done) = state.action_stack_mut().pop() {
                debug!(action = ?done, "extended action complete");
            }
        }

        if state.action_stack().is_empty() {
            self.after_action(state, &action)?;
        }
        Ok(())
    }
}
