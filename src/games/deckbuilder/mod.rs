//! A small deck-building card game.
//!
//! Each player starts with 7 Coppers and 3 Estates, draws 5 and on their
//! turn:
//! - **Action phase**: plays action cards while they have actions left
//! - **Buy phase**: buys cards from the supply with the treasure in hand
//! - **Cleanup**: hand and played cards are discarded, 5 new cards drawn
//!
//! The game ends when the Province pile or any three supply piles are
//! empty, or after an optional round limit. Most victory points wins.
//!
//! Cellar and Militia are extended actions and exercise the kernel's action
//! stack; Militia also hands decisions to other players mid-turn.
//!
//! ```
//! use tabletop_kernel::core::PlayerId;
//! use tabletop_kernel::games::deckbuilder::{
//!     CardKind, Deckbuilder, DeckbuilderParams, DeckbuilderRules, Pile,
//! };
//! use tabletop_kernel::rules::ForwardModel;
//!
//! let mut state = Deckbuilder::new_game(DeckbuilderParams::first_game(42), 2);
//! let player = PlayerId::new(0);
//! state.add_card(CardKind::Village, player, Pile::Hand);
//!
//! let village = CardKind::Village.play_action(player).unwrap();
//! DeckbuilderRules.next(&mut state, village).unwrap();
//!
//! assert_eq!(state.actions_left(), 2);
//! assert_eq!(state.deck(player, Pile::Table).len(), 1);
//! ```

mod actions;
mod cards;
mod params;
mod rules;
mod state;

pub use actions::{Cellar, DeckAction, Militia};
pub use cards::{Bonus, Card, CardKind, Pile};
pub use params::DeckbuilderParams;
pub use rules::DeckbuilderRules;
pub use state::{Deckbuilder, DeckbuilderPhase, PlayerDecks, SupplyPile};
