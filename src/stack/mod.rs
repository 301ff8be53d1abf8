//! The extended-action stack.
//!
//! Actions that need further decisions sit here while those decisions are
//! made (index 0 = bottom, last = top). The top frame is the controlling
//! context: it supplies the legal moves and may nominate the acting player.
//! The stack discipline itself lives in [`crate::rules::ForwardModel`].
//!
//! ```
//! use tabletop_kernel::stack::ActionStack;
//!
//! let mut stack = ActionStack::new();
//! stack.push("play cellar");
//! stack.push("choose discard");
//!
//! assert_eq!(stack.top(), Some(&"choose discard"));
//! assert_eq!(stack.pop(), Some("choose discard"));
//! assert_eq!(stack.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// LIFO stack of in-progress actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionStack<A> {
    frames: Vec<A>,
}

impl<A> Default for ActionStack<A> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<A> ActionStack<A> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `action` the controlling context.
    pub fn push(&mut self, action: A) {
        self.frames.push(action);
    }

    /// Remove the top frame.
    pub fn pop(&mut self) -> Option<A> {
        self.frames.pop()
    }

    /// Peek at the top frame without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&A> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut A> {
        self.frames.last_mut()
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.frames.iter()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
