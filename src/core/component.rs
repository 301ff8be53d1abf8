//! Component identification.
//!
//! Every game piece (card, counter, board cell, deck) has a `ComponentId`.
//! Actions refer to their targets by id rather than by reference, so an
//! action built against one state copy stays valid when replayed against an
//! independently cloned copy.
//!
//! ## Usage
//!
//! ```
//! use tabletop_kernel::core::{ComponentId, ComponentIds};
//!
//! let mut ids = ComponentIds::new();
//! let first = ids.allocate();
//! let second = ids.allocate();
//!
//! assert_eq!(first, ComponentId(0));
//! assert_eq!(second, ComponentId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a game component.
///
/// Ids are never reused within a state's lineage: copies continue the
/// allocation sequence of the state they were copied from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ComponentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Component({})", self.0)
    }
}

/// Broad category of a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Deck,
    Area,
    Board,
    BoardNode,
    Card,
    Counter,
    Dice,
    Token,
}

/// Any identifiable game piece.
///
/// Games usually implement this on a single enum or struct covering all
/// their pieces, so the registry can hold them in one arena.
pub trait Component: Clone + PartialEq + std::fmt::Debug {
    /// The component's stable id.
    fn id(&self) -> ComponentId;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Component category.
    fn kind(&self) -> ComponentKind;
}

/// Monotonic id allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentIds {
    next: u32,
}

impl ComponentIds {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that continues after `next - 1`.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate a fresh id.
    pub fn allocate(&mut self) -> ComponentId {
        let id = ComponentId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return.
    #[must_use]
    pub const fn peek(&self) -> ComponentId {
        ComponentId(self.next)
    }

    /// Make sure `id` will never be handed out again.
    pub fn reserve(&mut self, id: ComponentId) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sequential() {
        let mut ids = ComponentIds::new();
        assert_eq!(ids.allocate(), ComponentId(0));
        assert_eq!(ids.allocate(), ComponentId(1));
        assert_eq!(ids.peek(), ComponentId(2));
    }

    #[test]
    fn test_starting_at() {
        let mut ids = ComponentIds::starting_at(40);
        assert_eq!(ids.allocate(), ComponentId(40));
    }

    #[test]
    fn test_reserve_skips_past() {
        let mut ids = ComponentIds::new();
        ids.reserve(ComponentId(9));
        assert_eq!(ids.allocate(), ComponentId(10));

        // Reserving something already behind the cursor is a no-op
        ids.reserve(ComponentId(3));
        assert_eq!(ids.allocate(), ComponentId(11));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComponentId(42)), "Component(42)");
    }

    #[test]
    fn test_serialization() {
        let id = ComponentId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
