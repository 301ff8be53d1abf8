//! Component registry: id-indexed arena of every piece in a state.
//!
//! Game data refers to pieces by `ComponentId` (a deck is a list of ids,
//! not a list of cards), and the registry owns the pieces themselves. A
//! state copy therefore only has to rebuild this one index from the
//! copy's own components: nothing inside the game data has to be rewired,
//! and no piece can be shared between two copies.

use rustc_hash::FxHashMap;

use super::component::{Component, ComponentId, ComponentIds};

/// Registry of components for one game state.
///
/// Iteration follows insertion order, so enumerations built from the
/// registry are stable for a given state.
///
/// ## Example
///
/// ```
/// use tabletop_kernel::core::{Component, ComponentId, ComponentKind, ComponentRegistry};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Token { id: ComponentId }
///
/// impl Component for Token {
///     fn id(&self) -> ComponentId { self.id }
///     fn name(&self) -> &str { "token" }
///     fn kind(&self) -> ComponentKind { ComponentKind::Token }
/// }
///
/// let mut registry = ComponentRegistry::new();
/// let id = registry.allocate();
/// registry.put_all(vec![Token { id }]);
///
/// assert!(registry.get(id).is_some());
/// assert!(registry.get(ComponentId(99)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ComponentRegistry<C> {
    components: FxHashMap<ComponentId, C>,
    order: Vec<ComponentId>,
    ids: ComponentIds,
}

impl<C> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self {
            components: FxHashMap::default(),
            order: Vec::new(),
            ids: ComponentIds::new(),
        }
    }
}

impl<C: Component> ComponentRegistry<C> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that continues an existing id sequence.
    #[must_use]
    pub fn with_ids(ids: ComponentIds) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// Clear, then index every component by id.
    ///
    /// Panics if two components share an id.
    pub fn put_all(&mut self, components: impl IntoIterator<Item = C>) {
        self.clear();
        for component in components {
            self.insert(component);
        }
    }

    /// Add a single component.
    ///
    /// Panics if the id is already registered.
    pub fn insert(&mut self, component: C) {
        let id = component.id();
        if self.components.contains_key(&id) {
            panic!("Component {:?} already registered", id);
        }
        self.ids.reserve(id);
        self.order.push(id);
        self.components.insert(id, component);
    }

    /// Remove a component, returning it if present.
    pub fn remove(&mut self, id: ComponentId) -> Option<C> {
        let removed = self.components.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(removed)
    }

    /// Get a component by id.
    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&C> {
        self.components.get(&id)
    }

    /// Get a mutable component by id.
    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut C> {
        self.components.get_mut(&id)
    }

    /// Check if an id is registered.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Remove every component. The id sequence is kept, so ids handed out
    /// before the clear are never reused.
    pub fn clear(&mut self) {
        self.components.clear();
        self.order.clear();
    }

    /// Allocate a fresh id for a component about to be created.
    pub fn allocate(&mut self) -> ComponentId {
        self.ids.allocate()
    }

    /// The id allocator, for continuing the sequence in a copy.
    #[must_use]
    pub fn ids(&self) -> ComponentIds {
        self.ids
    }

    /// Get the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.order.iter().filter_map(move |id| self.components.get(id))
    }

    /// Registered ids in insertion order.
    #[must_use]
    pub fn component_ids(&self) -> &[ComponentId] {
        &self.order
    }
}

/// Two registries are equal when they hold value-equal components under
/// the same ids. Insertion order and the allocator cursor are ignored.
impl<C: PartialEq> PartialEq for ComponentRegistry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}
