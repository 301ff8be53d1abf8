//! Player identification, per-player storage and copy observers.
//!
//! ## PlayerId
//!
//! Type-safe player index supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec`, one entry per player. Its length is
//! fixed at construction, which is how the state keeps
//! `player_results.len() == player_count`.
//!
//! ## Observer
//!
//! Who a state copy is made for: a specific player, or nobody in particular
//! (full information).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use tabletop_kernel::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Step `offset` seats around a table of `player_count`, wrapping in
    /// either direction.
    ///
    /// ```
    /// use tabletop_kernel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(3).rotate(1, 4), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).rotate(-1, 4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn rotate(self, offset: i32, player_count: usize) -> PlayerId {
        let n = player_count as i32;
        PlayerId((self.0 as i32 + offset).rem_euclid(n) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Whose point of view a state copy is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// No hidden information: an exact copy.
    Full,
    /// Reduced to what this player may legitimately see.
    Player(PlayerId),
}

impl Observer {
    /// The observing player, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Observer::Full => None,
            Observer::Player(p) => Some(p),
        }
    }

    /// Can this observer see information private to `player`?
    #[must_use]
    pub fn sees_private(self, player: PlayerId) -> bool {
        match self {
            Observer::Full => true,
            Observer::Player(p) => p == player,
        }
    }
}

impl From<PlayerId> for Observer {
    fn from(player: PlayerId) -> Self {
        Observer::Player(player)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tabletop_kernel::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<i32> = PlayerMap::new(4, |_| 0);
/// coins[PlayerId::new(1)] += 3;
/// assert_eq!(coins[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, mut factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Same as `player_count`; lets the map read like a slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a PlayerMap has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// The values in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
