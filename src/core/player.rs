//! Player identification and the game roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier assigned in registration order.
//!
//! ## Roster
//!
//! Immutable name table backed by `Vec` for O(1) id-indexed lookup.
//! Names are the external identity of a player; ids are the internal one.
//! Uniqueness of names is enforced at game construction, before a roster
//! is ever built.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier supporting up to 255 players.
///
/// Ids are 0-based and assigned in registration order: the first player
/// handed to the builder is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    /// use liars_game::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The name table for a game, indexed by `PlayerId`.
///
/// Built once at game setup from the registration order and never
/// modified afterwards; eliminated players keep their roster entry so
/// history and elimination records stay resolvable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from names in registration order.
    ///
    /// Callers are responsible for name uniqueness; the game builder
    /// validates it before constructing a roster.
    pub(crate) fn new(names: Vec<String>) -> Self {
        assert!(!names.is_empty(), "Must have at least 1 player");
        assert!(names.len() <= 255, "At most 255 players supported");
        Self { names }
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the roster holds no players. Never the case for a built game.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get a player's name.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    /// Look up a player id by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId(i as u8))
    }

    /// Iterate over all registered player IDs.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.names.len() as u8).map(PlayerId)
    }

    /// Iterate over (PlayerId, name) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (PlayerId(i as u8), n.as_str()))
    }
}

impl Index<PlayerId> for Roster {
    type Output = str;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.name(player)
    }
}
