//! The game ledger: active players, wealth, history, eliminations.
//!
//! ## GameState
//!
//! One `GameState` is created per game and mutated in place by the round
//! engine; it is never reset. It becomes terminal when a single active
//! player remains.
//!
//! ## Invariants
//!
//! - Total wealth across active players is conserved by every round
//!   transition (redistribution is zero-sum up to floating-point error).
//! - The wealth map holds exactly the active players: an eliminated
//!   player's wealth is no longer tracked.
//! - Exactly one player leaves the active set per round.
//!
//! ## History
//!
//! `history` is an append-only sequence of [`RoundSnapshot`]s keyed by
//! player name, one per round plus a terminal row for the winner. It is
//! reporting data for external consumers (tables, plots) and is never
//! read back by game logic.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, Roster};

/// Wealth of every player still in the game at the start of a round.
///
/// Keyed by player name so external reporting needs no roster access.
/// Players eliminated in earlier rounds are simply absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Round index, 0-based: the number of players eliminated so far.
    pub round: u32,
    /// Player name to wealth at round start.
    pub wealth: FxHashMap<String, f64>,
}

/// The mutable ledger for one game.
///
/// Owned by the game runner; strategies observe it read-only through a
/// `TableView` during their decision.
#[derive(Clone, Debug)]
pub struct GameState {
    roster: Roster,
    /// Active players in registration order; shrinks by one per round.
    active: Vec<PlayerId>,
    /// Wealth per active player. Keys mirror `active` exactly.
    wealths: FxHashMap<PlayerId, f64>,
    /// Per-round snapshots for external reporting.
    history: Vector<RoundSnapshot>,
    /// Elimination order; after the game ends the winner is appended last.
    eliminations: Vec<PlayerId>,
    initial_count: usize,
}

impl GameState {
    /// Create the starting ledger: everyone active with uniform wealth.
    pub(crate) fn new(roster: Roster, initial_wealth: f64) -> Self {
        let active: Vec<PlayerId> = roster.ids().collect();
        let wealths = active.iter().map(|&id| (id, initial_wealth)).collect();
        let initial_count = active.len();

        Self {
            roster,
            active,
            wealths,
            history: Vector::new(),
            eliminations: Vec::new(),
            initial_count,
        }
    }

    /// The name table for every registered player, eliminated or not.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players still in the game, in registration order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Number of players still in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.active.len()
    }

    /// Number of players the game started with.
    #[must_use]
    pub fn initial_player_count(&self) -> usize {
        self.initial_count
    }

    /// Check whether a player is still in the game.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.wealths.contains_key(&player)
    }

    /// A player's current wealth.
    ///
    /// Panics if the player has been eliminated; wealth is tracked only
    /// for active players.
    #[must_use]
    pub fn wealth(&self, player: PlayerId) -> f64 {
        *self
            .wealths
            .get(&player)
            .expect("wealth is tracked only for active players")
    }

    /// A player's current wealth, or `None` if eliminated.
    #[must_use]
    pub fn wealth_of(&self, player: PlayerId) -> Option<f64> {
        self.wealths.get(&player).copied()
    }

    /// Total wealth across all active players.
    ///
    /// Invariant across rounds: always equals the sum of initial wealth,
    /// up to floating-point tolerance.
    #[must_use]
    pub fn total_wealth(&self) -> f64 {
        self.wealths.values().sum()
    }

    /// Get a player's name.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> &str {
        self.roster.name(player)
    }

    /// Per-round snapshots recorded so far.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundSnapshot> {
        &self.history
    }

    /// Players in elimination order. Once the game has ended, the last
    /// element is the winner.
    #[must_use]
    pub fn eliminations(&self) -> &[PlayerId] {
        &self.eliminations
    }

    /// Elimination order resolved to names.
    #[must_use]
    pub fn elimination_names(&self) -> Vec<&str> {
        self.eliminations
            .iter()
            .map(|&id| self.roster.name(id))
            .collect()
    }

    /// True once a single active player remains.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.active.len() == 1
    }

    /// Current round index: the number of players eliminated so far.
    #[must_use]
    pub fn round_index(&self) -> u32 {
        (self.initial_count - self.active.len()) as u32
    }

    // === Mutators (round engine / runner only) ===

    /// Record a snapshot of every active player's wealth at the current
    /// round index.
    pub(crate) fn snapshot_round(&mut self) {
        let wealth = self
            .active
            .iter()
            .map(|&id| (self.roster.name(id).to_string(), self.wealth(id)))
            .collect();
        self.history.push_back(RoundSnapshot {
            round: self.round_index(),
            wealth,
        });
    }

    /// Remove a player from the game: drops them from the active set,
    /// stops tracking their wealth, and records the elimination.
    pub(crate) fn eliminate(&mut self, player: PlayerId) {
        debug_assert!(self.is_active(player), "eliminating an inactive player");
        self.active.retain(|&p| p != player);
        self.wealths.remove(&player);
        self.eliminations.push(player);
    }

    /// Record the winner at the end of the elimination order without
    /// removing them from the active set.
    pub(crate) fn record_winner(&mut self, player: PlayerId) {
        debug_assert!(self.is_terminal());
        self.eliminations.push(player);
    }

    /// Overwrite an active player's wealth after redistribution.
    pub(crate) fn set_wealth(&mut self, player: PlayerId, value: f64) {
        debug_assert!(self.is_active(player), "crediting an inactive player");
        self.wealths.insert(player, value);
    }
}
