//! The strategy capability: how a player chooses its wager.
//!
//! Strategies are trait-based to allow customization, mirroring the rest
//! of the engine's pluggable seams:
//!
//! - [`Strategy`]: observe the table, return a wager fraction
//! - [`TableView`]: the read-only window a strategy decides from
//! - [`Player`]: a unique name bound to one strategy instance
//!
//! A strategy may keep private mutable memory across rounds (for example
//! the player count at its first observation); that memory is instance
//! scoped and never shared. The returned fraction is unconstrained by
//! contract; the round engine clamps it to `[0, 1]` before applying it
//! to the caller's wealth.

pub mod builtin;

pub use builtin::{
    Everything, EverythingExceptOnInitial, ExponentialDecay, Half, NinetyPercentile, SlightlyMore,
    TenthPercentile, TwoOverNPlayers, UniformlyRandom,
};

use std::fmt;

use crate::core::{GameRng, GameState, PlayerId};

/// A wager policy.
///
/// Called once per round per active player, before any elimination or
/// redistribution happens. Decisions in a round are simultaneous: every
/// strategy observes the same pre-round ledger.
pub trait Strategy {
    /// Choose a wager as a fraction of the caller's own wealth.
    ///
    /// Values outside `[0, 1]` are clamped by the engine, not rejected.
    /// Returning a non-finite value is a fatal `StrategyError`.
    fn decide(&mut self, view: &TableView<'_>, rng: &mut GameRng) -> f64;
}

/// Read-only window onto the ledger for one player's decision.
///
/// Exposes the active player set, everyone's current wealth, and the
/// deciding player's own position.
pub struct TableView<'a> {
    state: &'a GameState,
    me: PlayerId,
}

impl<'a> TableView<'a> {
    pub(crate) fn new(state: &'a GameState, me: PlayerId) -> Self {
        Self { state, me }
    }

    /// Players still in the game, in registration order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        self.state.active_players()
    }

    /// Number of players still in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// A player's current wealth, or `None` if eliminated.
    #[must_use]
    pub fn wealth_of(&self, player: PlayerId) -> Option<f64> {
        self.state.wealth_of(player)
    }

    /// Iterate over (player, wealth) for every active player.
    pub fn wealths(&self) -> impl Iterator<Item = (PlayerId, f64)> + '_ {
        self.state
            .active_players()
            .iter()
            .map(|&id| (id, self.state.wealth(id)))
    }

    /// The deciding player's id.
    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    /// The deciding player's current wealth.
    #[must_use]
    pub fn my_wealth(&self) -> f64 {
        self.state.wealth(self.me)
    }

    /// Resolve a player id to its name.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> &str {
        self.state.name_of(player)
    }
}

/// A participant: unique name bound to one strategy instance.
///
/// Identity is the name; the strategy instance (and whatever memory it
/// carries) belongs to this player alone.
pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Bind a name to a strategy.
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Query this player's strategy for a wager fraction.
    pub(crate) fn decide(&mut self, view: &TableView<'_>, rng: &mut GameRng) -> f64 {
        self.strategy.decide(view, rng)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("name", &self.name).finish_non_exhaustive()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
