//! Game orchestration: validated setup and the run-to-winner loop.
//!
//! [`GameBuilder`] collects players and settings and validates them at
//! `build`; [`GameRunner`] owns the ledger and drives rounds until one
//! player remains. A game with N players always terminates in exactly
//! N - 1 rounds.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::core::{ConfigurationError, GameError, GameRng, GameState, PlayerId, Roster};
use crate::strategy::{Player, Strategy};

use super::round::RoundEngine;

/// Builder for a game of liars.
///
/// ## Example
///
/// ```
/// use liars_game::{GameBuilder, Half, Everything, TenthPercentile};
///
/// let mut game = GameBuilder::new()
///     .initial_wealth(100.0)
///     .player("alice", Half)
///     .player("bob", Everything)
///     .player("carol", TenthPercentile)
///     .build(42)
///     .unwrap();
///
/// let winner = game.run().unwrap();
/// assert!(game.state().eliminations().contains(&winner));
/// ```
pub struct GameBuilder {
    initial_wealth: f64,
    players: Vec<Player>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            initial_wealth: 100.0,
            players: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uniform starting wealth (default 100).
    #[must_use]
    pub fn initial_wealth(mut self, wealth: f64) -> Self {
        self.initial_wealth = wealth;
        self
    }

    /// Register a player. Registration order fixes the id order.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.players.push(Player::new(name, strategy));
        self
    }

    /// Validate the configuration and build a runnable game.
    ///
    /// Fails if fewer than three players are registered, the starting
    /// wealth is not strictly positive and finite, or two players share
    /// a name.
    pub fn build(self, seed: u64) -> Result<GameRunner, ConfigurationError> {
        if self.players.len() < 3 {
            return Err(ConfigurationError::TooFewPlayers(self.players.len()));
        }
        if !self.initial_wealth.is_finite() || self.initial_wealth <= 0.0 {
            return Err(ConfigurationError::NonPositiveWealth(self.initial_wealth));
        }

        let mut seen = FxHashSet::default();
        for player in &self.players {
            if !seen.insert(player.name()) {
                return Err(ConfigurationError::DuplicateName(player.name().to_string()));
            }
        }

        let names = self.players.iter().map(|p| p.name().to_string()).collect();
        let state = GameState::new(Roster::new(names), self.initial_wealth);

        Ok(GameRunner {
            state,
            players: self.players,
            engine: RoundEngine,
            rng: GameRng::new(seed),
        })
    }
}

/// Drives a game from setup to a single surviving player.
///
/// Owns the ledger exclusively; strategies only ever observe it through
/// the view handed to them during their decision.
#[derive(Debug)]
pub struct GameRunner {
    state: GameState,
    players: Vec<Player>,
    engine: RoundEngine,
    rng: GameRng,
}

impl GameRunner {
    /// The game ledger: wealth, history, eliminations.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The winner, once the game has finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state
            .is_terminal()
            .then(|| self.state.active_players()[0])
    }

    /// Run a single round, returning the eliminated player.
    ///
    /// Returns `Ok(None)` once the game has finished. When the round
    /// leaves a single survivor, the terminal snapshot is recorded and
    /// the winner appended to the elimination order.
    pub fn step(&mut self) -> Result<Option<PlayerId>, GameError> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        let eliminated = self
            .engine
            .run_round(&mut self.state, &mut self.players, &mut self.rng)?;

        if self.state.is_terminal() {
            self.finish();
        }

        Ok(Some(eliminated))
    }

    /// Run rounds until one player remains and return the winner.
    ///
    /// Terminates in exactly `initial_player_count - 1` rounds. Calling
    /// `run` on a finished game just returns the winner again.
    pub fn run(&mut self) -> Result<PlayerId, GameError> {
        log::info!("starting {}", self);
        while self.step()?.is_some() {}
        Ok(self
            .winner()
            .expect("the round loop ends at a single player"))
    }

    /// Record the winner's terminal wealth and close the elimination order.
    fn finish(&mut self) {
        let winner = self.state.active_players()[0];
        self.state.snapshot_round();
        self.state.record_winner(winner);
        log::info!(
            "winner: {} with {:.2}",
            self.state.name_of(winner),
            self.state.wealth(winner)
        );
    }
}

impl fmt::Display for GameRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LiarsGame: {} players with {:.2}¥",
            self.state.player_count(),
            self.state.total_wealth()
        )
    }
}
