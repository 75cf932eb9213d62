//! # liars-game
//!
//! A simulation engine for a multi-player elimination wagering game.
//! Players repeatedly wager fractions of their wealth; each round the
//! lowest contributor is eliminated, forfeits everything into the pot,
//! and the pot is split evenly among the survivors. The last player
//! standing wins and, by conservation, holds the table's entire wealth.
//!
//! ## Design Principles
//!
//! 1. **Pluggable strategies**: decision policies are trait objects that
//!    observe the ledger read-only and may keep private per-instance
//!    memory across rounds.
//!
//! 2. **Reproducible by seed**: all randomness (random-valued wagers,
//!    elimination tie-breaks) flows through one injected, seeded RNG.
//!
//! 3. **Engine over reporting**: history and elimination records are
//!    exposed as plain data; rendering them is a consumer's job.
//!
//! ## Usage
//!
//! ```
//! use liars_game::{GameBuilder, Half, SlightlyMore, UniformlyRandom};
//!
//! let mut game = GameBuilder::new()
//!     .initial_wealth(100.0)
//!     .player("alice", Half)
//!     .player("bob", SlightlyMore::default())
//!     .player("carol", UniformlyRandom)
//!     .build(42)
//!     .unwrap();
//!
//! let winner = game.run().unwrap();
//!
//! // The table's wealth ends up in one pair of hands.
//! let state = game.state();
//! assert!((state.wealth(winner) - 300.0).abs() < 1e-6);
//! assert_eq!(state.eliminations().len(), 3);
//! ```
//!
//! ## Modules
//!
//! - `core`: player identity, the game ledger, RNG, errors
//! - `strategy`: the `Strategy` trait, observation view, built-in policies
//! - `engine`: round execution and the run-to-winner loop

pub mod core;
pub mod engine;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ConfigurationError, GameError, GameRng, GameRngState, GameState, PlayerId, Roster,
    RoundSnapshot, StrategyError,
};

pub use crate::strategy::{
    Everything, EverythingExceptOnInitial, ExponentialDecay, Half, NinetyPercentile, Player,
    SlightlyMore, Strategy, TableView, TenthPercentile, TwoOverNPlayers, UniformlyRandom,
};

pub use crate::engine::{GameBuilder, GameRunner, RoundEngine};
