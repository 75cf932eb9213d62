//! Core types: player identity, the game ledger, RNG, errors.
//!
//! Everything here is strategy-agnostic. Strategies plug in through the
//! `strategy` module and only ever see the ledger read-only.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{ConfigurationError, GameError, StrategyError};
pub use player::{PlayerId, Roster};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, RoundSnapshot};
