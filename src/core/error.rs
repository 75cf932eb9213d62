//! Error taxonomy for game construction and execution.
//!
//! Two classes of failure exist, both fatal and surfaced directly to the
//! caller:
//!
//! - [`ConfigurationError`]: invalid setup, raised at construction.
//! - [`StrategyError`]: a strategy produced an unusable wager mid-game.
//!
//! The engine performs no local recovery and never substitutes a default
//! wager. Anything else that could go wrong mid-round (bad indexing,
//! inconsistent ledger) is a programming error and panics.

use thiserror::Error;

/// Invalid game setup, rejected before any state is built.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    /// The game is well-defined only for three or more players.
    #[error("a game needs at least 3 players, got {0}")]
    TooFewPlayers(usize),

    /// Initial wealth must be strictly positive (and finite).
    #[error("initial wealth must be strictly positive, got {0}")]
    NonPositiveWealth(f64),

    /// Player names are identity and must be unique within a game.
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
}

/// A strategy produced a wager the engine cannot apply.
///
/// Out-of-range fractions are not errors (they are clamped); a
/// non-finite value is, because clamping NaN is meaningless.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StrategyError {
    /// The strategy returned NaN or an infinity.
    #[error("strategy for {player:?} returned a non-finite wager ({value})")]
    NonFiniteWager {
        /// Name of the offending player.
        player: String,
        /// The value the strategy returned.
        value: f64,
    },
}

/// Umbrella error for everything a game can surface.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
