//! Round execution and game orchestration.
//!
//! [`RoundEngine`] applies the wager/elimination/redistribution protocol
//! to a ledger one round at a time; [`GameRunner`] loops it to a winner.

pub mod round;
pub mod runner;

pub use round::RoundEngine;
pub use runner::{GameBuilder, GameRunner};
