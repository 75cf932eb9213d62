//! One elimination round: wager collection, elimination, redistribution.
//!
//! ## Protocol
//!
//! 1. Snapshot every active player's wealth into history.
//! 2. Query every strategy for a wager fraction; clamp to `[0, 1]` and
//!    scale by the player's wealth to get their contribution. All
//!    decisions observe the same pre-round ledger; nothing is mutated
//!    until every wager is in.
//! 3. Eliminate one player among those sharing the minimum contribution,
//!    chosen uniformly at random. Ties are common (every all-zero round
//!    is one) and must not always fall on the same positional player.
//! 4. The eliminated player forfeits their entire wealth into the pot,
//!    regardless of what they offered.
//! 5. Survivors pay their contribution and split the pot evenly.
//!
//! The transition is zero-sum: total wealth after the round equals total
//! wealth before it, up to floating-point error.

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, PlayerId, StrategyError};
use crate::strategy::{Player, TableView};

/// Executes rounds against a [`GameState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundEngine;

impl RoundEngine {
    /// Run a single elimination round, returning the eliminated player.
    ///
    /// `players` must be the full roster in id order. Panics if fewer
    /// than two players are active; a strategy returning a non-finite
    /// wager is a fatal [`StrategyError`] with no default substituted.
    pub fn run_round(
        &self,
        state: &mut GameState,
        players: &mut [Player],
        rng: &mut GameRng,
    ) -> Result<PlayerId, StrategyError> {
        assert!(
            state.player_count() >= 2,
            "a round needs at least 2 active players"
        );

        let round = state.round_index();
        state.snapshot_round();

        // Simultaneous decisions: every wager is collected against the
        // same pre-round wealth before anything is mutated.
        let mut contributions: SmallVec<[(PlayerId, f64); 8]> = SmallVec::new();
        for &id in state.active_players() {
            let fraction = {
                let view = TableView::new(state, id);
                players[id.index()].decide(&view, rng)
            };
            if !fraction.is_finite() {
                return Err(StrategyError::NonFiniteWager {
                    player: state.name_of(id).to_string(),
                    value: fraction,
                });
            }
            let stake = state.wealth(id);
            let offered = fraction.clamp(0.0, 1.0) * stake;
            log::trace!(
                "round {}: {} offers {:.2} of {:.2}",
                round,
                state.name_of(id),
                offered,
                stake
            );
            contributions.push((id, offered));
        }

        let lowest = contributions
            .iter()
            .map(|&(_, offered)| offered)
            .fold(f64::INFINITY, f64::min);
        let ties: SmallVec<[PlayerId; 8]> = contributions
            .iter()
            .filter(|&&(_, offered)| offered == lowest)
            .map(|&(id, _)| id)
            .collect();
        let eliminated = *rng
            .choose(&ties)
            .expect("at least one contributor matches the minimum");

        // The loser is wiped out: their whole stack goes into the pot,
        // whatever they offered.
        let forfeited = state.wealth(eliminated);
        if let Some(entry) = contributions.iter_mut().find(|(id, _)| *id == eliminated) {
            entry.1 = forfeited;
        }
        let pot: f64 = contributions.iter().map(|&(_, offered)| offered).sum();

        state.eliminate(eliminated);

        // Survivor count is >= 1 here, so the share is always defined.
        let share = pot / state.player_count() as f64;
        for &(id, offered) in &contributions {
            if id == eliminated {
                continue;
            }
            let balance = state.wealth(id) - offered + share;
            state.set_wealth(id, balance);
        }

        log::debug!(
            "round {}: {} eliminated, {:.2} forfeited, pot {:.2} split {} ways",
            round,
            state.name_of(eliminated),
            forfeited,
            pot,
            state.player_count()
        );

        Ok(eliminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Roster};
    use crate::strategy::{Everything, Strategy};

    /// Wagers a fixed fraction, whatever it is.
    struct Const(f64);

    impl Strategy for Const {
        fn decide(&mut self, _view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
            self.0
        }
    }

    fn table(fractions: &[f64], wealth: f64) -> (GameState, Vec<Player>) {
        let names: Vec<String> = fractions
            .iter()
            .enumerate()
            .map(|(i, _)| format!("p{}", i))
            .collect();
        let players: Vec<Player> = fractions
            .iter()
            .enumerate()
            .map(|(i, &f)| Player::new(format!("p{}", i), Const(f)))
            .collect();
        let state = GameState::new(Roster::new(names), wealth);
        (state, players)
    }

    #[test]
    fn test_lowest_contributor_is_wiped_out() {
        // Contributions 20, 50, 50: p0 is the unique minimum.
        let (mut state, mut players) = table(&[0.2, 0.5, 0.5], 100.0);
        let mut rng = GameRng::new(0);

        let out = RoundEngine
            .run_round(&mut state, &mut players, &mut rng)
            .unwrap();

        assert_eq!(out, PlayerId::new(0));
        assert_eq!(state.eliminations(), &[PlayerId::new(0)]);
        assert!(state.wealth_of(PlayerId::new(0)).is_none());

        // Pot = 100 (forfeit) + 50 + 50; each survivor: 100 - 50 + 100.
        assert_eq!(state.wealth(PlayerId::new(1)), 150.0);
        assert_eq!(state.wealth(PlayerId::new(2)), 150.0);
        assert!((state.total_wealth() - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_records_round_start() {
        let (mut state, mut players) = table(&[0.2, 0.5, 0.5], 100.0);
        let mut rng = GameRng::new(0);

        RoundEngine
            .run_round(&mut state, &mut players, &mut rng)
            .unwrap();

        let snap = &state.history()[0];
        assert_eq!(snap.round, 0);
        assert_eq!(snap.wealth["p0"], 100.0);
        assert_eq!(snap.wealth["p1"], 100.0);
        assert_eq!(snap.wealth["p2"], 100.0);
    }

    #[test]
    fn test_negative_fraction_clamps_to_zero() {
        // -5 clamps to a zero contribution: unique minimum, eliminated.
        let (mut state, mut players) = table(&[-5.0, 0.5, 0.9], 100.0);
        let mut rng = GameRng::new(3);

        let out = RoundEngine
            .run_round(&mut state, &mut players, &mut rng)
            .unwrap();

        assert_eq!(out, PlayerId::new(0));
        // Pot = 100 + 50 + 90 = 240, share 120.
        assert_eq!(state.wealth(PlayerId::new(1)), 170.0);
        assert_eq!(state.wealth(PlayerId::new(2)), 130.0);
    }

    #[test]
    fn test_excess_fraction_clamps_to_full_wealth() {
        // 10 clamps to 1: p0 contributes its whole stack and p1's 50 is
        // the minimum.
        let (mut state, mut players) = table(&[10.0, 0.5, 0.9], 100.0);
        let mut rng = GameRng::new(3);

        let out = RoundEngine
            .run_round(&mut state, &mut players, &mut rng)
            .unwrap();

        assert_eq!(out, PlayerId::new(1));
        // Pot = 100 + 100 (forfeit) + 90 = 290, share 145.
        assert_eq!(state.wealth(PlayerId::new(0)), 145.0);
        assert_eq!(state.wealth(PlayerId::new(2)), 155.0);
    }

    #[test]
    fn test_tie_break_is_randomized() {
        // Identical wagers tie every player; across seeds each position
        // must come up.
        let mut seen = std::collections::HashSet::new();
        for seed in 0..100 {
            let mut state = GameState::new(
                Roster::new(vec!["a".into(), "b".into(), "c".into()]),
                100.0,
            );
            let mut players = vec![
                Player::new("a", Everything),
                Player::new("b", Everything),
                Player::new("c", Everything),
            ];
            let mut rng = GameRng::new(seed);
            let out = RoundEngine
                .run_round(&mut state, &mut players, &mut rng)
                .unwrap();
            seen.insert(out);
        }
        assert_eq!(seen.len(), 3, "tie-break never eliminated some player");
    }

    #[test]
    fn test_non_finite_wager_is_fatal() {
        let (mut state, mut players) = table(&[f64::NAN, 0.5, 0.5], 100.0);
        let mut rng = GameRng::new(0);

        let err = RoundEngine
            .run_round(&mut state, &mut players, &mut rng)
            .unwrap_err();

        match err {
            StrategyError::NonFiniteWager { player, value } => {
                assert_eq!(player, "p0");
                assert!(value.is_nan());
            }
        }

        // Nothing was eliminated
        assert_eq!(state.player_count(), 3);
    }

    #[test]
    #[should_panic(expected = "a round needs at least 2 active players")]
    fn test_round_requires_two_players() {
        let (mut state, mut players) = table(&[0.5, 0.5, 0.5], 100.0);
        state.eliminate(PlayerId::new(0));
        state.eliminate(PlayerId::new(1));

        let mut rng = GameRng::new(0);
        let _ = RoundEngine.run_round(&mut state, &mut players, &mut rng);
    }
}
