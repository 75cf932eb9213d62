//! Built-in wager strategies.
//!
//! Reference policies ranging from trivial constants to stateful
//! survival play. Each is deterministic except where it draws from the
//! injected [`GameRng`]. Stateful strategies capture what they need on
//! their first observation via explicit sentinel fields.

use crate::core::GameRng;

use super::{Strategy, TableView};

/// Always wagers half of its wealth.
#[derive(Clone, Copy, Debug, Default)]
pub struct Half;

impl Strategy for Half {
    fn decide(&mut self, _view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        0.5
    }
}

/// Always wagers all of its wealth.
#[derive(Clone, Copy, Debug, Default)]
pub struct Everything;

impl Strategy for Everything {
    fn decide(&mut self, _view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        1.0
    }
}

/// Always wagers 90% of its wealth.
#[derive(Clone, Copy, Debug, Default)]
pub struct NinetyPercentile;

impl Strategy for NinetyPercentile {
    fn decide(&mut self, _view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        0.9
    }
}

/// Always wagers 10% of its wealth.
#[derive(Clone, Copy, Debug, Default)]
pub struct TenthPercentile;

impl Strategy for TenthPercentile {
    fn decide(&mut self, _view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        0.1
    }
}

/// Wagers a fresh uniformly random fraction each round.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformlyRandom;

impl Strategy for UniformlyRandom {
    fn decide(&mut self, _view: &TableView<'_>, rng: &mut GameRng) -> f64 {
        rng.fraction()
    }
}

/// Wagers `2 * (1 - current_n / initial_n)`.
///
/// Starts at zero and grows as the field thins; the engine clamp caps it
/// at 1 once half the field is gone. `initial_n` is captured on the
/// first decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoOverNPlayers {
    initial_players: Option<usize>,
}

impl Strategy for TwoOverNPlayers {
    fn decide(&mut self, view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        let initial = *self.initial_players.get_or_insert(view.player_count());
        2.0 * (1.0 - view.player_count() as f64 / initial as f64)
    }
}

/// Wagers a random fraction on the first decision, everything after.
#[derive(Clone, Copy, Debug, Default)]
pub struct EverythingExceptOnInitial {
    moved: bool,
}

impl Strategy for EverythingExceptOnInitial {
    fn decide(&mut self, _view: &TableView<'_>, rng: &mut GameRng) -> f64 {
        if self.moved {
            1.0
        } else {
            self.moved = true;
            rng.fraction()
        }
    }
}

/// Wagers `1 - base^(1 + initial_n - current_n)`.
///
/// Converges to a full wager exponentially as players are eliminated.
#[derive(Clone, Copy, Debug)]
pub struct ExponentialDecay {
    base: f64,
    initial_players: Option<usize>,
}

impl ExponentialDecay {
    /// Create a decay strategy with the given base, which must lie
    /// strictly between 0 and 1.
    #[must_use]
    pub fn new(base: f64) -> Self {
        assert!(
            base > 0.0 && base < 1.0,
            "decay base must lie strictly between 0 and 1"
        );
        Self {
            base,
            initial_players: None,
        }
    }
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl Strategy for ExponentialDecay {
    fn decide(&mut self, view: &TableView<'_>, _rng: &mut GameRng) -> f64 {
        let initial = *self.initial_players.get_or_insert(view.player_count());
        let eliminated = (initial - view.player_count()) as i32;
        1.0 - self.base.powi(1 + eliminated)
    }
}

/// Wagers just enough to not be the lowest contributor.
///
/// First decision is random; afterwards it offers the table's minimum
/// wealth as a fraction of its own, plus a hair. A player with the
/// minimum wealth who wagers everything still matches that contribution,
/// so the hair keeps this strategy out of the tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlightlyMore {
    moved: bool,
}

/// Margin over the minimum-survival fraction.
const SURVIVAL_EPSILON: f64 = 1e-8;

impl Strategy for SlightlyMore {
    fn decide(&mut self, view: &TableView<'_>, rng: &mut GameRng) -> f64 {
        if !self.moved {
            self.moved = true;
            return rng.fraction();
        }
        let least = view
            .wealths()
            .map(|(_, w)| w)
            .fold(f64::INFINITY, f64::min);
        least / view.my_wealth() + SURVIVAL_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PlayerId, Roster};

    fn state_of(names: &[&str], wealth: f64) -> GameState {
        let roster = Roster::new(names.iter().map(|n| n.to_string()).collect());
        GameState::new(roster, wealth)
    }

    fn decide_for(strategy: &mut dyn Strategy, state: &GameState, me: u8, seed: u64) -> f64 {
        let view = TableView::new(state, PlayerId::new(me));
        let mut rng = GameRng::new(seed);
        strategy.decide(&view, &mut rng)
    }

    #[test]
    fn test_constant_strategies() {
        let state = state_of(&["a", "b", "c"], 100.0);

        assert_eq!(decide_for(&mut Half, &state, 0, 1), 0.5);
        assert_eq!(decide_for(&mut Everything, &state, 0, 1), 1.0);
        assert_eq!(decide_for(&mut NinetyPercentile, &state, 0, 1), 0.9);
        assert_eq!(decide_for(&mut TenthPercentile, &state, 0, 1), 0.1);
    }

    #[test]
    fn test_uniformly_random_is_seeded() {
        let state = state_of(&["a", "b", "c"], 100.0);

        let first = decide_for(&mut UniformlyRandom, &state, 0, 42);
        let second = decide_for(&mut UniformlyRandom, &state, 0, 42);
        assert_eq!(first, second);
        assert!((0.0..1.0).contains(&first));
    }

    #[test]
    fn test_two_over_n_players_captures_initial_count() {
        let mut state = state_of(&["a", "b", "c", "d"], 100.0);
        let mut strategy = TwoOverNPlayers::default();

        // Full table: 2 * (1 - 4/4) = 0
        assert_eq!(decide_for(&mut strategy, &state, 0, 1), 0.0);

        state.eliminate(PlayerId::new(3));
        // 2 * (1 - 3/4) = 0.5 against the remembered initial count
        assert_eq!(decide_for(&mut strategy, &state, 0, 1), 0.5);

        state.eliminate(PlayerId::new(2));
        // 2 * (1 - 2/4) = 1.0
        assert_eq!(decide_for(&mut strategy, &state, 0, 1), 1.0);
    }

    #[test]
    fn test_everything_except_on_initial() {
        let state = state_of(&["a", "b", "c"], 100.0);
        let mut strategy = EverythingExceptOnInitial::default();

        let first = decide_for(&mut strategy, &state, 0, 42);
        assert!((0.0..1.0).contains(&first));

        assert_eq!(decide_for(&mut strategy, &state, 0, 42), 1.0);
        assert_eq!(decide_for(&mut strategy, &state, 0, 7), 1.0);
    }

    #[test]
    fn test_exponential_decay_converges_to_one() {
        let mut state = state_of(&["a", "b", "c", "d"], 100.0);
        let mut strategy = ExponentialDecay::default();

        // No eliminations yet: 1 - 0.3
        let first = decide_for(&mut strategy, &state, 0, 1);
        assert!((first - 0.7).abs() < 1e-12);

        state.eliminate(PlayerId::new(3));
        let second = decide_for(&mut strategy, &state, 0, 1);
        assert!((second - (1.0 - 0.3f64.powi(2))).abs() < 1e-12);
        assert!(second > first);
    }

    #[test]
    #[should_panic(expected = "decay base must lie strictly between 0 and 1")]
    fn test_exponential_decay_rejects_bad_base() {
        ExponentialDecay::new(1.0);
    }

    #[test]
    fn test_slightly_more_tracks_table_minimum() {
        let mut state = state_of(&["a", "b", "c"], 100.0);
        let mut strategy = SlightlyMore::default();

        // First move is random
        let first = decide_for(&mut strategy, &state, 0, 42);
        assert!((0.0..1.0).contains(&first));

        // Afterwards: min wealth / my wealth, plus the margin
        state.set_wealth(PlayerId::new(0), 200.0);
        state.set_wealth(PlayerId::new(1), 50.0);
        let fraction = decide_for(&mut strategy, &state, 0, 42);
        assert!((fraction - (50.0 / 200.0 + SURVIVAL_EPSILON)).abs() < 1e-15);
    }
}
