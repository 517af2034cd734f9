//! SA execution loop.

use super::config::SaConfig;
use crate::board::BoardState;
use crate::error::ConfigError;
use crate::search::{render_outcome, Search, SearchStatus};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Metropolis acceptance probability for a move changing the cost by
/// `-delta` (so `delta = precedent_cost - new_cost`).
///
/// Non-worsening moves (`delta >= 0`) are accepted with probability 1,
/// including at zero temperature where `exp(0 / 0)` would be NaN.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta >= 0.0 {
        1.0
    } else if temperature > 0.0 {
        (delta / temperature).exp()
    } else {
        0.0
    }
}

/// Simulated annealing over a single [`BoardState`].
///
/// Owns the current board, the temperature, and the random source. The
/// temperature starts at [`SaConfig::initial_temperature`] and is
/// multiplied by [`SaConfig::cooling_factor`] once per iteration.
///
/// # Usage
///
/// ```
/// use nqueens_search::sa::{AnnealingSearch, SaConfig};
/// use nqueens_search::search::Search;
///
/// let config = SaConfig::default().with_max_iterations(2000).with_seed(3);
/// let mut search = AnnealingSearch::new(8, config).unwrap();
/// if search.solve(false) {
///     assert_eq!(search.best().cost(), 0);
/// }
/// ```
pub struct AnnealingSearch<R = StdRng> {
    config: SaConfig,
    rng: R,
    state: BoardState,
    temperature: f64,
    iterations: usize,
    elapsed: Duration,
    status: SearchStatus,
}

impl AnnealingSearch<StdRng> {
    /// Creates a search on an `n × n` board seeded from `config.seed`.
    pub fn new(n: usize, config: SaConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(n, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnnealingSearch<R> {
    /// Creates a search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(n: usize, config: SaConfig, mut rng: R) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        config.validate()?;

        let state = BoardState::random(n, &mut rng);
        Ok(Self {
            temperature: config.initial_temperature,
            config,
            rng,
            state,
            iterations: 0,
            elapsed: Duration::ZERO,
            status: SearchStatus::Searching,
        })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Proposes single-queen moves on a copy of the current board until one
    /// is accepted, and returns it with its cost.
    ///
    /// The retry loop has no cap. It terminates because moving a queen onto
    /// its own row leaves the cost unchanged, which is always accepted.
    fn accept_move(&mut self, precedent_cost: usize) -> (BoardState, usize) {
        let n = self.state.size();
        let mut candidate = self.state.clone();

        loop {
            let row = self.rng.random_range(0..n);
            let column = self.rng.random_range(0..n);
            let previous_row = candidate.placement(column);

            candidate.move_queen(row, column);
            let cost = candidate.cost();

            if cost < precedent_cost {
                return (candidate, cost);
            }

            let delta = precedent_cost as f64 - cost as f64;
            let probability = acceptance_probability(delta, self.temperature);
            if self.rng.random::<f64>() < probability {
                return (candidate, cost);
            }

            candidate.move_queen(previous_row, column);
        }
    }
}

impl<R: Rng> Search for AnnealingSearch<R> {
    fn solve(&mut self, render_board: bool) -> bool {
        let start = Instant::now();
        let mut cost = self.state.cost();
        let mut iteration = 0usize;

        while cost != 0 && iteration < self.config.max_iterations {
            let (next, next_cost) = self.accept_move(cost);
            self.state = next;
            cost = next_cost;
            self.temperature *= self.config.cooling_factor;
            iteration += 1;

            trace!(
                "sa iteration {iteration}: cost {cost}, temperature {:.6}",
                self.temperature
            );
        }

        self.elapsed = start.elapsed();
        self.iterations = iteration;
        let solved = cost == 0;
        self.status = if solved {
            SearchStatus::Solved
        } else {
            SearchStatus::IterationLimitReached
        };

        debug!(
            "simulated annealing n={} solved={solved} iterations={iteration} elapsed={:?}",
            self.state.size(),
            self.elapsed
        );

        if render_board {
            render_outcome(&self.state, solved);
        }
        solved
    }

    fn iterations_used(&self) -> usize {
        self.iterations
    }

    fn elapsed_time(&self) -> Duration {
        self.elapsed
    }

    fn reset(&mut self) {
        self.state = BoardState::random(self.state.size(), &mut self.rng);
        self.temperature = self.config.initial_temperature;
        self.iterations = 0;
        self.elapsed = Duration::ZERO;
        self.status = SearchStatus::Searching;
    }

    fn status(&self) -> SearchStatus {
        self.status
    }

    fn best(&self) -> &BoardState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(n: usize, config: SaConfig, seed: u64) -> AnnealingSearch {
        AnnealingSearch::with_rng(n, config, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(2.0, 10.0), 1.0);
        assert_eq!(acceptance_probability(0.0, 10.0), 1.0);
        assert_eq!(acceptance_probability(0.0, 0.0), 1.0);
        assert_eq!(acceptance_probability(-1.0, 0.0), 0.0);

        let p = acceptance_probability(-1.0, 100.0);
        assert!((p - (-0.01f64).exp()).abs() < 1e-12);

        // Worse moves and colder temperatures both shrink the probability.
        assert!(acceptance_probability(-3.0, 1.0) < acceptance_probability(-1.0, 1.0));
        assert!(acceptance_probability(-1.0, 0.5) < acceptance_probability(-1.0, 5.0));
    }

    #[test]
    fn test_rejects_empty_board() {
        let result = AnnealingSearch::new(0, SaConfig::default());
        assert!(matches!(result, Err(ConfigError::EmptyBoard)));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SaConfig::default().with_cooling_factor(2.0);
        let result = AnnealingSearch::new(8, config);
        assert!(matches!(result, Err(ConfigError::InvalidCoolingFactor(_))));
    }

    #[test]
    fn test_single_queen_solved_without_iterations() {
        let mut search = seeded(1, SaConfig::default(), 1);
        assert!(search.solve(false));
        assert_eq!(search.iterations_used(), 0);
        assert_eq!(search.status(), SearchStatus::Solved);
    }

    #[test]
    fn test_unsolvable_boards_exhaust_budget() {
        for n in [2, 3] {
            let config = SaConfig::default().with_max_iterations(300);
            let mut search = seeded(n, config, 42);
            assert!(!search.solve(false));
            assert_eq!(search.iterations_used(), 300);
            assert_eq!(search.status(), SearchStatus::IterationLimitReached);
            assert!(search.best().cost() > 0);
        }
    }

    #[test]
    fn test_terminates_after_temperature_reaches_zero() {
        let config = SaConfig::default()
            .with_cooling_factor(0.5)
            .with_max_iterations(3000);
        let mut search = seeded(3, config, 9);
        assert!(!search.solve(false));
        assert_eq!(search.temperature(), 0.0);
        assert_eq!(search.iterations_used(), 3000);
    }

    #[test]
    fn test_zero_budget_reports_current_state() {
        let config = SaConfig::default().with_max_iterations(0);
        let mut search = seeded(8, config, 5);
        let solved = search.solve(false);
        assert_eq!(solved, search.best().cost() == 0);
        assert_eq!(search.iterations_used(), 0);
    }

    #[test]
    fn test_temperature_cools_once_per_iteration() {
        let config = SaConfig::default().with_max_iterations(10);
        let mut search = seeded(3, config, 11);
        search.solve(false);
        let expected = 100.0 * 0.95f64.powi(10);
        assert!((search.temperature() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_temperature_and_metrics() {
        let config = SaConfig::default().with_max_iterations(50);
        let mut search = seeded(3, config, 12);
        search.solve(false);
        assert!(search.iterations_used() > 0);

        search.reset();
        assert_eq!(search.iterations_used(), 0);
        assert_eq!(search.elapsed_time(), Duration::ZERO);
        assert_eq!(search.status(), SearchStatus::Searching);
        assert!((search.temperature() - 100.0).abs() < 1e-12);
        assert_eq!(search.best().size(), 3);
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = SaConfig::default().with_max_iterations(2000);
        let mut a = seeded(8, config.clone(), 77);
        let mut b = seeded(8, config, 77);
        assert_eq!(a.solve(false), b.solve(false));
        assert_eq!(a.iterations_used(), b.iterations_used());
        assert_eq!(a.best(), b.best());
    }

    #[test]
    fn test_eight_queens_solve_rate() {
        let config = SaConfig::default().with_max_iterations(2000);
        let mut search = seeded(8, config, 2024);
        let trials = 100;
        let mut solved = 0;

        for _ in 0..trials {
            if search.solve(false) {
                assert_eq!(search.best().cost(), 0);
                solved += 1;
            }
            search.reset();
        }

        assert!(
            solved >= 80,
            "expected a high solve rate at n=8, got {solved}/{trials}"
        );
    }
}
