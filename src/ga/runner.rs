//! GA evolutionary loop execution.
//!
//! [`PopulationSearch`] runs one generation per iteration:
//! assortative breeding → random breeding → mutation → merge → truncation.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use crate::board::{max_fitness, BoardState};
use crate::error::ConfigError;
use crate::search::{render_outcome, Search, SearchStatus};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Genetic algorithm over a fixed-size population of boards.
///
/// Between generations the population holds exactly
/// [`GaConfig::population_size`] boards sorted ascending by fitness, so
/// the fittest member is always the last one.
///
/// # Usage
///
/// ```
/// use nqueens_search::ga::{GaConfig, PopulationSearch};
/// use nqueens_search::search::Search;
///
/// let config = GaConfig::default().with_max_generations(500).with_seed(42);
/// let mut search = PopulationSearch::new(6, config).unwrap();
/// let solved = search.solve(false);
/// assert_eq!(solved, search.best().cost() == 0);
/// ```
pub struct PopulationSearch<R = StdRng> {
    config: GaConfig,
    n: usize,
    rng: R,
    population: Vec<BoardState>,
    generations: usize,
    elapsed: Duration,
    status: SearchStatus,
}

impl PopulationSearch<StdRng> {
    /// Creates a search on an `n × n` board seeded from `config.seed`.
    pub fn new(n: usize, config: GaConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(n, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PopulationSearch<R> {
    /// Creates a search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(n: usize, config: GaConfig, mut rng: R) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        config.validate()?;

        let population = initial_population(n, config.population_size, &mut rng);
        Ok(Self {
            config,
            n,
            rng,
            population,
            generations: 0,
            elapsed: Duration::ZERO,
            status: SearchStatus::Searching,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The population, sorted ascending by fitness.
    pub fn population(&self) -> &[BoardState] {
        &self.population
    }

    fn fittest(&self) -> &BoardState {
        // validate() guarantees at least two members
        &self.population[self.population.len() - 1]
    }

    fn max_fitness_reached(&self) -> bool {
        self.fittest().fitness() == max_fitness(self.n)
    }

    /// Replaces the population with the fittest half of its offspring.
    fn next_generation(&mut self) {
        let offspring = self.offspring_pool();
        self.population = survivors(offspring, self.config.population_size);
    }

    /// Breeds `2 * population_size` children: the assortative half first,
    /// then the random half.
    fn offspring_pool(&mut self) -> Vec<BoardState> {
        let size = self.config.population_size;
        let mut offspring = Vec::with_capacity(2 * size);

        // Neighbours in sorted order have similar fitness.
        for pair in 0..size / 2 {
            self.breed(2 * pair, 2 * pair + 1, &mut offspring);
        }

        for _ in 0..size / 2 {
            let first = self.rng.random_range(0..size);
            let second = self.rng.random_range(0..size);
            self.breed(first, second, &mut offspring);
        }

        offspring
    }

    /// Produces two children of the given parents, mutating both when the
    /// pair's mutation draw succeeds.
    fn breed(&mut self, first: usize, second: usize, offspring: &mut Vec<BoardState>) {
        let (mut elder, mut younger) = {
            let a = &self.population[first];
            let b = &self.population[second];
            (crossover(a, b, &mut self.rng), crossover(a, b, &mut self.rng))
        };

        let elder_slow = elder.is_below_half_fitness();
        let younger_slow = younger.is_below_half_fitness();

        let draw: f64 = self.rng.random();
        if should_mutate(self.config.mutation_chance, draw, elder_slow || younger_slow) {
            let count = self.mutation_count(elder_slow);
            mutate(&mut elder, count, &mut self.rng);
            let count = self.mutation_count(younger_slow);
            mutate(&mut younger, count, &mut self.rng);
        }

        offspring.push(elder);
        offspring.push(younger);
    }

    fn mutation_count(&self, slow: bool) -> usize {
        if slow {
            self.config.slow_mutations
        } else {
            self.config.regular_mutations
        }
    }
}

impl<R: Rng> Search for PopulationSearch<R> {
    fn solve(&mut self, render_board: bool) -> bool {
        let start = Instant::now();
        let mut generation = 0usize;
        let mut solved = self.max_fitness_reached();

        while !solved && generation < self.config.max_generations {
            self.next_generation();
            generation += 1;
            solved = self.max_fitness_reached();

            trace!(
                "ga generation {generation}: best fitness {} of {}",
                self.fittest().fitness(),
                max_fitness(self.n)
            );
        }

        self.elapsed = start.elapsed();
        self.generations = generation;
        self.status = if solved {
            SearchStatus::Solved
        } else {
            SearchStatus::IterationLimitReached
        };

        debug!(
            "genetic algorithm n={} solved={solved} generations={generation} elapsed={:?}",
            self.n, self.elapsed
        );

        if render_board {
            render_outcome(self.fittest(), solved);
        }
        solved
    }

    fn iterations_used(&self) -> usize {
        self.generations
    }

    fn elapsed_time(&self) -> Duration {
        self.elapsed
    }

    fn reset(&mut self) {
        self.population = initial_population(self.n, self.config.population_size, &mut self.rng);
        self.generations = 0;
        self.elapsed = Duration::ZERO;
        self.status = SearchStatus::Searching;
    }

    fn status(&self) -> SearchStatus {
        self.status
    }

    fn best(&self) -> &BoardState {
        self.fittest()
    }
}

/// `size` random boards, sorted ascending by fitness.
fn initial_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<BoardState> {
    let mut population: Vec<BoardState> = (0..size).map(|_| BoardState::random(n, rng)).collect();
    population.sort_by_cached_key(BoardState::fitness);
    population
}

/// Sorts the offspring pool ascending by fitness and keeps its fittest
/// `size` members, still in ascending order.
fn survivors(mut pool: Vec<BoardState>, size: usize) -> Vec<BoardState> {
    pool.sort_by_cached_key(BoardState::fitness);
    let cut = pool.len().saturating_sub(size);
    pool.split_off(cut)
}

/// A pair mutates when `chance > draw`, with the draw halved if either
/// child is below half fitness.
fn should_mutate(chance: f64, draw: f64, any_slow: bool) -> bool {
    let draw = if any_slow { draw / 2.0 } else { draw };
    chance > draw
}

// ============================================================================
// Tests
// ============================================================================
