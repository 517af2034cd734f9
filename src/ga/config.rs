//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for [`PopulationSearch`](super::PopulationSearch).
///
/// # Defaults
///
/// ```
/// use nqueens_search::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.slow_mutations, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_search::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_max_generations(5000)
///     .with_mutation_chance(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of boards kept between generations.
    ///
    /// Must be even: the assortative half pairs index `2k` with `2k + 1`.
    /// Each generation breeds twice this many offspring before truncation.
    pub population_size: usize,

    /// Maximum number of generations before giving up.
    pub max_generations: usize,

    /// Per-pair mutation probability (0.0–1.0).
    ///
    /// Roughly doubled for a pair with at least one offspring below half
    /// of the maximum fitness.
    pub mutation_chance: f64,

    /// Queen moves applied to a mutated offspring below half fitness.
    pub slow_mutations: usize,

    /// Queen moves applied to any other mutated offspring.
    pub regular_mutations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_generations: 1000,
            mutation_chance: 0.4,
            slow_mutations: 3,
            regular_mutations: 1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-pair mutation chance.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance;
        self
    }

    /// Sets the mutation counts for slow and regular offspring.
    pub fn with_mutation_counts(mut self, slow: usize, regular: usize) -> Self {
        self.slow_mutations = slow;
        self.regular_mutations = regular;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ConfigError::InvalidMutationChance(self.mutation_chance));
        }
        Ok(())
    }
}
