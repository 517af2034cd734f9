//! SA configuration.

use crate::error::ConfigError;

/// Configuration for [`AnnealingSearch`](super::AnnealingSearch).
///
/// # Examples
///
/// ```
/// use nqueens_search::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_factor(0.95)
///     .with_max_iterations(2000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Temperature at the start of every run.
    pub initial_temperature: f64,

    /// Multiplied into the temperature once per iteration.
    pub cooling_factor: f64,

    /// Iteration budget. A run that spends it unsolved reports false.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_factor: 0.95,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor <= 1.0) {
            return Err(ConfigError::InvalidCoolingFactor(self.cooling_factor));
        }
        Ok(())
    }
}
