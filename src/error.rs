//! Configuration errors.
//!
//! An unsolved search is a normal outcome reported through
//! [`Search::solve`](crate::search::Search::solve); only malformed
//! parameters end up here.

/// Rejected search or trial parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("initial temperature must be finite and positive, got {0}")]
    InvalidTemperature(f64),

    #[error("cooling factor must be in (0, 1], got {0}")]
    InvalidCoolingFactor(f64),

    #[error("population size must be even and at least 2, got {0}")]
    InvalidPopulationSize(usize),

    #[error("mutation chance must be in [0, 1], got {0}")]
    InvalidMutationChance(f64),

    #[error("number of trials must be at least 1")]
    NoTrials,
}
