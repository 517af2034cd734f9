//! Genetic Algorithm (GA).
//!
//! Evolves a fixed-size population of boards. Each generation breeds
//! twice as many offspring as there are members, half from parents of
//! similar fitness and half from random parents, then keeps only the
//! fittest offspring. Parents never survive into the next generation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, mutation parameters, generation budget
//! - [`PopulationSearch`]: executes the evolutionary loop
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and random queen mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;

pub use config::GaConfig;
pub use runner::PopulationSearch;
