//! Simulated Annealing (SA).
//!
//! A single-board trajectory search. Each iteration moves one queen;
//! improving moves are always taken and worsening moves are taken with
//! probability `exp(delta / T)`, where the temperature `T` decays
//! geometrically once per iteration.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.2

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{acceptance_probability, AnnealingSearch};
