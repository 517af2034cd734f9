//! N-Queens by stochastic local search.
//!
//! Places `n` queens on an `n × n` board so that no two attack each
//! other, using one of two independent strategies:
//!
//! - **Simulated Annealing (SA)**: single-board trajectory search with
//!   probabilistic uphill moves and geometric cooling.
//! - **Genetic Algorithm (GA)**: a small population evolved by
//!   assortative and random single-point crossover, fitness-dependent
//!   mutation, and truncation survival.
//!
//! Both implement [`search::Search`], the contract used by
//! [`trial::TrialRunner`] to run repeated trials and aggregate solve
//! rate, iteration counts, and run time.
//!
//! # Architecture
//!
//! [`board`] holds the representation and cost model shared by both
//! strategies. Every search owns its random source; construct with a
//! seed for reproducible runs or inject any [`rand::Rng`] directly.

pub mod board;
pub mod error;
pub mod ga;
pub mod sa;
pub mod search;
pub mod trial;
