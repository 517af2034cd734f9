//! Repeated independent trials and their aggregate statistics.
//!
//! [`TrialRunner`] drives any [`Search`] through a number of trials,
//! resetting it between runs, and folds the outcomes into a
//! [`TrialSummary`].

use crate::error::ConfigError;
use crate::search::Search;
use log::info;
use std::fmt;
use std::time::Duration;

/// Configuration for a batch of trials.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Number of independent runs.
    pub trials: usize,

    /// Render each run's final board (or `No solution`).
    pub render_board: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            render_board: false,
        }
    }
}

impl TrialConfig {
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_render_board(mut self, render: bool) -> Self {
        self.render_board = render;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }
}

/// Aggregate outcome of a batch of trials.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    pub trials: usize,
    pub solved: usize,
    pub total_iterations: usize,
    pub total_elapsed: Duration,
}

impl TrialSummary {
    /// Folds one finished run into the summary.
    pub fn record(&mut self, solved: bool, iterations: usize, elapsed: Duration) {
        self.trials += 1;
        if solved {
            self.solved += 1;
        }
        self.total_iterations += iterations;
        self.total_elapsed += elapsed;
    }

    /// Solved runs as a percentage of all runs.
    pub fn solve_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.solved as f64 / self.trials as f64 * 100.0
    }

    pub fn mean_iterations(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_iterations as f64 / self.trials as f64
    }

    pub fn mean_elapsed(&self) -> Duration {
        if self.trials == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total_elapsed.as_nanos() / self.trials as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        self.solved += other.solved;
        self.total_iterations += other.total_iterations;
        self.total_elapsed += other.total_elapsed;
        self
    }
}

/// Three report lines. Averages always carry a decimal point (`20.0`,
/// `50.0%`).
impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average number of iterations: {:?}", self.mean_iterations())?;
        writeln!(
            f,
            "Average run time: {:?} seconds",
            self.mean_elapsed().as_secs_f64()
        )?;
        write!(f, "Solve rate: {:?}%", self.solve_rate())
    }
}

/// Runs a search repeatedly and aggregates the results.
///
/// # Usage
///
/// ```
/// use nqueens_search::sa::{AnnealingSearch, SaConfig};
/// use nqueens_search::trial::{TrialConfig, TrialRunner};
///
/// let mut search = AnnealingSearch::new(6, SaConfig::default().with_seed(1)).unwrap();
/// let runner = TrialRunner::new(TrialConfig::default().with_trials(5)).unwrap();
/// let summary = runner.run(&mut search);
/// assert_eq!(summary.trials, 5);
/// ```
#[derive(Debug, Clone)]
pub struct TrialRunner {
    config: TrialConfig,
}

impl TrialRunner {
    pub fn new(config: TrialConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Runs `config.trials` trials on one search instance, calling
    /// [`Search::reset`] after each.
    pub fn run<S: Search + ?Sized>(&self, search: &mut S) -> TrialSummary {
        let mut summary = TrialSummary::default();

        for _ in 0..self.config.trials {
            let solved = search.solve(self.config.render_board);
            summary.record(solved, search.iterations_used(), search.elapsed_time());
            search.reset();
        }

        info!(
            "{} trials: solve rate {:.1}%, mean iterations {:.1}",
            summary.trials,
            summary.solve_rate(),
            summary.mean_iterations()
        );
        summary
    }

    /// Runs the trials in parallel, each on its own search built by
    /// `factory(trial_index)`.
    ///
    /// Boards are never rendered here: concurrent output would interleave.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<S, F>(&self, factory: F) -> Result<TrialSummary, ConfigError>
    where
        S: Search,
        F: Fn(usize) -> Result<S, ConfigError> + Sync,
    {
        use rayon::prelude::*;

        let summaries: Vec<TrialSummary> = (0..self.config.trials)
            .into_par_iter()
            .map(|trial| {
                let mut search = factory(trial)?;
                let mut summary = TrialSummary::default();
                let solved = search.solve(false);
                summary.record(solved, search.iterations_used(), search.elapsed_time());
                Ok(summary)
            })
            .collect::<Result<_, ConfigError>>()?;

        let summary = summaries
            .into_iter()
            .fold(TrialSummary::default(), TrialSummary::merge);

        info!(
            "{} parallel trials: solve rate {:.1}%, mean iterations {:.1}",
            summary.trials,
            summary.solve_rate(),
            summary.mean_iterations()
        );
        Ok(summary)
    }
}
