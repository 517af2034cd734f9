//! The contract shared by both search strategies.
//!
//! [`TrialRunner`](crate::trial::TrialRunner) drives any [`Search`]
//! repeatedly: `solve`, read the metrics, `reset`, repeat.

use crate::board::BoardState;
use std::time::Duration;

/// Where a search stands after its most recent `solve` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// Not run yet, or reset since the last run.
    Searching,
    /// A board with cost 0 was found.
    Solved,
    /// The iteration budget ran out first. A normal outcome, not an error.
    IterationLimitReached,
}

/// A stochastic N-Queens search.
pub trait Search {
    /// Runs the search until it is solved or its iteration budget is spent.
    ///
    /// When `render_board` is true the final board is written to stdout,
    /// or the line `No solution` when unsolved. Returns true iff solved.
    fn solve(&mut self, render_board: bool) -> bool;

    /// Iterations (or generations) consumed by the most recent `solve`.
    fn iterations_used(&self) -> usize;

    /// Wall-clock duration of the most recent `solve`.
    fn elapsed_time(&self) -> Duration;

    /// Starts over from fresh random state and zeroes the metrics.
    fn reset(&mut self);

    /// Outcome of the most recent `solve`.
    fn status(&self) -> SearchStatus;

    /// The current board, or the fittest population member.
    fn best(&self) -> &BoardState;
}

/// Writes the outcome of a finished search the way `solve` renders it.
pub(crate) fn render_outcome(best: &BoardState, solved: bool) {
    if solved {
        println!("{best}");
    } else {
        println!("No solution");
    }
}
