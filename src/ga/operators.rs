//! Crossover and mutation on column-encoded boards.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//! - [`crossover`]: the same with a random cut point
//!
//! # Mutation Operators
//!
//! - [`mutate`]: move random queens to random rows
//!
//! No repair step is applied. Offspring may carry arbitrary conflicts;
//! selection pressure is what removes them.

use crate::board::BoardState;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Builds a child from `first[..cut]` followed by `second[cut..]`.
///
/// A cut of 0 copies `second`; a cut of `n` copies `first`.
///
/// # Panics
/// Panics if the parents differ in size or `cut > n`.
pub fn single_point_crossover(first: &BoardState, second: &BoardState, cut: usize) -> BoardState {
    let n = first.size();
    assert_eq!(n, second.size(), "parents must have equal size");
    assert!(cut <= n, "cut point {cut} beyond board size {n}");

    let mut placements = Vec::with_capacity(n);
    placements.extend_from_slice(&first.placements()[..cut]);
    placements.extend_from_slice(&second.placements()[cut..]);
    BoardState::from_placements(placements)
}

/// Single-point crossover with the cut drawn uniformly from `[0, n)`.
///
/// The child therefore always inherits at least its last column from
/// `second`.
pub fn crossover<R: Rng>(first: &BoardState, second: &BoardState, rng: &mut R) -> BoardState {
    let cut = rng.random_range(0..first.size());
    single_point_crossover(first, second, cut)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Applies `count` random queen moves. Column and row are drawn
/// independently each time, so a column may be hit more than once.
pub fn mutate<R: Rng>(board: &mut BoardState, count: usize, rng: &mut R) {
    let n = board.size();
    for _ in 0..count {
        let column = rng.random_range(0..n);
        let row = rng.random_range(0..n);
        board.move_queen(row, column);
    }
}

// ============================================================================
// Tests
// ============================================================================
