//! Candidate placements and their cost model.

use rand::Rng;
use std::fmt;

/// Returns the number of distinct queen pairs on an `n × n` board.
///
/// This is both the worst possible cost and the fitness of a solved
/// board: `n * (n - 1) / 2`.
///
/// ```
/// use nqueens_search::board::max_fitness;
///
/// assert_eq!(max_fitness(8), 28);
/// assert_eq!(max_fitness(1), 0);
/// ```
pub fn max_fitness(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// One candidate placement of `n` queens, one per column.
///
/// `placements[column]` is the row of the queen in that column. Conflicts
/// are allowed and measured by [`cost`](BoardState::cost); the only
/// mutation is [`move_queen`](BoardState::move_queen). Use `clone()` to
/// branch off an independent copy before mutating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    placements: Vec<usize>,
}

impl BoardState {
    /// Creates a board with every row drawn uniformly from `[0, n)`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let placements = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { placements }
    }

    /// Creates a board from an explicit placement sequence.
    ///
    /// The length of `placements` defines the board size.
    ///
    /// # Panics
    /// Panics if `placements` is empty.
    pub fn from_placements(placements: Vec<usize>) -> Self {
        assert!(!placements.is_empty(), "placements must not be empty");
        debug_assert!(
            placements.iter().all(|&row| row < placements.len()),
            "row out of range in {placements:?}"
        );
        Self { placements }
    }

    /// Board size `n`.
    pub fn size(&self) -> usize {
        self.placements.len()
    }

    pub fn placements(&self) -> &[usize] {
        &self.placements
    }

    /// Row of the queen in `column`.
    pub fn placement(&self, column: usize) -> usize {
        self.placements[column]
    }

    /// Puts the queen of `column` on `row`.
    ///
    /// # Panics
    /// Panics if `column >= n`. In debug builds also panics if `row >= n`.
    pub fn move_queen(&mut self, row: usize, column: usize) {
        debug_assert!(
            row < self.placements.len(),
            "row {row} out of range for board of size {}",
            self.placements.len()
        );
        self.placements[column] = row;
    }

    /// Number of attacking pairs: same row or same diagonal.
    ///
    /// O(n²) scan over all unordered column pairs.
    pub fn cost(&self) -> usize {
        let p = &self.placements;
        let n = p.len();
        let mut cost = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if p[i] == p[j] || p[i].abs_diff(p[j]) == j - i {
                    cost += 1;
                }
            }
        }
        cost
    }

    /// `max_fitness(n) - cost()`. Higher is better.
    pub fn fitness(&self) -> usize {
        self.max_fitness() - self.cost()
    }

    pub fn max_fitness(&self) -> usize {
        max_fitness(self.placements.len())
    }

    /// True when no two queens attack each other.
    pub fn is_solved(&self) -> bool {
        self.cost() == 0
    }

    /// True when fitness is below half of the maximum (integer halving).
    ///
    /// The genetic algorithm mutates such offspring more aggressively.
    pub fn is_below_half_fitness(&self) -> bool {
        self.fitness() < self.max_fitness() / 2
    }

    /// Writes the grid to stdout. See the [`Display`](fmt::Display) impl.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// Renders the board top row first (row `n - 1`), one line per row.
/// Each cell is `Q|` when occupied and ` |` otherwise.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.placements.len();
        for row in (0..n).rev() {
            for &queen_row in &self.placements {
                f.write_str(if queen_row == row { "Q|" } else { " |" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_max_fitness_identity() {
        for n in 1..20 {
            assert_eq!(max_fitness(n), n * (n - 1) / 2);
        }
        assert_eq!(max_fitness(4), 6);
        assert_eq!(max_fitness(8), 28);
    }

    #[test]
    fn test_known_solution_n4() {
        let board = BoardState::from_placements(vec![1, 3, 0, 2]);
        assert_eq!(board.cost(), 0);
        assert_eq!(board.fitness(), 6);
        assert!(board.is_solved());
    }

    #[test]
    fn test_all_same_row_is_worst() {
        let board = BoardState::from_placements(vec![0; 6]);
        assert_eq!(board.cost(), max_fitness(6));
        assert_eq!(board.fitness(), 0);
        assert!(board.is_below_half_fitness());
    }

    #[test]
    fn test_main_diagonal() {
        let board = BoardState::from_placements(vec![0, 1, 2, 3, 4]);
        assert_eq!(board.cost(), 10);
    }

    #[test]
    fn test_single_queen_always_solved() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = BoardState::random(1, &mut rng);
        assert_eq!(board.placements(), &[0]);
        assert_eq!(board.cost(), 0);
        assert_eq!(board.fitness(), board.max_fitness());
    }

    #[test]
    fn test_no_solution_for_two_and_three() {
        for n in [2usize, 3] {
            let total = n.pow(n as u32);
            for code in 0..total {
                let mut rest = code;
                let placements: Vec<usize> = (0..n)
                    .map(|_| {
                        let row = rest % n;
                        rest /= n;
                        row
                    })
                    .collect();
                let board = BoardState::from_placements(placements);
                assert!(board.cost() > 0, "unexpected solution {board:?}");
            }
        }
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..16 {
            let board = BoardState::random(n, &mut rng);
            assert_eq!(board.size(), n);
            assert!(board.placements().iter().all(|&r| r < n));
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = BoardState::from_placements(vec![0, 1, 2, 3]);
        let mut copy = original.clone();
        copy.move_queen(3, 0);
        assert_eq!(original.placement(0), 0);
        assert_eq!(copy.placement(0), 3);
    }

    #[test]
    fn test_below_half_uses_integer_halving() {
        // n = 4: max 6, threshold 3. Cost 3 -> fitness 3, not below half.
        let board = BoardState::from_placements(vec![0, 0, 3, 3]);
        assert_eq!(board.cost(), 3);
        assert!(!board.is_below_half_fitness());
        let board = BoardState::from_placements(vec![0, 0, 0, 0]);
        assert!(board.is_below_half_fitness());
    }

    #[test]
    fn test_display_top_row_first() {
        let board = BoardState::from_placements(vec![1, 3, 0, 2]);
        let expected = " |Q| | |\n | | |Q|\nQ| | | |\n | |Q| |\n";
        assert_eq!(board.to_string(), expected);
        board.print();
    }

    #[test]
    #[should_panic(expected = "placements must not be empty")]
    fn test_from_empty_placements_panics() {
        BoardState::from_placements(Vec::new());
    }

    fn placements_strategy() -> impl Strategy<Value = Vec<usize>> {
        (1usize..12).prop_flat_map(|n| prop::collection::vec(0..n, n))
    }

    proptest! {
        #[test]
        fn prop_fitness_plus_cost_is_max(placements in placements_strategy()) {
            let board = BoardState::from_placements(placements);
            prop_assert_eq!(board.fitness() + board.cost(), board.max_fitness());
        }

        #[test]
        fn prop_cost_invariant_under_mirroring(placements in placements_strategy()) {
            let n = placements.len();
            let board = BoardState::from_placements(placements.clone());

            let reversed: Vec<usize> = placements.iter().rev().copied().collect();
            let flipped: Vec<usize> = placements.iter().map(|&r| n - 1 - r).collect();

            prop_assert_eq!(BoardState::from_placements(reversed).cost(), board.cost());
            prop_assert_eq!(BoardState::from_placements(flipped).cost(), board.cost());
        }

        #[test]
        fn prop_move_queen_idempotent(
            (placements, row, column) in placements_strategy()
                .prop_flat_map(|p| { let n = p.len(); (Just(p), 0..n, 0..n) })
        ) {
            let mut once = BoardState::from_placements(placements);
            once.move_queen(row, column);
            let mut twice = once.clone();
            twice.move_queen(row, column);
            prop_assert_eq!(once, twice);
        }
    }
}
