//! Board representation for the N-Queens problem.
//!
//! A board is encoded column-wise: one queen per column, and the value
//! stored for a column is the row that queen occupies. Row and column
//! collisions across columns are therefore impossible by construction,
//! leaving same-row and same-diagonal pairs as the only conflicts.
//!
//! # Key Types
//!
//! - [`BoardState`]: one candidate placement with cost and fitness queries
//! - [`max_fitness`]: number of queen pairs on an `n × n` board

mod state;

pub use state::{max_fitness, BoardState};
