//! Column table: where each level's values land on the character grid.

use std::fmt;

use itertools::Itertools;
use tracing::{instrument, trace};

/// Per-level column indices for a fully balanced tree, root row first.
///
/// For depth 3 the table is `[[3], [1, 5], [0, 2, 4, 6]]`: leaves occupy every
/// even column and each parent sits at the midpoint of its two children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnTable {
    rows: Vec<Vec<usize>>,
}

impl ColumnTable {
    /// Builds the table for a balanced tree of `depth` levels.
    ///
    /// Depth 0 gives an empty table.
    #[instrument(level = "debug")]
    pub fn build(depth: usize) -> Self {
        if depth == 0 {
            return Self::default();
        }
        let leaf_count = 1usize << (depth - 1);
        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(depth);
        rows.push((0..leaf_count).map(|i| 2 * i).collect());

        while rows.len() < depth {
            let below = &rows[rows.len() - 1];
            let parents: Vec<usize> = below
                .iter()
                .tuples()
                .map(|(left, right)| (left + right) / 2)
                .collect();
            trace!("derived row {:?} from {:?}", parents, below);
            rows.push(parents);
        }

        rows.reverse();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Total number of value slots across all rows.
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Character width of the widest row (rightmost leaf column + 1).
    pub fn width(&self) -> usize {
        self.rows
            .last()
            .and_then(|row| row.last())
            .map_or(0, |column| column + 1)
    }
}

impl fmt::Display for ColumnTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .rows
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join(", ");
        write!(f, "[{}]", rows)
    }
}
