//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scope.rs` - Per-piece scope on hand-checked positions
//! - `make_unmake.rs` - Place/apply/undo correctness
//! - `legality.rs` - Validator verdicts and rejection reasons
//! - `perft.rs` - Legal move tree counts against reference values
//! - `proptest.rs` - Property-based tests

mod perft;

use crate::board::{Square, SquareSet};

/// Build a set from (row, column) pairs
pub(super) fn squares(pairs: &[(usize, usize)]) -> SquareSet {
    pairs.iter().map(|&(row, column)| Square(row, column)).collect()
}
