//! Precomputed jump targets for the fixed-offset pieces.

use once_cell::sync::Lazy;

use super::{Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn jump_table(offsets: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (idx, targets) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *targets = offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

/// In-bounds knight destinations of every square, ignoring occupancy
pub(crate) static KNIGHT_JUMPS: Lazy<[SquareSet; 64]> = Lazy::new(|| jump_table(&KNIGHT_OFFSETS));

/// In-bounds king steps of every square, ignoring occupancy
pub(crate) static KING_STEPS: Lazy<[SquareSet; 64]> = Lazy::new(|| jump_table(&KING_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_jumps_from_corner_and_center() {
        assert_eq!(KNIGHT_JUMPS[Square(0, 0).as_index()].len(), 2);
        assert_eq!(KNIGHT_JUMPS[Square(4, 4).as_index()].len(), 8);
        assert!(KNIGHT_JUMPS[Square(0, 0).as_index()].contains(Square(1, 2)));
        assert!(KNIGHT_JUMPS[Square(0, 0).as_index()].contains(Square(2, 1)));
    }

    #[test]
    fn test_king_steps_from_edge() {
        assert_eq!(KING_STEPS[Square(7, 4).as_index()].len(), 5);
        assert_eq!(KING_STEPS[Square(7, 7).as_index()].len(), 3);
        assert_eq!(KING_STEPS[Square(3, 3).as_index()].len(), 8);
    }
}
