//! Check detection.

use super::attack_tables::KING_STEPS;
use super::scope::pawn_diagonals;
use super::{Color, Piece, Position, Square, SquareSet};

impl Position {
    /// Squares a `color` piece on `from` could capture on.
    ///
    /// Same as its scope except that pawns attack only their diagonals and
    /// a king never attacks through castling.
    pub(crate) fn attacks(&self, piece: Piece, from: Square, color: Color) -> SquareSet {
        match piece {
            Piece::Pawn => pawn_diagonals(from, color)
                .filter(|&to| self.board.color_on(to) != Some(color))
                .collect(),
            Piece::King => self.jump_scope(&KING_STEPS, from, color),
            _ => piece.calculate_scope(self, from, color),
        }
    }

    /// Whether any piece of `by` could capture on `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.board
            .pieces(by)
            .any(|(from, piece)| self.attacks(piece, from, by).contains(square))
    }

    /// Whether `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether the side to move is in check
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }
}
