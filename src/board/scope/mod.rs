//! Scope generation: the squares a piece could move to, ignoring whether
//! the move would leave its own king in check.
//!
//! Each piece kind keeps its rule in its own file:
//! - `pawns.rs` - pushes, double steps, diagonal and en passant captures
//! - `knights.rs` - fixed-offset jumps (shared with the king)
//! - `sliders.rs` - ray casting for bishops, rooks and queens
//! - `kings.rs` - king steps plus the castling destinations

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::CastlePath;
pub(crate) use pawns::pawn_diagonals;

use super::attack_tables::{BISHOP_DIRECTIONS, KNIGHT_JUMPS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Color, Piece, Position, Square, SquareSet};

impl Piece {
    /// Squares a `color` piece of this kind standing on `from` could
    /// pseudo-legally move to in `position`.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Color, Piece, Position, Square};
    ///
    /// let position = Position::start();
    /// let scope = Piece::Knight.calculate_scope(&position, Square(7, 1), Color::White);
    /// assert_eq!(scope.len(), 2);
    /// ```
    #[must_use]
    pub fn calculate_scope(self, position: &Position, from: Square, color: Color) -> SquareSet {
        match self {
            Piece::Pawn => position.pawn_scope(from, color),
            Piece::Knight => position.jump_scope(&KNIGHT_JUMPS, from, color),
            Piece::Bishop => position.ray_scope(from, color, &BISHOP_DIRECTIONS),
            Piece::Rook => position.ray_scope(from, color, &ROOK_DIRECTIONS),
            Piece::Queen => position.ray_scope(from, color, &QUEEN_DIRECTIONS),
            Piece::King => position.king_scope(from, color),
        }
    }
}

impl Position {
    /// Scope of whatever stands on `from`; empty for an empty or
    /// off-board square.
    #[must_use]
    pub fn scope(&self, from: Square) -> SquareSet {
        if !from.is_on_board() {
            return SquareSet::EMPTY;
        }
        match self.board.piece_at(from) {
            Some((color, piece)) => piece.calculate_scope(self, from, color),
            None => SquareSet::EMPTY,
        }
    }
}
