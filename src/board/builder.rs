//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::error::FenError;
use super::fen::{check_en_passant, check_king_count};
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder with an empty board and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position, refusing boards without exactly one king per
    /// color.
    pub fn build(self) -> Result<Position, FenError> {
        check_king_count(&self.board)?;
        if let Some(target) = self.en_passant {
            check_en_passant(&self.board, self.side_to_move, target)?;
        }
        Ok(Position {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        })
    }
}
