use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

/// The 8x8 grid. Row 0 is rank 8, column 0 is file a.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard initial arrangement of the pieces
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (column, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, column), Color::Black, *piece);
            board.set_piece(Square(1, column), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, column), Color::White, Piece::Pawn);
            board.set_piece(Square(7, column), Color::White, *piece);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.0][sq.1]
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.0][sq.1] = Some((color, piece));
    }

    /// Empty a square, returning what stood there
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.0][sq.1].take()
    }

    /// Every occupied square of one color with its piece, a8 first
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color).filter(|&(_, p)| p == piece).count()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Index<Square> for Board {
    type Output = Option<(Color, Piece)>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.0][sq.1]
    }
}

/// One line per row, `-` for an empty cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('-', |(color, piece)| piece.to_fen_char(color)))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A full game position: board plus the metadata FEN carries.
///
/// A position is mutated in place by `apply`/`undo`; clone it explicitly
/// when a copy is needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// FEN of the standard starting position
    pub const START_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// The standard starting position
    #[must_use]
    pub fn start() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.find_king(color)
    }

    /// Human-readable summary of the position's metadata.
    ///
    /// Colors are written out in full and king squares in algebraic
    /// notation (`White king is at e1.`), not as `W` and `(row, column)`
    /// pairs.
    ///
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let summary = Position::start().describe();
    /// assert!(summary.starts_with("White to move.\nCastling: KQkq\n"));
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = format!("{} to move.\n", self.side_to_move);
        if self.castling_rights.is_empty() {
            out.push_str("Neither side can castle.\n");
        } else {
            out.push_str(&format!("Castling: {}\n", self.castling_rights));
        }
        if let Some(ep) = self.en_passant {
            out.push_str(&format!("En passant available on {ep}.\n"));
        }
        for color in Color::BOTH {
            match self.king_square(color) {
                Some(sq) => out.push_str(&format!("{color} king is at {sq}.\n")),
                None => out.push_str(&format!("{color} king is missing.\n")),
            }
        }
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}
