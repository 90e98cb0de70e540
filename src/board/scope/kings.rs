use super::super::attack_tables::KING_STEPS;
use super::super::{Color, Piece, Position, Square, SquareSet};

/// Geometry of one castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CastlePath {
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    /// Square the king crosses between `king_from` and `king_to`
    pub(crate) king_passes: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
}

impl CastlePath {
    pub(crate) const fn new(color: Color, kingside: bool) -> Self {
        let row = color.back_row();
        if kingside {
            CastlePath {
                king_from: Square(row, 4),
                king_to: Square(row, 6),
                king_passes: Square(row, 5),
                rook_from: Square(row, 7),
                rook_to: Square(row, 5),
            }
        } else {
            CastlePath {
                king_from: Square(row, 4),
                king_to: Square(row, 2),
                king_passes: Square(row, 3),
                rook_from: Square(row, 0),
                rook_to: Square(row, 3),
            }
        }
    }

    /// The castling move a `color` king going `from` → `to` would be, if any.
    pub(crate) fn for_king_move(color: Color, from: Square, to: Square) -> Option<Self> {
        [true, false]
            .into_iter()
            .map(|kingside| CastlePath::new(color, kingside))
            .find(|path| path.king_from == from && path.king_to == to)
    }

    /// Columns strictly between the king and the rook
    fn between(&self) -> impl Iterator<Item = Square> {
        let row = self.king_from.row();
        let (low, high) = if self.rook_from.column() < self.king_from.column() {
            (self.rook_from.column(), self.king_from.column())
        } else {
            (self.king_from.column(), self.rook_from.column())
        };
        (low + 1..high).map(move |column| Square(row, column))
    }
}

impl Position {
    pub(crate) fn king_scope(&self, from: Square, color: Color) -> SquareSet {
        let mut scope = self.jump_scope(&KING_STEPS, from, color);

        for kingside in [true, false] {
            let path = CastlePath::new(color, kingside);
            if path.king_from == from && self.castling_available(color, kingside, &path) {
                scope.insert(path.king_to);
            }
        }

        scope
    }

    /// Rights flag set, path between king and rook empty and the rook home.
    ///
    /// Whether the king's path is attacked is not considered here.
    fn castling_available(&self, color: Color, kingside: bool, path: &CastlePath) -> bool {
        self.castling_rights.has(color, kingside)
            && path.between().all(|sq| self.board.is_empty(sq))
            && self.board.piece_at(path.rook_from) == Some((color, Piece::Rook))
    }
}
