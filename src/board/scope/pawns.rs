use super::super::{Color, Piece, Position, Square, SquareSet};

impl Position {
    pub(crate) fn pawn_scope(&self, from: Square, color: Color) -> SquareSet {
        let mut scope = SquareSet::EMPTY;
        let direction = color.pawn_direction();

        if let Some(one) = from.offset(direction, 0) {
            if self.board.is_empty(one) {
                scope.insert(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(direction, 0) {
                        if self.board.is_empty(two) {
                            scope.insert(two);
                        }
                    }
                }
            }
        }

        for target in pawn_diagonals(from, color) {
            let holds_enemy = self.board.color_on(target) == Some(color.opponent());
            let en_passant = self.en_passant == Some(target)
                && target.row() == color.en_passant_row()
                && self.board.piece_at(Square(from.row(), target.column()))
                    == Some((color.opponent(), Piece::Pawn));
            if holds_enemy || en_passant {
                scope.insert(target);
            }
        }

        scope
    }
}

/// The (at most two) forward-diagonal squares of a pawn.
pub(crate) fn pawn_diagonals(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let direction = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |dc| from.offset(direction, dc))
}
