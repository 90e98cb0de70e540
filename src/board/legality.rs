//! Move validation, legal move enumeration and perft.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::IllegalMove;
use super::scope::CastlePath;
use super::{Color, Move, MoveDelta, MoveRecord, Piece, Position};

/// Rule switches for the validator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    /// Refuse castling out of, through or into check
    pub strict_castling: bool,
}

impl Rules {
    /// Full FIDE castling restrictions
    #[must_use]
    pub const fn strict() -> Self {
        Rules {
            strict_castling: true,
        }
    }
}

impl Position {
    /// Whether `mv` is legal here. The position is left unchanged.
    ///
    /// ```
    /// use chess_rules::board::{Move, Position, Square};
    ///
    /// let mut position = Position::start();
    /// assert!(position.legal_move(Move::new(Square(6, 4), Square(4, 4))));
    /// assert!(!position.legal_move(Move::new(Square(6, 4), Square(3, 4))));
    /// assert_eq!(position, Position::start());
    /// ```
    pub fn legal_move(&mut self, mv: Move) -> bool {
        self.legal_move_with(mv, Rules::default())
    }

    pub fn legal_move_with(&mut self, mv: Move, rules: Rules) -> bool {
        match self.checked_apply(mv, rules) {
            Ok(record) => {
                self.undo(record);
                true
            }
            Err(_) => false,
        }
    }

    /// Validate `mv` and keep it if legal, reporting the changed squares.
    pub fn validate_and_apply(&mut self, mv: Move) -> Result<MoveDelta, IllegalMove> {
        self.validate_and_apply_with(mv, Rules::default())
    }

    pub fn validate_and_apply_with(
        &mut self,
        mv: Move,
        rules: Rules,
    ) -> Result<MoveDelta, IllegalMove> {
        self.checked_apply(mv, rules).map(|record| record.delta())
    }

    /// Validate and apply `mv`, returning the record so it can be undone.
    ///
    /// On refusal the position is exactly as it was.
    pub fn checked_apply(&mut self, mv: Move, rules: Rules) -> Result<MoveRecord, IllegalMove> {
        let result = self.check_move(mv, rules).and_then(|color| {
            let record = self.apply(mv)?;
            if self.in_check(color) {
                self.undo(record);
                Err(IllegalMove::LeavesKingInCheck)
            } else {
                Ok(record)
            }
        });

        #[cfg(feature = "logging")]
        if let Err(reason) = &result {
            log::debug!("rejected {mv}: {reason}");
        }

        result
    }

    /// Every check short of the self-check test, in order.
    fn check_move(&self, mv: Move, rules: Rules) -> Result<Color, IllegalMove> {
        let (color, piece) = mv
            .from
            .is_on_board()
            .then(|| self.board.piece_at(mv.from))
            .flatten()
            .ok_or(IllegalMove::EmptySquare { square: mv.from })?;

        // Scope sets only hold on-board squares.
        if !piece.calculate_scope(self, mv.from, color).contains(mv.to) {
            return Err(IllegalMove::OutOfScope {
                from: mv.from,
                to: mv.to,
            });
        }
        if color != self.side_to_move {
            return Err(IllegalMove::WrongTurn { color });
        }
        if matches!(self.board.piece_at(mv.to), Some((_, Piece::King))) {
            return Err(IllegalMove::KingCapture { square: mv.to });
        }

        if let Some(promotion) = mv.promotion {
            let promotes = piece == Piece::Pawn && mv.to.row() == color.promotion_row();
            if !promotes || !promotion.is_promotion_target() {
                return Err(IllegalMove::InvalidPromotion);
            }
        }

        if rules.strict_castling && piece == Piece::King {
            if let Some(path) = CastlePath::for_king_move(color, mv.from, mv.to) {
                let enemy = color.opponent();
                let attacked = [path.king_from, path.king_passes, path.king_to]
                    .into_iter()
                    .any(|sq| self.is_square_attacked(sq, enemy));
                if attacked {
                    return Err(IllegalMove::CastlingThroughCheck);
                }
            }
        }

        Ok(color)
    }

    /// All legal moves for the side to move.
    ///
    /// A promoting pawn move appears once per promotion piece.
    pub fn legal_moves(&mut self, rules: Rules) -> Vec<Move> {
        let side = self.side_to_move;
        let pieces: Vec<_> = self.board.pieces(side).collect();
        let mut moves = Vec::with_capacity(64);

        for (from, piece) in pieces {
            for to in piece.calculate_scope(self, from, side) {
                if !self.legal_move_with(Move::new(from, to), rules) {
                    continue;
                }
                if piece == Piece::Pawn && to.row() == side.promotion_row() {
                    moves.extend(
                        Piece::ALL
                            .into_iter()
                            .filter(|p| p.is_promotion_target())
                            .map(|p| Move::with_promotion(from, to, p)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize, rules: Rules) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(rules);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            if let Ok(record) = self.apply(mv) {
                nodes += self.perft(depth - 1, rules);
                self.undo(record);
            }
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    #[test]
    fn test_rejections_in_order() {
        let mut position = Position::start();
        assert_eq!(
            position.validate_and_apply(mv("e4e5")),
            Err(IllegalMove::EmptySquare {
                square: Square(4, 4)
            })
        );
        assert_eq!(
            position.validate_and_apply(mv("e7e4")),
            Err(IllegalMove::OutOfScope {
                from: Square(1, 4),
                to: Square(4, 4)
            })
        );
        assert_eq!(
            position.validate_and_apply(mv("e7e5")),
            Err(IllegalMove::WrongTurn {
                color: Color::Black
            })
        );
        assert_eq!(
            position.validate_and_apply(mv("e2e4q")),
            Err(IllegalMove::InvalidPromotion)
        );
        assert_eq!(position, Position::start());
    }

    #[test]
    fn test_king_capture_is_refused() {
        let mut position = Position::from_fen("R3k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            position.validate_and_apply(mv("a8e8")),
            Err(IllegalMove::KingCapture {
                square: Square(0, 4)
            })
        );
    }

    #[test]
    fn test_en_passant_cannot_take_a_king() {
        let mut position = Position::from_fen("8/8/8/3kP3/8/8/8/4K3 w - - 0 1").unwrap();
        position.en_passant = Some(Square(2, 3));
        let before = position.clone();
        assert_eq!(
            position.validate_and_apply(mv("e5d6")),
            Err(IllegalMove::OutOfScope {
                from: Square(3, 4),
                to: Square(2, 3)
            })
        );
        assert_eq!(position, before);
        assert_eq!(position.king_square(Color::Black), Some(Square(3, 3)));
    }

    #[test]
    fn test_off_board_squares_are_refused() {
        let mut position = Position::start();
        assert_eq!(
            position.validate_and_apply(Move::new(Square(8, 0), Square(7, 0))),
            Err(IllegalMove::EmptySquare {
                square: Square(8, 0)
            })
        );
        assert_eq!(
            position.validate_and_apply(Move::new(Square(6, 0), Square(9, 0))),
            Err(IllegalMove::OutOfScope {
                from: Square(6, 0),
                to: Square(9, 0)
            })
        );
        assert!(!position.legal_move(Move::new(Square(0, 12), Square(0, 0))));
        assert_eq!(position, Position::start());
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut position = Position::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let before = position.clone();
        assert_eq!(
            position.validate_and_apply(mv("e2d2")),
            Err(IllegalMove::LeavesKingInCheck)
        );
        assert_eq!(position, before);
        assert!(position.legal_move(mv("e2e5")));
    }

    #[test]
    fn test_strict_castling() {
        let fen = "4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1";
        let mut position = Position::from_fen(fen).unwrap();
        // f2 rook covers f1 but the king lands on g1 unattacked
        assert!(position.legal_move(mv("e1g1")));
        assert_eq!(
            position.validate_and_apply_with(mv("e1g1"), Rules::strict()),
            Err(IllegalMove::CastlingThroughCheck)
        );
        assert!(position.legal_move_with(mv("e1c1"), Rules::strict()));
    }

    #[test]
    fn test_validate_and_apply_reports_delta() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let delta = position.validate_and_apply(mv("e1g1")).unwrap();
        assert_eq!(delta.from, Square(7, 4));
        assert_eq!(delta.to, Square(7, 6));
        assert_eq!(delta.rook, Some((Square(7, 7), Square(7, 5))));
        assert_eq!(delta.captured, None);
        assert_eq!(position.side_to_move(), Color::Black);
    }

    #[test]
    fn test_legal_moves_from_start() {
        let mut position = Position::start();
        assert_eq!(position.legal_moves(Rules::default()).len(), 20);
        assert_eq!(position, Position::start());
    }

    #[test]
    fn test_promotions_are_expanded() {
        let mut position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = position.legal_moves(Rules::default());
        let promotions = moves.iter().filter(|m| m.promotion.is_some()).count();
        assert_eq!(promotions, 4);
        assert_eq!(moves.len(), 4 + 5);
    }
}
