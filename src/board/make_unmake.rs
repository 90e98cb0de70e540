use super::error::IllegalMove;
use super::scope::CastlePath;
use super::{Capture, Color, Move, MoveRecord, Piece, Position, Square};

/// Which castling side a rook on `sq` guards for `color`, if it is a corner.
fn corner_side(color: Color, sq: Square) -> Option<bool> {
    [true, false]
        .into_iter()
        .find(|&kingside| CastlePath::new(color, kingside).rook_from == sq)
}

impl Position {
    /// Move the piece on `mv.from` to `mv.to`, touching only the board.
    ///
    /// Handles captures, en passant, the castling rook and promotion, but
    /// leaves side to move, castling rights, en passant target and clocks
    /// as they were. No legality checking is done beyond refusing an empty
    /// or off-board origin and an off-board destination.
    pub fn place(&mut self, mv: Move) -> Result<MoveRecord, IllegalMove> {
        let (color, piece) = mv
            .from
            .is_on_board()
            .then(|| self.board.piece_at(mv.from))
            .flatten()
            .ok_or(IllegalMove::EmptySquare { square: mv.from })?;
        if !mv.to.is_on_board() {
            return Err(IllegalMove::OutOfScope {
                from: mv.from,
                to: mv.to,
            });
        }

        let mut record = MoveRecord {
            from: mv.from,
            to: mv.to,
            color,
            piece,
            captured: None,
            rook: None,
            promoted: None,
            previous_side_to_move: self.side_to_move,
            previous_castling_rights: self.castling_rights,
            previous_en_passant: self.en_passant,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let behind = Square(mv.from.row(), mv.to.column());
        let en_passant = piece == Piece::Pawn
            && self.en_passant == Some(mv.to)
            && mv.from.column() != mv.to.column()
            && self.board.is_empty(mv.to)
            && self.board.piece_at(behind) == Some((color.opponent(), Piece::Pawn));
        let captured_square = if en_passant { behind } else { mv.to };
        record.captured = self
            .board
            .clear(captured_square)
            .map(|(captured_color, captured_piece)| Capture {
                square: captured_square,
                color: captured_color,
                piece: captured_piece,
            });

        self.board.clear(mv.from);
        let placed = if piece == Piece::Pawn && mv.to.row() == color.promotion_row() {
            let promoted = mv.promotion.unwrap_or(Piece::Queen);
            record.promoted = Some(promoted);
            promoted
        } else {
            piece
        };
        self.board.set_piece(mv.to, color, placed);

        if piece == Piece::King {
            if let Some(path) = CastlePath::for_king_move(color, mv.from, mv.to) {
                let rook_home = self.board.piece_at(path.rook_from) == Some((color, Piece::Rook));
                if rook_home && self.board.is_empty(path.rook_to) {
                    self.board.clear(path.rook_from);
                    self.board.set_piece(path.rook_to, color, Piece::Rook);
                    record.rook = Some((path.rook_from, path.rook_to));
                }
            }
        }

        Ok(record)
    }

    /// Play `mv`: the board update of [`Position::place`] plus side to
    /// move, en passant target, castling rights and clocks.
    ///
    /// ```
    /// use chess_rules::board::{Move, Position, Square};
    ///
    /// let mut position = Position::start();
    /// let record = position.apply(Move::new(Square(6, 4), Square(4, 4))).unwrap();
    /// assert_eq!(position.en_passant(), Some(Square(5, 4)));
    ///
    /// position.undo(record);
    /// assert_eq!(position, Position::start());
    /// ```
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord, IllegalMove> {
        let record = self.place(mv)?;

        self.revoke_castling_rights(&record);

        self.en_passant = if record.piece == Piece::Pawn
            && record.from.row().abs_diff(record.to.row()) == 2
        {
            Some(Square(
                (record.from.row() + record.to.row()) / 2,
                record.from.column(),
            ))
        } else {
            None
        };

        if record.piece == Piece::Pawn || record.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();

        #[cfg(feature = "logging")]
        log::trace!("applied {mv} ({} {:?})", record.color, record.piece);

        Ok(record)
    }

    fn revoke_castling_rights(&mut self, record: &MoveRecord) {
        match record.piece {
            Piece::King => self.castling_rights.remove_color(record.color),
            Piece::Rook => {
                if let Some(kingside) = corner_side(record.color, record.from) {
                    self.castling_rights.remove(record.color, kingside);
                }
            }
            _ => {}
        }

        if let Some(captured) = record.captured {
            if captured.piece == Piece::Rook {
                if let Some(kingside) = corner_side(captured.color, captured.square) {
                    self.castling_rights.remove(captured.color, kingside);
                }
            }
        }
    }

    /// Reverse a move made by [`Position::apply`] or [`Position::place`].
    ///
    /// The record must come from the most recent unreversed move on this
    /// position.
    pub fn undo(&mut self, record: MoveRecord) {
        self.board.clear(record.to);
        self.board.set_piece(record.from, record.color, record.piece);

        if let Some((rook_from, rook_to)) = record.rook {
            self.board.clear(rook_to);
            self.board.set_piece(rook_from, record.color, Piece::Rook);
        }
        if let Some(captured) = record.captured {
            self.board
                .set_piece(captured.square, captured.color, captured.piece);
        }

        self.side_to_move = record.previous_side_to_move;
        self.castling_rights = record.previous_castling_rights;
        self.en_passant = record.previous_en_passant;
        self.halfmove_clock = record.previous_halfmove_clock;
        self.fullmove_number = record.previous_fullmove_number;

        #[cfg(feature = "logging")]
        log::trace!("undid {}{}", record.from, record.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    #[test]
    fn test_double_step_sets_en_passant_target() {
        let mut position = Position::start();
        position.apply(mv("e2e4")).unwrap();
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        position.apply(mv("g8f6")).unwrap();
        assert_eq!(
            position.to_fen(),
            "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2"
        );
    }

    #[test]
    fn test_place_leaves_metadata() {
        let mut position = Position::start();
        position.place(mv("e2e4")).unwrap();
        assert_eq!(
            position.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_place_from_empty_square_is_refused() {
        let mut position = Position::start();
        assert_eq!(
            position.place(mv("e4e5")).unwrap_err(),
            IllegalMove::EmptySquare {
                square: Square(4, 4)
            }
        );
        assert_eq!(position, Position::start());
    }

    #[test]
    fn test_en_passant_capture_and_undo() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        let mut position = Position::from_fen(fen).unwrap();
        let record = position.apply(mv("e5d6")).unwrap();
        assert!(record.is_en_passant());
        assert_eq!(position.piece_at(Square(3, 3)), None);
        assert_eq!(position.to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 1");
        position.undo(record);
        assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn test_en_passant_only_takes_an_enemy_pawn() {
        let mut position = Position::from_fen("4k3/8/8/3NP3/8/8/8/4K3 w - - 0 1").unwrap();
        position.en_passant = Some(Square(2, 3));
        let record = position.place(mv("e5d6")).unwrap();
        assert!(!record.is_en_passant());
        assert_eq!(record.captured(), None);
        assert_eq!(position.piece_at(Square(3, 3)), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_off_board_squares_are_refused() {
        let mut position = Position::start();
        assert_eq!(
            position.place(Move::new(Square(8, 0), Square(7, 0))).unwrap_err(),
            IllegalMove::EmptySquare {
                square: Square(8, 0)
            }
        );
        assert_eq!(
            position.place(Move::new(Square(6, 0), Square(6, 9))).unwrap_err(),
            IllegalMove::OutOfScope {
                from: Square(6, 0),
                to: Square(6, 9)
            }
        );
        assert_eq!(position, Position::start());
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mut position = Position::from_fen(fen).unwrap();
        let record = position.apply(mv("a7a8")).unwrap();
        assert_eq!(record.promoted(), Some(Piece::Queen));
        assert_eq!(position.piece_at(Square(0, 0)), Some((Color::White, Piece::Queen)));
        position.undo(record);
        assert_eq!(position.to_fen(), fen);

        let record = position.apply(mv("a7a8n")).unwrap();
        assert_eq!(position.piece_at(Square(0, 0)), Some((Color::White, Piece::Knight)));
        position.undo(record);
        assert_eq!(position.piece_at(Square(1, 0)), Some((Color::White, Piece::Pawn)));
    }

    #[test]
    fn test_rook_moves_and_captures_revoke_rights() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        position.apply(mv("a1a8")).unwrap();
        assert_eq!(position.castling_rights().to_string(), "Kk");

        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        position.apply(mv("e8d8")).unwrap();
        assert_eq!(position.castling_rights().to_string(), "KQ");
        assert_eq!(position.fullmove_number(), 2);
    }

    #[test]
    fn test_castling_moves_rook() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let mut position = Position::from_fen(fen).unwrap();
        let record = position.apply(mv("e1c1")).unwrap();
        assert!(record.is_castling());
        assert_eq!(position.to_fen(), "r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1");
        position.undo(record);
        assert_eq!(position.to_fen(), fen);
    }
}
