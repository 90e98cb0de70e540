use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// Parser settings for [`Position::from_fen_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FenOptions {
    /// Skip characters in the piece placement that are neither piece
    /// letters nor digits instead of rejecting the FEN. Skipped
    /// characters do not advance the column.
    pub skip_unrecognized: bool,
}

impl FenOptions {
    #[must_use]
    pub const fn lenient() -> Self {
        FenOptions {
            skip_unrecognized: true,
        }
    }
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The whole string is validated first; on error no position is produced.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Color, Position};
    ///
    /// let position =
    ///     Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
    ///         .unwrap();
    /// assert_eq!(position.side_to_move(), Color::Black);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with(fen, FenOptions::default())
    }

    /// Parse a position from FEN notation with explicit parser options.
    pub fn from_fen_with(fen: &str, options: FenOptions) -> Result<Self, FenError> {
        let result = parse_fen(fen, options);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::debug!("rejected FEN {fen:?}: {err}");
        }
        result
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board_fen(),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            self.en_passant
                .map_or_else(|| "-".to_string(), |sq| sq.to_string()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Just the piece-placement field of the FEN.
    #[must_use]
    pub fn board_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for column in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(row, column)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

fn parse_fen(fen: &str, options: FenOptions) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling_rights =
        CastlingRights::from_fen_field(fields[2]).ok_or_else(|| FenError::InvalidCastling {
            found: fields[2].to_string(),
        })?;

    let en_passant = if fields[3] == "-" {
        None
    } else {
        let sq = fields[3]
            .parse::<Square>()
            .map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?;
        Some(sq)
    };

    let halfmove_clock = parse_counter("halfmove clock", fields[4])?;
    let fullmove_number = parse_counter("fullmove number", fields[5])?;

    let board = parse_placement(&ranks, options)?;
    check_king_count(&board)?;
    if let Some(target) = en_passant {
        check_en_passant(&board, side_to_move, target)?;
    }

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

/// Each color must have exactly one king.
pub(crate) fn check_king_count(board: &Board) -> Result<(), FenError> {
    for color in Color::BOTH {
        let found = board.count(color, Piece::King);
        if found != 1 {
            return Err(FenError::WrongKingCount { color, found });
        }
    }
    Ok(())
}

/// An en passant target must be an empty square on the side to move's
/// capture row, just behind an enemy pawn that could have double-stepped.
pub(crate) fn check_en_passant(
    board: &Board,
    side_to_move: Color,
    target: Square,
) -> Result<(), FenError> {
    let pusher = side_to_move.opponent();
    let pawn_behind = target
        .offset(pusher.pawn_direction(), 0)
        .and_then(|sq| board.piece_at(sq));
    let valid = target.is_on_board()
        && target.row() == side_to_move.en_passant_row()
        && board.is_empty(target)
        && pawn_behind == Some((pusher, Piece::Pawn));
    if valid {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant {
            found: target.to_string(),
        })
    }
}

fn parse_placement(ranks: &[&str], options: FenOptions) -> Result<Board, FenError> {
    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut column = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 {
                    return Err(FenError::InvalidPiece { char: c });
                }
                column += skip as usize;
                if column > 8 {
                    return Err(FenError::RowOverflow { row });
                }
            } else if let Some((color, piece)) = Piece::from_fen_char(c) {
                if column >= 8 {
                    return Err(FenError::RowOverflow { row });
                }
                board.set_piece(Square(row, column), color, piece);
                column += 1;
            } else if !options.skip_unrecognized {
                return Err(FenError::InvalidPiece { char: c });
            }
        }
        if column < 8 {
            return Err(FenError::RowUnderflow { row, columns: column });
        }
    }
    Ok(board)
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        field,
        found: text.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
