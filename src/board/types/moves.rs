//! Move, move record and board delta types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingRights;
use super::piece::{Color, Piece};
use super::square::Square;
use super::square_set::SquareSet;
use crate::board::error::MoveParseError;

/// A requested move: the occupant of `from` goes to `to`.
///
/// `promotion` only matters for a pawn reaching the last row; `None`
/// promotes to a queen there.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4` or `e7e8q`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: s.chars().count() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_target() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move { from, to, promotion })
    }
}

/// A piece removed by a move, and where it stood.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub square: Square,
    pub color: Color,
    pub piece: Piece,
}

/// Everything needed to take an applied move back.
///
/// Returned by `Position::apply`/`Position::place` and consumed by
/// `Position::undo`. Neither `Clone` nor `Copy`: a record is undone at
/// most once.
#[derive(Debug)]
pub struct MoveRecord {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) color: Color,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Capture>,
    pub(crate) rook: Option<(Square, Square)>,
    pub(crate) promoted: Option<Piece>,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.to
    }

    /// Color and kind of the piece that moved (the pawn, for a promotion)
    #[must_use]
    pub fn moved(&self) -> (Color, Piece) {
        (self.color, self.piece)
    }

    #[must_use]
    pub fn captured(&self) -> Option<Capture> {
        self.captured
    }

    #[must_use]
    pub fn promoted(&self) -> Option<Piece> {
        self.promoted
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.rook.is_some()
    }

    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.captured.is_some_and(|c| c.square != self.to)
    }

    /// The squares a renderer has to redraw for this move.
    #[must_use]
    pub fn delta(&self) -> MoveDelta {
        MoveDelta {
            from: self.from,
            to: self.to,
            captured: self.captured.map(|c| c.square),
            rook: self.rook,
            promoted: self.promoted,
        }
    }
}

/// Board changes caused by an accepted move, for the rendering layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveDelta {
    /// The moving piece's origin and destination
    pub from: Square,
    pub to: Square,
    /// Square of the captured piece; differs from `to` for en passant
    pub captured: Option<Square>,
    /// Rook origin and destination when castling
    pub rook: Option<(Square, Square)>,
    /// New piece kind when a pawn promoted
    pub promoted: Option<Piece>,
}

impl MoveDelta {
    /// Every square whose contents changed
    #[must_use]
    pub fn changed_squares(&self) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        set.insert(self.from);
        set.insert(self.to);
        if let Some(sq) = self.captured {
            set.insert(sq);
        }
        if let Some((rook_from, rook_to)) = self.rook {
            set.insert(rook_from);
            set.insert(rook_to);
        }
        set
    }
}
