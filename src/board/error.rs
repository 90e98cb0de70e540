//! Error types for board parsing and move validation.

use std::fmt;

use super::{Color, Square};

/// Coarse reason a FEN string was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenErrorKind {
    /// Wrong field/rank structure or an unparseable field
    MalformedShape,
    /// A rank describes more than eight columns
    RowOverflow,
    /// Not exactly one king per color
    WrongKingCount,
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must have exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid character in the piece placement
    InvalidPiece { char: char },
    /// Rank describes more than eight columns
    RowOverflow { row: usize },
    /// Rank describes fewer than eight columns
    RowUnderflow { row: usize, columns: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not an unsigned integer
    InvalidCounter { field: &'static str, found: String },
    /// A color has zero or several kings
    WrongKingCount { color: Color, found: usize },
}

impl FenError {
    /// Group the error into one of the three structural failure reasons.
    #[must_use]
    pub fn kind(&self) -> FenErrorKind {
        match self {
            FenError::RowOverflow { .. } => FenErrorKind::RowOverflow,
            FenError::WrongKingCount { .. } => FenErrorKind::WrongKingCount,
            _ => FenErrorKind::MalformedShape,
        }
    }
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::RowOverflow { row } => {
                write!(f, "Too many columns in row {row}")
            }
            FenError::RowUnderflow { row, columns } => {
                write!(f, "Row {row} has only {columns} columns")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling rights '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
            FenError::WrongKingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate-notation move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { column: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a requested move was refused.
///
/// A refusal is an ordinary outcome; the position is left exactly as it
/// was before the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// No piece stands on the origin square
    EmptySquare { square: Square },
    /// The destination is not in the piece's scope
    OutOfScope { from: Square, to: Square },
    /// The piece does not belong to the side to move
    WrongTurn { color: Color },
    /// The destination holds a king
    KingCapture { square: Square },
    /// Promotion piece is missing a promoting move or is not a legal choice
    InvalidPromotion,
    /// The king would castle out of, through or into check
    CastlingThroughCheck,
    /// The mover's own king would be attacked afterwards
    LeavesKingInCheck,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::EmptySquare { square } => write!(f, "No piece on {square}"),
            IllegalMove::OutOfScope { from, to } => {
                write!(f, "Piece on {from} cannot reach {to}")
            }
            IllegalMove::WrongTurn { color } => write!(f, "It is not {color}'s turn"),
            IllegalMove::KingCapture { square } => {
                write!(f, "King on {square} cannot be captured")
            }
            IllegalMove::InvalidPromotion => write!(f, "Invalid promotion"),
            IllegalMove::CastlingThroughCheck => {
                write!(f, "King cannot castle out of, through or into check")
            }
            IllegalMove::LeavesKingInCheck => write!(f, "Move leaves the king in check"),
        }
    }
}

impl std::error::Error for IllegalMove {}
