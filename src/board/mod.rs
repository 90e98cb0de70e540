//! Chess position representation and move legality.
//!
//! Positions are read from and written to FEN. Each piece has a scope of
//! pseudo-legal destinations, and a move is legal when it is in scope, made
//! by the side to move and does not leave the mover's king attacked.
//!
//! # Example
//! ```
//! use chess_rules::board::{Move, Position, Square};
//!
//! let mut position = Position::start();
//! let delta = position
//!     .validate_and_apply(Move::new(Square(6, 4), Square(4, 4)))
//!     .unwrap();
//! assert_eq!(delta.to, Square(4, 4));
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod legality;
mod make_unmake;
pub mod prelude;
mod scope;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, FenErrorKind, IllegalMove, MoveParseError, SquareError};
pub use fen::FenOptions;
pub use legality::Rules;
pub use state::{Board, Position};
pub use types::{
    Capture, CastlingRights, Color, Move, MoveDelta, MoveRecord, Piece, Square, SquareSet,
    SquareSetIter,
};
