//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut position = Position::start();
//! assert!(position.legal_move(Move::new(Square(7, 6), Square(5, 5))));
//! ```

pub use super::{
    Color, FenError, IllegalMove, Move, MoveDelta, Piece, Position, PositionBuilder, Rules, Square,
    SquareSet,
};
