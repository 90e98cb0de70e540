//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, column) board addressing
//! - `SquareSet` - 64-bit set of squares (scopes, attack sets)
//! - `Move`, `MoveRecord` and `MoveDelta` - move requests and their effects
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::CastlingRights;
pub use moves::{Capture, Move, MoveDelta, MoveRecord};
pub use piece::{Color, Piece};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
