pub mod board;
pub mod sync;

pub use board::{Color, IllegalMove, Move, Piece, Position, Rules, Square};
pub use sync::SharedPosition;
