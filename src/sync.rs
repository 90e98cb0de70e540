//! Thread-safe sharing of a single game position.
//!
//! `Position` itself does no locking. Collaborators that drive one game
//! from several threads hold a `SharedPosition`, and every
//! validate/apply/undo cycle runs under a single lock acquisition.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{FenError, IllegalMove, Move, MoveDelta, Position, Rules};

/// A cloneable handle to one position behind a mutex.
#[derive(Clone, Debug)]
pub struct SharedPosition {
    inner: Arc<Mutex<Position>>,
    rules: Rules,
}

impl SharedPosition {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self::with_rules(position, Rules::default())
    }

    /// Share `position`, validating every move with `rules`.
    #[must_use]
    pub fn with_rules(position: Position, rules: Rules) -> Self {
        SharedPosition {
            inner: Arc::new(Mutex::new(position)),
            rules,
        }
    }

    /// Share a position parsed from FEN.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::new)
    }

    /// Validate `mv` and keep it if legal.
    pub fn try_move(&self, mv: Move) -> Result<MoveDelta, IllegalMove> {
        self.inner.lock().validate_and_apply_with(mv, self.rules)
    }

    /// Whether `mv` is legal in the current position. Nothing is changed.
    #[must_use]
    pub fn legal_move(&self, mv: Move) -> bool {
        self.inner.lock().legal_move_with(mv, self.rules)
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.inner.lock().to_fen()
    }

    /// Run `f` with the position locked.
    pub fn with_position<R>(&self, f: impl FnOnce(&Position) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Swap in a new position, returning the old one.
    pub fn replace(&self, position: Position) -> Position {
        std::mem::replace(&mut *self.inner.lock(), position)
    }

    /// Clone the current position out of the lock.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.inner.lock().clone()
    }
}

impl Default for SharedPosition {
    fn default() -> Self {
        Self::new(Position::start())
    }
}
