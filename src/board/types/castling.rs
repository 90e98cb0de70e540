//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN order of the four flags
const FEN_ORDER: [(u8, char); 4] = [
    (CASTLE_WHITE_K, 'K'),
    (CASTLE_WHITE_Q, 'Q'),
    (CASTLE_BLACK_K, 'k'),
    (CASTLE_BLACK_Q, 'q'),
];

/// Castling rights represented as a bitmask of four independent flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse the FEN castling field: `-` or an ordered, duplicate-free subset of `KQkq`.
    pub(crate) fn from_fen_field(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(CastlingRights::none());
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = 0u8;
        let mut order = FEN_ORDER.iter();
        for c in field.chars() {
            // Advancing the shared iterator enforces both the order and uniqueness.
            let (bit, _) = order.find(|(_, flag)| *flag == c)?;
            rights |= bit;
        }
        Some(CastlingRights(rights))
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, flag) in FEN_ORDER {
            if self.0 & bit != 0 {
                write!(f, "{flag}")?;
            }
        }
        Ok(())
    }
}
