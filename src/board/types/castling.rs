//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// King side (O-O)
    Short,
    /// Queen side (O-O-O)
    Long,
}

impl CastleSide {
    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_to_file(self) -> usize {
        match self {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        }
    }

    /// (home file, destination file) of the rook
    #[inline]
    #[must_use]
    pub const fn rook_files(self) -> (usize, usize) {
        match self {
            CastleSide::Short => (7, 5),
            CastleSide::Long => (0, 3),
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Rights can only be taken away once a position exists; they are granted when
/// a position is constructed (`all`, FEN, builder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle on both wings)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is held
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// True if `color` still holds either right
    #[inline]
    #[must_use]
    pub const fn any(self, color: Color) -> bool {
        self.has(color, CastleSide::Short) || self.has(color, CastleSide::Long)
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Revoke whatever rights a move costs.
    ///
    /// A king move drops both wings for its color. A rook leaving its home
    /// corner drops that wing, and so does a rook captured on its home corner.
    pub fn revoke_for_move(
        &mut self,
        moved: (Color, Piece),
        from: Square,
        to: Square,
        captured: Option<(Color, Piece)>,
    ) {
        let (color, piece) = moved;
        match piece {
            Piece::King => {
                self.remove(color, CastleSide::Short);
                self.remove(color, CastleSide::Long);
            }
            Piece::Rook => self.revoke_corner(color, from),
            _ => {}
        }
        if let Some((captured_color, Piece::Rook)) = captured {
            self.revoke_corner(captured_color, to);
        }
    }

    fn revoke_corner(&mut self, color: Color, sq: Square) {
        let rank = color.back_rank();
        if sq == Square(rank, 0) {
            self.remove(color, CastleSide::Long);
        } else if sq == Square(rank, 7) {
            self.remove(color, CastleSide::Short);
        }
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Short) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Long) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Short) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Long) => CASTLE_BLACK_Q,
        }
    }
}
