//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// A candidate transition from one square to another.
///
/// `captured` is filled in by the generator from the board it was generated on;
/// for en passant it holds the double-stepped pawn, which sits one rank behind
/// `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub is_en_passant: bool,
    pub captured: Option<(Color, Piece)>,
}

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: Square(0, 0),
            to: Square(0, 0),
            promotion: None,
            castle: None,
            is_en_passant: false,
            captured: None,
        }
    }

    /// A plain move, capturing whatever is given
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, captured: Option<(Color, Piece)>) -> Self {
        Move {
            from,
            to,
            promotion: None,
            castle: None,
            is_en_passant: false,
            captured,
        }
    }

    /// A pawn move onto the last rank
    #[inline]
    #[must_use]
    pub const fn new_promotion(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            promotion: Some(piece),
            ..Move::new(from, to, captured)
        }
    }

    /// An en-passant capture of `victim`'s pawn
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, victim: Color) -> Self {
        Move {
            is_en_passant: true,
            ..Move::new(from, to, Some((victim, Piece::Pawn)))
        }
    }

    /// A castling king move
    #[inline]
    #[must_use]
    pub const fn castling(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            castle: Some(side),
            ..Move::new(from, to, None)
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Square the captured piece stands on.
    ///
    /// Equal to `to` except for en passant, where the victim is one rank behind.
    #[inline]
    #[must_use]
    pub const fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square(self.from.0, self.to.1)
        } else {
            self.to
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// The most recently completed move, kept for en-passant eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
    pub piece: (Color, Piece),
}

impl LastMove {
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: (Color, Piece)) -> Self {
        LastMove { from, to, piece }
    }

    /// True for a pawn advancing two ranks
    #[inline]
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        self.piece.1 == Piece::Pawn && self.from.0.abs_diff(self.to.0) == 2
    }
}

pub(crate) const MAX_MOVES: usize = 256;
const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn extend_from(&mut self, other: &MoveList) {
        for mv in other {
            self.push(*mv);
        }
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            if keep(&self.moves[i]) {
                self.moves[kept] = self.moves[i];
                kept += 1;
            }
        }
        self.len = kept;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// True if some move goes from `from` to `to`
    #[must_use]
    pub fn contains_squares(&self, from: Square, to: Square) -> bool {
        self.iter().any(|m| m.from == from && m.to == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
