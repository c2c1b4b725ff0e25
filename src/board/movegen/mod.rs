//! Rules engine: legal move generation and attack queries.
//!
//! Pseudo-legal moves come from a `match` over the piece kind feeding the
//! shared `stepping_moves` / `sliding_moves` primitives. The optional safety
//! filter then drops every move that leaves the mover's own king in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL, ORTHOGONAL, ROYAL};
use super::{Board, CastlingRights, Color, LastMove, MoveList, Piece, Square};

impl Board {
    /// Legal moves for the piece on `from`.
    ///
    /// Off-board and empty squares yield an empty list. With
    /// `enforce_king_safety` off the result is pseudo-legal: moves may leave
    /// the mover's king in check.
    ///
    /// # Panics
    /// With `enforce_king_safety` on, panics if the mover has no king.
    #[must_use]
    pub fn legal_moves(
        &self,
        from: Square,
        last_move: Option<LastMove>,
        castling_rights: CastlingRights,
        enforce_king_safety: bool,
    ) -> MoveList {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveList::new();
        };

        let mut moves = self.pseudo_legal_moves(from, color, piece, last_move, castling_rights);
        if enforce_king_safety {
            self.retain_king_safe(color, &mut moves);
        }
        moves
    }

    /// Union of `legal_moves` over every piece of `side`, a1 to h8.
    #[must_use]
    pub fn all_legal_moves(
        &self,
        side: Color,
        last_move: Option<LastMove>,
        castling_rights: CastlingRights,
        enforce_king_safety: bool,
    ) -> MoveList {
        let mut all = MoveList::new();
        for from in self.squares_of(side) {
            let moves = self.legal_moves(from, last_move, castling_rights, enforce_king_safety);
            all.extend_from(&moves);
        }
        all
    }

    /// True if `side` has at least one legal move
    #[must_use]
    pub fn has_legal_move(
        &self,
        side: Color,
        last_move: Option<LastMove>,
        castling_rights: CastlingRights,
    ) -> bool {
        self.squares_of(side)
            .any(|from| !self.legal_moves(from, last_move, castling_rights, true).is_empty())
    }

    fn pseudo_legal_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        last_move: Option<LastMove>,
        castling_rights: CastlingRights,
    ) -> MoveList {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, last_move),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.sliding_moves(from, color, &DIAGONAL),
            Piece::Rook => self.sliding_moves(from, color, &ORTHOGONAL),
            Piece::Queen => self.sliding_moves(from, color, &ROYAL),
            Piece::King => self.king_moves(from, color, castling_rights),
        }
    }

    /// Drop moves that leave `color`'s king attacked.
    ///
    /// Each candidate is made and unmade on a private copy, so `self` is never
    /// touched.
    fn retain_king_safe(&self, color: Color, moves: &mut MoveList) {
        let mut scratch = *self;
        moves.retain(|m| {
            let info = scratch.make_move(m);
            let safe = !scratch.king_in_check(color);
            scratch.unmake_move(m, info);
            safe
        });
    }
}
