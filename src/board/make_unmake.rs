use super::{Board, Move, Square, UnmakeInfo};

impl Board {
    /// Apply a move to the grid: relocates the castling rook, removes the
    /// en-passant victim and swaps in the promotion piece.
    ///
    /// # Panics
    /// Panics if `m.from` is empty.
    pub fn make_move(&mut self, m: &Move) -> UnmakeInfo {
        let moved = self
            .clear(m.from)
            .expect("make_move: 'from' square empty");

        let captured = if m.is_en_passant {
            self.clear(m.capture_square())
        } else {
            self.piece_at(m.to)
        };

        let placed = match m.promotion {
            Some(promoted) => (moved.0, promoted),
            None => moved,
        };
        self.set_piece(m.to, placed.0, placed.1);

        if let Some(side) = m.castle {
            let (rook_from, rook_to) = side.rook_files();
            let rank = m.from.0;
            let rook = self
                .clear(Square(rank, rook_from))
                .expect("make_move: castling without rook");
            self.set_piece(Square(rank, rook_to), rook.0, rook.1);
        }

        UnmakeInfo { moved, captured }
    }

    /// Exact inverse of `make_move` for the same move.
    ///
    /// Puts the original piece (the pawn, for promotions) back on `from` and
    /// the captured piece back on its own square, which for en passant is one
    /// rank behind `to`.
    pub fn unmake_move(&mut self, m: &Move, info: UnmakeInfo) {
        self.put(m.from, Some(info.moved));

        if m.is_en_passant {
            self.put(m.to, None);
            self.put(m.capture_square(), info.captured);
        } else {
            self.put(m.to, info.captured);
        }

        if let Some(side) = m.castle {
            let (rook_from, rook_to) = side.rook_files();
            let rank = m.from.0;
            let rook = self.clear(Square(rank, rook_to));
            self.put(Square(rank, rook_from), rook);
        }
    }
}
