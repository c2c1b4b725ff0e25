use super::super::attack_tables::{mask_squares, DIAGONAL, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONAL};
use super::super::{
    Board, CastleSide, CastlingRights, Color, Move, MoveList, Piece, RulesError, Square,
};

const KING_HOME_FILE: usize = 4;

impl Board {
    pub(crate) fn king_moves(
        &self,
        from: Square,
        color: Color,
        castling_rights: CastlingRights,
    ) -> MoveList {
        let mut moves = self.stepping_moves(from, color, KING_TARGETS[from.as_index()]);

        let back_rank = color.back_rank();
        if from != Square(back_rank, KING_HOME_FILE) || !castling_rights.any(color) {
            return moves;
        }
        if self.square_is_attacked(from, color.opponent()) {
            return moves;
        }

        for side in [CastleSide::Short, CastleSide::Long] {
            if castling_rights.has(color, side) && self.castling_path_clear(color, side) {
                let to = Square(back_rank, side.king_to_file());
                moves.push(Move::castling(from, to, side));
            }
        }
        moves
    }

    /// Rook at home, empty squares between king and rook, and no attacked
    /// square on the king's path. The king's own square is checked by the caller.
    fn castling_path_clear(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let (rook_file, _) = side.rook_files();
        if self.piece_at(Square(rank, rook_file)) != Some((color, Piece::Rook)) {
            return false;
        }

        let between = if rook_file > KING_HOME_FILE {
            KING_HOME_FILE + 1..rook_file
        } else {
            rook_file + 1..KING_HOME_FILE
        };
        if between.clone().any(|file| !self.is_empty(Square(rank, file))) {
            return false;
        }

        let king_to = side.king_to_file();
        let path = if king_to > KING_HOME_FILE {
            KING_HOME_FILE + 1..=king_to
        } else {
            king_to..=KING_HOME_FILE - 1
        };
        let enemy = color.opponent();
        !path
            .into_iter()
            .any(|file| self.square_is_attacked(Square(rank, file), enemy))
    }

    /// Square of `color`'s king, if there is one
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Whether any piece of `by` could pseudo-legally capture on `square`.
    ///
    /// Works purely on attack patterns: pins and checks against `by` are
    /// ignored, and off-board squares are never attacked.
    #[must_use]
    pub fn square_is_attacked(&self, square: Square, by: Color) -> bool {
        if !square.is_valid() {
            return false;
        }

        // a pawn of `by` attacks from one rank behind, seen from its own side
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(src) = square.offset(behind, df) {
                if self.piece_at(src) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let idx = square.as_index();
        if mask_squares(KNIGHT_TARGETS[idx]).any(|src| self.piece_at(src) == Some((by, Piece::Knight)))
        {
            return true;
        }
        if mask_squares(KING_TARGETS[idx]).any(|src| self.piece_at(src) == Some((by, Piece::King))) {
            return true;
        }

        let slider_hits = |directions: &[(isize, isize)], diagonal: bool| {
            directions.iter().any(|&dir| {
                self.first_blocker(square, dir)
                    .and_then(|sq| self.piece_at(sq))
                    .is_some_and(|(color, piece)| {
                        color == by
                            && if diagonal {
                                piece.attacks_diagonally()
                            } else {
                                piece.attacks_straight()
                            }
                    })
            })
        };
        slider_hits(&ORTHOGONAL, false) || slider_hits(&DIAGONAL, true)
    }

    /// Whether `color`'s king is attacked, or `MissingKing` if it has none.
    pub fn try_king_in_check(&self, color: Color) -> Result<bool, RulesError> {
        let king = self
            .find_king(color)
            .ok_or(RulesError::MissingKing { color })?;
        Ok(self.square_is_attacked(king, color.opponent()))
    }

    /// Whether `color`'s king is attacked.
    ///
    /// # Panics
    /// Panics if `color` has no king. Legal play never removes a king, so this
    /// means an illegal move got past the safety filter upstream.
    #[must_use]
    pub fn king_in_check(&self, color: Color) -> bool {
        match self.try_king_in_check(color) {
            Ok(in_check) => in_check,
            Err(err) => panic!("{err}"),
        }
    }
}
