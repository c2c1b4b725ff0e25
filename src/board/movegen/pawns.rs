use super::super::{Board, Color, LastMove, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        color: Color,
        last_move: Option<LastMove>,
    ) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let Some(forward) = from.offset(dir, 0) else {
            return moves;
        };

        if self.is_empty(forward) {
            if forward.0 == promotion_rank {
                push_promotions(&mut moves, from, forward, None);
            } else {
                moves.push(Move::new(from, forward, None));
                if from.0 == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some(victim) if victim.0 != color => {
                    if target.0 == promotion_rank {
                        push_promotions(&mut moves, from, target, Some(victim));
                    } else {
                        moves.push(Move::new(from, target, Some(victim)));
                    }
                }
                Some(_) => {}
                None => {
                    if self.en_passant_allowed(from, target, color, last_move) {
                        moves.push(Move::en_passant(from, target, color.opponent()));
                    }
                }
            }
        }

        moves
    }

    /// An enemy pawn that just double-stepped onto the square beside `from`,
    /// on the file of `target`, can be taken en passant.
    fn en_passant_allowed(
        &self,
        from: Square,
        target: Square,
        color: Color,
        last_move: Option<LastMove>,
    ) -> bool {
        let Some(last) = last_move else {
            return false;
        };
        let enemy_pawn = (color.opponent(), Piece::Pawn);
        last.is_double_step()
            && last.piece == enemy_pawn
            && last.to == Square(from.0, target.1)
            && self.piece_at(last.to) == Some(enemy_pawn)
    }
}

fn push_promotions(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    captured: Option<(Color, Piece)>,
) {
    for piece in PROMOTION_PIECES {
        moves.push(Move::new_promotion(from, to, piece, captured));
    }
}
