use super::super::attack_tables::{mask_squares, KNIGHT_TARGETS};
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> MoveList {
        self.stepping_moves(from, color, KNIGHT_TARGETS[from.as_index()])
    }

    /// One move per target square in `targets` that is empty or holds an enemy.
    pub(crate) fn stepping_moves(&self, from: Square, color: Color, targets: u64) -> MoveList {
        let mut moves = MoveList::new();
        for to in mask_squares(targets) {
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to, None)),
                Some(target) if target.0 != color => moves.push(Move::new(from, to, Some(target))),
                Some(_) => {}
            }
        }
        moves
    }
}
