use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Ray-cast along each direction: empty squares are added, an enemy piece
    /// is added and ends the ray, an own piece ends it before.
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, df) in directions {
            let mut cursor = from;
            while let Some(to) = cursor.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, None)),
                    Some(target) => {
                        if target.0 != color {
                            moves.push(Move::new(from, to, Some(target)));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
        moves
    }

    /// First occupied square along a ray from `from`, exclusive.
    pub(crate) fn first_blocker(&self, from: Square, (dr, df): (isize, isize)) -> Option<Square> {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, df) {
            if !self.is_empty(next) {
                return Some(next);
            }
            cursor = next;
        }
        None
    }
}
