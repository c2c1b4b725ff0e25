//! Move ordering for search.

use super::super::MoveList;

/// Captures (en passant included) first; relative order is otherwise kept.
pub(crate) fn order_moves(moves: &mut MoveList) {
    moves.as_mut_slice().sort_by_key(|m| !m.is_capture());
}
