//! Direction sets and precomputed step tables for leaper pieces.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROYAL: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_table(&KNIGHT_JUMPS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| step_table(&ROYAL));

/// For every square, the mask of squares one step away along `deltas`.
fn step_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .fold(0u64, |mask, to| mask | (1u64 << to.as_index()));
    }
    table
}

/// Squares set in a step mask, lowest index first.
pub(crate) fn mask_squares(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(Square::from_index(idx))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_corner_has_two_targets() {
        let corner = KNIGHT_TARGETS[Square(0, 0).as_index()];
        let targets: Vec<Square> = mask_squares(corner).collect();
        assert_eq!(targets, vec![Square(1, 2), Square(2, 1)]);
    }

    #[test]
    fn king_center_has_eight_targets() {
        assert_eq!(KING_TARGETS[Square(3, 3).as_index()].count_ones(), 8);
        assert_eq!(KING_TARGETS[Square(7, 7).as_index()].count_ones(), 3);
    }

    #[test]
    fn knight_center_has_eight_targets() {
        assert_eq!(KNIGHT_TARGETS[Square(4, 4).as_index()].count_ones(), 8);
    }
}
