use super::{Board, Color};

impl Board {
    /// Material balance in centipawns, positive when White is ahead.
    ///
    /// Kings are counted at their nominal value; with one king per side they
    /// cancel out.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// Material balance from `side`'s point of view
    #[must_use]
    pub fn evaluate_for(&self, side: Color) -> i32 {
        side.sign() * self.evaluate()
    }
}
