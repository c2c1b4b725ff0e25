#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the search takes castling rights and the last move from below the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuxiliaryState {
    /// Every node sees all castling rights and no last move, so castling
    /// legality rests on piece placement alone and en passant never appears.
    Static,
    /// Rights and last move are updated through make/unmake at every ply.
    Tracked,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies to search below the root
    pub depth: u32,
    /// Prune with alpha-beta bounds; off gives plain minimax
    pub alpha_beta: bool,
    /// Try captures first at every node
    pub order_moves: bool,
    pub auxiliary: AuxiliaryState,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            alpha_beta: true,
            order_moves: true,
            auxiliary: AuxiliaryState::Tracked,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    #[must_use]
    pub const fn order_moves(mut self, enabled: bool) -> Self {
        self.order_moves = enabled;
        self
    }

    #[must_use]
    pub const fn auxiliary(mut self, auxiliary: AuxiliaryState) -> Self {
        self.auxiliary = auxiliary;
        self
    }
}
