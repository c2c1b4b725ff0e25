//! Search engine: fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes a material evaluation. The search works
//! on the caller's board through make/unmake and leaves it exactly as it was.
//!
//! Features:
//! - Alpha-beta pruning (can be switched off for plain minimax)
//! - Capture-first move ordering at every node
//! - Static or tracked castling rights / last move below the root
//! - Cooperative cancellation through a shared stop flag

mod handle;
mod logger;
mod move_order;
mod params;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::{Board, CastlingRights, Color, LastMove, Move, Position, UnmakeInfo};
use move_order::order_moves;

pub use handle::SearchHandle;
#[cfg(feature = "logging")]
pub use logger::LogLogger;
pub use logger::{NoopLogger, SearchInfo, SearchLogger};
pub use params::{AuxiliaryState, SearchParams};

/// Score of a checkmate, from White's point of view when White delivers it.
///
/// Larger than any material balance.
pub const MATE_SCORE: i32 = 1_000_000;

const INFINITY: i32 = i32::MAX;

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Minimax value of the root, White positive
    pub score: i32,
    pub stats: SearchStats,
}

/// Best move for `side_to_move` searching `depth` plies.
///
/// Only the board is known here, so every node assumes all castling rights and
/// no last move (see [`AuxiliaryState::Static`]). Returns `None` if the side has
/// no legal move; the caller tells checkmate from stalemate with
/// [`Board::king_in_check`].
///
/// # Panics
/// Panics if either side's king is missing from the board.
pub fn best_move(board: &mut Board, depth: u32, side_to_move: Color) -> Option<Move> {
    let params = SearchParams::default()
        .depth(depth)
        .auxiliary(AuxiliaryState::Static);
    search(board, side_to_move, CastlingRights::all(), None, &params).best_move
}

/// Search with explicit auxiliary state and parameters.
///
/// The summary goes to the `log` facade when the `logging` feature is on.
///
/// # Panics
/// Panics if either side's king is missing from the board.
pub fn search(
    board: &mut Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
    params: &SearchParams,
) -> SearchResult {
    #[cfg(feature = "logging")]
    let logger = LogLogger;
    #[cfg(not(feature = "logging"))]
    let logger = NoopLogger;
    search_with_logger(board, side_to_move, castling_rights, last_move, params, &logger)
}

/// Like [`search`], reporting the summary to `logger`.
pub fn search_with_logger(
    board: &mut Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
    params: &SearchParams,
    logger: &dyn SearchLogger,
) -> SearchResult {
    let never = AtomicBool::new(false);
    run(
        board,
        side_to_move,
        castling_rights,
        last_move,
        params,
        &never,
        logger,
    )
}

pub(crate) fn run(
    board: &mut Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    last_move: Option<LastMove>,
    params: &SearchParams,
    stop: &AtomicBool,
    logger: &dyn SearchLogger,
) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Searcher {
        board,
        params,
        stop,
        stopped: false,
        stats: SearchStats::default(),
    };
    let (best_move, score) = searcher.root(side_to_move, castling_rights, last_move);
    let result = SearchResult {
        best_move,
        score,
        stats: searcher.stats,
    };

    logger.info(&SearchInfo {
        depth: params.depth,
        nodes: result.stats.nodes,
        cutoffs: result.stats.cutoffs,
        score,
        best_move,
        elapsed: start.elapsed(),
        stopped: searcher.stopped,
    });
    result
}

struct Searcher<'a> {
    board: &'a mut Board,
    params: &'a SearchParams,
    stop: &'a AtomicBool,
    stopped: bool,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn root(
        &mut self,
        side: Color,
        rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> (Option<Move>, i32) {
        self.stats.nodes += 1;
        let (rights, last_move) = self.aux_at_root(rights, last_move);

        let mut moves = self.board.all_legal_moves(side, last_move, rights, true);
        if moves.is_empty() {
            return (None, self.terminal_score(side));
        }
        if self.params.order_moves {
            order_moves(&mut moves);
        }

        // a root search always looks at least one ply ahead
        let child_depth = self.params.depth.max(1) - 1;
        let maximizing = side == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for m in &moves {
            if self.stop.load(Ordering::Relaxed) {
                self.stopped = true;
                break;
            }
            let info = self.board.make_move(m);
            let (child_rights, child_last) = self.aux_after(m, &info, rights, last_move);
            let score = self.minimax(
                side.opponent(),
                child_depth,
                alpha,
                beta,
                child_rights,
                child_last,
            );
            self.board.unmake_move(m, info);
            if self.stopped {
                break;
            }

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((*m, score));
            }
            if self.params.alpha_beta {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        match best {
            Some((m, score)) => (Some(m), score),
            // stopped before any root move finished
            None => (moves.first(), self.board.evaluate()),
        }
    }

    fn minimax(
        &mut self,
        side: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return self.board.evaluate();
        }
        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
            return 0;
        }

        let mut moves = self.board.all_legal_moves(side, last_move, rights, true);
        if moves.is_empty() {
            return self.terminal_score(side);
        }
        if self.params.order_moves {
            order_moves(&mut moves);
        }

        let maximizing = side == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for m in &moves {
            let info = self.board.make_move(m);
            let (child_rights, child_last) = self.aux_after(m, &info, rights, last_move);
            let score = self.minimax(
                side.opponent(),
                depth - 1,
                alpha,
                beta,
                child_rights,
                child_last,
            );
            self.board.unmake_move(m, info);
            if self.stopped {
                return 0;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.params.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Score of a node where `side` has no legal move.
    fn terminal_score(&self, side: Color) -> i32 {
        if self.board.king_in_check(side) {
            match side {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            }
        } else {
            0
        }
    }

    fn aux_at_root(
        &self,
        rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> (CastlingRights, Option<LastMove>) {
        match self.params.auxiliary {
            AuxiliaryState::Static => (CastlingRights::all(), None),
            AuxiliaryState::Tracked => (rights, last_move),
        }
    }

    /// Auxiliary state for the child reached by `m`.
    fn aux_after(
        &self,
        m: &Move,
        info: &UnmakeInfo,
        rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> (CastlingRights, Option<LastMove>) {
        match self.params.auxiliary {
            AuxiliaryState::Static => (rights, last_move),
            AuxiliaryState::Tracked => {
                let mut rights = rights;
                rights.revoke_for_move(info.moved, m.from, m.to, info.captured);
                (rights, Some(LastMove::new(m.from, m.to, info.moved)))
            }
        }
    }
}

impl Position {
    /// Best move for the side to move, tracking castling rights and the last
    /// move through the whole tree. The position itself is not modified.
    ///
    /// # Panics
    /// Panics if either side's king is missing from the board.
    #[must_use]
    pub fn best_move(&self, depth: u32) -> Option<Move> {
        self.search(&SearchParams::default().depth(depth)).best_move
    }

    /// Run a search from this position on a private copy of the board
    #[must_use]
    pub fn search(&self, params: &SearchParams) -> SearchResult {
        let mut board = self.board;
        search(
            &mut board,
            self.side_to_move,
            self.castling_rights,
            self.last_move,
            params,
        )
    }
}
