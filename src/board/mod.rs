//! Chess board representation, rules and search.
//!
//! The board is a plain 8x8 grid of optional colored pieces. Move generation
//! covers the full rules (castling, en passant, promotion, king safety) for any
//! arrangement of pieces, and a fixed-depth alpha-beta search picks moves for a
//! computer opponent.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Position, Square};
//!
//! let position = Position::new();
//! assert_eq!(position.all_legal_moves().len(), 20);
//!
//! let knight = position.legal_moves(Square(0, 6));
//! assert_eq!(knight.len(), 2);
//! assert_eq!(position.side_to_move, Color::White);
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod position;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, RulesError, SquareError};
pub use position::{GameStatus, Position, PositionUndo};
pub use state::{Board, UnmakeInfo};
pub use types::{
    CastleSide, CastlingRights, Color, LastMove, Move, MoveList, MoveListIntoIter, Piece, Square,
};

// Public API - search functions and configuration
pub use search::{
    best_move, search, search_with_logger, AuxiliaryState, SearchHandle, SearchInfo,
    SearchLogger, SearchParams, SearchResult, SearchStats, MATE_SCORE,
};

pub(crate) use types::PROMOTION_PIECES;
