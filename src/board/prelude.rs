//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let mut board = Board::new();
//! let reply = best_move(&mut board, 2, Color::White);
//! assert!(reply.is_some());
//! ```

pub use super::{
    best_move, Board, BoardBuilder, CastlingRights, Color, FenError, GameStatus, LastMove, Move,
    MoveList, MoveParseError, Piece, Position, SearchParams, Square, SquareError,
};
