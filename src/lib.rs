pub mod board;

pub use board::{best_move, Board, Color, Move, Piece, Position, Square};
