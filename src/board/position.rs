//! A board together with the auxiliary state that moves depend on.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveParseError;
use super::{
    Board, CastlingRights, Color, LastMove, Move, MoveList, Piece, Square, UnmakeInfo,
};

/// Board plus side to move, castling rights and last move.
///
/// This is the state a host threads from ply to ply. It is a plain value; the
/// host owns it and hands it to the engine by reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub last_move: Option<LastMove>,
}

/// Saved state for reversing `Position::make_move`.
#[derive(Clone, Copy, Debug)]
pub struct PositionUndo {
    pub(crate) board: UnmakeInfo,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) last_move: Option<LastMove>,
}

/// Outcome classification for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Side to move has legal moves and is not in check
    Ongoing,
    /// Side to move is in check but can escape
    Check,
    /// Side to move is in check with no legal move
    Checkmate { winner: Color },
    /// Side to move is not in check and has no legal move
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl Position {
    /// Standard starting position, White to move, all castling rights
    #[must_use]
    pub fn new() -> Self {
        Position::from_parts(Board::new(), Color::White, CastlingRights::all(), None)
    }

    #[must_use]
    pub const fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        last_move: Option<LastMove>,
    ) -> Self {
        Position {
            board,
            side_to_move,
            castling_rights,
            last_move,
        }
    }

    /// Legal moves for the piece on `from`, whichever side it belongs to
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        self.board
            .legal_moves(from, self.last_move, self.castling_rights, true)
    }

    /// Every legal move for the side to move
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        self.board.all_legal_moves(
            self.side_to_move,
            self.last_move,
            self.castling_rights,
            true,
        )
    }

    /// Whether the side to move is in check.
    ///
    /// # Panics
    /// Panics if the side to move has no king.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.king_in_check(self.side_to_move)
    }

    /// Classify the position for the side to move.
    ///
    /// # Panics
    /// Panics if the side to move has no king.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.in_check();
        let has_moves =
            self.board
                .has_legal_move(self.side_to_move, self.last_move, self.castling_rights);
        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status(), GameStatus::Checkmate { .. })
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }

    /// Apply a move and advance the turn.
    ///
    /// Castling rights lost by the move are revoked and the move becomes the
    /// new last move. The move is trusted; generate it with `legal_moves`.
    ///
    /// # Panics
    /// Panics if `m.from` is empty.
    pub fn make_move(&mut self, m: &Move) -> PositionUndo {
        let board = self.board.make_move(m);
        let undo = PositionUndo {
            board,
            castling_rights: self.castling_rights,
            last_move: self.last_move,
        };
        self.castling_rights
            .revoke_for_move(board.moved, m.from, m.to, board.captured);
        self.last_move = Some(LastMove::new(m.from, m.to, board.moved));
        self.side_to_move = self.side_to_move.opponent();
        undo
    }

    /// Exact inverse of `make_move` for the same move
    pub fn unmake_move(&mut self, m: &Move, undo: PositionUndo) {
        self.side_to_move = self.side_to_move.opponent();
        self.castling_rights = undo.castling_rights;
        self.last_move = undo.last_move;
        self.board.unmake_move(m, undo.board);
    }

    /// Find the legal move written in coordinate notation (`e2e4`, `e7e8q`).
    ///
    /// A pawn move onto the last rank without a suffix promotes to a queen.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let moves = if self.board.color_on(from) == Some(self.side_to_move) {
            self.legal_moves(from)
        } else {
            MoveList::new()
        };
        let promotes_as_asked = |m: &Move| match (m.promotion, promotion) {
            (None, asked) => asked.is_none(),
            (Some(piece), Some(asked)) => piece == asked,
            (Some(piece), None) => piece == Piece::Queen,
        };
        moves
            .iter()
            .find(|m| m.to == to && promotes_as_asked(m))
            .copied()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse and play a move in coordinate notation
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let m = self.parse_move(notation)?;
        self.make_move(&m);
        Ok(m)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let undo = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, undo);
        }
        nodes
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}
