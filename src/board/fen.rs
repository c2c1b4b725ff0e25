use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, LastMove, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The en-passant field is turned into the double step that produced it.
    /// Move clocks are accepted and ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.grant(Color::White, CastleSide::Short),
                'Q' => castling_rights.grant(Color::White, CastleSide::Long),
                'k' => castling_rights.grant(Color::Black, CastleSide::Short),
                'q' => castling_rights.grant(Color::Black, CastleSide::Long),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let last_move = if parts[3] == "-" {
            None
        } else {
            Some(double_step_through(parts[3], side_to_move)?)
        };

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling_rights,
            last_move,
        ))
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation (clocks are written as `0 1`).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.board.piece_at(Square(rank, file)) {
                    None => empty += 1,
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Short, 'K'),
            (Color::White, CastleSide::Long, 'Q'),
            (Color::Black, CastleSide::Short, 'k'),
            (Color::Black, CastleSide::Long, 'q'),
        ] {
            if self.castling_rights.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.last_move {
            Some(last) if last.is_double_step() => {
                Square((last.from.0 + last.to.0) / 2, last.from.1).to_string()
            }
            _ => "-".to_string(),
        };

        format!("{} {side} {castling} {en_passant} 0 1", rows.join("/"))
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank: rank_idx,
                    files: file + 1,
                });
            }
            board.set_piece(Square(7 - rank_idx, file), color, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank_idx,
                files: file,
            });
        }
    }
    Ok(board)
}

/// The opponent's pawn move that passed over `target`.
fn double_step_through(target: &str, side_to_move: Color) -> Result<LastMove, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: target.to_string(),
    };
    let sq: Square = target.parse().map_err(|_| invalid())?;
    let mover = side_to_move.opponent();
    let expected_rank = match mover {
        Color::White => 2,
        Color::Black => 5,
    };
    if sq.0 != expected_rank {
        return Err(invalid());
    }
    let dir = mover.pawn_direction();
    let from = sq.offset(-dir, 0).ok_or_else(invalid)?;
    let to = sq.offset(dir, 0).ok_or_else(invalid)?;
    Ok(LastMove::new(from, to, (mover, Piece::Pawn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn start_position_round_trip() {
        let position = Position::from_fen(START_FEN);
        assert_eq!(position, Position::new());
        assert_eq!(position.to_fen(), START_FEN);
    }

    #[test]
    fn en_passant_field_becomes_last_move() {
        let position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
        let last = position.last_move.unwrap();
        assert_eq!(last.from, Square(6, 3));
        assert_eq!(last.to, Square(4, 3));
        assert_eq!(last.piece, (Color::Black, Piece::Pawn));
        assert!(position.to_fen().contains(" d6 "));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Position::try_from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/7 w - - 0 1"),
            Err(FenError::BadRankLength { rank: 7, files: 7 })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w X - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8 w - e3 0 1"),
            Err(FenError::InvalidEnPassant {
                found: "e3".to_string()
            })
        );
    }

    #[test]
    fn partial_castling_rights() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        assert!(position.castling_rights.has(Color::White, CastleSide::Short));
        assert!(!position.castling_rights.has(Color::White, CastleSide::Long));
        assert!(!position.castling_rights.has(Color::Black, CastleSide::Short));
        assert!(position.castling_rights.has(Color::Black, CastleSide::Long));
        assert!(position.to_fen().contains(" Kq "));
    }
}
