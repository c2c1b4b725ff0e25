//! Edge case tests for special chess positions and moves.

use crate::board::{Color, GameStatus, Piece, Position, Square};

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

#[test]
fn test_fools_mate() {
    let position = Position::from_fen(FOOLS_MATE);
    assert!(position.board.king_in_check(Color::White));
    for (sq, _, _) in position.board.pieces().filter(|&(_, c, _)| c == Color::White) {
        assert!(
            position.legal_moves(sq).is_empty(),
            "{sq} should have no legal moves"
        );
    }
    assert!(position.all_legal_moves().is_empty());
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn test_fools_mate_played_out() {
    let mut position = Position::new();
    for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        position.play(notation).unwrap();
    }
    assert!(position.is_checkmate());
    assert_eq!(position.board, Position::from_fen(FOOLS_MATE).board);
}

#[test]
fn test_stalemate_position() {
    let position = Position::from_fen(STALEMATE);
    assert!(!position.in_check());
    assert!(position.all_legal_moves().is_empty());
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());
    assert!(position.status().is_terminal());
}

#[test]
fn test_check_is_not_terminal() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    assert_eq!(position.status(), GameStatus::Check);
    assert!(!position.status().is_terminal());
    assert_eq!(Position::new().status(), GameStatus::Ongoing);
}

#[test]
fn test_back_rank_mate() {
    let position = Position::from_fen("4R1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_underpromotion_to_knight() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = position.all_legal_moves();

    let knight_promo = moves
        .iter()
        .find(|m| m.promotion == Some(Piece::Knight))
        .copied();
    assert!(
        knight_promo.is_some(),
        "Knight promotion should be available"
    );

    let mv = knight_promo.unwrap();
    position.make_move(&mv);
    assert_eq!(position.board.piece_on(Square(7, 0)), Some(Piece::Knight));
    assert!(position.board.is_empty(Square(6, 0)));
}

#[test]
fn test_promotion_with_capture() {
    let mut position = Position::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mv = position.parse_move("a7b8r").unwrap();
    assert_eq!(mv.captured, Some((Color::Black, Piece::Rook)));
    position.make_move(&mv);
    assert_eq!(
        position.board.piece_at(Square(7, 1)),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(position.board.count(Color::Black, Piece::Rook), 0);
}

#[test]
fn test_black_promotion() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
    position.play("a2a1").unwrap();
    assert_eq!(
        position.board.piece_at(Square(0, 0)),
        Some((Color::Black, Piece::Queen))
    );
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = position.all_legal_moves();

    let ep_move = moves.iter().find(|m| m.is_en_passant).copied();
    assert!(ep_move.is_some(), "En passant should be available");

    let mv = ep_move.unwrap();
    position.make_move(&mv);

    assert_eq!(
        position.board.piece_at(Square(5, 3)),
        Some((Color::White, Piece::Pawn))
    );
    assert!(position.board.is_empty(Square(4, 3)));
    assert!(position.board.is_empty(Square(4, 4)));
    assert_eq!(position.board.count(Color::Black, Piece::Pawn), 7);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut position = Position::new();
    for notation in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        position.play(notation).unwrap();
    }
    assert!(position.legal_moves(Square(4, 4)).iter().any(|m| m.is_en_passant));

    position.play("b1c3").unwrap();
    position.play("a6a5").unwrap();
    assert!(!position.legal_moves(Square(4, 4)).iter().any(|m| m.is_en_passant));
}

#[test]
fn test_black_en_passant() {
    let mut position = Position::new();
    for notation in ["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"] {
        position.play(notation).unwrap();
    }
    let mv = position.play("d4e3").unwrap();
    assert!(mv.is_en_passant);
    assert!(position.board.is_empty(Square(3, 4)));
    assert_eq!(
        position.board.piece_at(Square(2, 4)),
        Some((Color::Black, Piece::Pawn))
    );
}

#[test]
fn test_castling_moves_rook() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    position.play("e1g1").unwrap();
    assert_eq!(
        position.board.piece_at(Square(0, 5)),
        Some((Color::White, Piece::Rook))
    );
    assert!(position.board.is_empty(Square(0, 7)));
    assert!(!position.castling_rights.any(Color::White));

    position.play("e8c8").unwrap();
    assert_eq!(
        position.board.piece_at(Square(7, 3)),
        Some((Color::Black, Piece::Rook))
    );
    assert_eq!(
        position.board.piece_at(Square(7, 2)),
        Some((Color::Black, Piece::King))
    );
    assert!(position.board.is_empty(Square(7, 0)));
}

#[test]
fn test_only_kings_left() {
    let position = Position::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1");
    assert_eq!(position.all_legal_moves().len(), 5);
    assert_eq!(position.board.evaluate(), 0);
    assert_eq!(position.status(), GameStatus::Ongoing);
}
