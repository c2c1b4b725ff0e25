//! Position state, status and coordinate move parsing.

use crate::board::{
    BoardBuilder, CastleSide, CastlingRights, Color, LastMove, MoveParseError, Piece, Position,
    Square,
};

#[test]
fn new_position_matches_builder_and_fen() {
    let position = Position::new();
    assert_eq!(position.side_to_move, Color::White);
    assert_eq!(position.castling_rights, CastlingRights::all());
    assert_eq!(position.last_move, None);
    assert_eq!(position, BoardBuilder::starting_position().build());
    assert_eq!(position, Position::default());
}

#[test]
fn parse_move_finds_legal_moves() {
    let position = Position::new();
    let mv = position.parse_move("g1f3").unwrap();
    assert_eq!(mv.from, Square(0, 6));
    assert_eq!(mv.to, Square(2, 5));
    assert_eq!(mv.to_string(), "g1f3");
}

#[test]
fn parse_move_rejects_bad_input() {
    let position = Position::new();
    assert_eq!(
        position.parse_move("e2"),
        Err(MoveParseError::InvalidLength { len: 2 })
    );
    assert_eq!(
        position.parse_move("e2e4qq"),
        Err(MoveParseError::InvalidLength { len: 6 })
    );
    assert_eq!(
        position.parse_move("z2e4"),
        Err(MoveParseError::InvalidSquare {
            notation: "z2e4".to_string()
        })
    );
    assert_eq!(
        position.parse_move("e2e4k"),
        Err(MoveParseError::InvalidPromotion { char: 'k' })
    );
    assert_eq!(
        position.parse_move("e2e5"),
        Err(MoveParseError::IllegalMove {
            notation: "e2e5".to_string()
        })
    );
    // black piece while white is to move
    assert_eq!(
        position.parse_move("e7e5"),
        Err(MoveParseError::IllegalMove {
            notation: "e7e5".to_string()
        })
    );
}

#[test]
fn parse_move_promotion_suffix() {
    let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(
        position.parse_move("a7a8").unwrap().promotion,
        Some(Piece::Queen)
    );
    assert_eq!(
        position.parse_move("a7a8n").unwrap().promotion,
        Some(Piece::Knight)
    );
    assert!(position.parse_move("e1e2q").is_err());
}

#[test]
fn play_rejects_illegal_and_keeps_position() {
    let mut position = Position::new();
    let before = position;
    assert!(position.play("e1e2").is_err());
    assert_eq!(position, before);
}

#[test]
fn king_move_revokes_both_rights() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    position.play("e8f8").unwrap();
    assert!(!position.castling_rights.any(Color::Black));
    assert!(position.castling_rights.has(Color::White, CastleSide::Short));
    assert!(position.castling_rights.has(Color::White, CastleSide::Long));

    // returning home does not restore them
    position.play("a1a2").unwrap();
    position.play("f8e8").unwrap();
    position.play("a2a1").unwrap();
    let black_king = position.legal_moves(Square(7, 4));
    assert!(!black_king.iter().any(|m| m.is_castling()));
    assert!(!position.castling_rights.has(Color::White, CastleSide::Long));
}

#[test]
fn last_move_is_recorded() {
    let mut position = Position::new();
    position.play("b1c3").unwrap();
    assert_eq!(
        position.last_move,
        Some(LastMove::new(
            Square(0, 1),
            Square(2, 2),
            (Color::White, Piece::Knight)
        ))
    );
    assert_eq!(position.side_to_move, Color::Black);
}

#[test]
fn builder_last_move_enables_en_passant() {
    let position = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .piece(Square(4, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 5), Color::Black, Piece::Pawn)
        .last_move(LastMove::new(
            Square(6, 5),
            Square(4, 5),
            (Color::Black, Piece::Pawn),
        ))
        .build();
    let ep = position.parse_move("e5f6").unwrap();
    assert!(ep.is_en_passant);
    assert!(position.to_fen().contains(" f6 "));
}

#[test]
fn debug_shows_fen() {
    let position = Position::new();
    assert_eq!(
        format!("{position:?}"),
        "Position(rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1)"
    );
}
