use super::*;

fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

#[test]
fn test_standard_layout() {
    let board = Board::standard();
    assert_eq!(board.len(), 32);
    assert_eq!(
        board.piece_at(sq("e1")),
        Some(Piece::new(Team::White, PieceKind::King))
    );
    assert_eq!(
        board.piece_at(sq("d8")),
        Some(Piece::new(Team::Black, PieceKind::Queen))
    );
    assert_eq!(
        board.piece_at(sq("b7")),
        Some(Piece::new(Team::Black, PieceKind::Pawn))
    );
    assert_eq!(board.piece_at(sq("e4")), None);
    assert!(board.has_king(Team::White));
    assert!(board.has_king(Team::Black));
}

#[test]
fn test_standard_scores() {
    let board = Board::standard();
    assert_eq!(board.score_of(Team::White), 38.0);
    assert_eq!(board.score_of(Team::Black), 38.0);
}

#[test]
fn test_doubled_pawns_score_half() {
    let board = Board::from_cells([
        (sq("e2"), Piece::new(Team::White, PieceKind::Pawn)),
        (sq("e4"), Piece::new(Team::White, PieceKind::Pawn)),
    ]);
    assert_eq!(board.score_of(Team::White), 1.0);
    assert_eq!(board.score_of(Team::Black), 0.0);
}

#[test]
fn test_doubled_pawns_are_per_team_and_per_file() {
    let board = Board::from_diagram(
        "........
         ........
         ....P...
         ........
         ..p.p...
         ..p.....
         ..p.p..p
         ........",
    )
    .unwrap();
    // white: three on c (1.5), two on e (1.0), one on h (1.0)
    assert_eq!(board.score_of(Team::White), 3.5);
    // the black pawn on e6 is alone among black pawns
    assert_eq!(board.score_of(Team::Black), 1.0);
}

#[test]
fn test_apply_move_moves_and_captures() {
    let mut board = Board::from_diagram(
        "........
         ........
         ........
         ........
         Q.......
         ........
         ........
         r.......",
    )
    .unwrap();
    let captured = board.apply_move(sq("a1"), sq("a4")).unwrap();
    assert_eq!(captured, Some(Piece::new(Team::Black, PieceKind::Queen)));
    assert_eq!(board.piece_at(sq("a1")), None);
    assert_eq!(
        board.piece_at(sq("a4")),
        Some(Piece::new(Team::White, PieceKind::Rook))
    );
    assert_eq!(board.len(), 1);
}

#[test]
fn test_apply_move_quiet() {
    let mut board = Board::standard();
    assert_eq!(board.apply_move(sq("b1"), sq("c3")).unwrap(), None);
    assert_eq!(board.len(), 32);
    assert!(board.occupied_positions().contains(&sq("c3")));
    assert!(!board.occupied_positions().contains(&sq("b1")));
}

#[test]
fn test_illegal_move_leaves_board_unchanged() {
    let mut board = Board::standard();
    let before = board.clone();

    for (from, to) in [("e4", "e5"), ("e2", "e5"), ("a1", "a3"), ("c1", "c1")] {
        let err = board.apply_move(sq(from), sq(to)).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove(_)), "{from}->{to}");
        assert_eq!(board, before);
    }
}

#[test]
fn test_board_is_team_agnostic() {
    // black may move on a fresh board; turn order belongs to the game
    let mut board = Board::standard();
    assert!(board.apply_move(sq("e7"), sq("e5")).is_ok());
}

#[test]
fn test_has_king_after_capture() {
    let mut board = Board::from_cells([
        (sq("e1"), Piece::new(Team::White, PieceKind::King)),
        (sq("e8"), Piece::new(Team::Black, PieceKind::King)),
        (sq("e2"), Piece::new(Team::White, PieceKind::Rook)),
    ]);
    let captured = board.apply_move(sq("e2"), sq("e8")).unwrap();
    assert_eq!(captured.map(|p| p.kind), Some(PieceKind::King));
    assert!(!board.has_king(Team::Black));
    assert!(board.has_king(Team::White));
}

#[test]
fn test_diagram_rejects_bad_input() {
    assert!(Board::from_diagram("........").is_err());
    let bad_piece = "x.......\n".repeat(8);
    assert!(matches!(
        Board::from_diagram(&bad_piece),
        Err(ChessError::InvalidNotation(_))
    ));
}
