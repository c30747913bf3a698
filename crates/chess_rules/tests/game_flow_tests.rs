//! End-to-end games driven only through `Game::execute`.

use chess_rules::{
    Board, ChessError, Command, ExportConfig, Game, Outcome, Phase, PieceKind, Position, Team,
    Verdict,
};

fn mv(from: &str, to: &str) -> Command {
    Command::Move {
        from: from.parse().unwrap(),
        to: to.parse().unwrap(),
    }
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        game.execute(mv(from, to))
            .unwrap_or_else(|e| panic!("{from}->{to} rejected: {e}"));
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_move_before_start_is_rejected() {
    let mut game = Game::new("early");
    let err = game.execute(mv("e2", "e4")).unwrap_err();
    assert!(matches!(err, ChessError::IllegalCommand { .. }));
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_king_hunt_ends_the_game() {
    let mut game = Game::new("hunt");
    game.execute(Command::Start).unwrap();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("f7", "f6"),
            ("d1", "h5"),
            ("a7", "a6"),
        ],
    );
    // no check detection: the black king on e8 is simply taken
    let outcome = game.execute(mv("h5", "e8")).unwrap();
    match outcome {
        Outcome::Moved { captured: Some(pc) } => {
            assert_eq!(pc.kind, PieceKind::King);
            assert_eq!(pc.team, Team::Black);
        }
        other => panic!("expected a king capture, got {other:?}"),
    }
    assert_eq!(game.phase(), Phase::Finished);
    assert!(!game.board().has_king(Team::Black));
    assert_eq!(game.verdict(), Verdict::Winner(Team::White));

    for command in [Command::Start, Command::End, mv("a6", "a5")] {
        assert!(matches!(
            game.execute(command),
            Err(ChessError::IllegalCommand { .. })
        ));
    }
    assert!(matches!(game.execute(Command::Status), Ok(Outcome::Status(_))));
}

#[test]
fn test_scores_track_captures() {
    let mut game = Game::new("trade");
    game.execute(Command::Start).unwrap();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);

    let Outcome::Status(scores) = game.execute(Command::Status).unwrap() else {
        panic!("status must report scores");
    };
    // white now has two pawns on the d-file
    assert_eq!(scores.of(Team::White), 37.0);
    assert_eq!(scores.of(Team::Black), 37.0);
    assert_eq!(scores.to_map()[&Team::White], 37.0);
}

#[test]
fn test_end_on_even_material_is_a_draw() {
    let mut game = Game::new("quit");
    game.execute(Command::Start).unwrap();
    play(&mut game, &[("g1", "f3"), ("g8", "f6")]);
    assert_eq!(game.execute(Command::End), Ok(Outcome::Ended));
    assert!(game.is_finished());
    assert!(game.board().has_king(Team::White) && game.board().has_king(Team::Black));
    assert_eq!(game.verdict(), Verdict::Draw);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_after_move() {
    let mut game = Game::new("view");
    game.execute(Command::Start).unwrap();
    play(&mut game, &[("b2", "b3")]);

    let cells = game.export(&ExportConfig::default());
    let idx = |s: &str| {
        let pos: Position = s.parse().unwrap();
        Position::all().iter().position(|p| *p == pos).unwrap()
    };
    assert_eq!(cells[idx("b3")], "white-p");
    assert_eq!(cells[idx("b2")], "");

    let console = game.export(&ExportConfig::console());
    assert_eq!(console[idx("b2")], ".");
}
