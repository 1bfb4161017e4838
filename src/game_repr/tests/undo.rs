use super::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== MOVE / UNDO TESTS ====================

#[test]
fn test_every_opening_move_round_trips() {
    let mut pos = Position::default();
    let board = *pos.board();

    for m in pos.all_legal_moves() {
        pos.mk_move(m);
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.unmake_move(), Some(m));
        assert_eq!(*pos.board(), board, "Undo of {} should restore the board", m);
        assert_eq!(pos.side_to_move(), Color::White);
    }
}

#[test]
fn test_capture_round_trip() {
    let mut pos = layout("Kg1 kg10 Rf4 qf8", Color::White);
    let board = *pos.board();

    pos.mk_move(mv("f4", "f8"));
    assert_eq!(pos.board().get(cell("f8")), Some(Piece::new(Color::White, Type::Rook)));

    pos.unmake_move();
    assert_eq!(*pos.board(), board);
}

#[test]
fn test_undo_on_fresh_position() {
    let mut pos = Position::default();
    assert_eq!(pos.unmake_move(), None);
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_random_games_unwind_to_start() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let mut pos = Position::default();
        let mut snapshots = vec![(*pos.board(), pos.side_to_move(), pos.en_passant())];

        for _ in 0..40 {
            let moves = pos.all_legal_moves();
            let Some(&m) = moves.choose(&mut rng) else {
                break;
            };
            pos.mk_move(m);
            snapshots.push((*pos.board(), pos.side_to_move(), pos.en_passant()));
        }

        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            pos.unmake_move().expect("history should not run out");
            assert_eq!((*pos.board(), pos.side_to_move(), pos.en_passant()), expected);
        }
        assert_eq!(pos.ply(), 0);
    }
}

// ==================== RULES ENGINE TRAIT TESTS ====================

#[test]
fn test_scoped_apply_undoes_on_drop() {
    let mut pos = Position::default();
    {
        let applied = pos.apply_scoped(mv("f5", "f6"));
        assert_eq!(applied.turn(), Color::Black);
        assert_eq!(applied.ply(), 1);
    }
    assert_eq!(pos.ply(), 0);
    assert_eq!(pos.turn(), Color::White);
}

#[test]
fn test_strict_play_rejects_illegal_move() {
    let mut pos = Position::default();
    let err = pos.play(mv("f5", "f8")).unwrap_err();
    assert_eq!(
        err,
        crate::error::RulesError::IllegalMove {
            mv: mv("f5", "f8"),
            turn: Color::White
        }
    );
    assert!(pos.play(mv("f5", "f7")).is_ok());
    assert_eq!(pos.turn(), Color::Black);
}

#[test]
fn test_color_flip_mirrors_setup() {
    let pos = Position::default();
    let flipped = pos.color_flipped();
    assert_eq!(flipped.side_to_move(), Color::Black);
    assert_eq!(flipped.board(), pos.board(), "Start position is symmetric");

    let pos = layout("Kg1 kg10 Qf4", Color::White);
    let flipped = pos.color_flipped();
    assert_eq!(
        flipped.board().get(cell("f8")),
        Some(Piece::new(Color::Black, Type::Queen))
    );
}
