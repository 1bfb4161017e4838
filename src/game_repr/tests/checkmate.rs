use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_queen_mate_in_corner() {
    let pos = layout("Ka1 qb2 kc3", Color::White);
    assert!(pos.in_check(Color::White));
    assert!(!pos.has_legal_moves());
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_unprotected_queen_can_be_taken() {
    let pos = layout("Ka1 qb2", Color::White);
    assert!(pos.in_check(Color::White));
    assert!(!pos.is_checkmate(), "King should capture the unprotected queen");
    assert_eq!(pos.all_legal_moves(), vec![mv("a1", "b2")]);
}

#[test]
fn test_start_position_is_not_checkmate() {
    let pos = Position::default();
    assert!(!pos.is_checkmate());
    assert!(!pos.is_stalemate());
}
