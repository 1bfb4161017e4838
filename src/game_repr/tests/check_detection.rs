use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_check_along_file() {
    let pos = layout("Kg1 rg9 kl6", Color::White);
    assert!(pos.in_check(Color::White), "Rook on g9 should check the king on g1");
    assert!(!pos.in_check(Color::Black));
}

#[test]
fn test_blocked_rook_gives_no_check() {
    let pos = layout("Kg1 rg9 Pg4 kl6", Color::White);
    assert!(!pos.in_check(Color::White), "Pawn on g4 should block the rook");
}

#[test]
fn test_bishop_check_on_diagonal() {
    let pos = layout("Kf6 bh5 ka1", Color::White);
    assert!(pos.in_check(Color::White));

    let pos = layout("Kf6 bg6 ka1", Color::White);
    assert!(!pos.in_check(Color::White), "g6 is an edge neighbour, not a diagonal");
}

#[test]
fn test_knight_check() {
    let pos = layout("Kf6 nh7 ka1", Color::White);
    assert!(pos.in_check(Color::White));
}

#[test]
fn test_pawn_check_only_from_capture_cells() {
    assert!(layout("Kf6 pe6 ka1", Color::White).in_check(Color::White));
    assert!(layout("Kf6 pg6 ka1", Color::White).in_check(Color::White));
    assert!(
        !layout("Kf6 pf7 ka1", Color::White).in_check(Color::White),
        "Pawn straight ahead does not attack"
    );
}

#[test]
fn test_is_attacked_ignores_side_to_move() {
    let pos = layout("Kg1 rg9 kl6", Color::Black);
    assert!(pos.board().is_attacked(cell("g1"), Color::Black));
    assert!(pos.board().is_attacked(cell("g5"), Color::Black));
    assert!(!pos.board().is_attacked(cell("f5"), Color::Black));
}

// ==================== LEGALITY UNDER CHECK TESTS ====================

#[test]
fn test_pinned_rook_stays_on_file() {
    let pos = layout("Kf1 Rf3 rf9 kl6", Color::White);
    assert_eq!(
        target_names(&pos.legal_targets(cell("f3"))),
        vec!["f2", "f4", "f5", "f6", "f7", "f8", "f9"]
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let pos = layout("Kf1 re9 kl6", Color::White);
    assert_eq!(
        target_names(&pos.legal_targets(cell("f1"))),
        vec!["f2", "g1", "g2"]
    );
}

#[test]
fn test_kings_never_touch() {
    let pos = layout("Kf5 kf7", Color::White);
    assert!(!has_target(&pos.legal_targets(cell("f5")), "f6"));
}
