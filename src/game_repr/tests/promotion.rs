use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_promotion_cells() {
    assert!(is_promotion_cell(cell("f11"), Color::White));
    assert!(is_promotion_cell(cell("a6"), Color::White));
    assert!(is_promotion_cell(cell("k7"), Color::White));
    assert!(!is_promotion_cell(cell("f10"), Color::White));

    assert!(is_promotion_cell(cell("f1"), Color::Black));
    assert!(is_promotion_cell(cell("l1"), Color::Black));
    assert!(!is_promotion_cell(cell("f11"), Color::Black));
}

#[test]
fn test_generated_promotion_is_queen() {
    let pos = layout("Pf10 Kg1 kl6", Color::White);
    let promotions: Vec<Move> = pos
        .all_legal_moves()
        .into_iter()
        .filter(|m| m.from() == cell("f10"))
        .collect();

    assert_eq!(promotions, vec![Move::with_promotion(cell("f10"), cell("f11"), Type::Queen)]);
}

#[test]
fn test_promotion_places_queen() {
    let mut pos = layout("Pk6 Kg1 kl6", Color::White);
    pos.mk_move(mv("k6", "k7"));
    assert_eq!(
        pos.board().get(cell("k7")),
        Some(Piece::new(Color::White, Type::Queen)),
        "Promotion without a piece should give a queen"
    );
}

#[test]
fn test_underpromotion_when_requested() {
    let mut pos = layout("pf2 Kl1 ka6", Color::Black);
    pos.mk_move(Move::with_promotion(cell("f2"), cell("f1"), Type::Knight));
    assert_eq!(
        pos.board().get(cell("f1")),
        Some(Piece::new(Color::Black, Type::Knight))
    );
}

#[test]
fn test_promotion_undo_restores_pawn() {
    let mut pos = layout("Pf10 Kg1 kl6", Color::White);
    pos.mk_move(Move::with_promotion(cell("f10"), cell("f11"), Type::Queen));
    pos.unmake_move();
    assert_eq!(
        pos.board().get(cell("f10")),
        Some(Piece::new(Color::White, Type::Pawn))
    );
    assert_eq!(pos.board().get(cell("f11")), None);
}

#[test]
fn test_strict_play_rejects_bad_promotion() {
    let mut pos = layout("Pf9 Kg1 kl6", Color::White);
    let err = pos
        .play(Move::with_promotion(cell("f9"), cell("f10"), Type::Queen))
        .unwrap_err();
    assert!(matches!(err, crate::error::RulesError::InvalidPromotion { .. }));

    let mut pos = layout("Pf10 Kg1 kl6", Color::White);
    let err = pos
        .play(Move::with_promotion(cell("f10"), cell("f11"), Type::King))
        .unwrap_err();
    assert!(matches!(err, crate::error::RulesError::InvalidPromotion { .. }));
    assert_eq!(pos.ply(), 0, "Rejected move should not be applied");
}
