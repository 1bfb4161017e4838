// Move generation and ordering for the search
//
// Moves come out of the rules engine per source cell. Pawn moves that end on
// a promotion cell are turned into queen promotions here, once, so every
// consumer sees the same `Move` value.

use crate::game_repr::{Move, RulesEngine, Type};
use super::evaluation::piece_value;
use smallvec::SmallVec;

pub type MoveList = SmallVec<[Move; 64]>;

/// Score for move ordering (higher = better)
#[derive(Debug, Clone, Copy)]
struct MoveScore {
    mov: Move,
    score: i32,
}

/// Score a single move for ordering purposes
///
/// Captures score `10 * victim - attacker` (most valuable victim, least
/// valuable attacker) and promotions add the value of the new piece.
/// Everything else scores 0.
pub fn score_move<E: RulesEngine>(engine: &E, mov: Move) -> i32 {
    let mut score = 0;

    if let (Some(attacker), Some(victim)) = (engine.piece_at(mov.from()), engine.piece_at(mov.to())) {
        if victim.color != attacker.color {
            score += 10 * piece_value(victim.piece_type) - piece_value(attacker.piece_type);
        }
    }

    if let Some(kind) = mov.promotion() {
        score += piece_value(kind);
    }

    score
}

/// Every legal move for the side to move, in the engine's enumeration order
///
/// Pawn moves onto the mover's promotion cells always promote to a queen.
pub fn legal_moves<E: RulesEngine>(engine: &E) -> MoveList {
    let turn = engine.turn();
    let mut moves = MoveList::new();

    for (from, piece) in engine.pieces() {
        if !piece.is(turn) {
            continue;
        }
        let promotes = piece.piece_type == Type::Pawn;
        for to in engine.moves(from) {
            if promotes && engine.is_promotion_cell(to, turn) {
                moves.push(Move::with_promotion(from, to, Type::Queen));
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Legal moves sorted best-guess first
///
/// The sort is stable: moves with equal scores keep enumeration order, so
/// the same position always yields the same ordering.
pub fn generate_ordered_moves<E: RulesEngine>(engine: &E) -> MoveList {
    let mut scored: SmallVec<[MoveScore; 64]> = legal_moves(engine)
        .into_iter()
        .map(|mov| MoveScore {
            mov,
            score: score_move(engine, mov),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored.into_iter().map(|ms| ms.mov).collect()
}
