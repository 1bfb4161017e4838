// Minimax Search with Alpha-Beta Pruning
//
// Scores are always from the reference color's point of view. The
// maximizing flag says whether the side to move at this node is trying to
// raise that score (the reference color) or lower it (its opponent), and it
// flips at every ply.
//
// Alpha-beta window:
// - alpha: the score the maximizing side is already guaranteed elsewhere
// - beta: the score the minimizing side is already guaranteed elsewhere
// Once beta <= alpha the remaining siblings cannot change the result.
//
// Every move is applied through `apply_scoped`, so it is undone when the
// guard drops at the end of the loop body. Node counts travel back up in
// the return value.

use crate::game_repr::{Color, RulesEngine};
use super::evaluation::evaluate;
use super::move_ordering::legal_moves;

/// Larger than any reachable score, used as the open window bound
pub const INFINITY: i32 = 1_000_000;

/// Base score of a checkmate; the remaining depth is added so faster mates score higher
pub const MATE_SCORE: i32 = 10_000;

/// Score of a position where the side to move has no legal move and is not in check
pub const STALEMATE_SCORE: i32 = 0;

/// Value of a searched subtree plus the number of nodes it visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i32,
    pub nodes: u64,
}

impl SearchOutcome {
    fn leaf(value: i32) -> Self {
        Self { value, nodes: 1 }
    }
}

/// Score of a node whose side to move has no legal move
///
/// Checkmate is a loss for the side to move; stalemate is a draw. Both
/// stay strictly inside `(-INFINITY, INFINITY)`.
pub fn terminal_score<E: RulesEngine>(engine: &E, depth: u8, reference: Color) -> i32 {
    let to_move = engine.turn();
    if !engine.in_check(to_move) {
        return STALEMATE_SCORE;
    }
    let mate = MATE_SCORE + depth as i32;
    if to_move == reference {
        -mate
    } else {
        mate
    }
}

/// Minimax search with alpha-beta pruning
///
/// # Arguments
///
/// * `engine` - Position to search; restored before returning
/// * `depth` - Remaining plies (0 = evaluate this node)
/// * `alpha` - Lower bound already guaranteed to the maximizing side
/// * `beta` - Upper bound already guaranteed to the minimizing side
/// * `maximizing` - Whether the side to move wants the highest score
/// * `reference` - Color the scores are measured for
///
/// # Returns
///
/// The minimax value of the node and the nodes visited beneath it,
/// this node included.
pub fn minimax<E: RulesEngine>(
    engine: &mut E,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    reference: Color,
) -> SearchOutcome {
    // Window already closed by an ancestor: report the current bound
    if alpha >= beta {
        let value = if maximizing { alpha } else { beta };
        return SearchOutcome { value, nodes: 0 };
    }

    if depth == 0 {
        return SearchOutcome::leaf(evaluate(&*engine, reference));
    }

    let moves = legal_moves(&*engine);
    if moves.is_empty() {
        return SearchOutcome::leaf(terminal_score(&*engine, depth, reference));
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut nodes = 1;

    for mov in moves {
        let child = {
            let mut applied = engine.apply_scoped(mov);
            minimax(&mut *applied, depth - 1, alpha, beta, !maximizing, reference)
        };
        nodes += child.nodes;

        if maximizing {
            best = best.max(child.value);
            alpha = alpha.max(best);
        } else {
            best = best.min(child.value);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    SearchOutcome { value: best, nodes }
}
