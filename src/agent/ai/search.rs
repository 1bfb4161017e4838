// Root move selection
//
// Orders the root moves, searches each one a ply down with a window that
// is shared and tightened across siblings, adjusts king moves for safety
// and keeps the first move with the strictly highest score.

use crate::game_repr::{Color, Move, RulesEngine};
use super::king_safety;
use super::minimax::{minimax, SearchOutcome, INFINITY};
use super::move_ordering::generate_ordered_moves;
use log::{debug, info};
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Adjusted value of `best_move`, `-INFINITY` when there is no legal move
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new(depth: u8) -> Self {
        Self {
            best_move: None,
            score: -INFINITY,
            depth,
            nodes_searched: 0,
            time_ms: 0,
        }
    }
}

/// Raw and adjusted value of one root move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMoveScore {
    pub mov: Move,
    /// Value returned by the search below the move
    pub raw: i32,
    /// `raw` minus the king safety penalty
    pub adjusted: i32,
    pub nodes: u64,
}

/// Search one root move with the given window
fn search_root_move<E: RulesEngine>(
    engine: &mut E,
    mov: Move,
    depth: u8,
    alpha: i32,
    beta: i32,
    reference: Color,
) -> RootMoveScore {
    // Assessed on the position the move is played from
    let penalty = king_safety::penalty(&*engine, mov);

    let SearchOutcome { value, nodes } = {
        let mut applied = engine.apply_scoped(mov);
        minimax(&mut *applied, depth, alpha, beta, false, reference)
    };

    RootMoveScore {
        mov,
        raw: value,
        adjusted: value - penalty,
        nodes,
    }
}

/// Score a single root move with a fully open window
///
/// # Arguments
/// * `engine` - Position the move is played from
/// * `mov` - A legal move for the side to move
/// * `depth` - Plies searched below the move
/// * `reference` - Color the scores are measured for
pub fn score_root_move<E: RulesEngine>(engine: &mut E, mov: Move, depth: u8, reference: Color) -> RootMoveScore {
    search_root_move(engine, mov, depth, -INFINITY, INFINITY, reference)
}

/// Pick the best move for the side to move
///
/// # Arguments
/// * `engine` - Current position; restored before returning
/// * `depth` - Plies searched below each root move
/// * `reference` - Color the scores are measured for (normally the side to move)
///
/// # Returns
/// SearchResult containing the best move (None if there is no legal move)
/// and search statistics
pub fn search_root<E: RulesEngine>(engine: &mut E, depth: u8, reference: Color) -> SearchResult {
    let start_time = Instant::now();
    let mut result = SearchResult::new(depth);

    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for mov in generate_ordered_moves(&*engine) {
        let scored = search_root_move(engine, mov, depth, alpha, beta, reference);
        result.nodes_searched += scored.nodes;

        debug!("root move {}: value {} (raw {})", mov, scored.adjusted, scored.raw);

        if scored.adjusted > result.score {
            result.score = scored.adjusted;
            result.best_move = Some(mov);
        }

        alpha = alpha.max(result.score);
        if beta <= alpha {
            break;
        }
    }

    result.time_ms = start_time.elapsed().as_millis() as u64;

    // kNPS = nodes per millisecond
    let knps = result.nodes_searched / result.time_ms.max(1);
    info!(
        "searched {} plies in {} ms: {} nodes, {} kNPS",
        depth as u32 + 1,
        result.time_ms,
        result.nodes_searched,
        knps
    );

    result
}
