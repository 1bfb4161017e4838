// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the move selector for hexagonal chess.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Fixed-depth minimax with alpha-beta pruning
// - Material evaluation with a king safety adjustment at the root
// - Capture and promotion ordering for better pruning

mod bot;
pub mod config;
pub mod evaluation;
pub mod king_safety;
pub mod minimax;
pub mod move_ordering;
pub mod search;

#[cfg(test)]
mod tests;

pub use bot::Bot;
pub use config::{BotConfig, Difficulty, Perspective, MAX_SEARCH_DEPTH};

// Re-export useful types
pub use minimax::SearchOutcome;
pub use search::{RootMoveScore, SearchResult};
