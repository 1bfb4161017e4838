use super::*;
use crate::game_repr::{Cell, Color, Move, Position};

// ==================== HELPER FUNCTIONS ====================

/// Helper function to look up a cell by name
pub fn cell(name: &str) -> Cell {
    Cell::parse(name).unwrap_or_else(|| panic!("{} is not a cell", name))
}

/// Helper function to build a plain move from two cell names
pub fn mv(from: &str, to: &str) -> Move {
    Move::new(cell(from), cell(to))
}

/// Helper function to build a position from `Kg1 kg10 ...` entries
pub fn layout(pieces: &str, side_to_move: Color) -> Position {
    Position::from_layout(pieces, side_to_move).expect("valid layout")
}

// ==================== TEST MODULES ====================
