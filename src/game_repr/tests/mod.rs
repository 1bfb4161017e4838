use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to look up a cell by name
pub fn cell(name: &str) -> Cell {
    Cell::parse(name).unwrap_or_else(|| panic!("{} is not a cell", name))
}

/// Helper function to build a position from `Kg1 kg10 ...` entries
pub fn layout(pieces: &str, side_to_move: Color) -> Position {
    Position::from_layout(pieces, side_to_move).expect("valid layout")
}

/// Helper function to build a plain move from two cell names
pub fn mv(from: &str, to: &str) -> Move {
    Move::new(cell(from), cell(to))
}

/// Helper function to check if a destination is in a target list
pub fn has_target(targets: &[Cell], to: &str) -> bool {
    targets.contains(&cell(to))
}

/// Helper function to render a target list as sorted cell names
pub fn target_names(targets: &[Cell]) -> Vec<String> {
    let mut names: Vec<String> = targets.iter().map(|c| c.to_string()).collect();
    names.sort();
    names
}

// ==================== TEST MODULES ====================

mod check_detection;
mod checkmate;
mod promotion;
mod undo;
