// Static evaluation: material only
// Returns score in pawns from the point of view of the reference color

use crate::game_repr::{Color, Piece, RulesEngine, Type};

const PAWN_VALUE: i32 = 1;
const KNIGHT_VALUE: i32 = 3;
const BISHOP_VALUE: i32 = 3;
const ROOK_VALUE: i32 = 5;
const QUEEN_VALUE: i32 = 9;
// Both kings are always on the board, so they cancel out
const KING_VALUE: i32 = 0;

/// Material value of a piece kind, shared with move ordering
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Signed value of a single piece: positive if it belongs to `reference`
fn signed_value(piece: Piece, reference: Color) -> i32 {
    let value = piece_value(piece.piece_type);
    if piece.is(reference) {
        value
    } else {
        -value
    }
}

/// Evaluate the board from `reference`'s point of view
///
/// # Arguments
/// * `engine` - Rules engine holding the position
/// * `reference` - Color whose advantage counts as positive
///
/// # Returns
/// Material balance; `evaluate(e, c) == -evaluate(e, c.opposite())` for every board
pub fn evaluate<E: RulesEngine>(engine: &E, reference: Color) -> i32 {
    engine
        .pieces()
        .into_iter()
        .map(|(_, piece)| signed_value(piece, reference))
        .sum()
}
