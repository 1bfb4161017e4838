// King safety adjustment for root moves
//
// A king move that escapes no attack and wins no material only walks the
// king around. Such moves keep their legality but lose a fixed amount of
// score at the root, so the search prefers developing other pieces.

use crate::game_repr::{Move, RulesEngine, Type};

/// Score taken off an unforced king move
pub const UNNECESSARY_KING_MOVE_PENALTY: i32 = 5;

/// What the position looked like for the king before the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingMoveAssessment {
    /// The king's origin is attacked by an opposing piece
    pub under_attack: bool,
    /// The destination holds an opposing piece
    pub capturing: bool,
    /// Neither origin nor destination is attacked by an opposing piece
    pub safe: bool,
}

impl KingMoveAssessment {
    pub fn is_unforced(&self) -> bool {
        !self.under_attack && !self.capturing && self.safe
    }

    pub fn penalty(&self) -> i32 {
        if self.is_unforced() {
            UNNECESSARY_KING_MOVE_PENALTY
        } else {
            0
        }
    }
}

/// Assess `mov` on the position it is played from
///
/// Returns `None` when the moving piece is not a king.
pub fn assess<E: RulesEngine>(engine: &E, mov: Move) -> Option<KingMoveAssessment> {
    let king = engine
        .piece_at(mov.from())
        .filter(|p| p.piece_type == Type::King)?;
    let enemy = king.color.opposite();

    let under_attack = engine.is_attacked(mov.from(), enemy);
    let capturing = engine.piece_at(mov.to()).map_or(false, |p| p.is(enemy));
    let safe = !under_attack && !engine.is_attacked(mov.to(), enemy);

    Some(KingMoveAssessment {
        under_attack,
        capturing,
        safe,
    })
}

/// Penalty for `mov`, zero for anything but an unforced king move
pub fn penalty<E: RulesEngine>(engine: &E, mov: Move) -> i32 {
    assess(engine, mov).map_or(0, |a| a.penalty())
}
