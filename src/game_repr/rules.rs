//! The contract between the search and whatever implements the game rules.
//!
//! The search never touches a concrete board type. It reads placement and
//! legal destinations through [`RulesEngine`] and mutates only through
//! [`RulesEngine::apply_scoped`], whose guard undoes the move when it goes
//! out of scope. A search path therefore cannot return while one of its
//! moves is still on the board, and while a guard is alive the borrow
//! checker keeps every other path away from the engine.

use super::*;
use crate::error::RulesError;
use std::ops::{Deref, DerefMut};

pub trait RulesEngine {
    fn piece_at(&self, cell: Cell) -> Option<Piece>;

    /// All occupied cells in a fixed, deterministic order
    fn pieces(&self) -> Vec<(Cell, Piece)>;

    fn turn(&self) -> Color;

    /// Legal destinations for the piece on `cell`, empty unless it belongs to the side to move
    fn moves(&self, cell: Cell) -> CellList;

    fn is_promotion_cell(&self, cell: Cell, color: Color) -> bool;

    /// Whether a piece of `by` could capture on `cell`, regardless of whose turn it is
    fn is_attacked(&self, cell: Cell, by: Color) -> bool;

    fn in_check(&self, color: Color) -> bool;

    /// Apply a move taken from `moves`. Must be paired with one `undo`.
    fn apply(&mut self, mv: Move);

    /// Reverse the most recent `apply`
    fn undo(&mut self) -> Option<Move>;

    /// Strict variant of `apply` that validates the move first
    fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        let turn = self.turn();
        let legal = self.piece_at(mv.from()).map_or(false, |p| p.is(turn))
            && self.moves(mv.from()).contains(&mv.to());
        if !legal {
            return Err(RulesError::IllegalMove { mv, turn });
        }
        if let Some(kind) = mv.promotion() {
            let promotes = self.piece_at(mv.from()).map_or(false, |p| p.piece_type == Type::Pawn)
                && self.is_promotion_cell(mv.to(), turn);
            if !promotes || matches!(kind, Type::King | Type::Pawn) {
                return Err(RulesError::InvalidPromotion { mv });
            }
        }
        self.apply(mv);
        Ok(())
    }

    /// Apply `mv` for the lifetime of the returned guard
    fn apply_scoped(&mut self, mv: Move) -> AppliedMove<'_, Self>
    where
        Self: Sized,
    {
        self.apply(mv);
        AppliedMove { engine: self }
    }
}

/// A move that is on the board until this guard is dropped
pub struct AppliedMove<'a, E: RulesEngine> {
    engine: &'a mut E,
}

impl<E: RulesEngine> Deref for AppliedMove<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.engine
    }
}

impl<E: RulesEngine> DerefMut for AppliedMove<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: RulesEngine> Drop for AppliedMove<'_, E> {
    fn drop(&mut self) {
        self.engine.undo();
    }
}

impl RulesEngine for Position {
    fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.board().get(cell)
    }

    fn pieces(&self) -> Vec<(Cell, Piece)> {
        self.board().pieces().collect()
    }

    fn turn(&self) -> Color {
        self.side_to_move()
    }

    fn moves(&self, cell: Cell) -> CellList {
        self.legal_targets(cell)
    }

    fn is_promotion_cell(&self, cell: Cell, color: Color) -> bool {
        is_promotion_cell(cell, color)
    }

    fn is_attacked(&self, cell: Cell, by: Color) -> bool {
        self.board().is_attacked(cell, by)
    }

    fn in_check(&self, color: Color) -> bool {
        Position::in_check(self, color)
    }

    fn apply(&mut self, mv: Move) {
        self.mk_move(mv);
    }

    fn undo(&mut self) -> Option<Move> {
        self.unmake_move()
    }
}
