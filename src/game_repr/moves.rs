use super::{Cell, Type};
use std::fmt;

/// A move between two cells. Promotion is fixed when the move is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Cell,
    to: Cell,
    promotion: Option<Type>,
}

impl Move {
    pub fn new(from: Cell, to: Cell) -> Move {
        Self { from, to, promotion: None }
    }

    pub fn with_promotion(from: Cell, to: Cell, promotion: Type) -> Move {
        Self { from, to, promotion: Some(promotion) }
    }

    pub fn from(&self) -> Cell {
        self.from
    }

    pub fn to(&self) -> Cell {
        self.to
    }

    pub fn promotion(&self) -> Option<Type> {
        self.promotion
    }

    /// Same source and destination, ignoring any promotion piece
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

/// Coordinate notation, e.g. `f5f6` or `e10f11=Q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char())?;
        }
        Ok(())
    }
}
