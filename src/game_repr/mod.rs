mod cell;
mod moves;
mod notation;
mod piece;
mod position;
mod rules;

#[cfg(test)]
mod tests;

pub use cell::*;
pub use moves::*;
pub use notation::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
