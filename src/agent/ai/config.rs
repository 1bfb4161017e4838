//! Search configuration: which color the bot plays for and how deep it looks.

use crate::error::{EngineError, EngineResult};
use crate::game_repr::Color;
use std::str::FromStr;

/// Deepest search accepted; bounds the recursion and the running time
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// Which color's score the search maximizes
///
/// `Fixed` is a turn guard: when it is that color's turn the search is the
/// same as with `SideToMove`; on the other color's turn it refuses to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perspective {
    /// Always play for this color; searching on the other color's turn is an error
    Fixed(Color),
    /// Play for whichever side is to move
    #[default]
    SideToMove,
}

impl Perspective {
    /// The color to search for when `turn` is to move
    pub fn reference(&self, turn: Color) -> EngineResult<Color> {
        match *self {
            Perspective::SideToMove => Ok(turn),
            Perspective::Fixed(engine) if engine == turn => Ok(engine),
            Perspective::Fixed(engine) => Err(EngineError::NotEnginesTurn { engine, turn }),
        }
    }
}

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Only the root move and the resulting material
    #[default]
    Easy,
    /// Sees the opponent's reply
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Plies searched below each root move
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Expert => 3,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::from_name(s.trim()).ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotConfig {
    pub perspective: Perspective,
    pub difficulty: Difficulty,
}

impl BotConfig {
    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Reject depths deeper than [`MAX_SEARCH_DEPTH`]
pub fn check_depth(depth: u8) -> EngineResult<u8> {
    if depth > MAX_SEARCH_DEPTH {
        return Err(EngineError::InvalidDepth {
            input: depth.to_string(),
            reason: format!("must be at most {}", MAX_SEARCH_DEPTH),
        });
    }
    Ok(depth)
}

/// Parse a textual depth, rejecting negative, fractional and oversized values
pub fn parse_depth(input: &str) -> EngineResult<u8> {
    let trimmed = input.trim();
    let invalid = |reason: &str| EngineError::InvalidDepth {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.starts_with('-') {
        return Err(invalid("must not be negative"));
    }
    if trimmed.contains('.') && trimmed.parse::<f64>().is_ok() {
        return Err(invalid("must be a whole number of plies"));
    }
    let depth: u32 = trimmed.parse().map_err(|_| invalid("not a number"))?;
    let depth = u8::try_from(depth)
        .map_err(|_| invalid(&format!("must be at most {}", MAX_SEARCH_DEPTH)))?;
    check_depth(depth).map_err(|_| invalid(&format!("must be at most {}", MAX_SEARCH_DEPTH)))
}
