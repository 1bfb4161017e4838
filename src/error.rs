//! Error types for the hexagonal engine
//!
//! Covers the three places input can be rejected: move records handed to
//! the constructor, strict moves played against the rules, and search
//! requests made to the bot.

use crate::game_repr::{Color, Move};
use thiserror::Error;

/// Errors while reading a move record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unreadable move token '{token}' at ply {ply}")]
    Unreadable { token: String, ply: usize },

    #[error("Move '{token}' at ply {ply} matches no legal move")]
    NoMatch { token: String, ply: usize },

    #[error("Move '{token}' at ply {ply} is ambiguous ({candidates} legal moves match)")]
    Ambiguous { token: String, ply: usize, candidates: usize },

    #[error("Unreadable layout entry '{token}' (expected piece letter and cell, e.g. Kg1)")]
    Layout { token: String },
}

/// Errors from strict move application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Illegal move {mv} for {turn} to move")]
    IllegalMove { mv: Move, turn: Color },

    #[error("Move {mv} has an invalid promotion")]
    InvalidPromotion { mv: Move },
}

/// Errors returned by the bot's public API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid search depth '{input}': {reason}")]
    InvalidDepth { input: String, reason: String },

    #[error("Unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
    UnknownDifficulty(String),

    #[error("Engine plays {engine} but it is {turn} to move")]
    NotEnginesTurn { engine: Color, turn: Color },

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Result type alias for bot operations
pub type EngineResult<T> = Result<T, EngineError>;
