//! Player trait and associated types for game agents.
//!
//! A player is anything that can be asked for a move: the search bot, or a
//! random mover used to open self-play games. Each player keeps its own
//! copy of the game and is told about the opponent's moves through
//! `opponent_moved`, so players never share a board.

use crate::agent::ai::Bot;
use crate::game_repr::{Color, Move, Position, RulesEngine};
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Game stopped without a result (move cap reached)
    Draw,
    /// Player to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The result if the game is over in `position`, None while it goes on
    pub fn from_position(position: &Position) -> Option<Self> {
        if position.is_checkmate() {
            Some(Self::from_winner(position.side_to_move().opposite()))
        } else if position.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }
}

/// Trait for entities that can provide moves.
///
/// `get_move()` must return a move that is legal in the player's own copy
/// of the game and play it there. The caller then reports it to the other
/// player through `opponent_moved()`.
pub trait Player {
    /// Request the next move from this player, None if it has none
    fn get_move(&mut self, color: Color) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    fn name(&self) -> String {
        "Player".to_string()
    }
}

impl<E: RulesEngine> Player for Bot<E> {
    fn get_move(&mut self, color: Color) -> Option<Move> {
        if self.engine().turn() != color {
            warn!("{} asked to move for {} on {}'s turn", self.name(), color, self.engine().turn());
            return None;
        }
        let mv = match self.generate_default() {
            Ok(mv) => mv?,
            Err(e) => {
                warn!("{}: {}", self.name(), e);
                return None;
            }
        };
        if let Err(e) = self.play(mv) {
            warn!("{}: {}", self.name(), e);
            return None;
        }
        Some(mv)
    }

    fn opponent_moved(&mut self, mv: Move) {
        if let Err(e) = self.play(mv) {
            warn!("{} could not follow opponent move: {}", self.name(), e);
        }
    }

    fn name(&self) -> String {
        format!("hexbot ({})", self.config().difficulty.name())
    }
}

/// Plays a uniformly random legal move
pub struct RandomPlayer {
    position: Position,
    rng: StdRng,
}

impl RandomPlayer {
    /// Start from `position` with a seeded generator, so games are reproducible
    pub fn new(position: Position, seed: u64) -> Self {
        Self {
            position,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, color: Color) -> Option<Move> {
        if self.position.side_to_move() != color {
            return None;
        }
        let moves = self.position.all_legal_moves();
        let mv = *moves.choose(&mut self.rng)?;
        self.position.mk_move(mv);
        Some(mv)
    }

    fn opponent_moved(&mut self, mv: Move) {
        if let Err(e) = self.position.play(mv) {
            warn!("random player could not follow opponent move: {}", e);
        }
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}
