//! Bot - the move selector behind the public API
//!
//! A `Bot` owns one rules engine and searches it on request. The position
//! comes from a move record (empty for the starting position), and
//! `generate(depth)` returns the chosen move without playing it.
//!
//! # Examples
//!
//! ```
//! use hexbot::agent::ai::Bot;
//!
//! let mut bot = Bot::new("f6").unwrap();
//! let reply = bot.generate(0).unwrap();
//! assert!(reply.is_some());
//! ```

use crate::error::EngineResult;
use crate::game_repr::{Move, Position, RulesEngine};
use super::config::{check_depth, BotConfig};
use super::search::{search_root, SearchResult};

pub struct Bot<E: RulesEngine = Position> {
    engine: E,
    config: BotConfig,
}

impl Bot<Position> {
    /// Create a bot for the position reached by `record`
    ///
    /// # Arguments
    ///
    /// * `record` - Whitespace separated moves, e.g. `"1. f6 e6 2. Nd4"`; empty for the start position
    pub fn new(record: &str) -> EngineResult<Self> {
        Self::with_config(record, BotConfig::default())
    }

    pub fn with_config(record: &str, config: BotConfig) -> EngineResult<Self> {
        let position = Position::from_pgn(record)?;
        Ok(Self::from_engine(position, config))
    }

    /// Create a bot from a list of move tokens
    pub fn from_moves<I, S>(moves: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let record = moves
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&record)
    }

    pub fn position(&self) -> &Position {
        &self.engine
    }
}

impl<E: RulesEngine> Bot<E> {
    pub fn from_engine(engine: E, config: BotConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Search the current position and return the full result
    ///
    /// # Arguments
    ///
    /// * `depth` - Plies searched below each root move (0 = look at the root moves only)
    pub fn search(&mut self, depth: u8) -> EngineResult<SearchResult> {
        let depth = check_depth(depth)?;
        let reference = self.config.perspective.reference(self.engine.turn())?;
        Ok(search_root(&mut self.engine, depth, reference))
    }

    /// Chosen move for the side to move, or `None` if it has no legal move
    pub fn generate(&mut self, depth: u8) -> EngineResult<Option<Move>> {
        Ok(self.search(depth)?.best_move)
    }

    /// Search at the configured difficulty
    pub fn generate_default(&mut self) -> EngineResult<Option<Move>> {
        self.generate(self.config.difficulty.depth())
    }

    /// Play a move on the bot's position after checking it is legal
    pub fn play(&mut self, mv: Move) -> EngineResult<()> {
        self.engine.play(mv)?;
        Ok(())
    }
}
