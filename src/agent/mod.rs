pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{Bot, BotConfig, Difficulty, Perspective, SearchResult};
