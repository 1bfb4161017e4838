use clap::{Parser, ValueEnum};
use hexbot::agent::ai::config::parse_depth;
use hexbot::agent::{Bot, BotConfig, Difficulty, Perspective};
use hexbot::game_repr::Color;
use hexbot::EngineResult;
use std::process::ExitCode;

/// Pick a move for the side to move in a Glinski hexagonal chess game
#[derive(Parser, Debug)]
#[command(name = "hexbot", version)]
struct Cli {
    /// Plies searched below each root move (0 to 8)
    #[arg(short, long, conflicts_with = "difficulty", allow_hyphen_values = true)]
    depth: Option<String>,

    /// Easy, Medium, Hard or Expert; sets the depth when --depth is absent
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Which side the bot plays for
    #[arg(short, long, value_enum, default_value_t = Side::Side)]
    perspective: Side,

    /// Moves played so far, e.g. `1. f6 e6 2. c1d4`
    moves: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
    /// Whoever is to move
    Side,
}

impl From<Side> for Perspective {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Perspective::Fixed(Color::White),
            Side::Black => Perspective::Fixed(Color::Black),
            Side::Side => Perspective::SideToMove,
        }
    }
}

fn run(cli: Cli) -> EngineResult<String> {
    let depth = match &cli.depth {
        Some(text) => parse_depth(text)?,
        None => cli.difficulty.depth(),
    };

    let config = BotConfig::default()
        .with_perspective(cli.perspective.into())
        .with_difficulty(cli.difficulty);
    let mut bot = Bot::with_config(&cli.moves.join(" "), config)?;

    Ok(match bot.generate(depth)? {
        Some(mv) => mv.to_string(),
        None => "none".to_string(),
    })
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(answer) => {
            println!("{}", answer);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_argument() {
        let cli = Cli::try_parse_from(["hexbot", "--difficulty", "hard", "f6"]).unwrap();
        assert_eq!(cli.difficulty, Difficulty::Hard);

        let cli = Cli::try_parse_from(["hexbot", "f6"]).unwrap();
        assert_eq!(cli.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let err = Cli::try_parse_from(["hexbot", "--difficulty", "insane", "f6"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("insane"));
    }

    #[test]
    fn test_bad_depth_fails_run() {
        let cli = Cli::try_parse_from(["hexbot", "--depth", "-1", "f6"]).unwrap();
        assert!(matches!(run(cli), Err(hexbot::EngineError::InvalidDepth { .. })));
    }
}
