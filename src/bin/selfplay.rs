use clap::Parser;
use hexbot::agent::{Bot, BotConfig, Difficulty, GameResult, Player, RandomPlayer};
use hexbot::game_repr::{Color, Position, RulesEngine};
use log::info;

/// Let two bots play each other after a few random opening moves
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
struct Args {
    /// Random plies played before the bots take over
    #[arg(long, default_value_t = 4)]
    opening: usize,

    /// Stop the game as a draw after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Seed for the random opening
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Difficulty of both bots
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,
}

/// Ask `player` for a move, check it on the referee board and pass it on
fn take_turn(referee: &mut Position, player: &mut dyn Player, opponent: &mut dyn Player) -> bool {
    let color = referee.side_to_move();
    let Some(mv) = player.get_move(color) else {
        return false;
    };
    if let Err(e) = referee.play(mv) {
        log::error!("{} played an illegal move: {}", player.name(), e);
        return false;
    }
    info!("{:>3}. {} {} {}", referee.ply(), color, player.name(), mv);
    opponent.opponent_moved(mv);
    true
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = BotConfig::default().with_difficulty(args.difficulty);

    let mut referee = Position::default();
    let mut white_random = RandomPlayer::new(Position::default(), args.seed);
    let mut black_random = RandomPlayer::new(Position::default(), args.seed.wrapping_add(1));

    while referee.ply() < args.opening {
        let ok = match referee.side_to_move() {
            Color::White => take_turn(&mut referee, &mut white_random, &mut black_random),
            Color::Black => take_turn(&mut referee, &mut black_random, &mut white_random),
        };
        if !ok {
            break;
        }
    }

    let mut white = Bot::from_engine(referee.clone(), config);
    let mut black = Bot::from_engine(referee.clone(), config);

    let result = loop {
        if let Some(result) = GameResult::from_position(&referee) {
            break result;
        }
        if referee.ply() >= args.max_plies {
            break GameResult::Draw;
        }
        let ok = match referee.side_to_move() {
            Color::White => take_turn(&mut referee, &mut white, &mut black),
            Color::Black => take_turn(&mut referee, &mut black, &mut white),
        };
        if !ok {
            break GameResult::Draw;
        }
    };

    white.game_ended(result);
    black.game_ended(result);
    info!("Game over after {} plies: {:?}", referee.ply(), result);
}
