use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use reversi::{
    game::Game,
    players::{Console, Interactive, Player, RandomChoice},
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "reversi", version, about)]
struct Args {
    /// Who plays black (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,
    /// Who plays white
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,
    /// Seed for the random players, for reproducible games
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Print the final result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Reads moves from standard input
    Human,
    /// Chooses uniformly among the legal moves
    Random,
}

fn make_player(kind: PlayerKind, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(Interactive),
        PlayerKind::Random => Box::new(match seed {
            Some(seed) => RandomChoice::with_seed(seed),
            None => RandomChoice::new(),
        }),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let mut black = make_player(args.black, args.seed);
    // Offset so two seeded random players do not draw the same stream
    let mut white = make_player(args.white, args.seed.map(|seed| seed.wrapping_add(1)));

    let mut game = Game::new(black.as_mut(), white.as_mut());

    // The console borrows the standard streams for the whole session
    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        let mut console = Console::new(&mut input, &mut output);
        game.play(&mut console)?
    };

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
