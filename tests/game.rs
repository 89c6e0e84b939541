use std::{collections::VecDeque, io};

use anyhow::{Result, anyhow};
use assert_matches::assert_matches;

use reversi::{
    board::{
        Board, BoardError, GameResult, Pos,
        piece::{Color, Piece},
    },
    game::{Game, Move},
    players::{Console, Interactive, Player, RandomChoice},
};

/// Test player that plays a fixed script and counts how often it is asked
struct Scripted {
    moves: VecDeque<Pos>,
    calls: usize,
}

impl Scripted {
    fn new(moves: &[Pos]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            calls: 0,
        }
    }
}

impl Player for Scripted {
    fn choose_move(
        &mut self,
        _console: &mut Console<'_>,
        color: Color,
        _moves: &[Pos],
    ) -> Result<Pos> {
        self.calls += 1;
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow!("Script exhausted for {color}"))
    }
}

#[test]
fn test_applying_a_move_flips_turn_and_records_history() {
    let mut black = Scripted::new(&[]);
    let mut white = Scripted::new(&[]);
    let mut game = Game::new(&mut black, &mut white);

    assert_eq!(game.turn(), Color::Black);
    game.apply([2, 3]).expect("Opening move should be legal");

    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board().scores(), [4, 1]);
    assert!(game.board().is_mine([3, 3], Color::Black).unwrap());
    assert_eq!(
        game.history(),
        &[Move {
            color: Color::Black,
            pos: [2, 3],
        }]
    );
}

#[test]
fn test_applying_an_illegal_move_changes_nothing() {
    let mut black = Scripted::new(&[]);
    let mut white = Scripted::new(&[]);
    let mut game = Game::new(&mut black, &mut white);

    let err = game.apply([0, 0]).unwrap_err();
    assert_matches!(err, BoardError::InvalidMove([0, 0], Color::Black));

    // Still black to move, nothing recorded
    assert_eq!(game.turn(), Color::Black);
    assert!(game.history().is_empty());
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_stuck_color_forfeits_without_being_asked() {
    // Black is stuck from the start, white has exactly one capture
    let board = Board::empty()
        .with_pieces(&[[0, 0]], Piece::new(Color::White))
        .unwrap()
        .with_pieces(&[[0, 1]], Piece::new(Color::Black))
        .unwrap();

    let mut black = Scripted::new(&[]);
    let mut white = Scripted::new(&[[0, 2]]);
    let mut output = Vec::new();

    let result = {
        let mut game = Game::with_board(board, &mut black, &mut white);
        let mut input = io::empty();
        let mut console = Console::new(&mut input, &mut output);
        game.play(&mut console).expect("Game should run to the end")
    };

    assert_eq!(black.calls, 0);
    assert_eq!(white.calls, 1);
    assert_eq!(
        result,
        GameResult::Winner {
            color: Color::White,
            scores: [0, 3],
        }
    );

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("black has no move!"));
    assert!(transcript.contains("The game is over!"));
    assert!(transcript.contains("Winner: white, black: 0, white: 3"));
}

#[test]
fn test_illegal_answers_are_retried_on_the_same_turn() {
    // Black has exactly one capture, the game ends right after it
    let board = Board::empty()
        .with_pieces(&[[0, 0]], Piece::new(Color::Black))
        .unwrap()
        .with_pieces(&[[0, 1]], Piece::new(Color::White))
        .unwrap();

    let mut black = Interactive;
    let mut white = Scripted::new(&[]);
    // A legal coordinate pair that is no valid move, garbage, then the move
    let mut input = io::Cursor::new("5, 5\nbanana\n0, 2\n");
    let mut output = Vec::new();

    let result = {
        let mut game = Game::with_board(board, &mut black, &mut white);
        let mut console = Console::new(&mut input, &mut output);
        game.play(&mut console).expect("Game should run to the end")
    };

    assert_eq!(
        result,
        GameResult::Winner {
            color: Color::Black,
            scores: [3, 0],
        }
    );
    assert_eq!(white.calls, 0);

    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(transcript.matches("Invalid move!").count(), 2);
    assert_eq!(
        transcript.matches("black, where do you want to move?").count(),
        3
    );
}

/// Runs a seeded random versus random game to completion
fn run_seeded(seed: u64) -> (GameResult, usize) {
    let mut black = RandomChoice::with_seed(seed);
    let mut white = RandomChoice::with_seed(seed.wrapping_add(1));
    let mut game = Game::new(&mut black, &mut white);

    let mut input = io::empty();
    let mut output = io::sink();
    let mut console = Console::new(&mut input, &mut output);
    let result = game.play(&mut console).expect("Game should run to the end");

    // The reported result agrees with the final board
    assert_eq!(game.board().winner(), result);

    (result, game.history().len())
}

#[test]
fn test_seeded_games_are_reproducible() {
    let (first, first_moves) = run_seeded(7);
    let (second, second_moves) = run_seeded(7);

    assert_eq!(first, second);
    assert_eq!(first_moves, second_moves);
}

#[test]
fn test_random_games_terminate_with_consistent_scores() {
    for seed in 0..10 {
        let (result, moves) = run_seeded(seed);

        // One piece enters the board per move, flips change nobody's total
        let scores = match result {
            GameResult::Winner { scores, .. } => scores,
            GameResult::Tie { scores } => scores,
        };
        assert_eq!(scores.iter().sum::<usize>(), 4 + moves);
        assert!(moves <= 60);
    }
}
