use std::io::Write;

use anyhow::Result;

use crate::{
    board::{Board, BoardError, GameResult, Pos, piece::Color},
    players::{Console, Player},
};

/// A placement that was applied to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub pos: Pos,
}

/// A game of Reversi between two players
pub struct Game<'p> {
    /// Board state
    board: Board,
    /// Move suppliers, black first
    players: [&'p mut dyn Player; 2],
    /// Color to move next
    turn: Color,
    /// History of moves made
    history: Vec<Move>,
}

impl<'p> Game<'p> {
    /// Creates a game on the starting board, black moves first
    pub fn new(black: &'p mut dyn Player, white: &'p mut dyn Player) -> Self {
        Self::with_board(Board::new(), black, white)
    }

    /// Creates a game on an arbitrary prepared board
    pub fn with_board(board: Board, black: &'p mut dyn Player, white: &'p mut dyn Player) -> Self {
        Self {
            board,
            players: [black, white],
            turn: Color::Black,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Passes the turn to the other color
    fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Applies a placement for the color to move and passes the turn on
    pub fn apply(&mut self, pos: Pos) -> Result<(), BoardError> {
        let color = self.turn;
        let flipped = self.board.place_piece(pos, color)?;
        log::debug!("{color} placed at {pos:?}, flipping {}", flipped.len());
        self.history.push(Move { color, pos });
        self.flip_turn();
        Ok(())
    }

    /// Runs the game to completion and reports the result
    ///
    /// A color with no legal move forfeits its turn without being asked for
    /// one. The game ends when neither color can move, which includes the
    /// full board.
    pub fn play(&mut self, console: &mut Console<'_>) -> Result<GameResult> {
        loop {
            if self.board.is_over() {
                writeln!(console, "{}", self.board)?;
                writeln!(console, "The game is over!")?;
                let result = self.board.winner();
                writeln!(console, "{result}")?;
                log::info!("Game over after {} moves: {result}", self.history.len());
                return Ok(result);
            }

            if !self.board.has_move(self.turn) {
                writeln!(console, "{} has no move!", self.turn)?;
                log::debug!("{} forfeits the turn", self.turn);
                self.flip_turn();
                continue;
            }

            self.play_turn(console)?;
        }
    }

    /// Shows the board and asks the player to move until a legal move arrives
    fn play_turn(&mut self, console: &mut Console<'_>) -> Result<()> {
        let color = self.turn;
        let moves = self.board.valid_moves(color).collect::<Vec<_>>();
        loop {
            writeln!(console, "{}", self.board)?;
            let pos = self.players[color as usize].choose_move(console, color, &moves)?;
            if self.board.valid_move(pos, color) {
                self.apply(pos)?;
                return Ok(());
            }
            writeln!(console, "Invalid move!")?;
        }
    }
}
