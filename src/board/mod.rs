use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Move legality and capture resolution
pub mod moves;

/// Piece colors and the pieces themselves
pub mod piece;

use crate::board::piece::{COLOR_COUNT, Color, Piece};

/// Side length of the square board
pub const BOARD_SIZE: usize = 8;

/// Board coordinates as `[row, column]`, each in `0..BOARD_SIZE`
pub type Pos = [usize; 2];

/// Piece counts indexed by color, black first
pub type Scores = [usize; COLOR_COUNT];

/// Reversi board
/// Each cell is either empty or occupied by a single piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([Option<Piece>; BOARD_SIZE * BOARD_SIZE]);

/// Errors that can occur when accessing the board or placing a piece
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoardError {
    #[error("Position {0:?} is outside of the board")]
    InvalidPosition(Pos),
    #[error("Invalid move for {1} at {0:?}")]
    InvalidMove(Pos, Color),
}

/// Board indexing
/// Callers are expected to bounds check first, see [`Board::get`]
impl Index<Pos> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Pos) -> &Self::Output {
        let [row, col] = index;
        debug_assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Index out of bounds: [{row}, {col}]"
        );
        &self.0[row * BOARD_SIZE + col]
    }
}

impl IndexMut<Pos> for Board {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let [row, col] = index;
        debug_assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Index out of bounds: [{row}, {col}]"
        );
        &mut self.0[row * BOARD_SIZE + col]
    }
}

/// Board initialization
impl Board {
    /// Creates a board with all cells empty
    pub fn empty() -> Self {
        Self([None; BOARD_SIZE * BOARD_SIZE])
    }

    /// Creates a board with the four starting pieces placed in the center
    pub fn new() -> Self {
        let mut board = Self::empty();
        board[[3, 3]] = Some(Piece::new(Color::White));
        board[[3, 4]] = Some(Piece::new(Color::Black));
        board[[4, 3]] = Some(Piece::new(Color::Black));
        board[[4, 4]] = Some(Piece::new(Color::White));
        board
    }
}

impl Default for Board {
    /// Default board is the starting position
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Checks if a position is inside the board
    pub const fn is_valid_pos(pos: Pos) -> bool {
        pos[0] < BOARD_SIZE && pos[1] < BOARD_SIZE
    }

    /// Returns the piece at the specified position, `None` for an empty cell
    pub fn get(&self, pos: Pos) -> Result<Option<Piece>, BoardError> {
        if Self::is_valid_pos(pos) {
            Ok(self[pos])
        } else {
            Err(BoardError::InvalidPosition(pos))
        }
    }

    fn get_mut(&mut self, pos: Pos) -> Result<&mut Option<Piece>, BoardError> {
        if Self::is_valid_pos(pos) {
            Ok(&mut self[pos])
        } else {
            Err(BoardError::InvalidPosition(pos))
        }
    }

    /// Checks if the cell at the specified position holds a piece
    pub fn is_occupied(&self, pos: Pos) -> Result<bool, BoardError> {
        Ok(self.get(pos)?.is_some())
    }

    /// Checks if the cell at the specified position holds a piece of the given color
    pub fn is_mine(&self, pos: Pos, color: Color) -> Result<bool, BoardError> {
        Ok(self.get(pos)?.is_some_and(|piece| piece.color() == color))
    }

    /// Sets a piece on an empty cell
    pub fn set_piece(&mut self, pos: Pos, piece: Piece) -> Result<(), BoardError> {
        let cell = self.get_mut(pos)?;
        match cell {
            // Cell is already occupied
            Some(_) => Err(BoardError::InvalidMove(pos, piece.color())),
            // Cell is empty, place the piece
            None => {
                *cell = Some(piece);
                Ok(())
            }
        }
    }

    /// Places the given piece at the specified positions on the board
    pub fn place_pieces(&mut self, positions: &[Pos], piece: Piece) -> Result<(), BoardError> {
        for &pos in positions {
            self.set_piece(pos, piece)?;
        }
        Ok(())
    }

    /// Builder
    pub fn with_pieces(mut self, positions: &[Pos], piece: Piece) -> Result<Self, BoardError> {
        self.place_pieces(positions, piece)?;
        Ok(self)
    }
}

impl Board {
    /// Iterate on the positions of the pieces of a given color, in row major order
    pub fn positions_of(&self, color: Color) -> impl Iterator<Item = Pos> {
        self.0.iter().enumerate().filter_map(move |(i, cell)| {
            if cell.as_ref()?.color() == color {
                Some([i / BOARD_SIZE, i % BOARD_SIZE])
            } else {
                None
            }
        })
    }

    /// Number of pieces of a given color on the board
    pub fn count(&self, color: Color) -> usize {
        self.positions_of(color).count()
    }

    /// Piece counts of all colors, black first
    pub fn scores(&self) -> Scores {
        Color::variants().map(|color| self.count(color))
    }
}

/// Final outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GameResult {
    Winner { color: Color, scores: Scores },
    Tie { scores: Scores },
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner {
                color,
                scores: [black, white],
            } => write!(
                f,
                "Winner: {color}, {}: {black}, {}: {white}",
                Color::Black,
                Color::White
            ),
            GameResult::Tie { .. } => write!(f, "No winner, it's a tie!"),
        }
    }
}

impl Board {
    /// Checks if neither color has a legal move left
    pub fn is_over(&self) -> bool {
        Color::variants()
            .into_iter()
            .all(|color| !self.has_move(color))
    }

    /// Compares the piece counts and declares the winner, or a tie on equal counts
    /// Meaningful once [`Board::is_over`] holds, but callable at any point
    pub fn winner(&self) -> GameResult {
        let scores = self.scores();
        let [black, white] = scores;
        match black.cmp(&white) {
            Ordering::Greater => GameResult::Winner {
                color: Color::Black,
                scores,
            },
            Ordering::Less => GameResult::Winner {
                color: Color::White,
                scores,
            },
            Ordering::Equal => GameResult::Tie { scores },
        }
    }
}

/// Board display
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let cells = (0..BOARD_SIZE)
                .map(|col| match self[[row, col]] {
                    Some(piece) => piece.color().glyph(),
                    None => ' ',
                })
                .join(" | ");
            writeln!(f, " {cells} ")?;
            if row != BOARD_SIZE - 1 {
                writeln!(f, "{}", "-".repeat(4 * BOARD_SIZE))?;
            }
        }
        Ok(())
    }
}
